//! Visited-pixel bookkeeping for one segmentation pass.

/// Width×height bitset tracking which pixels the flood fill has claimed.
///
/// Scoped to a single pass and never exposed outside the algorithm. One bit
/// per pixel, packed into u64 words.
pub(crate) struct VisitedMask {
    width: usize,
    words: Vec<u64>,
}

impl VisitedMask {
    pub(crate) fn new(width: usize, height: usize) -> Self {
        let bits = width * height;
        Self {
            width,
            words: vec![0u64; bits.div_ceil(64)],
        }
    }

    #[inline]
    fn bit(&self, x: usize, y: usize) -> (usize, u64) {
        let idx = y * self.width + x;
        (idx / 64, 1u64 << (idx % 64))
    }

    #[inline]
    pub(crate) fn get(&self, x: usize, y: usize) -> bool {
        let (word, mask) = self.bit(x, y);
        self.words[word] & mask != 0
    }

    #[inline]
    pub(crate) fn mark(&mut self, x: usize, y: usize) {
        let (word, mask) = self.bit(x, y);
        self.words[word] |= mask;
    }
}

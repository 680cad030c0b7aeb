//! Multi-source flood fill over the pixel-adjacency graph.
//!
//! The scan walks the frame in row-major order (y outer, x inner) and grows
//! one 8-connected component from every unvisited pixel matching the target
//! color. Growth uses a LIFO frontier with a fixed neighbor-offset table, so
//! the whole pass is deterministic for a given frame, target and thresholds:
//! the same regions come back in the same order with the same point order.
//!
//! A pixel is claimed for a region the moment it is discovered (pushed on
//! the frontier), the seed first. Components below the size threshold are
//! discarded but their pixels stay marked visited, so they are never
//! rescanned and cannot be claimed by a later seed.
//!
//! Each pixel is visited at most once, giving O(W·H) behavior per pass.
use super::mask::VisitedMask;
use super::params::FinderParams;
use crate::image::RgbFrame;
use crate::types::{Point, Region, Rgb};

/// 8-connected neighborhood, enumerated in fixed row-major order.
const NEIGH_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Whether two colors are similar enough to belong to the same region.
///
/// Per-channel absolute difference, every channel within `max_diff`. This is
/// a Chebyshev-style bound, not a Euclidean distance; substituting a
/// combined metric changes which pixels qualify.
#[inline]
pub fn color_match(a: Rgb, b: Rgb, max_diff: u8) -> bool {
    let d = max_diff as i16;
    (a.r as i16 - b.r as i16).abs() <= d
        && (a.g as i16 - b.g as i16).abs() <= d
        && (a.b as i16 - b.b as i16).abs() <= d
}

/// Raw output of one full-image scan.
pub(crate) struct ScanOutcome {
    /// Retained components, in seed discovery order.
    pub regions: Vec<Region>,
    /// Components found but below the size threshold.
    pub discarded: usize,
    /// Total matching pixels, retained or not.
    pub matched_pixels: usize,
}

/// Partition `frame` into 8-connected components of target-colored pixels.
pub(crate) fn scan_regions(frame: &RgbFrame, target: Rgb, params: &FinderParams) -> ScanOutcome {
    let (width, height) = (frame.width(), frame.height());
    let mut visited = VisitedMask::new(width, height);
    let mut regions = Vec::new();
    let mut discarded = 0usize;
    let mut matched_pixels = 0usize;
    let mut frontier: Vec<Point> = Vec::new();

    for y in 0..height {
        for x in 0..width {
            if visited.get(x, y) || !color_match(frame.get(x, y), target, params.max_color_diff) {
                continue;
            }

            let mut region = Region::with_capacity(params.min_region);
            let seed = Point::new(x, y);
            visited.mark(x, y);
            region.push(seed);
            frontier.push(seed);

            while let Some(p) = frontier.pop() {
                for (dx, dy) in NEIGH_OFFSETS {
                    let nx = p.x as isize + dx;
                    let ny = p.y as isize + dy;
                    if nx < 0 || ny < 0 {
                        continue;
                    }
                    let (nx, ny) = (nx as usize, ny as usize);
                    if nx >= width || ny >= height || visited.get(nx, ny) {
                        continue;
                    }
                    if color_match(frame.get(nx, ny), target, params.max_color_diff) {
                        visited.mark(nx, ny);
                        let neighbor = Point::new(nx, ny);
                        region.push(neighbor);
                        frontier.push(neighbor);
                    }
                }
            }

            matched_pixels += region.len();
            if region.len() >= params.min_region {
                regions.push(region);
            } else {
                discarded += 1;
            }
        }
    }

    ScanOutcome {
        regions,
        discarded,
        matched_pixels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn solid(width: usize, height: usize, px: Rgb) -> RgbFrame {
        let mut frame = RgbFrame::new(width, height);
        frame.fill_rect(0, 0, width.max(1) - 1, height.max(1) - 1, px);
        frame
    }

    fn params(max_color_diff: u8, min_region: usize) -> FinderParams {
        FinderParams {
            max_color_diff,
            min_region,
        }
    }

    #[test]
    fn color_match_is_per_channel() {
        let target = Rgb::new(100, 100, 100);
        assert!(color_match(Rgb::new(120, 80, 100), target, 20));
        // One channel over the bound fails even when the others are exact.
        assert!(!color_match(Rgb::new(121, 100, 100), target, 20));
        assert!(!color_match(Rgb::new(100, 100, 79), target, 20));
        assert!(color_match(target, target, 0));
    }

    #[test]
    fn single_component_covers_solid_frame() {
        let frame = solid(6, 4, Rgb::new(50, 60, 70));
        let out = scan_regions(&frame, Rgb::new(50, 60, 70), &params(0, 1));
        assert_eq!(out.regions.len(), 1);
        assert_eq!(out.regions[0].len(), 24);
        assert_eq!(out.matched_pixels, 24);
        assert_eq!(out.discarded, 0);
    }

    #[test]
    fn seed_is_first_point_and_membership_is_unique() {
        let frame = solid(5, 5, Rgb::new(10, 10, 10));
        let out = scan_regions(&frame, Rgb::new(10, 10, 10), &params(0, 1));
        let region = &out.regions[0];
        assert_eq!(region.points()[0], Point::new(0, 0));
        let unique: HashSet<_> = region.iter().collect();
        assert_eq!(unique.len(), region.len());
    }

    #[test]
    fn diagonal_pixels_join_one_component() {
        // Anti-diagonal of a 4x4 frame: 4-connected this is four components,
        // 8-connected it is one.
        let mut frame = RgbFrame::new(4, 4);
        for i in 0..4 {
            frame.set(i, 3 - i, Rgb::new(200, 0, 0));
        }
        let out = scan_regions(&frame, Rgb::new(200, 0, 0), &params(0, 1));
        assert_eq!(out.regions.len(), 1);
        assert_eq!(out.regions[0].len(), 4);
    }

    #[test]
    fn corner_seeds_stay_in_bounds() {
        let frame = solid(3, 3, Rgb::new(1, 2, 3));
        let out = scan_regions(&frame, Rgb::new(1, 2, 3), &params(0, 1));
        for p in out.regions[0].iter() {
            assert!(p.x < 3 && p.y < 3);
        }
    }

    #[test]
    fn discarded_components_are_counted_not_returned() {
        let mut frame = RgbFrame::new(8, 8);
        frame.set(0, 0, Rgb::new(255, 255, 255));
        frame.fill_rect(4, 4, 6, 6, Rgb::new(255, 255, 255));
        let out = scan_regions(&frame, Rgb::new(255, 255, 255), &params(0, 5));
        assert_eq!(out.regions.len(), 1);
        assert_eq!(out.regions[0].len(), 9);
        assert_eq!(out.discarded, 1);
        assert_eq!(out.matched_pixels, 10);
    }

    #[test]
    fn zero_sized_frame_scans_to_nothing() {
        let frame = RgbFrame::new(0, 0);
        let out = scan_regions(&frame, Rgb::new(0, 0, 0), &params(20, 1));
        assert!(out.regions.is_empty());
        assert_eq!(out.matched_pixels, 0);
    }

    #[test]
    fn scan_order_breaks_region_ordering_ties() {
        // Two separate blocks; the one whose seed appears first in row-major
        // order must come first in the result.
        let mut frame = RgbFrame::new(10, 4);
        frame.fill_rect(6, 0, 8, 1, Rgb::new(9, 9, 9));
        frame.fill_rect(0, 2, 2, 3, Rgb::new(9, 9, 9));
        let out = scan_regions(&frame, Rgb::new(9, 9, 9), &params(0, 1));
        assert_eq!(out.regions.len(), 2);
        assert_eq!(out.regions[0].points()[0], Point::new(6, 0));
        assert_eq!(out.regions[1].points()[0], Point::new(0, 2));
    }
}

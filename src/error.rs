use thiserror::Error;

/// Precondition failures of the [`crate::RegionFinder`] operations.
///
/// The segmentation itself is pure and deterministic; these are the only
/// observable error conditions. Degenerate inputs (zero-sized frame, no
/// matching pixels, everything matching) are valid and produce well-defined
/// results, not errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FinderError {
    /// Segmentation or recoloring was requested before a working image was
    /// set.
    #[error("no working image set")]
    MissingImage,
    /// Recoloring was requested before any segmentation pass ran.
    #[error("find_regions has not been run for the current image")]
    MissingRegions,
}

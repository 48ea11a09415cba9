//! Error types for the inkglyph segmentation library.

use thiserror::Error;

/// Primary error type for the extraction pipeline.
///
/// These are internal steering errors: the public entry point absorbs every
/// one of them by switching to the fallback slicer (and ultimately to an
/// empty sample map), so callers of [`crate::extract_characters`] never see
/// them. They stay public for callers driving the pipeline stages directly.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("non-finite coordinate in drawing: ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },

    #[error("degenerate normalization scale: {scale}")]
    DegenerateScale { scale: f64 },
}

/// Convenience Result type alias for ExtractError.
pub type Result<T> = std::result::Result<T, ExtractError>;

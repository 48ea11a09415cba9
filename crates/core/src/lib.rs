//! inkglyph - handwriting character segmentation for custom font building.
//!
//! Takes one continuous freehand drawing of a sentence and the characters it
//! is supposed to contain, and produces an isolated, normalized drawing per
//! character:
//! - strokes are detected by pen-lift gaps in the point sequence,
//! - stroke clusters become hypothesized character regions, split or merged
//!   until their count matches the expected text,
//! - regions are matched left to right against the expected characters,
//! - connector strokes between letters are stripped,
//! - and each surviving point cloud is centered and rescaled into a canonical
//!   fraction of the canvas frame.
//!
//! The whole pipeline is a pure function over an in-memory point list; it
//! never fails outward. See [`extract_characters`].

pub mod clusters;
pub mod error;
pub mod extract;
pub mod geometry;
pub mod model;
pub mod normalize;
pub mod params;
pub mod strokes;

pub use error::{ExtractError, Result};
pub use extract::{extract_characters, extract_characters_with_params, fallback_extraction};
pub use model::{DrawingData, DrawingPoint, SampleMap};
pub use params::ExtractParams;

//! Parameters for the segmentation pipeline.

/// Tuning thresholds for character extraction.
///
/// The defaults were tuned against mouse and stylus captures on a roughly
/// 400-unit canvas; all distances are in canvas units.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractParams {
    /// Consecutive points further apart than this are treated as a pen lift
    /// and start a new stroke.
    pub pen_lift_distance: f64,

    /// Strokes with this many points or fewer are discarded as noise.
    pub min_stroke_points: usize,

    /// Strokes closer to the anchor than this (horizontal edge-to-edge gap)
    /// may join the anchor's cluster.
    pub group_gap: f64,

    /// Minimum vertical overlap ratio (overlap length over the taller of the
    /// two strokes) for a stroke to join the anchor's cluster.
    pub min_vertical_overlap: f64,

    /// Clusters narrower than this are never split; they are likely a single
    /// character already.
    pub min_split_width: f64,

    /// Estimated width of one drawn character, used to size split counts.
    pub est_char_width: f64,

    /// A stroke wider than this multiple of its height is a connector
    /// candidate during isolation.
    pub connector_aspect: f64,

    /// Connector strokes must also be shorter than this.
    pub connector_max_height: f64,

    /// Fraction of the canvas a normalized character fills.
    pub fill_ratio: f64,
}

impl Default for ExtractParams {
    fn default() -> Self {
        Self {
            pen_lift_distance: 15.0,
            min_stroke_points: 2,
            group_gap: 30.0,
            min_vertical_overlap: 0.3,
            min_split_width: 50.0,
            est_char_width: 30.0,
            connector_aspect: 4.0,
            connector_max_height: 20.0,
            fill_ratio: 0.8,
        }
    }
}

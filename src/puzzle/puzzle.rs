use serde::{Serialize, Deserialize};

use crate::puzzle::properties::LayerProperties;

/// One generated puzzle: everything the statement prints.
///
/// `layers` is indexed by boundary (0 = input edge, last = output edge).
/// `required_accuracy` and `required_time` are the thresholds candidates
/// are judged against; the answer widths used to derive them are not kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Puzzle {
    pub inputs: u32,
    pub outputs: u32,
    pub layers: Vec<LayerProperties>,
    pub required_accuracy: u32,
    pub required_time: u32,
    /// Mock module count; multiplies every candidate's layer time.
    pub modules: u32,
    /// Mock indicator count; each indicator adds a flat 300 ms.
    pub indicators: u32,
}

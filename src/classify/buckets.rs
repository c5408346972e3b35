use serde::{Serialize, Deserialize};

/// Tally of swept candidates by accuracy/time quadrant.
///
/// Labels encode (accuracy below / at-or-above required) ×
/// (time at-or-below / above required): `lls` is too inaccurate but within
/// the time budget, `gls` satisfies both thresholds, `ggs` misses both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketCounts {
    pub lls: u32,
    pub lgs: u32,
    pub gls: u32,
    pub ggs: u32,
}

impl BucketCounts {
    pub fn total(&self) -> u32 {
        self.lls + self.lgs + self.gls + self.ggs
    }
}

use serde::{Serialize, Deserialize};

/// Coefficient pair attached to one layer boundary.
///
/// Both values are integers scaled by 100: a stored rate of `150` reads as
/// `1.5` in the puzzle statement. Rates and delays are sampled in 1..=999.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerProperties {
    pub convergence_rate: u32,
    pub delay: u32,
}

pub mod generator;
pub mod properties;
pub mod puzzle;
pub mod targets;

pub use generator::generate_puzzle;
pub use properties::LayerProperties;
pub use puzzle::Puzzle;

/// Hidden layers in every generated puzzle.
pub const LAYERS_COUNT: usize = 4;

/// Layer boundaries, counting the input and output edges.
pub const BOUNDARIES: usize = LAYERS_COUNT + 1;

pub mod math;
pub mod puzzle;
pub mod classify;
pub mod report;

// Convenience re-exports
pub use math::hundredths::ceil100;
pub use puzzle::properties::LayerProperties;
pub use puzzle::puzzle::Puzzle;
pub use puzzle::generator::generate_puzzle;
pub use classify::buckets::BucketCounts;
pub use classify::sweep::classify;

pub mod report;

pub use report::{write_buckets, write_puzzle};

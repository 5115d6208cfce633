use thiserror::Error;

mod strategy;
mod summary;
mod table;

/// Construction is the only fallible operation; once a table exists,
/// growth always makes progress and nothing else can fail.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("initial capacity must be positive, got {got}")]
    InvalidCapacity { got: usize },
}

pub use strategy::{HashStrategy, SumOfCodepoints, WellMixedStringHash};
pub use summary::DistributionSummary;
pub use table::HashTable;

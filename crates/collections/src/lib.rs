//! Separate-chaining hash table over string keys with pluggable hash
//! strategies, collision accounting and bucket-distribution analytics.

pub mod hashtable;

pub use hashtable::{
    DistributionSummary, HashStrategy, HashTable, SumOfCodepoints, TableError,
    WellMixedStringHash,
};

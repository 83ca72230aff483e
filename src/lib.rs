//! all-changes - every change that went into a build
//!
//! Walks the fingerprinted dependency graph behind a build and folds the
//! change logs of all contributing builds into one deduplicated report.

pub mod aggregate;
pub mod changes;
pub mod error;
pub mod history;
pub mod types;

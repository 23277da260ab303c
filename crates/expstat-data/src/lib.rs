//! Filesystem layer for expstat.
//!
//! Responsible for discovering `.log` files under a root directory, scanning
//! them line-by-line for marker strings, aggregating the extracted values
//! into per-file summary statistics and appending the formatted report.

pub mod aggregator;
pub mod extractor;
pub mod pipeline;
pub mod report;
pub mod scanner;

pub use expstat_core as core;

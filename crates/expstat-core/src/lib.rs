//! Core types for expstat.
//!
//! Configuration (CLI settings), the shared error type, ordered marker
//! matching and summary statistics used by the data layer and the binary.

pub mod error;
pub mod markers;
pub mod settings;
pub mod stats;

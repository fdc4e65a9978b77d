//! Shared utilities
//!
//! - `logging`: `tracing` subscriber setup used by the binary

pub mod logging;

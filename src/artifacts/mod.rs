//! Block project data structures and diff algorithms
//!
//! - `core`: shared utilities (logging setup)
//! - `snapshot`: block maps and script discovery
//! - `projection`: script to text rendering
//! - `matcher`: pairing of old and new scripts
//! - `diff`: line diff, merge, balancing and diff records
//! - `project`: `project.json` parsing and per-target comparison

pub mod core;
pub mod diff;
pub mod matcher;
pub mod project;
pub mod projection;
pub mod snapshot;

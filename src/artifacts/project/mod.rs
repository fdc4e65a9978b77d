//! Project files and per-target comparison
//!
//! - `target`: `project.json` parsing into sprites and the stage
//! - `costume`: costume lists and their changes
//! - `project_diff`: script and costume diffs for every target of two projects

pub mod costume;
pub mod project_diff;
pub mod target;

//! Script diffing
//!
//! The pipeline runs per pair of scripts:
//!
//! - `text_line`: numbered lines of projected script text
//! - `line_diff`: LCS alignment of two line sequences into an edit script
//! - `merge`: expansion of an edit script into one annotated sequence
//! - `balancer`: repair of compound block openers against `end` closers
//! - `record`: per-script diff records and their status
//! - `status_filter`: selection of records by status
//! - `script_differ`: the whole pipeline over two snapshots

pub mod balancer;
pub mod line_diff;
pub mod merge;
pub mod record;
pub mod script_differ;
pub mod status_filter;
pub mod text_line;

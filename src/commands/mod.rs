//! Command implementations
//!
//! Each command is an `impl Session` block under `porcelain`:
//!
//! - `scripts`: per-script diff of two projects, as text or JSON
//! - `summary`: one commit-message line per changed target

pub mod porcelain;

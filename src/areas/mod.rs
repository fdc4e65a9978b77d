//! Application state around the diff engine
//!
//! - `session`: one CLI invocation (output writer, differ, colour choice)
//! - `workspace`: locating and loading project files

pub mod session;
pub(crate) mod workspace;

//! Block graph snapshots
//!
//! - `block`: a single block descriptor as stored in `project.json`
//! - `project_snapshot`: the ordered block map of one target
//! - `script_handle`: top-level script discovery (the script extractor)

pub mod block;
pub mod project_snapshot;
pub mod script_handle;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("invalid project JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("expected a JSON object for {what}")]
    NotAnObject { what: &'static str },
    #[error("project has no `targets` array")]
    MissingTargets,
    #[error("target #{position} has no name")]
    UnnamedTarget { position: usize },
    #[error("costume #{position} of {target} has no name")]
    UnnamedCostume { target: String, position: usize },
    #[error("block {id} is malformed: {message}")]
    MalformedBlock { id: String, message: String },
}

//! Text projection of scripts
//!
//! A projection turns the block tree below a hat block into human readable,
//! line-oriented text. The diff engine only relies on the [`TextProjection`]
//! signature and on identical scripts projecting to identical text.
//!
//! - `outline`: built-in English renderer in a scratchblocks-like syntax
//! - `opcode_table`: per-opcode templates used by the outline renderer

pub mod opcode_table;
pub mod outline;

use crate::artifacts::snapshot::project_snapshot::ProjectSnapshot;
use crate::artifacts::snapshot::script_handle::ScriptHandle;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    #[error("block {id} is referenced but missing from the snapshot")]
    MissingBlock { id: String },
    #[error("block {id} is reachable from itself")]
    Cycle { id: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionOptions {
    /// Language of the rendered text; renderers that cannot translate ignore it
    pub locale: String,
    /// Prepended once per nesting level inside C-blocks
    pub indent: String,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        ProjectionOptions {
            locale: "en".to_string(),
            indent: String::new(),
        }
    }
}

pub trait TextProjection: Send + Sync {
    fn project(
        &self,
        script: &ScriptHandle,
        snapshot: &ProjectSnapshot,
        options: &ProjectionOptions,
    ) -> Result<String, ProjectionError>;
}

impl<F> TextProjection for F
where
    F: Fn(&ScriptHandle, &ProjectSnapshot, &ProjectionOptions) -> Result<String, ProjectionError>
        + Send
        + Sync,
{
    fn project(
        &self,
        script: &ScriptHandle,
        snapshot: &ProjectSnapshot,
        options: &ProjectionOptions,
    ) -> Result<String, ProjectionError> {
        self(script, snapshot, options)
    }
}

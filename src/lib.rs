//! Script-level diffing for block-based projects
//!
//! The crate compares two snapshots of a Scratch-style project and reports,
//! per sprite or stage, which top-level scripts were added, removed or
//! modified, together with a merged, origin-tagged rendering of each script
//! that a presentation layer can highlight.
//!
//! - `artifacts`: the pure diff engine (snapshots, projection, matching,
//!   line diff, merge, structural balancing, record assembly)
//! - `areas`: file loading and the output session used by the CLI
//! - `commands`: user-facing commands built on top of the two

pub mod areas;
pub mod artifacts;
pub mod commands;

pub use artifacts::diff::balancer::{BalanceMode, Balancer};
pub use artifacts::diff::line_diff::{DiffAlgorithm, Edit, EditScript, LcsDiff};
pub use artifacts::diff::merge::{AnnotatedLine, AnnotatedSequence, LineOrigin};
pub use artifacts::diff::record::{DiffStatus, ScriptDiffRecord};
pub use artifacts::diff::script_differ::{DiffOptions, ScriptDiffer};
pub use artifacts::diff::status_filter::StatusFilter;
pub use artifacts::diff::text_line::{LineSequence, TextLine};
pub use artifacts::matcher::{PositionalMatcher, ScriptMatcher, SortedMatcher};
pub use artifacts::project::costume::{Costume, CostumeChange, CostumeChangeKind};
pub use artifacts::project::project_diff::{ProjectDiff, TargetDiff};
pub use artifacts::project::target::{ProjectFile, Target};
pub use artifacts::projection::outline::OutlineProjection;
pub use artifacts::projection::{ProjectionError, ProjectionOptions, TextProjection};
pub use artifacts::snapshot::project_snapshot::ProjectSnapshot;
pub use artifacts::snapshot::script_handle::ScriptHandle;

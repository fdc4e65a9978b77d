//! Script-level diff pipeline
//!
//! [`ScriptDiffer`] ties the stages together for one pair of snapshots:
//! extract scripts, project them to lines, pair them, then assemble a record
//! for every pair that changed. It holds no mutable state, so one differ can
//! serve any number of comparisons, from several threads at once.

use crate::artifacts::diff::balancer::{BalanceMode, Balancer};
use crate::artifacts::diff::line_diff::{DEFAULT_MAX_TABLE_CELLS, DiffAlgorithm, EditScript, LcsDiff};
use crate::artifacts::diff::record::{RecordAssembler, ScriptDiffRecord};
use crate::artifacts::diff::text_line::{LineSequence, lines_from_text};
use crate::artifacts::matcher::{PositionalMatcher, ProjectedScript, ScriptMatcher, ScriptPair};
use crate::artifacts::projection::outline::OutlineProjection;
use crate::artifacts::projection::{ProjectionOptions, TextProjection};
use crate::artifacts::snapshot::project_snapshot::ProjectSnapshot;
use crate::artifacts::snapshot::script_handle::extract_scripts;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffOptions {
    pub balance_mode: BalanceMode,
    /// Largest LCS table computed before falling back to a coarse diff
    pub max_table_cells: usize,
    pub projection: ProjectionOptions,
}

impl Default for DiffOptions {
    fn default() -> Self {
        DiffOptions {
            balance_mode: BalanceMode::default(),
            max_table_cells: DEFAULT_MAX_TABLE_CELLS,
            projection: ProjectionOptions::default(),
        }
    }
}

pub struct ScriptDiffer {
    projection: Box<dyn TextProjection>,
    matcher: Box<dyn ScriptMatcher>,
    options: DiffOptions,
}

impl ScriptDiffer {
    pub fn new(projection: Box<dyn TextProjection>, options: DiffOptions) -> Self {
        ScriptDiffer {
            projection,
            matcher: Box::new(PositionalMatcher),
            options,
        }
    }

    pub fn with_matcher(mut self, matcher: Box<dyn ScriptMatcher>) -> Self {
        self.matcher = matcher;
        self
    }

    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    /// Project every script of a snapshot.
    ///
    /// A script that cannot be projected is kept with empty text, so it still
    /// takes part in pairing.
    pub fn project(&self, snapshot: &ProjectSnapshot) -> Vec<ProjectedScript> {
        extract_scripts(snapshot)
            .into_iter()
            .map(|handle| {
                let text = self
                    .projection
                    .project(&handle, snapshot, &self.options.projection)
                    .unwrap_or_else(|err| {
                        tracing::warn!(script = %handle.id, error = %err, "projection failed, using empty text");
                        String::new()
                    });
                ProjectedScript::new(handle, lines_from_text(&text))
            })
            .collect()
    }

    pub fn pair(&self, old: &ProjectSnapshot, new: &ProjectSnapshot) -> Vec<ScriptPair> {
        self.matcher.pair(self.project(old), self.project(new))
    }

    pub fn diff(&self, old: &ProjectSnapshot, new: &ProjectSnapshot) -> Vec<ScriptDiffRecord> {
        let assembler = RecordAssembler::new(Balancer::new(self.options.balance_mode))
            .with_max_table_cells(self.options.max_table_cells);

        let records = self
            .pair(old, new)
            .iter()
            .filter_map(|pair| {
                let record = assembler.assemble(pair);
                if let Some(record) = &record {
                    tracing::debug!(
                        position = pair.position,
                        status = record.status.as_str(),
                        added = record.added_count(),
                        removed = record.removed_count(),
                        "script changed"
                    );
                }
                record
            })
            .collect::<Vec<_>>();

        tracing::debug!(records = records.len(), "script diff complete");
        records
    }

    /// Line diff of two already projected scripts
    pub fn diff_lines(&self, old: &LineSequence, new: &LineSequence) -> EditScript {
        LcsDiff::new(old, new)
            .with_max_table_cells(self.options.max_table_cells)
            .diff()
    }
}

impl Default for ScriptDiffer {
    fn default() -> Self {
        Self::new(Box::new(OutlineProjection), DiffOptions::default())
    }
}

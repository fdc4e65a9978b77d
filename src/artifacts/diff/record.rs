use crate::artifacts::diff::balancer::Balancer;
use crate::artifacts::diff::line_diff::{DEFAULT_MAX_TABLE_CELLS, DiffAlgorithm, Edit, LcsDiff};
use crate::artifacts::diff::merge::{AnnotatedLine, AnnotatedSequence, LineOrigin, annotate, merge};
use crate::artifacts::diff::status_filter::StatusFilter;
use crate::artifacts::diff::text_line::{LineSequence, TextLine};
use crate::artifacts::matcher::ScriptPair;
use crate::artifacts::snapshot::block::BlockId;
use derive_new::new;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffStatus {
    Added,
    Removed,
    Modified,
}

impl DiffStatus {
    pub fn status_char(&self) -> char {
        match self {
            DiffStatus::Added => 'A',
            DiffStatus::Removed => 'D',
            DiffStatus::Modified => 'M',
        }
    }

    pub fn matches_filter(&self, filter: StatusFilter) -> bool {
        match self {
            DiffStatus::Added => filter.contains(StatusFilter::ADDED),
            DiffStatus::Removed => filter.contains(StatusFilter::REMOVED),
            DiffStatus::Modified => filter.contains(StatusFilter::MODIFIED),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DiffStatus::Added => "added",
            DiffStatus::Removed => "removed",
            DiffStatus::Modified => "modified",
        }
    }
}

/// Inserted and deleted lines of one edit script
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LineEdits {
    pub added: Vec<TextLine>,
    pub removed: Vec<TextLine>,
}

impl LineEdits {
    pub fn from_edits(edits: &[Edit]) -> Self {
        let mut line_edits = Self::default();
        for edit in edits {
            match edit {
                Edit::Insert { new } => line_edits.added.push(new.clone()),
                Edit::Delete { old } => line_edits.removed.push(old.clone()),
                Edit::Keep { .. } => {}
            }
        }
        line_edits
    }

    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptDiffRecord {
    /// Index of the script in the snapshot it was taken from; the old one for
    /// removed scripts, the new one otherwise
    pub script_no: usize,
    pub status: DiffStatus,
    pub old_script: Option<BlockId>,
    pub new_script: Option<BlockId>,
    pub old_lines: LineSequence,
    pub new_lines: LineSequence,
    pub edits: LineEdits,
    pub merged: AnnotatedSequence,
}

impl ScriptDiffRecord {
    pub fn added_count(&self) -> usize {
        self.edits.added.len()
    }

    pub fn removed_count(&self) -> usize {
        self.edits.removed.len()
    }

    pub fn merged_text(&self) -> String {
        self.merged
            .iter()
            .map(AnnotatedLine::indented)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Turns classified script pairs into diff records
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct RecordAssembler {
    balancer: Balancer,
    #[new(value = "DEFAULT_MAX_TABLE_CELLS")]
    max_table_cells: usize,
}

impl RecordAssembler {
    pub fn with_max_table_cells(mut self, max_table_cells: usize) -> Self {
        self.max_table_cells = max_table_cells;
        self
    }

    pub fn assemble(&self, pair: &ScriptPair) -> Option<ScriptDiffRecord> {
        match (&pair.old, &pair.new) {
            (Some(old), Some(new)) => {
                let edits = LcsDiff::new(&old.lines, &new.lines)
                    .with_max_table_cells(self.max_table_cells)
                    .diff();
                let line_edits = LineEdits::from_edits(&edits);
                if line_edits.is_empty() {
                    return None;
                }

                Some(ScriptDiffRecord {
                    script_no: new.handle.position,
                    status: DiffStatus::Modified,
                    old_script: Some(old.handle.id.clone()),
                    new_script: Some(new.handle.id.clone()),
                    old_lines: old.lines.clone(),
                    new_lines: new.lines.clone(),
                    edits: line_edits,
                    merged: self.balancer.balance(merge(&edits)),
                })
            }
            (None, Some(new)) => Some(ScriptDiffRecord {
                script_no: new.handle.position,
                status: DiffStatus::Added,
                old_script: None,
                new_script: Some(new.handle.id.clone()),
                old_lines: Vec::new(),
                new_lines: new.lines.clone(),
                edits: LineEdits {
                    added: new.lines.clone(),
                    removed: Vec::new(),
                },
                merged: self.balancer.balance(annotate(&new.lines, LineOrigin::Added)),
            }),
            (Some(old), None) => Some(ScriptDiffRecord {
                script_no: old.handle.position,
                status: DiffStatus::Removed,
                old_script: Some(old.handle.id.clone()),
                new_script: None,
                old_lines: old.lines.clone(),
                new_lines: Vec::new(),
                edits: LineEdits {
                    added: Vec::new(),
                    removed: old.lines.clone(),
                },
                merged: annotate(&old.lines, LineOrigin::Removed),
            }),
            (None, None) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::diff::balancer::{BalanceMode, MarkerKind};
    use crate::artifacts::matcher::fixtures::script;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn assembler() -> RecordAssembler {
        RecordAssembler::new(Balancer::new(BalanceMode::Literal))
    }

    fn merged(record: &ScriptDiffRecord) -> Vec<(LineOrigin, &str)> {
        record
            .merged
            .iter()
            .map(|line| (line.origin, line.content.as_str()))
            .collect()
    }

    #[rstest]
    fn unchanged_pair_has_no_record(assembler: RecordAssembler) {
        let pair = ScriptPair::new(0, Some(script(0, "move 10 steps")), Some(script(0, "move 10 steps")));
        assert_eq!(assembler.assemble(&pair), None);
    }

    #[rstest]
    fn changed_line_is_modified(assembler: RecordAssembler) {
        let pair = ScriptPair::new(0, Some(script(0, "move 10 steps")), Some(script(0, "move 20 steps")));

        let record = assembler.assemble(&pair).unwrap();

        assert_eq!(record.status, DiffStatus::Modified);
        assert_eq!(
            merged(&record),
            vec![
                (LineOrigin::Removed, "move 10 steps"),
                (LineOrigin::Added, "move 20 steps"),
            ]
        );
        assert_eq!((record.added_count(), record.removed_count()), (1, 1));
        assert_eq!(record.old_script.as_deref(), Some("hat0"));
    }

    #[rstest]
    fn new_script_is_added(assembler: RecordAssembler) {
        let pair = ScriptPair::new(0, None, Some(script(0, "when green flag clicked\nmove 10 steps")));

        let record = assembler.assemble(&pair).unwrap();

        assert_eq!(record.status, DiffStatus::Added);
        assert!(record.old_lines.is_empty());
        assert_eq!(
            merged(&record),
            vec![
                (LineOrigin::Added, "when green flag clicked"),
                (LineOrigin::Added, "move 10 steps"),
            ]
        );
        assert_eq!(record.added_count(), 2);
    }

    #[rstest]
    fn added_script_is_balanced(assembler: RecordAssembler) {
        let pair = ScriptPair::new(3, None, Some(script(3, "when green flag clicked\nforever\nshow")));

        let record = assembler.assemble(&pair).unwrap();

        assert_eq!(record.script_no, 3);
        assert_eq!(
            record.merged.last(),
            Some(&AnnotatedLine::new(3, "end".to_string(), LineOrigin::Added))
        );
    }

    #[rstest]
    fn removed_script_is_not_balanced(assembler: RecordAssembler) {
        let pair = ScriptPair::new(1, Some(script(1, "when stage clicked\nforever\nhide")), None);

        let record = assembler.assemble(&pair).unwrap();

        assert_eq!(record.status, DiffStatus::Removed);
        assert!(record.new_lines.is_empty());
        assert_eq!(record.merged.len(), 3);
        assert!(record.merged.iter().all(|line| line.origin == LineOrigin::Removed));
        assert_eq!(record.removed_count(), 3);
    }

    #[rstest]
    fn insertion_inside_loop_keeps_structure(assembler: RecordAssembler) {
        let pair = ScriptPair::new(
            0,
            Some(script(0, "repeat 10\nmove 10 steps\nend")),
            Some(script(0, "repeat 10\nmove 10 steps\nturn 15 degrees\nend")),
        );

        let record = assembler.assemble(&pair).unwrap();
        let count = |wanted| {
            record
                .merged
                .iter()
                .filter(|line| MarkerKind::of(&line.content) == wanted)
                .count()
        };

        assert_eq!(record.status, DiffStatus::Modified);
        assert_eq!((count(MarkerKind::Opener), count(MarkerKind::Closer)), (1, 1));
        assert_eq!(record.merged_text(), "repeat 10\nmove 10 steps\nturn 15 degrees\nend");
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&DiffStatus::Modified).unwrap(), r#""modified""#);
        assert_eq!(DiffStatus::Removed.status_char(), 'D');
        assert!(!DiffStatus::Added.matches_filter(StatusFilter::MODIFIED));
    }
}

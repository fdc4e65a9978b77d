//! Whole-project comparison
//!
//! Targets are paired by name, with the stage only ever matched to the stage.
//! A target present on one side only is compared against an empty snapshot,
//! so all of its scripts show up as added or removed. Costumes are compared
//! alongside the scripts and show up in commit summaries.

use crate::artifacts::diff::record::ScriptDiffRecord;
use crate::artifacts::diff::script_differ::ScriptDiffer;
use crate::artifacts::project::costume::{self, CostumeChange};
use crate::artifacts::project::target::{ProjectFile, Target};
use crate::artifacts::snapshot::project_snapshot::ProjectSnapshot;
use derive_new::new;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, new)]
pub struct BlockCountChange {
    pub before: usize,
    pub after: usize,
}

impl BlockCountChange {
    pub fn delta(&self) -> isize {
        self.after as isize - self.before as isize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetPresence {
    Both,
    OldOnly,
    NewOnly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetDiff {
    pub name: String,
    pub is_stage: bool,
    pub presence: TargetPresence,
    pub records: Vec<ScriptDiffRecord>,
    pub block_change: BlockCountChange,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub costume_changes: Vec<CostumeChange>,
}

impl TargetDiff {
    pub fn display_name(&self) -> String {
        if self.is_stage {
            format!("{} (stage)", self.name)
        } else {
            self.name.clone()
        }
    }

    /// Added and removed block counts as reported in commit summaries.
    ///
    /// Targets that exist on one side only report their whole block count;
    /// otherwise the changed script lines are summed.
    pub fn change_counts(&self) -> (usize, usize) {
        match self.presence {
            TargetPresence::NewOnly => (self.block_change.after, 0),
            TargetPresence::OldOnly => (0, self.block_change.before),
            TargetPresence::Both => self.records.iter().fold((0, 0), |(added, removed), record| {
                (added + record.added_count(), removed + record.removed_count())
            }),
        }
    }

    /// `Sprite1: +3, -1 blocks, add cat-b, modify cat-a`, or `None` when no
    /// block or costume changed
    pub fn summary_line(&self) -> Option<String> {
        let (added, removed) = self.change_counts();
        let mut parts = Vec::new();

        if added > 0 || removed > 0 {
            let mut blocks = String::new();
            if added > 0 {
                blocks += &format!("+{added}");
                if removed > 0 {
                    blocks += ", ";
                }
            }
            if removed > 0 {
                blocks += &format!("-{removed}");
            }
            blocks += " blocks";
            parts.push(blocks);
        }
        parts.extend(costume::format_changes(&self.costume_changes));

        (!parts.is_empty()).then(|| format!("{}: {}", self.display_name(), parts.join(", ")))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProjectDiff {
    pub targets: Vec<TargetDiff>,
}

impl ProjectDiff {
    /// Compare every target of two projects.
    ///
    /// Targets come out in old project order, followed by targets that only
    /// exist in the new project. Targets without any change are left out.
    pub fn compute(old: &ProjectFile, new: &ProjectFile, differ: &ScriptDiffer) -> Self {
        fn find<'p>(project: &'p ProjectFile, target: &Target) -> Option<&'p Target> {
            project.targets.iter().find(|other| other.key() == target.key())
        }

        let empty = ProjectSnapshot::empty();
        let mut targets = Vec::new();

        for old_target in &old.targets {
            let new_target = find(new, old_target);
            let presence = match new_target {
                Some(_) => TargetPresence::Both,
                None => TargetPresence::OldOnly,
            };
            targets.push(Self::compare(old_target, Some(old_target), new_target, presence, &empty, differ));
        }

        for new_target in new.targets.iter().filter(|target| find(old, target).is_none()) {
            targets.push(Self::compare(
                new_target,
                None,
                Some(new_target),
                TargetPresence::NewOnly,
                &empty,
                differ,
            ));
        }

        targets.retain(|target| {
            !target.records.is_empty()
                || target.block_change.delta() != 0
                || !target.costume_changes.is_empty()
        });
        tracing::debug!(changed_targets = targets.len(), "project diff complete");

        ProjectDiff { targets }
    }

    fn compare(
        target: &Target,
        old: Option<&Target>,
        new: Option<&Target>,
        presence: TargetPresence,
        empty: &ProjectSnapshot,
        differ: &ScriptDiffer,
    ) -> TargetDiff {
        let span = tracing::debug_span!("target", name = %target.name, stage = target.is_stage);
        let _guard = span.enter();

        let old_snapshot = old.map_or(empty, |target| &target.snapshot);
        let new_snapshot = new.map_or(empty, |target| &target.snapshot);
        let old_costumes = old.map_or(&[][..], |target| target.costumes.as_slice());
        let new_costumes = new.map_or(&[][..], |target| target.costumes.as_slice());

        TargetDiff {
            name: target.name.clone(),
            is_stage: target.is_stage,
            presence,
            records: differ.diff(old_snapshot, new_snapshot),
            block_change: BlockCountChange::new(old_snapshot.count_blocks(), new_snapshot.count_blocks()),
            costume_changes: costume::diff_costumes(old_costumes, new_costumes),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn target(&self, name: &str) -> Option<&TargetDiff> {
        self.targets.iter().find(|target| target.name == name)
    }

    /// One commit-message line per target with added or removed blocks
    pub fn commit_summary(&self) -> Vec<String> {
        self.targets.iter().filter_map(TargetDiff::summary_line).collect()
    }
}

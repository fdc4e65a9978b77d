//! Pairing of old and new scripts
//!
//! A matcher decides which old script is compared against which new one.
//! Everything downstream (line diff, merge, balancing) only sees the
//! resulting [`ScriptPair`]s, so other matching strategies can be plugged in
//! without touching those stages.
//!
//! - `positional`: index *i* against index *i* (default)
//! - `sorted`: sort each side by projected text, then pair by index

pub mod positional;
pub mod sorted;

pub use positional::PositionalMatcher;
pub use sorted::SortedMatcher;

use crate::artifacts::diff::record::DiffStatus;
use crate::artifacts::diff::text_line::{LineSequence, same_content};
use crate::artifacts::snapshot::script_handle::ScriptHandle;
use derive_new::new;

/// A script together with its projected lines
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ProjectedScript {
    pub handle: ScriptHandle,
    pub lines: LineSequence,
}

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ScriptPair {
    /// Index of the pair in matcher output
    pub position: usize,
    pub old: Option<ProjectedScript>,
    pub new: Option<ProjectedScript>,
}

impl ScriptPair {
    /// `None` when both sides are missing or project to the same lines
    pub fn classify(&self) -> Option<DiffStatus> {
        match (&self.old, &self.new) {
            (None, Some(_)) => Some(DiffStatus::Added),
            (Some(_), None) => Some(DiffStatus::Removed),
            (Some(old), Some(new)) if !same_content(&old.lines, &new.lines) => {
                Some(DiffStatus::Modified)
            }
            _ => None,
        }
    }
}

pub trait ScriptMatcher: Send + Sync {
    fn pair(&self, old: Vec<ProjectedScript>, new: Vec<ProjectedScript>) -> Vec<ScriptPair>;
}

/// Zip two script lists by index, padding the shorter one with `None`
pub fn zip_by_index(old: Vec<ProjectedScript>, new: Vec<ProjectedScript>) -> Vec<ScriptPair> {
    let len = old.len().max(new.len());
    let mut old = old.into_iter();
    let mut new = new.into_iter();

    (0..len)
        .map(|position| ScriptPair::new(position, old.next(), new.next()))
        .collect()
}

/// Pair positions split by change status
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchGroups {
    pub modified: Vec<usize>,
    pub added: Vec<usize>,
    pub removed: Vec<usize>,
}

impl MatchGroups {
    pub fn is_empty(&self) -> bool {
        self.modified.is_empty() && self.added.is_empty() && self.removed.is_empty()
    }

    pub fn len(&self) -> usize {
        self.modified.len() + self.added.len() + self.removed.len()
    }
}

pub fn classify_pairs(pairs: &[ScriptPair]) -> MatchGroups {
    let mut groups = MatchGroups::default();

    for pair in pairs {
        match pair.classify() {
            Some(DiffStatus::Modified) => groups.modified.push(pair.position),
            Some(DiffStatus::Added) => groups.added.push(pair.position),
            Some(DiffStatus::Removed) => groups.removed.push(pair.position),
            None => {}
        }
    }

    groups
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::artifacts::diff::text_line::lines_from_text;

    pub fn script(position: usize, text: &str) -> ProjectedScript {
        ProjectedScript::new(
            ScriptHandle::new(format!("hat{position}"), position),
            lines_from_text(text),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::script;
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn identical_pair_has_no_status() {
        let pair = ScriptPair::new(0, Some(script(0, "move 10 steps")), Some(script(0, "move 10 steps")));
        assert_eq!(pair.classify(), None);
        assert_eq!(ScriptPair::new(0, None, None).classify(), None);
    }

    #[test]
    fn two_old_scripts_one_new() {
        let old = vec![script(0, "when green flag clicked\nshow"), script(1, "when this sprite clicked\nhide")];
        let new = vec![script(0, "when green flag clicked\nhide")];

        let groups = classify_pairs(&zip_by_index(old, new));

        assert_eq!(
            groups,
            MatchGroups {
                modified: vec![0],
                added: vec![],
                removed: vec![1],
            }
        );
    }

    fn texts() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec(prop::sample::select(vec!["show", "hide", "show\nhide"]), 0..6)
            .prop_map(|items| items.into_iter().map(String::from).collect())
    }

    proptest! {
        #[test]
        fn prop_groups_partition_positions(old in texts(), new in texts()) {
            let to_scripts = |texts: &[String]| {
                texts.iter().enumerate().map(|(i, t)| script(i, t)).collect::<Vec<_>>()
            };
            let pairs = zip_by_index(to_scripts(&old), to_scripts(&new));
            let groups = classify_pairs(&pairs);

            let mut seen = groups
                .modified
                .iter()
                .chain(&groups.added)
                .chain(&groups.removed)
                .copied()
                .collect::<Vec<_>>();
            seen.sort_unstable();
            let before_dedup = seen.len();
            seen.dedup();
            prop_assert_eq!(before_dedup, seen.len());

            for position in 0..old.len().max(new.len()) {
                let in_groups = seen.contains(&position);
                let unchanged = position < old.len() && position < new.len() && old[position] == new[position];
                prop_assert_eq!(in_groups, !unchanged);
            }
        }
    }
}

use crate::artifacts::matcher::{ProjectedScript, ScriptMatcher, ScriptPair, zip_by_index};

/// Pairs old script *i* with new script *i*.
///
/// Inserting a script before existing ones shifts every later pair, so those
/// scripts show up as modified. Content that merely moved to another index is
/// not re-matched.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalMatcher;

impl ScriptMatcher for PositionalMatcher {
    fn pair(&self, old: Vec<ProjectedScript>, new: Vec<ProjectedScript>) -> Vec<ScriptPair> {
        zip_by_index(old, new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::diff::record::DiffStatus;
    use crate::artifacts::matcher::fixtures::script;
    use pretty_assertions::assert_eq;

    #[test]
    fn extra_new_script_is_added() {
        let pairs = PositionalMatcher.pair(
            vec![script(0, "when green flag clicked")],
            vec![script(0, "when green flag clicked"), script(1, "when stage clicked")],
        );

        let statuses = pairs.iter().map(ScriptPair::classify).collect::<Vec<_>>();
        assert_eq!(statuses, vec![None, Some(DiffStatus::Added)]);
    }

    #[test]
    fn swapped_scripts_are_both_modified() {
        let pairs = PositionalMatcher.pair(
            vec![script(0, "when green flag clicked"), script(1, "when stage clicked")],
            vec![script(0, "when stage clicked"), script(1, "when green flag clicked")],
        );

        let statuses = pairs.iter().map(ScriptPair::classify).collect::<Vec<_>>();
        assert_eq!(statuses, vec![Some(DiffStatus::Modified), Some(DiffStatus::Modified)]);
    }
}

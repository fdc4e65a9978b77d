use crate::artifacts::diff::text_line::lines_to_text;
use crate::artifacts::matcher::{ProjectedScript, ScriptMatcher, ScriptPair, zip_by_index};

/// Sorts each side by projected text before pairing by index.
///
/// Scripts that were only reordered line up again, at the cost of pairing
/// unrelated scripts once their text sorts differently. The sort is stable, so
/// scripts with equal text keep their discovery order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortedMatcher;

fn sort_by_text(mut scripts: Vec<ProjectedScript>) -> Vec<ProjectedScript> {
    scripts.sort_by_cached_key(|script| lines_to_text(&script.lines));
    scripts
}

impl ScriptMatcher for SortedMatcher {
    fn pair(&self, old: Vec<ProjectedScript>, new: Vec<ProjectedScript>) -> Vec<ScriptPair> {
        zip_by_index(sort_by_text(old), sort_by_text(new))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::matcher::fixtures::script;
    use crate::artifacts::matcher::classify_pairs;

    #[test]
    fn reordered_scripts_are_unchanged() {
        let pairs = SortedMatcher.pair(
            vec![script(0, "when green flag clicked"), script(1, "when stage clicked")],
            vec![script(0, "when stage clicked"), script(1, "when green flag clicked")],
        );

        assert!(classify_pairs(&pairs).is_empty());
    }

    #[test]
    fn pairs_keep_original_handles() {
        let pairs = SortedMatcher.pair(
            vec![script(0, "when stage clicked"), script(1, "when green flag clicked")],
            vec![],
        );

        let positions = pairs
            .iter()
            .filter_map(|pair| pair.old.as_ref().map(|s| s.handle.position))
            .collect::<Vec<_>>();
        assert_eq!(positions, vec![1, 0]);
    }
}

use crate::artifacts::snapshot::block::BlockId;
use crate::artifacts::snapshot::project_snapshot::ProjectSnapshot;
use derive_new::new;
use serde::Serialize;

/// Hat opcodes that start a script without being an `event_when*` block
const EXTRA_ENTRY_POINTS: [&str; 2] = ["control_start_as_clone", "procedures_definition"];

/// A top-level script, identified by its hat block
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, new)]
pub struct ScriptHandle {
    pub id: BlockId,
    /// Discovery index within the snapshot
    pub position: usize,
}

pub fn is_entry_point(opcode: &str) -> bool {
    opcode.starts_with("event_when") || EXTRA_ENTRY_POINTS.contains(&opcode)
}

/// Collect every parentless hat block in snapshot order.
///
/// Loose stacks without a hat (dragged out and left on the workspace) never
/// run, so they are not scripts.
pub fn extract_scripts(snapshot: &ProjectSnapshot) -> Vec<ScriptHandle> {
    snapshot
        .iter()
        .filter(|(_, block)| block.is_top_level() && is_entry_point(&block.opcode))
        .enumerate()
        .map(|(position, (id, _))| ScriptHandle::new(id.clone(), position))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifacts::snapshot::block::Block;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn top(opcode: &str) -> Block {
        Block::new(opcode)
    }

    fn child(opcode: &str, parent: &str) -> Block {
        let mut block = Block::new(opcode);
        block.parent = Some(parent.to_string());
        block
    }

    #[rstest]
    #[case("event_whenflagclicked", true)]
    #[case("event_whenbroadcastreceived", true)]
    #[case("control_start_as_clone", true)]
    #[case("procedures_definition", true)]
    #[case("motion_movesteps", false)]
    #[case("event_broadcast", false)]
    fn recognises_entry_points(#[case] opcode: &str, #[case] expected: bool) {
        assert_eq!(is_entry_point(opcode), expected);
    }

    #[test]
    fn extracts_parentless_hats_in_order() {
        let snapshot = ProjectSnapshot::from_blocks([
            ("b".to_string(), top("event_whenkeypressed")),
            ("loose".to_string(), top("motion_movesteps")),
            ("b1".to_string(), child("motion_turnright", "b")),
            ("a".to_string(), top("event_whenflagclicked")),
        ]);

        assert_eq!(
            extract_scripts(&snapshot),
            vec![
                ScriptHandle::new("b".to_string(), 0),
                ScriptHandle::new("a".to_string(), 1),
            ]
        );
    }

    #[test]
    fn empty_snapshot_has_no_scripts() {
        assert!(extract_scripts(&ProjectSnapshot::empty()).is_empty());
    }
}

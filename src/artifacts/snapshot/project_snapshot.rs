//! Point-in-time block map of one sprite or stage
//!
//! Block ids keep the order in which they appear in the source JSON object,
//! because script discovery order doubles as positional identity when old
//! and new scripts are paired.

use crate::artifacts::snapshot::SnapshotError;
use crate::artifacts::snapshot::block::{Block, BlockId};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectSnapshot {
    order: Vec<BlockId>,
    blocks: HashMap<BlockId, Block>,
}

impl ProjectSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a snapshot from the `blocks` object of a target.
    ///
    /// Array-valued entries are loose variable or list reporters placed on the
    /// workspace; they are not blocks and are skipped.
    pub fn from_value(value: &Value) -> Result<Self, SnapshotError> {
        let entries = value
            .as_object()
            .ok_or(SnapshotError::NotAnObject { what: "blocks" })?;

        let mut snapshot = Self::default();
        for (id, entry) in entries {
            match entry {
                Value::Object(_) => {
                    let block = serde_json::from_value::<Block>(entry.clone()).map_err(|e| {
                        SnapshotError::MalformedBlock {
                            id: id.clone(),
                            message: e.to_string(),
                        }
                    })?;
                    snapshot.insert(id.clone(), block);
                }
                Value::Array(_) => {
                    tracing::trace!(block_id = %id, "skipping loose reporter primitive");
                }
                _ => {
                    return Err(SnapshotError::MalformedBlock {
                        id: id.clone(),
                        message: "expected an object or a primitive array".to_string(),
                    });
                }
            }
        }

        Ok(snapshot)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let value = serde_json::from_str::<Value>(json)?;
        Self::from_value(&value)
    }

    pub fn from_blocks<I>(blocks: I) -> Self
    where
        I: IntoIterator<Item = (BlockId, Block)>,
    {
        let mut snapshot = Self::default();
        for (id, block) in blocks {
            snapshot.insert(id, block);
        }
        snapshot
    }

    fn insert(&mut self, id: BlockId, block: Block) {
        if self.blocks.insert(id.clone(), block).is_none() {
            self.order.push(id);
        }
    }

    pub fn get(&self, id: &str) -> Option<&Block> {
        self.blocks.get(id)
    }

    /// Blocks in source order
    pub fn iter(&self) -> impl Iterator<Item = (&BlockId, &Block)> {
        self.order
            .iter()
            .filter_map(|id| self.blocks.get(id).map(|block| (id, block)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of user-visible blocks; dropdown menu shadows are not counted
    pub fn count_blocks(&self) -> usize {
        self.blocks.values().filter(|block| !block.is_menu()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn keeps_source_order() {
        let snapshot = ProjectSnapshot::from_value(&json!({
            "zeta": { "opcode": "event_whenflagclicked", "parent": null, "next": null, "inputs": {}, "fields": {} },
            "alpha": { "opcode": "event_whenkeypressed", "parent": null, "next": null, "inputs": {}, "fields": {} },
            "mid": { "opcode": "motion_movesteps", "parent": "zeta", "next": null, "inputs": {}, "fields": {} }
        }))
        .unwrap();

        let ids = snapshot.iter().map(|(id, _)| id.as_str()).collect::<Vec<_>>();
        assert_eq!(ids, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn skips_loose_primitives_and_counts_without_menus() {
        let snapshot = ProjectSnapshot::from_value(&json!({
            "var": [12, "score", "score-id", 10, 20],
            "hat": { "opcode": "event_whenflagclicked", "parent": null, "next": "go", "inputs": {}, "fields": {} },
            "go": { "opcode": "motion_goto", "parent": "hat", "next": null, "inputs": { "TO": [1, "menu"] }, "fields": {} },
            "menu": { "opcode": "motion_goto_menu", "parent": "go", "next": null, "inputs": {}, "fields": { "TO": ["_random_", null] }, "shadow": true }
        }))
        .unwrap();

        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot.count_blocks(), 2);
        assert!(snapshot.get("var").is_none());
    }

    #[test]
    fn rejects_scalar_entries() {
        let result = ProjectSnapshot::from_value(&json!({ "broken": 42 }));
        assert!(matches!(
            result,
            Err(SnapshotError::MalformedBlock { ref id, .. }) if id == "broken"
        ));
    }

    #[test]
    fn rejects_non_object_root() {
        let result = ProjectSnapshot::from_json("[]");
        assert!(matches!(result, Err(SnapshotError::NotAnObject { .. })));
    }
}

//! Costume lists of a target and their changes between two projects
//!
//! Costumes are paired by name. A costume whose asset file differs between
//! the two sides counts as modified.

use crate::artifacts::snapshot::SnapshotError;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Costume {
    pub name: String,
    /// Asset file name, `md5ext` or `{assetId}.{dataFormat}`
    pub asset: String,
}

impl Costume {
    pub fn from_value(target: &str, position: usize, value: &Value) -> Result<Self, SnapshotError> {
        let name = value
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| SnapshotError::UnnamedCostume {
                target: target.to_string(),
                position,
            })?;

        let asset = match value.get("md5ext").and_then(Value::as_str) {
            Some(md5ext) => md5ext.to_string(),
            None => {
                let asset_id = value.get("assetId").and_then(Value::as_str).unwrap_or_default();
                let format = value.get("dataFormat").and_then(Value::as_str).unwrap_or_default();
                format!("{asset_id}.{format}")
            }
        };

        Ok(Costume {
            name: name.to_string(),
            asset,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CostumeChangeKind {
    Added,
    Removed,
    Modified,
}

impl CostumeChangeKind {
    /// Verb used in commit summaries
    pub fn verb(&self) -> &'static str {
        match self {
            CostumeChangeKind::Added => "add",
            CostumeChangeKind::Removed => "remove",
            CostumeChangeKind::Modified => "modify",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostumeChange {
    pub name: String,
    pub kind: CostumeChangeKind,
}

/// Added and modified costumes in new order, then removed costumes in old order
pub fn diff_costumes(old: &[Costume], new: &[Costume]) -> Vec<CostumeChange> {
    let find = |costumes: &[Costume], name: &str| costumes.iter().position(|c| c.name == name);

    let changed = new.iter().filter_map(|costume| {
        let kind = match find(old, &costume.name) {
            None => CostumeChangeKind::Added,
            Some(i) if old[i].asset != costume.asset => CostumeChangeKind::Modified,
            Some(_) => return None,
        };
        Some(CostumeChange {
            name: costume.name.clone(),
            kind,
        })
    });
    let removed = old
        .iter()
        .filter(|costume| find(new, &costume.name).is_none())
        .map(|costume| CostumeChange {
            name: costume.name.clone(),
            kind: CostumeChangeKind::Removed,
        });

    changed.chain(removed).collect()
}

/// `add a, b, remove c, modify d`, grouped by kind
pub fn format_changes(changes: &[CostumeChange]) -> Vec<String> {
    [
        CostumeChangeKind::Added,
        CostumeChangeKind::Removed,
        CostumeChangeKind::Modified,
    ]
    .into_iter()
    .filter_map(|kind| {
        let names = changes
            .iter()
            .filter(|change| change.kind == kind)
            .map(|change| change.name.as_str())
            .collect::<Vec<_>>();
        (!names.is_empty()).then(|| format!("{} {}", kind.verb(), names.join(", ")))
    })
    .collect()
}

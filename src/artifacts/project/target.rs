use crate::artifacts::project::costume::Costume;
use crate::artifacts::snapshot::SnapshotError;
use crate::artifacts::snapshot::project_snapshot::ProjectSnapshot;
use serde_json::Value;

/// A sprite or the stage, with its block snapshot and costumes
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub name: String,
    pub is_stage: bool,
    pub snapshot: ProjectSnapshot,
    pub costumes: Vec<Costume>,
}

impl Target {
    /// Pairing key; a sprite named like the stage is still a different target
    pub fn key(&self) -> (bool, &str) {
        (self.is_stage, self.name.as_str())
    }

    pub fn display_name(&self) -> String {
        if self.is_stage {
            format!("{} (stage)", self.name)
        } else {
            self.name.clone()
        }
    }
}

/// Parsed `project.json`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectFile {
    pub targets: Vec<Target>,
}

impl ProjectFile {
    pub fn from_value(value: &Value) -> Result<Self, SnapshotError> {
        let targets = value
            .get("targets")
            .and_then(Value::as_array)
            .ok_or(SnapshotError::MissingTargets)?;

        let targets = targets
            .iter()
            .enumerate()
            .map(|(position, target)| {
                let name = target
                    .get("name")
                    .and_then(Value::as_str)
                    .ok_or(SnapshotError::UnnamedTarget { position })?;
                let is_stage = target
                    .get("isStage")
                    .and_then(Value::as_bool)
                    .unwrap_or_default();
                let snapshot = match target.get("blocks") {
                    Some(blocks) => ProjectSnapshot::from_value(blocks)?,
                    None => ProjectSnapshot::empty(),
                };
                let costumes = target
                    .get("costumes")
                    .and_then(Value::as_array)
                    .map(|costumes| {
                        costumes
                            .iter()
                            .enumerate()
                            .map(|(position, costume)| Costume::from_value(name, position, costume))
                            .collect::<Result<Vec<_>, _>>()
                    })
                    .transpose()?
                    .unwrap_or_default();

                Ok(Target {
                    name: name.to_string(),
                    is_stage,
                    snapshot,
                    costumes,
                })
            })
            .collect::<Result<Vec<_>, SnapshotError>>()?;

        Ok(ProjectFile { targets })
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let value = serde_json::from_str::<Value>(json)?;
        Self::from_value(&value)
    }

    pub fn target(&self, name: &str) -> Option<&Target> {
        self.targets.iter().find(|target| target.name == name)
    }

    pub fn stage(&self) -> Option<&Target> {
        self.targets.iter().find(|target| target.is_stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn reads_targets_in_order() {
        let project = ProjectFile::from_value(&json!({
            "targets": [
                { "isStage": true, "name": "Stage", "blocks": {} },
                { "isStage": false, "name": "Sprite1", "costumes": [{ "name": "cat-a", "md5ext": "abc.svg" }], "blocks": {
                    "hat": { "opcode": "event_whenflagclicked", "parent": null, "next": null, "inputs": {}, "fields": {}, "topLevel": true }
                } }
            ],
            "meta": { "semver": "3.0.0" }
        }))
        .unwrap();

        let names = project.targets.iter().map(Target::display_name).collect::<Vec<_>>();
        assert_eq!(names, vec!["Stage (stage)", "Sprite1"]);
        assert_eq!(project.target("Sprite1").map(|t| t.snapshot.len()), Some(1));
        assert_eq!(project.stage().map(|t| t.name.as_str()), Some("Stage"));
        assert_eq!(
            project.target("Sprite1").map(|t| t.costumes.clone()),
            Some(vec![Costume {
                name: "cat-a".to_string(),
                asset: "abc.svg".to_string()
            }])
        );
        assert!(project.stage().is_some_and(|t| t.costumes.is_empty()));
    }

    #[test]
    fn missing_targets_is_an_error() {
        let err = ProjectFile::from_json(r#"{ "meta": {} }"#).unwrap_err();
        assert!(matches!(err, SnapshotError::MissingTargets));
    }

    #[test]
    fn unnamed_target_is_an_error() {
        let err = ProjectFile::from_value(&json!({ "targets": [{ "isStage": true, "blocks": {} }] })).unwrap_err();
        assert!(matches!(err, SnapshotError::UnnamedTarget { position: 0 }));
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(matches!(
            ProjectFile::from_json("{"),
            Err(SnapshotError::InvalidJson(_))
        ));
    }
}

use assert_fs::TempDir;
use assert_fs::prelude::{FileWriteStr, PathChild, PathCreateDir};
use serde_json::{Map, Value, json};
use std::path::PathBuf;

/// `when green flag clicked` / `repeat (10)` / `move (10) steps` / optional
/// `turn right (15) degrees` / `end`
pub fn loop_script(prefix: &str, with_turn: bool) -> Value {
    let hat = format!("{prefix}_hat");
    let repeat = format!("{prefix}_repeat");
    let step = format!("{prefix}_move");
    let turn = format!("{prefix}_turn");

    let after_move = if with_turn { Value::String(turn.clone()) } else { Value::Null };

    let mut blocks = json!({
        hat.clone(): { "opcode": "event_whenflagclicked", "parent": null, "next": repeat.clone(),
                       "inputs": {}, "fields": {}, "topLevel": true },
        repeat.clone(): { "opcode": "control_repeat", "parent": hat, "next": null,
                          "inputs": { "TIMES": [1, [6, "10"]], "SUBSTACK": [2, step.clone()] }, "fields": {} },
        step.clone(): { "opcode": "motion_movesteps", "parent": repeat, "next": after_move,
                        "inputs": { "STEPS": [1, [4, "10"]] }, "fields": {} }
    });

    if with_turn {
        blocks[turn] = json!({ "opcode": "motion_turnright", "parent": step, "next": null,
                               "inputs": { "DEGREES": [1, [4, "15"]] }, "fields": {} });
    }

    blocks
}

/// `when this sprite clicked` / `say [message]`
pub fn say_script(prefix: &str, message: &str) -> Value {
    let hat = format!("{prefix}_hat");
    let say = format!("{prefix}_say");

    json!({
        hat.clone(): { "opcode": "event_whenthisspriteclicked", "parent": null, "next": say.clone(),
                       "inputs": {}, "fields": {}, "topLevel": true },
        say: { "opcode": "looks_say", "parent": hat, "next": null,
               "inputs": { "MESSAGE": [1, [10, message]] }, "fields": {} }
    })
}

/// Concatenate block maps, keeping script order
pub fn blocks(parts: &[Value]) -> Value {
    let mut merged = Map::new();
    for part in parts {
        if let Value::Object(map) = part {
            for (id, block) in map {
                merged.insert(id.clone(), block.clone());
            }
        }
    }
    Value::Object(merged)
}

pub fn project_json(targets: &[(&str, bool, Value)]) -> String {
    let targets = targets
        .iter()
        .map(|(name, is_stage, blocks)| json!({ "isStage": is_stage, "name": name, "blocks": blocks }))
        .collect::<Vec<_>>();

    json!({ "targets": targets, "meta": { "semver": "3.0.0" } }).to_string()
}

/// Like `project_json`, with costumes given as `(name, md5ext)` pairs
pub fn project_json_with_costumes(targets: &[(&str, bool, Value, &[(&str, &str)])]) -> String {
    let targets = targets
        .iter()
        .map(|(name, is_stage, blocks, costumes)| {
            let costumes = costumes
                .iter()
                .map(|(costume, md5ext)| json!({ "name": costume, "md5ext": md5ext, "dataFormat": "svg" }))
                .collect::<Vec<_>>();
            json!({ "isStage": is_stage, "name": name, "blocks": blocks, "costumes": costumes })
        })
        .collect::<Vec<_>>();

    json!({ "targets": targets, "meta": { "semver": "3.0.0" } }).to_string()
}

pub fn write_project(dir: &TempDir, file_name: &str, json: &str) -> PathBuf {
    let file = dir.child(file_name);
    file.write_str(json).expect("Failed to write project");
    file.path().to_path_buf()
}

/// Write `project.json` inside a fresh directory, like an unpacked project
pub fn write_project_dir(dir: &TempDir, dir_name: &str, json: &str) -> PathBuf {
    let project_dir = dir.child(dir_name);
    project_dir.create_dir_all().expect("Failed to create project dir");
    project_dir
        .child("project.json")
        .write_str(json)
        .expect("Failed to write project");
    project_dir.path().to_path_buf()
}

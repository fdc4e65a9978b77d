use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn workspace_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

pub fn run_scratch_diff(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("scratch-diff").expect("Failed to find scratch-diff binary");
    cmd.env_remove("RUST_LOG");
    cmd.current_dir(dir);
    cmd.arg("--color").arg("never");
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn stdout_of(cmd: &mut Command) -> Result<String, Box<dyn std::error::Error>> {
    let output = cmd.assert().success();
    Ok(String::from_utf8(output.get_output().stdout.clone())?)
}

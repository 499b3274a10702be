use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::fixture::ChildPath;
use assert_fs::prelude::{FileWriteStr, PathChild};
use rstest::fixture;

#[fixture]
pub fn history_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

pub fn write_history(dir: &TempDir, name: &str, lines: &[&str]) -> ChildPath {
    let file = dir.child(name);
    let mut content = lines.join("\n");
    content.push('\n');
    file.write_str(&content).expect("Failed to write history file");
    file
}

pub fn run_daglp_command(args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("daglp").expect("Failed to find daglp binary");
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn run_daglp_with_stdin(stdin: &str) -> Command {
    let mut cmd = run_daglp_command(&[]);
    cmd.write_stdin(stdin.to_string());
    cmd
}

//! Tests for CLI argument parsing, run against the built binary.

use std::process::{Command, Output};

use tempfile::TempDir;

fn heartlist_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_heartlist"));
    cmd.arg("--config")
        .arg(config_dir.path().join("config.toml"))
        .env_remove("HEARTLIST_LOG");
    cmd
}

fn run(cmd: &mut Command) -> Output {
    cmd.output().expect("Failed to execute command")
}

#[test]
fn help_lists_overrides() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = run(heartlist_cmd(&dir).arg("--help"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--seed-count"));
    assert!(stdout.contains("--step-interval-ms"));
    assert!(stdout.contains("--print"));
}

#[test]
fn print_shows_seeded_list() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = run(heartlist_cmd(&dir).arg("--print"));

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 20);
    assert_eq!(lines[0], "♡ Item 0");
    assert_eq!(lines[19], "♡ Item 19");
}

#[test]
fn seed_count_flag_overrides_config_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(dir.path().join("config.toml"), "[store]\nseed_count = 5\n")
        .expect("Failed to write config");

    let output = run(heartlist_cmd(&dir).arg("--print"));
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 5);

    let output = run(heartlist_cmd(&dir).args(["--print", "--seed-count", "2"]));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().collect::<Vec<_>>(), vec!["♡ Item 0", "♡ Item 1"]);
}

#[test]
fn invalid_config_exits_with_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    std::fs::write(
        dir.path().join("config.toml"),
        "[animation]\nstep_interval_ms = 0\n",
    )
    .expect("Failed to write config");

    let output = run(heartlist_cmd(&dir).arg("--print"));
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("step_interval_ms must be greater than 0"),
        "unexpected stderr: {}",
        stderr
    );
}

#[test]
fn missing_flag_value_is_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let output = run(heartlist_cmd(&dir).arg("--seed-count"));

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--seed-count"));
}

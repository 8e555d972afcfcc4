use std::path::Path;
use std::process::{Command, Output};

const REFERENCE_OUTPUT: &str = "\
minute         0 15 30 45
hour           0
day of month   1 15
month          1 2 3 4 5 6 7 8 9 10 11 12
day of week    1 2 3 4 5
command        /usr/bin/find
";

/// Run the binary from `cwd` with no config requested through the environment.
fn cronexpand(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cronexpand"))
        .args(args)
        .current_dir(cwd)
        .env_remove("CRONEXPAND_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn cronexpand")
}

fn cronexpand_with_env_config(args: &[&str], cwd: &Path, config: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cronexpand"))
        .args(args)
        .current_dir(cwd)
        .env("CRONEXPAND_CONFIG", config)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn cronexpand")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn prints_expanded_schedule() {
    let dir = tempfile::tempdir().unwrap();
    let out = cronexpand(&["*/15 0 1,15 * 1-5 /usr/bin/find"], dir.path());

    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), REFERENCE_OUTPUT);
}

#[test]
fn stray_config_in_working_directory_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("cronexpand.toml"), "[output\n").unwrap();

    let out = cronexpand(&["*/15 0 1,15 * 1-5 /usr/bin/find"], dir.path());
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), REFERENCE_OUTPUT);

    std::fs::write(
        dir.path().join("cronexpand.toml"),
        "[output]\nformat = \"json\"\n",
    )
    .unwrap();
    let out = cronexpand(&["*/15 0 1,15 * 1-5 /usr/bin/find"], dir.path());
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), REFERENCE_OUTPUT);
}

#[test]
fn invalid_expression_exits_one() {
    let dir = tempfile::tempdir().unwrap();
    let out = cronexpand(&["60 0 1 1 1 echo invalid"], dir.path());

    assert_eq!(out.status.code(), Some(1));
    assert_eq!(stdout(&out), "Error: invalid value: 60\n");
}

#[test]
fn missing_argument_prints_usage() {
    let dir = tempfile::tempdir().unwrap();
    let out = cronexpand(&[], dir.path());

    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).starts_with("Usage: cronexpand"));
}

#[test]
fn extra_argument_prints_usage() {
    let dir = tempfile::tempdir().unwrap();
    let out = cronexpand(&["*", "* * * * ls"], dir.path());

    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).starts_with("Usage: cronexpand"));
}

#[test]
fn env_config_switches_to_json() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("settings.toml");
    std::fs::write(&config, "[output]\nformat = \"json\"\n").unwrap();

    let out = cronexpand_with_env_config(&["0 9 * * 1 standup"], dir.path(), &config);
    assert_eq!(out.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["hour"], serde_json::json!([9]));
    assert_eq!(value["command"], "standup");
}

#[test]
fn config_flag_switches_to_json() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("settings.toml");
    std::fs::write(&config, "[output]\nformat = \"json\"\n").unwrap();

    let out = cronexpand(
        &["--config", config.to_str().unwrap(), "0 9 * * 1 standup"],
        dir.path(),
    );
    assert_eq!(out.status.code(), Some(0));
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["command"], "standup");
}

#[test]
fn invalid_requested_config_fails_before_parsing() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("settings.toml");
    std::fs::write(&config, "[output]\ncolumn_width = 0\n").unwrap();

    let out = cronexpand_with_env_config(&["0 9 * * 1 standup"], dir.path(), &config);
    assert_eq!(out.status.code(), Some(1));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("output.column_width"));
}

//! CLI integration tests using the pre-built binary
//!
//! Every run points `TOBUDDY_CONFIG_DIR` at a fresh temp dir so saved
//! defaults on the host never leak in.

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::{tempdir, TempDir};

fn tobuddy(config_dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tobuddy"));
    cmd.env("TOBUDDY_CONFIG_DIR", config_dir.path());
    for var in [
        "TOBUDDY_CH",
        "TOBUDDY_CM",
        "TOBUDDY_EH",
        "TOBUDDY_EM",
        "TOBUDDY_TARGET",
        "TOBUDDY_VERBOSE",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_cli_help() {
    let dir = tempdir().unwrap();
    tobuddy(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("Number of hours earned per pay period"));
}

#[test]
fn test_cli_version() {
    let dir = tempdir().unwrap();
    tobuddy(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("2.1.0"));
}

#[test]
fn test_one_hour_per_period() {
    let dir = tempdir().unwrap();
    tobuddy(&dir)
        .args(["--eh", "1"])
        .assert()
        .success()
        .stdout("40 pay periods\n");
}

#[test]
fn test_already_at_target() {
    let dir = tempdir().unwrap();
    tobuddy(&dir)
        .args(["--ch", "40", "--eh", "1", "-t", "40"])
        .assert()
        .success()
        .stdout("0 pay periods\n");
}

#[test]
fn test_no_time_off_earned() {
    let dir = tempdir().unwrap();
    tobuddy(&dir)
        .assert()
        .success()
        .stdout("No Time Off Earned\n");
}

#[test]
fn test_negative_earned_fails() {
    let dir = tempdir().unwrap();
    tobuddy(&dir)
        .args(["--ch", "-1", "--eh", "1"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(contains(
            "failed to calculate pay periods: total earned minutes invalid: -60",
        ));
}

#[test]
fn test_verbose_progress() {
    let dir = tempdir().unwrap();
    tobuddy(&dir)
        .args(["--cm", "30", "--eh", "2", "--target", "1", "--verbose"])
        .assert()
        .success()
        .stdout("0 hrs 30 minutes earned\n2 hrs 30 minutes earned\n1 pay periods\n");
}

#[test]
fn test_env_fills_unset_flags() {
    let dir = tempdir().unwrap();
    tobuddy(&dir)
        .env("TOBUDDY_EH", "8")
        .assert()
        .success()
        .stdout("5 pay periods\n");
}

#[test]
fn test_interactive_mode() {
    let dir = tempdir().unwrap();
    tobuddy(&dir)
        .arg("-i")
        .write_stdin("abc\n\n\n4\n\n8\nn\n")
        .assert()
        .success()
        .stdout(contains("Enter an Integer for the following: Number of Hours accrued.: 0: "))
        .stdout(contains("Enable Verbose Logging? y/n:"))
        .stdout(contains("2 pay periods\n"));
}

#[test]
fn test_saved_defaults_used_on_next_run() {
    let dir = tempdir().unwrap();
    tobuddy(&dir)
        .args(["--eh", "2", "--save-defaults"])
        .assert()
        .success()
        .stdout("20 pay periods\n");

    assert!(dir.path().join("config.json").exists());

    tobuddy(&dir)
        .assert()
        .success()
        .stdout("20 pay periods\n");
}

#[test]
fn test_env_verbose_off_beats_saved_verbose_default() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"defaults":{"hours_per_pay_period":20,"verbose":true}}"#,
    )
    .unwrap();

    tobuddy(&dir)
        .assert()
        .success()
        .stdout(concat!(
            "0 hrs 0 minutes earned\n",
            "20 hrs 0 minutes earned\n",
            "40 hrs 0 minutes earned\n",
            "2 pay periods\n"
        ));

    tobuddy(&dir)
        .env("TOBUDDY_VERBOSE", "false")
        .assert()
        .success()
        .stdout("2 pay periods\n");

    tobuddy(&dir)
        .arg("--verbose=false")
        .assert()
        .success()
        .stdout("2 pay periods\n");
}

#[test]
fn test_env_numeric_beats_saved_default() {
    let dir = tempdir().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{"defaults":{"hours_per_pay_period":20}}"#,
    )
    .unwrap();

    tobuddy(&dir)
        .env("TOBUDDY_EH", "40")
        .assert()
        .success()
        .stdout("1 pay periods\n");

    // Flag still wins over the environment
    tobuddy(&dir)
        .env("TOBUDDY_EH", "40")
        .args(["--eh", "10"])
        .assert()
        .success()
        .stdout("4 pay periods\n");
}

#[test]
fn test_invalid_config_is_not_saved_as_default() {
    let dir = tempdir().unwrap();
    tobuddy(&dir)
        .args(["--ch", "-1", "--eh", "1", "--save-defaults"])
        .assert()
        .code(1);

    assert!(!dir.path().join("config.json").exists());

    tobuddy(&dir)
        .assert()
        .success()
        .stdout("No Time Off Earned\n");
}

//! CLI smoke tests for the seacast-server binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::time::Duration;
use tempfile::TempDir;
use tokio::time::timeout;

fn run_seacast_server(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_seacast-server"))
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute seacast-server")
}

async fn run_seacast_server_with_timeout(
    args: &[&str],
    timeout_duration: Duration,
) -> Result<std::process::Output, Box<dyn std::error::Error>> {
    let mut cmd = tokio::process::Command::new(env!("CARGO_BIN_EXE_seacast-server"));
    cmd.args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    match timeout(timeout_duration, cmd.output()).await {
        Ok(result) => result.map_err(|e| e.into()),
        Err(elapsed) => Err(elapsed.into()),
    }
}

/// Config file rooted in `dir`, so logs and SQLite files stay inside the temp dir.
fn write_config(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("seacast.yaml");
    let content = format!(
        r#"
server:
  home_dir: "{home}"
  host: "127.0.0.1"
  port: 0

logging:
  default:
    console_level: info
    file: "logs/seacast.log"
    file_level: info
    max_age_days: 1
    max_backups: 1
    max_size_mb: 10
{body}"#,
        home = dir.to_string_lossy().replace('\\', "/"),
    );
    std::fs::write(&path, content).expect("Failed to write config file");
    path
}

#[test]
fn test_cli_help_command() {
    let output = run_seacast_server(&["--help"]);
    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("seacast-server"));
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("run"));
    assert!(stdout.contains("check"));
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--mock"));
}

#[test]
fn test_cli_version_command() {
    let output = run_seacast_server(&["--version"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("seacast-server 0.1.0"), "{stdout}");
}

#[test]
fn test_cli_invalid_command() {
    let output = run_seacast_server(&["invalid-command"]);
    assert!(!output.status.success(), "Invalid command should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error"), "{stderr}");
}

#[test]
fn test_cli_missing_config_file() {
    for flag in ["--config", "-c"] {
        let output = run_seacast_server(&[flag, "/nonexistent/seacast.yaml", "check"]);
        assert!(!output.status.success(), "Should fail with missing config");

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("config file not found"), "{stderr}");
    }
}

#[test]
fn test_cli_invalid_yaml() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("invalid.yaml");
    std::fs::write(&config_path, "invalid: yaml: content: [unclosed").unwrap();

    let output = run_seacast_server(&["--config", config_path.to_str().unwrap(), "check"]);
    assert!(!output.status.success(), "Should fail with invalid YAML");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse yaml config"), "{stderr}");
}

#[test]
fn test_cli_check_valid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(
        temp_dir.path(),
        r#"
database:
  url: "sqlite://database/seacast.db"

modules:
  forecast_admin:
    jwt_secret: "smoke-secret"
    access_token_expire_minutes: 15
"#,
    );

    let output = run_seacast_server(&["--config", config_path.to_str().unwrap(), "check"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(output.status.success(), "STDOUT: {stdout}\nSTDERR: {stderr}");
    assert!(stdout.contains("Configuration check passed"));
}

#[test]
fn test_cli_check_rejects_bad_module_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(
        temp_dir.path(),
        r#"
database:
  url: "sqlite://database/seacast.db"

modules:
  forecast_admin:
    bcrypt_cost: 2
"#,
    );

    let output = run_seacast_server(&["--config", config_path.to_str().unwrap(), "check"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bcrypt_cost"), "{stderr}");
}

#[test]
fn test_cli_check_rejects_unknown_database() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(
        temp_dir.path(),
        r#"
database:
  url: "mysql://localhost/seacast"
"#,
    );

    let output = run_seacast_server(&["--config", config_path.to_str().unwrap(), "check"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown DSN"), "{stderr}");
}

#[test]
fn test_cli_mock_flag_overrides_database() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(
        temp_dir.path(),
        r#"
database:
  url: "mysql://localhost/nonexistent"
"#,
    );

    let output = run_seacast_server(&["--config", config_path.to_str().unwrap(), "--mock", "check"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        output.status.success(),
        "--mock should bypass the configured database: {stderr}"
    );
}

#[test]
fn test_cli_print_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(temp_dir.path(), "");

    let output = run_seacast_server(&[
        "--config",
        config_path.to_str().unwrap(),
        "--port",
        "9123",
        "--print-config",
    ]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("port: 9123"), "{stdout}");
}

#[test]
fn test_cli_subcommand_help() {
    let output = run_seacast_server(&["run", "--help"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Start the server"));

    let output = run_seacast_server(&["check", "--help"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Check configuration"));
}

#[tokio::test]
async fn test_cli_run_with_mock_database() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(
        temp_dir.path(),
        r#"
modules:
  forecast_admin:
    jwt_secret: "smoke-secret"
    bcrypt_cost: 4
    bootstrap_admin:
      username: "admin"
      email: "admin@seacast.io"
      password: "admin-pass"
"#,
    );

    let result = run_seacast_server_with_timeout(
        &["--config", config_path.to_str().unwrap(), "--mock", "run"],
        Duration::from_secs(10),
    )
    .await;

    match result {
        // Still serving when the timeout fired.
        Err(err) => assert!(err.to_string().contains("elapsed"), "{err}"),
        Ok(output) => panic!(
            "server exited early: {}\nSTDERR: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr)
        ),
    }
}

#[test]
fn test_cli_run_without_database_fails() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_config(temp_dir.path(), "");

    let output = run_seacast_server(&["--config", config_path.to_str().unwrap(), "run"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Database configuration is required"), "{stderr}");
}

//! CLI Integration Tests
//!
//! These tests run the `lumen` binary and check its output formats and
//! exit codes. Every run points `--config` at a temporary file so the
//! user's own configuration never leaks in.
//!
//! ```
//! cargo test --package lumen-cli --test cli_integration
//! ```

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Run lumen with an isolated config file and return its output
fn run_lumen_with_config(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_lumen"))
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("LUMEN_CONFIG")
        .env_remove("NO_COLOR")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run lumen binary")
}

/// Run lumen with a config path that does not exist
fn run_lumen(args: &[&str]) -> Output {
    let dir = TempDir::new().unwrap();
    run_lumen_with_config(&dir.path().join("config.toml"), args)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// =============================================================================
// Help and Version Tests
// =============================================================================

#[test]
fn test_help_command() {
    let output = run_lumen(&["--help"]);
    assert!(output.status.success(), "Help should succeed");

    let text = stdout(&output);
    for command in ["lux", "measured", "find", "table", "setup-code", "discriminator"] {
        assert!(text.contains(command), "Help should list {command}");
    }
}

#[test]
fn test_version_command() {
    let output = run_lumen(&["--version"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("lumen "));
}

#[test]
fn test_missing_subcommand_fails() {
    let output = run_lumen(&[]);
    assert!(!output.status.success());
}

// =============================================================================
// Conversion Tests
// =============================================================================

#[test]
fn test_find_text_output() {
    let output = run_lumen(&["--no-color", "find", "100"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "100 lx -> 20001\n");
}

#[test]
fn test_find_explain_output() {
    let output = run_lumen(&["--no-color", "find", "65000", "--explain"]);
    assert!(output.status.success());

    let text = stdout(&output);
    assert!(text.starts_with("65000 lx -> 48130\n"));
    assert!(text.contains("decoded:   64998 lx"));
}

#[test]
fn test_find_json_output() {
    let output = run_lumen(&["--json", "--compact", "find", "500"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["requested"], 500);
    assert_eq!(json["value"], 26_991);
    assert_eq!(json["exact"], true);
}

#[test]
fn test_find_non_positive_clamps_to_one() {
    let output = run_lumen(&["--no-color", "find", "-20"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "-20 lx -> 1\n");
}

#[test]
fn test_find_truncates_fractional_lux() {
    let output = run_lumen(&["--no-color", "find", "100.75"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "100 lx -> 20001\n");
}

#[test]
fn test_find_rejects_non_numeric_lux() {
    let output = run_lumen(&["find", "bright"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Not a number"));
}

#[test]
fn test_find_sensor_maximum() {
    let output = run_lumen(&["--no-color", "find", "3576000"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "3576000 lx -> 65534\n");
}

#[test]
fn test_lux_text_output() {
    let output = run_lumen(&["--no-color", "lux", "20001"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "20001 -> 100 lx\n");
}

#[test]
fn test_lux_rejects_out_of_range() {
    let output = run_lumen(&["lux", "0"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("--unchecked"));
}

#[test]
fn test_lux_unchecked_decodes_anyway() {
    let output = run_lumen(&["--no-color", "lux", "65535", "--unchecked"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "65535 -> 3576020 lx\n");
}

#[test]
fn test_measured_output() {
    let output = run_lumen(&["--no-color", "measured", "500"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "500 lx -> 26991\n");
}

#[test]
fn test_measured_rejects_zero() {
    let output = run_lumen(&["measured", "0"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("must be positive"));
}

#[test]
fn test_clamp_output() {
    let output = run_lumen(&["--no-color", "clamp", "5000000"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "3576000 lx\n");
}

#[test]
fn test_table_json_output() {
    let output = run_lumen(&[
        "--json", "table", "--from", "1", "--to", "30001", "--step", "10000",
    ]);
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let lux: Vec<i64> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["lux"].as_i64().unwrap())
        .collect();
    assert_eq!(lux, vec![1, 10, 100, 1000]);
}

#[test]
fn test_table_with_extreme_bounds() {
    let output = run_lumen(&[
        "--json",
        "--compact",
        "table",
        "--from=-10",
        "--to=9223372036854775807",
        "--step=9223372036854775807",
    ]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let rows: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let measured: Vec<i64> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["measured"].as_i64().unwrap())
        .collect();
    assert_eq!(measured, vec![-10, i64::MAX - 10, i64::MAX]);
}

#[test]
fn test_table_too_many_rows_fails() {
    let output = run_lumen(&[
        "table",
        "--from=-9223372036854775808",
        "--to=9223372036854775807",
        "--step=1",
    ]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("limit"));
}

#[test]
fn test_output_to_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("find.txt");
    let output = run_lumen(&["--no-color", "--output", out.to_str().unwrap(), "find", "100"]);
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
    assert_eq!(std::fs::read_to_string(&out).unwrap(), "100 lx -> 20001\n");
}

// =============================================================================
// Boundary Mode Tests
// =============================================================================

fn wide_range_config(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[converter.lux]\nmin = 1\nmax = 10000000\n",
    )
    .unwrap();
    path
}

#[test]
fn test_wide_range_saturates_by_default() {
    let dir = TempDir::new().unwrap();
    let config = wide_range_config(&dir);
    let output = run_lumen_with_config(&config, &["--no-color", "find", "10000000"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "10000000 lx -> 65534\n");
}

#[test]
fn test_legacy_boundary_flag() {
    let dir = TempDir::new().unwrap();
    let config = wide_range_config(&dir);
    let output = run_lumen_with_config(
        &config,
        &["--no-color", "--legacy-boundary", "find", "10000000"],
    );
    assert!(output.status.success());
    assert_eq!(stdout(&output), "10000000 lx -> 70001\n");
}

#[test]
fn test_invalid_config_range_fails_at_startup() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[converter.measured]\nmin = 10\nmax = 1\n").unwrap();

    for args in [
        &["table"][..],
        &["measured", "500"][..],
        &["setup-code", "MT:ABC"][..],
        &["discriminator", "--seed", "x"][..],
    ] {
        let output = run_lumen_with_config(&path, args);
        assert!(!output.status.success(), "{args:?} should fail");
        assert!(stderr(&output).contains("Invalid converter configuration"));
    }

    // config still works so the file can be inspected or replaced
    let show = run_lumen_with_config(&path, &["config", "show"]);
    assert!(show.status.success());
    let init = run_lumen_with_config(&path, &["config", "init", "--force"]);
    assert!(init.status.success());
    let table = run_lumen_with_config(&path, &["table", "--to", "10001", "--step", "10000"]);
    assert!(table.status.success());
}

#[test]
fn test_invalid_config_range_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[converter.lux]\nmin = 0\nmax = 10\n").unwrap();

    let output = run_lumen_with_config(&path, &["find", "5"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid converter configuration"));
}

// =============================================================================
// Onboarding Tests
// =============================================================================

#[test]
fn test_setup_code_output() {
    let output = run_lumen(&["--no-color", "setup-code", "MT:Y.K9042C00KA0648G00"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "Y.K9042C00KA0648G00\n");
}

#[test]
fn test_setup_code_json_output() {
    let output = run_lumen(&["--json", "setup-code", "MT:Y.K9042C00KA0648G00"]);
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["prefix"], "MT");
    assert_eq!(json["kind"], "Matter");
    assert_eq!(json["code"], "Y.K9042C00KA0648G00");
}

#[test]
fn test_setup_code_without_separator_fails() {
    let output = run_lumen(&["setup-code", "Y.K9042C00KA0648G00"]);
    assert!(!output.status.success());
}

#[test]
fn test_discriminator_seed_is_deterministic() {
    let first = run_lumen(&["--json", "discriminator", "--seed", "bench-01"]);
    let second = run_lumen(&["--json", "discriminator", "--seed", "bench-01"]);
    assert!(first.status.success());
    assert_eq!(stdout(&first), stdout(&second));

    let json: serde_json::Value = serde_json::from_str(&stdout(&first)).unwrap();
    let value = json["discriminator"].as_u64().unwrap();
    assert!((0x3E8..=0xFFF).contains(&value));
    assert_eq!(json["source"], "seed");
}

#[test]
fn test_discriminator_uses_config_seed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "discriminator_seed = \"bench-01\"\n").unwrap();

    let from_config = run_lumen_with_config(&path, &["--json", "discriminator"]);
    let from_flag = run_lumen(&["--json", "discriminator", "--seed", "bench-01"]);
    assert!(from_config.status.success());

    let config_json: serde_json::Value = serde_json::from_str(&stdout(&from_config)).unwrap();
    let flag_json: serde_json::Value = serde_json::from_str(&stdout(&from_flag)).unwrap();
    assert_eq!(config_json["discriminator"], flag_json["discriminator"]);
    assert_eq!(config_json["source"], "config");
}

// =============================================================================
// Config Tests
// =============================================================================

#[test]
fn test_config_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    let output = run_lumen_with_config(&path, &["config", "path"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), path.display().to_string());
}

#[test]
fn test_config_init_then_show() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lumen").join("config.toml");

    let init = run_lumen_with_config(&path, &["config", "init"]);
    assert!(init.status.success(), "stderr: {}", stderr(&init));
    assert!(path.exists());

    let again = run_lumen_with_config(&path, &["config", "init"]);
    assert!(!again.status.success());

    let show = run_lumen_with_config(&path, &["config", "show"]);
    assert!(show.status.success());
    let text = stdout(&show);
    assert!(text.contains("boundary = \"saturate\""));
    assert!(text.contains("max = 3576000"));
}

#[test]
fn test_format_from_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "format = \"json\"\n").unwrap();

    let output = run_lumen_with_config(&path, &["find", "100"]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["value"], 20_001);
}

#[test]
fn test_completions_bash() {
    let output = run_lumen(&["completions", "bash"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("lumen"));
}

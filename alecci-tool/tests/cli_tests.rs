//! CLI integration tests for the `alecci` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Command isolated from any user or working-directory configuration
fn alecci(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("alecci").expect("binary should be built");
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("ALECCI_CONFIG")
        .env_remove("ALECCI_VERBOSE")
        .env_remove("RUST_LOG")
        .env("ALECCI_NO_COLOR", "true");
    cmd
}

#[test]
fn test_cli_help() {
    let home = TempDir::new().unwrap();
    alecci(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tokens"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("init"));
}

#[test]
fn test_cli_version() {
    let home = TempDir::new().unwrap();
    alecci(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_tokens_text_output() {
    let home = TempDir::new().unwrap();
    alecci(&home)
        .arg("tokens")
        .arg(fixture("bubble_sort.algo"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "1:1 reserved_keyword \"function\"\n1:10 function_name \"BubbleSort\"\n",
        ))
        .stdout(predicate::str::contains("1:21 variable_name \"A\""))
        .stdout(predicate::str::contains("12:11 constant_name \"MAX_SIZE\""))
        .stdout(predicate::str::contains("whitespace").not());
}

#[test]
fn test_tokens_with_whitespace() {
    let home = TempDir::new().unwrap();
    alecci(&home)
        .args(["tokens", "--whitespace"])
        .arg(fixture("workers.algo"))
        .assert()
        .success()
        .stdout(predicate::str::contains("1:7 whitespace \" \""));
}

#[test]
fn test_tokens_json_output() {
    let home = TempDir::new().unwrap();
    let output = alecci(&home)
        .args(["tokens", "--format", "json"])
        .arg(fixture("workers.algo"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let tokens = value[0]["tokens"].as_array().unwrap();
    assert_eq!(tokens[0]["category"], "reserved_keyword");
    assert_eq!(tokens[0]["pygments"], "Keyword.Reserved");
    assert_eq!(tokens[0]["lexeme"], "shared");
    assert!(tokens
        .iter()
        .any(|t| t["category"] == "function_name" && t["lexeme"] == "Worker"));
}

#[test]
fn test_tokens_delimited_strings_flag() {
    let home = TempDir::new().unwrap();
    alecci(&home)
        .args(["tokens", "--strings", "delimited"])
        .arg(fixture("bubble_sort.algo"))
        .assert()
        .success()
        .stdout(predicate::str::contains("string_literal \"\\\"sorted: %s\\\"\""));
}

#[test]
fn test_tokens_missing_file_fails() {
    let home = TempDir::new().unwrap();
    alecci(&home)
        .args(["tokens", "missing.algo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_check_clean_files() {
    let home = TempDir::new().unwrap();
    alecci(&home)
        .arg("check")
        .arg(fixture("bubble_sort.algo"))
        .arg(fixture("workers.algo"))
        .assert()
        .success()
        .stdout(predicate::str::contains("function_name"))
        .stdout(predicate::str::contains("checked 2 file(s)"))
        .stdout(predicate::str::contains("0 unrecognized"));
}

#[test]
fn test_check_reports_unrecognized_characters() {
    let home = TempDir::new().unwrap();
    alecci(&home)
        .arg("check")
        .arg(fixture("dollar.algo"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("unrecognized             1"))
        .stderr(predicate::str::contains(
            "warning[W1001]: unrecognized character '$'",
        ))
        .stderr(predicate::str::contains("dollar.algo:2:8"))
        .stderr(predicate::str::contains("1 unrecognized character(s) found"));
}

#[test]
fn test_init_writes_config() {
    let home = TempDir::new().unwrap();
    alecci(&home).arg("init").assert().success();

    let content = std::fs::read_to_string(home.path().join("alecci.toml")).unwrap();
    assert!(content.contains("[lexer]"));
    assert!(content.contains("strings = \"quote-only\""));
    assert!(content.contains("format = \"text\""));

    alecci(&home)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    alecci(&home).args(["init", "--force"]).assert().success();
}

#[test]
fn test_config_file_in_working_directory_is_used() {
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("alecci.toml"),
        "[lexer]\nbuiltins_first = true\n\n[output]\nformat = \"json\"\n",
    )
    .unwrap();
    std::fs::write(home.path().join("math.algo"), "y := sqrt(x)\n").unwrap();

    alecci(&home)
        .args(["tokens", "math.algo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"category\": \"builtin_function_name\""));
}

#[test]
fn test_explicit_config_path() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.toml");
    std::fs::write(&config, "[output]\nshow_whitespace = true\n").unwrap();
    std::fs::write(home.path().join("a.algo"), "a b").unwrap();

    alecci(&home)
        .arg("--config")
        .arg(&config)
        .args(["tokens", "a.algo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1:2 whitespace \" \""));
}

#[test]
fn test_invalid_config_fails() {
    let home = TempDir::new().unwrap();
    std::fs::write(home.path().join("alecci.toml"), "[lexer]\nstrings = 3\n").unwrap();
    std::fs::write(home.path().join("a.algo"), "a").unwrap();

    alecci(&home)
        .args(["tokens", "a.algo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Toml"));
}

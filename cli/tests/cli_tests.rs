//! CLI binary integration tests using assert_cmd + predicates.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin("shunt").expect("binary should exist")
}

// ── Convert from Arguments ──────────────────────────────────────────────────

#[test]
fn test_convert_args() {
    cmd()
        .args(["convert", "A", "*", "(", "B", "+", "C", ")"])
        .assert()
        .success()
        .stdout("A B C + *\n");
}

#[test]
fn test_convert_args_with_minus() {
    cmd()
        .args(["convert", "A", "-", "B", "+", "C"])
        .assert()
        .success()
        .stdout("A B - C +\n");
}

#[test]
fn test_convert_json_format() {
    cmd()
        .args(["convert", "--format", "json", "A", "^", "B", "^", "C"])
        .assert()
        .success()
        .stdout("[\"A\",\"B\",\"C\",\"^\",\"^\"]\n");
}

// ── Convert from Stdin / File ───────────────────────────────────────────────

#[test]
fn test_convert_stdin_lines() {
    cmd()
        .arg("convert")
        .write_stdin("A * B + C\n\nA + B * C\n")
        .assert()
        .success()
        .stdout("A B * C +\nA B C * +\n");
}

#[test]
fn test_convert_input_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("exprs.txt");
    fs::write(&input, "5 + 2 / ( 3 - 8 ) ^ 5 ^ 2\n").unwrap();

    cmd()
        .args(["convert", "-i", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout("5 2 3 8 - 5 2 ^ ^ / +\n");
}

// ── Errors ──────────────────────────────────────────────────────────────────

#[test]
fn test_unbalanced_parentheses() {
    cmd()
        .args(["convert", "A", "+", ")"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unbalanced parentheses"));
}

#[test]
fn test_invalid_token_names_line() {
    cmd()
        .arg("convert")
        .write_stdin("A + B\nA @ B\n")
        .assert()
        .failure()
        .stdout("A B +\n")
        .stderr(predicate::str::contains("line 2"))
        .stderr(predicate::str::contains("[@]"));
}

#[test]
fn test_strict_parens() {
    cmd()
        .args(["convert", "(", "A"])
        .assert()
        .success()
        .stdout("A (\n");

    cmd()
        .args(["convert", "--strict-parens", "(", "A"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unclosed parenthesis"));
}

#[test]
fn test_max_depth_from_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("options.json");
    fs::write(&config, r#"{"max-depth": 1, "unclosed-groups": "emit"}"#).unwrap();

    cmd()
        .args(["convert", "--config", config.to_str().unwrap(), "(", "(", "A", ")", ")"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nesting too deep"));
}

#[test]
fn test_missing_input_file() {
    cmd()
        .args(["convert", "-i", "/nonexistent/exprs.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open input file"));
}

// ── Check / Table / Help ────────────────────────────────────────────────────

#[test]
fn test_check_builtin_cases() {
    cmd()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("PASS #1"))
        .stdout(predicate::str::contains("Passed 9 of 9"));
}

#[test]
fn test_table_output() {
    cmd()
        .arg("table")
        .assert()
        .success()
        .stdout(predicate::str::contains("precedence"))
        .stdout(predicate::str::is_match(r"\^\s+13\s+right").unwrap())
        .stdout(predicate::str::is_match(r"\|\|\s+3\s+left").unwrap());
}

#[test]
fn test_help_output() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("check"));
}

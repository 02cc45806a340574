//! Failure exits of the `odeview` binary. Every case here must fail before
//! the terminal is taken over.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn table_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn missing_file_exits_non_zero() {
    Command::cargo_bin("odeview")
        .unwrap()
        .arg("/no/such/dir/test_ode.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"))
        .stderr(predicate::str::contains("test_ode.txt"));
}

#[test]
fn default_input_is_test_ode_ie() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("odeview")
        .unwrap()
        .current_dir(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("test_ode_ie.txt"));
}

#[test]
fn two_columns_exit_with_insufficient_columns() {
    let file = table_file("0.0 1.0\n1.0 0.9\n");
    Command::cargo_bin("odeview")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Insufficient columns: found 2"));
}

#[test]
fn non_numeric_token_exits_with_parse_error() {
    let file = table_file("0.0 1.0 0.0\n1.0 oops 0.1\n");
    Command::cargo_bin("odeview")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Parse error on line 2"))
        .stderr(predicate::str::contains("oops"));
}

#[test]
fn empty_file_exits_with_parse_error() {
    let file = table_file("");
    Command::cargo_bin("odeview")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Parse error"));
}

#[test]
fn ragged_rows_exit_with_parse_error() {
    let file = table_file("0 1 2\n1 2 3 4\n");
    Command::cargo_bin("odeview")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected 3 columns, found 4"));
}

#[test]
fn log_file_records_load_failure_context() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("odeview.log");
    let file = table_file("0 1\n");

    Command::cargo_bin("odeview")
        .unwrap()
        .arg(file.path())
        .arg("--log")
        .arg(&log)
        .assert()
        .failure();

    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("Starting odeview"));
    assert!(contents.contains("Loaded 1 rows x 2 columns"));
}

#[test]
fn help_lists_options() {
    Command::cargo_bin("odeview")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--theme"))
        .stdout(predicate::str::contains("--log"));
}

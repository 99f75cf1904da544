//! Running the `day-01` binary against input files in a scratch directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn run_with_input(input: Option<&str>) -> assert_cmd::assert::Assert {
    let dir = TempDir::new().expect("create scratch directory");
    if let Some(input) = input {
        fs::write(dir.path().join("input.txt"), input).expect("write input.txt");
    }
    Command::cargo_bin("day-01")
        .expect("find day-01 binary")
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .assert()
}

#[test]
fn prints_both_answers() {
    run_with_input(Some("+3\n+3\n+4\n-2\n-4\n"))
        .success()
        .stdout("Answer part 1: 4\nAnswer part 2: 10\n");
}

#[test]
fn accepts_comma_separated_changes() {
    run_with_input(Some("+1, -2, +3, +1\n"))
        .success()
        .stdout("Answer part 1: 3\nAnswer part 2: 2\n");
}

#[test]
fn missing_input_fails_without_answers() {
    run_with_input(None)
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("input.txt"));
}

#[test]
fn malformed_change_names_line_and_token() {
    run_with_input(Some("+1\n+2\nseven\n"))
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("line 3").and(predicate::str::contains("seven")));
}

#[test]
fn empty_input_still_answers_part_one() {
    run_with_input(Some(""))
        .failure()
        .stdout("Answer part 1: 0\n")
        .stderr(predicate::str::contains("empty input"));
}

#[test]
fn endless_drift_still_answers_part_one() {
    run_with_input(Some("+5\n"))
        .failure()
        .stdout("Answer part 1: 5\n")
        .stderr(predicate::str::contains("can ever repeat"));
}

#[test]
fn undecodable_input_is_a_read_error() {
    let dir = TempDir::new().expect("create scratch directory");
    fs::write(dir.path().join("input.txt"), b"+1\n\xff\xfe\n").expect("write input.txt");
    Command::cargo_bin("day-01")
        .expect("find day-01 binary")
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unable to read input.txt"));
}

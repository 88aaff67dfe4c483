use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

// Every test runs the binary inside its own temp directory so the default
// snippets.csv and the diagnostic log land there.
fn snippets(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("snippets").expect("binary builds");
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn put_echoes_the_stored_snippet() {
    let dir = TempDir::new().unwrap();

    snippets(&dir)
        .args(["put", "greet", "hello world"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stored 'hello world' as 'greet'"));

    assert!(dir.path().join("snippets.csv").exists());
}

#[test]
fn get_prints_the_retrieved_snippet() {
    let dir = TempDir::new().unwrap();

    snippets(&dir)
        .args(["put", "greet", "hello world"])
        .assert()
        .success();

    snippets(&dir)
        .args(["get", "greet"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Retrieved 'hello world' as 'greet'",
        ));
}

#[test]
fn get_miss_is_a_message_not_a_failure() {
    let dir = TempDir::new().unwrap();

    snippets(&dir)
        .args(["put", "other", "something"])
        .assert()
        .success();

    snippets(&dir)
        .args(["get", "nope"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Code snippet does not exist."));
}

#[test]
fn get_against_a_missing_file_fails() {
    let dir = TempDir::new().unwrap();

    snippets(&dir).args(["get", "anything"]).assert().failure();
}

#[test]
fn search_lists_matches_in_file_order() {
    let dir = TempDir::new().unwrap();

    snippets(&dir).args(["put", "x", "foobar"]).assert().success();
    snippets(&dir).args(["put", "y", "foo"]).assert().success();

    snippets(&dir)
        .args(["search", "foo"])
        .assert()
        .success()
        .stdout(predicate::eq("x: foobar\ny: foo\n"));
}

#[test]
fn search_without_matches_prints_a_message() {
    let dir = TempDir::new().unwrap();

    snippets(&dir)
        .args(["put", "x", "foobar"])
        .assert()
        .success();

    snippets(&dir)
        .args(["search", "quux"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No matching code snippets were found.",
        ));
}

#[test]
fn explicit_filename_argument_is_honoured() {
    let dir = TempDir::new().unwrap();

    snippets(&dir)
        .args(["put", "greet", "hi", "alt.csv"])
        .assert()
        .success();

    assert!(dir.path().join("alt.csv").exists());
    assert!(!dir.path().join("snippets.csv").exists());

    snippets(&dir)
        .args(["get", "greet", "alt.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Retrieved 'hi' as 'greet'"));
}

#[test]
fn round_trip_preserves_quoting() {
    let dir = TempDir::new().unwrap();

    snippets(&dir)
        .args(["put", "tricky", "a \"quoted\", comma-laden body"])
        .assert()
        .success();

    snippets(&dir)
        .args(["get", "tricky"])
        .assert()
        .success()
        .stdout(predicate::str::contains("a \"quoted\", comma-laden body"));
}

#[test]
fn unknown_command_is_a_usage_error() {
    let dir = TempDir::new().unwrap();

    snippets(&dir).arg("frobnicate").assert().failure();
}

#[test]
fn missing_arguments_are_a_usage_error() {
    let dir = TempDir::new().unwrap();

    snippets(&dir).arg("put").assert().failure();
}

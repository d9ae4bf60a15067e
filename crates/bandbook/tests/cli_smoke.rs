use assert_cmd::Command;
use predicates::prelude::*;

fn bandbook(data_file: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("bandbook").expect("binary exists");
    cmd.arg("--data-file").arg(data_file);
    cmd
}

#[test]
fn help_displays_usage() {
    Command::cargo_bin("bandbook")
        .expect("binary exists")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn exec_persists_between_invocations() {
    let temp = tempfile::tempdir().expect("temp dir");
    let data = temp.path().join("bandbook.json");

    bandbook(&data)
        .args(["exec", "addb", "n/Queen"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("New band added: Queen\nBands:\n  1. Queen\n"));
    bandbook(&data)
        .args(["exec", "add n/Freddie p/91234567 e/freddie@example.com"])
        .assert()
        .success();
    bandbook(&data)
        .args(["exec", "addm b/1 m/1"])
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with(
                "New musician added to band: Band: Queen; Musician: Freddie\n",
            )
            .and(predicate::str::contains("     Members: Freddie\n")),
        );

    let saved = std::fs::read_to_string(&data).expect("data file written");
    assert!(saved.contains("\"members\": [\n        \"Freddie\""));
}

#[test]
fn exec_failures_exit_non_zero_with_message() {
    let temp = tempfile::tempdir().expect("temp dir");
    let data = temp.path().join("bandbook.json");

    bandbook(&data)
        .args(["exec", "addm b/1 m/1"])
        .assert()
        .failure()
        .stdout(predicate::str::starts_with(
            "The index of musician is not found in the list below.",
        ));
    assert!(!data.exists());
}

#[test]
fn completions_are_generated() {
    Command::cargo_bin("bandbook")
        .expect("binary exists")
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bandbook"));
}

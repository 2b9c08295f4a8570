#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::tempdir;

fn sked(state: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sked-cli").unwrap();
    cmd.arg("--state").arg(state);
    cmd
}

#[test]
fn add_list_and_reject_duplicates() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("state.json");

    sked(&state).args(["list"]).assert().success().stdout("List is empty\n");
    sked(&state)
        .args(["add", "bob"])
        .assert()
        .success()
        .stdout("bob added with ordering 0\n");
    sked(&state).args(["add", "alice", "2"]).assert().success();
    sked(&state)
        .args(["add", "bob"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate identifier: bob"));
    sked(&state).args(["list"]).assert().success().stdout("alice, bob\n");
}

#[test]
fn build_edit_and_query_current() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("state.json");

    for name in ["alice", "bob", "carol"] {
        sked(&state).args(["add", name]).assert().success();
    }
    sked(&state)
        .args(["build", "--from", "20151007", "--weeks", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "alice from 2015-10-07 00:00 UTC to 2015-10-14 00:00 UTC",
        ))
        .stdout(predicate::str::contains(
            "bob from 2015-11-04 00:00 UTC to 2015-11-11 00:00 UTC",
        ));
    sked(&state).args(["current"]).assert().success().stdout("alice\n");

    sked(&state)
        .args(["edit", "carol", "2015100700", "2015100900"])
        .assert()
        .success()
        .stdout("Schedule was edited\n");
    sked(&state).args(["current"]).assert().success().stdout("carol\n");
    sked(&state)
        .args(["schedule"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "alice from 2015-10-09 00:00 UTC to 2015-10-14 00:00 UTC",
        ));
    sked(&state).args(["check"]).assert().success();
}

#[test]
fn unknown_person_is_reported() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("state.json");

    sked(&state)
        .args(["unavail", "zoe", "20151007"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown person: zoe"));
    sked(&state)
        .args(["remove", "zoe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown person: zoe"));
}

#[test]
fn unfilled_shift_exits_with_warning_code() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("state.json");

    sked(&state).args(["add", "alice"]).assert().success();
    sked(&state)
        .args(["unavail", "alice", "20151008", "--to", "20151009"])
        .assert()
        .success();
    sked(&state)
        .args(["build", "--from", "20151007", "--weeks", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no available worker"))
        .stdout(predicate::str::contains("- from 2015-10-07 00:00 UTC"));
}

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn sticky(db: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sticky").unwrap();
    cmd.env("STICKY_DB", db)
        .env_remove("STICKY_ENV")
        .env_remove("STICKY_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn db_in(dir: &TempDir) -> PathBuf {
    dir.path().join("data").join("sticky.db")
}

fn add(db: &Path, content: &str) {
    sticky(db).args(["add", content]).assert().success();
}

#[test]
fn add_list_delete_renumbers() {
    let dir = TempDir::new().unwrap();
    let db = db_in(&dir);

    for c in ["a", "b", "c"] {
        add(&db, c);
    }

    sticky(&db)
        .args(["delete", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully deleted note #2"));

    sticky(&db)
        .arg("list")
        .assert()
        .success()
        .stdout("1 a\n2 c\n");

    sticky(&db)
        .args(["add", "d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Successfully added note #3"));

    sticky(&db).assert().success().stdout("1 a\n2 c\n3 d\n");
}

#[test]
fn add_joins_words() {
    let dir = TempDir::new().unwrap();
    let db = db_in(&dir);

    sticky(&db)
        .args(["add", "buy", "oat", "milk"])
        .assert()
        .success();
    sticky(&db)
        .args(["get", "1"])
        .assert()
        .success()
        .stdout("1 buy oat milk\n");
}

#[test]
fn first_use_announces_new_database() {
    let dir = TempDir::new().unwrap();
    let db = db_in(&dir);

    sticky(&db)
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("Created notes database at"));
    assert!(db.exists());

    sticky(&db)
        .assert()
        .success()
        .stderr(predicate::str::contains("Created notes database").not());
}

#[test]
fn out_of_range_get_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    let db = db_in(&dir);
    add(&db, "only");

    for index in ["0", "2"] {
        sticky(&db)
            .args(["get", index])
            .assert()
            .failure()
            .code(1)
            .stdout("")
            .stderr(predicate::str::contains("Note not found"));
    }

    sticky(&db)
        .args(["delete", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no note at index 2"));

    sticky(&db).assert().success().stdout("1 only\n");
}

#[test]
fn json_output() {
    let dir = TempDir::new().unwrap();
    let db = db_in(&dir);
    add(&db, "a");
    add(&db, "b");

    let out = sticky(&db)
        .args(["list", "--output", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 2);
    assert_eq!(parsed[0]["index"], 1);
    assert_eq!(parsed[0]["content"], "a");
}

#[test]
fn purge_cancelled_keeps_notes() {
    let dir = TempDir::new().unwrap();
    let db = db_in(&dir);
    add(&db, "a");
    add(&db, "b");

    for answer in ["n\n", "\n", "Y\n", "yes\n"] {
        sticky(&db)
            .arg("purge")
            .write_stdin(answer)
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "This operation will delete your entire notes database.",
            ))
            .stdout(predicate::str::contains("Sticky notes database preserved."));
    }

    assert!(db.exists());
    sticky(&db).assert().success().stdout("1 a\n2 b\n");
}

#[test]
fn purge_confirmed_removes_database() {
    let dir = TempDir::new().unwrap();
    let db = db_in(&dir);
    add(&db, "a");

    sticky(&db)
        .arg("purge")
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Sticky notes database deleted."));
    assert!(!db.exists());

    sticky(&db).assert().success().stdout("");
}

#[test]
fn purge_with_closed_stdin_aborts() {
    let dir = TempDir::new().unwrap();
    let db = db_in(&dir);
    add(&db, "a");

    sticky(&db)
        .arg("purge")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input stream closed"))
        .stderr(predicate::str::contains("was not touched"));

    assert!(db.exists());
    sticky(&db).assert().success().stdout("1 a\n");
}

#[test]
fn purge_yes_skips_prompt() {
    let dir = TempDir::new().unwrap();
    let db = db_in(&dir);
    add(&db, "a");

    sticky(&db)
        .args(["purge", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("entire notes database").not())
        .stdout(predicate::str::contains("Sticky notes database deleted."));
    assert!(!db.exists());
}

#[test]
fn path_does_not_create_database() {
    let dir = TempDir::new().unwrap();
    let db = db_in(&dir);

    sticky(&db)
        .arg("path")
        .assert()
        .success()
        .stdout(predicate::str::contains("sticky.db"));
    assert!(!db.exists());
}

#[test]
fn dev_mode_uses_working_directory() {
    let dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("sticky").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("STICKY_DB")
        .env("STICKY_ENV", "dev")
        .args(["add", "here"])
        .assert()
        .success();

    assert!(dir.path().join("sticky.db").exists());
}

#[test]
fn unwritable_location_reports_path() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("file");
    std::fs::write(&blocker, "").unwrap();
    let db = blocker.join("sticky.db");

    sticky(&db)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Storage error at"))
        .stderr(predicate::str::contains("sticky.db"));
}

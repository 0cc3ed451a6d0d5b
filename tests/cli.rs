use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

// Each test gets its own HOME so a real user config never leaks in.
fn bin(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("todo-finder").unwrap();
    cmd.env("HOME", home);
    cmd
}

#[test]
fn list_finds_todos_and_prunes_ignored_directory() {
    let home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.go"), "package main\n\n// TODO: fix bug\n").unwrap();
    fs::write(dir.path().join(".gitignore"), "vendor/\n").unwrap();
    let vendor = dir.path().join("vendor");
    fs::create_dir(&vendor).unwrap();
    fs::write(vendor.join("lib.go"), "// TODO: vendored\n").unwrap();

    bin(home.path())
        .arg("list")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("a.go:3  fix bug"))
        .stdout(predicate::str::contains("vendored").not());
}

#[test]
fn list_reports_when_nothing_is_found() {
    let home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("plain.txt"), "no comments here\n").unwrap();

    bin(home.path())
        .arg("list")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No todos were found in"));
}

#[test]
fn no_gitignore_flag_includes_ignored_files() {
    let home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".gitignore"), "vendor/\n").unwrap();
    let vendor = dir.path().join("vendor");
    fs::create_dir(&vendor).unwrap();
    fs::write(vendor.join("lib.go"), "// TODO: vendored\n").unwrap();

    bin(home.path())
        .arg("list")
        .arg(dir.path())
        .arg("--no-gitignore")
        .assert()
        .success()
        .stdout(predicate::str::contains("vendored"));
}

#[test]
fn hidden_flag_includes_hidden_directories() {
    let home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    let hidden = dir.path().join(".ci");
    fs::create_dir(&hidden).unwrap();
    fs::write(hidden.join("pipeline.sh"), "# TODO: speed this up\n").unwrap();

    bin(home.path())
        .arg("list")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No todos were found in"));

    bin(home.path())
        .arg("list")
        .arg(dir.path())
        .arg("--hidden")
        .assert()
        .success()
        .stdout(predicate::str::contains("speed this up"));
}

#[test]
fn marker_prints_the_default() {
    let home = TempDir::new().unwrap();

    bin(home.path())
        .arg("marker")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The current marker for todo comments is: TODO:",
        ));
}

#[test]
fn marker_can_be_changed_and_drives_the_scan() {
    let home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("a.rs"),
        "// TODO: old marker\n// FIXME: new marker\n",
    )
    .unwrap();

    bin(home.path())
        .arg("marker")
        .arg("FIXME:")
        .assert()
        .success()
        .stdout(predicate::str::contains("Marker set to: FIXME:"));

    bin(home.path())
        .arg("list")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("a.rs:2  new marker"))
        .stdout(predicate::str::contains("old marker").not());
}

#[test]
fn unreadable_file_is_skipped_without_failing() {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let home = TempDir::new().unwrap();
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("ok.rs"), "// TODO: readable\n").unwrap();
        let locked = dir.path().join("locked.rs");
        fs::write(&locked, "// TODO: unreadable\n").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits do not apply when running as root.
        let enforced = fs::read(&locked).is_err();

        let assert = bin(home.path())
            .arg("list")
            .arg(dir.path())
            .assert()
            .success()
            .stdout(predicate::str::contains("ok.rs:1  readable"));
        if enforced {
            assert.stdout(predicate::str::contains("unreadable").not());
        }

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o644)).unwrap();
    }
}

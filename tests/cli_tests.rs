//! Integration tests for the dotrc CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn dotrc(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("dotrc").unwrap();
    // Keep config and backups inside the test sandbox.
    cmd.env("HOME", home);
    cmd.env("XDG_CONFIG_HOME", home.join(".config"));
    cmd
}

#[test]
fn test_list_command() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".bashrc");
    fs::write(
        &rc_file,
        "alias ll='ls -la'\nalias gs='git status'\nexport EDITOR=nvim\n",
    )
    .unwrap();

    dotrc(dir.path())
        .args(["--file", rc_file.to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ll"))
        .stdout(predicate::str::contains("gs"))
        .stdout(predicate::str::contains("EDITOR"));
}

#[test]
fn test_list_alias_only() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".bashrc");
    fs::write(&rc_file, "alias ll='ls -la'\nexport EDITOR=nvim\n").unwrap();

    dotrc(dir.path())
        .args(["--file", rc_file.to_str().unwrap(), "list", "alias"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ll"))
        .stdout(predicate::str::contains("EDITOR").not());
}

#[test]
fn test_check_no_issues() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".bashrc");
    fs::write(&rc_file, "alias ll='ls -la'\nalias gs='git status'\n").unwrap();

    dotrc(dir.path())
        .args(["--file", rc_file.to_str().unwrap(), "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
}

#[test]
fn test_check_duplicate() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".bashrc");
    fs::write(&rc_file, "alias ll='ls -la'\nalias ll='ls -l'\n").unwrap();

    dotrc(dir.path())
        .args(["--file", rc_file.to_str().unwrap(), "check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Duplicate"));
}

#[test]
fn test_add_alias_appends_without_touching_other_lines() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".bashrc");
    let original = "# my rc\nexport EDITOR=nvim\n";
    fs::write(&rc_file, original).unwrap();

    dotrc(dir.path())
        .args([
            "--file",
            rc_file.to_str().unwrap(),
            "add-alias",
            "gs",
            "git status",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&rc_file).unwrap();
    assert_eq!(content, "# my rc\nexport EDITOR=nvim\nalias gs='git status'\n");
}

#[test]
fn test_add_alias_rejects_duplicate() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".bashrc");
    fs::write(&rc_file, "alias gs='git status'\n").unwrap();

    dotrc(dir.path())
        .args([
            "--file",
            rc_file.to_str().unwrap(),
            "add-alias",
            "gs",
            "git switch",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already defined"));
}

#[test]
fn test_toggle_disables_in_place() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".bashrc");
    fs::write(&rc_file, "# header\nalias ll='ls -la'\nexport EDITOR=nvim\n").unwrap();

    dotrc(dir.path())
        .args(["--file", rc_file.to_str().unwrap(), "toggle", "ll"])
        .assert()
        .success();

    let content = fs::read_to_string(&rc_file).unwrap();
    assert_eq!(content, "# header\n# alias ll='ls -la'\nexport EDITOR=nvim\n");
}

#[test]
fn test_toggle_twice_restores_line() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".bashrc");
    let original = "alias ll='ls -la'\n";
    fs::write(&rc_file, original).unwrap();

    for _ in 0..2 {
        dotrc(dir.path())
            .args(["--file", rc_file.to_str().unwrap(), "toggle", "ll"])
            .assert()
            .success();
    }

    assert_eq!(fs::read_to_string(&rc_file).unwrap(), original);
}

#[test]
fn test_toggle_twice_restores_indented_line() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".bashrc");
    let original = "if true; then\n  alias ll='ls -la'\nfi\n";
    fs::write(&rc_file, original).unwrap();

    for _ in 0..2 {
        dotrc(dir.path())
            .args(["--file", rc_file.to_str().unwrap(), "toggle", "ll"])
            .assert()
            .success();
    }

    assert_eq!(fs::read_to_string(&rc_file).unwrap(), original);
}

#[test]
fn test_remove_path_keeps_sibling_directories() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".bashrc");
    fs::write(
        &rc_file,
        "export PATH=\"/usr/local/bin:$HOME/bin:$PATH\"\nalias ll='ls -la'\n",
    )
    .unwrap();

    dotrc(dir.path())
        .args([
            "--file",
            rc_file.to_str().unwrap(),
            "--yes",
            "remove",
            "path",
            "$HOME/bin",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&rc_file).unwrap();
    assert_eq!(
        content,
        "export PATH=\"/usr/local/bin:$PATH\"\nalias ll='ls -la'\n"
    );
}

#[test]
fn test_remove_function_deletes_whole_range() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".bashrc");
    fs::write(
        &rc_file,
        "alias keep='me'\ngreet() {\n  echo hi\n}\nexport EDITOR=nvim\n",
    )
    .unwrap();

    dotrc(dir.path())
        .args([
            "--file",
            rc_file.to_str().unwrap(),
            "--yes",
            "remove",
            "func",
            "greet",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&rc_file).unwrap();
    assert_eq!(content, "alias keep='me'\nexport EDITOR=nvim\n");
}

#[test]
fn test_remove_unknown_entity_fails() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".bashrc");
    fs::write(&rc_file, "alias ll='ls -la'\n").unwrap();

    dotrc(dir.path())
        .args([
            "--file",
            rc_file.to_str().unwrap(),
            "--yes",
            "remove",
            "alias",
            "nope",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no alias named"));
}

#[test]
fn test_git_set_get_roundtrip() {
    let dir = tempdir().unwrap();
    let git_file = dir.path().join("gitconfig");

    dotrc(dir.path())
        .args([
            "git",
            "--file",
            git_file.to_str().unwrap(),
            "set",
            "user",
            "name",
            "Alice",
        ])
        .assert()
        .success();

    dotrc(dir.path())
        .args([
            "git",
            "--file",
            git_file.to_str().unwrap(),
            "get",
            "user",
            "name",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"));
}

#[test]
fn test_git_list_merges_duplicate_sections() {
    let dir = tempdir().unwrap();
    let git_file = dir.path().join("gitconfig");
    fs::write(
        &git_file,
        "[user]\nname = Alice\n[core]\neditor = vim\n[user]\nemail = a@example.com\n",
    )
    .unwrap();

    dotrc(dir.path())
        .args(["git", "--file", git_file.to_str().unwrap(), "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[user]\n\tname = Alice\n\temail = a@example.com\n",
        ));
}

#[test]
fn test_mutating_command_creates_backup() {
    let dir = tempdir().unwrap();
    let rc_file = dir.path().join(".bashrc");
    fs::write(&rc_file, "alias ll='ls -la'\n").unwrap();

    dotrc(dir.path())
        .args(["--file", rc_file.to_str().unwrap(), "toggle", "ll"])
        .assert()
        .success();

    let backups = dir.path().join(".config").join("dotrc").join("backups");
    let count = fs::read_dir(&backups).unwrap().count();
    assert_eq!(count, 1);
}

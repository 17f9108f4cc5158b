use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
use zipdir_testing::assertions;

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("zipdir").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("zipdir"));
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("zipdir").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "A streaming directory-to-zip archiver",
        ));
}

#[test]
fn test_pack_directory() {
    let temp_dir = TempDir::new().unwrap();
    let source_dir = temp_dir.path().join("source");
    let archive_path = temp_dir.path().join("test.zip");

    fs::create_dir_all(source_dir.join("subdir")).unwrap();
    fs::write(source_dir.join("file1.txt"), "Content 1").unwrap();
    fs::write(source_dir.join("subdir/file2.txt"), "Content 2").unwrap();

    let mut cmd = Command::cargo_bin("zipdir").unwrap();
    cmd.arg("pack")
        .arg(&source_dir)
        .arg("-o")
        .arg(&archive_path)
        .assert()
        .success();

    assert!(archive_path.exists());
    let mut names = assertions::entry_names(&archive_path).unwrap();
    names.sort();
    assert_eq!(names, vec!["source/file1.txt", "source/subdir/file2.txt"]);
}

#[test]
fn test_pack_flatten() {
    let temp_dir = TempDir::new().unwrap();
    let source_dir = temp_dir.path().join("source");
    let archive_path = temp_dir.path().join("flat.zip");

    fs::create_dir_all(source_dir.join("subdir")).unwrap();
    fs::write(source_dir.join("file1.txt"), "Content 1").unwrap();
    fs::write(source_dir.join("subdir/file2.txt"), "Content 2").unwrap();

    let mut cmd = Command::cargo_bin("zipdir").unwrap();
    cmd.arg("pack")
        .arg(&source_dir)
        .arg("-o")
        .arg(&archive_path)
        .arg("--flatten")
        .assert()
        .success();

    let mut names = assertions::entry_names(&archive_path).unwrap();
    names.sort();
    assert_eq!(names, vec!["file1.txt", "file2.txt"]);
}

#[test]
fn test_bundle_preserves_order() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("b.txt");
    let second = temp_dir.path().join("a.txt");
    let archive_path = temp_dir.path().join("bundle.zip");

    fs::write(&first, "first in").unwrap();
    fs::write(&second, "second in").unwrap();

    let mut cmd = Command::cargo_bin("zipdir").unwrap();
    cmd.arg("bundle")
        .arg(&first)
        .arg(&second)
        .arg("-o")
        .arg(&archive_path)
        .assert()
        .success();

    assert_eq!(
        assertions::entry_names(&archive_path).unwrap(),
        vec!["b.txt", "a.txt"]
    );
}

#[test]
fn test_pack_missing_source_exits_with_code_2() {
    let temp_dir = TempDir::new().unwrap();
    let archive_path = temp_dir.path().join("out.zip");

    let mut cmd = Command::cargo_bin("zipdir").unwrap();
    cmd.arg("pack")
        .arg(temp_dir.path().join("does-not-exist"))
        .arg("-o")
        .arg(&archive_path)
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_bundle_rejects_directory_with_code_2() {
    let temp_dir = TempDir::new().unwrap();
    let dir = temp_dir.path().join("a_directory");
    let archive_path = temp_dir.path().join("out.zip");
    fs::create_dir(&dir).unwrap();

    let mut cmd = Command::cargo_bin("zipdir").unwrap();
    cmd.arg("bundle")
        .arg(&dir)
        .arg("-o")
        .arg(&archive_path)
        .assert()
        .failure()
        .code(2);
}

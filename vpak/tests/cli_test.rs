use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::io::Read;
use std::process::Command;

fn vpak_cmd() -> Command {
    Command::cargo_bin("vpak").unwrap()
}

/// Lay out a small tree playing the role of the virtual filesystem.
fn sample_tree() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("Windows/Logs")).unwrap();
    fs::create_dir_all(root.join("Users/bob/Documents")).unwrap();
    fs::write(root.join("Windows/a.log"), b"alpha").unwrap();
    fs::write(root.join("Windows/b.txt"), b"beta").unwrap();
    fs::write(root.join("Windows/Logs/app.log"), b"app").unwrap();
    fs::write(root.join("Users/bob/Documents/note.txt"), b"note").unwrap();
    dir
}

fn archive_names(path: &std::path::Path) -> Vec<String> {
    let file = fs::File::open(path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();
    names.sort();
    names
}

#[test]
fn test_packages_rules_file_selection() {
    let tree = sample_tree();
    let out_dir = tempfile::tempdir().unwrap();
    let output = out_dir.path().join("out.zip");
    let rules = out_dir.path().join("rules.txt");
    fs::write(&rules, "## logs ##\n\\Windows\\*.log\n\\Users\\**\n").unwrap();

    vpak_cmd()
        .arg("--input")
        .arg(tree.path())
        .arg("--output")
        .arg(&output)
        .arg("--rules")
        .arg(&rules)
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing completed."));

    assert_eq!(
        archive_names(&output),
        vec![
            "Users/bob/",
            "Users/bob/Documents/",
            "Users/bob/Documents/note.txt",
            "Windows/a.log",
        ]
    );
}

#[test]
fn test_archived_file_content_round_trips() {
    let tree = sample_tree();
    let out_dir = tempfile::tempdir().unwrap();
    let output = out_dir.path().join("out.zip");
    let rules = out_dir.path().join("rules.txt");
    fs::write(&rules, "\\Windows\\a.log\n").unwrap();

    vpak_cmd()
        .arg("-i")
        .arg(tree.path())
        .arg("-o")
        .arg(&output)
        .arg("-r")
        .arg(&rules)
        .assert()
        .success();

    let file = fs::File::open(&output).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut entry = archive.by_name("Windows/a.log").unwrap();
    let mut contents = String::new();
    entry.read_to_string(&mut contents).unwrap();
    assert_eq!(contents, "alpha");
}

#[test]
fn test_no_clobber_refuses_existing_output() {
    let tree = sample_tree();
    let out_dir = tempfile::tempdir().unwrap();
    let output = out_dir.path().join("out.zip");
    fs::write(&output, b"keep me").unwrap();

    vpak_cmd()
        .arg("-i")
        .arg(tree.path())
        .arg("-o")
        .arg(&output)
        .arg("--no-clobber")
        .assert()
        .failure()
        .stdout(predicate::str::contains("--no-clobber is set"));

    assert_eq!(fs::read(&output).unwrap(), b"keep me");
}

#[test]
fn test_missing_input_directory_fails() {
    let out_dir = tempfile::tempdir().unwrap();
    vpak_cmd()
        .arg("-i")
        .arg(out_dir.path().join("nope"))
        .arg("-o")
        .arg(out_dir.path().join("out.zip"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Directory not found"));
}

#[test]
fn test_missing_rules_file_fails() {
    let tree = sample_tree();
    let out_dir = tempfile::tempdir().unwrap();

    vpak_cmd()
        .arg("-i")
        .arg(tree.path())
        .arg("-o")
        .arg(out_dir.path().join("out.zip"))
        .arg("-r")
        .arg(out_dir.path().join("absent-rules.txt"))
        .assert()
        .failure();
}

#[test]
fn test_force_overwrites_without_prompting() {
    let tree = sample_tree();
    let out_dir = tempfile::tempdir().unwrap();
    let output = out_dir.path().join("out.zip");
    fs::write(&output, b"stale").unwrap();
    let rules = out_dir.path().join("rules.txt");
    fs::write(&rules, "\\Windows\\b.txt\n").unwrap();

    vpak_cmd()
        .arg("-i")
        .arg(tree.path())
        .arg("-o")
        .arg(&output)
        .arg("-r")
        .arg(&rules)
        .arg("--force")
        .assert()
        .success();

    assert_eq!(archive_names(&output), vec!["Windows/b.txt"]);
}

use std::fs;

use assert_cmd::cargo::{self};
use predicates::str::contains;
use tempfile::TempDir;

const CATALOG: &str = r#"[
  {"id": 2, "name": "서리 늑대", "star": 2, "detail": {"guide": ["무리 사냥[선두 개체, **포위 주의**]"]}},
  {"id": 1, "name": "불꽃 도마뱀", "star": 3}
]"#;

fn catalog_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("data.json"), CATALOG).unwrap();
    dir
}

#[test]
fn prints_help() {
    let mut cmd = cargo::cargo_bin_cmd!("bestiary");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(contains("bestiary"))
        .stdout(contains("--data"));
}

#[test]
fn lists_entries_in_id_order() {
    let dir = catalog_dir();
    let mut cmd = cargo::cargo_bin_cmd!("bestiary");
    let output = cmd
        .arg("--data")
        .arg(dir.path().join("data.json"))
        .arg("list")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();
    assert_eq!(
        stdout.lines().collect::<Vec<_>>(),
        vec!["1. 불꽃 도마뱀 ★3", "2. 서리 늑대 ★2"]
    );
}

#[test]
fn shows_an_entry_with_its_guide() {
    let dir = catalog_dir();
    let mut cmd = cargo::cargo_bin_cmd!("bestiary");
    cmd.current_dir(dir.path())
        .args(["show", "2"])
        .assert()
        .success()
        .stdout(contains("무리 사냥"))
        .stdout(contains("- 포위 주의"))
        .stdout(contains("도감번호: N/A"));
}

#[test]
fn shows_json_export() {
    let dir = catalog_dir();
    let mut cmd = cargo::cargo_bin_cmd!("bestiary");
    cmd.current_dir(dir.path())
        .args(["show", "1", "--json"])
        .assert()
        .success()
        .stdout(contains("\"guide\""))
        .stdout(contains("\"pending\""));
}

#[test]
fn unknown_id_fails() {
    let dir = catalog_dir();
    let mut cmd = cargo::cargo_bin_cmd!("bestiary");
    cmd.current_dir(dir.path())
        .args(["show", "99"])
        .assert()
        .failure()
        .stderr(contains("no entry with id 99"));
}

#[test]
fn missing_catalog_fails() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = cargo::cargo_bin_cmd!("bestiary");
    cmd.current_dir(dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(contains("data.json"));
}

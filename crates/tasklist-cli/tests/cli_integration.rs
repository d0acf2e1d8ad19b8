use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn tasklist() -> Command {
    Command::cargo_bin("tasklist").unwrap()
}

fn write_dataset(path: &Path, count: i64) {
    let tasks: Vec<Value> = (1..=count)
        .map(|i| {
            json!({
                "userId": (i % 3) + 1,
                "id": i,
                "title": format!("task {i}"),
                "completed": i % 2 == 0,
            })
        })
        .collect();
    fs::write(path, serde_json::to_string(&tasks).unwrap()).unwrap();
}

fn task_ids(json: &Value) -> Vec<i64> {
    json["tasks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_i64().unwrap())
        .collect()
}

#[test]
fn test_renders_first_page_by_default() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("tasks.json");
    write_dataset(&file, 12);

    tasklist()
        .arg(file.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("Viewing 5 of 12 tasks"))
        .stdout(predicate::str::contains("Page 1 of 3"))
        .stdout(predicate::str::contains("task 1"));
}

#[test]
fn test_short_last_page_and_empty_overflow_page() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("tasks.json");
    write_dataset(&file, 12);

    tasklist()
        .args([file.to_str().unwrap(), "--page", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Viewing 2 of 12 tasks"));

    tasklist()
        .args([file.to_str().unwrap(), "--page", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no tasks on this page"));
}

#[test]
fn test_pagination_strip_with_gaps() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("tasks.json");
    write_dataset(&file, 50);

    tasklist()
        .args([file.to_str().unwrap(), "--page", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 \u{ab} 3 4 [5] 6 7 \u{bb} 10"));
}

#[test]
fn test_status_filter_narrows_the_view() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("tasks.json");
    write_dataset(&file, 12);

    let output = tasklist()
        .args([file.to_str().unwrap(), "--status", "completed", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["visible"], 6);
    assert_eq!(task_ids(&json), vec![2, 4, 6, 8, 10]);
}

#[test]
fn test_move_applies_splice_semantics() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("tasks.json");
    write_dataset(&file, 5);

    let output = tasklist()
        .args([file.to_str().unwrap(), "--move", "3:5", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(task_ids(&json), vec![1, 2, 4, 5, 3]);
}

#[test]
fn test_malformed_dataset_degrades_to_empty_list() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("tasks.json");
    fs::write(&file, "not an array").unwrap();

    tasklist()
        .arg(file.to_str().unwrap())
        .assert()
        .success()
        .stdout(predicate::str::contains("Viewing 0 of 0 tasks"));
}

#[test]
fn test_missing_dataset_file_fails() {
    tasklist()
        .arg("/nonexistent/tasks.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read task dataset"));
}

#[test]
fn test_invalid_move_spec_fails() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("tasks.json");
    write_dataset(&file, 5);

    tasklist()
        .args([file.to_str().unwrap(), "--move", "3-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected DRAGGED:TARGET"));
}

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a Command with --no-color and a private database
fn planit_cmd(temp_dir: &TempDir) -> Command {
    let db_path = temp_dir.path().join("cli_test.db");
    let mut cmd = Command::cargo_bin("planit").expect("Failed to find planit binary");
    cmd.arg("--no-color")
        .arg("--database-file")
        .arg(db_path);
    cmd
}

fn write_response(dir: &Path) -> String {
    let path = dir.join("response.txt");
    fs::write(
        &path,
        r#"Here is your plan:
{"domain": "Music", "tasks": [
  {"id": 1, "description": "Learn scales", "duration_days": 3, "priority": "high", "category": "Practice"},
  {"id": 2, "description": "Play a song", "duration_days": 4, "dependencies": [1]}
]}"#,
    )
    .expect("Failed to write response file");
    path.to_string_lossy().into_owned()
}

fn generate_fallback(temp_dir: &TempDir) {
    planit_cmd(temp_dir)
        .args([
            "generate",
            "Write a novel",
            "--start",
            "2024-01-01",
            "--end",
            "2024-01-31",
        ])
        .assert()
        .success();
}

#[test]
fn test_cli_generate_uses_fallback_without_response() {
    let temp_dir = TempDir::new().unwrap();

    planit_cmd(&temp_dir)
        .args([
            "generate",
            "Write a novel",
            "--start",
            "2024-01-01",
            "--end",
            "2024-01-31",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created plan with ID: 1"))
        .stdout(predicate::str::contains("# Write a novel"))
        .stdout(predicate::str::contains("- Domain: General Project"))
        .stdout(predicate::str::contains("Research and information gathering"));
}

#[test]
fn test_cli_generate_with_response_file() {
    let temp_dir = TempDir::new().unwrap();
    let response = write_response(temp_dir.path());

    planit_cmd(&temp_dir)
        .args([
            "generate",
            "Learn guitar",
            "--start",
            "2024-05-01",
            "--end",
            "2024-05-31",
            "--response-file",
            &response,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Domain: Music"))
        .stdout(predicate::str::contains("1. Learn scales"))
        .stdout(predicate::str::contains(
            "- Schedule: 2024-05-04 to 2024-05-08 (4 day(s))",
        ));
}

#[test]
fn test_cli_generate_rejects_bad_date() {
    let temp_dir = TempDir::new().unwrap();

    planit_cmd(&temp_dir)
        .args(["generate", "Goal", "--start", "soon", "--end", "2024-01-31"])
        .assert()
        .failure();
}

#[test]
fn test_cli_list_empty_plans() {
    let temp_dir = TempDir::new().unwrap();

    planit_cmd(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No plans found."));
}

#[test]
fn test_cli_no_command_lists_plans() {
    let temp_dir = TempDir::new().unwrap();
    generate_fallback(&temp_dir);

    planit_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("## Write a novel (ID: 1) (0/6)"));
}

#[test]
fn test_cli_show_missing_plan() {
    let temp_dir = TempDir::new().unwrap();

    planit_cmd(&temp_dir)
        .args(["show", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Plan with ID 42 not found"));
}

#[test]
fn test_cli_progress_and_show() {
    let temp_dir = TempDir::new().unwrap();
    generate_fallback(&temp_dir);

    planit_cmd(&temp_dir)
        .args(["progress", "1", "--completed", "1,2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated plan with ID: 1"))
        .stdout(predicate::str::contains("2/6 task(s) completed"));

    planit_cmd(&temp_dir)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plan ID: 1"))
        .stdout(predicate::str::contains("### [x] 1."));
}

#[test]
fn test_cli_add_task() {
    let temp_dir = TempDir::new().unwrap();
    generate_fallback(&temp_dir);

    planit_cmd(&temp_dir)
        .args([
            "add-task",
            "1",
            "Find an editor",
            "--duration",
            "3",
            "--depends-on",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added task 7: Find an editor"));
}

#[test]
fn test_cli_add_task_rejects_long_duration() {
    let temp_dir = TempDir::new().unwrap();
    generate_fallback(&temp_dir);

    planit_cmd(&temp_dir)
        .args(["add-task", "1", "Too long", "--duration", "30"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duration_days"));
}

#[test]
fn test_cli_regenerate_creates_new_plan() {
    let temp_dir = TempDir::new().unwrap();
    let response = write_response(temp_dir.path());
    generate_fallback(&temp_dir);

    planit_cmd(&temp_dir)
        .args([
            "regenerate",
            "1",
            "--completed",
            "1",
            "--feedback",
            "Shorter please",
            "--response-file",
            &response,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created plan with ID: 2"))
        .stdout(predicate::str::contains("- Progress: 1/3 tasks completed"));
}

#[test]
fn test_cli_json_output() {
    let temp_dir = TempDir::new().unwrap();
    generate_fallback(&temp_dir);

    let output = planit_cmd(&temp_dir)
        .args(["--json", "show", "1"])
        .output()
        .expect("Failed to run planit");
    assert!(output.status.success());

    let record: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output should be JSON");
    assert_eq!(record["id"], 1);
    assert_eq!(record["plan"]["total_tasks"], 6);
    assert_eq!(record["plan"]["start_date"], "2024-01-01");
}

#[test]
fn test_cli_prompt_prints_request() {
    let temp_dir = TempDir::new().unwrap();

    planit_cmd(&temp_dir)
        .args([
            "prompt",
            "Plan a wedding",
            "--start",
            "2024-06-01",
            "--end",
            "2024-08-30",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("GOAL: Plan a wedding"))
        .stdout(predicate::str::contains("90 days"));
}

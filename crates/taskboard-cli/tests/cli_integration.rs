use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn taskboard() -> Command {
    Command::cargo_bin("taskboard").unwrap()
}

fn parse_json_output(output: &str) -> Value {
    serde_json::from_str(output).expect("Failed to parse JSON output")
}

fn extract_id(json: &Value) -> String {
    json["data"]["id"].as_str().unwrap().to_string()
}

fn add_task(dir: &Path, name: &str, column: &str, favorite: bool) -> String {
    let mut args = vec![
        "--dir",
        dir.to_str().unwrap(),
        "task",
        "add",
        "--name",
        name,
        "--column",
        column,
    ];
    if favorite {
        args.push("--favorite");
    }
    let output = taskboard()
        .args(&args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    extract_id(&parse_json_output(&String::from_utf8_lossy(&output)))
}

mod task_tests {
    use super::*;

    #[test]
    fn test_task_add_and_list() {
        let dir = tempdir().unwrap();

        let output = taskboard()
            .args([
                "--dir",
                dir.path().to_str().unwrap(),
                "task",
                "add",
                "--name",
                "Write docs",
                "--column",
                "todo",
                "--deadline",
                "2026-12-31",
            ])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json = parse_json_output(&String::from_utf8_lossy(&output));
        assert!(json["success"].as_bool().unwrap());
        assert_eq!(json["data"]["name"], "Write docs");
        assert_eq!(json["data"]["columnId"], "todo");
        assert_eq!(json["data"]["deadline"], "2026-12-31");

        let list = taskboard()
            .args([
                "--dir",
                dir.path().to_str().unwrap(),
                "task",
                "list",
                "--column",
                "todo",
            ])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let list_json = parse_json_output(&String::from_utf8_lossy(&list));
        assert_eq!(list_json["data"]["count"], 1);
        assert_eq!(list_json["data"]["items"][0]["name"], "Write docs");
    }

    #[test]
    fn test_task_list_favorites_first_alphabetical() {
        let dir = tempdir().unwrap();
        add_task(dir.path(), "C", "todo", false);
        add_task(dir.path(), "A", "todo", false);
        add_task(dir.path(), "B", "todo", true);

        let output = taskboard()
            .args([
                "--dir",
                dir.path().to_str().unwrap(),
                "task",
                "list",
                "--column",
                "todo",
                "--sort",
                "alphabetical",
            ])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json = parse_json_output(&String::from_utf8_lossy(&output));
        let names: Vec<&str> = json["data"]["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_task_move_across_columns() {
        let dir = tempdir().unwrap();
        let id = add_task(dir.path(), "t1", "todo", false);

        let output = taskboard()
            .args([
                "--dir",
                dir.path().to_str().unwrap(),
                "task",
                "move",
                "--id",
                &id,
                "--column",
                "in-progress",
            ])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json = parse_json_output(&String::from_utf8_lossy(&output));
        assert_eq!(json["data"]["columnId"], "in-progress");

        let todo = taskboard()
            .args([
                "--dir",
                dir.path().to_str().unwrap(),
                "task",
                "list",
                "--column",
                "todo",
            ])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        assert_eq!(parse_json_output(&String::from_utf8_lossy(&todo))["data"]["count"], 0);
    }

    #[test]
    fn test_task_update_and_favorite() {
        let dir = tempdir().unwrap();
        let id = add_task(dir.path(), "draft", "todo", false);

        taskboard()
            .args([
                "--dir",
                dir.path().to_str().unwrap(),
                "task",
                "update",
                "--id",
                &id,
                "--name",
                "final",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("\"name\":\"final\""));

        let output = taskboard()
            .args([
                "--dir",
                dir.path().to_str().unwrap(),
                "task",
                "favorite",
                "--id",
                &id,
            ])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json = parse_json_output(&String::from_utf8_lossy(&output));
        assert_eq!(json["data"]["isFavorite"], true);
    }

    #[test]
    fn test_task_get_unknown_id_fails() {
        let dir = tempdir().unwrap();

        taskboard()
            .args([
                "--dir",
                dir.path().to_str().unwrap(),
                "task",
                "get",
                "--id",
                "no-such-task",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Task not found"));
    }

    #[test]
    fn test_move_to_unknown_column_fails_without_orphan_bucket() {
        let dir = tempdir().unwrap();
        let id = add_task(dir.path(), "t1", "todo", false);

        taskboard()
            .args([
                "--dir",
                dir.path().to_str().unwrap(),
                "task",
                "move",
                "--id",
                &id,
                "--column",
                "nowhere",
            ])
            .assert()
            .failure();

        // Task is still where it was.
        let output = taskboard()
            .args([
                "--dir",
                dir.path().to_str().unwrap(),
                "task",
                "get",
                "--id",
                &id,
            ])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let json = parse_json_output(&String::from_utf8_lossy(&output));
        assert_eq!(json["data"]["columnId"], "todo");
    }
}

mod column_tests {
    use super::*;

    #[test]
    fn test_default_columns_listed_in_order() {
        let dir = tempdir().unwrap();

        let output = taskboard()
            .args(["--dir", dir.path().to_str().unwrap(), "column", "list"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json = parse_json_output(&String::from_utf8_lossy(&output));
        let names: Vec<&str> = json["data"]["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec!["To Do", "In Progress", "Done"]);
    }

    #[test]
    fn test_column_add_rename_delete() {
        let dir = tempdir().unwrap();

        let output = taskboard()
            .args([
                "--dir",
                dir.path().to_str().unwrap(),
                "column",
                "add",
                "--name",
                "Blocked",
            ])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        let json = parse_json_output(&String::from_utf8_lossy(&output));
        let id = extract_id(&json);
        assert_eq!(json["data"]["order"], 3);

        taskboard()
            .args([
                "--dir",
                dir.path().to_str().unwrap(),
                "column",
                "rename",
                "--id",
                &id,
                "--name",
                "Waiting",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("Waiting"));

        taskboard()
            .args([
                "--dir",
                dir.path().to_str().unwrap(),
                "column",
                "delete",
                "--id",
                &id,
            ])
            .assert()
            .success();
    }

    #[test]
    fn test_column_delete_cascades_tasks() {
        let dir = tempdir().unwrap();
        let id = add_task(dir.path(), "doomed", "todo", false);

        taskboard()
            .args([
                "--dir",
                dir.path().to_str().unwrap(),
                "column",
                "delete",
                "--id",
                "todo",
            ])
            .assert()
            .success();

        taskboard()
            .args([
                "--dir",
                dir.path().to_str().unwrap(),
                "task",
                "get",
                "--id",
                &id,
            ])
            .assert()
            .failure();
    }
}

mod migration_tests {
    use super::*;

    #[test]
    fn test_legacy_flat_file_is_migrated_on_load() {
        let dir = tempdir().unwrap();
        let legacy = serde_json::json!({
            "columns": [
                { "id": "todo", "name": "To Do", "order": 0 },
                { "id": "done", "name": "Done", "order": 1 },
            ],
            "tasks": [{
                "id": "t1",
                "name": "from the old format",
                "description": "",
                "deadline": null,
                "columnId": "todo",
                "imageUrl": null,
                "isFavorite": true,
                "createdAt": "2024-01-01T00:00:00Z",
                "updatedAt": "2024-01-01T00:00:00Z",
            }],
        });
        fs::write(
            dir.path().join("task-board.json"),
            serde_json::to_vec(&legacy).unwrap(),
        )
        .unwrap();

        let output = taskboard()
            .args([
                "--dir",
                dir.path().to_str().unwrap(),
                "task",
                "list",
                "--column",
                "todo",
            ])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json = parse_json_output(&String::from_utf8_lossy(&output));
        assert_eq!(json["data"]["count"], 1);
        assert_eq!(json["data"]["items"][0]["name"], "from the old format");
        assert_eq!(json["data"]["items"][0]["isFavorite"], true);
    }
}

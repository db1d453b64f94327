use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn phonebook(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("phonebook").unwrap();
    cmd.current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--config-dir")
        .arg(dir.join("config"));
    cmd
}

#[test]
fn test_first_run_seeds_and_lists() {
    let temp_dir = tempfile::tempdir().unwrap();

    phonebook(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alan"))
        .stdout(predicate::str::contains("Adelina"))
        .stdout(predicate::str::contains("ID:9800"));

    let text = fs::read_to_string(temp_dir.path().join("phonebook.txt")).unwrap();
    assert_eq!(text.lines().count(), 4);
}

#[test]
fn test_rename_persists() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("book.txt");

    phonebook(temp_dir.path())
        .arg("--file")
        .arg(&file)
        .args(["rename", "Alan", "Alya"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact renamed: Alan -> Alya"));

    let text = fs::read_to_string(&file).unwrap();
    assert!(text.starts_with("Alya, +7 903, ID:907\n"));
}

#[test]
fn test_remove_persists_and_keeps_order() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("book.txt");

    phonebook(temp_dir.path())
        .arg("--file")
        .arg(&file)
        .args(["remove", "Alex"])
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(&file).unwrap(),
        "Alan, +7 903, ID:907\nAlice, +7 346, ID:9800\nAdelina, +7 367, ID:9678"
    );
}

#[test]
fn test_missing_contact_fails_without_writing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("book.txt");
    fs::write(&file, "Bob, +1, ID:1.\n").unwrap();

    phonebook(temp_dir.path())
        .arg("--file")
        .arg(&file)
        .args(["rm", "Ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No contact with name 'Ghost'"));

    assert_eq!(fs::read_to_string(&file).unwrap(), "Bob, +1, ID:1.\n");
}

#[test]
fn test_existing_file_is_not_reseeded() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("book.txt");
    fs::write(&file, "").unwrap();

    phonebook(temp_dir.path())
        .arg("--file")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts found."));
}

#[test]
fn test_add_and_find() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("book.txt");

    phonebook(temp_dir.path())
        .arg("--file")
        .arg(&file)
        .args(["add", "Bob", "+1 555", "42!"])
        .assert()
        .success();

    phonebook(temp_dir.path())
        .arg("--file")
        .arg(&file)
        .args(["find", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob").and(predicate::str::contains("ID:42")));
}

#[test]
fn test_list_json() {
    let temp_dir = tempfile::tempdir().unwrap();

    let output = phonebook(temp_dir.path())
        .args(["list", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let contacts = value.as_array().unwrap();
    assert_eq!(contacts.len(), 4);
    assert_eq!(contacts[0]["name"], "Alan");
    assert_eq!(contacts[0]["id"], "907");
}

#[test]
fn test_seed_command_reports_state() {
    let temp_dir = tempfile::tempdir().unwrap();

    phonebook(temp_dir.path())
        .arg("seed")
        .assert()
        .success()
        .stdout(predicate::str::contains("initial contacts"));

    phonebook(temp_dir.path())
        .arg("seed")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_config_data_file_is_used() {
    let temp_dir = tempfile::tempdir().unwrap();
    let file = temp_dir.path().join("configured.txt");

    phonebook(temp_dir.path())
        .args(["config", "data-file"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved data-file ="));

    phonebook(temp_dir.path()).arg("list").assert().success();

    assert!(file.exists());
    assert!(!temp_dir.path().join("phonebook.txt").exists());
}

#[test]
fn test_seed_on_start_disabled() {
    let temp_dir = tempfile::tempdir().unwrap();

    phonebook(temp_dir.path())
        .args(["config", "seed-on-start", "false"])
        .assert()
        .success();

    phonebook(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts found."));

    assert!(!temp_dir.path().join("phonebook.txt").exists());
}

#[test]
fn test_menu_session() {
    let temp_dir = tempfile::tempdir().unwrap();

    phonebook(temp_dir.path())
        .arg("menu")
        .write_stdin("1\n2\n3\n4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Replace Alan with Alya"))
        .stdout(predicate::str::contains("Alya, +7 903, ID:907"))
        .stdout(predicate::str::contains("Goodbye."));

    let text = fs::read_to_string(temp_dir.path().join("phonebook.txt")).unwrap();
    assert!(!text.contains("Alex"));
    assert!(text.starts_with("Alya"));
}

#[test]
fn test_unreadable_contact_file_aborts() {
    let temp_dir = TempDir::new().unwrap();
    let dir_as_file = temp_dir.path().join("book.txt");
    fs::create_dir(&dir_as_file).unwrap();

    phonebook(temp_dir.path())
        .arg("--file")
        .arg(&dir_as_file)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("File operation failed"));
}

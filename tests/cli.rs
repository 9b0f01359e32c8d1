//! End-to-end tests for the `expense` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expense(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense").unwrap();
    cmd.env("EXPENSE_FORECAST_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn add(data_dir: &TempDir, amount: &str, category: &str, date: &str) {
    expense(data_dir)
        .args(["add", amount, "--category", category, "--date", date])
        .assert()
        .success();
}

#[test]
fn test_add_and_list() {
    let data_dir = TempDir::new().unwrap();

    expense(&data_dir)
        .args(["add", "250", "--category", "food", "--date", "2025-09-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added: Food - ₹250.00 on 2025-09-05"));

    expense(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-09-05").and(predicate::str::contains("Food")));

    assert!(data_dir.path().join("data").join("expenses.csv").exists());
}

#[test]
fn test_add_rejects_malformed_amount() {
    let data_dir = TempDir::new().unwrap();

    expense(&data_dir)
        .args(["add", "lots", "--category", "Food"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed amount"));

    expense(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded."));
}

#[test]
fn test_add_rejects_unknown_category() {
    let data_dir = TempDir::new().unwrap();

    expense(&data_dir)
        .args(["add", "10", "--category", "Groceries"])
        .assert()
        .failure();
}

#[test]
fn test_train_and_predict() {
    let data_dir = TempDir::new().unwrap();
    add(&data_dir, "100", "Bills", "2025-01-15");
    add(&data_dir, "200", "Bills", "2025-02-15");

    expense(&data_dir)
        .arg("predict")
        .assert()
        .success()
        .stdout(predicate::str::contains("Train the model first or add more data."));

    expense(&data_dir)
        .arg("train")
        .assert()
        .success()
        .stdout(predicate::str::contains("Model trained successfully!"));

    assert!(data_dir
        .path()
        .join("models")
        .join("expense_model.json")
        .exists());

    expense(&data_dir)
        .arg("predict")
        .assert()
        .success()
        .stdout(predicate::str::contains("Predicted expense for next month (March): ₹300.00"));
}

#[test]
fn test_train_without_data() {
    let data_dir = TempDir::new().unwrap();

    expense(&data_dir)
        .arg("train")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not enough data to train the model."));

    assert!(!data_dir.path().join("models").exists());
}

#[test]
fn test_clear_requires_confirmation() {
    let data_dir = TempDir::new().unwrap();
    add(&data_dir, "40", "Travel", "2025-03-01");

    expense(&data_dir).arg("clear").assert().failure();

    expense(&data_dir)
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All expenses have been cleared"));

    expense(&data_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded."));
}

#[test]
fn test_budget_status() {
    let data_dir = TempDir::new().unwrap();
    add(&data_dir, "700", "Shopping", "2025-04-01");

    expense(&data_dir)
        .args(["budget", "--set", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You have exceeded your monthly budget!"));

    expense(&data_dir)
        .args(["budget", "--set", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Remaining: ₹300.00"));

    // Budget is persisted between runs
    expense(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly budget:  1000.00"));
}

#[test]
fn test_summary_and_history() {
    let data_dir = TempDir::new().unwrap();
    add(&data_dir, "30", "Food", "2025-05-01");
    add(&data_dir, "70", "Entertainment", "2025-05-02");

    expense(&data_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entertainment").and(predicate::str::contains("70%")));

    expense(&data_dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Expense"));
}

#[test]
fn test_sample_then_model() {
    let data_dir = TempDir::new().unwrap();

    expense(&data_dir)
        .args(["sample", "-n", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5 sample expenses added."));

    expense(&data_dir).arg("train").assert().success();

    expense(&data_dir)
        .arg("model")
        .assert()
        .success()
        .stdout(predicate::str::contains("Model: Trained").and(predicate::str::contains("Slope:")));
}

#[test]
fn test_data_dir_flag() {
    let data_dir = TempDir::new().unwrap();

    Command::cargo_bin("expense")
        .unwrap()
        .env_remove("EXPENSE_FORECAST_DATA_DIR")
        .arg("--data-dir")
        .arg(data_dir.path())
        .args(["add", "12.5", "--date", "2025-07-04"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added: Other - ₹12.50 on 2025-07-04"));

    assert!(data_dir.path().join("data").join("expenses.csv").exists());
}

//! End-to-end CLI tests
//!
//! Each test runs the binary against its own data directory via the
//! `BUDGET_PULSE_DATA_DIR` override, so state persists across invocations
//! within a test but never leaks between tests.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn budgetpulse(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budgetpulse").unwrap();
    cmd.env("BUDGET_PULSE_DATA_DIR", dir.path());
    cmd
}

#[test]
fn overview_on_fresh_budget() {
    let dir = TempDir::new().unwrap();

    budgetpulse(&dir)
        .arg("overview")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Saved: $0.00"))
        .stdout(predicate::str::contains("No goals yet"));
}

#[test]
fn total_set_persists_across_invocations() {
    let dir = TempDir::new().unwrap();

    budgetpulse(&dir)
        .args(["total", "set", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Saved: $1000.00"));

    budgetpulse(&dir)
        .arg("overview")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Saved: $1000.00"))
        .stdout(predicate::str::contains("remaining $1000.00"));
}

#[test]
fn fund_and_defund_clamp_scenario() {
    let dir = TempDir::new().unwrap();

    budgetpulse(&dir).args(["total", "set", "1000"]).assert().success();
    budgetpulse(&dir)
        .args(["goal", "add", "--title", "Car", "--target", "5000", "--date", "Dec 2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Car"));

    budgetpulse(&dir)
        .args(["goal", "fund", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("remaining $900.00"));

    // Three defunds of the default step: clamps at zero, never negative
    for _ in 0..3 {
        budgetpulse(&dir).args(["goal", "defund", "0"]).assert().success();
    }

    budgetpulse(&dir)
        .arg("overview")
        .assert()
        .success()
        .stdout(predicate::str::contains("remaining $1000.00"))
        .stdout(predicate::str::contains("$      0.00 of"));
}

#[test]
fn goal_edit_replaces_in_place() {
    let dir = TempDir::new().unwrap();

    budgetpulse(&dir).args(["total", "set", "500"]).assert().success();
    budgetpulse(&dir)
        .args(["goal", "add", "--title", "Bike"])
        .assert()
        .success();

    budgetpulse(&dir)
        .args(["goal", "edit", "0", "--title", "Road Bike", "--target", "1500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Road Bike"));

    budgetpulse(&dir)
        .arg("overview")
        .assert()
        .success()
        .stdout(predicate::str::contains("Road Bike"))
        .stdout(predicate::str::contains("Bike").count(1));
}

#[test]
fn goal_delete_frees_allocation() {
    let dir = TempDir::new().unwrap();

    budgetpulse(&dir).args(["total", "set", "1000"]).assert().success();
    budgetpulse(&dir).args(["goal", "add", "--title", "Car"]).assert().success();
    budgetpulse(&dir)
        .args(["goal", "fund", "0", "--amount", "300"])
        .assert()
        .success();

    budgetpulse(&dir)
        .args(["goal", "delete", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("freed $300.00"))
        .stdout(predicate::str::contains("remaining $1000.00"));
}

#[test]
fn bad_index_is_a_friendly_error() {
    let dir = TempDir::new().unwrap();

    budgetpulse(&dir)
        .args(["goal", "fund", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No goal at index 7"));
}

#[test]
fn over_allocation_warns_but_succeeds() {
    let dir = TempDir::new().unwrap();

    budgetpulse(&dir).args(["total", "set", "1000"]).assert().success();
    budgetpulse(&dir).args(["goal", "add", "--title", "Car"]).assert().success();
    budgetpulse(&dir)
        .args(["goal", "fund", "0", "--amount", "400"])
        .assert()
        .success();

    budgetpulse(&dir)
        .args(["total", "set", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("allocations exceed the total by $300.00"));
}

#[test]
fn export_then_import_round_trips() {
    let source = TempDir::new().unwrap();
    let target = TempDir::new().unwrap();
    let export_path = source.path().join("budget-export.json");

    budgetpulse(&source).args(["total", "set", "1000"]).assert().success();
    budgetpulse(&source)
        .args(["goal", "add", "--title", "Car", "--target", "5000", "--date", "Dec 2025"])
        .assert()
        .success();
    budgetpulse(&source).args(["goal", "fund", "0"]).assert().success();

    budgetpulse(&source)
        .args(["export", export_path.to_str().unwrap(), "--pretty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 goals"));

    budgetpulse(&target)
        .args(["import", export_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 goals"));

    budgetpulse(&target)
        .arg("overview")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Saved: $1000.00"))
        .stdout(predicate::str::contains("remaining $900.00"))
        .stdout(predicate::str::contains("Car"));
}

#[test]
fn import_rejects_unknown_type_and_keeps_state() {
    let dir = TempDir::new().unwrap();
    let bad_file = dir.path().join("bad.json");
    std::fs::write(
        &bad_file,
        r#"{
            "totalAmount": 5,
            "goals": [{
                "title": "Mystery",
                "allocatedAmount": 0,
                "targetAmount": 0,
                "targetDate": "",
                "type": "Unknown"
            }]
        }"#,
    )
    .unwrap();

    budgetpulse(&dir).args(["total", "set", "1000"]).assert().success();

    budgetpulse(&dir)
        .args(["import", bad_file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Import error"));

    // Prior state is untouched
    budgetpulse(&dir)
        .arg("overview")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Saved: $1000.00"));
}

#[test]
fn corrupt_slot_warns_and_starts_empty() {
    let dir = TempDir::new().unwrap();
    let slot = dir.path().join("data").join("budgetData.json");
    std::fs::create_dir_all(slot.parent().unwrap()).unwrap();
    std::fs::write(&slot, "{ not json").unwrap();

    budgetpulse(&dir)
        .arg("overview")
        .assert()
        .success()
        .stderr(predicate::str::contains("Malformed budget data"))
        .stdout(predicate::str::contains("Total Saved: $0.00"));
}

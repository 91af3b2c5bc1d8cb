use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{env_with_crew, env_with_week};

#[test]
fn calc_single_shift() {
    let env = env_with_crew();

    env.cmd()
        .args(["calc", "--in", "07:00", "--out", "16:00", "--rate", "25", "--days", "5"])
        .assert()
        .success()
        .stdout(contains("Hours per day : 8.00"))
        .stdout(contains("40.00").and(contains("1000.00")));
}

#[test]
fn calc_overnight_shift() {
    let env = env_with_crew();

    env.cmd()
        .args(["calc", "--in", "22:00", "--out", "06:00", "--break", "30", "--rate", "15"])
        .assert()
        .success()
        .stdout(contains("7.50").and(contains("112.50")));
}

#[test]
fn calc_rejects_malformed_time() {
    let env = env_with_crew();

    env.cmd()
        .args(["calc", "--in", "7am", "--out", "16:00", "--rate", "25"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format: 7am"));
}

#[test]
fn bulk_dry_run_stores_nothing() {
    let env = env_with_crew();

    env.anonymous()
        .args([
            "bulk", "-w", "amy", "-w", "bob", "--from", "2025-03-03", "--to", "2025-03-07",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(contains("80.00").and(contains("2000.00")))
        .stdout(contains("Dry run"));

    env.cmd()
        .args(["list", "--period", "2025-03"])
        .assert()
        .success()
        .stdout(contains("No timesheet entries"));
}

#[test]
fn bulk_persists_rows_and_lists_them() {
    let env = env_with_week();

    env.cmd()
        .args(["list", "--period", "2025-03-03:2025-03-07", "--worker", "amy"])
        .assert()
        .success()
        .stdout(contains("2025-03-03").and(contains("2025-03-07")))
        .stdout(contains("framing"))
        .stdout(contains("Rows: 5"))
        .stdout(contains("800.00"));
}

#[test]
fn bulk_rejects_unknown_worker() {
    let env = env_with_crew();

    env.cmd()
        .args(["bulk", "-w", "amy", "-w", "zed", "--from", "2025-03-03"])
        .assert()
        .failure()
        .stderr(contains("Unknown worker: zed"));

    env.cmd()
        .args(["list", "--period", "2025-03"])
        .assert()
        .success()
        .stdout(contains("No timesheet entries"));
}

#[test]
fn bulk_requires_identity() {
    let env = env_with_crew();

    env.anonymous()
        .args(["bulk", "-w", "amy", "--from", "2025-03-03"])
        .assert()
        .failure()
        .stderr(contains("No identity available"));
}

#[test]
fn report_groups_by_worker() {
    let env = env_with_week();

    env.cmd()
        .args(["report", "--period", "2025-03"])
        .assert()
        .success()
        .stdout(contains("Amy Ng").and(contains("Bob Ruiz")))
        .stdout(contains("40.00"))
        .stdout(contains("800.00").and(contains("1200.00")))
        .stdout(contains("80.00").and(contains("2000.00")))
        .stdout(contains("5 day(s)").and(contains("2 worker(s)")));
}

#[test]
fn delete_row_by_id() {
    let env = env_with_week();

    env.cmd().args(["del", "1", "--yes"]).assert().success();

    env.cmd()
        .args(["list", "--period", "2025-03"])
        .assert()
        .success()
        .stdout(contains("Rows: 9"));

    env.cmd()
        .args(["del", "999", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No timesheet entry with id 999"));
}

#[test]
fn delete_without_confirmation_keeps_row() {
    let env = env_with_week();

    env.cmd()
        .args(["del", "1"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("cancelled"));

    env.cmd()
        .args(["list", "--period", "2025-03"])
        .assert()
        .success()
        .stdout(contains("Rows: 10"));
}

#[test]
fn audit_log_records_operations() {
    let env = env_with_week();

    env.cmd()
        .args(["log", "--print"])
        .assert()
        .success()
        .stdout(contains("worker_add").and(contains("bulk")));
}

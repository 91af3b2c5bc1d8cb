use predicates::str::contains;
use std::fs;

mod common;
use common::env_with_week;

#[test]
fn export_csv_per_worker() {
    let env = env_with_week();
    let out = env.out_file("march.csv");

    env.cmd()
        .args(["export", "--format", "csv", "--file", &out, "--period", "2025-03"])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("period_from,period_to,worker_id,worker_name,days,hours,gross_pay")
    );
    assert_eq!(lines.next(), Some("2025-03-01,2025-03-31,amy,Amy Ng,5,40.00,800.00"));
    assert_eq!(lines.next(), Some("2025-03-01,2025-03-31,bob,Bob Ruiz,5,40.00,1200.00"));
    assert_eq!(lines.next(), None);
}

#[test]
fn export_json_with_totals() {
    let env = env_with_week();
    let out = env.out_file("march.json");

    env.cmd()
        .args(["export", "--format", "json", "--file", &out, "--period", "2025-03"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read json");
    let doc: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    assert_eq!(doc["lines"].as_array().map(|a| a.len()), Some(2));
    assert_eq!(doc["lines"][0]["worker_id"], "amy");
    assert_eq!(doc["lines"][1]["gross_pay"], "1200.00");
    assert_eq!(doc["totals"]["hours"], "80.00");
    assert_eq!(doc["totals"]["cost"], "2000.00");
    assert_eq!(doc["totals"]["days"], 5);
    assert_eq!(doc["totals"]["workers"], 2);
}

#[test]
fn export_refuses_to_overwrite_without_force() {
    let env = env_with_week();
    let out = env.out_file("existing.csv");
    fs::write(&out, "keep me").expect("seed file");

    env.cmd()
        .args(["export", "--file", &out, "--period", "2025-03"])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("was not overwritten"));
    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");

    env.cmd()
        .args(["export", "--file", &out, "--period", "2025-03", "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).expect("read").contains("amy"));
}

#[test]
fn export_rejects_bad_period() {
    let env = env_with_week();
    let out = env.out_file("bad.csv");

    env.cmd()
        .args(["export", "--file", &out, "--period", "March"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

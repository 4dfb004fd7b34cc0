use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{kin, sample_chart, setup_test_db, temp_out, write_chart_fixture};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    kin()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database:"));

    assert!(fs::metadata(&db_path).is_ok());
}

#[test]
fn test_plan_upsert_and_list() {
    let db_path = setup_test_db("cli_plan_upsert");

    kin()
        .args([
            "--db",
            &db_path,
            "plan",
            "2025-10-17",
            "--remote",
            "08:00",
            "--note",
            "WFH day",
        ])
        .assert()
        .success()
        .stdout(contains("office 00:00, remote 08:00"));

    kin()
        .args(["--db", &db_path, "plan", "--list", "--month", "2025-10"])
        .assert()
        .success()
        .stdout(contains("Plans for 2025-10:"))
        .stdout(contains("2025-10-17"))
        .stdout(contains("remote 08:00"))
        .stdout(contains("WFH day"));
}

#[test]
fn test_plan_paid_leave_flag() {
    let db_path = setup_test_db("cli_plan_paid_leave");

    kin()
        .args([
            "--db",
            &db_path,
            "plan",
            "2025-10-24",
            "--paid-leave",
            "--note",
            "trip",
        ])
        .assert()
        .success()
        .stdout(contains("paid leave"));

    kin()
        .args(["--db", &db_path, "plan", "--list", "--month", "2025-10"])
        .assert()
        .success()
        .stdout(contains("paid leave"))
        .stdout(contains("trip"));
}

#[test]
fn test_plan_clear() {
    let db_path = setup_test_db("cli_plan_clear");

    kin()
        .args(["--db", &db_path, "plan", "2025-10-17", "--office", "08:00"])
        .assert()
        .success();

    kin()
        .args(["--db", &db_path, "plan", "2025-10-17", "--clear"])
        .assert()
        .success()
        .stdout(contains("Plan for 2025-10-17 removed"));

    // Clearing again reports nothing stored.
    kin()
        .args(["--db", &db_path, "plan", "2025-10-17", "--clear"])
        .assert()
        .success()
        .stdout(contains("No plan stored for 2025-10-17"));

    kin()
        .args(["--db", &db_path, "plan", "--list", "--month", "2025-10"])
        .assert()
        .success()
        .stdout(contains("No plans stored for 2025-10"))
        .stdout(contains("2025-10-17").not());
}

#[test]
fn test_plan_requires_date() {
    let db_path = setup_test_db("cli_plan_no_date");

    kin()
        .args(["--db", &db_path, "plan", "--office", "08:00"])
        .assert()
        .failure()
        .stderr(contains("missing DATE"));
}

#[test]
fn test_show_renders_month_table() {
    let db_path = setup_test_db("cli_show");
    let chart = write_chart_fixture("cli_show", sample_chart());

    kin()
        .args([
            "--db",
            &db_path,
            "show",
            "--month",
            "2025-09",
            "--chart",
            &chart,
            "--today",
            "2025-09-30",
        ])
        .assert()
        .success()
        .stdout(contains("09-01 Mon"))
        .stdout(contains("09:00-18:00"))
        .stdout(contains("Statistics 2025-09"));
}

#[test]
fn test_show_fills_holiday_memo_from_calendar() {
    let db_path = setup_test_db("cli_show_holiday");
    let chart = write_chart_fixture("cli_show_holiday", sample_chart());

    // 2025-09-15 is 敬老の日 in the bundled table; the empty holiday row
    // picks the name up as its memo.
    kin()
        .args([
            "--db",
            &db_path,
            "show",
            "--month",
            "2025-09",
            "--chart",
            &chart,
            "--today",
            "2025-09-30",
        ])
        .assert()
        .success()
        .stdout(contains("敬老の日"));
}

#[test]
fn test_stats_counts_working_days_and_clockout() {
    let db_path = setup_test_db("cli_stats");
    let chart = write_chart_fixture("cli_stats", sample_chart());

    // September 2025: 30 days, 8 weekend days, 2 public holidays.
    kin()
        .args([
            "--db",
            &db_path,
            "stats",
            "--month",
            "2025-09",
            "--chart",
            &chart,
            "--today",
            "2025-09-01",
        ])
        .assert()
        .success()
        .stdout(contains("20 (0 paid leave)"))
        // 09:00-18:00 minus the break covers the full 8h requirement.
        .stdout(contains("Today's required hours are already covered"));
}

#[test]
fn test_stats_warns_on_malformed_chart_row() {
    let db_path = setup_test_db("cli_stats_bad_row");
    let chart = write_chart_fixture(
        "cli_stats_bad_row",
        r#"[
            {"day": "9/1(Mon)", "color": "", "entries": [
                {"workplace": "HF Bldg.", "category": "Attendance", "clock_in": "9am", "clock_out": "18:00"}
            ]},
            {"day": "9/2(Tue)", "color": "", "entries": [
                {"workplace": "HF Bldg.", "category": "Attendance", "clock_in": "09:00", "clock_out": "18:00"}
            ]}
        ]"#,
    );

    kin()
        .args([
            "--db",
            &db_path,
            "stats",
            "--month",
            "2025-09",
            "--chart",
            &chart,
            "--today",
            "2025-09-30",
        ])
        .assert()
        .success()
        .stdout(contains("day 1"))
        .stdout(contains("Invalid time format"));
}

#[test]
fn test_export_csv_writes_timeline() {
    let db_path = setup_test_db("cli_export_csv");
    let chart = write_chart_fixture("cli_export_csv", sample_chart());
    let out = temp_out("cli_export_csv", "csv");

    kin()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--month", "2025-09",
            "--chart", &chart, "--today", "2025-09-30",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("date,day_type,office,remote,total,expected,balance,memo"));
    assert!(content.contains("2025-09-01,working_day"));
    // One line per day of the month plus the header.
    assert_eq!(content.lines().count(), 31);
}

#[test]
fn test_export_json_writes_timeline() {
    let db_path = setup_test_db("cli_export_json");
    let chart = write_chart_fixture("cli_export_json", sample_chart());
    let out = temp_out("cli_export_json", "json");

    kin()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--month", "2025-09",
            "--chart", &chart, "--today", "2025-09-30",
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"date\": \"2025-09-02\""));
    assert!(content.contains("\"day_type\": \"weekend\""));
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let db_path = setup_test_db("cli_export_overwrite");
    let chart = write_chart_fixture("cli_export_overwrite", sample_chart());
    let out = temp_out("cli_export_overwrite", "csv");

    fs::write(&out, "pre-existing").expect("seed output file");

    kin()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--month", "2025-09",
            "--chart", &chart, "--today", "2025-09-30",
        ])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    kin()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--month", "2025-09",
            "--chart", &chart, "--today", "2025-09-30", "-f",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.contains("2025-09-01"));
}

#[test]
fn test_invalid_month_rejected() {
    let db_path = setup_test_db("cli_invalid_month");

    kin()
        .args(["--db", &db_path, "show", "--month", "2025-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid month: 2025-13"));
}

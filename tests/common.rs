#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn kin() -> Command {
    cargo_bin_cmd!("kintai")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_kintai.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a chart JSON fixture and return its path.
pub fn write_chart_fixture(name: &str, json: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_chart.json", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, json).expect("write chart fixture");
    p
}

/// A small September 2025 chart: two closed office days and one WFH day.
pub fn sample_chart() -> &'static str {
    r#"[
        {"day": "9/1(Mon)", "color": "", "entries": [
            {"workplace": "HF Bldg.", "category": "Attendance", "clock_in": "09:00", "clock_out": "18:00"}
        ]},
        {"day": "9/2(Tue)", "color": "", "entries": [
            {"workplace": "WFH", "category": "Attendance", "clock_in": "09:00", "clock_out": "18:00"}
        ]},
        {"day": "9/3(Wed)", "color": "", "entries": [
            {"workplace": "HF Bldg.", "category": "Attendance", "clock_in": "10:00", "clock_out": "19:30"}
        ]},
        {"day": "Total", "color": "", "entries": []}
    ]"#
}

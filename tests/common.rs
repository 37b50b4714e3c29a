#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime};
use rbirdlog::models::SurveyRecord;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at a scratch directory so the
/// user's real configuration is never read or written.
pub fn rbl() -> Command {
    let mut cmd = cargo_bin_cmd!("rbirdlog");
    cmd.env("HOME", test_home());
    cmd
}

pub fn test_home() -> PathBuf {
    let mut path = env::temp_dir();
    path.push("rbirdlog_test_home");
    fs::create_dir_all(&path).ok();
    path
}

/// Create a unique data file path inside the system temp dir and remove
/// any leftover file (and its activity log) from a previous run
pub fn setup_test_data(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_bird_data.csv", name));
    let data_path = path.to_string_lossy().to_string();
    fs::remove_file(&data_path).ok();
    fs::remove_file(format!("{data_path}.log")).ok();
    data_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the data file and save two visits at two locations
pub fn init_data_with_records(data_path: &str) {
    rbl()
        .args(["--data", data_path, "--test", "init"])
        .assert()
        .success();

    rbl()
        .args([
            "--data",
            data_path,
            "add",
            "--date",
            "2025-01-05",
            "--location",
            "Alligator Creek",
            "--recorder",
            "J. Doe",
            "--start",
            "07:30",
            "--end",
            "08:15",
            "--wind",
            "7mph NE",
            "--temp",
            "36°F",
            "--species",
            "PAWA:2:1:0:foraging",
            "--species",
            "GREG:0:0:3",
            "--species",
            "BLJA:1:0:0",
        ])
        .assert()
        .success();

    rbl()
        .args([
            "--data",
            data_path,
            "add",
            "--date",
            "2025-01-12",
            "--location",
            "Unknown Site",
            "--recorder",
            "A. Smith",
            "--start",
            "09:00",
            "--end",
            "09:40",
            "--species",
            "PAWA:4:0:0",
            "--species",
            "Osprey:0:1:0:other species",
        ])
        .assert()
        .success();
}

/// In-memory row with fixed conditions, for library-level tests
pub fn record(date: &str, location: &str, species: &str, counts: (u32, u32, u32)) -> SurveyRecord {
    SurveyRecord {
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid test date"),
        location: location.to_string(),
        recorder: "Tester".to_string(),
        start_time: NaiveTime::from_hms_opt(7, 30, 0).expect("valid time"),
        end_time: NaiveTime::from_hms_opt(8, 15, 0).expect("valid time"),
        wind: "7mph NE".to_string(),
        precipitation: String::new(),
        tide: "Low".to_string(),
        temperature: "36°F".to_string(),
        species: species.to_string(),
        count_le_50m: counts.0,
        count_gt_50m: counts.1,
        flythrough: counts.2,
        notes: String::new(),
    }
}

/// Fresh scratch directory for library tests
pub fn scratch_dir(name: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("rbirdlog_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create scratch dir");
    path
}

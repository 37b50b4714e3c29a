mod common;
use common::scratch_dir;
use rbirdlog::config::migrate::{migrate_config, missing_keys, set_data_file};
use rbirdlog::config::{CONFIG_KEYS, Config};
use rbirdlog::core::log::{LogEntry, format_entries, read_log, ttlog};
use rbirdlog::errors::AppError;
use std::fs;

#[test]
fn test_load_from_missing_file_gives_defaults() {
    let dir = scratch_dir("config_missing");
    let cfg = Config::load_from(&dir.join("rbirdlog.conf")).expect("load");

    assert_eq!(cfg.bar_width, 40);
    assert!(cfg.known_locations.contains("Alligator Creek"));
    assert_eq!(cfg.species.names().len(), 21);
}

#[test]
fn test_load_from_partial_file_fills_defaults() {
    let dir = scratch_dir("config_partial");
    let path = dir.join("rbirdlog.conf");
    fs::write(
        &path,
        "data_file: /tmp/other.csv\nknown_locations:\n  - name: Lemon Bay\n    lat: 26.96\n    lon: -82.353\n",
    )
    .expect("write");

    let cfg = Config::load_from(&path).expect("load");
    assert_eq!(cfg.data_file, "/tmp/other.csv");
    assert!(cfg.known_locations.contains("Lemon Bay"));
    assert!(!cfg.known_locations.contains("Alligator Creek"));
    assert_eq!(cfg.project_title, "Alligator Creek Bird Monitoring Project");
}

#[test]
fn test_load_from_garbage_is_config_error() {
    let dir = scratch_dir("config_garbage");
    let path = dir.join("rbirdlog.conf");
    fs::write(&path, "bar_width: [not a number\n").expect("write");

    assert!(matches!(Config::load_from(&path), Err(AppError::Config(_))));
}

#[test]
fn test_migrate_adds_missing_keys_and_keeps_values() {
    let dir = scratch_dir("config_migrate");
    let path = dir.join("rbirdlog.conf");
    fs::write(&path, "data_file: /srv/birds.csv\nbar_width: 12\n").expect("write");

    let missing = missing_keys(&path).expect("check");
    assert_eq!(missing, vec!["project_title", "known_locations", "species"]);

    let added = migrate_config(&path).expect("migrate");
    assert_eq!(added, missing);
    assert!(missing_keys(&path).expect("recheck").is_empty());

    let cfg = Config::load_from(&path).expect("load");
    assert_eq!(cfg.data_file, "/srv/birds.csv");
    assert_eq!(cfg.bar_width, 12);
    assert!(cfg.species.resolve("SACR").is_some());

    // second run is a no-op
    assert!(migrate_config(&path).expect("migrate again").is_empty());
}

#[test]
fn test_missing_keys_without_file_lists_everything() {
    let dir = scratch_dir("config_absent");
    assert_eq!(
        missing_keys(&dir.join("rbirdlog.conf")).expect("check"),
        CONFIG_KEYS.to_vec()
    );
}

#[test]
fn test_log_path_sits_next_to_data_file() {
    let cfg = Config {
        data_file: "/data/bird_data.csv".to_string(),
        ..Config::default()
    };
    assert_eq!(
        cfg.log_path(),
        std::path::PathBuf::from("/data/bird_data.csv.log")
    );
}

#[test]
fn test_log_path_never_equals_data_file() {
    let cfg = Config {
        data_file: "/data/birds.log".to_string(),
        ..Config::default()
    };
    assert_ne!(cfg.log_path(), std::path::PathBuf::from(&cfg.data_file));
    assert_eq!(cfg.log_path(), std::path::PathBuf::from("/data/birds.log.log"));
}

#[test]
fn test_activity_log_append_and_format() {
    let dir = scratch_dir("activity_log");
    let path = dir.join("bird_data.csv.log");

    ttlog(&path, "init", "", "Data file initialized").expect("log");
    ttlog(&path, "add", &"x".repeat(80), "long target").expect("log");

    let entries = read_log(&path).expect("read");
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].operation, "init");

    let lines = format_entries(&entries);
    assert!(lines[0].contains("Data file initialized"));
    assert!(lines[1].contains("..."));
    assert!(!lines[1].contains(&"x".repeat(80)));
}

#[test]
fn test_format_entries_pads_short_operations() {
    let entries = vec![
        LogEntry {
            date: "2025-01-05T08:00:00+00:00".to_string(),
            operation: "add".to_string(),
            target: "2025-01-05 Alligator Creek".to_string(),
            message: "3 species records".to_string(),
        },
        LogEntry {
            date: "2025-01-05T08:01:00+00:00".to_string(),
            operation: "init".to_string(),
            target: String::new(),
            message: "Data file initialized".to_string(),
        },
    ];

    let lines = format_entries(&entries);
    let arrow = |l: &str| l.find(" => ").expect("arrow");
    // colour codes differ in length per operation, so compare the tail
    assert!(lines[0].ends_with("=> 3 species records"));
    assert!(lines[1].starts_with("2: 2025-01-05T08:01:00+00:00 | "));
    assert!(arrow(&lines[0]) > 0 && arrow(&lines[1]) > 0);
}

#[test]
fn test_set_data_file_keeps_other_keys() {
    let dir = scratch_dir("config_set_data_file");
    let path = dir.join("rbirdlog.conf");
    fs::write(
        &path,
        "data_file: /srv/birds.csv\nbar_width: 12\nknown_locations:\n  - name: Lemon Bay\n    lat: 26.95\n    lon: -82.37\n",
    )
    .expect("write");

    set_data_file(&path, std::path::Path::new("/srv/other.csv")).expect("set");

    let cfg = Config::load_from(&path).expect("load");
    assert_eq!(cfg.data_file, "/srv/other.csv");
    assert_eq!(cfg.bar_width, 12);
    assert!(cfg.known_locations.contains("Lemon Bay"));
}

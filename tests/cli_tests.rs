use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use rbirdlog::models::schema::COLUMNS;
use rbirdlog::store::codec;
use std::fs;

mod common;
use common::{init_data_with_records, rbl, scratch_dir, setup_test_data, temp_out};

#[test]
fn test_init_creates_header_only_data_file() {
    let data_path = setup_test_data("init_header");

    rbl()
        .args(["--data", &data_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Data file created"));

    let content = fs::read_to_string(&data_path).expect("read data file");
    assert_eq!(content, format!("{}\n", COLUMNS.join(",")));

    // second init leaves the file alone
    rbl()
        .args(["--data", &data_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("already present"));
}

#[test]
fn test_init_keeps_existing_config() {
    let home = scratch_dir("init_existing_conf");
    let conf_dir = home.join(".rbirdlog");
    fs::create_dir_all(&conf_dir).expect("create conf dir");
    let conf = conf_dir.join("rbirdlog.conf");

    let data_path = home.join("my_birds.csv");
    let data_str = data_path.to_string_lossy().to_string();
    fs::write(
        &conf,
        format!(
            "data_file: {data_str}\nknown_locations:\n  - name: Lemon Bay\n    lat: 26.95\n    lon: -82.37\n"
        ),
    )
    .expect("write conf");

    rbl().env("HOME", &home).args(["init"]).assert().success();

    let content = fs::read_to_string(&conf).expect("read conf");
    assert!(content.contains("Lemon Bay"));
    assert!(content.contains(&data_str));
    // the store the config points at is the one initialised
    assert!(data_path.exists());

    // --data on an existing config only moves data_file
    let other = home.join("other_birds.csv");
    let other_str = other.to_string_lossy().to_string();
    rbl()
        .env("HOME", &home)
        .args(["--data", &other_str, "init"])
        .assert()
        .success();

    let content = fs::read_to_string(&conf).expect("read conf");
    assert!(content.contains("Lemon Bay"));
    assert!(content.contains(&other_str));
    assert!(!content.contains("my_birds.csv"));
    assert!(other.exists());
}

#[test]
fn test_add_drops_zero_count_species() {
    let data_path = setup_test_data("add_zero_counts");

    rbl()
        .args([
            "--data",
            &data_path,
            "add",
            "--date",
            "2025-01-05",
            "--location",
            "Alligator Creek",
            "--start",
            "07:30",
            "--end",
            "08:15",
            "--species",
            "PAWA:2:1:0:foraging",
            "--species",
            "GREG:0:0:0:notes alone are not enough",
        ])
        .assert()
        .success()
        .stdout(contains("Saved 1 species records for 2025-01-05!"));

    let content = fs::read_to_string(&data_path).expect("read data file");
    assert_eq!(content.lines().count(), 2);
    assert!(content.contains("Palm Warbler (PAWA)"));
    assert!(content.contains("07:30:00"));
    assert!(!content.contains("Great Egret"));
}

#[test]
fn test_add_with_no_counts_warns_and_writes_nothing() {
    let data_path = setup_test_data("add_empty");

    rbl()
        .args([
            "--data",
            &data_path,
            "add",
            "--location",
            "Alligator Creek",
            "--species",
            "PAWA:0:0:0",
        ])
        .assert()
        .success()
        .stdout(contains("No bird counts entered!"));

    assert!(!std::path::Path::new(&data_path).exists());
}

#[test]
fn test_add_rejects_malformed_species_entry() {
    let data_path = setup_test_data("add_malformed");

    rbl()
        .args([
            "--data",
            &data_path,
            "add",
            "--location",
            "Alligator Creek",
            "--species",
            "PAWA:two:0:0",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid species entry"));
}

#[test]
fn test_add_unknown_location_notes_missing_coordinates() {
    let data_path = setup_test_data("add_unknown_location");

    rbl()
        .args([
            "--data",
            &data_path,
            "add",
            "--location",
            "Lemon Bay",
            "--start",
            "06:00",
            "--end",
            "06:30",
            "--species",
            "WOST:1:0:0",
        ])
        .assert()
        .success()
        .stdout(contains("will not appear on the map"))
        .stdout(contains("Saved 1 species records"));

    // warned before the save is reported
    let out = rbl()
        .args([
            "--data",
            &data_path,
            "add",
            "--location",
            "Lemon Bay",
            "--species",
            "WOST:2:0:0",
        ])
        .output()
        .expect("run add");
    let stdout = String::from_utf8_lossy(&out.stdout);
    let warned = stdout.find("will not appear on the map").expect("warning");
    let saved = stdout.find("Saved 1 species records").expect("saved");
    assert!(warned < saved);
}

#[test]
fn test_add_appends_batches_in_order() {
    let data_path = setup_test_data("add_append_order");
    init_data_with_records(&data_path);

    let file = fs::File::open(&data_path).expect("open data file");
    let records = codec::decode(file).expect("decode data file");

    let species: Vec<&str> = records.iter().map(|r| r.species.as_str()).collect();
    assert_eq!(
        species,
        vec![
            "Palm Warbler (PAWA)",
            "Great Egret (GREG)",
            "Blue Jay (BLJA)",
            "Palm Warbler (PAWA)",
            "Osprey",
        ]
    );
    assert_eq!(records[0].notes, "foraging");
    assert_eq!(records[4].notes, "other species");
}

#[test]
fn test_list_on_missing_data_file() {
    let data_path = setup_test_data("list_missing");

    rbl()
        .args(["--data", &data_path, "list"])
        .assert()
        .success()
        .stdout(contains("No data recorded yet."));
}

#[test]
fn test_list_filters_by_location() {
    let data_path = setup_test_data("list_by_location");
    init_data_with_records(&data_path);

    rbl()
        .args(["--data", &data_path, "list", "--location", "Unknown Site"])
        .assert()
        .success()
        .stdout(contains("Unknown Site"))
        .stdout(contains("Osprey"))
        .stdout(contains("Alligator Creek").not())
        .stdout(contains("2 of 5 records"));
}

#[test]
fn test_list_filters_are_conjunctive() {
    let data_path = setup_test_data("list_conjunctive");
    init_data_with_records(&data_path);

    rbl()
        .args([
            "--data",
            &data_path,
            "list",
            "--location",
            "Unknown Site",
            "--date",
            "2025-01-05",
        ])
        .assert()
        .success()
        .stdout(contains("No records match the selected filters."))
        .stdout(contains("0 of 5 records"));
}

#[test]
fn test_list_rejects_bad_date_filter() {
    let data_path = setup_test_data("list_bad_date");
    init_data_with_records(&data_path);

    rbl()
        .args(["--data", &data_path, "list", "--date", "05/01/2025"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_filters_lists_locations_and_dates() {
    let data_path = setup_test_data("filters_options");
    init_data_with_records(&data_path);

    rbl()
        .args(["--data", &data_path, "filters"])
        .assert()
        .success()
        .stdout(contains("Alligator Creek"))
        .stdout(contains("Unknown Site"))
        .stdout(contains("2025-01-05"))
        .stdout(contains("2025-01-12"));
}

#[test]
fn test_map_excludes_unknown_locations() {
    let data_path = setup_test_data("map_unknown");
    init_data_with_records(&data_path);

    rbl()
        .args(["--data", &data_path, "map"])
        .assert()
        .success()
        .stdout(contains("Alligator Creek"))
        .stdout(contains("27.042"))
        .stdout(contains("-82.430"))
        .stdout(contains("Unknown Site").not());

    rbl()
        .args(["--data", &data_path, "map", "--location", "Unknown Site"])
        .assert()
        .success()
        .stdout(contains("No location coordinates found"));
}

#[test]
fn test_stats_total_and_species_order() {
    let data_path = setup_test_data("stats_species");
    init_data_with_records(&data_path);

    let output = rbl()
        .args(["--data", &data_path, "stats"])
        .output()
        .expect("run stats");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Total Birds Counted (Selection)"));
    assert!(stdout.contains("12"));

    let pos = |s: &str| stdout.find(s).unwrap_or_else(|| panic!("missing {s}"));
    assert!(pos("Palm Warbler (PAWA)") < pos("Great Egret (GREG)"));
    assert!(pos("Great Egret (GREG)") < pos("Blue Jay (BLJA)"));
    assert!(pos("Blue Jay (BLJA)") < pos("Osprey"));
}

#[test]
fn test_stats_with_date_filter() {
    let data_path = setup_test_data("stats_date");
    init_data_with_records(&data_path);

    rbl()
        .args(["--data", &data_path, "stats", "--date", "2025-01-12"])
        .assert()
        .success()
        .stdout(contains("5"))
        .stdout(contains("Great Egret").not());
}

#[test]
fn test_corrupt_data_file_is_reported() {
    let data_path = setup_test_data("corrupt_header");
    fs::write(&data_path, "Date,Species,Location\n2025-01-05,PAWA,Alligator Creek\n")
        .expect("write corrupt file");

    rbl()
        .args(["--data", &data_path, "list"])
        .assert()
        .failure()
        .stderr(contains("schema mismatch"));

    // nothing is written over a corrupt store
    rbl()
        .args([
            "--data",
            &data_path,
            "add",
            "--location",
            "Alligator Creek",
            "--species",
            "PAWA:1:0:0",
        ])
        .assert()
        .failure();

    let content = fs::read_to_string(&data_path).expect("read corrupt file");
    assert!(content.starts_with("Date,Species,Location"));
}

#[test]
fn test_species_and_locations_catalogues() {
    rbl()
        .args(["species"])
        .assert()
        .success()
        .stdout(contains("PAWA"))
        .stdout(contains("Sandhill Crane (SACR)"));

    rbl()
        .args(["locations"])
        .assert()
        .success()
        .stdout(contains("Alligator Creek"))
        .stdout(contains("27.042"));
}

#[test]
fn test_log_records_operations() {
    let data_path = setup_test_data("log_ops");
    init_data_with_records(&data_path);

    rbl()
        .args(["--data", &data_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("add"))
        .stdout(contains("2025-01-12 Unknown Site"));
}

#[test]
fn test_backup_zip() {
    let data_path = setup_test_data("backup_zip");
    init_data_with_records(&data_path);

    let out = temp_out("backup_zip", "csv");
    let zip_path = std::path::Path::new(&out).with_extension("zip");
    fs::remove_file(&zip_path).ok();

    rbl()
        .args([
            "--data",
            &data_path,
            "backup",
            "--file",
            &out,
            "--compress",
            "zip",
        ])
        .assert()
        .success();

    assert!(zip_path.exists());
    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_backup_plain_copy() {
    let data_path = setup_test_data("backup_plain");
    init_data_with_records(&data_path);

    let out = temp_out("backup_plain", "csv");

    rbl()
        .args(["--data", &data_path, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert_eq!(
        fs::read(&out).expect("read backup"),
        fs::read(&data_path).expect("read data")
    );
}

mod common;
use common::{init_db, init_db_with_data, rdl, setup_test_db, temp_out};
use std::fs;

#[test]
fn test_export_csv_header_and_rows() {
    let db_path = setup_test_db("export_csv");
    init_db_with_data(&db_path);

    let out = temp_out("export_csv", "csv");

    rdl()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "ID,Start Time,End Time,Reason,Duration (minutes)");
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("1,"));
    assert!(lines[1].contains(",out body,"));
    // open event: empty end time and duration
    assert!(lines[2].starts_with("2,"));
    assert!(lines[2].ends_with(",,out of 2 dot battery,"));
}

#[test]
fn test_export_json() {
    let db_path = setup_test_db("export_json");
    init_db_with_data(&db_path);

    let out = temp_out("export_json", "json");

    rdl()
        .args(["--db", &db_path, "export", "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = parsed.as_array().expect("array");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["reason"], "out body");
    assert!(rows[1]["end_time"].is_null());
}

#[test]
fn test_export_empty_ledger_is_header_only() {
    let db_path = setup_test_db("export_empty");
    init_db(&db_path);

    let out = temp_out("export_empty", "csv");

    rdl()
        .args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert_eq!(content, "ID,Start Time,End Time,Reason,Duration (minutes)\n");
}

#[test]
fn test_export_force_overwrites() {
    let db_path = setup_test_db("export_force");
    init_db_with_data(&db_path);

    let out = temp_out("export_force", "csv");
    fs::write(&out, "stale").unwrap();

    rdl()
        .args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("ID,"));
}

#[test]
fn test_export_declined_overwrite_keeps_file() {
    let db_path = setup_test_db("export_declined");
    init_db_with_data(&db_path);

    let out = temp_out("export_declined", "csv");
    fs::write(&out, "keep me").unwrap();

    rdl()
        .args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");
}

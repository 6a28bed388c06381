#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub const TEST_PASSWORD: &str = "test-reset-pw";

/// Binary under test, isolated from the real user configuration.
pub fn rdl() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("rdelaylogger_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rdelaylogger");
    cmd.env("HOME", &home)
        .env("RDELAYLOGGER_RESET_PASSWORD", TEST_PASSWORD);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rdelaylogger.sqlite", name));
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

/// Initialize the DB in test mode (no config file written)
pub fn init_db(db_path: &str) {
    rdl()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize the DB and record one closed and one open event
pub fn init_db_with_data(db_path: &str) {
    init_db(db_path);

    rdl()
        .args(["--db", db_path, "start", "out body"])
        .assert()
        .success();
    rdl().args(["--db", db_path, "end"]).assert().success();
    rdl()
        .args(["--db", db_path, "start", "out of 2 dot battery"])
        .assert()
        .success();
}

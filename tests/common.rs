#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn st() -> Command {
    cargo_bin_cmd!("sitetrack")
}

/// Create a unique test DB path inside the system temp dir and remove any
/// existing file (plus the mirror and photo dir that ride along with --db)
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_sitetrack.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    fs::remove_file(format!("{db_path}.mirror.json")).ok();
    fs::remove_dir_all(format!("{db_path}.photos")).ok();
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

/// Initialize the schema for a test DB
pub fn init_db(db_path: &str) {
    st()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Add a site via the CLI and return its generated id (printed as `[...]`)
pub fn add_site(db_path: &str, name: &str) -> String {
    let out = st()
        .args(["--db", db_path, "add", name])
        .output()
        .expect("run add");
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let start = stdout.rfind('[').expect("site id in output");
    let end = stdout.rfind(']').expect("site id in output");
    stdout[start + 1..end].to_string()
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) -> Vec<String> {
    init_db(db_path);
    vec![
        add_site(db_path, "North Yard"),
        add_site(db_path, "Riverside Lot"),
        add_site(db_path, "Depot Annex"),
    ]
}

/// Register and sign in a throwaway account (needed for photo uploads)
pub fn sign_in(db_path: &str) {
    st()
        .args([
            "--db",
            db_path,
            "register",
            "--email",
            "tester@example.com",
            "--password",
            "secret",
            "--first-name",
            "Test",
            "--last-name",
            "Er",
        ])
        .assert()
        .success();
    st()
        .args([
            "--db",
            db_path,
            "login",
            "--email",
            "tester@example.com",
            "--password",
            "secret",
        ])
        .assert()
        .success();
}

/// Captured stdout of a successful CLI invocation
pub fn stdout_of(args: &[&str]) -> String {
    let out = st().args(args).output().expect("run command");
    assert!(out.status.success(), "command failed: {args:?}");
    String::from_utf8_lossy(&out.stdout).to_string()
}

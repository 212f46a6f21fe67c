use predicates::str::contains;
use std::fs;

mod common;
use common::{add_site, init_db, init_db_with_data, setup_test_db, st, temp_out};

#[test]
fn test_init_creates_database() {
    let db = setup_test_db("init_creates_db");

    st()
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database"));

    assert!(fs::metadata(&db).is_ok());
}

#[test]
fn test_db_info_and_check() {
    let db = setup_test_db("db_info");
    init_db_with_data(&db);

    st()
        .args(["--db", &db, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Total sites"))
        .stdout(contains("3"));

    st()
        .args(["--db", &db, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("integrity: ok"));
}

#[test]
fn test_db_migrate_is_idempotent() {
    let db = setup_test_db("db_migrate");
    init_db(&db);

    st()
        .args(["--db", &db, "db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("already at schema"));
}

#[test]
fn test_audit_log_records_operations() {
    let db = setup_test_db("audit_log");
    init_db(&db);
    let id = add_site(&db, "North Yard");
    st()
        .args(["--db", &db, "move", &id, "done"])
        .assert()
        .success();
    st().args(["--db", &db, "del", &id]).assert().success();

    st()
        .args(["--db", &db, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("add"))
        .stdout(contains("move"))
        .stdout(contains("del"));
}

#[test]
fn test_backup_plain_copy() {
    let db = setup_test_db("backup_plain");
    init_db_with_data(&db);
    let out = temp_out("backup_plain", "sqlite");

    st()
        .args(["--db", &db, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup written"));

    let src_len = fs::metadata(&db).expect("src").len();
    let dst_len = fs::metadata(&out).expect("dst").len();
    assert_eq!(src_len, dst_len);
}

#[test]
fn test_backup_compressed() {
    let db = setup_test_db("backup_zip");
    init_db_with_data(&db);
    let out = temp_out("backup_zip", "zip");

    st()
        .args(["--db", &db, "backup", "--file", &out, "--compress"])
        .assert()
        .success();

    // Zip magic bytes.
    let bytes = fs::read(&out).expect("read zip");
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_mirror_snapshot_tracks_mutations() {
    let db = setup_test_db("mirror_snapshot");
    init_db(&db);
    let a = add_site(&db, "A");
    add_site(&db, "B");
    st()
        .args(["--db", &db, "move", &a, "in-progress"])
        .assert()
        .success();

    let mirror = fs::read_to_string(format!("{db}.mirror.json")).expect("mirror exists");
    let parsed: serde_json::Value = serde_json::from_str(&mirror).expect("valid json");

    let titles = |col: &str| -> Vec<String> {
        parsed["board"][col]
            .as_array()
            .expect("column array")
            .iter()
            .map(|t| t["title"].as_str().unwrap_or_default().to_string())
            .collect()
    };
    assert_eq!(titles("todo"), vec!["B".to_string()]);
    assert_eq!(titles("in_progress"), vec!["A".to_string()]);
}

#[test]
fn test_corrupt_mirror_is_rebuilt_from_database() {
    let db = setup_test_db("mirror_corrupt");
    init_db(&db);
    add_site(&db, "Survivor");

    fs::write(format!("{db}.mirror.json"), "{ not json").expect("corrupt mirror");

    // Any mutation rebuilds the snapshot from SQLite.
    add_site(&db, "Second");
    let mirror = fs::read_to_string(format!("{db}.mirror.json")).expect("mirror");
    let parsed: serde_json::Value = serde_json::from_str(&mirror).expect("valid again");
    assert_eq!(
        parsed["board"]["todo"].as_array().map(|a| a.len()),
        Some(2)
    );
}

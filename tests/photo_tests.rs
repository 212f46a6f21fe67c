use predicates::str::contains;
use std::env;
use std::fs;

mod common;
use common::{add_site, init_db, setup_test_db, sign_in, st};

/// Drop a small fake photo file into tempdir and return its path.
fn make_photo(name: &str) -> String {
    let mut path = env::temp_dir();
    path.push(name);
    fs::write(&path, b"not really a jpeg").expect("write photo");
    path.to_string_lossy().to_string()
}

#[test]
fn test_attach_requires_signed_in_session() {
    let db = setup_test_db("photo_needs_login");
    init_db(&db);
    let id = add_site(&db, "North Yard");
    let photo = make_photo("needs_login.jpg");

    st()
        .args(["--db", &db, "photo", "attach", &id, &photo])
        .assert()
        .failure()
        .stderr(contains("Not signed in"));
}

#[test]
fn test_attach_and_list_photos() {
    let db = setup_test_db("photo_attach");
    init_db(&db);
    sign_in(&db);
    let id = add_site(&db, "North Yard");
    let p1 = make_photo("attach_one.jpg");
    let p2 = make_photo("attach_two.jpg");

    st()
        .args(["--db", &db, "photo", "attach", &id, &p1, &p2])
        .assert()
        .success()
        .stdout(contains("Attached 'attach_one.jpg'"))
        .stdout(contains("Attached 'attach_two.jpg'"));

    st()
        .args(["--db", &db, "photo", "list", &id])
        .assert()
        .success()
        .stdout(contains("1. attach_one.jpg"))
        .stdout(contains("2. attach_two.jpg"));
}

#[test]
fn test_attach_missing_file_adds_nothing() {
    let db = setup_test_db("photo_missing_file");
    init_db(&db);
    sign_in(&db);
    let id = add_site(&db, "North Yard");

    st()
        .args(["--db", &db, "photo", "attach", &id, "/no/such/file.jpg"])
        .assert()
        .failure();

    st()
        .args(["--db", &db, "photo", "list", &id])
        .assert()
        .success()
        .stdout(contains("No photos attached"));
}

#[test]
fn test_detach_removes_by_index_and_clears_viewer() {
    let db = setup_test_db("photo_detach");
    init_db(&db);
    sign_in(&db);
    let id = add_site(&db, "North Yard");
    let p1 = make_photo("detach_one.jpg");
    let p2 = make_photo("detach_two.jpg");
    st()
        .args(["--db", &db, "photo", "attach", &id, &p1, &p2])
        .assert()
        .success();

    // Open the viewer on the first photo, then detach exactly that one.
    st()
        .args(["--db", &db, "photo", "view", &id, "1"])
        .assert()
        .success();
    st()
        .args(["--db", &db, "photo", "detach", &id, "1"])
        .assert()
        .success()
        .stdout(contains("Detached 'detach_one.jpg'"));

    // Viewer cleared: stepping has nothing to step from.
    st()
        .args(["--db", &db, "photo", "next"])
        .assert()
        .success()
        .stdout(contains("Viewer not open"));

    st()
        .args(["--db", &db, "photo", "list", &id])
        .assert()
        .success()
        .stdout(contains("1. detach_two.jpg"));
}

#[test]
fn test_detach_other_index_keeps_viewer() {
    let db = setup_test_db("photo_detach_other");
    init_db(&db);
    sign_in(&db);
    let id = add_site(&db, "North Yard");
    let p1 = make_photo("keepview_one.jpg");
    let p2 = make_photo("keepview_two.jpg");
    st()
        .args(["--db", &db, "photo", "attach", &id, &p1, &p2])
        .assert()
        .success();

    st()
        .args(["--db", &db, "photo", "view", &id, "1"])
        .assert()
        .success();
    st()
        .args(["--db", &db, "photo", "detach", &id, "2"])
        .assert()
        .success();

    // Viewer still points at index 0 and can render it.
    st()
        .args(["--db", &db, "photo", "next"])
        .assert()
        .success()
        .stdout(contains("keepview_one.jpg"));
}

#[test]
fn test_viewer_navigation_clamps_at_both_ends() {
    let db = setup_test_db("photo_viewer_clamp");
    init_db(&db);
    sign_in(&db);
    let id = add_site(&db, "North Yard");
    let p1 = make_photo("clamp_one.jpg");
    let p2 = make_photo("clamp_two.jpg");
    st()
        .args(["--db", &db, "photo", "attach", &id, &p1, &p2])
        .assert()
        .success();

    st()
        .args(["--db", &db, "photo", "view", &id, "2"])
        .assert()
        .success();

    // Already at the end: next stays put.
    st()
        .args(["--db", &db, "photo", "next"])
        .assert()
        .success()
        .stdout(contains("clamp_two.jpg"));

    st()
        .args(["--db", &db, "photo", "prev"])
        .assert()
        .success()
        .stdout(contains("clamp_one.jpg"));

    // Already at the start: prev stays put.
    st()
        .args(["--db", &db, "photo", "prev"])
        .assert()
        .success()
        .stdout(contains("clamp_one.jpg"));
}

#[test]
fn test_detach_out_of_range_fails() {
    let db = setup_test_db("photo_detach_range");
    init_db(&db);
    sign_in(&db);
    let id = add_site(&db, "North Yard");
    let p1 = make_photo("range_one.jpg");
    st()
        .args(["--db", &db, "photo", "attach", &id, &p1])
        .assert()
        .success();

    st()
        .args(["--db", &db, "photo", "detach", &id, "5"])
        .assert()
        .failure()
        .stderr(contains("Invalid photo index"));
}

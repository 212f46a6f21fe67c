//! CLI-level board tests: `move` must persist exactly what the reducer
//! computed, so these check the database rows behind the command.

use predicates::str::contains;

mod common;
use common::{add_site, init_db, setup_test_db, st, stdout_of};

fn site_times(db: &str, id: &str) -> (Option<String>, Option<String>) {
    let conn = rusqlite::Connection::open(db).expect("open db");
    conn.query_row(
        "SELECT start_time, done_time FROM sites WHERE id = ?1",
        [id],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )
    .expect("site row")
}

fn column_order(db: &str, status: &str) -> Vec<String> {
    let conn = rusqlite::Connection::open(db).expect("open db");
    let mut stmt = conn
        .prepare("SELECT name FROM sites WHERE status = ?1 ORDER BY position ASC")
        .expect("prepare");
    let rows = stmt
        .query_map([status], |row| row.get::<_, String>(0))
        .expect("query");
    rows.map(|r| r.expect("row")).collect()
}

#[test]
fn test_move_transfers_between_columns() {
    let db = setup_test_db("move_transfer");
    init_db(&db);
    let a = add_site(&db, "A");
    add_site(&db, "B");

    st()
        .args(["--db", &db, "move", &a, "in-progress"])
        .assert()
        .success()
        .stdout(contains("Moved 'A' to In Progress"));

    assert_eq!(column_order(&db, "todo"), ["B"]);
    assert_eq!(column_order(&db, "in-progress"), ["A"]);
    assert!(column_order(&db, "done").is_empty());

    let (start, done) = site_times(&db, &a);
    assert!(start.is_some(), "entering in-progress stamps start_time");
    assert!(done.is_none());
}

#[test]
fn test_start_time_is_never_restamped() {
    let db = setup_test_db("move_idempotent_start");
    init_db(&db);
    let a = add_site(&db, "A");

    st()
        .args(["--db", &db, "move", &a, "in-progress"])
        .assert()
        .success();
    let (first, _) = site_times(&db, &a);

    // Bounce out and back in.
    st().args(["--db", &db, "move", &a, "todo"]).assert().success();
    st()
        .args(["--db", &db, "move", &a, "in-progress"])
        .assert()
        .success();

    let (second, _) = site_times(&db, &a);
    assert_eq!(first, second);
}

#[test]
fn test_reopening_done_keeps_finish_time() {
    let db = setup_test_db("move_reopen");
    init_db(&db);
    let a = add_site(&db, "A");

    st().args(["--db", &db, "move", &a, "done"]).assert().success();
    let (_, first) = site_times(&db, &a);
    assert!(first.is_some());

    st().args(["--db", &db, "move", &a, "todo"]).assert().success();
    st().args(["--db", &db, "move", &a, "done"]).assert().success();

    let (_, second) = site_times(&db, &a);
    assert_eq!(first, second);
}

#[test]
fn test_reorder_within_column() {
    let db = setup_test_db("move_reorder");
    init_db(&db);
    add_site(&db, "A");
    add_site(&db, "B");
    let c = add_site(&db, "C");

    st()
        .args(["--db", &db, "move", &c, "todo", "--at", "1"])
        .assert()
        .success()
        .stdout(contains("Reordered 'C' to position 1"));

    assert_eq!(column_order(&db, "todo"), ["C", "A", "B"]);
}

#[test]
fn test_move_to_same_column_without_index_is_a_noop() {
    let db = setup_test_db("move_noop");
    init_db(&db);
    let a = add_site(&db, "A");
    add_site(&db, "B");

    st()
        .args(["--db", &db, "move", &a, "todo"])
        .assert()
        .success()
        .stdout(contains("Nothing to do"));

    assert_eq!(column_order(&db, "todo"), ["A", "B"]);
}

#[test]
fn test_move_unknown_id_is_a_noop() {
    let db = setup_test_db("move_unknown");
    init_db(&db);
    add_site(&db, "A");

    st()
        .args(["--db", &db, "move", "no-such-id", "done"])
        .assert()
        .success()
        .stdout(contains("No site found"));

    assert_eq!(column_order(&db, "todo"), ["A"]);
}

#[test]
fn test_board_renders_columns_and_counts() {
    let db = setup_test_db("board_render");
    init_db(&db);
    let a = add_site(&db, "A");
    add_site(&db, "B");
    st()
        .args(["--db", &db, "move", &a, "in-progress"])
        .assert()
        .success();

    let out = stdout_of(&["--db", &db, "board"]);
    assert!(out.contains("To Do (1)"));
    assert!(out.contains("In Progress (1)"));
    assert!(out.contains("Done (0)"));
    assert!(out.contains("A ["));
    assert!(out.contains("B"));
}

#[test]
fn test_scenario_drag_a_onto_in_progress_header() {
    // todo=[A,B] -> drag A onto in-progress -> todo=[B],
    // in-progress=[A with start], done=[]
    let db = setup_test_db("board_scenario");
    init_db(&db);
    let a = add_site(&db, "A");
    add_site(&db, "B");

    st()
        .args(["--db", &db, "move", &a, "in-progress"])
        .assert()
        .success();

    assert_eq!(column_order(&db, "todo"), ["B"]);
    assert_eq!(column_order(&db, "in-progress"), ["A"]);
    assert!(column_order(&db, "done").is_empty());
    let (start, _) = site_times(&db, &a);
    assert!(start.is_some());
}

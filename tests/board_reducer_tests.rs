//! Pure reducer tests: these exercise the board transition function
//! directly, with injected clocks, so every stamping and ordering rule is
//! checked without a database.

use chrono::{Duration, Local};
use sitetrack::board::Board;
use sitetrack::board::reducer::{self, DragEvent, Outcome};
use sitetrack::models::status::Status;
use sitetrack::models::task::Task;

fn task(id: &str) -> Task {
    Task {
        id: id.to_string(),
        title: format!("site {id}"),
        start_time: None,
        finish_time: None,
        assigned_to: None,
        description: String::new(),
    }
}

fn board(todo: &[&str], in_progress: &[&str], done: &[&str]) -> Board {
    Board {
        todo: todo.iter().map(|id| task(id)).collect(),
        in_progress: in_progress.iter().map(|id| task(id)).collect(),
        done: done.iter().map(|id| task(id)).collect(),
    }
}

fn ids(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|t| t.id.as_str()).collect()
}

fn drag(id: &str, source: Status, target: Status, at: Option<usize>) -> DragEvent {
    DragEvent {
        item_id: id.to_string(),
        source,
        target,
        target_index: at,
    }
}

#[test]
fn transfer_moves_item_exactly_once() {
    let b = board(&["a", "b"], &["c"], &[]);
    let now = Local::now();

    let (next, outcome) = reducer::apply(&b, &drag("a", Status::Todo, Status::InProgress, None), now);

    assert_eq!(ids(&next.todo), ["b"]);
    assert_eq!(ids(&next.in_progress), ["c", "a"]);
    assert!(next.done.is_empty());
    assert_eq!(next.total(), b.total());
    assert!(matches!(
        outcome,
        Outcome::Transferred {
            from: Status::Todo,
            to: Status::InProgress,
            ..
        }
    ));
}

#[test]
fn entering_in_progress_stamps_start_once() {
    let b = board(&["a"], &[], &[]);
    let t1 = Local::now();
    let t2 = t1 + Duration::hours(1);

    let (b2, _) = reducer::apply(&b, &drag("a", Status::Todo, Status::InProgress, None), t1);
    assert_eq!(b2.in_progress[0].start_time, Some(t1));

    // Back to todo and in again: the first stamp survives.
    let (b3, _) = reducer::apply(&b2, &drag("a", Status::InProgress, Status::Todo, None), t2);
    let (b4, _) = reducer::apply(&b3, &drag("a", Status::Todo, Status::InProgress, None), t2);
    assert_eq!(b4.in_progress[0].start_time, Some(t1));
}

#[test]
fn entering_done_stamps_finish_once() {
    let b = board(&[], &["a"], &[]);
    let t1 = Local::now();
    let t2 = t1 + Duration::hours(1);

    let (b2, outcome) = reducer::apply(&b, &drag("a", Status::InProgress, Status::Done, None), t1);
    assert_eq!(b2.done[0].finish_time, Some(t1));
    assert!(matches!(
        outcome,
        Outcome::Transferred {
            stamped_done: true,
            ..
        }
    ));

    // Reopen then complete again: finish time is not rewritten.
    let (b3, _) = reducer::apply(&b2, &drag("a", Status::Done, Status::Todo, None), t2);
    assert_eq!(b3.todo[0].finish_time, Some(t1), "reopening keeps the stamp");
    let (b4, outcome) = reducer::apply(&b3, &drag("a", Status::Todo, Status::Done, None), t2);
    assert_eq!(b4.done[0].finish_time, Some(t1));
    assert!(matches!(
        outcome,
        Outcome::Transferred {
            stamped_done: false,
            ..
        }
    ));
}

#[test]
fn direct_todo_to_done_stamps_only_finish() {
    let b = board(&["a"], &[], &[]);
    let now = Local::now();

    let (next, _) = reducer::apply(&b, &drag("a", Status::Todo, Status::Done, None), now);

    assert_eq!(next.done[0].start_time, None);
    assert_eq!(next.done[0].finish_time, Some(now));
}

#[test]
fn reorder_preserves_other_relative_order_and_count() {
    let b = board(&["a", "b", "c", "d"], &[], &[]);

    let (next, outcome) = reducer::apply(
        &b,
        &drag("a", Status::Todo, Status::Todo, Some(2)),
        Local::now(),
    );

    assert_eq!(ids(&next.todo), ["b", "c", "a", "d"]);
    assert_eq!(next.todo.len(), 4);
    assert_eq!(outcome, Outcome::Reordered { from: 0, to: 2 });
}

#[test]
fn reorder_to_own_position_is_noop() {
    let b = board(&["a", "b"], &[], &[]);

    let (next, outcome) = reducer::apply(
        &b,
        &drag("b", Status::Todo, Status::Todo, Some(1)),
        Local::now(),
    );

    assert_eq!(outcome, Outcome::Noop);
    assert_eq!(next, b);
}

#[test]
fn drop_on_own_column_header_is_noop() {
    let b = board(&["a", "b"], &[], &[]);

    let (next, outcome) = reducer::apply(
        &b,
        &drag("a", Status::Todo, Status::Todo, None),
        Local::now(),
    );

    assert_eq!(outcome, Outcome::Noop);
    assert_eq!(next, b);
}

#[test]
fn unknown_item_is_noop() {
    let b = board(&["a"], &[], &[]);

    let (next, outcome) = reducer::apply(
        &b,
        &drag("ghost", Status::Todo, Status::Done, None),
        Local::now(),
    );

    assert_eq!(outcome, Outcome::Noop);
    assert_eq!(next, b);
}

#[test]
fn stale_source_column_is_noop() {
    // The gesture says the item is in todo, but it already lives in done.
    let b = board(&[], &[], &["a"]);

    let (next, outcome) = reducer::apply(
        &b,
        &drag("a", Status::Todo, Status::InProgress, None),
        Local::now(),
    );

    assert_eq!(outcome, Outcome::Noop);
    assert_eq!(next, b);
}

#[test]
fn out_of_range_target_index_clamps_to_tail() {
    let b = board(&["a"], &["b"], &[]);

    let (next, _) = reducer::apply(
        &b,
        &drag("a", Status::Todo, Status::InProgress, Some(99)),
        Local::now(),
    );
    assert_eq!(ids(&next.in_progress), ["b", "a"]);

    let (next, _) = reducer::apply(
        &next,
        &drag("a", Status::InProgress, Status::InProgress, Some(99)),
        Local::now(),
    );
    assert_eq!(ids(&next.in_progress), ["b", "a"]);
}

#[test]
fn notification_state_is_the_post_transition_board() {
    // The returned board is what callers notify and persist from; it must
    // already contain the transfer and the stamp (no one-update-behind
    // snapshot).
    let b = board(&["a", "b"], &[], &[]);
    let now = Local::now();

    let (notified, _) = reducer::apply(&b, &drag("a", Status::Todo, Status::InProgress, None), now);

    assert_eq!(ids(&notified.todo), ["b"]);
    assert_eq!(ids(&notified.in_progress), ["a"]);
    assert_eq!(notified.in_progress[0].start_time, Some(now));
}

#[test]
fn scenario_drag_onto_in_progress_column_header() {
    // Start: todo=[A,B], in-progress=[], done=[]; drag A onto the
    // in-progress column itself.
    let b = board(&["A", "B"], &[], &[]);
    let now = Local::now();

    let (next, _) = reducer::apply(&b, &drag("A", Status::Todo, Status::InProgress, None), now);

    assert_eq!(ids(&next.todo), ["B"]);
    assert_eq!(ids(&next.in_progress), ["A"]);
    assert!(next.in_progress[0].start_time.is_some());
    assert!(next.done.is_empty());
}

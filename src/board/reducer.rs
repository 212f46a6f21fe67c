//! Pure board state transitions for drag gestures.
//!
//! The gesture recognizer is whatever produced the event (here: the `move`
//! command); this module owns only the semantics. `apply` is a synchronous
//! function from a board plus one event to the next board, so every caller
//! notifies and persists from the computed next state, never from a stale
//! snapshot.

use super::Board;
use crate::models::status::Status;
use chrono::{DateTime, Local};

/// One drop gesture, already resolved to columns and an optional index.
#[derive(Debug, Clone)]
pub struct DragEvent {
    pub item_id: String,
    pub source: Status,
    pub target: Status,
    /// Position within the target column. `None` means "onto the column
    /// itself" (append on transfer, no-op within the same column).
    pub target_index: Option<usize>,
}

/// What a transition actually did, for logging and messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Item left `from` and entered `to`; flags say which stamps were set
    /// by this transition.
    Transferred {
        from: Status,
        to: Status,
        stamped_start: bool,
        stamped_done: bool,
    },
    /// Item moved from one index to another inside its column.
    Reordered { from: usize, to: usize },
    /// Nothing to do: unknown item, own position, or column drop with no
    /// column change.
    Noop,
}

/// Apply a drag event to a board, returning the next board and the outcome.
/// `now` is injected so stamping is deterministic under test.
pub fn apply(board: &Board, ev: &DragEvent, now: DateTime<Local>) -> (Board, Outcome) {
    // The source column named by the gesture must match where the item
    // actually is; a mismatch means the gesture raced a mutation and the
    // safe answer is to do nothing.
    let Some(actual) = board.column_of(&ev.item_id) else {
        return (board.clone(), Outcome::Noop);
    };
    if actual != ev.source {
        return (board.clone(), Outcome::Noop);
    }

    if ev.source == ev.target {
        reorder(board, ev)
    } else {
        transfer(board, ev, now)
    }
}

/// Cross-column transfer: remove from source, insert into target (append
/// when no index was given). Entering in-progress stamps the start time if
/// unset; entering done stamps the finish time if unset. Stamps are never
/// overwritten once set.
fn transfer(board: &Board, ev: &DragEvent, now: DateTime<Local>) -> (Board, Outcome) {
    let mut next = board.clone();

    let source = next.column_mut(ev.source);
    let Some(pos) = source.iter().position(|t| t.id == ev.item_id) else {
        return (board.clone(), Outcome::Noop);
    };
    let mut task = source.remove(pos);

    let mut stamped_start = false;
    let mut stamped_done = false;
    match ev.target {
        Status::InProgress => {
            if task.start_time.is_none() {
                task.start_time = Some(now);
                stamped_start = true;
            }
        }
        Status::Done => {
            if task.finish_time.is_none() {
                task.finish_time = Some(now);
                stamped_done = true;
            }
        }
        Status::Todo => {}
    }

    let target = next.column_mut(ev.target);
    let at = ev
        .target_index
        .map(|i| i.min(target.len()))
        .unwrap_or(target.len());
    target.insert(at, task);

    (
        next,
        Outcome::Transferred {
            from: ev.source,
            to: ev.target,
            stamped_start,
            stamped_done,
        },
    )
}

/// Intra-column reorder: relocate the item from its old index to the target
/// index, preserving all other relative orderings (move, not swap).
fn reorder(board: &Board, ev: &DragEvent) -> (Board, Outcome) {
    // A drop onto the column header of the same column changes nothing.
    let Some(target_index) = ev.target_index else {
        return (board.clone(), Outcome::Noop);
    };

    let mut next = board.clone();
    let column = next.column_mut(ev.source);
    let Some(old) = column.iter().position(|t| t.id == ev.item_id) else {
        return (board.clone(), Outcome::Noop);
    };
    let new = target_index.min(column.len().saturating_sub(1));
    if new == old {
        return (board.clone(), Outcome::Noop);
    }

    let task = column.remove(old);
    column.insert(new, task);

    (next, Outcome::Reordered { from: old, to: new })
}

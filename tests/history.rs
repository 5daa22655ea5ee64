//! History manager tests: linearity, edge no-ops, and truncation on
//! edit-after-undo.
mod common;
use common::*;
use fieldsmith::prelude::*;

#[test]
fn undo_redo_walk_the_timeline() {
    let d0 = titled("D0");
    let d1 = titled("D1");
    let d2 = titled("D2");

    let mut history = History::new(d0.clone());
    history.record(d1.clone());
    history.record(d2.clone());

    assert_eq!(history.undo().title, "D1");
    assert_eq!(history.undo().title, "D0");
    assert_eq!(history.redo().title, "D1");
}

#[test]
fn record_after_undo_discards_the_redo_tail() {
    let mut history = History::new(titled("D0"));
    history.record(titled("D1"));
    history.record(titled("D2"));

    assert_eq!(history.undo().title, "D1");
    history.record(titled("D3"));

    let titles: Vec<&str> = history.entries().iter().map(|d| d.title.as_str()).collect();
    assert_eq!(titles, vec!["D0", "D1", "D3"]);
    assert_eq!(history.cursor(), 2);
    assert_eq!(history.current().title, "D3");
    assert!(!history.can_redo());
}

#[test]
fn undo_at_the_left_edge_is_a_noop() {
    let mut history = History::new(titled("D0"));
    assert_eq!(history.undo().title, "D0");
    assert_eq!(history.undo().title, "D0");
    assert_eq!(history.cursor(), 0);
}

#[test]
fn redo_at_the_right_edge_is_a_noop() {
    let mut history = History::new(titled("D0"));
    history.record(titled("D1"));
    assert_eq!(history.redo().title, "D1");
    assert_eq!(history.cursor(), 1);
}

#[test]
fn can_undo_and_can_redo_track_the_cursor() {
    let mut history = History::new(titled("D0"));
    assert!(!history.can_undo());
    assert!(!history.can_redo());

    history.record(titled("D1"));
    assert!(history.can_undo());
    assert!(!history.can_redo());

    history.undo();
    assert!(!history.can_undo());
    assert!(history.can_redo());
}

#[test]
fn reset_replaces_the_timeline() {
    let mut history = History::new(titled("D0"));
    history.record(titled("D1"));
    history.record(titled("D2"));

    history.reset(titled("Fresh"));
    assert_eq!(history.len(), 1);
    assert_eq!(history.cursor(), 0);
    assert_eq!(history.current().title, "Fresh");
    assert!(!history.can_undo());
    assert!(!history.can_redo());
}

#[test]
fn snapshots_are_immutable_once_recorded() {
    let base = titled("Base");
    let mut history = History::new(base.clone());

    // Deriving a new snapshot from the current one must not disturb what
    // the history already holds.
    let edited = history.current().add_field(FieldType::Text);
    history.record(edited);

    assert_eq!(history.undo().fields.len(), 0);
    assert_eq!(history.redo().fields.len(), 1);
}

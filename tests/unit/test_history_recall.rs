//! Unit Tests for History Recall
//!
//! Cover the recall cursor both directly and through the input editor keys.

#[path = "../test_utils/fixtures.rs"]
mod fixtures;

use fixtures::test_session;
use termfolio::{HistoryManager, InputEditor, InputResult, Key};

fn history(lines: &[&str]) -> HistoryManager {
    let mut history = HistoryManager::new(10);
    for line in lines {
        history.record(*line);
    }
    history
}

#[test]
fn test_recall_walks_and_clamps() {
    let mut h = history(&["one", "two", "three"]);
    assert_eq!(h.recall_older(), "three");
    assert_eq!(h.recall_older(), "two");
    assert_eq!(h.recall_older(), "one");
    assert_eq!(h.recall_older(), "one");
    assert_eq!(h.recall_newer(), "two");
    assert_eq!(h.recall_newer(), "three");
    assert_eq!(h.recall_newer(), "");
    assert_eq!(h.cursor(), None);
}

#[test]
fn test_recording_resets_cursor() {
    let mut h = history(&["one", "two"]);
    h.recall_older();
    h.recall_older();
    h.record("three");
    assert_eq!(h.cursor(), None);
    assert_eq!(h.recall_older(), "three");
}

#[test]
fn test_empty_history_recall() {
    let mut h = HistoryManager::new(10);
    assert_eq!(h.recall_older(), "");
    assert_eq!(h.recall_newer(), "");
}

#[test]
fn test_capacity_drops_oldest() {
    let mut h = HistoryManager::new(2);
    h.record("a");
    h.record("b");
    h.record("c");
    assert_eq!(h.entries().collect::<Vec<_>>(), vec!["c", "b"]);
}

#[test]
fn test_blank_lines_are_not_recorded() {
    let h = history(&["", "   "]);
    assert!(h.is_empty());
}

#[test]
fn test_editor_arrow_keys_recall() {
    let mut session = test_session();
    let mut editor = InputEditor::new();

    assert_eq!(editor.handle_key(Key::Up, &mut session), InputResult::NoOp);

    session.submit("portfolio stack");
    session.submit("portfolio contact");

    assert_eq!(editor.handle_key(Key::Up, &mut session), InputResult::TextChanged);
    assert_eq!(editor.text(), "portfolio contact");
    assert_eq!(editor.caret(), editor.text().len());

    editor.handle_key(Key::Up, &mut session);
    assert_eq!(editor.text(), "portfolio stack");
    editor.handle_key(Key::Up, &mut session);
    assert_eq!(editor.text(), "portfolio stack");

    editor.handle_key(Key::Down, &mut session);
    assert_eq!(editor.text(), "portfolio contact");
    editor.handle_key(Key::Down, &mut session);
    assert_eq!(editor.text(), "");
}

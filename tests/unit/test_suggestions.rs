//! Unit Tests for Suggestions
//!
//! Checks the suggestion engine through a session and the pinned suggestion
//! list driven by the input editor.

#[path = "../test_utils/fixtures.rs"]
mod fixtures;

use fixtures::test_session;
use termfolio::completion::CompletionItemType;
use termfolio::{CompletionResult, InputEditor, InputResult, Key};

fn displays(result: &CompletionResult) -> Vec<&str> {
    result.suggestions.iter().map(|s| s.display.as_str()).collect()
}

fn type_text(editor: &mut InputEditor, session: &mut termfolio::Session, text: &str) {
    for ch in text.chars() {
        editor.handle_key(Key::Char(ch), session);
    }
}

#[test]
fn test_subcommands_after_primary() {
    let session = test_session();
    let input = "portfolio ";
    let result = session.suggest(input, input.len());
    let names = displays(&result);
    assert!(names.contains(&"sections"));
    assert!(names.contains(&"projects"));
    assert!(names.contains(&"dev"));
    assert!(!names.contains(&"timeline"));
}

#[test]
fn test_partial_token_matches_anywhere() {
    let session = test_session();
    let input = "portfolio ject";
    let result = session.suggest(input, input.len());
    assert_eq!(displays(&result), vec!["projects"]);
    assert_eq!(result.prefix, "ject");
    assert_eq!(result.replace_from, 10);
}

#[test]
fn test_slot_values_from_content() {
    let session = test_session();

    let input = "portfolio projects ";
    let result = session.suggest(input, input.len());
    assert_eq!(
        displays(&result),
        vec!["ls", "open", "Alpha", "Queue Watch", "Notes"]
    );
    assert_eq!(result.suggestions[2].item_type, CompletionItemType::Project);

    let input = "portfolio projects open ";
    assert_eq!(displays(&session.suggest(input, input.len())), vec!["1", "2", "3"]);

    let input = "portfolio resume -d f";
    assert_eq!(displays(&session.suggest(input, input.len())), vec!["fr"]);
}

#[test]
fn test_section_names_after_sections() {
    let session = test_session();
    let input = "portfolio sections c";
    let result = session.suggest(input, input.len());
    assert_eq!(
        displays(&result),
        vec!["education", "certifications", "projects", "contact"]
    );

    let input = "portfolio sections CERT";
    assert_eq!(displays(&session.suggest(input, input.len())), vec!["certifications"]);
}

#[test]
fn test_no_suggestions_past_a_leaf() {
    let session = test_session();
    let input = "portfolio contact ";
    assert!(session.suggest(input, input.len()).is_empty());
}

#[test]
fn test_tab_toggles_the_list() {
    let mut session = test_session();
    let mut editor = InputEditor::new();
    type_text(&mut editor, &mut session, "portfolio st");

    assert!(!editor.is_pinned());
    assert_eq!(
        editor.handle_key(Key::Tab, &mut session),
        InputResult::SuggestionsChanged
    );
    assert!(editor.is_pinned());
    assert_eq!(editor.selected_item().map(|i| i.display.as_str()), Some("stack"));

    assert_eq!(
        editor.handle_key(Key::Tab, &mut session),
        InputResult::SuggestionsChanged
    );
    assert!(!editor.is_pinned());
}

#[test]
fn test_tab_with_nothing_to_offer_stays_closed() {
    let mut session = test_session();
    let mut editor = InputEditor::new();
    type_text(&mut editor, &mut session, "portfolio zzz");
    assert_eq!(editor.handle_key(Key::Tab, &mut session), InputResult::NoOp);
    assert!(!editor.is_pinned());
}

#[test]
fn test_arrows_rotate_selection() {
    let mut session = test_session();
    let mut editor = InputEditor::new();
    type_text(&mut editor, &mut session, "portfolio resume -d ");
    editor.handle_key(Key::Tab, &mut session);
    assert_eq!(editor.suggestions().map(|r| r.len()), Some(2));

    assert_eq!(editor.selected_index(), Some(0));
    editor.handle_key(Key::Down, &mut session);
    assert_eq!(editor.selected_index(), Some(1));
    editor.handle_key(Key::Down, &mut session);
    assert_eq!(editor.selected_index(), Some(0));
    editor.handle_key(Key::Up, &mut session);
    assert_eq!(editor.selected_index(), Some(1));
    // Arrow keys did not touch the text
    assert_eq!(editor.text(), "portfolio resume -d ");
}

#[test]
fn test_enter_accepts_and_keeps_list_pinned() {
    let mut session = test_session();
    let mut editor = InputEditor::new();
    type_text(&mut editor, &mut session, "portfolio proj");
    editor.handle_key(Key::Tab, &mut session);

    assert_eq!(
        editor.handle_key(Key::Enter, &mut session),
        InputResult::TextChanged
    );
    assert_eq!(editor.text(), "portfolio projects ");
    assert!(editor.is_pinned());
    assert_eq!(
        editor.selected_item().map(|i| i.display.as_str()),
        Some("ls")
    );

    // Accept a project name containing a space
    editor.handle_key(Key::Down, &mut session);
    editor.handle_key(Key::Down, &mut session);
    editor.handle_key(Key::Down, &mut session);
    editor.handle_key(Key::Enter, &mut session);
    assert_eq!(editor.text(), "portfolio projects \"Queue Watch\"");
}

#[test]
fn test_editing_refreshes_pinned_list() {
    let mut session = test_session();
    let mut editor = InputEditor::new();
    type_text(&mut editor, &mut session, "portfolio ");
    editor.handle_key(Key::Tab, &mut session);
    for _ in 0..5 {
        editor.handle_key(Key::Down, &mut session);
    }

    type_text(&mut editor, &mut session, "ed");
    let result = editor.suggestions().cloned().unwrap_or_default();
    assert_eq!(displays(&result), vec!["education"]);
    assert_eq!(editor.selected_index(), Some(0));
}

#[test]
fn test_enter_without_list_submits() {
    let mut session = test_session();
    let mut editor = InputEditor::new();
    type_text(&mut editor, &mut session, "exit");
    let result = editor.handle_key(Key::Enter, &mut session);
    assert!(matches!(result, InputResult::Submitted(effects) if effects.len() == 1));
    assert_eq!(editor.text(), "");
}

#[test]
fn test_wizard_disables_suggestions() {
    let mut session = test_session();
    let mut editor = InputEditor::new();
    session.submit("portfolio dev contact");
    type_text(&mut editor, &mut session, "po");
    assert_eq!(editor.handle_key(Key::Tab, &mut session), InputResult::NoOp);
    assert!(!editor.is_pinned());

    assert_eq!(editor.handle_key(Key::Escape, &mut session), InputResult::Cancelled);
    assert_eq!(editor.text(), "");
    assert!(!session.state().is_wizard());
}

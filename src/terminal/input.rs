//! Input line editor
//!
//! Keystroke model of the interpreter's input line: text and caret, the
//! pinned suggestion list, and history recall. Submitted lines are handed to
//! the [`Session`].

use crate::commands::Effect;
use crate::completion::{CompletionItem, CompletionResult};
use crate::terminal::Session;

/// A key press the editor understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Left,
    Right,
    Home,
    End,
    Up,
    Down,
    Tab,
    Enter,
    Escape,
    CtrlC,
}

/// Result of processing a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResult {
    /// Nothing changed
    NoOp,
    /// Text or caret changed
    TextChanged,
    /// The suggestion list opened, closed or moved
    SuggestionsChanged,
    /// A line was submitted to the session
    Submitted(Vec<Effect>),
    /// The contact dialog was cancelled
    Cancelled,
}

#[derive(Debug, Clone)]
struct SuggestionPopup {
    result: CompletionResult,
    selected: usize,
}

impl SuggestionPopup {
    fn select_next(&mut self) {
        if !self.result.is_empty() {
            self.selected = (self.selected + 1) % self.result.len();
        }
    }

    fn select_previous(&mut self) {
        let len = self.result.len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }
}

/// Editable input line bound to a session
#[derive(Debug, Clone, Default)]
pub struct InputEditor {
    text: String,
    /// Byte offset, always on a char boundary
    caret: usize,
    /// Open (pinned) suggestion list
    popup: Option<SuggestionPopup>,
}

impl InputEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Replace the text and put the caret at its end
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.caret = self.text.len();
    }

    pub fn is_pinned(&self) -> bool {
        self.popup.is_some()
    }

    /// Suggestions currently shown, if the list is open
    pub fn suggestions(&self) -> Option<&CompletionResult> {
        self.popup.as_ref().map(|p| &p.result)
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.popup
            .as_ref()
            .filter(|p| !p.result.is_empty())
            .map(|p| p.selected)
    }

    pub fn selected_item(&self) -> Option<&CompletionItem> {
        let popup = self.popup.as_ref()?;
        popup.result.get(popup.selected)
    }

    /// Process one key press
    pub fn handle_key(&mut self, key: Key, session: &mut Session) -> InputResult {
        let in_wizard = session.state().is_wizard();
        if in_wizard {
            self.popup = None;
        }
        let list_open = self.popup.as_ref().is_some_and(|p| !p.result.is_empty());

        match key {
            Key::Char(ch) if ch.is_control() => InputResult::NoOp,
            Key::Char(ch) => {
                self.text.insert(self.caret, ch);
                self.caret += ch.len_utf8();
                self.refresh(session)
            }
            Key::Backspace => match self.char_before_caret() {
                Some(prev) => {
                    self.caret -= prev.len_utf8();
                    self.text.remove(self.caret);
                    self.refresh(session)
                }
                None => InputResult::NoOp,
            },
            Key::Left => match self.char_before_caret() {
                Some(prev) => {
                    self.caret -= prev.len_utf8();
                    self.refresh(session)
                }
                None => InputResult::NoOp,
            },
            Key::Right => match self.char_after_caret() {
                Some(next) => {
                    self.caret += next.len_utf8();
                    self.refresh(session)
                }
                None => InputResult::NoOp,
            },
            Key::Home => {
                self.caret = 0;
                self.refresh(session)
            }
            Key::End => {
                self.caret = self.text.len();
                self.refresh(session)
            }
            Key::Tab if in_wizard => InputResult::NoOp,
            Key::Tab => {
                if self.popup.take().is_some() {
                    return InputResult::SuggestionsChanged;
                }
                let result = session.suggest(&self.text, self.caret);
                if result.is_empty() {
                    return InputResult::NoOp;
                }
                self.popup = Some(SuggestionPopup {
                    result,
                    selected: 0,
                });
                InputResult::SuggestionsChanged
            }
            Key::Up if list_open => {
                if let Some(popup) = self.popup.as_mut() {
                    popup.select_previous();
                }
                InputResult::SuggestionsChanged
            }
            Key::Down if list_open => {
                if let Some(popup) = self.popup.as_mut() {
                    popup.select_next();
                }
                InputResult::SuggestionsChanged
            }
            Key::Up => {
                if session.history().is_empty() {
                    return InputResult::NoOp;
                }
                let recalled = session.recall_older();
                self.set_text(recalled);
                InputResult::TextChanged
            }
            Key::Down => {
                let recalled = session.recall_newer();
                self.set_text(recalled);
                InputResult::TextChanged
            }
            Key::Enter if list_open => self.accept(session),
            Key::Enter => {
                let line = std::mem::take(&mut self.text);
                self.caret = 0;
                self.popup = None;
                InputResult::Submitted(session.submit(&line))
            }
            Key::Escape if self.popup.is_some() => {
                self.popup = None;
                InputResult::SuggestionsChanged
            }
            Key::Escape | Key::CtrlC => {
                if session.cancel_wizard() {
                    self.text.clear();
                    self.caret = 0;
                    InputResult::Cancelled
                } else {
                    InputResult::NoOp
                }
            }
        }
    }

    fn char_before_caret(&self) -> Option<char> {
        self.text[..self.caret].chars().next_back()
    }

    fn char_after_caret(&self) -> Option<char> {
        self.text[self.caret..].chars().next()
    }

    /// Accept the selected suggestion and recompute the pinned list
    fn accept(&mut self, session: &Session) -> InputResult {
        let Some(popup) = self.popup.as_ref() else {
            return InputResult::NoOp;
        };
        let Some(item) = popup.result.get(popup.selected) else {
            return InputResult::NoOp;
        };

        let (text, caret) = popup.result.apply(&self.text, item);
        self.text = text;
        self.caret = caret;
        self.refresh(session);
        InputResult::TextChanged
    }

    /// Recompute an open list at the current caret, clamping the selection
    fn refresh(&mut self, session: &Session) -> InputResult {
        if let Some(popup) = self.popup.as_mut() {
            popup.result = session.suggest(&self.text, self.caret);
            popup.selected = popup.selected.min(popup.result.len().saturating_sub(1));
        }
        InputResult::TextChanged
    }
}

//! ANSI styling for rendered output
//!
//! Turns the display segments of a rendered line into escape-coded text for
//! a real terminal: the prompt echo in green, references underlined.

use crate::completion::CompletionItem;
use crate::terminal::output::{render, Segment};
use once_cell::sync::Lazy;
use regex::Regex;

static ESCAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[[0-9;]*[mK]").expect("escape pattern is valid"));

const RESET: &str = "\x1b[0m";

/// Standard terminal colors used by the styler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Green,
    Blue,
    Cyan,
    Yellow,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Cyan => 36,
        }
    }
}

/// Text formatting attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAttribute {
    Bold,
    Underline,
    Dim,
}

impl TextAttribute {
    fn code(self) -> u8 {
        match self {
            TextAttribute::Bold => 1,
            TextAttribute::Dim => 2,
            TextAttribute::Underline => 4,
        }
    }
}

/// Wrap `text` in an SGR sequence
pub fn paint(text: &str, color: Option<Color>, attributes: &[TextAttribute]) -> String {
    let mut codes: Vec<String> = attributes.iter().map(|a| a.code().to_string()).collect();
    if let Some(color) = color {
        codes.push(color.code().to_string());
    }
    if codes.is_empty() || text.is_empty() {
        return text.to_string();
    }
    format!("\x1b[{}m{}{}", codes.join(";"), text, RESET)
}

/// Styles rendered lines, or passes them through plain when disabled
#[derive(Debug, Clone, Copy)]
pub struct Styler {
    enabled: bool,
}

impl Styler {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// One output line, rendered and styled
    pub fn line(&self, text: &str) -> String {
        render(text)
            .iter()
            .map(|segment| self.segment(segment))
            .collect()
    }

    fn segment(&self, segment: &Segment) -> String {
        match segment {
            Segment::Text(text) => text.clone(),
            Segment::Prompt(prompt) if self.enabled => paint(prompt, Some(Color::Green), &[]),
            Segment::Prompt(prompt) => prompt.clone(),
            Segment::Link(link) if self.enabled => {
                paint(&link.text, Some(Color::Blue), &[TextAttribute::Underline])
            }
            Segment::Link(link) => link.text.clone(),
        }
    }

    /// Input prompt label
    pub fn prompt(&self, label: &str) -> String {
        if self.enabled {
            paint(label, Some(Color::Green), &[TextAttribute::Bold])
        } else {
            label.to_string()
        }
    }

    /// One row of the suggestion list
    pub fn suggestion(&self, item: &CompletionItem, selected: bool) -> String {
        let marker = if selected { ">" } else { " " };
        let description = item.description.as_deref().unwrap_or_default();
        let row = format!("{} {} {:<24} {}", marker, item.get_icon(), item.display, description);
        if !self.enabled {
            return row;
        }
        if selected {
            paint(&row, Some(Color::Cyan), &[TextAttribute::Bold])
        } else {
            paint(&row, None, &[TextAttribute::Dim])
        }
    }
}

/// Remove SGR and erase-line sequences
pub fn strip_ansi(text: &str) -> String {
    ESCAPE.replace_all(text, "").into_owned()
}

//! Command history with recall navigation
//!
//! Submitted lines are kept newest first. A transient recall cursor walks
//! the log for the Up/Down keys without ever mutating it.

use std::collections::VecDeque;

/// Default number of entries kept when no limit is configured
pub const DEFAULT_HISTORY_LIMIT: usize = 500;

/// In-memory command history for one session
#[derive(Debug, Clone)]
pub struct HistoryManager {
    /// Entries, most recent at the front
    history: VecDeque<String>,
    /// Maximum history size; the oldest entry is dropped beyond it
    max_size: usize,
    /// Recall position; `None` is "past the newest" (empty input)
    cursor: Option<usize>,
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl HistoryManager {
    /// Create an empty history holding at most `max_size` entries
    pub fn new(max_size: usize) -> Self {
        Self {
            history: VecDeque::new(),
            max_size: max_size.max(1),
            cursor: None,
        }
    }

    /// Record a submitted line and reset the recall cursor
    pub fn record(&mut self, line: impl Into<String>) {
        let line = line.into();
        self.cursor = None;
        if line.trim().is_empty() {
            return;
        }

        self.history.push_front(line);
        self.history.truncate(self.max_size);
    }

    /// Step toward the oldest entry, clamping at the end of the log
    pub fn recall_older(&mut self) -> String {
        if self.history.is_empty() {
            return String::new();
        }

        let next = match self.cursor {
            None => 0,
            Some(idx) => (idx + 1).min(self.history.len() - 1),
        };
        self.cursor = Some(next);
        self.history[next].clone()
    }

    /// Step back toward the newest entry; past it the input is empty
    pub fn recall_newer(&mut self) -> String {
        self.cursor = match self.cursor {
            None | Some(0) => None,
            Some(idx) => Some(idx - 1),
        };
        self.cursor
            .and_then(|idx| self.history.get(idx).cloned())
            .unwrap_or_default()
    }

    /// Current recall position, `None` when no entry is selected
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Entries, most recent first
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Numbered listing, newest first, as printed by the `history` command
    pub fn listing(&self) -> String {
        if self.history.is_empty() {
            return "No command history.".to_string();
        }
        self.history
            .iter()
            .enumerate()
            .map(|(i, cmd)| format!("{:>4} {}", i + 1, cmd))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

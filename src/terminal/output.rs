//! Output lines and rendering
//!
//! The session appends immutable [`Line`]s to a [`LineBuffer`]. Rendering
//! splits a line into display segments: the prompt-echo span and clickable
//! references (web URLs, root-relative paths and email addresses).

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::VecDeque;

/// Opens the prompt-echo span of a line
pub const PROMPT_OPEN: &str = "[[PROMPT]]";
/// Closes the prompt-echo span of a line
pub const PROMPT_CLOSE: &str = "[[/PROMPT]]";

static LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"((https?://[^\s)]+)|(/[\w\-./%?#=&]+)|([A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}))",
    )
    .expect("link pattern is valid")
});

/// One output line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Monotonic id, unique for the session's lifetime
    pub id: u64,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// Ordered output of a session
#[derive(Debug, Clone, Default)]
pub struct LineBuffer {
    lines: VecDeque<Line>,
    next_id: u64,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `text`, one line per `\n`; returns the ids assigned
    pub fn push(&mut self, text: &str) -> Vec<u64> {
        text.split('\n')
            .map(|part| {
                let id = self.next_id;
                self.next_id += 1;
                self.lines.push_back(Line {
                    id,
                    text: part.to_string(),
                    timestamp: Utc::now(),
                });
                id
            })
            .collect()
    }

    /// Remove every line; ids keep increasing afterwards
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    /// Lines with an id at or above `id`
    pub fn since(&self, id: u64) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(move |line| line.id >= id)
    }

    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().map(|l| l.text.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Id the next pushed line will receive
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}

/// Echo line for a submitted command
pub fn echo_line(prompt: &str, command: &str) -> String {
    format!("{}{}{}{}", PROMPT_OPEN, prompt, PROMPT_CLOSE, command)
}

/// A clickable reference inside a rendered line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Text as it appears in the line
    pub text: String,
    /// Navigation target (`mailto:` for email addresses)
    pub href: String,
}

impl Link {
    fn from_match(text: &str) -> Self {
        let is_email = text.contains('@') && !text.starts_with("http") && !text.starts_with('/');
        let href = if is_email {
            format!("mailto:{}", text)
        } else {
            text.to_string()
        };
        Self {
            text: text.to_string(),
            href,
        }
    }

    pub fn is_email(&self) -> bool {
        self.href.starts_with("mailto:")
    }

    /// Target to navigate to for a primary click; plain clicks are ignored
    pub fn activate(&self, modifier_held: bool) -> Option<&str> {
        modifier_held.then_some(self.href.as_str())
    }
}

/// A display node of a rendered line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    /// The echoed prompt of a submitted command
    Prompt(String),
    Link(Link),
}

/// Split a line into display segments
pub fn render(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();

    match text.split_once(PROMPT_OPEN) {
        Some((before, after_open)) => {
            let (prompt, after) = after_open.split_once(PROMPT_CLOSE).unwrap_or((after_open, ""));
            linkify_into(before, &mut segments);
            if !prompt.is_empty() {
                segments.push(Segment::Prompt(prompt.to_string()));
            }
            linkify_into(after, &mut segments);
        }
        None => linkify_into(text, &mut segments),
    }
    segments
}

/// Segments of `text` with references detected
pub fn linkify(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    linkify_into(text, &mut segments);
    segments
}

fn linkify_into(text: &str, segments: &mut Vec<Segment>) {
    let mut last = 0;
    for m in LINK.find_iter(text) {
        if m.start() > last {
            segments.push(Segment::Text(text[last..m.start()].to_string()));
        }
        segments.push(Segment::Link(Link::from_match(m.as_str())));
        last = m.end();
    }
    if last < text.len() {
        segments.push(Segment::Text(text[last..].to_string()));
    }
}

/// Plain text of a rendered line with markers removed
pub fn plain_text(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Text(text) | Segment::Prompt(text) => text.as_str(),
            Segment::Link(link) => link.text.as_str(),
        })
        .collect()
}

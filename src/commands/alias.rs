//! Alias resolution
//!
//! Aliases rewrite the first word of a command line. Expansion is a single
//! pass: the expanded line is not looked up again, so an alias whose
//! expansion starts with another alias name stays literal.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

/// Short name -> expansion
pub type AliasMap = BTreeMap<String, String>;

static DEFINITION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([^\s=]+)=(.+)$").expect("alias definition pattern is valid"));

static SURROUNDING_QUOTES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^['"]|['"]$"#).expect("quote pattern is valid"));

/// Expand the first word of `line` if it names an alias
pub fn resolve(line: &str, aliases: &AliasMap) -> String {
    let trimmed = line.trim();
    let (first, rest) = trimmed
        .split_once(char::is_whitespace)
        .unwrap_or((trimmed, ""));

    match aliases.get(first) {
        Some(expansion) => format!("{} {}", expansion, rest).trim().to_string(),
        None => line.to_string(),
    }
}

/// Parse `short=command` (the command may be wrapped in quotes)
pub fn parse_definition(text: &str) -> Option<(String, String)> {
    let caps = DEFINITION.captures(text.trim())?;
    let name = caps.get(1)?.as_str().to_string();
    let command = SURROUNDING_QUOTES
        .replace_all(caps.get(2)?.as_str(), "")
        .trim()
        .to_string();

    if command.is_empty() {
        return None;
    }
    Some((name, command))
}

//! Unit Tests for Tokenizing and Alias Resolution

use termfolio::commands::alias::{parse_definition, resolve, AliasMap};
use termfolio::commands::tokenize::{has_open_quote, strip_quotes, tokenize, tokenize_spans};

#[test]
fn test_mixed_quotes_and_whitespace() {
    assert_eq!(
        tokenize(r#"  portfolio   projects "Queue Watch"  'x y'z "#),
        vec!["portfolio", "projects", "Queue Watch", "x yz"]
    );
}

#[test]
fn test_empty_quotes_produce_no_token() {
    assert_eq!(tokenize(r#"a "" b ''"#), vec!["a", "b"]);
}

#[test]
fn test_spans_point_at_raw_start() {
    let spans = tokenize_spans(r#"ab  "c d""#);
    assert_eq!(spans.len(), 2);
    assert_eq!(spans[0].start, 0);
    assert_eq!(spans[1].start, 4);
    assert_eq!(spans[1].text, "c d");
}

#[test]
fn test_non_ascii_input() {
    assert_eq!(tokenize("café 'naïve résumé'"), vec!["café", "naïve résumé"]);
    let spans = tokenize_spans("é ü");
    assert_eq!(spans[1].start, 3);
}

#[test]
fn test_open_quote_detection() {
    assert!(has_open_quote(r#"projects "Queue "#));
    assert!(!has_open_quote(r#"projects "Queue Watch" "#));
    assert!(has_open_quote(r#"say "it's"#));
    assert!(!has_open_quote("plain"));
}

#[test]
fn test_strip_quotes() {
    assert_eq!(strip_quotes(r#""Ada" 'L'"#), "Ada L");
}

#[test]
fn test_alias_definitions() {
    assert_eq!(
        parse_definition("pl='portfolio projects ls'"),
        Some(("pl".to_string(), "portfolio projects ls".to_string()))
    );
    assert_eq!(
        parse_definition("p=portfolio"),
        Some(("p".to_string(), "portfolio".to_string()))
    );
    assert_eq!(parse_definition("p="), None);
    assert_eq!(parse_definition("=portfolio"), None);
    assert_eq!(parse_definition("portfolio"), None);
}

#[test]
fn test_alias_resolution_keeps_arguments() {
    let mut aliases = AliasMap::new();
    aliases.insert("pp".to_string(), "portfolio projects".to_string());
    assert_eq!(resolve("pp open 2", &aliases), "portfolio projects open 2");
    assert_eq!(resolve("  pp  ", &aliases), "portfolio projects");
    assert_eq!(resolve("ppp", &aliases), "ppp");
}

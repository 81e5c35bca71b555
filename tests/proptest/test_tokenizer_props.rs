//! Property-based tests for the tokenizer and history

use proptest::prelude::*;
use termfolio::commands::tokenize::{tokenize, tokenize_spans};
use termfolio::HistoryManager;

proptest! {
    #[test]
    fn test_tokenize_doesnt_panic(s in "\\PC*") {
        let _ = tokenize(&s);
    }

    #[test]
    fn test_no_empty_tokens(s in "[a-z \"'\\t]{0,40}") {
        for token in tokenize(&s) {
            prop_assert!(!token.is_empty());
        }
    }

    #[test]
    fn test_unquoted_words_round_trip(words in prop::collection::vec("[a-zA-Z0-9_.-]{1,10}", 0..8)) {
        let line = words.join("   ");
        prop_assert_eq!(tokenize(&line), words);
    }

    #[test]
    fn test_quoted_span_is_single_token(inner in "[a-z ]{0,20}") {
        let tokens = tokenize(&format!("\"{}\"", inner));
        if inner.is_empty() {
            prop_assert!(tokens.is_empty());
        } else {
            prop_assert_eq!(tokens, vec![inner]);
        }
    }

    #[test]
    fn test_span_starts_are_increasing_char_boundaries(s in "\\PC{0,40}") {
        let spans = tokenize_spans(&s);
        for pair in spans.windows(2) {
            prop_assert!(pair[0].start < pair[1].start);
        }
        for span in &spans {
            prop_assert!(s.is_char_boundary(span.start));
        }
    }

    #[test]
    fn test_history_never_exceeds_capacity(
        capacity in 1usize..20,
        lines in prop::collection::vec("[a-z]{1,5}", 0..50),
    ) {
        let mut history = HistoryManager::new(capacity);
        for line in &lines {
            history.record(line.clone());
        }
        prop_assert!(history.len() <= capacity);
        if let Some(last) = lines.last() {
            prop_assert_eq!(history.entries().next(), Some(last.as_str()));
        }
    }
}

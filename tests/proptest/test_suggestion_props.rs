//! Property-based tests for suggestions and rendering

use proptest::prelude::*;
use termfolio::commands::grammar::Grammar;
use termfolio::completion::CompletionProvider;
use termfolio::content::ContentStore;
use termfolio::terminal::output::{plain_text, render};

fn content() -> ContentStore {
    ContentStore::builtin().unwrap()
}

proptest! {
    #[test]
    fn test_suggest_is_deterministic(input in "[a-z \"-]{0,30}", caret in 0usize..40) {
        let grammar = Grammar::new("portfolio");
        let content = content();
        let provider = CompletionProvider::new(&grammar, &content);
        prop_assert_eq!(provider.suggest(&input, caret), provider.suggest(&input, caret));
    }

    #[test]
    fn test_suggest_doesnt_panic_on_any_caret(input in "\\PC{0,20}", caret in 0usize..100) {
        let grammar = Grammar::new("portfolio");
        let content = content();
        let provider = CompletionProvider::new(&grammar, &content);
        let result = provider.suggest(&input, caret);
        prop_assert!(result.caret <= input.len());
        prop_assert!(result.replace_from <= result.caret);
    }

    #[test]
    fn test_suggestions_contain_the_partial_token(partial in "[a-z]{1,3}") {
        let grammar = Grammar::new("portfolio");
        let content = content();
        let provider = CompletionProvider::new(&grammar, &content);
        let input = format!("portfolio {}", partial);
        let result = provider.suggest(&input, input.len());
        for item in &result.suggestions {
            prop_assert!(item.display.to_lowercase().contains(&partial));
        }
    }

    #[test]
    fn test_accepting_keeps_text_after_caret(tail in "[a-z]{0,10}") {
        let grammar = Grammar::new("portfolio");
        let content = content();
        let provider = CompletionProvider::new(&grammar, &content);
        let input = format!("portfolio st {}", tail);
        let result = provider.suggest(&input, 12);
        if let Some(item) = result.get(0) {
            let (text, caret) = result.apply(&input, item);
            let expected_suffix = format!(" {}", tail);
            prop_assert!(text.ends_with(&expected_suffix));
            prop_assert!(text.is_char_boundary(caret));
        }
    }

    #[test]
    fn test_render_preserves_text(s in "[a-zA-Z0-9@./: ]{0,60}") {
        prop_assert_eq!(plain_text(&render(&s)), s);
    }
}

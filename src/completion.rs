//! Command Completion
//!
//! Context-sensitive suggestions for the interpreter's input line. The
//! provider walks the same [`Grammar`] the dispatcher resolves against, so a
//! suggestion is offered exactly where the dispatcher would accept it.
//! Results depend only on the input text and the caret.

use crate::commands::grammar::{Grammar, Node, Slot};
use crate::commands::tokenize::{ends_with_whitespace, has_open_quote, tokenize_spans};
use crate::content::ContentStore;

/// Individual completion item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionItem {
    /// Text inserted when the item is accepted
    pub insert_text: String,
    /// Text shown in the list and matched against the partial token
    pub display: String,
    /// Short description shown next to the item
    pub description: Option<String>,
    /// Type of completion item
    pub item_type: CompletionItemType,
}

/// Type of completion item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionItemType {
    /// Verb or sub-command from the grammar
    Command,
    /// Project name
    Project,
    /// 1-based project index
    Index,
    /// Resume language code
    Language,
}

impl CompletionItem {
    fn from_node(node: &Node) -> Self {
        Self {
            insert_text: node.insert.to_string(),
            display: node.display.to_string(),
            description: Some(node.description.to_string()),
            item_type: CompletionItemType::Command,
        }
    }

    /// Get an icon for the completion item
    pub fn get_icon(&self) -> &str {
        match self.item_type {
            CompletionItemType::Command => "⚡",
            CompletionItemType::Project => "📁",
            CompletionItemType::Index => "#",
            CompletionItemType::Language => "📄",
        }
    }
}

/// Completion result containing suggestions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionResult {
    /// Ordered suggestions
    pub suggestions: Vec<CompletionItem>,
    /// The partial token the suggestions were filtered by
    pub prefix: String,
    /// Byte offset where an accepted suggestion starts replacing text
    pub replace_from: usize,
    /// Caret the result was computed for
    pub caret: usize,
}

impl CompletionResult {
    /// Check if there are any suggestions
    pub fn is_empty(&self) -> bool {
        self.suggestions.is_empty()
    }

    /// Get the number of suggestions
    pub fn len(&self) -> usize {
        self.suggestions.len()
    }

    pub fn get(&self, index: usize) -> Option<&CompletionItem> {
        self.suggestions.get(index)
    }

    /// Accept `item` into `input`, returning the new text and caret
    ///
    /// The token under construction is replaced; at a token boundary the
    /// item is inserted at the caret. Text after the caret is kept.
    pub fn apply(&self, input: &str, item: &CompletionItem) -> (String, usize) {
        let caret = clamp_caret(input, self.caret);
        let from = self.replace_from.min(caret);

        let mut text = String::with_capacity(input.len() + item.insert_text.len());
        text.push_str(&input[..from]);
        text.push_str(&item.insert_text);
        let new_caret = text.len();
        text.push_str(&input[caret..]);
        (text, new_caret)
    }
}

/// Completion provider over the command grammar and portfolio content
#[derive(Debug, Clone, Copy)]
pub struct CompletionProvider<'a> {
    grammar: &'a Grammar,
    content: &'a ContentStore,
}

impl<'a> CompletionProvider<'a> {
    pub fn new(grammar: &'a Grammar, content: &'a ContentStore) -> Self {
        Self { grammar, content }
    }

    /// Suggestions for the text before `caret`
    pub fn suggest(&self, input: &str, caret: usize) -> CompletionResult {
        let caret = clamp_caret(input, caret);
        let head = &input[..caret];
        let tokens = tokenize_spans(head);

        let at_boundary = match tokens.last() {
            None => true,
            Some(_) => ends_with_whitespace(head) && !has_open_quote(head),
        };
        let (complete, prefix, replace_from) = if at_boundary {
            (&tokens[..], String::new(), caret)
        } else {
            let last = &tokens[tokens.len() - 1];
            (&tokens[..tokens.len() - 1], last.text.clone(), last.start)
        };

        let candidates = match complete.split_first() {
            Some((first, rest)) if first.text == self.grammar.primary_word() => {
                let mut node = self.grammar.primary();
                let mut found = true;
                for token in rest {
                    match node.child(&token.text) {
                        Some(child) => node = child,
                        None => {
                            found = false;
                            break;
                        }
                    }
                }
                if found {
                    self.candidates_at(node)
                } else {
                    Vec::new()
                }
            }
            _ => self
                .grammar
                .root()
                .iter()
                .filter(|n| !n.hidden)
                .map(CompletionItem::from_node)
                .collect(),
        };

        let query = prefix.to_lowercase();
        let suggestions = candidates
            .into_iter()
            .filter(|item| query.is_empty() || item.display.to_lowercase().contains(&query))
            .collect();

        CompletionResult {
            suggestions,
            prefix,
            replace_from,
            caret,
        }
    }

    fn candidates_at(&self, node: &Node) -> Vec<CompletionItem> {
        let mut items: Vec<CompletionItem> =
            node.visible_children().map(CompletionItem::from_node).collect();

        match node.slot {
            Some(Slot::ProjectName) => {
                items.extend(self.content.projects().iter().map(|p| CompletionItem {
                    insert_text: if p.name.contains(' ') {
                        format!("\"{}\"", p.name)
                    } else {
                        p.name.clone()
                    },
                    display: p.name.clone(),
                    description: Some("project".to_string()),
                    item_type: CompletionItemType::Project,
                }))
            }
            Some(Slot::ProjectIndex) => {
                items.extend((1..=self.content.projects().len()).map(|i| CompletionItem {
                    insert_text: i.to_string(),
                    display: i.to_string(),
                    description: Some("index".to_string()),
                    item_type: CompletionItemType::Index,
                }))
            }
            Some(Slot::Language) => items.extend(self.content.resumes().iter().map(|r| {
                CompletionItem {
                    insert_text: r.lang.clone(),
                    display: r.lang.clone(),
                    description: Some(r.label.clone()),
                    item_type: CompletionItemType::Language,
                }
            })),
            None => {}
        }
        items
    }
}

/// Clamp a caret into `input`, backing off to a char boundary
fn clamp_caret(input: &str, caret: usize) -> usize {
    let mut caret = caret.min(input.len());
    while !input.is_char_boundary(caret) {
        caret -= 1;
    }
    caret
}

//! Command Dispatcher
//!
//! Interprets a resolved, tokenized line against the [`grammar::Grammar`].
//! Every handler returns text and zero or more [`Effect`]s for the session
//! or its host to carry out. Unknown input always yields a readable
//! message; dispatch never fails.

pub mod alias;
pub mod eggs;
pub mod format;
pub mod grammar;
pub mod tokenize;

use crate::content::{ContentStore, TimelineKind};
use crate::history::HistoryManager;
use crate::outbound::OutboundMessage;
use crate::state::AppMode;
use alias::AliasMap;
use grammar::{Grammar, Node, NodeId, Section, Sub, Verb};
use rand::rngs::StdRng;

/// Side effects requested by a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Open a resource in a new browser context
    OpenUrl(String),
    /// Fetch a document under the given file name
    Download { path: String, file_name: String },
    /// Change the application surface
    SwitchMode(AppMode),
    /// Empty the output line sequence
    ClearScreen,
    /// Enter the contact dialog
    StartWizard,
    /// Username or aliases changed and must be persisted
    PreferencesChanged,
    /// Deliver a composed message
    SendMessage(OutboundMessage),
}

/// Result of dispatching one line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dispatch {
    /// Text to print, possibly multi-line
    pub output: Option<String>,
    pub effects: Vec<Effect>,
}

impl Dispatch {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            output: Some(text.into()),
            effects: Vec::new(),
        }
    }

    pub fn effect(effect: Effect) -> Self {
        Self {
            output: None,
            effects: vec![effect],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    /// Output split into lines (empty when there is no output)
    pub fn lines(&self) -> Vec<&str> {
        self.output
            .as_deref()
            .map(|text| text.split('\n').collect())
            .unwrap_or_default()
    }
}

/// Mutable session data a command may read or change
pub struct Context<'a> {
    pub grammar: &'a Grammar,
    pub content: &'a ContentStore,
    pub history: &'a HistoryManager,
    pub username: &'a mut String,
    pub aliases: &'a mut AliasMap,
    pub rng: &'a mut StdRng,
}

/// Resolve aliases, tokenize and dispatch one submitted line
pub fn execute(line: &str, ctx: &mut Context<'_>) -> Dispatch {
    let resolved = alias::resolve(line.trim(), ctx.aliases);
    let tokens = tokenize::tokenize(&resolved);
    dispatch(&tokens, ctx)
}

/// Dispatch an already tokenized line
pub fn dispatch(tokens: &[String], ctx: &mut Context<'_>) -> Dispatch {
    let Some((word, args)) = tokens.split_first() else {
        return Dispatch::default();
    };

    let Some(verb) = ctx.grammar.verb(word) else {
        debug!("Unknown verb '{}'", word);
        return Dispatch::text(format!("Command not found: {}", word));
    };
    debug!("Dispatching {:?} with {} argument(s)", verb, args.len());

    match verb {
        Verb::Primary => primary(args, ctx),
        Verb::UsernameSwitch => username_switch(args, ctx),
        Verb::Alias => define_alias(args, ctx),
        Verb::Unalias => remove_alias(args, ctx),
        Verb::History => Dispatch::text(ctx.history.listing()),
        Verb::Clear => Dispatch::effect(Effect::ClearScreen),
        Verb::Switch => match args.first().map(String::as_str) {
            Some("gui") => Dispatch::effect(Effect::SwitchMode(AppMode::Gui)),
            _ => Dispatch::text("Usage: switch gui"),
        },
        Verb::Exit => Dispatch::effect(Effect::SwitchMode(AppMode::Gui)),
        Verb::Sudo => Dispatch::text(eggs::sudo(args, ctx.grammar.primary_word())),
    }
}

fn primary(args: &[String], ctx: &mut Context<'_>) -> Dispatch {
    let grammar = ctx.grammar;
    let name = grammar.primary_word();

    let Some((sub_word, rest)) = args.split_first() else {
        return Dispatch::text(format!(
            "Usage: {0} <command>\nTry '{0} --help' or '{0} -h' for more information.",
            name
        ));
    };
    let Some(node) = grammar.primary().child(sub_word) else {
        return Dispatch::text(format!("Unknown {} command: {}", name, args.join(" ")));
    };
    let NodeId::Sub(sub) = node.id else {
        return Dispatch::text(format!("Unknown {} command: {}", name, args.join(" ")));
    };

    let content = ctx.content;
    match sub {
        Sub::Help => Dispatch::text(format::help(name)),
        Sub::Sections => sections(node, rest, content, name),
        Sub::Projects => projects(node, rest, content, name),
        Sub::Resume => resume(node, rest, content, name),
        Sub::Contact => Dispatch::text(format::contact(content)),
        Sub::Stack => Dispatch::text(format::stack(content)),
        Sub::Education => Dispatch::text(format::timeline(content, TimelineKind::Education)),
        Sub::Experience => Dispatch::text(format::timeline(content, TimelineKind::Experience)),
        Sub::Timeline => Dispatch::text(format!(
            "The timeline has been split into 'education' and 'experience'.\nTry:\n  {0} sections education\n  {0} sections experience",
            name
        )),
        Sub::Dev => match rest.first().and_then(|w| node.child(w)).map(|n| n.id) {
            Some(NodeId::DevContact) => Dispatch::effect(Effect::StartWizard),
            _ => Dispatch::text(format!("Unknown dev command. Try: {} dev contact", name)),
        },
        Sub::Coffee => Dispatch::text(eggs::coffee()),
        Sub::Konami => Dispatch::text(eggs::konami(name)),
        Sub::Matrix => Dispatch::text(eggs::matrix()),
        Sub::Fortune => Dispatch::text(eggs::fortune(&mut *ctx.rng)),
        Sub::Roll => Dispatch::text(eggs::roll(content, &mut *ctx.rng)),
        Sub::Rick => Dispatch::text(eggs::rick()),
        Sub::Zen => Dispatch::text(eggs::zen()),
        Sub::Haiku => Dispatch::text(eggs::haiku(&mut *ctx.rng)),
        Sub::Ping => Dispatch::text(eggs::ping(&mut *ctx.rng)),
    }
}

fn sections(node: &Node, rest: &[String], content: &ContentStore, name: &str) -> Dispatch {
    let Some(arg) = rest.first() else {
        return Dispatch::text(format::sections_usage(name));
    };

    let text = match node.child_ignore_case(arg).map(|n| n.id) {
        Some(NodeId::SectionsList) => format::sections_list(name),
        Some(NodeId::Section(section)) => match section {
            Section::About => format::about(content),
            Section::Education => format::timeline(content, TimelineKind::Education),
            Section::Experience => format::timeline(content, TimelineKind::Experience),
            Section::Certifications => format::certifications(content),
            Section::Stack => format::stack(content),
            Section::Projects => format::projects_section(content, name),
            Section::Resume => format::resume_section(content, name),
            Section::Contact => format::contact_section(content),
        },
        _ => format!("Unknown section: {}\nTry: {} sections ls", arg, name),
    };
    Dispatch::text(text)
}

fn projects(node: &Node, rest: &[String], content: &ContentStore, name: &str) -> Dispatch {
    let Some(first) = rest.first() else {
        return Dispatch::text(format::project_list(content));
    };

    match node.child(first).map(|n| n.id) {
        Some(NodeId::ProjectsList) => Dispatch::text(format::project_list(content)),
        Some(NodeId::ProjectsOpen) => {
            let project = rest
                .get(1)
                .and_then(|arg| arg.parse::<usize>().ok())
                .and_then(|index| content.project_at(index));
            let Some(project) = project else {
                return Dispatch::text(format!("Usage: {} projects open <index>", name));
            };
            match project.link() {
                Some(url) => Dispatch::text(format!("Opening {} ...", url))
                    .with_effect(Effect::OpenUrl(url.to_string())),
                None => Dispatch::text("No link available for this project."),
            }
        }
        _ => {
            let wanted = tokenize::strip_quotes(&rest.join(" ")).trim().to_string();
            match content.project_by_name(&wanted) {
                Some(project) => Dispatch::text(format::project_details(project)),
                None => Dispatch::text(format!("Project not found: {}", wanted)),
            }
        }
    }
}

fn resume(node: &Node, rest: &[String], content: &ContentStore, name: &str) -> Dispatch {
    let requested = match rest {
        [flag, lang, ..] if node.child(flag).map(|n| n.id) == Some(NodeId::ResumeDownload) => {
            content.resume(lang)
        }
        _ => None,
    };

    match requested {
        Some(file) => Dispatch::text(format!("Downloading {} ...", file.label)).with_effect(
            Effect::Download {
                path: file.path.clone(),
                file_name: file.file_name().to_string(),
            },
        ),
        None => Dispatch::text(format!(
            "Usage: {} resume -d {}",
            name,
            content.resume_languages().join("|")
        )),
    }
}

fn username_switch(args: &[String], ctx: &mut Context<'_>) -> Dispatch {
    let name = tokenize::strip_quotes(&args.join(" ")).trim().to_string();
    if name.is_empty() {
        return Dispatch::text("Usage: username-switch \"<new-name>\"");
    }

    *ctx.username = name;
    Dispatch::text(format!("Username set to {}", ctx.username)).with_effect(Effect::PreferencesChanged)
}

fn define_alias(args: &[String], ctx: &mut Context<'_>) -> Dispatch {
    if args.is_empty() {
        if ctx.aliases.is_empty() {
            return Dispatch::text("No aliases defined.");
        }
        let listing = ctx
            .aliases
            .iter()
            .map(|(short, command)| format!("{}='{}'", short, command))
            .collect::<Vec<_>>()
            .join("\n");
        return Dispatch::text(listing);
    }

    match alias::parse_definition(&args.join(" ")) {
        Some((short, command)) => {
            let text = format!("Alias added: {}='{}'", short, command);
            ctx.aliases.insert(short, command);
            Dispatch::text(text).with_effect(Effect::PreferencesChanged)
        }
        None => Dispatch::text("Usage: alias <short>='<command>' or alias <short>=<command>"),
    }
}

fn remove_alias(args: &[String], ctx: &mut Context<'_>) -> Dispatch {
    let Some(short) = args.first() else {
        return Dispatch::text("Usage: unalias <alias>");
    };

    if ctx.aliases.remove(short).is_some() {
        Dispatch::text(format!("Alias removed: {}", short)).with_effect(Effect::PreferencesChanged)
    } else {
        Dispatch::text(format!("Alias not found: {}", short))
    }
}

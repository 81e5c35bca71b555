//! Interpreter Session
//!
//! A [`Session`] is one running instance of the command-line interpreter. It
//! owns everything a submitted line can touch: output lines, history, the
//! contact dialog, username and aliases. All work happens synchronously
//! inside [`Session::submit`]; effects it cannot perform itself (opening a
//! link, fetching a file, switching surface, sending a message) are returned
//! to the host.

pub mod input;
pub mod output;

pub use input::{InputEditor, InputResult, Key};
pub use output::{echo_line, render, Line, LineBuffer, Link, Segment};

use crate::commands::alias::AliasMap;
use crate::commands::grammar::Grammar;
use crate::commands::{self, Context, Effect};
use crate::completion::{CompletionProvider, CompletionResult};
use crate::config::Config;
use crate::content::ContentStore;
use crate::error::Result;
use crate::history::HistoryManager;
use crate::outbound::SendOutcome;
use crate::preferences::{
    default_preferences_path, JsonPreferenceStore, MemoryPreferenceStore, PreferenceStore,
    Preferences,
};
use crate::state::{AppMode, SessionState};
use crate::wizard::{Wizard, WizardStep, BUSY_MESSAGE, CANCEL_HINT, CANCEL_MARKER, SENDING_MESSAGE};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// One interpreter instance
pub struct Session {
    config: Config,
    grammar: Grammar,
    content: ContentStore,
    output: LineBuffer,
    history: HistoryManager,
    wizard: Wizard,
    username: String,
    aliases: AliasMap,
    rng: StdRng,
    preferences: Box<dyn PreferenceStore>,
    mode: AppMode,
}

impl Session {
    /// Build a session, restoring username and aliases from `preferences`
    pub fn new(config: Config, content: ContentStore, preferences: Box<dyn PreferenceStore>) -> Self {
        let identity = config.session.identity.clone();
        let saved = match preferences.load(&identity) {
            Ok(saved) => saved.unwrap_or_default(),
            Err(e) => {
                warn!("Could not restore preferences for '{}': {}", identity, e);
                Preferences::default()
            }
        };
        let username = saved
            .username
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| config.prompt.default_username.clone());

        let mut session = Self {
            grammar: Grammar::new(&config.prompt.primary_command),
            history: HistoryManager::new(config.session.history_limit),
            wizard: Wizard::new(config.wizard.clone()),
            output: LineBuffer::new(),
            rng: StdRng::from_entropy(),
            aliases: saved.alias_map,
            username,
            content,
            preferences,
            mode: AppMode::Cli,
            config,
        };
        info!(
            "Session '{}' started for {} ({} alias(es))",
            identity,
            session.username,
            session.aliases.len()
        );

        if session.config.session.show_boot_message {
            let boot = format!(
                "Welcome to the {} CLI!\nType '{} --help' or '-h' to see available commands.\nPress Tab to toggle command suggestions.",
                session.config.prompt.host,
                session.grammar.primary_word()
            );
            session.output.push(&boot);
        }
        session
    }

    /// Build a session from configuration, loading content and picking the store
    ///
    /// With `persist` unset preferences live only as long as the process.
    pub fn from_config(config: Config, persist: bool) -> Result<Self> {
        config.validate()?;
        let content = match &config.content.path {
            Some(path) => ContentStore::load(path)?,
            None => ContentStore::builtin()?,
        };

        let store: Box<dyn PreferenceStore> = match config
            .preferences
            .path
            .clone()
            .or_else(default_preferences_path)
        {
            Some(path) if persist => Box::new(JsonPreferenceStore::new(path)),
            _ => Box::new(MemoryPreferenceStore::new()),
        };

        Ok(Self::new(config, content, store))
    }

    /// Replace the random source, e.g. with a seeded one
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Normal-mode prompt: `<username>@<host>:~$ `
    pub fn prompt(&self) -> String {
        format!("{}@{}:~$ ", self.username, self.config.prompt.host)
    }

    /// Label shown before the input line in the current mode
    pub fn prompt_label(&self) -> String {
        if self.wizard.is_active() {
            self.wizard.label().to_string()
        } else {
            self.prompt()
        }
    }

    pub fn state(&self) -> SessionState {
        SessionState::new(self.wizard.state(), &self.prompt())
    }

    /// Handle one submitted line; returns effects for the host to perform
    pub fn submit(&mut self, line: &str) -> Vec<Effect> {
        if self.wizard.is_active() {
            return self.submit_to_wizard(line);
        }

        let value = line.trim();
        if value.is_empty() {
            return Vec::new();
        }

        let echo = echo_line(&self.prompt(), value);
        self.output.push(&echo);

        let dispatch = {
            let mut ctx = Context {
                grammar: &self.grammar,
                content: &self.content,
                history: &self.history,
                username: &mut self.username,
                aliases: &mut self.aliases,
                rng: &mut self.rng,
            };
            commands::execute(value, &mut ctx)
        };
        self.history.record(value);

        if let Some(text) = &dispatch.output {
            self.output.push(text);
        }

        let mut external = Vec::new();
        for effect in dispatch.effects {
            match effect {
                Effect::ClearScreen => self.output.clear(),
                Effect::StartWizard => self.start_wizard(),
                Effect::PreferencesChanged => self.persist_preferences(),
                Effect::SwitchMode(mode) => {
                    self.mode = mode;
                    external.push(effect);
                }
                other => external.push(other),
            }
        }
        external
    }

    fn submit_to_wizard(&mut self, line: &str) -> Vec<Effect> {
        let value = line.trim().to_string();
        match self.wizard.submit(&value) {
            WizardStep::Reprompt { error } => {
                self.output.push(&error);
            }
            WizardStep::Advanced { echo } => {
                self.output.push(&echo);
                self.history.record(value);
            }
            WizardStep::ReadyToSend { echo, message } => {
                self.output.push(&echo);
                self.output.push(SENDING_MESSAGE);
                self.history.record(value);
                return vec![Effect::SendMessage(message)];
            }
            WizardStep::Busy => {
                self.output.push(BUSY_MESSAGE);
            }
            WizardStep::Inactive => {}
        }
        Vec::new()
    }

    fn start_wizard(&mut self) {
        self.wizard.start();
        self.output.push(CANCEL_HINT);
    }

    /// Abort the contact dialog if it is collecting input
    pub fn cancel_wizard(&mut self) -> bool {
        if !self.wizard.cancel() {
            return false;
        }
        self.output.push(CANCEL_MARKER);
        true
    }

    /// Handle an interrupt key (Ctrl+C); returns true when the host should exit
    ///
    /// While collecting input the dialog is cancelled. While a send is in
    /// flight the dialog cannot be left, so the busy notice is printed instead.
    pub fn interrupt(&mut self) -> bool {
        if !self.wizard.is_active() {
            return true;
        }
        if !self.cancel_wizard() {
            self.output.push(BUSY_MESSAGE);
        }
        false
    }

    /// Report the outcome of a send started by [`Effect::SendMessage`]
    pub fn complete_send(&mut self, outcome: SendOutcome) {
        for line in self.wizard.finish(&outcome) {
            self.output.push(&line);
        }
    }

    /// Suggestions for the input line; none while the dialog is running
    pub fn suggest(&self, input: &str, caret: usize) -> CompletionResult {
        if self.wizard.is_active() {
            return CompletionResult::default();
        }
        CompletionProvider::new(&self.grammar, &self.content).suggest(input, caret)
    }

    pub fn recall_older(&mut self) -> String {
        self.history.recall_older()
    }

    pub fn recall_newer(&mut self) -> String {
        self.history.recall_newer()
    }

    fn persist_preferences(&self) {
        let preferences = Preferences {
            username: Some(self.username.clone()),
            alias_map: self.aliases.clone(),
        };
        if let Err(e) = self
            .preferences
            .save(&self.config.session.identity, &preferences)
        {
            warn!("Failed to save preferences: {}", e);
        }
    }

    /// Print text into the output as if a command had produced it
    pub fn print(&mut self, text: &str) {
        self.output.push(text);
    }

    pub fn output(&self) -> &LineBuffer {
        &self.output
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn aliases(&self) -> &AliasMap {
        &self.aliases
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    pub fn content(&self) -> &ContentStore {
        &self.content
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

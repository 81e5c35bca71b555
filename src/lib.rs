//! Termfolio - an embedded portfolio command-line interpreter
//!
//! This library implements the text interpreter behind a portfolio site's
//! terminal view: it tokenizes and dispatches commands against static
//! portfolio content, offers context-sensitive suggestions, keeps a command
//! history and runs a guided contact dialog that hands the finished message
//! to a pluggable sender.
//!
//! ## Module Organization
//!
//! ### Interpreter
//!
//! - [`terminal`] - The [`Session`], the input line editor and output rendering
//! - [`commands`] - Tokenizer, alias resolver, grammar and dispatcher
//! - [`completion`] - Suggestion engine over the command grammar
//! - [`history`] - Command history with recall
//! - [`wizard`] - Contact dialog state machine
//!
//! ### Collaborators
//!
//! - [`content`] - Static portfolio content
//! - [`outbound`] - Message senders (webhook, outbox file)
//! - [`preferences`] - Username and alias persistence
//! - [`config`] - Configuration loading and validation
//! - [`mod@error`] - Error types and Result aliases
//!
//! ### Utilities
//!
//! - [`ansi`] - ANSI styling of rendered lines
//! - [`state`] - Application mode and session snapshot
//!
//! ## Quick Start
//!
//! ```no_run
//! use termfolio::{init, Session};
//!
//! # fn main() -> termfolio::Result<()> {
//! let config = init()?;
//! let mut session = Session::from_config(config, true)?;
//! session.submit("portfolio projects ls");
//! for line in session.output().lines() {
//!     println!("{}", line.text);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! Everything a submitted line does happens synchronously inside
//! [`Session::submit`]. Work the session cannot do itself (opening a link,
//! downloading a file, leaving the CLI, sending a message) comes back as an
//! [`Effect`] for the host. A send is completed later through
//! [`Session::complete_send`], so the host is free to run it on any executor.

#![allow(unexpected_cfgs)]

#[macro_use]
extern crate tracing;

pub mod ansi;
pub mod commands;
pub mod completion;
pub mod config;
pub mod content;
pub mod error;
pub mod history;
pub mod outbound;
pub mod preferences;
pub mod state;
pub mod terminal;
pub mod wizard;

// Re-exports for core functionality
pub use commands::{Dispatch, Effect};
pub use config::Config;
pub use error::{Error, Result};
pub use state::{AppMode, SessionState};
pub use terminal::{InputEditor, InputResult, Key, Session};

// Convenience re-exports for common types
pub use completion::{CompletionItem, CompletionProvider, CompletionResult};
pub use config::loader::ConfigLoader;
pub use content::ContentStore;
pub use history::HistoryManager;
pub use outbound::{deliver, sender_from_config, MessageSender, OutboundMessage, SendOutcome};
pub use preferences::{JsonPreferenceStore, MemoryPreferenceStore, PreferenceStore, Preferences};
pub use wizard::{Wizard, WizardState};

/// The current version of Termfolio from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The application name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// The application description from Cargo.toml
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Load configuration from the default locations
///
/// Falls back to the built-in defaults when no file is found or the file
/// found cannot be loaded.
pub fn init() -> Result<Config> {
    info!("Initializing {} v{}", NAME, VERSION);

    let config = match ConfigLoader::load() {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to load configuration: {}. Using defaults", e);
            Config::default()
        }
    };
    config.validate()?;
    Ok(config)
}

/// Load configuration from an explicit file
///
/// Unlike [`init`], a missing or invalid file is an error.
pub fn init_with_config(config_path: &std::path::Path) -> Result<Config> {
    info!(
        "Initializing {} v{} with config: {}",
        NAME,
        VERSION,
        config_path.display()
    );

    ConfigLoader::load_from_file(config_path).map_err(|e| {
        error!(
            "Failed to load configuration from {}: {}",
            config_path.display(),
            e
        );
        e
    })
}

/// User-facing explanation of a startup failure
pub fn handle_startup_error(error: &Error) -> String {
    match error {
        Error::ConfigLoadFailed { path, reason } => {
            format!(
                "Configuration Error: Failed to load config from '{}': {}\n\nTry:\n• Check the file path\n• Run without --config to use defaults",
                path.display(),
                reason
            )
        }
        Error::ConfigParseFailed { format, reason } => {
            format!(
                "Configuration Error: Failed to parse {} config: {}\n\nTry:\n• Check configuration file syntax",
                format, reason
            )
        }
        Error::ConfigValidationFailed { field, reason } => {
            format!(
                "Configuration Error: Validation failed for '{}': {}",
                field, reason
            )
        }
        Error::ContentLoadFailed { path, reason } => {
            format!(
                "Content Error: Failed to load portfolio content from '{}': {}\n\nTry:\n• Check the TOML syntax\n• Run without --content to use the built-in sample",
                path.display(),
                reason
            )
        }
        Error::Io(err) => {
            format!("I/O Error: {}\n\nTry:\n• Check file permissions", err)
        }
        _ => {
            format!(
                "Unexpected Error: {}\n\nPlease report this issue with debug logs enabled",
                error
            )
        }
    }
}

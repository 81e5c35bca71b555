//! Configuration management for Termfolio
//!
//! This module holds the configuration structures for the interpreter
//! (prompt, session limits, contact dialog bounds, outbound transport,
//! content and preference locations) together with their validation.
//! File discovery and parsing live in [`loader`].

pub mod loader;

use crate::commands::grammar::GLOBAL_VERBS;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure for Termfolio
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prompt configuration
    pub prompt: PromptConfig,

    /// Session configuration
    pub session: SessionConfig,

    /// Contact dialog limits
    pub wizard: WizardConfig,

    /// Outbound message transport
    pub outbound: OutboundConfig,

    /// Portfolio content source
    pub content: ContentConfig,

    /// Preference store location
    pub preferences: PreferencesConfig,
}

/// Prompt-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Host shown in the prompt (`user@host:~$ `)
    pub host: String,

    /// Username used when none has been persisted
    pub default_username: String,

    /// The distinguished primary command word
    pub primary_command: String,
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            host: "portfolio".to_string(),
            default_username: "guest".to_string(),
            primary_command: "portfolio".to_string(),
        }
    }
}

/// Session-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Identity under which preferences are persisted
    pub identity: String,

    /// Maximum number of history entries kept in memory
    pub history_limit: usize,

    /// Print the welcome banner when a session starts
    pub show_boot_message: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            identity: "default".to_string(),
            history_limit: 500,
            show_boot_message: true,
        }
    }
}

/// Bounds applied by the contact dialog validators
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    /// Maximum characters accepted for the name field
    pub max_name_len: usize,

    /// Maximum characters accepted for the email field
    pub max_email_len: usize,

    /// Maximum characters accepted for the message field
    pub max_message_len: usize,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            max_name_len: 100,
            max_email_len: 254,
            max_message_len: 4000,
        }
    }
}

/// Outbound message transport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutboundConfig {
    /// Webhook receiving `{name, email, message}` as JSON
    pub endpoint: Option<String>,

    /// Transport timeout for the webhook request
    pub timeout_secs: u64,

    /// JSON-lines file used when no endpoint is configured
    pub outbox_path: Option<PathBuf>,
}

impl Default for OutboundConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: 15,
            outbox_path: None,
        }
    }
}

/// Portfolio content source
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// TOML content file; the built-in sample is used when unset
    pub path: Option<PathBuf>,
}

/// Preference store location
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesConfig {
    /// JSON preference file; defaults to the platform data directory
    pub path: Option<PathBuf>,
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid history limit: {0} (must be between 1 and 100000)")]
    InvalidHistoryLimit(usize),

    #[error("Invalid {field} length limit: {value} (must be at least {min})")]
    InvalidLengthLimit {
        field: &'static str,
        value: usize,
        min: usize,
    },

    #[error("Invalid outbound endpoint: {0} (must start with http:// or https://)")]
    InvalidEndpoint(String),

    #[error("Invalid outbound timeout: {0}s (must be between 1 and 300)")]
    InvalidTimeout(u64),

    #[error("Empty value for {0}")]
    EmptyValue(&'static str),

    #[error("Invalid primary command: {0} (must be a single word without quotes)")]
    InvalidPrimaryCommand(String),

    #[error("Primary command '{0}' is already a built-in command")]
    ReservedPrimaryCommand(String),
}

impl ConfigError {
    /// Name of the configuration field the error refers to
    pub fn field(&self) -> &str {
        match self {
            ConfigError::InvalidHistoryLimit(_) => "session.history_limit",
            ConfigError::InvalidLengthLimit { field, .. } => field,
            ConfigError::InvalidEndpoint(_) => "outbound.endpoint",
            ConfigError::InvalidTimeout(_) => "outbound.timeout_secs",
            ConfigError::EmptyValue(field) => field,
            ConfigError::InvalidPrimaryCommand(_) | ConfigError::ReservedPrimaryCommand(_) => {
                "prompt.primary_command"
            }
        }
    }
}

impl Config {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.prompt.validate()?;
        self.session.validate()?;
        self.wizard.validate()?;
        self.outbound.validate()?;
        Ok(())
    }
}

impl PromptConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::EmptyValue("prompt.host"));
        }
        if self.default_username.trim().is_empty() {
            return Err(ConfigError::EmptyValue("prompt.default_username"));
        }
        let primary = self.primary_command.trim();
        if primary.is_empty()
            || primary.contains(|c: char| c.is_whitespace() || c == '"' || c == '\'')
        {
            return Err(ConfigError::InvalidPrimaryCommand(
                self.primary_command.clone(),
            ));
        }
        if GLOBAL_VERBS.contains(&primary) {
            return Err(ConfigError::ReservedPrimaryCommand(primary.to_string()));
        }
        Ok(())
    }
}

impl SessionConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.history_limit == 0 || self.history_limit > 100_000 {
            return Err(ConfigError::InvalidHistoryLimit(self.history_limit));
        }
        if self.identity.trim().is_empty() {
            return Err(ConfigError::EmptyValue("session.identity"));
        }
        Ok(())
    }
}

impl WizardConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value, min) in [
            ("wizard.max_name_len", self.max_name_len, 1),
            // local@domain.tld needs at least five characters
            ("wizard.max_email_len", self.max_email_len, 5),
            ("wizard.max_message_len", self.max_message_len, 1),
        ] {
            if value < min {
                return Err(ConfigError::InvalidLengthLimit { field, value, min });
            }
        }
        Ok(())
    }
}

impl OutboundConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(endpoint) = &self.endpoint {
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                return Err(ConfigError::InvalidEndpoint(endpoint.clone()));
            }
        }
        if self.timeout_secs == 0 || self.timeout_secs > 300 {
            return Err(ConfigError::InvalidTimeout(self.timeout_secs));
        }
        Ok(())
    }
}

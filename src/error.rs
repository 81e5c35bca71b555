//! Error types and Result aliases for Termfolio

use std::fmt;
use std::path::PathBuf;

/// Result type alias for Termfolio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for Termfolio
///
/// Nothing in here ever reaches the person typing at the prompt: the
/// interpreter turns every failure into an output line or a log event.
#[derive(Debug)]
pub enum Error {
    // === Configuration errors ===
    /// Failed to load configuration file
    ConfigLoadFailed {
        path: PathBuf,
        reason: String,
    },

    /// Failed to parse configuration
    ConfigParseFailed {
        format: String,
        reason: String,
    },

    /// Configuration file not found
    ConfigNotFound,

    /// Configuration validation failed
    ConfigValidationFailed {
        field: String,
        reason: String,
    },

    // === Content errors ===
    /// Failed to load the portfolio content file
    ContentLoadFailed {
        path: PathBuf,
        reason: String,
    },

    // === Preference errors ===
    /// Failed to read persisted preferences
    PreferenceLoadFailed {
        path: PathBuf,
        reason: String,
    },

    /// Failed to write persisted preferences
    PreferenceSaveFailed {
        path: PathBuf,
        reason: String,
    },

    // === Outbound message errors ===
    /// Delivery of an outbound message failed
    OutboundFailed {
        reason: String,
    },

    /// No outbound transport is configured
    OutboundNotConfigured,

    // === I/O and serialization errors ===
    /// I/O errors
    Io(std::io::Error),

    /// Serialization errors
    Serde(serde_json::Error),

    /// TOML parsing errors
    Toml(toml::de::Error),

    /// HTTP transport errors
    Http(reqwest::Error),

    // === Generic fallback (use sparingly) ===
    /// Generic errors
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Configuration errors
            Error::ConfigLoadFailed { path, reason } => {
                write!(f, "Failed to load config from '{}': {}", path.display(), reason)
            }
            Error::ConfigParseFailed { format, reason } => {
                write!(f, "Failed to parse {} config: {}", format, reason)
            }
            Error::ConfigNotFound => {
                write!(f, "Configuration file not found")
            }
            Error::ConfigValidationFailed { field, reason } => {
                write!(f, "Configuration validation failed for '{}': {}", field, reason)
            }

            // Content errors
            Error::ContentLoadFailed { path, reason } => {
                write!(f, "Failed to load content from '{}': {}", path.display(), reason)
            }

            // Preference errors
            Error::PreferenceLoadFailed { path, reason } => {
                write!(f, "Failed to load preferences from '{}': {}", path.display(), reason)
            }
            Error::PreferenceSaveFailed { path, reason } => {
                write!(f, "Failed to save preferences to '{}': {}", path.display(), reason)
            }

            // Outbound errors
            Error::OutboundFailed { reason } => {
                write!(f, "Failed to deliver message: {}", reason)
            }
            Error::OutboundNotConfigured => {
                write!(f, "No outbound message transport configured")
            }

            // I/O and serialization errors
            Error::Io(err) => write!(f, "I/O error: {}", err),
            Error::Serde(err) => write!(f, "Serialization error: {}", err),
            Error::Toml(err) => write!(f, "TOML parsing error: {}", err),
            Error::Http(err) => write!(f, "HTTP error: {}", err),

            // Generic fallback
            Error::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serde(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Toml(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<crate::config::ConfigError> for Error {
    fn from(err: crate::config::ConfigError) -> Self {
        Error::ConfigValidationFailed {
            field: err.field().to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<String> for Error {
    fn from(err: String) -> Self {
        Error::Other(err)
    }
}

impl From<&str> for Error {
    fn from(err: &str) -> Self {
        Error::Other(err.to_string())
    }
}

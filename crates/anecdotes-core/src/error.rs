//! Error types for the anecdotes core library.

use thiserror::Error;

use crate::anecdote::AnecdoteId;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for Routed Anecdotes.
#[derive(Error, Debug)]
pub enum CoreError {
    /// No anecdote carries the requested identifier.
    #[error("No anecdote with id {id}")]
    NotFound { id: AnecdoteId },

    /// Seed data repeats an identifier.
    #[error("Duplicate anecdote id {id} in seed data")]
    DuplicateId { id: AnecdoteId },

    /// Every identifier has been handed out.
    #[error("No anecdote identifiers left after {last}")]
    IdsExhausted { last: AnecdoteId },

    /// Configuration loading or parsing error.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// File system I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Generic configuration crate error.
    #[cfg(feature = "env")]
    #[error("Config crate error: {0}")]
    ConfigCrate(#[from] config::ConfigError),
}

impl CoreError {
    /// Create a new not-found error.
    pub fn not_found(id: AnecdoteId) -> Self {
        Self::NotFound { id }
    }

    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Whether this error is a failed lookup.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

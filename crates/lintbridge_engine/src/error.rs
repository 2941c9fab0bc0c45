//! Engine error types.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while running the rule engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine could not be constructed.
    #[error("Failed to initialize engine: {0}")]
    Init(String),

    /// A source file could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A rule panicked while linting.
    #[error("Rule panicked: {0}")]
    RulePanicked(String),

    /// No formatter is registered under the requested name.
    #[error("Unknown formatter: {0}")]
    UnknownFormatter(String),

    /// The formatter failed to serialize failures.
    #[error("Format error: {0}")]
    Format(#[from] serde_json::Error),
}

impl EngineError {
    /// Creates an initialization error.
    pub fn init(message: impl Into<String>) -> Self {
        Self::Init(message.into())
    }

    /// Creates an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

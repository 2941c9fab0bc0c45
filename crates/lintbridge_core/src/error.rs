//! Linter error types.

use lintbridge_engine::EngineError;
use thiserror::Error;

/// Errors that can abort a single lint invocation.
#[derive(Debug, Error)]
pub enum LintError {
    /// Host settings could not be loaded.
    #[error("Settings error: {0}")]
    Settings(String),

    /// A rule argument map has a key that is not a string.
    #[error("Invalid argument kind: {0}")]
    InvalidArgumentKind(String),

    /// The settings tree cannot be expressed in the engine's format.
    #[error("failed to encode configuration: {0}")]
    ConfigEncoding(String),

    /// The encoded settings do not match the engine's schema.
    #[error("failed to decode configuration: {0}")]
    ConfigDecoding(String),

    /// A configured rule has no implementation in the catalogue.
    #[error("cannot find rule: {0}")]
    RuleResolution(String),

    /// The engine failed.
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// The formatting stage failed.
    #[error("Format error: {0}")]
    Format(String),

    /// The formatted failures could not be parsed back.
    #[error("failed to decode results: {0}")]
    ResultDecoding(String),
}

impl LintError {
    /// Creates a settings error.
    pub fn settings(message: impl Into<String>) -> Self {
        Self::Settings(message.into())
    }

    /// Creates an invalid argument kind error.
    pub fn invalid_argument_kind(message: impl Into<String>) -> Self {
        Self::InvalidArgumentKind(message.into())
    }

    /// Creates a configuration encoding error.
    pub fn config_encoding(message: impl Into<String>) -> Self {
        Self::ConfigEncoding(message.into())
    }

    /// Creates a configuration decoding error.
    pub fn config_decoding(message: impl Into<String>) -> Self {
        Self::ConfigDecoding(message.into())
    }

    /// Creates a format error.
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }
}

//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Time string is not `HH:MM[:SS]`
    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(String),

    /// Preference store read/write failure
    #[error("Preference store error: {0}")]
    PreferenceError(String),

    /// Configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// The event loop has stopped (page unloaded)
    #[error("Page event loop closed")]
    EventLoopClosed,
}

impl CoreError {
    /// Whether it is expected behavior (bad user input etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidTimeFormat(_) | Self::EventLoopClosed => true,
            Self::PreferenceError(_) | Self::ConfigError(_) | Self::SerializationError(_) => false,
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::SerializationError(e.to_string())
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

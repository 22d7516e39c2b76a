//! Core error types for focusgate-core.
//!
//! Every rejected action leaves the controller untouched; none of these
//! errors is fatal to the process.

use std::path::PathBuf;
use thiserror::Error;

use crate::session::{SessionAction, SessionPhase};

/// Core error type for focusgate-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Config file is not valid TOML for [`crate::Config`]
    #[error("Failed to parse config file: {0}")]
    TomlDecode(#[from] toml::de::Error),

    /// Config could not be rendered as TOML
    #[error("Failed to serialize config: {0}")]
    TomlEncode(#[from] toml::ser::Error),
}

/// Reasons the focus session controller rejects an action.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// `start` was called with a zero-length session.
    #[error("Invalid duration: a focus session must last at least one second")]
    InvalidDuration,

    /// The action is not defined for the current phase (or its guard failed).
    #[error("Cannot {action} while session is {phase}")]
    InvalidTransition {
        phase: SessionPhase,
        action: SessionAction,
    },

    /// The device capability provider refused the request.
    #[error("Device capability unavailable: {capability}")]
    CapabilityUnavailable { capability: String },
}

impl SessionError {
    pub(crate) fn invalid(phase: SessionPhase, action: SessionAction) -> Self {
        SessionError::InvalidTransition { phase, action }
    }

    pub(crate) fn unavailable(capability: impl Into<String>) -> Self {
        SessionError::CapabilityUnavailable {
            capability: capability.into(),
        }
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not name a known setting
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

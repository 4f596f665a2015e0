//! Error types for Yarnbox
//!
//! All modules use `YarnboxResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Yarnbox operations
pub type YarnboxResult<T> = Result<T, YarnboxError>;

/// All errors that can occur in Yarnbox
#[derive(Error, Debug)]
pub enum YarnboxError {
    // Engine preflight errors
    #[error("Container engine not found: {engine}")]
    EngineMissing { engine: &'static str },

    #[error("Permission denied talking to {engine}")]
    PermissionDenied { engine: &'static str },

    #[error("Container engine {engine} is not usable: {reason}")]
    EngineUnavailable {
        engine: &'static str,
        reason: String,
    },

    // Invocation errors
    #[error("Container invocation failed: {command}, exit code: {code}")]
    ChildInvocationFailed { command: String, code: i32 },

    #[error("Failed to remove volume {name}: {reason}")]
    VolumeRemove { name: String, reason: String },

    // Project context errors
    #[error("Invalid module override {path}: {reason}")]
    InvalidOverride { path: PathBuf, reason: String },

    #[error("Invalid environment file {path}: {reason}")]
    EnvFileInvalid { path: PathBuf, reason: String },

    #[error("Failed to persist project identifier to {path}: {source}")]
    IdentityPersist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Process errors
    #[error("Command failed: {command}")]
    CommandFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

impl YarnboxError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a command failed error
    pub fn command_failed(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::CommandFailed {
            command: command.into(),
            source,
        }
    }

    /// Process exit code for this error. A failed container invocation
    /// propagates the child's own exit code; everything else is 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::ChildInvocationFailed { code, .. } => u8::try_from(*code)
                .ok()
                .filter(|c| *c != 0)
                .unwrap_or(1),
            _ => 1,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::EngineMissing { engine } => match *engine {
                "podman" => Some("Install Podman: https://podman.io/docs/installation"),
                _ => Some("Install Docker: https://docs.docker.com/get-docker/"),
            },
            Self::PermissionDenied { .. } => {
                Some("Grant your user access to the engine (unix group membership or rootless mode), then log in again")
            }
            Self::EngineUnavailable { .. } => Some("Is the engine daemon running?"),
            _ => None,
        }
    }
}

//! Container engine abstraction
//!
//! Provides a trait for the engine operations the runner needs: a
//! usability preflight, blocking foreground runs, and volume removal.

use crate::engine::spec::RunSpec;
use crate::error::YarnboxResult;
use async_trait::async_trait;
use clap::ValueEnum;
use std::fmt;

/// Supported container engines
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EngineKind {
    /// Docker CLI
    Docker,
    /// Podman CLI (rootless or rootful)
    Podman,
}

impl EngineKind {
    /// Executable name for this engine
    pub fn binary(&self) -> &'static str {
        match self {
            Self::Docker => "docker",
            Self::Podman => "podman",
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary())
    }
}

/// Abstract container engine interface
#[async_trait]
pub trait ContainerEngine: Send + Sync {
    /// Check that the engine is installed and usable by the invoking user
    async fn preflight(&self) -> YarnboxResult<()>;

    /// Run a container in the foreground with inherited stdio, blocking
    /// until it exits. Returns the container's exit code.
    async fn run(&self, spec: &RunSpec) -> YarnboxResult<i32>;

    /// Force-remove a named volume. Removing a missing volume is not an
    /// error.
    async fn volume_remove(&self, name: &str) -> YarnboxResult<()>;

    /// Human-readable engine name for display
    fn engine_name(&self) -> &'static str;
}

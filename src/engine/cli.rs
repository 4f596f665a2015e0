//! CLI-backed container engine
//!
//! Implements the ContainerEngine trait by shelling out to the docker or
//! podman executable. Run invocations inherit stdio so task output streams
//! straight to the user.

use crate::engine::runtime::{ContainerEngine, EngineKind};
use crate::engine::spec::RunSpec;
use crate::error::{YarnboxError, YarnboxResult};
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Container engine driven through its command-line interface
pub struct CliEngine {
    kind: EngineKind,
}

impl CliEngine {
    /// Create an engine for the given kind
    pub fn new(kind: EngineKind) -> Self {
        Self { kind }
    }

    fn binary(&self) -> &'static str {
        self.kind.binary()
    }

    /// Execute an engine command and capture its output
    async fn exec(&self, args: &[&str]) -> YarnboxResult<std::process::Output> {
        debug!("Executing: {} {:?}", self.binary(), args);

        Command::new(self.binary())
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| YarnboxError::command_failed(format!("{} {:?}", self.binary(), args), e))
    }

    /// Execute an engine command with inherited stdio, returning the exit code
    async fn exec_foreground(&self, args: &[String]) -> YarnboxResult<i32> {
        debug!("Executing in foreground: {} {:?}", self.binary(), args);

        let status = Command::new(self.binary())
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| YarnboxError::command_failed(format!("{} {:?}", self.binary(), args), e))?;

        Ok(status.code().unwrap_or(-1))
    }
}

/// Create the engine for the selected kind
pub fn create_engine(kind: EngineKind) -> Box<dyn ContainerEngine> {
    Box::new(CliEngine::new(kind))
}

#[async_trait]
impl ContainerEngine for CliEngine {
    async fn preflight(&self) -> YarnboxResult<()> {
        // Binary present?
        let version = Command::new(self.binary())
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await;

        match version {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(YarnboxError::EngineMissing {
                    engine: self.binary(),
                });
            }
            Err(e) => {
                return Err(YarnboxError::command_failed(
                    format!("{} --version", self.binary()),
                    e,
                ));
            }
            Ok(_) => {}
        }

        // Usable by this user? Probe the engine directly instead of
        // second-guessing host group conventions.
        let output = self.exec(&["info"]).await?;
        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        if stderr.to_lowercase().contains("permission denied") {
            Err(YarnboxError::PermissionDenied {
                engine: self.binary(),
            })
        } else {
            Err(YarnboxError::EngineUnavailable {
                engine: self.binary(),
                reason: stderr.trim().to_string(),
            })
        }
    }

    async fn run(&self, spec: &RunSpec) -> YarnboxResult<i32> {
        debug!("Running container: {}", spec.command_line());
        self.exec_foreground(&spec.to_args()).await
    }

    async fn volume_remove(&self, name: &str) -> YarnboxResult<()> {
        let output = self.exec(&["volume", "rm", "-f", name]).await?;

        if output.status.success() {
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if stderr.contains("no such volume") {
                Ok(())
            } else {
                Err(YarnboxError::VolumeRemove {
                    name: name.to_string(),
                    reason: stderr.trim().to_string(),
                })
            }
        }
    }

    fn engine_name(&self) -> &'static str {
        match self.kind {
            EngineKind::Docker => "Docker",
            EngineKind::Podman => "Podman",
        }
    }
}

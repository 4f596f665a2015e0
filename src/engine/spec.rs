//! Container run specification
//!
//! Declarative description of a single container invocation. The argv
//! rendering is deterministic so plans can be inspected and tested without
//! touching an engine.

use std::path::PathBuf;

/// A volume mount (named volume or host path on the source side)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mount {
    /// Host path or volume name
    pub source: String,
    /// Absolute path inside the container
    pub target: String,
}

impl Mount {
    /// Create a new mount
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }

    /// Generate the `-v` argument value for the engine
    pub fn to_arg(&self) -> String {
        format!("{}:{}", self.source, self.target)
    }
}

/// Configuration for one container invocation
#[derive(Debug, Clone)]
pub struct RunSpec {
    /// Tool image to run
    pub image: String,
    /// Host project directory, mounted at the identical path in-container
    /// and used as the container working directory
    pub workdir: PathBuf,
    /// Additional mounts, in order, after the workdir mount
    pub mounts: Vec<Mount>,
    /// Environment variables, in order
    pub env: Vec<(String, String)>,
    /// Host uid:gid to run as (never root)
    pub user: Option<(u32, u32)>,
    /// Allocate a pseudo-terminal
    pub tty: bool,
    /// Command argv inside the container
    pub command: Vec<String>,
}

impl RunSpec {
    /// Render the full engine `run` argv for this invocation
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec!["run".to_string(), "-i".to_string()];

        if self.tty {
            args.push("-t".to_string());
        }

        if let Some((uid, gid)) = self.user {
            args.push("--user".to_string());
            args.push(format!("{uid}:{gid}"));
        }

        // Project directory is visible at the same absolute path inside
        // the container, so tool output paths stay valid on the host.
        let workdir = self.workdir.display().to_string();
        args.push("-v".to_string());
        args.push(format!("{workdir}:{workdir}"));
        args.push("-w".to_string());
        args.push(workdir);

        for mount in &self.mounts {
            args.push("-v".to_string());
            args.push(mount.to_arg());
        }

        for (key, value) in &self.env {
            args.push("-e".to_string());
            args.push(format!("{key}={value}"));
        }

        args.push(self.image.clone());
        args.extend(self.command.iter().cloned());
        args
    }

    /// Human-readable command line for logs and error messages
    pub fn command_line(&self) -> String {
        self.command.join(" ")
    }
}

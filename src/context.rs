//! Immutable per-invocation project context
//!
//! Everything the subcommands need - working directory, project identity,
//! environment overlay, module overrides, user mapping - is resolved once
//! at startup and threaded through read-only.

use crate::engine::{Mount, RunSpec};
use crate::envfile;
use crate::error::{YarnboxError, YarnboxResult};
use crate::identity;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Dependency directory written by the install step
pub const NODE_MODULES_DIR: &str = "node_modules";

/// Default tool image implementing the install/build/watch/test/clean tasks
pub const DEFAULT_IMAGE: &str = "docker.io/library/node:20-bookworm";

/// In-container path the cache volume is mounted at
pub const CACHE_MOUNT_PATH: &str = "/yarn-cache";

/// Resolved context for one runner invocation
#[derive(Debug, Clone)]
pub struct ProjectContext {
    /// Canonical working directory
    pub project_dir: PathBuf,
    /// Persisted project identifier
    pub project_id: String,
    /// Tool image to run tasks in
    pub image: String,
    /// Environment overlay from the project's `.env` file, in order
    pub overlay: Vec<(String, String)>,
    /// Module override mounts, in flag order
    pub overrides: Vec<Mount>,
    /// Host uid:gid to run containers as
    pub user: (u32, u32),
    /// Whether to allocate a pseudo-terminal
    pub tty: bool,
}

impl ProjectContext {
    /// Resolve the context for the current working directory
    pub async fn resolve(
        image: Option<String>,
        node_modules: &[PathBuf],
    ) -> YarnboxResult<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| YarnboxError::io("getting current directory", e))?;
        let project_dir = cwd
            .canonicalize()
            .map_err(|e| YarnboxError::io(format!("resolving {}", cwd.display()), e))?;

        let project_id = identity::load_or_create(&project_dir).await?;
        let overlay = envfile::load_overlay(&project_dir)?;
        let overrides = module_overrides(&project_dir, node_modules)?;

        debug!(
            "Project {} at {} ({} override(s))",
            project_id,
            project_dir.display(),
            overrides.len()
        );

        Ok(Self {
            project_dir,
            project_id,
            image: image.unwrap_or_else(|| DEFAULT_IMAGE.to_string()),
            overlay,
            overrides,
            user: host_user(),
            tty: std::io::stdout().is_terminal(),
        })
    }

    /// Name of the project's dependency cache volume
    pub fn cache_volume(&self) -> String {
        identity::volume_name(&self.project_id)
    }

    /// Path of the installed dependency directory
    pub fn node_modules_dir(&self) -> PathBuf {
        self.project_dir.join(NODE_MODULES_DIR)
    }

    /// Path of the persisted identity dotfile
    pub fn identity_file(&self) -> PathBuf {
        self.project_dir.join(identity::ID_FILE)
    }

    /// Build a tool-image invocation.
    ///
    /// Install and task invocations must see the real registry, so module
    /// overrides are mounted only when `with_overrides` is set (the yarn
    /// passthrough).
    pub fn tool_invocation(&self, command: Vec<String>, with_overrides: bool) -> RunSpec {
        let mut mounts = vec![Mount::new(self.cache_volume(), CACHE_MOUNT_PATH)];
        if with_overrides {
            mounts.extend(self.overrides.iter().cloned());
        }

        let mut env = vec![(
            "YARN_CACHE_FOLDER".to_string(),
            CACHE_MOUNT_PATH.to_string(),
        )];
        env.extend(self.overlay.iter().cloned());

        RunSpec {
            image: self.image.clone(),
            workdir: self.project_dir.clone(),
            mounts,
            env,
            user: Some(self.user),
            tty: self.tty,
            command,
        }
    }
}

/// Map `-m/--node-module` paths to override mounts under the project's
/// dependency directory, preserving flag order.
pub(crate) fn module_overrides(
    project_dir: &Path,
    paths: &[PathBuf],
) -> YarnboxResult<Vec<Mount>> {
    paths
        .iter()
        .map(|path| {
            let name = path.file_name().ok_or_else(|| YarnboxError::InvalidOverride {
                path: path.clone(),
                reason: "path has no base name".to_string(),
            })?;

            let host = if path.is_absolute() {
                path.clone()
            } else {
                project_dir.join(path)
            };
            let target = project_dir.join(NODE_MODULES_DIR).join(name);

            Ok(Mount::new(
                host.display().to_string(),
                target.display().to_string(),
            ))
        })
        .collect()
}

fn host_user() -> (u32, u32) {
    // SAFETY: getuid/getgid always succeed
    unsafe { (libc::getuid(), libc::getgid()) }
}

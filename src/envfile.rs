//! Environment overlay loading
//!
//! Reads the optional `.env` file at the project root into an explicit
//! key/value overlay. The overlay is rendered onto every container
//! invocation as `-e KEY=VALUE` arguments; the runner never mutates its
//! own process environment. Malformed lines fail fast.

use crate::error::{YarnboxError, YarnboxResult};
use std::path::Path;
use tracing::debug;

/// Environment-definition file at the project root
pub const ENV_FILE: &str = ".env";

/// Load the environment overlay, preserving declaration order.
///
/// A missing file is not an error; comment and blank lines are skipped.
pub fn load_overlay(project_dir: &Path) -> YarnboxResult<Vec<(String, String)>> {
    let path = project_dir.join(ENV_FILE);
    if !path.exists() {
        return Ok(Vec::new());
    }

    let iter = dotenvy::from_path_iter(&path).map_err(|e| YarnboxError::EnvFileInvalid {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let mut overlay = Vec::new();
    for item in iter {
        let (key, value) = item.map_err(|e| YarnboxError::EnvFileInvalid {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        overlay.push((key, value));
    }

    debug!("Loaded {} variables from {}", overlay.len(), path.display());
    Ok(overlay)
}

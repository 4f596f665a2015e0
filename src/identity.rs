//! Project identity derivation and persistence
//!
//! Every project directory gets a short deterministic identifier that scopes
//! the dependency cache volume to that directory. The identifier is derived
//! from the absolute path and persisted to a dotfile on first use, so it
//! stays stable for the lifetime of the checkout.

use crate::error::{YarnboxError, YarnboxResult};
use sha2::{Digest, Sha256};
use std::path::Path;
use tokio::fs;
use tracing::debug;

/// Dotfile at the project root holding the persisted identifier
pub const ID_FILE: &str = ".yarnbox-id";

/// Identifier length in hex characters
const ID_LEN: usize = 8;

/// Derive the identifier for a project directory from its absolute path.
///
/// SHA-256 of the path, truncated. Does not need to be collision resistant,
/// only deterministic per path.
pub fn derive_id(project_dir: &Path) -> String {
    let mut hasher = Sha256::new();
    hasher.update(project_dir.to_string_lossy().as_bytes());
    let digest = hasher.finalize();
    hex::encode(&digest[..ID_LEN / 2])
}

/// Load the persisted identifier, deriving and persisting a fresh one if
/// the dotfile does not exist yet.
///
/// An existing file is trusted verbatim (trimmed, no format re-validation),
/// so a hand-edited identifier keeps working.
pub async fn load_or_create(project_dir: &Path) -> YarnboxResult<String> {
    let path = project_dir.join(ID_FILE);

    match fs::read_to_string(&path).await {
        Ok(contents) => {
            let id = contents.trim().to_string();
            debug!("Loaded project identifier {} from {}", id, path.display());
            Ok(id)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            let id = derive_id(project_dir);
            fs::write(&path, format!("{id}\n"))
                .await
                .map_err(|e| YarnboxError::IdentityPersist { path, source: e })?;
            debug!("Persisted new project identifier {}", id);
            Ok(id)
        }
        Err(e) => Err(YarnboxError::io(
            format!("reading project identifier from {}", path.display()),
            e,
        )),
    }
}

/// Name of the engine-managed cache volume for a project identifier
pub fn volume_name(id: &str) -> String {
    format!("{id}-dependencies")
}

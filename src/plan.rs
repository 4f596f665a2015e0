//! Invocation plans
//!
//! Subcommands compile to an ordered list of steps which are executed
//! strictly sequentially. A failed container step aborts the rest of the
//! plan unless it is marked best-effort.

use crate::engine::{ContainerEngine, RunSpec};
use crate::error::{YarnboxError, YarnboxResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, warn};

/// One step of a subcommand's plan
#[derive(Debug, Clone)]
pub enum Step {
    /// Foreground container invocation
    Run {
        spec: RunSpec,
        /// Swallow a non-zero exit instead of aborting the plan
        best_effort: bool,
    },
    /// Local filesystem removal; a missing path is not an error
    RemovePath { path: PathBuf },
    /// Engine-managed volume force-remove
    RemoveVolume { name: String },
}

/// Ordered steps for one subcommand
pub type Plan = Vec<Step>;

/// Execute a plan against the engine
pub async fn execute(engine: &dyn ContainerEngine, plan: &[Step]) -> YarnboxResult<()> {
    for step in plan {
        match step {
            Step::Run { spec, best_effort } => {
                let code = engine.run(spec).await?;
                if code != 0 {
                    if *best_effort {
                        warn!(
                            "Ignoring failed step (exit {}): {}",
                            code,
                            spec.command_line()
                        );
                    } else {
                        return Err(YarnboxError::ChildInvocationFailed {
                            command: spec.command_line(),
                            code,
                        });
                    }
                }
            }
            Step::RemovePath { path } => remove_path(path).await?,
            Step::RemoveVolume { name } => {
                info!("Removing volume {}", name);
                engine.volume_remove(name).await?;
            }
        }
    }
    Ok(())
}

async fn remove_path(path: &Path) -> YarnboxResult<()> {
    let meta = match fs::metadata(path).await {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            return Err(YarnboxError::io(
                format!("inspecting {}", path.display()),
                e,
            ))
        }
    };

    let result = if meta.is_dir() {
        fs::remove_dir_all(path).await
    } else {
        fs::remove_file(path).await
    };

    match result {
        Ok(()) => {
            info!("Removed {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(YarnboxError::io(format!("removing {}", path.display()), e)),
    }
}


#[cfg(test)]
mod tests {
    use super::testing::MockEngine;
    use super::*;
    use crate::engine::Mount;
    use tempfile::TempDir;

    fn run_step(command: &[&str], best_effort: bool) -> Step {
        Step::Run {
            spec: RunSpec {
                image: "node:test".to_string(),
                workdir: PathBuf::from("/work/app"),
                mounts: vec![Mount::new("vol", "/yarn-cache")],
                env: vec![],
                user: Some((1000, 1000)),
                tty: false,
                command: command.iter().map(|s| s.to_string()).collect(),
            },
            best_effort,
        }
    }

    #[tokio::test]
    async fn steps_run_in_order() {
        let engine = MockEngine::default();
        let plan = vec![
            run_step(&["yarn", "install"], false),
            run_step(&["yarn", "run", "build"], false),
        ];

        execute(&engine, &plan).await.unwrap();

        assert_eq!(engine.run_commands(), vec!["yarn install", "yarn run build"]);
    }

    #[tokio::test]
    async fn failure_aborts_later_steps() {
        let engine = MockEngine::with_exit_codes(&[2]);
        let plan = vec![
            run_step(&["yarn", "install"], false),
            run_step(&["yarn", "run", "build"], false),
        ];

        let err = execute(&engine, &plan).await.unwrap_err();

        assert!(matches!(
            err,
            YarnboxError::ChildInvocationFailed { code: 2, .. }
        ));
        assert_eq!(engine.run_commands(), vec!["yarn install"]);
    }

    #[tokio::test]
    async fn best_effort_failure_is_swallowed() {
        let engine = MockEngine::with_exit_codes(&[1, 0]);
        let plan = vec![
            run_step(&["yarn", "run", "clean"], true),
            run_step(&["yarn", "install"], false),
        ];

        execute(&engine, &plan).await.unwrap();

        assert_eq!(engine.run_commands().len(), 2);
    }

    #[tokio::test]
    async fn remove_path_tolerates_missing() {
        let engine = MockEngine::default();
        let dir = TempDir::new().unwrap();
        let plan = vec![Step::RemovePath {
            path: dir.path().join("node_modules"),
        }];

        execute(&engine, &plan).await.unwrap();
    }

    #[tokio::test]
    async fn remove_path_handles_files_and_dirs() {
        let engine = MockEngine::default();
        let dir = TempDir::new().unwrap();

        let sub = dir.path().join("node_modules");
        std::fs::create_dir(&sub).unwrap();
        std::fs::write(sub.join("package.json"), "{}").unwrap();
        let dotfile = dir.path().join(".yarnbox-id");
        std::fs::write(&dotfile, "ab12cd34\n").unwrap();

        let plan = vec![
            Step::RemovePath { path: sub.clone() },
            Step::RemovePath {
                path: dotfile.clone(),
            },
        ];
        execute(&engine, &plan).await.unwrap();

        assert!(!sub.exists());
        assert!(!dotfile.exists());
    }

    #[tokio::test]
    async fn volume_removal_goes_to_engine() {
        let engine = MockEngine::default();
        let plan = vec![Step::RemoveVolume {
            name: "ab12cd34-dependencies".to_string(),
        }];

        execute(&engine, &plan).await.unwrap();

        assert_eq!(
            *engine.removed_volumes.lock().unwrap(),
            vec!["ab12cd34-dependencies"]
        );
    }
}

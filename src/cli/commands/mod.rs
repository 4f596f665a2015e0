//! CLI command implementations

pub mod build;
pub mod clean;
pub mod test;
pub mod watch;
pub mod yarn;

pub use build::execute as build;
pub use clean::execute as clean;
pub use test::execute as test;
pub use watch::execute as watch;
pub use yarn::execute as yarn;

use crate::context::ProjectContext;
use crate::plan::Step;

/// Dependency-install step. Never mounts module overrides: installs must
/// see the real registry.
pub(crate) fn install_step(ctx: &ProjectContext) -> Step {
    Step::Run {
        spec: ctx.tool_invocation(
            vec!["yarn".to_string(), "install".to_string()],
            false,
        ),
        best_effort: false,
    }
}

/// Step running one of the tool image's named tasks
pub(crate) fn task_step(ctx: &ProjectContext, task: &str) -> Step {
    Step::Run {
        spec: ctx.tool_invocation(
            vec!["yarn".to_string(), "run".to_string(), task.to_string()],
            false,
        ),
        best_effort: false,
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use crate::context::ProjectContext;
    use crate::engine::Mount;
    use std::path::PathBuf;

    /// Context fixture for plan tests
    pub fn context(overrides: Vec<Mount>) -> ProjectContext {
        ProjectContext {
            project_dir: PathBuf::from("/work/app"),
            project_id: "ab12cd34".to_string(),
            image: "node:test".to_string(),
            overlay: vec![],
            overrides,
            user: (1000, 1000),
            tty: false,
        }
    }
}

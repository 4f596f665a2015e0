//! Build command - install dependencies, then run the build task

use crate::cli::commands::{install_step, task_step};
use crate::context::ProjectContext;
use crate::engine::ContainerEngine;
use crate::error::YarnboxResult;
use crate::plan::{self, Plan};

/// Execute the build command
pub async fn execute(engine: &dyn ContainerEngine, ctx: &ProjectContext) -> YarnboxResult<()> {
    plan::execute(engine, &build_plan(ctx)).await
}

pub(crate) fn build_plan(ctx: &ProjectContext) -> Plan {
    vec![install_step(ctx), task_step(ctx, "build")]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::fixtures::context;
    use crate::engine::Mount;
    use crate::plan::Step;

    #[test]
    fn plan_installs_then_builds() {
        let plan = build_plan(&context(vec![]));

        let commands: Vec<String> = plan
            .iter()
            .map(|step| match step {
                Step::Run { spec, .. } => spec.command_line(),
                _ => panic!("expected Run steps only"),
            })
            .collect();

        assert_eq!(commands, vec!["yarn install", "yarn run build"]);
    }

    #[test]
    fn install_never_mounts_overrides() {
        let ctx = context(vec![
            Mount::new("/src/a", "/work/app/node_modules/a"),
            Mount::new("/src/b", "/work/app/node_modules/b"),
        ]);

        for step in build_plan(&ctx) {
            let Step::Run { spec, .. } = step else {
                panic!("expected Run steps only");
            };
            // Only the cache volume, no overrides
            assert_eq!(spec.mounts.len(), 1);
            assert_eq!(spec.mounts[0].source, "ab12cd34-dependencies");
        }
    }
}

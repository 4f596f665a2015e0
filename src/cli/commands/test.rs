//! Test command - install dependencies, then run the test task

use crate::cli::commands::{install_step, task_step};
use crate::context::ProjectContext;
use crate::engine::ContainerEngine;
use crate::error::YarnboxResult;
use crate::plan::{self, Plan};

/// Execute the test command
pub async fn execute(engine: &dyn ContainerEngine, ctx: &ProjectContext) -> YarnboxResult<()> {
    plan::execute(engine, &test_plan(ctx)).await
}

pub(crate) fn test_plan(ctx: &ProjectContext) -> Plan {
    vec![install_step(ctx), task_step(ctx, "test")]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::fixtures::context;
    use crate::plan::testing::MockEngine;

    #[tokio::test]
    async fn plan_installs_then_tests() {
        let engine = MockEngine::default();

        execute(&engine, &context(vec![])).await.unwrap();

        assert_eq!(engine.run_commands(), vec!["yarn install", "yarn run test"]);
    }
}

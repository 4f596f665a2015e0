//! Clean command - tear down project state
//!
//! Runs the tool's own clean task best-effort, then removes the installed
//! dependency directory, the persisted identity file, and the dependency
//! cache volume. Local and volume cleanup always run, even when the clean
//! task fails.

use crate::context::ProjectContext;
use crate::engine::ContainerEngine;
use crate::error::YarnboxResult;
use crate::plan::{self, Plan, Step};
use console::style;

/// Execute the clean command
pub async fn execute(engine: &dyn ContainerEngine, ctx: &ProjectContext) -> YarnboxResult<()> {
    plan::execute(engine, &clean_plan(ctx)).await?;

    println!(
        "{} Cleaned project {}",
        style("✓").green(),
        style(&ctx.project_id).cyan()
    );
    Ok(())
}

pub(crate) fn clean_plan(ctx: &ProjectContext) -> Plan {
    let clean_task = Step::Run {
        spec: ctx.tool_invocation(
            vec!["yarn".to_string(), "run".to_string(), "clean".to_string()],
            false,
        ),
        best_effort: true,
    };

    vec![
        clean_task,
        Step::RemovePath {
            path: ctx.node_modules_dir(),
        },
        Step::RemovePath {
            path: ctx.identity_file(),
        },
        Step::RemoveVolume {
            name: ctx.cache_volume(),
        },
    ]
}

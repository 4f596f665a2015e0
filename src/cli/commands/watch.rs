//! Watch command - install, build once, then watch in the foreground

use crate::cli::commands::{install_step, task_step};
use crate::context::ProjectContext;
use crate::engine::ContainerEngine;
use crate::error::YarnboxResult;
use crate::plan::{self, Plan};

/// Execute the watch command. Blocks until the watch task exits.
pub async fn execute(engine: &dyn ContainerEngine, ctx: &ProjectContext) -> YarnboxResult<()> {
    plan::execute(engine, &watch_plan(ctx)).await
}

pub(crate) fn watch_plan(ctx: &ProjectContext) -> Plan {
    vec![
        install_step(ctx),
        task_step(ctx, "build"),
        task_step(ctx, "watch"),
    ]
}

//! Yarn passthrough command - run yarn directly inside the tool image
//!
//! The one place module overrides are mounted, so a locally checked-out
//! dependency can stand in for the installed one.

use crate::context::ProjectContext;
use crate::engine::ContainerEngine;
use crate::error::YarnboxResult;
use crate::plan::{self, Plan, Step};

/// Execute the yarn passthrough command
pub async fn execute(
    engine: &dyn ContainerEngine,
    ctx: &ProjectContext,
    args: &[String],
) -> YarnboxResult<()> {
    plan::execute(engine, &yarn_plan(ctx, args)).await
}

pub(crate) fn yarn_plan(ctx: &ProjectContext, args: &[String]) -> Plan {
    let mut command = vec!["yarn".to_string()];
    command.extend(args.iter().cloned());

    vec![Step::Run {
        spec: ctx.tool_invocation(command, true),
        best_effort: false,
    }]
}

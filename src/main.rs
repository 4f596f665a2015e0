//! Yarnbox - containerized yarn build runner
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use yarnbox::cli::{Cli, Commands};
use yarnbox::context::ProjectContext;
use yarnbox::engine::create_engine;
use yarnbox::error::YarnboxResult;

#[tokio::main]
async fn main() -> ExitCode {
    // clap exits 2 on usage errors by default; the CLI contract is 0 for
    // help/version and 1 for anything invalid.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::from(e.exit_code())
        }
    }
}

async fn run(cli: Cli) -> YarnboxResult<()> {
    // Initialize logging: 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("yarnbox=warn"),
        1 => EnvFilter::new("yarnbox=info"),
        _ => EnvFilter::new("yarnbox=debug"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    let engine = create_engine(cli.engine);
    debug!("Using engine: {}", engine.engine_name());
    engine.preflight().await?;

    let ctx = ProjectContext::resolve(cli.image.clone(), &cli.node_module).await?;

    match cli.command {
        Commands::Build => yarnbox::cli::commands::build(engine.as_ref(), &ctx).await,
        Commands::Watch => yarnbox::cli::commands::watch(engine.as_ref(), &ctx).await,
        Commands::Test => yarnbox::cli::commands::test(engine.as_ref(), &ctx).await,
        Commands::Yarn { args } => yarnbox::cli::commands::yarn(engine.as_ref(), &ctx, &args).await,
        Commands::Clean => yarnbox::cli::commands::clean(engine.as_ref(), &ctx).await,
    }
}

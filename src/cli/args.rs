//! CLI argument definitions using clap derive

use crate::engine::EngineKind;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Yarnbox - containerized yarn build runner
///
/// Resolves build, watch, test and clean workflows into container
/// invocations against a tool image, so no local node or yarn install
/// is required.
#[derive(Parser, Debug)]
#[command(name = "yarnbox")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Substitute a local checkout for an installed dependency; mounted at
    /// node_modules/<basename> on yarn passthrough runs (repeatable)
    #[arg(short = 'm', long = "node-module", value_name = "PATH", global = true)]
    pub node_module: Vec<PathBuf>,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Tool image to run tasks in
    #[arg(long, global = true, env = "YARNBOX_IMAGE")]
    pub image: Option<String>,

    /// Container engine to use
    #[arg(long, global = true, env = "YARNBOX_ENGINE", value_enum, default_value_t = EngineKind::Docker)]
    pub engine: EngineKind,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install dependencies, then run the build task
    Build,

    /// Install dependencies, build once, then run the watch task in the
    /// foreground
    Watch,

    /// Install dependencies, then run the test task
    Test,

    /// Run yarn directly inside the tool image, with module overrides
    /// mounted
    Yarn {
        /// Arguments passed through to yarn verbatim
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Remove installed dependencies, the project identity file, and the
    /// dependency cache volume
    Clean,
}

//! Container engine plumbing
//!
//! The runner talks to docker or podman exclusively through this module.

mod cli;
mod runtime;
pub mod spec;

pub use cli::{create_engine, CliEngine};
pub use runtime::{ContainerEngine, EngineKind};
pub use spec::{Mount, RunSpec};

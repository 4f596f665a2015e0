//! Yarnbox - containerized yarn build runner
//!
//! Resolves a small set of build workflow subcommands into sequences of
//! container invocations against a tool image, with a project-scoped
//! dependency cache volume.

pub mod cli;
pub mod context;
pub mod engine;
pub mod envfile;
pub mod error;
pub mod identity;
pub mod plan;

pub use error::{YarnboxError, YarnboxResult};

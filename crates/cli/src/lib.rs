pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod exec;
pub mod probe;
pub mod registry;
pub mod runner;
pub mod walker;

pub use classify::{Classified, FileGroup};
pub use cli::{Cli, Command, RunArgs};
pub use error::{Error, Result};
pub use registry::{Mode, Phase, ToolCandidate};

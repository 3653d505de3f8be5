//! Core crate for the registration-form task runner: declaration parsing,
//! the fixed task table and the process runner behind it.

pub mod config;
pub mod help;
pub mod registry;
pub mod runner;

pub use config::Config;
pub use help::TaskDeclaration;
pub use registry::{Invocation, Registry, Target, TargetKind};
pub use runner::{CommandRunner, DryRunRunner, ProcessRunner, StatusCode};

use std::path::PathBuf;
use thiserror::Error;

/// Common error type for the task runner.
#[derive(Debug, Error)]
pub enum Error {
    /// The file holding task declarations could not be read.
    #[error("failed to read task declarations from {path}")]
    ReadDeclarations {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to read config file {path}")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// Raised when the requested task is not part of the task table.
    #[error("unknown task `{name}`, available tasks: {}", .available.join(", "))]
    UnknownTask { name: String, available: Vec<String> },
    #[error("failed to start `{program}`")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Convenient alias for results returned by the core crate.
pub type Result<T> = std::result::Result<T, Error>;

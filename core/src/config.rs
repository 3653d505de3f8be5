//! Configuration models and loaders for the task runner.

use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// File looked up in the current directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "regform.toml";

/// Runtime configuration for the task runner.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// File the help listing is built from.
    pub makefile: PathBuf,
    /// Program used for the translation tasks.
    pub django_admin: String,
    /// Directory the translation tasks run in. Defaults to the current one.
    pub working_dir: Option<PathBuf>,
    /// Whether task names are colorized in the help listing.
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            makefile: PathBuf::from("Makefile"),
            django_admin: String::from("django-admin"),
            working_dir: None,
            color: true,
        }
    }
}

/// Load configuration from the provided path.
///
/// Expected TOML keys, all optional:
/// - `makefile` as a path
/// - `django_admin` as a program name or path
/// - `working_dir` as a path
/// - `color` as a boolean
pub fn load_config(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| Error::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| Error::ParseConfig {
        path: path.to_path_buf(),
        source,
    })
}

/// Resolve the configuration for this run.
///
/// An explicit path must exist. Otherwise `regform.toml` under `dir` is used
/// when present, and the defaults when not.
pub fn resolve(explicit: Option<&Path>, dir: impl AsRef<Path>) -> Result<Config> {
    if let Some(path) = explicit {
        tracing::debug!(path = %path.display(), "loading config");
        return load_config(path);
    }

    let candidate = dir.as_ref().join(DEFAULT_CONFIG_FILE);
    if candidate.is_file() {
        tracing::debug!(path = %candidate.display(), "loading config");
        load_config(candidate)
    } else {
        tracing::debug!("no config file found, using defaults");
        Ok(Config::default())
    }
}

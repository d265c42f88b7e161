//! Loading [`ClientConfig`] and locating session storage.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use gatekeeper_application::ClientConfig;
use gatekeeper_infrastructure::default_storage_path;

const DEFAULT_FILE: &str = "gatekeeper";
const ENV_PREFIX: &str = "GATEKEEPER";

/// Settings could not be assembled.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A source was unreadable or a value had the wrong shape.
    #[error("configuration error: {0}")]
    Load(#[from] config::ConfigError),

    /// No storage path was given and the platform has no config directory.
    #[error("no configuration directory found; pass --storage")]
    NoStorageDir,
}

/// Loads the client configuration.
///
/// Sources, later ones winning: built-in defaults, `path` (or an optional
/// `gatekeeper.toml` in the working directory), `GATEKEEPER_*` variables.
///
/// # Errors
///
/// Returns an error if `path` is missing or any source is malformed.
pub fn load(path: Option<&Path>) -> Result<ClientConfig, ConfigError> {
    load_with(path, Environment::with_prefix(ENV_PREFIX))
}

fn load_with(path: Option<&Path>, env: Environment) -> Result<ClientConfig, ConfigError> {
    let file = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name(DEFAULT_FILE).required(false),
    };

    let config = Config::builder()
        .add_source(file)
        .add_source(env)
        .build()?
        .try_deserialize()?;
    Ok(config)
}

/// Resolves where the session is persisted.
///
/// # Errors
///
/// Returns an error if no path is given and none can be derived.
pub fn storage_path(explicit: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    explicit
        .or_else(default_storage_path)
        .ok_or(ConfigError::NoStorageDir)
}

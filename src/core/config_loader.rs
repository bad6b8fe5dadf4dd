//! # Config Loader
//!
//! Reads the optional `devlaunch.toml` that lets a project swap the dev command, drop the
//! `cross-env` wrapper, or add variables to the child's environment. A project without the
//! file gets the defaults from [`LaunchConfig::default`].
use crate::{constants::CONFIG_FILENAME, models::LaunchConfig};
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Errors raised while reading `devlaunch.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file '{path}'")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse config file '{path}'")]
    TomlParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("'dev_command' in '{0}' must not be empty.")]
    EmptyCommand(String),
}

/// Loads the launch configuration.
///
/// An `explicit` path must exist. Without one, `devlaunch.toml` is looked up in `cwd` and
/// its absence simply means defaults.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<LaunchConfig, ConfigError> {
    let path: PathBuf = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let candidate = cwd.join(CONFIG_FILENAME);
            if !candidate.is_file() {
                log::debug!(
                    "No {} in '{}', using defaults.",
                    CONFIG_FILENAME,
                    cwd.display()
                );
                return Ok(LaunchConfig::default());
            }
            candidate
        }
    };

    let display = path.display().to_string();
    let content = fs::read_to_string(&path).map_err(|e| ConfigError::Io {
        path: display.clone(),
        source: e,
    })?;
    let config = parse_config(&content, &display)?;
    log::debug!("Loaded config from '{}': {:?}", display, config);
    Ok(config)
}

/// Parses and validates the TOML text of a config file. `origin` only feeds error messages.
pub fn parse_config(content: &str, origin: &str) -> Result<LaunchConfig, ConfigError> {
    let mut config: LaunchConfig =
        toml::from_str(content).map_err(|e| ConfigError::TomlParse {
            path: origin.to_string(),
            source: e,
        })?;

    let trimmed = config.dev_command.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyCommand(origin.to_string()));
    }
    config.dev_command = trimmed.to_string();
    config.env_wrapper = config.env_wrapper.trim().to_string();

    Ok(config)
}

use std::io::prelude::*;
use std::fs::File;
use std::str::FromStr;

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use failure::Error;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::context::Context;
use crate::manager::FailurePolicy;

#[cfg(test)]
mod tests;

/// Configuration parameters.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    /// Failure policy used when a command doesn't choose one.
    #[serde(default)]
    pub policy: FailurePolicy,
    /// Context used for task lists that don't carry their own.
    #[serde(default)]
    pub default_context: Context,
}

// creation and acquisition functions
impl Config {
    /// Opens existing or creates new configuration file.
    ///
    /// If `user_config` is None, uses the `directories` crate to find the config directory on each
    /// platform and looks for or creates a `task-prioritizer/config.toml` file inside that
    /// directory.
    ///
    /// If `user_config` contains a path, look for the config file at that path. It is not created
    /// if there is no file there, and an error is returned.
    pub fn new_in(user_config: Option<PathBuf>) -> Result<Config, Error> {
        let config_filename = match user_config {
            Some(config_filename) => {
                if !config_filename.is_file() {
                    return Err(format_err!("Config file path was given but there was no config file there: {}",
                                           config_filename.display()));
                }
                config_filename
            }
            None => {
                let config_filename = Config::default_config_filename()?;
                if !config_filename.is_file() {
                    return Config::write_default_config();
                }
                config_filename
            }
        };

        debug!(path = %config_filename.display(), "reading config");

        let config_string = std::fs::read_to_string(&config_filename)
                .map_err(|e| format_err!("Could not read config file at '{}': {}", config_filename.display(), e))?;

        let config = Config::from_str(&config_string)
            .map_err(|e| format_err!("Could not parse config file at '{}': {}", config_filename.display(), e))?;

        Ok(config)
    }

    fn project_dirs() -> Result<ProjectDirs, Error> {
        ProjectDirs::from("", "", "task-prioritizer")
            .ok_or_else(|| format_err!("No home directory, cannot locate the config directory."))
    }

    fn default_config_dir() -> Result<PathBuf, Error> {
        Ok(Config::project_dirs()?.config_dir().into())
    }

    fn default_config_filename() -> Result<PathBuf, Error> {
        Ok(Config::default_config_dir()?.join("config.toml"))
    }

    /// Create config directory and write out default config.
    fn write_default_config() -> Result<Config, Error> {
        let default_config = Config::default();

        let config_dir = Config::default_config_dir()?;
        let config_filename = Config::default_config_filename()?;

        std::fs::create_dir_all(&config_dir)
            .map_err(|e| format_err!("Could not create config directory at '{}' when creating initial config file: {}",
                                     config_dir.display(), e))?;

        debug!(path = %config_filename.display(), "writing default config");
        default_config.write_config(config_filename.as_path())?;

        Ok(default_config)
    }

    pub fn write_config(&self, config_filename: &Path) -> Result<(), Error> {
        let mut file = File::create(&config_filename)
            .map_err(|e| format_err!("Could not open config file at '{}' for writing: {}",
                                     config_filename.display(), e))?;

        let output = toml::to_string(&self)
            .map_err(|e| format_err!("Could not serialize config: {}", e))?;

        file.write_all(output.as_bytes())
            .map_err(|e| format_err!("Could not write out config to '{}': {}", config_filename.display(), e))?;
        Ok(())
    }
}

impl FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: Config = toml::from_str(s)
            .map_err(|e| format_err!("Error parsing config file: {}", e))?;

        Ok(config)
    }
}

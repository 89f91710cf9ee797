//! Configuration loading for termlib.
//!
//! The configuration file is optional. When it is absent every setting takes
//! its default, so the program runs with no setup at all.

use std::fs::File;
use std::io::ErrorKind;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::CursorOffset;

/// Default path for the configuration file
const DEFAULT_CONFIG_PATH: &str = "~/.termlib/config.yml";

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Offset from the saved cursor position at which single characters are drawn.
    pub char_offset: CursorOffset,
}

/// Resolves the configuration file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// configuration path. Shell expansions like `~` are resolved.
///
/// # Examples
///
/// ```
/// use termlib_core::config::get_config_path;
///
/// let custom_path = get_config_path(&Some("/path/to/config.yml".to_string()));
/// assert_eq!(custom_path, "/path/to/config.yml");
/// ```
#[must_use]
pub fn get_config_path(config_path_arg: &Option<String>) -> String {
    let config_path = match config_path_arg {
        Some(config_path) => config_path,
        None => DEFAULT_CONFIG_PATH,
    };

    shellexpand::tilde(config_path).to_string()
}

/// Reads the configuration at `config_path`, falling back to defaults when no
/// file exists there.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened for any reason other than not existing
/// - The file contains invalid YAML or unknown values
/// - `char_offset.amount` is zero
pub fn load_config(config_path: &str) -> Result<Config> {
    let reader = match File::open(config_path) {
        Ok(reader) => reader,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("No config at `{}`, using defaults", config_path);
            return Ok(Config::default());
        }
        Err(e) => {
            return Err(Error::io_error(
                "config".to_string(),
                config_path.to_string(),
                e,
            ))
        }
    };

    // An empty file deserializes to `None` rather than an empty mapping
    let parsed: serde_yaml::Result<Option<Config>> = serde_yaml::from_reader(reader);

    let config = match parsed {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            return Err(Error::yaml_error(
                "parsing".to_string(),
                "config".to_string(),
                config_path.to_string(),
                e,
            ))
        }
    };

    if config.char_offset.amount == 0 {
        return Err(Error::ZeroOffsetAmount(config_path.to_string()));
    }

    debug!("Loaded config from `{}`: {:?}", config_path, config);
    Ok(config)
}

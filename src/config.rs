use crate::analysis::TierTable;
use crate::error::{Result, RigcheckError};
use crate::utils::file::{expand_path, file_exists, read_file_safe};
use dirs::config_dir;
use serde::Deserialize;
use std::{collections::HashMap, path::PathBuf};
use tracing::{debug, info};

#[derive(Deserialize, Debug, Default)]
pub struct Config {
    /// Hardware catalog used when `--catalog` is not given
    pub catalog_path: Option<String>,
    #[serde(default)]
    pub thresholds: TierTable,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

#[derive(Deserialize, Debug, Default, Clone)]
pub struct DisplayConfig {
    pub separator: Option<String>,
    pub color: Option<bool>,
    pub key_color: Option<String>,
    pub show_score: Option<bool>,
    pub show_description: Option<bool>,
}

impl DisplayConfig {
    pub fn separator(&self) -> &str {
        self.separator.as_deref().unwrap_or(": ")
    }

    pub fn color_enabled(&self) -> bool {
        self.color.unwrap_or(true)
    }

    pub fn show_score(&self) -> bool {
        self.show_score.unwrap_or(true)
    }

    pub fn show_description(&self) -> bool {
        self.show_description.unwrap_or(true)
    }
}

/// `$XDG_CONFIG_HOME/rigcheck/config.toml` or the platform equivalent
pub fn default_config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("rigcheck/config.toml"))
}

pub fn parse_config(text: &str) -> Result<Config> {
    toml::from_str(text).map_err(|e| RigcheckError::Config(e.to_string()))
}

/// Load the config from an explicit path, which must exist, or from the
/// default location, falling back to built-in defaults when that is absent.
pub fn load_config(explicit: Option<&str>) -> Result<Config> {
    let config_path = match explicit {
        Some(path) => {
            let path = expand_path(path);
            if !file_exists(&path) {
                return Err(RigcheckError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            path
        }
        None => match default_config_path().filter(|p| file_exists(p)) {
            Some(path) => path,
            None => {
                debug!("no config file found, using defaults");
                return Ok(Config::default());
            }
        },
    };

    info!(path = %config_path.display(), "loading config");
    let config_data = read_file_safe(&config_path)?;
    parse_config(&config_data)
}

impl Config {
    /// Catalog path from the command line, else from the config file
    pub fn resolve_catalog_path(&self, cli: Option<&str>) -> Result<PathBuf> {
        cli.or(self.catalog_path.as_deref())
            .map(expand_path)
            .ok_or_else(|| {
                RigcheckError::Config(
                    "no catalog given: pass --catalog or set catalog_path in the config".to_string(),
                )
            })
    }
}

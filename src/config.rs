//! Optional TOML configuration.
//!
//! Read from `~/.hn_search/config.toml`. Every key is optional:
//!
//! ```toml
//! endpoint = "https://hn.algolia.com/api/v1/"
//! request_timeout_secs = 30
//! data_dir = "/home/me/.hn_search"
//! log_level = "debug"
//! theme = "dark"          # auto | light | dark
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;
use crate::hn_client::DEFAULT_ENDPOINT;
use crate::theme::ThemePreference;

const APP_DIR: &str = ".hn_search";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    pub request_timeout_secs: u64,
    /// Where the settings database lives. Defaults to `~/.hn_search`.
    pub data_dir: Option<PathBuf>,
    pub log_level: String,
    pub theme: ThemePreference,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: 30,
            data_dir: None,
            log_level: "info".to_string(),
            theme: ThemePreference::Auto,
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Loads `path` if it exists. A broken file is reported and ignored.
    ///
    /// Runs before logging is set up, so problems go to stderr.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Ignoring config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn default_path() -> Result<PathBuf, ConfigError> {
        Ok(app_home()?.join(CONFIG_FILE))
    }

    pub fn data_dir(&self) -> Result<PathBuf, ConfigError> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => app_home(),
        }
    }

    /// At least one second; a zero timeout would fail every request.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

fn app_home() -> Result<PathBuf, ConfigError> {
    let home_dir = dirs_next::home_dir().ok_or(ConfigError::NoHome)?;
    Ok(home_dir.join(APP_DIR))
}

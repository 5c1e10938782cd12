//! Contains everything related to the optional config file

mod v1;
use v1::Config1;
pub use v1::Endpoint1 as Endpoint;

/// Latest config struct
pub type Config = Config1;

use crate::action::Action;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, tag = "version")]
pub enum ConfigFile {
    #[serde(rename = "1")]
    V1(Config1),
}

impl TryInto<Config> for ConfigFile {
    type Error = anyhow::Error;

    fn try_into(self) -> std::result::Result<Config, Self::Error> {
        match self {
            Self::V1(x) => Ok(x),
        }
    }
}

impl ConfigFile {
    pub fn config_from_str(input: &str) -> Result<Config> {
        toml::from_str::<ConfigFile>(input)?.try_into()
    }

    pub fn config_from_file(file: &Path) -> Result<Config> {
        let file_contents = std::fs::read_to_string(file)
            .with_context(|| format!("while reading config file {:?}", file))?;

        Self::config_from_str(&file_contents)
            .with_context(|| format!("while parsing config file {:?}", file))
    }
}

impl Config {
    /// Table for the action
    pub fn endpoint(&self, action: Action) -> &Endpoint {
        match action {
            Action::Reload => &self.reload,
            Action::Restart => &self.restart,
        }
    }

    /// Host for the action, the action table wins over the shared value
    pub fn host(&self, action: Action) -> Option<&str> {
        self.endpoint(action)
            .host
            .as_deref()
            .or(self.host.as_deref())
    }

    pub fn port(&self, action: Action) -> Option<u16> {
        self.endpoint(action).port
    }
}

/// Get app configuration directory
pub fn app_dir() -> Option<PathBuf> {
    // respect XDG standard
    let xdg_config_home = match std::env::var("XDG_CONFIG_HOME") {
        Ok(x) if !x.is_empty() => PathBuf::from(x),
        // fallback to ~/.config
        _ => PathBuf::from(std::env::var("HOME").ok()?).join(".config"),
    };

    // use package name for dir name
    Some(xdg_config_home.join(crate::APP_NAME))
}

/// Config file used when none is given explicitly
pub fn default_config_path() -> Option<PathBuf> {
    app_dir().map(|x| x.join(crate::vars::CONFIG_FILE_NAME))
}

/// Load config from explicit path, or from the default path if it exists
///
/// Explicit path is expanded like a shell would, and it has to exist
pub fn load(explicit: Option<&str>) -> Result<Config> {
    if let Some(path) = explicit {
        let expanded = shellexpand::full(path)
            .with_context(|| format!("while expanding config path {:?}", path))?;

        return ConfigFile::config_from_file(Path::new(expanded.as_ref()));
    }

    match default_config_path() {
        Some(path) if path.exists() => {
            log::debug!("Loading config from {path:?}");
            ConfigFile::config_from_file(&path)
        },
        _ => {
            log::trace!("No config file found, using defaults");
            Ok(Config::default())
        },
    }
}

pub use v1::commented_fields;

// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::{Path, PathBuf};

/// The name of the FurahiDay application.
pub const APP_NAME: &str = "furahi";

/// Domain used for event links and calendar UIDs when none is configured.
pub const DEFAULT_APP_DOMAIN: &str = "furahiday.app";

/// Errors raised while resolving configuration paths.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("path is not valid unicode: {0}")]
    InvalidPath(String),

    #[error("user-specific {0} directory not found")]
    DirNotFound(&'static str),
}

/// Configuration for the FurahiDay application.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
    /// Path to the event catalog, the bundled catalog is used when absent.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Directory for storing application state.
    #[serde(default)]
    pub state_dir: Option<PathBuf>,

    /// Domain of shared event links and calendar UIDs.
    #[serde(default = "default_app_domain")]
    pub app_domain: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            state_dir: None,
            app_domain: default_app_domain(),
        }
    }
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), ConfigError> {
        if let Some(path) = &self.catalog_path {
            self.catalog_path = Some(expand_path(path)?);
        }

        match &self.state_dir {
            Some(a) => self.state_dir = Some(expand_path(a)?),
            None => match get_state_dir() {
                Ok(a) => self.state_dir = Some(a.join(APP_NAME)),
                Err(err) => tracing::warn!(%err, "failed to get state directory"),
            },
        };

        if self.app_domain.trim().is_empty() {
            tracing::warn!("empty app domain, using default");
            self.app_domain = default_app_domain();
        }

        Ok(())
    }
}

fn default_app_domain() -> String {
    DEFAULT_APP_DOMAIN.to_string()
}

/// Expands a leading `~`, `$HOME` or `$XDG_CONFIG_HOME` (and their Windows
/// counterparts) to the matching directory. Other paths are returned as is.
pub fn expand_path(path: &Path) -> Result<PathBuf, ConfigError> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let raw = path
        .to_str()
        .ok_or_else(|| ConfigError::InvalidPath(path.display().to_string()))?;

    for (prefix, base) in PATH_PREFIXES {
        let rest = raw
            .strip_prefix(prefix)
            .and_then(|a| a.strip_prefix('/').or_else(|| a.strip_prefix('\\')));
        if let Some(rest) = rest {
            return Ok(base()?.join(rest));
        }
    }
    Ok(path.to_owned())
}

type BaseDir = fn() -> Result<PathBuf, ConfigError>;

#[cfg(unix)]
const PATH_PREFIXES: &[(&str, BaseDir)] = &[
    ("~", get_home_dir),
    ("$HOME", get_home_dir),
    ("${HOME}", get_home_dir),
    ("$XDG_CONFIG_HOME", get_config_dir),
    ("${XDG_CONFIG_HOME}", get_config_dir),
];

#[cfg(windows)]
const PATH_PREFIXES: &[(&str, BaseDir)] = &[
    ("~", get_home_dir),
    ("%UserProfile%", get_home_dir),
    ("%LOCALAPPDATA%", get_config_dir),
];

fn get_home_dir() -> Result<PathBuf, ConfigError> {
    dirs::home_dir().ok_or(ConfigError::DirNotFound("home"))
}

fn get_config_dir() -> Result<PathBuf, ConfigError> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or(ConfigError::DirNotFound("config"))
}

fn get_state_dir() -> Result<PathBuf, ConfigError> {
    #[cfg(unix)]
    let state_dir = xdg::BaseDirectories::new().get_state_home();
    #[cfg(windows)]
    let state_dir = dirs::data_dir();
    state_dir.ok_or(ConfigError::DirNotFound("state"))
}

//! Task list configuration.
//!
//! Read from `~/.config/CapyShell/tasklist.json`. Every field is optional; a
//! missing file means defaults.

use capy_apps::SearchPaths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// How task lists are presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RendererKind {
    /// Log every list at info level.
    #[default]
    Log,
    /// One JSON object per update on stdout.
    Json,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskListConfig {
    /// Overrides `XDG_DATA_HOME` for desktop entry lookup.
    pub data_home: Option<PathBuf>,
    /// Overrides `XDG_DATA_DIRS` for desktop entry lookup.
    pub data_dirs: Option<Vec<PathBuf>>,
    pub renderer: RendererKind,
    /// env_logger filter, used when `RUST_LOG` is unset.
    pub log_level: Option<String>,
}

impl TaskListConfig {
    /// Default config file location.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("CapyShell").join("tasklist.json"))
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Desktop entry search paths: config overrides on top of the XDG env.
    pub fn search_paths(&self) -> SearchPaths {
        let env = SearchPaths::from_env();
        SearchPaths::new(
            self.data_home.clone().unwrap_or(env.data_home),
            self.data_dirs.clone().unwrap_or(env.data_dirs),
        )
    }
}

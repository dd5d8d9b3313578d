// Configuration loading module

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use sticky_tabs::AppConfig;

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "STICKY_TABS_CONFIG";

/// Config file picked up from the working directory
pub const CONFIG_FILE_NAME: &str = "sticky-tabs.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {}", path.display(), source)]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {}: {}", path.display(), source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Pick the config file: explicit path, then $STICKY_TABS_CONFIG, then ./sticky-tabs.yaml
pub fn resolve_config_path(config_path: Option<PathBuf>) -> Option<PathBuf> {
    config_path
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
        .or_else(|| {
            let local = PathBuf::from(CONFIG_FILE_NAME);
            local.exists().then_some(local)
        })
}

pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

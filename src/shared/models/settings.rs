use std::{
    env, fs, io,
    net::SocketAddr,
    path::{Path, PathBuf},
};
use serde::Deserialize;
use thiserror::Error;

const SETTINGS_FILENAME: &str = "settings.json";
const SETTINGS_PATH_VARIABLE: &str = "TASKBOARD_SETTINGS";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub tcp_socket_binding: String,
    pub tcp_socket_port: u16,
    #[serde(default = "default_database_path")]
    pub database_path: String,
    /// Used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// Empty means any origin.
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
    #[serde(default)]
    pub seed_demo_data: bool,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings file {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("cannot parse settings file {}: {source}", path.display())]
    Parse { path: PathBuf, source: serde_json::Error },
    #[error("invalid listen address {0}")]
    Address(String),
}

fn default_database_path() -> String {
    "taskboard.redb".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Settings {
    /// Load from `$TASKBOARD_SETTINGS`, or `settings.json` in the working directory.
    pub fn load() -> Result<Settings, SettingsError> {
        let path = env::var_os(SETTINGS_PATH_VARIABLE)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(SETTINGS_FILENAME));
        Settings::load_from(path)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Settings, SettingsError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, SettingsError> {
        let address = format!("{}:{}", self.tcp_socket_binding, self.tcp_socket_port);
        address.parse().map_err(|_| SettingsError::Address(address))
    }
}

//! Runtime configuration for the terminal binary, read from the environment.

use std::env;
use std::path::PathBuf;

use tracing::Level;

use tui_match3::core::GameConfig;

pub const DEFAULT_DATA_PATH: &str = "match3_profile.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub game: GameConfig,
    /// Profile store file (`MATCH3_DATA_PATH`)
    pub data_path: PathBuf,
    /// Log file; logging is off when unset (`MATCH3_LOG_PATH`)
    pub log_path: Option<PathBuf>,
    /// `MATCH3_LOG_LEVEL`
    pub log_level: Level,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let data_path = non_empty_var("MATCH3_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        let log_path = non_empty_var("MATCH3_LOG_PATH").map(PathBuf::from);

        let log_level = non_empty_var("MATCH3_LOG_LEVEL")
            .and_then(|s| s.parse().ok())
            .unwrap_or(Level::INFO);

        Self {
            game: GameConfig::from_env(),
            data_path,
            log_path,
            log_level,
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

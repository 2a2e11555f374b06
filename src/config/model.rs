use std::path::PathBuf;

use serde::Deserialize;

/// Default location of the history log; discovery appends `*` to pick up
/// rotated files next to it.
pub const DEFAULT_LOG_PATH: &str = "/var/log/apt/history.log";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub history: HistoryConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct HistoryConfig {
    /// Path prefix of the history log files.
    pub log_path: PathBuf,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
        }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;

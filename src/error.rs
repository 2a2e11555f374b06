use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AptLogError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Could not open file {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse file {path}: {reason}")]
    FileParse { path: PathBuf, reason: String },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, AptLogError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

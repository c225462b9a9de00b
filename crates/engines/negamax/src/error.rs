use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading engine weights or search settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("unknown profile '{0}' (expected one of: default, defensive, corners, mobility, endgame, tuned)")]
    UnknownProfile(String),
}

use std::path::PathBuf;

use reversi_core::GameError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid benchmark config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid player '{0}' (expected random, ai:<depth> or ai:<depth>:<profile>)")]
    PlayerSpec(String),

    #[error(transparent)]
    Engine(#[from] negamax_engine::ConfigError),

    #[error("illegal move from {player}: {source}")]
    Game {
        player: String,
        #[source]
        source: GameError,
    },

    #[error("search variants disagree at {phase} depth {depth}: {scores:?}")]
    ScoreMismatch {
        phase: String,
        depth: u8,
        scores: Vec<f64>,
    },
}

impl BenchError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BenchError::Io {
            path: path.into(),
            source,
        }
    }
}

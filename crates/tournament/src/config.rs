//! Player specifications and batch configuration files.
//!
//! A batch file lists the games to play:
//!
//! ```toml
//! output = "results.csv"
//! json_output = "results.json"
//! games_per_batch = 20
//! seed = 7
//!
//! [[batches]]
//! name = "random vs depth 2"
//! player1 = "random"
//! player2 = "ai:2"
//!
//! [[batches]]
//! player1 = "ai:3:tuned"
//! player2 = "ai:3:corners"
//! ```

use std::{fmt, fs, path::Path, path::PathBuf, str::FromStr};

use negamax_engine::{Profile, SearchConfig, SearchPlayer, Searcher};
use random_engine::RandomPlayer;
use reversi_core::Player;
use serde::{Deserialize, Serialize};

use crate::error::BenchError;

/// Which player to create for a benchmark seat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PlayerSpec {
    Random,
    Ai { depth: u8, profile: Profile },
}

impl PlayerSpec {
    pub fn ai(depth: u8) -> Self {
        PlayerSpec::Ai {
            depth,
            profile: Profile::Default,
        }
    }

    /// Label written to the `playerN_type` column.
    pub fn type_label(&self) -> &'static str {
        match self {
            PlayerSpec::Random => "RandomAI",
            PlayerSpec::Ai { .. } => "AIPlayer",
        }
    }

    pub fn depth(&self) -> Option<u8> {
        match self {
            PlayerSpec::Random => None,
            PlayerSpec::Ai { depth, .. } => Some(*depth),
        }
    }

    /// Fresh player. With a seed, random choices and search tie-breaks are
    /// reproducible.
    pub fn build(&self, seed: Option<u64>) -> Box<dyn Player> {
        match *self {
            PlayerSpec::Random => Box::new(match seed {
                Some(seed) => RandomPlayer::with_seed(seed),
                None => RandomPlayer::new(),
            }),
            PlayerSpec::Ai { depth, profile } => {
                let weights = *profile.weights();
                let searcher = match seed {
                    Some(seed) => Searcher::with_seed(weights, SearchConfig::default(), seed),
                    None => Searcher::new(weights, SearchConfig::default()),
                };
                Box::new(SearchPlayer::with_searcher(depth, searcher, self.to_string()))
            }
        }
    }
}

impl fmt::Display for PlayerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerSpec::Random => f.write_str("random"),
            PlayerSpec::Ai {
                depth,
                profile: Profile::Default,
            } => write!(f, "ai:{depth}"),
            PlayerSpec::Ai { depth, profile } => write!(f, "ai:{depth}:{profile}"),
        }
    }
}

impl FromStr for PlayerSpec {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || BenchError::PlayerSpec(s.to_string());
        let lowered = s.trim().to_ascii_lowercase();
        let mut parts = lowered.split(':');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some("random" | "randomai"), None, None, None) => Ok(PlayerSpec::Random),
            (Some("ai"), Some(depth), profile, None) => {
                let depth: u8 = depth.parse().map_err(|_| bad())?;
                if depth == 0 {
                    return Err(bad());
                }
                let profile = match profile {
                    Some(name) => name.parse()?,
                    None => Profile::Default,
                };
                Ok(PlayerSpec::Ai { depth, profile })
            }
            _ => Err(bad()),
        }
    }
}

impl TryFrom<String> for PlayerSpec {
    type Error = BenchError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PlayerSpec> for String {
    fn from(spec: PlayerSpec) -> Self {
        spec.to_string()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    #[serde(default)]
    pub name: Option<String>,
    pub player1: PlayerSpec,
    pub player2: PlayerSpec,
}

impl BatchConfig {
    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("{} vs {}", self.player1, self.player2))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default)]
    pub json_output: Option<PathBuf>,
    #[serde(default = "default_games")]
    pub games_per_batch: u32,
    /// Base seed for reproducible runs.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub batches: Vec<BatchConfig>,
}

fn default_output() -> PathBuf {
    PathBuf::from("benchmark_results.csv")
}

fn default_games() -> u32 {
    10
}

impl BenchmarkConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, BenchError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, BenchError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| BenchError::io(path, e))?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

//! Evaluation weight sets and the built-in profiles.
//!
//! A weight set carries one [`FeatureWeights`] row per game phase. Rows can
//! be loaded from TOML; any feature left out of a row weighs zero, so a file
//! only needs to name the features it cares about:
//!
//! ```toml
//! [opening]
//! mobility = 1.25
//! corner = 1.5
//!
//! [endgame]
//! discs = 2.0
//! ```

use std::{fmt, fs, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, eval::Phase};

/// Multipliers for each evaluation feature within a single phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureWeights {
    pub mobility: f64,
    pub corner: f64,
    pub risk: f64,
    pub frontier: f64,
    pub pst: f64,
    pub discs: f64,
    pub potential_mobility: f64,
    pub corner_access: f64,
    pub x_c_penalty: f64,
    pub stability: f64,
    pub parity: f64,
}

impl FeatureWeights {
    pub const ZERO: Self = Self::basic(0.0, 0.0, 0.0, 0.0, 0.0, 0.0);

    /// Row using only the six base features.
    pub const fn basic(
        mobility: f64,
        corner: f64,
        risk: f64,
        frontier: f64,
        pst: f64,
        discs: f64,
    ) -> Self {
        Self {
            mobility,
            corner,
            risk,
            frontier,
            pst,
            discs,
            potential_mobility: 0.0,
            corner_access: 0.0,
            x_c_penalty: 0.0,
            stability: 0.0,
            parity: 0.0,
        }
    }

    const fn with_advanced(
        self,
        potential_mobility: f64,
        corner_access: f64,
        x_c_penalty: f64,
        stability: f64,
        parity: f64,
    ) -> Self {
        Self {
            potential_mobility,
            corner_access,
            x_c_penalty,
            stability,
            parity,
            ..self
        }
    }
}

/// One weight row per phase.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvaluationWeights {
    #[serde(default)]
    pub opening: FeatureWeights,
    #[serde(default)]
    pub midgame: FeatureWeights,
    #[serde(default)]
    pub endgame: FeatureWeights,
}

impl EvaluationWeights {
    pub fn for_phase(&self, phase: Phase) -> &FeatureWeights {
        match phase {
            Phase::Opening => &self.opening,
            Phase::Midgame => &self.midgame,
            Phase::Endgame => &self.endgame,
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

impl Default for EvaluationWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

// =============================================================================
// Built-in profiles
// =============================================================================

//                                     mob   corner risk  front pst   discs
const DEFAULT_OPENING: FeatureWeights = FeatureWeights::basic(1.25, 1.5, 0.75, 0.75, 1.0, 0.1);
const DEFAULT_MIDGAME: FeatureWeights = FeatureWeights::basic(1.25, 1.5, 0.5, 1.0, 1.0, 0.5);
const DEFAULT_ENDGAME: FeatureWeights = FeatureWeights::basic(0.5, 1.25, 0.5, 0.5, 0.5, 1.5);

pub const DEFAULT_WEIGHTS: EvaluationWeights = EvaluationWeights {
    opening: DEFAULT_OPENING,
    midgame: DEFAULT_MIDGAME,
    endgame: DEFAULT_ENDGAME,
};

/// Heavy X-square risk avoidance before the endgame.
pub const DEFENSIVE_WEIGHTS: EvaluationWeights = EvaluationWeights {
    opening: FeatureWeights::basic(1.25, 1.5, 5.0, 0.75, 1.0, 0.1),
    midgame: FeatureWeights::basic(1.25, 1.5, 5.0, 1.0, 1.0, 0.5),
    endgame: DEFAULT_ENDGAME,
};

/// Corner grabbing and corner-adjacent caution in every phase.
pub const CORNERS_WEIGHTS: EvaluationWeights = EvaluationWeights {
    opening: FeatureWeights::basic(1.25, 5.0, 2.5, 0.75, 1.0, 0.1),
    midgame: FeatureWeights::basic(1.25, 5.0, 2.5, 1.0, 1.0, 0.5),
    endgame: FeatureWeights::basic(0.5, 5.0, 2.5, 0.5, 0.5, 1.5),
};

/// Keep options open and hold good squares early on.
pub const MOBILITY_WEIGHTS: EvaluationWeights = EvaluationWeights {
    opening: FeatureWeights::basic(5.0, 1.5, 0.75, 0.75, 2.5, 0.1),
    midgame: FeatureWeights::basic(5.0, 1.5, 0.5, 1.0, 2.5, 0.5),
    endgame: DEFAULT_ENDGAME,
};

/// Default play, then a hard push for disc count late.
pub const ENDGAME_WEIGHTS: EvaluationWeights = EvaluationWeights {
    opening: DEFAULT_OPENING,
    midgame: DEFAULT_MIDGAME,
    endgame: FeatureWeights::basic(0.5, 2.0, 0.5, 0.5, 1.0, 5.0),
};

/// Hand-tuned set that also enables the advanced features.
pub const TUNED_WEIGHTS: EvaluationWeights = EvaluationWeights {
    opening: FeatureWeights::basic(4.5, 3.5, 1.0, 0.5, 2.5, 0.5).with_advanced(1.0, 3.0, 2.0, 2.0, 0.0),
    midgame: FeatureWeights::basic(5.0, 4.0, 1.0, 1.0, 3.0, 1.0).with_advanced(1.0, 3.0, 2.0, 3.0, 0.0),
    endgame: FeatureWeights::basic(1.0, 4.0, 0.5, 0.5, 1.5, 5.0).with_advanced(0.5, 1.0, 0.5, 5.0, 1.0),
};

/// Named weight sets selectable from the command line or the menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    #[default]
    Default,
    Defensive,
    Corners,
    Mobility,
    Endgame,
    Tuned,
}

impl Profile {
    pub const ALL: [Profile; 6] = [
        Profile::Default,
        Profile::Defensive,
        Profile::Corners,
        Profile::Mobility,
        Profile::Endgame,
        Profile::Tuned,
    ];

    /// Identifier accepted by [`FromStr`].
    pub fn id(self) -> &'static str {
        match self {
            Profile::Default => "default",
            Profile::Defensive => "defensive",
            Profile::Corners => "corners",
            Profile::Mobility => "mobility",
            Profile::Endgame => "endgame",
            Profile::Tuned => "tuned",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Profile::Default => "Balanced",
            Profile::Defensive => "Defensive",
            Profile::Corners => "Corner hunter",
            Profile::Mobility => "Mobility",
            Profile::Endgame => "Endgame specialist",
            Profile::Tuned => "Tuned",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Profile::Default => "Even weighting across all base features",
            Profile::Defensive => "Strongly avoids X-squares next to empty corners",
            Profile::Corners => "Prioritises taking corners and guarding their neighbours",
            Profile::Mobility => "Maximises own options and square quality early on",
            Profile::Endgame => "Plays normally, then maximises final disc count",
            Profile::Tuned => "Strongest set, adds stability, parity and corner access",
        }
    }

    pub fn weights(self) -> &'static EvaluationWeights {
        match self {
            Profile::Default => &DEFAULT_WEIGHTS,
            Profile::Defensive => &DEFENSIVE_WEIGHTS,
            Profile::Corners => &CORNERS_WEIGHTS,
            Profile::Mobility => &MOBILITY_WEIGHTS,
            Profile::Endgame => &ENDGAME_WEIGHTS,
            Profile::Tuned => &TUNED_WEIGHTS,
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Profile {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Profile::ALL
            .into_iter()
            .find(|p| p.id() == wanted)
            .ok_or_else(|| ConfigError::UnknownProfile(s.to_string()))
    }
}

#[cfg(test)]
#[path = "weights_tests.rs"]
mod weights_tests;

//! Session configuration handed over by the host page.

use serde::{Deserialize, Serialize};

/// How strictly word data is validated at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadProfile {
    /// An empty corpus is a fatal error.
    #[default]
    Strict,
    /// An empty corpus is logged and yields an unplayable, empty deck.
    Production,
}

impl LoadProfile {
    pub fn from_production_flag(production: bool) -> Self {
        if production {
            Self::Production
        } else {
            Self::Strict
        }
    }
}

/// Per-game settings. The load profile is not part of it: the corpus is
/// loaded once for all games.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Mode id, falls back to classic when unknown or absent.
    pub mode: Option<String>,
    /// Fixed RNG seed for reproducible shuffles.
    pub seed: Option<u64>,
}

impl SessionConfig {
    pub fn mode_id(&self) -> &str {
        self.mode.as_deref().unwrap_or("")
    }
}

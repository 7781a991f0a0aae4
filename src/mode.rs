//! Round settings per game mode.

use log::warn;
use serde::{Deserialize, Serialize};

pub const DEFAULT_MODE: &str = "classic";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeSettings {
    pub round_seconds: u32,
    pub points_per_correct: i32,
}

const MODES: &[(&str, ModeSettings)] = &[
    (
        "classic",
        ModeSettings {
            round_seconds: 60,
            points_per_correct: 1,
        },
    ),
    (
        "quick",
        ModeSettings {
            round_seconds: 45,
            points_per_correct: 1,
        },
    ),
    (
        "custom",
        ModeSettings {
            round_seconds: 60,
            points_per_correct: 1,
        },
    ),
];

impl ModeSettings {
    pub fn classic() -> Self {
        MODES[0].1
    }

    /// Looks up a mode by id. Unknown ids fall back to classic, with a warning
    /// so that typos in host config are visible in the console.
    pub fn for_mode(mode_id: &str) -> Self {
        Self::lookup(mode_id).unwrap_or_else(|| {
            if !mode_id.is_empty() {
                warn!("unknown mode '{mode_id}', falling back to {DEFAULT_MODE}");
            }
            Self::classic()
        })
    }

    /// Round length in seconds, never zero.
    pub fn round_length(self) -> u32 {
        self.round_seconds.max(1)
    }

    pub fn lookup(mode_id: &str) -> Option<Self> {
        MODES
            .iter()
            .find(|(id, _)| *id == mode_id)
            .map(|(_, settings)| *settings)
    }
}

impl Default for ModeSettings {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_modes() {
        assert_eq!(ModeSettings::for_mode("classic").round_seconds, 60);
        assert_eq!(ModeSettings::for_mode("quick").round_seconds, 45);
        assert_eq!(ModeSettings::for_mode("custom").round_seconds, 60);
        assert!(MODES.iter().all(|(_, m)| m.round_seconds > 0));
    }

    #[test]
    fn test_unknown_mode_falls_back_to_classic() {
        assert_eq!(ModeSettings::lookup("blitz"), None);
        assert_eq!(ModeSettings::for_mode("blitz"), ModeSettings::classic());
        assert_eq!(ModeSettings::for_mode(""), ModeSettings::classic());
        assert_eq!(ModeSettings::default(), ModeSettings::classic());
    }

    #[test]
    fn test_round_length_is_never_zero() {
        let zero = ModeSettings {
            round_seconds: 0,
            points_per_correct: 1,
        };
        assert_eq!(zero.round_length(), 1);
        assert_eq!(ModeSettings::for_mode("quick").round_length(), 45);
    }
}

//! Static catalogue of the games and modes offered on the landing page.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMode {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub rules: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub scoring_label: &'static str,
    pub modes: &'static [GameMode],
}

pub const GAMES: &[GameDefinition] = &[GameDefinition {
    id: "taboo",
    name: "Slip Up",
    tagline: "Don't say the forbidden words.",
    description: "Describe the word without using the taboo terms.",
    scoring_label: "Correct answers add points, slips deduct points.",
    modes: &[
        GameMode {
            id: "classic",
            name: "Classic",
            description: "Standard 60-second rounds.",
            rules: &["60 seconds", "+1 point", "-1 slip"],
        },
        GameMode {
            id: "quick",
            name: "Quick",
            description: "Shorter 45-second rounds.",
            rules: &["45 seconds", "+1 point", "-1 slip"],
        },
    ],
}];

pub fn game_definition(game_id: &str) -> Option<&'static GameDefinition> {
    GAMES.iter().find(|game| game.id == game_id)
}

/// Mode of the taboo game by id, defaulting to its first mode.
pub fn game_mode(mode_id: Option<&str>) -> &'static GameMode {
    let modes = GAMES[0].modes;
    mode_id
        .and_then(|id| modes.iter().find(|mode| mode.id == id))
        .unwrap_or(&modes[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::ModeSettings;

    #[test]
    fn test_game_lookup() {
        assert_eq!(game_definition("taboo").map(|g| g.name), Some("Slip Up"));
        assert!(game_definition("charades").is_none());
    }

    #[test]
    fn test_mode_lookup_falls_back_to_first_mode() {
        assert_eq!(game_mode(Some("quick")).id, "quick");
        assert_eq!(game_mode(Some("nope")).id, "classic");
        assert_eq!(game_mode(None).id, "classic");
    }

    #[test]
    fn test_every_listed_mode_has_settings() {
        for mode in GAMES[0].modes {
            assert!(ModeSettings::lookup(mode.id).is_some(), "{}", mode.id);
        }
    }
}

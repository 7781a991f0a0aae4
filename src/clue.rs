//! Checking a spoken or typed clue against the current card.

use log::{debug, warn};
use regex::RegexSet;
use unidecode::unidecode;

use crate::card::Card;

/// Folds accents, lowercases, drops punctuation and collapses whitespace.
pub fn normalize_string(s: &str) -> String {
    unidecode(s)
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Compiled whole-word matcher for one card's forbidden words, the target
/// included. Build it once when the card is dealt and reuse it per clue.
#[derive(Debug, Clone)]
pub struct SlipMatcher {
    card_id: u32,
    words: Vec<String>,
    patterns: RegexSet,
}

impl SlipMatcher {
    pub fn new(card: &Card) -> Self {
        let (words, patterns): (Vec<String>, Vec<String>) = std::iter::once(&card.target)
            .chain(&card.taboo)
            .filter_map(|word| {
                let normalized = normalize_string(word);
                (!normalized.is_empty())
                    .then(|| (word.clone(), format!(r"\b{}\b", regex::escape(&normalized))))
            })
            .unzip();

        let patterns = RegexSet::new(&patterns).unwrap_or_else(|err| {
            warn!("cannot match taboo words of '{}': {err}", card.target);
            RegexSet::empty()
        });

        Self {
            card_id: card.id,
            words,
            patterns,
        }
    }

    pub fn card_id(&self) -> u32 {
        self.card_id
    }

    /// Forbidden words occurring in `clue`, in card order.
    pub fn find(&self, clue: &str) -> Vec<&str> {
        let clue = normalize_string(clue);
        if clue.is_empty() {
            return vec![];
        }

        let slips: Vec<&str> = self
            .patterns
            .matches(&clue)
            .into_iter()
            .map(|index| self.words[index].as_str())
            .collect();

        if !slips.is_empty() {
            debug!("clue for card {} slipped on {:?}", self.card_id, slips);
        }
        slips
    }
}

/// One-off check of `clue` against `card`. Prefer a kept [`SlipMatcher`]
/// when checking many clues for the same card.
pub fn find_slips(card: &Card, clue: &str) -> Vec<String> {
    SlipMatcher::new(card)
        .find(clue)
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> Card {
        Card {
            id: 1,
            target: "Crème brûlée".to_string(),
            taboo: vec![
                "dessert".to_string(),
                "Caramel".to_string(),
                "France".to_string(),
                "Wi-Fi".to_string(),
            ],
            category: "Food".to_string(),
        }
    }

    #[test]
    fn test_normalize_string() {
        assert_eq!(normalize_string("  HeLlO, WoRlD!  "), "hello world");
        assert_eq!(normalize_string("How are you?"), "how are you");
        assert_eq!(normalize_string("test-ing 123"), "testing 123");
        assert_eq!(normalize_string("Crème Brûlée"), "creme brulee");
    }

    #[test]
    fn test_find_slips_matches_whole_words() {
        let card = card();
        assert_eq!(find_slips(&card, "A sweet DESSERT from france!"), vec!["dessert", "France"]);
        assert!(find_slips(&card, "caramelized sugar on top").is_empty());
        assert_eq!(find_slips(&card, "the wifi is down"), vec!["Wi-Fi"]);
    }

    #[test]
    fn test_saying_the_target_is_a_slip() {
        let card = card();
        assert_eq!(find_slips(&card, "it's a creme brulee"), vec!["Crème brûlée"]);
    }

    #[test]
    fn test_empty_clue_has_no_slips() {
        assert!(find_slips(&card(), "  ?! ").is_empty());
    }

    #[test]
    fn test_matcher_is_reused_across_clues() {
        let card = card();
        let matcher = SlipMatcher::new(&card);
        assert_eq!(matcher.card_id(), 1);

        for clue in ["a dessert", "crème brûlée!", "nothing forbidden", "WI FI or wi-fi"] {
            assert_eq!(matcher.find(clue), find_slips(&card, clue), "{clue}");
        }
        assert_eq!(matcher.find("caramel and dessert"), vec!["dessert", "Caramel"]);
    }

    #[test]
    fn test_matcher_skips_words_that_normalize_to_nothing() {
        let card = Card {
            id: 2,
            target: "Question".to_string(),
            taboo: vec!["?!".to_string(), "ask".to_string()],
            category: "Things".to_string(),
        };
        assert_eq!(SlipMatcher::new(&card).find("just ask ?!"), vec!["ask"]);
    }
}

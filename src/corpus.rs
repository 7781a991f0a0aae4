//! Word corpus loading.
//!
//! Category metadata (`categoryKey -> { text }`) is merged with per-category
//! word tables (`target -> [taboo words]`) into one flat list of cards. Ids are
//! assigned sequentially from 1 in category-then-target order, so the same
//! input always yields the same ids.

use std::collections::HashSet;
use std::sync::Arc;

use log::{debug, error, info};
use serde::Deserialize;
use serde_json::Value;

use crate::card::Card;
use crate::config::LoadProfile;
use crate::error::{CorpusError, Result};

const BUNDLED_LANGUAGE: &str = "en";
const BUNDLED_CATEGORIES: &str = include_str!("../data/taboo/categories.json");
const BUNDLED_TABLES: &[(&str, &str)] = &[
    ("animals", include_str!("../data/taboo/en/animals.json")),
    ("food", include_str!("../data/taboo/en/food.json")),
    ("sports", include_str!("../data/taboo/en/sports.json")),
    ("things", include_str!("../data/taboo/en/things.json")),
    ("city-country", include_str!("../data/taboo/en/city-country.json")),
    ("web", include_str!("../data/taboo/en/web.json")),
];

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryMeta {
    pub text: String,
}

/// A word table entry as it appears in the source data. The taboo list is
/// kept as raw JSON since source files are not guaranteed to be well formed.
#[derive(Debug, Clone)]
pub struct RawEntry {
    pub target: String,
    pub taboo: Value,
}

#[derive(Debug, Clone)]
pub struct CategoryTable {
    pub key: String,
    pub label: String,
    pub entries: Vec<RawEntry>,
}

fn normalize_word(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Cleans a raw taboo list: non-strings and blanks are dropped, words are
/// trimmed, and duplicates or repeats of the target are removed
/// case-insensitively. First spelling wins.
pub fn clean_taboo_words(target: &str, taboo: &Value) -> Vec<String> {
    let Some(words) = taboo.as_array() else {
        return vec![];
    };

    let normalized_target = normalize_word(target);
    let mut seen = HashSet::with_capacity(words.len());
    let mut cleaned = Vec::with_capacity(words.len());

    for word in words.iter().filter_map(Value::as_str) {
        let trimmed = word.trim();
        if trimmed.is_empty() {
            continue;
        }

        let normalized = normalize_word(trimmed);
        if normalized == normalized_target || !seen.insert(normalized) {
            continue;
        }

        cleaned.push(trimmed.to_string());
    }

    cleaned
}

/// Flattens category tables into cards, dropping entries with a blank target
/// or no usable taboo words.
pub fn build_cards(tables: &[CategoryTable]) -> Vec<Card> {
    let mut cards = Vec::new();
    let mut id = 1;

    for table in tables {
        for entry in &table.entries {
            let target = entry.target.trim();
            let taboo = clean_taboo_words(target, &entry.taboo);

            if target.is_empty() || taboo.is_empty() {
                debug!("dropping entry '{}' in {}", entry.target, table.key);
                continue;
            }

            cards.push(Card {
                id,
                target: target.to_string(),
                taboo,
                category: table.label.clone(),
            });
            id += 1;
        }
    }

    cards
}

/// The full validated card set. Built once at startup and shared read-only
/// between sessions.
#[derive(Debug, Clone)]
pub struct Corpus {
    cards: Arc<[Card]>,
}

impl Corpus {
    pub fn new(cards: Vec<Card>, profile: LoadProfile) -> Result<Self> {
        if cards.is_empty() {
            match profile {
                LoadProfile::Strict => return Err(CorpusError::Empty),
                LoadProfile::Production => error!("taboo deck is empty, game is unplayable"),
            }
        }
        Ok(Self { cards: cards.into() })
    }

    pub fn from_tables(tables: &[CategoryTable], profile: LoadProfile) -> Result<Self> {
        Self::new(build_cards(tables), profile)
    }

    /// Parses a categories document of the shape `{ "<lang>": { "<key>": { "text": ".." } } }`
    /// and the word table for each key. Categories without a table are skipped.
    pub fn from_json(
        categories_json: &str,
        language: &str,
        tables: &[(&str, &str)],
        profile: LoadProfile,
    ) -> Result<Self> {
        let categories: Value =
            serde_json::from_str(categories_json).map_err(|source| CorpusError::Json {
                what: "categories".to_string(),
                source,
            })?;
        let categories = categories
            .get(language)
            .ok_or_else(|| CorpusError::MissingLanguage(language.to_string()))?
            .as_object()
            .ok_or_else(|| CorpusError::NotAnObject(format!("categories.{language}")))?;

        let mut parsed = Vec::with_capacity(categories.len());
        for (key, meta) in categories {
            let meta: CategoryMeta =
                serde_json::from_value(meta.clone()).map_err(|source| CorpusError::Json {
                    what: format!("category '{key}'"),
                    source,
                })?;

            let Some((_, raw)) = tables.iter().find(|(name, _)| name == key) else {
                debug!("no word table for category '{key}'");
                continue;
            };

            let table: Value = serde_json::from_str(raw).map_err(|source| CorpusError::Json {
                what: format!("word table '{key}'"),
                source,
            })?;
            let Value::Object(table) = table else {
                return Err(CorpusError::NotAnObject(format!("word table '{key}'")));
            };

            parsed.push(CategoryTable {
                key: key.clone(),
                label: meta.text,
                entries: table
                    .into_iter()
                    .map(|(target, taboo)| RawEntry { target, taboo })
                    .collect(),
            });
        }

        let corpus = Self::from_tables(&parsed, profile)?;
        info!("loaded {} cards from {} categories", corpus.len(), parsed.len());
        Ok(corpus)
    }

    /// The English word lists shipped with the crate.
    pub fn bundled(profile: LoadProfile) -> Result<Self> {
        Self::from_json(BUNDLED_CATEGORIES, BUNDLED_LANGUAGE, BUNDLED_TABLES, profile)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

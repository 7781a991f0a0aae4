//! Slip Up: a timed taboo word game.
//!
//! A player describes the word on the current card without saying any of its
//! forbidden words; the team swipes "Got It" or "Skip" until the round timer
//! runs out. This crate holds the game core (word corpus, shuffling, round
//! state machine, scoring) and a `wasm_bindgen` bridge for the web front end.

pub mod card;
pub mod clue;
pub mod config;
pub mod console;
pub mod corpus;
pub mod error;
pub mod mode;
pub mod registry;
pub mod round;
pub mod scoring;
pub mod shuffle;
pub mod swipe;
pub mod timer;
pub mod web;

pub use card::Card;
pub use clue::{find_slips, normalize_string, SlipMatcher};
pub use config::{LoadProfile, SessionConfig};
pub use corpus::{build_cards, clean_taboo_words, CategoryMeta, CategoryTable, Corpus, RawEntry};
pub use error::{CorpusError, Result};
pub use mode::{ModeSettings, DEFAULT_MODE};
pub use registry::{game_definition, game_mode, GameDefinition, GameMode, GAMES};
pub use round::{Intent, Phase, RoundSnapshot, Session, TickOutcome};
pub use scoring::{create_scores, sort_scores, top_score, update_score, RoundSummary, ScoreLine, TeamId};
pub use shuffle::shuffle;
pub use swipe::{format_clock, resolve_swipe, LOW_TIME_SECONDS, SWIPE_THRESHOLD};
pub use timer::{RoundTimer, TimerTicket};

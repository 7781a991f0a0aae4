use serde::{Deserialize, Serialize};

/// One word-guessing unit: the secret word and the words that may not be said.
/// Whether a clue says any of them is decided by [`crate::clue::find_slips`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: u32,
    pub target: String,
    pub taboo: Vec<String>,
    pub category: String,
}

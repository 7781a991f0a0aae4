//! Round results and team score lines.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub got: u32,
    pub skipped: u32,
    pub slipped: u32,
    pub points: i64,
}

impl RoundSummary {
    pub fn new(got: u32, skipped: u32, slipped: u32, points_per_correct: i32) -> Self {
        Self {
            got,
            skipped,
            slipped,
            points: i64::from(got) * i64::from(points_per_correct) - i64::from(slipped),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamId {
    Red,
    Blue,
}

impl TeamId {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreLine {
    pub id: String,
    pub name: String,
    pub points: i64,
}

pub fn create_scores<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Vec<ScoreLine> {
    entries
        .into_iter()
        .map(|(id, name)| ScoreLine {
            id: id.to_string(),
            name: name.to_string(),
            points: 0,
        })
        .collect()
}

/// Adds `delta` to the line with `id`. Other lines are untouched; an unknown
/// id changes nothing.
pub fn update_score(scores: &mut [ScoreLine], id: &str, delta: i64, floor_at_zero: bool) {
    for score in scores.iter_mut().filter(|score| score.id == id) {
        let next = score.points + delta;
        score.points = if floor_at_zero { next.max(0) } else { next };
    }
}

/// Highest score first. Ties keep their original order.
pub fn sort_scores(scores: &[ScoreLine]) -> Vec<ScoreLine> {
    let mut sorted = scores.to_vec();
    sorted.sort_by(|left, right| right.points.cmp(&left.points));
    sorted
}

pub fn top_score(scores: &[ScoreLine]) -> i64 {
    scores.iter().map(|score| score.points).fold(0, i64::max)
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Course;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HandicapIndex {
    pub value: Option<f64>,
    pub used: usize,
    pub total: usize,
}

impl HandicapIndex {
    #[must_use]
    pub fn empty() -> Self {
        Self {
            value: None,
            used: 0,
            total: 0,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NetPoint {
    pub id: i64,
    pub date: NaiveDateTime,
    pub gross: i32,
    pub handicap: f64,
    pub net: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Milestone {
    pub date: NaiveDateTime,
    pub player: String,
    pub ord: String,
    pub what: String,
    pub course: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BestRound {
    pub score: i32,
    pub by: String,
    pub player_id: i64,
    pub date: NaiveDateTime,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct HoleDifficulty {
    /// 1-based hole number.
    pub hole: usize,
    /// Average strokes relative to par on this hole.
    pub over: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BestPlayer {
    pub player_id: i64,
    pub name: String,
    pub avg: f64,
    pub n: usize,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CourseStats {
    pub course: Course,
    pub average_at_course: Option<f64>,
    pub best_at_course: Option<BestRound>,
    pub easiest: Option<HoleDifficulty>,
    pub hardest: Option<HoleDifficulty>,
    pub best_player: Option<BestPlayer>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub average: Option<f64>,
    pub best_score: Option<i32>,
    pub most_played_course: Option<String>,
    pub handicap: HandicapIndex,
}

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::utils::deserialize_optional_round_date;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub id: i64,
    pub player_id: i64,
    pub course_id: i64,
    pub date: NaiveDateTime,
    pub holes: Vec<i32>,
    pub total: i32,
    pub adj_gross: i32,
    pub differential: f64,
}

/// A submitted scorecard before totals and the differential are derived.
#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct RoundDraft {
    pub player_id: i64,
    pub course_id: i64,
    pub holes: Vec<i32>,
    pub adj_gross: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_round_date")]
    pub date: Option<NaiveDateTime>,
}

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RoundEdit {
    pub holes: Option<Vec<i32>>,
    pub adj_gross: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_optional_round_date")]
    pub date: Option<NaiveDateTime>,
}

impl RoundEdit {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holes.is_none() && self.adj_gross.is_none() && self.date.is_none()
    }
}

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RoundFilter {
    pub player_id: Option<i64>,
    pub course_id: Option<i64>,
}

/// A round joined with the names and pars milestone detection reports on.
#[derive(Clone, Debug)]
pub struct RoundWithCourse {
    pub round: Round,
    pub player_name: String,
    pub course_name: String,
    pub hole_pars: Vec<i32>,
}

/// A round at a known course, joined with the name of whoever played it.
#[derive(Clone, Debug)]
pub struct RoundWithPlayerName {
    pub round: Round,
    pub player_name: String,
}

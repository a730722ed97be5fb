use log::info;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::error::AppError;
use crate::model::{NewCourse, RoundDraft, deserialize_optional_round_date};
use crate::storage::{Storage, StorageError};
use chrono::NaiveDateTime;

const DEFAULT_COURSES: &[(&str, &str)] = &[
    ("Antill Park Country Golf Club", "Picton"),
    ("Georges River Golf Course", "Georges Hall"),
    ("Brighton Lakes Recreation & Golf Club", "Moorebank"),
    ("The Vale Golf Course", "Russell Vale"),
    ("Camden Golf Club", "Narellan"),
];

/// format we have is this:
/// { "players": ["Name", ...]
/// , "courses": [{"name": "Course", "location": "Town", "holePars": [<18 ints>], "rating": <float>, "slope": <int>}, ...]
/// , "rounds": [{"player": "Name", "course": "Course", "date": "2025-03-01", "holes": [<18 ints>], "adjGross": <int>}, ...]
/// }
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PrefillDocument {
    #[serde(default)]
    pub players: Vec<String>,
    #[serde(default)]
    pub courses: Vec<NewCourse>,
    #[serde(default)]
    pub rounds: Vec<PrefillRound>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PrefillRound {
    pub player: String,
    pub course: String,
    #[serde(default, deserialize_with = "deserialize_optional_round_date")]
    pub date: Option<NaiveDateTime>,
    pub holes: Vec<i32>,
    pub adj_gross: Option<i32>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PrefillSummary {
    pub players: usize,
    pub courses: usize,
    pub rounds: usize,
}

/// Loads players, courses and rounds from a json document. Players and
/// courses that already exist by name are reused; rounds always go through
/// the normal submission path so their totals and differentials are derived.
///
/// # Errors
///
/// Will return `Err` if the document is malformed, a round names an unknown
/// player or course, or a write fails
pub fn db_prefill(json: &Value, storage: &dyn Storage) -> Result<PrefillSummary, AppError> {
    let doc = PrefillDocument::deserialize(json)?;
    let mut summary = PrefillSummary::default();

    let mut players: HashMap<String, i64> = storage
        .list_players()?
        .into_iter()
        .map(|p| (p.name, p.id))
        .collect();
    for name in &doc.players {
        if !players.contains_key(name.trim()) {
            let player = storage.add_player(name)?;
            players.insert(player.name, player.id);
            summary.players += 1;
        }
    }

    let mut courses: HashMap<String, i64> = storage
        .list_courses()?
        .into_iter()
        .map(|c| (c.name, c.id))
        .collect();
    for course in &doc.courses {
        if !courses.contains_key(course.name.trim()) {
            let added = storage.add_course(course)?;
            courses.insert(added.name, added.id);
            summary.courses += 1;
        }
    }

    for round in &doc.rounds {
        let player_id = *players
            .get(round.player.trim())
            .ok_or_else(|| AppError::Invalid(format!("unknown player '{}'", round.player)))?;
        let course_id = *courses
            .get(round.course.trim())
            .ok_or_else(|| AppError::Invalid(format!("unknown course '{}'", round.course)))?;
        storage.submit_round(&RoundDraft {
            player_id,
            course_id,
            holes: round.holes.clone(),
            adj_gross: round.adj_gross,
            date: round.date,
        })?;
        summary.rounds += 1;
    }

    info!(
        "prefill added {} players, {} courses, {} rounds",
        summary.players, summary.courses, summary.rounds
    );
    Ok(summary)
}

/// Seeds the default course list with flat par-4 layouts.
///
/// # Errors
///
/// Will return `Err` if a write fails for any reason other than the course already existing
pub fn seed_default_courses(storage: &dyn Storage) -> Result<usize, AppError> {
    let mut added = 0;
    for (name, location) in DEFAULT_COURSES {
        let course = NewCourse {
            name: (*name).to_string(),
            location: Some((*location).to_string()),
            ..NewCourse::default()
        };
        match storage.add_course(&course) {
            Ok(_) => added += 1,
            Err(StorageError::Conflict(_)) => {}
            Err(e) => return Err(e.into()),
        }
    }
    info!("seeded {added} default courses");
    Ok(added)
}

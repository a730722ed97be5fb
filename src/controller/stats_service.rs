use std::collections::HashMap;

use crate::error::AppError;
use crate::model::{CourseStats, Milestone, NetPoint, PlayerStats};
use crate::score::{aggregate_course_stats, compute_net_curve, detect_milestones, player_stats};
use crate::storage::Storage;

// Every call re-reads history; concurrent submissions are serialised by storage.

/// # Errors
///
/// Will return `Err` if the player is unknown or the storage read fails
pub fn get_player_stats(storage: &dyn Storage, player_id: i64) -> Result<PlayerStats, AppError> {
    storage.get_player(player_id)?;
    let mut rounds = storage.player_rounds_chronological(player_id)?;
    rounds.reverse();
    let course_names: HashMap<i64, String> = storage
        .list_courses()?
        .into_iter()
        .map(|c| (c.id, c.name))
        .collect();
    Ok(player_stats(&rounds, |id| course_names.get(&id).cloned())?)
}

/// # Errors
///
/// Will return `Err` if the player is unknown or the storage read fails
pub fn get_net_curve(storage: &dyn Storage, player_id: i64) -> Result<Vec<NetPoint>, AppError> {
    storage.get_player(player_id)?;
    let rounds = storage.player_rounds_chronological(player_id)?;
    Ok(compute_net_curve(&rounds)?)
}

/// # Errors
///
/// Will return `Err` if the course is unknown or the storage read fails
pub fn get_course_stats(storage: &dyn Storage, course_id: i64) -> Result<CourseStats, AppError> {
    let course = storage.get_course(course_id)?;
    let rounds = storage.rounds_at_course(course_id)?;
    Ok(aggregate_course_stats(&course, &rounds)?)
}

/// # Errors
///
/// Will return `Err` if the storage read fails
pub fn get_milestones(storage: &dyn Storage) -> Result<Vec<Milestone>, AppError> {
    let rounds = storage.rounds_with_course_chronological()?;
    Ok(detect_milestones(&rounds)?)
}

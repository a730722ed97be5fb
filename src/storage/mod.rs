pub mod sqlite;

pub use sqlite::SqliteStorage;

use thiserror::Error;

use crate::model::{
    Course, CourseEdit, NewCourse, Player, Round, RoundDraft, RoundEdit, RoundFilter,
    RoundWithCourse, RoundWithPlayerName,
};
use crate::score::EngineError;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error(transparent)]
    Invalid(#[from] EngineError),
    #[error("stored value is corrupt: {0}")]
    Corrupt(String),
    #[error("storage lock poisoned")]
    Poisoned,
}

/// Persistence for players, courses and rounds.
///
/// Every write that touches a round re-derives its total and differential
/// from the course as stored at that moment, inside one transaction. Reads
/// return fresh history; nothing is cached between calls.
pub trait Storage: Send + Sync {
    fn list_players(&self) -> Result<Vec<Player>, StorageError>;
    fn get_player(&self, player_id: i64) -> Result<Player, StorageError>;
    fn add_player(&self, name: &str) -> Result<Player, StorageError>;

    fn list_courses(&self) -> Result<Vec<Course>, StorageError>;
    fn get_course(&self, course_id: i64) -> Result<Course, StorageError>;
    fn add_course(&self, course: &NewCourse) -> Result<Course, StorageError>;
    /// Applies `edit`; a rating or slope change recomputes the differential
    /// of every round played at the course.
    fn update_course(&self, course_id: i64, edit: &CourseEdit) -> Result<Course, StorageError>;

    /// Rounds matching `filter`, newest first.
    fn list_rounds(&self, filter: &RoundFilter) -> Result<Vec<Round>, StorageError>;
    fn get_round(&self, round_id: i64) -> Result<Round, StorageError>;
    fn submit_round(&self, draft: &RoundDraft) -> Result<Round, StorageError>;
    fn edit_round(&self, round_id: i64, edit: &RoundEdit) -> Result<Round, StorageError>;
    fn delete_round(&self, round_id: i64) -> Result<(), StorageError>;

    /// One player's rounds, oldest first.
    fn player_rounds_chronological(&self, player_id: i64) -> Result<Vec<Round>, StorageError>;
    /// Every round of every player joined with names and pars, oldest first.
    fn rounds_with_course_chronological(&self) -> Result<Vec<RoundWithCourse>, StorageError>;
    /// Rounds at one course with the player's name, newest first.
    fn rounds_at_course(&self, course_id: i64) -> Result<Vec<RoundWithPlayerName>, StorageError>;
}

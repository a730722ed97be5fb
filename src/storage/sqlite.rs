use chrono::NaiveDateTime;
use log::debug;
use rusqlite::types::Type;
use rusqlite::{Connection, ErrorCode, OptionalExtension, Row, Transaction, params};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use super::{Storage, StorageError};
use crate::model::{
    Course, CourseEdit, DEFAULT_RATING, DEFAULT_SLOPE, NewCourse, Player, Round, RoundDraft,
    RoundEdit, RoundFilter, RoundWithCourse, RoundWithPlayerName, now_naive,
};
use crate::score::{EngineError, derive_scorecard, validate_course_layout};

pub const TABLES_AND_DDL: &[(&str, &str)] = &[
    ("player", include_str!("../sql/schema/sqlite/01_player.sql")),
    ("course", include_str!("../sql/schema/sqlite/02_course.sql")),
    ("round", include_str!("../sql/schema/sqlite/03_round.sql")),
];

const COURSE_COLUMNS: &str = "c.course_id, c.name, c.location, c.hole_pars, c.rating, c.slope";
const ROUND_COLUMNS: &str =
    "r.round_id, r.player_id, r.course_id, r.played_at, r.holes, r.total, r.adj_gross, r.differential";

/// SQLite-backed [`Storage`]. Cloning shares the same connection.
#[derive(Clone)]
pub struct SqliteStorage {
    conn: Arc<Mutex<Connection>>,
}

fn json_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Vec<i32>> {
    let raw: String = row.get(idx)?;
    serde_json::from_str(&raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

fn to_json(values: &[i32]) -> Result<String, StorageError> {
    serde_json::to_string(values).map_err(|e| StorageError::Corrupt(e.to_string()))
}

fn course_from_row(row: &Row<'_>) -> rusqlite::Result<Course> {
    Ok(Course {
        id: row.get(0)?,
        name: row.get(1)?,
        location: row.get(2)?,
        hole_pars: json_column(row, 3)?,
        rating: row.get(4)?,
        slope: row.get(5)?,
    })
}

/// Reads the round columns starting at `offset`.
fn round_from_row(row: &Row<'_>, offset: usize) -> rusqlite::Result<Round> {
    Ok(Round {
        id: row.get(offset)?,
        player_id: row.get(offset + 1)?,
        course_id: row.get(offset + 2)?,
        date: row.get::<_, NaiveDateTime>(offset + 3)?,
        holes: json_column(row, offset + 4)?,
        total: row.get(offset + 5)?,
        adj_gross: row.get(offset + 6)?,
        differential: row.get(offset + 7)?,
    })
}

fn map_unique(err: rusqlite::Error, what: &str) -> StorageError {
    match &err {
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation => {
            StorageError::Conflict(format!("{what} already exists"))
        }
        _ => StorageError::Sqlite(err),
    }
}

fn course_in_tx(tx: &Transaction<'_>, course_id: i64) -> Result<Course, StorageError> {
    tx.query_row(
        &format!("SELECT {COURSE_COLUMNS} FROM course c WHERE c.course_id = ?1"),
        params![course_id],
        course_from_row,
    )
    .optional()?
    .ok_or_else(|| StorageError::NotFound(format!("course {course_id}")))
}

fn round_in_tx(tx: &Transaction<'_>, round_id: i64) -> Result<Round, StorageError> {
    tx.query_row(
        &format!("SELECT {ROUND_COLUMNS} FROM round r WHERE r.round_id = ?1"),
        params![round_id],
        |row| round_from_row(row, 0),
    )
    .optional()?
    .ok_or_else(|| StorageError::NotFound(format!("round {round_id}")))
}

impl SqliteStorage {
    /// # Errors
    ///
    /// Will return `Err` if the database file cannot be opened
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        Self::from_connection(Connection::open(path)?)
    }

    /// # Errors
    ///
    /// Will return `Err` if sqlite cannot allocate the database
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, StorageError> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StorageError> {
        self.conn.lock().map_err(|_| StorageError::Poisoned)
    }

    /// Creates any missing tables and indexes.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the ddl fails
    pub fn init_schema(&self) -> Result<(), StorageError> {
        let conn = self.lock()?;
        for (table, ddl) in TABLES_AND_DDL {
            debug!("ensuring table {table}");
            conn.execute_batch(ddl)?;
        }
        Ok(())
    }

    /// Runs arbitrary sql inside one transaction.
    ///
    /// # Errors
    ///
    /// Will return `Err` if any statement fails; nothing is applied in that case
    pub fn execute_script(&self, sql: &str) -> Result<(), StorageError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        tx.execute_batch(sql)?;
        tx.commit()?;
        Ok(())
    }

    /// # Errors
    ///
    /// Will return `Err` if the count query fails
    pub fn course_count(&self) -> Result<i64, StorageError> {
        Ok(self
            .lock()?
            .query_row("SELECT COUNT(*) FROM course", [], |row| row.get(0))?)
    }
}

impl Storage for SqliteStorage {
    fn list_players(&self) -> Result<Vec<Player>, StorageError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare("SELECT player_id, name FROM player ORDER BY name")?;
        let players = stmt
            .query_map([], |row| {
                Ok(Player {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(players)
    }

    fn get_player(&self, player_id: i64) -> Result<Player, StorageError> {
        self.lock()?
            .query_row(
                "SELECT player_id, name FROM player WHERE player_id = ?1",
                params![player_id],
                |row| {
                    Ok(Player {
                        id: row.get(0)?,
                        name: row.get(1)?,
                    })
                },
            )
            .optional()?
            .ok_or_else(|| StorageError::NotFound(format!("player {player_id}")))
    }

    fn add_player(&self, name: &str) -> Result<Player, StorageError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(EngineError::InvalidInput("player name required".to_string()).into());
        }
        let conn = self.lock()?;
        conn.execute("INSERT INTO player (name) VALUES (?1)", params![name])
            .map_err(|e| map_unique(e, &format!("player '{name}'")))?;
        let id = conn.last_insert_rowid();
        debug!("added player {id} '{name}'");
        Ok(Player {
            id,
            name: name.to_string(),
        })
    }

    fn list_courses(&self) -> Result<Vec<Course>, StorageError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {COURSE_COLUMNS} FROM course c ORDER BY c.name"
        ))?;
        let courses = stmt
            .query_map([], course_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(courses)
    }

    fn get_course(&self, course_id: i64) -> Result<Course, StorageError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        let course = course_in_tx(&tx, course_id)?;
        tx.commit()?;
        Ok(course)
    }

    fn add_course(&self, course: &NewCourse) -> Result<Course, StorageError> {
        let name = course.name.trim();
        if name.is_empty() {
            return Err(EngineError::InvalidInput("course name required".to_string()).into());
        }
        let hole_pars = course.pars_or_default();
        let rating = course.rating.unwrap_or(DEFAULT_RATING);
        let slope = course.slope.unwrap_or(DEFAULT_SLOPE);
        validate_course_layout(Some(&hole_pars), Some(rating), Some(slope))?;
        let location = course
            .location
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string);

        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO course (name, location, hole_pars, rating, slope) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![name, location, to_json(&hole_pars)?, rating, slope],
        )
        .map_err(|e| map_unique(e, &format!("course '{name}'")))?;
        let id = conn.last_insert_rowid();
        debug!("added course {id} '{name}'");
        Ok(Course {
            id,
            name: name.to_string(),
            location,
            hole_pars,
            rating,
            slope,
        })
    }

    fn update_course(&self, course_id: i64, edit: &CourseEdit) -> Result<Course, StorageError> {
        if edit.is_empty() {
            return Err(EngineError::InvalidInput("no fields to update".to_string()).into());
        }
        validate_course_layout(edit.hole_pars.as_deref(), edit.rating, edit.slope)?;

        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        let mut course = course_in_tx(&tx, course_id)?;
        if let Some(pars) = &edit.hole_pars {
            course.hole_pars.clone_from(pars);
        }
        if let Some(rating) = edit.rating {
            course.rating = rating;
        }
        if let Some(slope) = edit.slope {
            course.slope = slope;
        }
        tx.execute(
            "UPDATE course SET hole_pars = ?1, rating = ?2, slope = ?3 WHERE course_id = ?4",
            params![to_json(&course.hole_pars)?, course.rating, course.slope, course_id],
        )?;

        if edit.touches_difficulty() {
            let rounds = {
                let mut stmt = tx.prepare(&format!(
                    "SELECT {ROUND_COLUMNS} FROM round r WHERE r.course_id = ?1"
                ))?;
                stmt.query_map(params![course_id], |row| round_from_row(row, 0))?
                    .collect::<Result<Vec<_>, _>>()?
            };
            for round in &rounds {
                let card = derive_scorecard(&round.holes, Some(round.adj_gross), &course)?;
                tx.execute(
                    "UPDATE round SET differential = ?1 WHERE round_id = ?2",
                    params![card.differential, round.id],
                )?;
            }
            debug!(
                "course {course_id} difficulty changed, recomputed {} differentials",
                rounds.len()
            );
        }
        tx.commit()?;
        Ok(course)
    }

    fn list_rounds(&self, filter: &RoundFilter) -> Result<Vec<Round>, StorageError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {ROUND_COLUMNS} FROM round r
              WHERE (?1 IS NULL OR r.player_id = ?1)
                AND (?2 IS NULL OR r.course_id = ?2)
              ORDER BY r.played_at DESC, r.round_id DESC"
        ))?;
        let rounds = stmt
            .query_map(params![filter.player_id, filter.course_id], |row| {
                round_from_row(row, 0)
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rounds)
    }

    fn get_round(&self, round_id: i64) -> Result<Round, StorageError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        let round = round_in_tx(&tx, round_id)?;
        tx.commit()?;
        Ok(round)
    }

    fn submit_round(&self, draft: &RoundDraft) -> Result<Round, StorageError> {
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        let exists: Option<i64> = tx
            .query_row(
                "SELECT player_id FROM player WHERE player_id = ?1",
                params![draft.player_id],
                |row| row.get(0),
            )
            .optional()?;
        if exists.is_none() {
            return Err(StorageError::NotFound(format!("player {}", draft.player_id)));
        }
        let course = course_in_tx(&tx, draft.course_id)?;
        let card = derive_scorecard(&draft.holes, draft.adj_gross, &course)?;
        let date = draft.date.unwrap_or_else(now_naive);

        tx.execute(
            "INSERT INTO round (player_id, course_id, played_at, holes, total, adj_gross, differential)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                draft.player_id,
                draft.course_id,
                date,
                to_json(&draft.holes)?,
                card.total,
                card.adj_gross,
                card.differential
            ],
        )?;
        let id = tx.last_insert_rowid();
        tx.commit()?;
        debug!(
            "player {} submitted round {id}: total {} differential {}",
            draft.player_id, card.total, card.differential
        );

        Ok(Round {
            id,
            player_id: draft.player_id,
            course_id: draft.course_id,
            date,
            holes: draft.holes.clone(),
            total: card.total,
            adj_gross: card.adj_gross,
            differential: card.differential,
        })
    }

    fn edit_round(&self, round_id: i64, edit: &RoundEdit) -> Result<Round, StorageError> {
        if edit.is_empty() {
            return Err(EngineError::InvalidInput("no fields to update".to_string()).into());
        }
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        let mut round = round_in_tx(&tx, round_id)?;
        let course = course_in_tx(&tx, round.course_id)?;

        // an adjusted gross that merely mirrored the old total follows the new one
        let adj_gross = match edit.adj_gross {
            Some(adj) => Some(adj),
            None if round.adj_gross != round.total => Some(round.adj_gross),
            None => None,
        };
        let holes = edit.holes.as_ref().unwrap_or(&round.holes);
        let card = derive_scorecard(holes, adj_gross, &course)?;

        if let Some(h) = &edit.holes {
            round.holes.clone_from(h);
        }
        if let Some(date) = edit.date {
            round.date = date;
        }
        round.total = card.total;
        round.adj_gross = card.adj_gross;
        round.differential = card.differential;

        tx.execute(
            "UPDATE round SET played_at = ?1, holes = ?2, total = ?3, adj_gross = ?4, differential = ?5
              WHERE round_id = ?6",
            params![
                round.date,
                to_json(&round.holes)?,
                round.total,
                round.adj_gross,
                round.differential,
                round_id
            ],
        )?;
        tx.commit()?;
        debug!("edited round {round_id}");
        Ok(round)
    }

    fn delete_round(&self, round_id: i64) -> Result<(), StorageError> {
        let removed = self
            .lock()?
            .execute("DELETE FROM round WHERE round_id = ?1", params![round_id])?;
        if removed == 0 {
            return Err(StorageError::NotFound(format!("round {round_id}")));
        }
        debug!("deleted round {round_id}");
        Ok(())
    }

    fn player_rounds_chronological(&self, player_id: i64) -> Result<Vec<Round>, StorageError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {ROUND_COLUMNS} FROM round r
              WHERE r.player_id = ?1
              ORDER BY r.played_at ASC, r.round_id ASC"
        ))?;
        let rounds = stmt
            .query_map(params![player_id], |row| round_from_row(row, 0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rounds)
    }

    fn rounds_with_course_chronological(&self) -> Result<Vec<RoundWithCourse>, StorageError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {ROUND_COLUMNS}, p.name, c.name, c.hole_pars
               FROM round r
               JOIN player p ON p.player_id = r.player_id
               JOIN course c ON c.course_id = r.course_id
              ORDER BY r.played_at ASC, r.round_id ASC"
        ))?;
        let rounds = stmt
            .query_map([], |row| {
                Ok(RoundWithCourse {
                    round: round_from_row(row, 0)?,
                    player_name: row.get(8)?,
                    course_name: row.get(9)?,
                    hole_pars: json_column(row, 10)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rounds)
    }

    fn rounds_at_course(&self, course_id: i64) -> Result<Vec<RoundWithPlayerName>, StorageError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {ROUND_COLUMNS}, p.name
               FROM round r
               JOIN player p ON p.player_id = r.player_id
              WHERE r.course_id = ?1
              ORDER BY r.played_at DESC, r.round_id DESC"
        ))?;
        let rounds = stmt
            .query_map(params![course_id], |row| {
                Ok(RoundWithPlayerName {
                    round: round_from_row(row, 0)?,
                    player_name: row.get(8)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rounds)
    }
}

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use rusty_handicap::controller::db_prefill::db_prefill;
use rusty_handicap::model::{Round, RoundWithCourse};
use rusty_handicap::storage::SqliteStorage;

pub const FIXTURE: &str = include_str!("../test6_dbprefill.json");

/// Fresh in-memory storage loaded from the shared fixture.
pub fn setup_test_storage() -> Result<SqliteStorage, Box<dyn std::error::Error>> {
    let _ = env_logger::builder().is_test(true).try_init();
    let storage = SqliteStorage::open_in_memory()?;
    storage.init_schema()?;
    let json = serde_json::from_str(FIXTURE)?;
    db_prefill(&json, &storage)?;
    Ok(storage)
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .expect("valid test date")
}

/// Pars 5 and 3 on the first two holes, par 4 everywhere else. Par 72.
pub fn mixed_pars() -> Vec<i32> {
    let mut pars = vec![4; 18];
    pars[0] = 5;
    pars[1] = 3;
    pars
}

/// A card adding up to `total`, built from 4s; strokes are added or removed
/// from hole 3 onwards only, so holes 1 and 2 never produce eagles.
pub fn card(total: i32) -> Vec<i32> {
    let mut holes = vec![4; 18];
    let mut diff = total - 72;
    let mut i = 2;
    while diff != 0 {
        if diff > 0 {
            holes[i] += 1;
            diff -= 1;
        } else {
            holes[i] -= 1;
            diff += 1;
        }
        i = if i == 17 { 2 } else { i + 1 };
    }
    holes
}

pub fn round(id: i64, player_id: i64, date: NaiveDateTime, holes: Vec<i32>, differential: f64) -> Round {
    Round {
        id,
        player_id,
        course_id: 1,
        date,
        total: holes.iter().sum(),
        adj_gross: holes.iter().sum(),
        holes,
        differential,
    }
}

pub fn with_course(round: Round, player_name: &str, pars: &[i32]) -> RoundWithCourse {
    RoundWithCourse {
        round,
        player_name: player_name.to_string(),
        course_name: "Test Links".to_string(),
        hole_pars: pars.to_vec(),
    }
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

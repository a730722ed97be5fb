use serde::{Deserialize, Serialize};

use super::HOLES;

pub const DEFAULT_RATING: f64 = 72.0;
pub const DEFAULT_SLOPE: i32 = 113;
pub const DEFAULT_HOLE_PAR: i32 = 4;
pub const SLOPE_RANGE: std::ops::RangeInclusive<i32> = 55..=155;
pub const PAR_RANGE: std::ops::RangeInclusive<i32> = 3..=6;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub location: Option<String>,
    pub hole_pars: Vec<i32>,
    pub rating: f64,
    pub slope: i32,
}

impl Course {
    #[must_use]
    pub fn par_total(&self) -> i32 {
        self.hole_pars.iter().sum()
    }
}

/// Payload for creating a course. Missing fields fall back to a flat par-72 layout.
#[derive(Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    pub name: String,
    pub location: Option<String>,
    pub hole_pars: Option<Vec<i32>>,
    pub rating: Option<f64>,
    pub slope: Option<i32>,
}

impl NewCourse {
    #[must_use]
    pub fn pars_or_default(&self) -> Vec<i32> {
        self.hole_pars
            .clone()
            .unwrap_or_else(|| vec![DEFAULT_HOLE_PAR; HOLES])
    }
}

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct CourseEdit {
    pub hole_pars: Option<Vec<i32>>,
    pub rating: Option<f64>,
    pub slope: Option<i32>,
}

impl CourseEdit {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hole_pars.is_none() && self.rating.is_none() && self.slope.is_none()
    }

    /// Whether applying this edit changes the inputs of stored differentials.
    #[must_use]
    pub fn touches_difficulty(&self) -> bool {
        self.rating.is_some() || self.slope.is_some()
    }
}

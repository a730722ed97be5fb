//! Pure scoring and handicap computations.
//!
//! Nothing in here touches storage; callers pass in the history they read
//! and get back plain model values.

pub mod course_stats;
pub mod differential;
pub mod error;
pub mod handicap;
pub mod milestones;
pub mod net_curve;
pub mod player_stats;
pub mod scorecard;

pub use course_stats::aggregate_course_stats;
pub use differential::{compute_differential, round1};
pub use error::EngineError;
pub use handicap::{HandicapPolicy, compute_handicap_index, handicap_for_history};
pub use milestones::{MilestoneKind, detect_milestones, ordinal};
pub use net_curve::compute_net_curve;
pub use player_stats::player_stats;
pub use scorecard::{Scorecard, derive_scorecard, validate_course_layout, validate_holes};

use crate::model::HOLES;

pub(crate) fn ensure_eighteen(values: &[i32], what: &str) -> Result<(), EngineError> {
    if values.len() == HOLES {
        Ok(())
    } else {
        Err(EngineError::InvalidInput(format!(
            "{what} must have {HOLES} entries, got {}",
            values.len()
        )))
    }
}

pub(crate) fn ensure_finite(value: f64, what: &'static str) -> Result<f64, EngineError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(EngineError::NonFinite(what))
    }
}

use super::{EngineError, compute_differential, ensure_eighteen};
use crate::model::{Course, PAR_RANGE, SLOPE_RANGE};

/// Highest stroke count accepted on a single hole.
pub const MAX_HOLE_SCORE: i32 = 20;

/// The derived columns of a round: never supplied by a client.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scorecard {
    pub total: i32,
    pub adj_gross: i32,
    pub differential: f64,
}

/// Checks a hole-by-hole card: 18 entries, each between 1 and [`MAX_HOLE_SCORE`].
///
/// # Errors
///
/// Will return `Err` on a wrong length or an out-of-range score
pub fn validate_holes(holes: &[i32]) -> Result<(), EngineError> {
    ensure_eighteen(holes, "holes")?;
    if let Some((i, s)) = holes
        .iter()
        .enumerate()
        .find(|(_, s)| !(1..=MAX_HOLE_SCORE).contains(*s))
    {
        return Err(EngineError::InvalidInput(format!(
            "hole {} score {s} is outside 1..={MAX_HOLE_SCORE}",
            i + 1
        )));
    }
    Ok(())
}

/// Total, adjusted gross and differential for a card played at `course`.
/// The adjusted gross defaults to the total.
///
/// # Errors
///
/// Will return `Err` if the card is malformed or the differential is not finite
pub fn derive_scorecard(
    holes: &[i32],
    adj_gross: Option<i32>,
    course: &Course,
) -> Result<Scorecard, EngineError> {
    validate_holes(holes)?;
    let total = holes.iter().sum();
    let adj_gross = adj_gross.unwrap_or(total);
    if adj_gross <= 0 {
        return Err(EngineError::InvalidInput(format!(
            "adjusted gross {adj_gross} must be positive"
        )));
    }
    let differential = compute_differential(adj_gross, course.rating, course.slope)?;
    Ok(Scorecard {
        total,
        adj_gross,
        differential,
    })
}

/// Checks the editable parts of a course: 18 pars in 3..=6, a finite rating
/// and a slope inside the published range.
///
/// # Errors
///
/// Will return `Err` naming the first offending field
pub fn validate_course_layout(
    hole_pars: Option<&[i32]>,
    rating: Option<f64>,
    slope: Option<i32>,
) -> Result<(), EngineError> {
    if let Some(pars) = hole_pars {
        ensure_eighteen(pars, "hole pars")?;
        if let Some(p) = pars.iter().find(|p| !PAR_RANGE.contains(*p)) {
            return Err(EngineError::InvalidInput(format!(
                "par {p} is outside {}..={}",
                PAR_RANGE.start(),
                PAR_RANGE.end()
            )));
        }
    }
    if let Some(r) = rating {
        if !r.is_finite() || r <= 0.0 {
            return Err(EngineError::InvalidInput(format!("rating {r} is not usable")));
        }
    }
    if let Some(s) = slope {
        if !SLOPE_RANGE.contains(&s) {
            return Err(EngineError::InvalidInput(format!(
                "slope {s} is outside {}..={}",
                SLOPE_RANGE.start(),
                SLOPE_RANGE.end()
            )));
        }
    }
    Ok(())
}

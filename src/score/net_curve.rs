use super::handicap::index_with_policy;
use super::{EngineError, HandicapPolicy, ensure_finite};
use crate::model::{NetPoint, Round};

/// Replays the handicap rule forward over oldest-first rounds.
///
/// Each point carries the index as it stood *before* that round was played:
/// the first round always sees 0, later rounds see the index over every
/// earlier differential. Net is gross minus the index rounded to a
/// whole stroke.
///
/// # Errors
///
/// Will return `Err` if a stored differential is NaN or infinite
pub fn compute_net_curve(rounds_chronological: &[Round]) -> Result<Vec<NetPoint>, EngineError> {
    net_curve_with_policy(rounds_chronological, &HandicapPolicy::USGA_APPROX)
}

/// # Errors
///
/// Will return `Err` if a stored differential is NaN or infinite
pub fn net_curve_with_policy(
    rounds_chronological: &[Round],
    policy: &HandicapPolicy,
) -> Result<Vec<NetPoint>, EngineError> {
    let mut prior: Vec<f64> = Vec::with_capacity(rounds_chronological.len());
    let mut curve = Vec::with_capacity(rounds_chronological.len());

    for round in rounds_chronological {
        let handicap = if prior.is_empty() {
            0.0
        } else {
            index_with_policy(&prior, policy)?
                .value
                .unwrap_or(0.0)
        };

        #[allow(clippy::cast_possible_truncation)]
        let strokes = ensure_finite(handicap.round(), "handicap")? as i32;
        curve.push(NetPoint {
            id: round.id,
            date: round.date,
            gross: round.total,
            handicap,
            net: round.total - strokes,
        });
        prior.push(round.differential);
    }

    Ok(curve)
}

use ahash::RandomState;
use std::collections::HashMap;

use super::{EngineError, HandicapPolicy, ensure_finite, handicap_for_history};
use crate::model::{HandicapIndex, PlayerStats, Round};

/// Summary for one player. `rounds_most_recent_first` is the player's full
/// history, newest first; `course_name` resolves a round's course.
///
/// # Errors
///
/// Will return `Err` if a differential in the handicap window is not finite
pub fn player_stats<F>(
    rounds_most_recent_first: &[Round],
    course_name: F,
) -> Result<PlayerStats, EngineError>
where
    F: Fn(i64) -> Option<String>,
{
    if rounds_most_recent_first.is_empty() {
        return Ok(PlayerStats {
            average: None,
            best_score: None,
            most_played_course: None,
            handicap: HandicapIndex::empty(),
        });
    }

    let totals: Vec<i32> = rounds_most_recent_first.iter().map(|r| r.total).collect();
    #[allow(clippy::cast_precision_loss)]
    let average = totals.iter().map(|&t| f64::from(t)).sum::<f64>() / totals.len() as f64;
    let best_score = totals.iter().copied().min();

    let mut plays: HashMap<String, usize, RandomState> = HashMap::default();
    for round in rounds_most_recent_first {
        if let Some(name) = course_name(round.course_id) {
            *plays.entry(name).or_insert(0) += 1;
        }
    }
    let most_played_course = plays
        .into_iter()
        .min_by(|(a_name, a_n), (b_name, b_n)| b_n.cmp(a_n).then_with(|| a_name.cmp(b_name)))
        .map(|(name, _)| name);

    let diffs: Vec<f64> = rounds_most_recent_first
        .iter()
        .map(|r| r.differential)
        .collect();
    let handicap = handicap_for_history(&diffs, &HandicapPolicy::USGA_APPROX)?;

    Ok(PlayerStats {
        average: Some(ensure_finite(average, "average")?),
        best_score,
        most_played_course,
        handicap,
    })
}

use super::{EngineError, ensure_eighteen, ensure_finite};
use crate::model::{
    BestPlayer, BestRound, Course, CourseStats, HOLES, HoleDifficulty, RoundWithPlayerName,
};

struct PlayerTotals<'a> {
    player_id: i64,
    name: &'a str,
    totals: Vec<i32>,
}

#[allow(clippy::cast_precision_loss)]
fn mean(sum: f64, n: usize) -> f64 {
    sum / n as f64
}

/// Averages, best round, hole difficulty and best player for one course.
///
/// Ties go to whichever candidate was seen first in `rounds_at_course`.
///
/// # Errors
///
/// Will return `Err` if the course or a round does not have 18 holes
pub fn aggregate_course_stats(
    course: &Course,
    rounds_at_course: &[RoundWithPlayerName],
) -> Result<CourseStats, EngineError> {
    ensure_eighteen(&course.hole_pars, "course pars")?;

    let Some(first) = rounds_at_course.first() else {
        return Ok(CourseStats {
            course: course.clone(),
            average_at_course: None,
            best_at_course: None,
            easiest: None,
            hardest: None,
            best_player: None,
        });
    };

    let n = rounds_at_course.len();
    let mut total_sum = 0.0;
    let mut best = first;
    let mut hole_sums = [0.0_f64; HOLES];
    let mut players: Vec<PlayerTotals<'_>> = Vec::new();

    for entry in rounds_at_course {
        let round = &entry.round;
        ensure_eighteen(&round.holes, "round holes")?;
        total_sum += f64::from(round.total);
        if round.total < best.round.total {
            best = entry;
        }
        for (sum, &score) in hole_sums.iter_mut().zip(&round.holes) {
            *sum += f64::from(score);
        }
        match players.iter_mut().find(|p| p.player_id == round.player_id) {
            Some(p) => p.totals.push(round.total),
            None => players.push(PlayerTotals {
                player_id: round.player_id,
                name: &entry.player_name,
                totals: vec![round.total],
            }),
        }
    }

    let over: Vec<f64> = hole_sums
        .iter()
        .zip(&course.hole_pars)
        .map(|(&sum, &par)| mean(sum, n) - f64::from(par))
        .collect();
    let (mut easiest, mut hardest) = (0, 0);
    for (i, &ov) in over.iter().enumerate() {
        if ov < over[easiest] {
            easiest = i;
        }
        if ov > over[hardest] {
            hardest = i;
        }
    }

    let mut best_player: Option<BestPlayer> = None;
    for p in &players {
        let avg = mean(p.totals.iter().map(|&t| f64::from(t)).sum(), p.totals.len());
        if best_player.as_ref().is_none_or(|b| avg < b.avg) {
            best_player = Some(BestPlayer {
                player_id: p.player_id,
                name: p.name.to_string(),
                avg,
                n: p.totals.len(),
            });
        }
    }

    Ok(CourseStats {
        course: course.clone(),
        average_at_course: Some(ensure_finite(mean(total_sum, n), "course average")?),
        best_at_course: Some(BestRound {
            score: best.round.total,
            by: best.player_name.clone(),
            player_id: best.round.player_id,
            date: best.round.date,
        }),
        easiest: Some(HoleDifficulty {
            hole: easiest + 1,
            over: over[easiest],
        }),
        hardest: Some(HoleDifficulty {
            hole: hardest + 1,
            over: over[hardest],
        }),
        best_player,
    })
}

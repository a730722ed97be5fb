use ahash::RandomState;
use std::collections::HashMap;
use std::fmt;

use super::{EngineError, ensure_eighteen};
use crate::model::{Milestone, RoundWithCourse};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MilestoneKind {
    Under100,
    Under90,
    Under80,
    UnderPlusFive,
    ScoringPar,
    ScoringUnderPar,
    HoleInOne,
    Eagle,
    Albatross,
}

impl MilestoneKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MilestoneKind::Under100 => "under 100",
            MilestoneKind::Under90 => "under 90",
            MilestoneKind::Under80 => "under 80",
            MilestoneKind::UnderPlusFive => "under +5",
            MilestoneKind::ScoringPar => "scoring par",
            MilestoneKind::ScoringUnderPar => "scoring under par",
            MilestoneKind::HoleInOne => "hole in one",
            MilestoneKind::Eagle => "eagle",
            MilestoneKind::Albatross => "albatross",
        }
    }
}

impl fmt::Display for MilestoneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `1` is spelled out, everything else gets an English suffix.
#[must_use]
pub fn ordinal(n: u32) -> String {
    if n == 1 {
        return "first".to_string();
    }
    let suffix = match (n % 100, n % 10) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

#[derive(Debug, Default, Clone)]
struct PlayerProgress {
    under_100: bool,
    under_90: bool,
    under_80: bool,
    under_plus_five: bool,
    par: u32,
    under_par: u32,
    hole_in_one: u32,
    eagle: u32,
    albatross: u32,
}

/// Fold state: per-player progress plus every event emitted so far.
#[derive(Default)]
struct MilestoneScan {
    by_player: HashMap<i64, PlayerProgress, RandomState>,
    events: Vec<Milestone>,
}

impl MilestoneScan {
    fn observe(mut self, entry: &RoundWithCourse) -> Result<Self, EngineError> {
        let round = &entry.round;
        ensure_eighteen(&round.holes, "round holes")?;
        ensure_eighteen(&entry.hole_pars, "course pars")?;

        let par_total: i32 = entry.hole_pars.iter().sum();
        let relative = round.total - par_total;
        let progress = self.by_player.entry(round.player_id).or_default();
        let mut found: Vec<(String, MilestoneKind)> = Vec::new();

        let firsts = [
            (&mut progress.under_100, round.total < 100, MilestoneKind::Under100),
            (&mut progress.under_90, round.total < 90, MilestoneKind::Under90),
            (&mut progress.under_80, round.total < 80, MilestoneKind::Under80),
            (&mut progress.under_plus_five, relative <= 5, MilestoneKind::UnderPlusFive),
        ];
        for (seen, hit, kind) in firsts {
            if hit && !*seen {
                *seen = true;
                found.push((ordinal(1), kind));
            }
        }

        if relative == 0 {
            progress.par += 1;
            found.push((ordinal(progress.par), MilestoneKind::ScoringPar));
        }
        if relative < 0 {
            progress.under_par += 1;
            found.push((ordinal(progress.under_par), MilestoneKind::ScoringUnderPar));
        }

        for (&score, &par) in round.holes.iter().zip(&entry.hole_pars) {
            if score == 1 {
                progress.hole_in_one += 1;
                found.push((ordinal(progress.hole_in_one), MilestoneKind::HoleInOne));
            }
            match par - score {
                2 => {
                    progress.eagle += 1;
                    found.push((ordinal(progress.eagle), MilestoneKind::Eagle));
                }
                3 => {
                    progress.albatross += 1;
                    found.push((ordinal(progress.albatross), MilestoneKind::Albatross));
                }
                _ => {}
            }
        }

        self.events
            .extend(found.into_iter().map(|(ord, kind)| Milestone {
                date: round.date,
                player: entry.player_name.clone(),
                ord,
                what: kind.to_string(),
                course: entry.course_name.clone(),
            }));
        Ok(self)
    }

    fn finish(mut self) -> Vec<Milestone> {
        // stable: same-day events keep detection order
        self.events.sort_by(|a, b| b.date.cmp(&a.date));
        self.events
    }
}

/// Scans oldest-first rounds of every player and reports achievements newest-first.
///
/// # Errors
///
/// Will return `Err` if a round or its course does not have 18 entries
pub fn detect_milestones(
    all_rounds_chronological: &[RoundWithCourse],
) -> Result<Vec<Milestone>, EngineError> {
    all_rounds_chronological
        .iter()
        .try_fold(MilestoneScan::default(), MilestoneScan::observe)
        .map(MilestoneScan::finish)
}

mod common;

use common::{card, day, mixed_pars, round, with_course};
use rusty_handicap::model::{Milestone, RoundWithCourse};
use rusty_handicap::score::{EngineError, MilestoneKind, detect_milestones};

fn alice_progression() -> Vec<RoundWithCourse> {
    let pars = mixed_pars();
    [98, 97, 89, 79, 77, 72, 72, 70]
        .iter()
        .zip(1..)
        .map(|(&total, d)| with_course(round(d, 1, day(2025, 1, d as u32), card(total), 0.0), "Alice", &pars))
        .collect()
}

fn labels(events: &[Milestone]) -> Vec<(String, String)> {
    events
        .iter()
        .map(|e| (e.ord.clone(), e.what.clone()))
        .collect()
}

fn pair(ord: &str, what: MilestoneKind) -> (String, String) {
    (ord.to_string(), what.to_string())
}

#[test]
fn test4_score_thresholds_newest_first() -> Result<(), EngineError> {
    let events = detect_milestones(&alice_progression())?;
    assert_eq!(
        labels(&events),
        vec![
            pair("first", MilestoneKind::ScoringUnderPar),
            pair("2nd", MilestoneKind::ScoringPar),
            pair("first", MilestoneKind::ScoringPar),
            pair("first", MilestoneKind::UnderPlusFive),
            pair("first", MilestoneKind::Under80),
            pair("first", MilestoneKind::Under90),
            pair("first", MilestoneKind::Under100),
        ]
    );
    assert_eq!(events[0].date, day(2025, 1, 8));
    assert_eq!(events[6].date, day(2025, 1, 1));
    assert!(events.iter().all(|e| e.player == "Alice" && e.course == "Test Links"));
    Ok(())
}

#[test]
fn test4_first_time_thresholds_fire_once_per_player() -> Result<(), EngineError> {
    let pars = mixed_pars();
    let rounds = vec![
        with_course(round(1, 1, day(2025, 2, 1), card(99), 0.0), "Alice", &pars),
        with_course(round(2, 2, day(2025, 2, 2), card(104), 0.0), "Bob", &pars),
        with_course(round(3, 1, day(2025, 2, 3), card(95), 0.0), "Alice", &pars),
        with_course(round(4, 2, day(2025, 2, 4), card(96), 0.0), "Bob", &pars),
        with_course(round(5, 1, day(2025, 2, 5), card(91), 0.0), "Alice", &pars),
        with_course(round(6, 2, day(2025, 2, 6), card(93), 0.0), "Bob", &pars),
    ];
    let events = detect_milestones(&rounds)?;
    let under_100 = |who: &str| {
        events
            .iter()
            .filter(|e| e.player == who && e.what == MilestoneKind::Under100.as_str())
            .count()
    };
    assert_eq!(under_100("Alice"), 1);
    assert_eq!(under_100("Bob"), 1);
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].player, "Bob");
    assert_eq!(events[0].date, day(2025, 2, 4));
    Ok(())
}

#[test]
fn test4_hole_achievements_count_per_occurrence() -> Result<(), EngineError> {
    let pars = mixed_pars();
    let mut first = card(72);
    first[0] = 3; // eagle on the par 5
    first[1] = 1; // ace on the par 3, also an eagle
    let mut second = card(72);
    second[0] = 2; // albatross on the par 5

    let rounds = vec![
        with_course(round(1, 2, day(2025, 3, 10), first, 0.0), "Bob", &pars),
        with_course(round(2, 2, day(2025, 3, 11), second, 0.0), "Bob", &pars),
    ];
    let events = detect_milestones(&rounds)?;
    assert_eq!(
        labels(&events),
        vec![
            pair("2nd", MilestoneKind::ScoringUnderPar),
            pair("first", MilestoneKind::Albatross),
            pair("first", MilestoneKind::Under100),
            pair("first", MilestoneKind::Under90),
            pair("first", MilestoneKind::Under80),
            pair("first", MilestoneKind::UnderPlusFive),
            pair("first", MilestoneKind::ScoringUnderPar),
            pair("first", MilestoneKind::Eagle),
            pair("first", MilestoneKind::HoleInOne),
            pair("2nd", MilestoneKind::Eagle),
        ]
    );
    Ok(())
}

#[test]
fn test4_counters_are_per_player() -> Result<(), EngineError> {
    let pars = mixed_pars();
    let rounds: Vec<RoundWithCourse> = (1..=4)
        .map(|i| {
            let (player, name) = if i % 2 == 0 { (2, "Bob") } else { (1, "Alice") };
            with_course(round(i, player, day(2025, 4, i as u32), card(72), 0.0), name, &pars)
        })
        .collect();
    let events = detect_milestones(&rounds)?;
    let pars_for = |who: &str| -> Vec<String> {
        events
            .iter()
            .filter(|e| e.player == who && e.what == "scoring par")
            .map(|e| e.ord.clone())
            .collect()
    };
    assert_eq!(pars_for("Alice"), vec!["2nd", "first"]);
    assert_eq!(pars_for("Bob"), vec!["2nd", "first"]);
    Ok(())
}

#[test]
fn test4_malformed_round_fails_the_whole_scan() {
    let pars = mixed_pars();
    let mut rounds = alice_progression();
    rounds.push(with_course(
        round(99, 1, day(2025, 1, 20), vec![4; 9], 0.0),
        "Alice",
        &pars,
    ));
    assert!(matches!(
        detect_milestones(&rounds),
        Err(EngineError::InvalidInput(_))
    ));
}

#[test]
fn test4_no_rounds_no_milestones() -> Result<(), EngineError> {
    assert!(detect_milestones(&[])?.is_empty());
    Ok(())
}

mod common;

use common::{approx, day, mixed_pars, round};
use rusty_handicap::model::{Course, RoundWithPlayerName};
use rusty_handicap::score::{EngineError, aggregate_course_stats};

fn test_links(pars: Vec<i32>) -> Course {
    Course {
        id: 1,
        name: "Test Links".to_string(),
        location: Some("Testville".to_string()),
        hole_pars: pars,
        rating: 72.0,
        slope: 113,
    }
}

fn played(id: i64, player_id: i64, name: &str, d: u32, holes: Vec<i32>) -> RoundWithPlayerName {
    RoundWithPlayerName {
        round: round(id, player_id, day(2025, 5, d), holes, 0.0),
        player_name: name.to_string(),
    }
}

fn holes_with(base: i32, changes: &[(usize, i32)]) -> Vec<i32> {
    let mut holes = vec![base; 18];
    for &(i, v) in changes {
        holes[i] = v;
    }
    holes
}

#[test]
fn test5_no_rounds_gives_empty_stats() -> Result<(), EngineError> {
    let course = test_links(mixed_pars());
    let stats = aggregate_course_stats(&course, &[])?;
    assert_eq!(stats.course, course);
    assert!(stats.average_at_course.is_none());
    assert!(stats.best_at_course.is_none());
    assert!(stats.easiest.is_none());
    assert!(stats.hardest.is_none());
    assert!(stats.best_player.is_none());
    Ok(())
}

#[test]
fn test5_averages_best_round_and_best_player() -> Result<(), EngineError> {
    let course = test_links(mixed_pars());
    let rounds = vec![
        played(3, 1, "Alice", 20, vec![5; 18]),
        played(2, 2, "Bob", 12, holes_with(4, &[(5, 6), (17, 7)])),
        played(1, 1, "Alice", 3, holes_with(4, &[(17, 8)])),
    ];
    let stats = aggregate_course_stats(&course, &rounds)?;

    assert!(approx(stats.average_at_course.unwrap_or_default(), 81.0));

    let best = stats.best_at_course.expect("best round");
    assert_eq!(best.score, 76);
    assert_eq!(best.by, "Alice");
    assert_eq!(best.player_id, 1);
    assert_eq!(best.date, day(2025, 5, 3));

    // Alice averages 83 over two rounds, Bob 77 over one
    let best_player = stats.best_player.expect("best player");
    assert_eq!(best_player.name, "Bob");
    assert_eq!(best_player.player_id, 2);
    assert_eq!(best_player.n, 1);
    assert!(approx(best_player.avg, 77.0));

    let easiest = stats.easiest.expect("easiest");
    assert_eq!(easiest.hole, 1);
    assert!(approx(easiest.over, 13.0 / 3.0 - 5.0));
    let hardest = stats.hardest.expect("hardest");
    assert_eq!(hardest.hole, 18);
    assert!(approx(hardest.over, 20.0 / 3.0 - 4.0));
    Ok(())
}

#[test]
fn test5_ties_go_to_first_seen() -> Result<(), EngineError> {
    let course = test_links(vec![4; 18]);
    let rounds = vec![
        played(1, 2, "Bob", 9, vec![4; 18]),
        played(2, 1, "Alice", 8, vec![4; 18]),
    ];
    let stats = aggregate_course_stats(&course, &rounds)?;

    let best = stats.best_at_course.expect("best round");
    assert_eq!(best.by, "Bob");
    assert_eq!(stats.best_player.expect("best player").name, "Bob");
    assert_eq!(stats.easiest.expect("easiest").hole, 1);
    assert_eq!(stats.hardest.expect("hardest").hole, 1);
    Ok(())
}

#[test]
fn test5_course_without_eighteen_pars_is_rejected() {
    let course = test_links(vec![4; 9]);
    assert!(matches!(
        aggregate_course_stats(&course, &[]),
        Err(EngineError::InvalidInput(_))
    ));
}

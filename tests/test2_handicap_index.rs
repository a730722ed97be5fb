mod common;

use rusty_handicap::model::HandicapIndex;
use rusty_handicap::score::{
    EngineError, HandicapPolicy, compute_handicap_index, handicap_for_history,
};

#[test]
fn test2_empty_history_has_no_index() -> Result<(), EngineError> {
    assert_eq!(compute_handicap_index(&[])?, HandicapIndex::empty());
    assert_eq!(
        compute_handicap_index(&[])?,
        HandicapIndex {
            value: None,
            used: 0,
            total: 0
        }
    );
    Ok(())
}

#[test]
fn test2_best_two_of_five() -> Result<(), EngineError> {
    let idx = compute_handicap_index(&[10.0, 12.0, 8.0, 15.0, 9.0])?;
    assert_eq!(idx.used, 2);
    assert_eq!(idx.total, 5);
    assert_eq!(idx.value, Some(8.2));
    Ok(())
}

#[test]
fn test2_used_count_bands() -> Result<(), EngineError> {
    let expected = [
        1, 1, 1, 2, 2, 2, 3, 3, 4, 4, 4, 5, 5, 6, 6, 6, 7, 7, 8,
    ];
    for n in 1..20_usize {
        let diffs: Vec<f64> = (0..n).map(|i| 30.0 - i as f64).collect();
        let idx = compute_handicap_index(&diffs)?;
        assert_eq!(idx.used, expected[n - 1], "n = {n}");
        assert_eq!(idx.total, n);
    }
    for n in [20, 21, 35] {
        let diffs = vec![12.0; n];
        assert_eq!(compute_handicap_index(&diffs)?.used, 8);
    }
    Ok(())
}

#[test]
fn test2_single_round_uses_it() -> Result<(), EngineError> {
    let idx = compute_handicap_index(&[20.0])?;
    assert_eq!(idx.used, 1);
    assert_eq!(idx.value, Some(19.2));
    Ok(())
}

#[test]
fn test2_order_does_not_matter() -> Result<(), EngineError> {
    let a = compute_handicap_index(&[14.1, 9.7, 22.3, 11.0, 18.8, 7.4, 13.3])?;
    let b = compute_handicap_index(&[7.4, 22.3, 13.3, 9.7, 11.0, 14.1, 18.8])?;
    assert_eq!(a, b);
    Ok(())
}

#[test]
fn test2_history_is_cut_to_the_window() -> Result<(), EngineError> {
    // the 20 most recent are 10..29, older rounds are all scratch
    let mut history: Vec<f64> = (10..30).map(f64::from).collect();
    history.extend([0.0; 5]);

    let idx = handicap_for_history(&history, &HandicapPolicy::USGA_APPROX)?;
    assert_eq!(idx.total, 20);
    assert_eq!(idx.used, 8);
    // mean(10..=17) = 13.5, * 0.96 = 12.96
    assert_eq!(idx.value, Some(13.0));
    Ok(())
}

#[test]
fn test2_non_finite_differential_is_an_error() {
    assert!(matches!(
        compute_handicap_index(&[10.0, f64::NAN]),
        Err(EngineError::InvalidInput(_))
    ));
}

mod common;

use common::{approx, mixed_pars};
use rusty_handicap::model::Course;
use rusty_handicap::score::{EngineError, compute_differential, derive_scorecard, validate_holes};

#[test]
fn test1_standard_slope_vector() {
    assert_eq!(compute_differential(92, 72.0, 113), Ok(20.0));
}

#[test]
fn test1_steeper_slope_rounds_to_a_tenth() {
    // 13 * 113 / 120 = 12.2416..
    assert_eq!(compute_differential(85, 72.0, 120), Ok(12.2));
}

#[test]
fn test1_score_below_rating_is_negative() {
    assert_eq!(compute_differential(70, 72.0, 113), Ok(-2.0));
    assert_eq!(compute_differential(70, 71.3, 125), Ok(-1.2));
}

#[test]
fn test1_zero_slope_uses_standard_slope() {
    assert_eq!(
        compute_differential(90, 70.5, 0),
        compute_differential(90, 70.5, 113)
    );
}

#[test]
fn test1_never_more_than_one_decimal() -> Result<(), EngineError> {
    for gross in 60..130 {
        for slope in [55, 98, 113, 127, 131, 155] {
            for rating in [67.4, 70.0, 72.3, 75.9] {
                let d = compute_differential(gross, rating, slope)?;
                assert!(approx((d * 10.0).round(), d * 10.0), "{d} has extra digits");
                assert_eq!(compute_differential(gross, rating, slope)?, d);
            }
        }
    }
    Ok(())
}

#[test]
fn test1_scorecard_defaults_adjusted_gross_to_total() -> Result<(), EngineError> {
    let course = Course {
        id: 1,
        name: "Test Links".to_string(),
        location: None,
        hole_pars: mixed_pars(),
        rating: 72.0,
        slope: 113,
    };
    let holes = vec![5; 18];
    let card = derive_scorecard(&holes, None, &course)?;
    assert_eq!(card.total, 90);
    assert_eq!(card.adj_gross, 90);
    assert_eq!(card.differential, 18.0);

    let capped = derive_scorecard(&holes, Some(86), &course)?;
    assert_eq!(capped.total, 90);
    assert_eq!(capped.adj_gross, 86);
    assert_eq!(capped.differential, 14.0);
    Ok(())
}

#[test]
fn test1_malformed_cards_are_rejected() {
    assert!(matches!(
        validate_holes(&[4; 17]),
        Err(EngineError::InvalidInput(_))
    ));
    let mut holes = vec![4; 18];
    holes[7] = 0;
    assert!(matches!(
        validate_holes(&holes),
        Err(EngineError::InvalidInput(msg)) if msg.contains("hole 8")
    ));
}

use super::{EngineError, ensure_finite, round1};
use crate::model::HandicapIndex;

/// The "best N of last M" rule and its constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandicapPolicy {
    /// How many of the most recent differentials are considered.
    pub window: usize,
    /// Differentials used once the window is full.
    pub full_band_used: usize,
    /// Share of differentials used while the window is still filling.
    pub partial_fraction: f64,
    pub multiplier: f64,
}

impl HandicapPolicy {
    pub const USGA_APPROX: Self = Self {
        window: 20,
        full_band_used: 8,
        partial_fraction: 0.4,
        multiplier: 0.96,
    };

    #[must_use]
    pub fn used_count(&self, total: usize) -> usize {
        if total >= self.window {
            self.full_band_used
        } else {
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let n = (total as f64 * self.partial_fraction).round() as usize;
            n.max(1)
        }
    }
}

/// Rolling index over differentials the caller has already cut down to the
/// window. Order does not matter for the result; only the lowest values are used.
///
/// # Errors
///
/// Will return `Err` if any differential is NaN or infinite
pub fn compute_handicap_index(differentials: &[f64]) -> Result<HandicapIndex, EngineError> {
    index_with_policy(differentials, &HandicapPolicy::USGA_APPROX)
}

/// Same as [`compute_handicap_index`], but slices the most-recent-first
/// history down to the policy window first.
///
/// # Errors
///
/// Will return `Err` if any differential inside the window is NaN or infinite
pub fn handicap_for_history(
    most_recent_first: &[f64],
    policy: &HandicapPolicy,
) -> Result<HandicapIndex, EngineError> {
    let end = most_recent_first.len().min(policy.window);
    index_with_policy(&most_recent_first[..end], policy)
}

pub(crate) fn index_with_policy(
    differentials: &[f64],
    policy: &HandicapPolicy,
) -> Result<HandicapIndex, EngineError> {
    let total = differentials.len();
    if total == 0 {
        return Ok(HandicapIndex::empty());
    }
    if differentials.iter().any(|d| !d.is_finite()) {
        return Err(EngineError::InvalidInput(
            "differentials must be finite".to_string(),
        ));
    }

    let used = policy.used_count(total).min(total);
    let mut sorted = differentials.to_vec();
    sorted.sort_by(f64::total_cmp);
    let best = &sorted[..used];

    #[allow(clippy::cast_precision_loss)]
    let mean = best.iter().sum::<f64>() / used as f64;
    let value = ensure_finite(round1(mean * policy.multiplier), "handicap index")?;

    Ok(HandicapIndex {
        value: Some(value),
        used,
        total,
    })
}

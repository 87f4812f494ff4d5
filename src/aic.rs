//! Akaike Information Criterion onset picker (Maeda, 1985).
//!
//! The AIC is computed directly from the samples, without autoregressive
//! coefficients:
//!
//! ```text
//! AIC(k) = k * ln(var(x[0..k])) + (n - k - 1) * ln(var(x[k..n]))
//! ```
//!
//! The returned index is the first minimum of the profile. Splits where either
//! segment has zero variance evaluate to +inf and never win; in particular the
//! first and last splits always do, so index 0 means no onset was found.

use log::debug;

use crate::config::PickerConfig;
use crate::error::{PickerError, Result};
use crate::pick::Pick;
use crate::profile::{check_lengths, fill_profile};

/// AIC score of one split from the segment deviation sums.
#[inline]
pub fn aic_score(lead_dev: f64, lead_len: usize, trail_dev: f64, trail_len: usize) -> f64 {
    let lead = lead_len as f64 * (lead_dev / lead_len as f64).ln();
    let trail = (trail_len - 1) as f64 * (trail_dev / trail_len as f64).ln();
    lead + trail
}

/// Fill a caller-owned AIC profile of length `signal.len() - 1`.
///
/// Returns the pick index. On error nothing is written.
pub fn compute_aic_profile_into(
    signal: &[f64],
    profile: &mut [f64],
    config: &PickerConfig,
) -> Result<usize> {
    check_lengths(signal.len(), profile.len(), config)?;
    let idx = fill_profile(signal, profile, config.method, &aic_score);
    if profile[idx].is_finite() {
        debug!("AIC found pick at index {} of {}", idx, signal.len());
    } else {
        debug!("AIC didn't find a pick in {} samples", signal.len());
    }
    Ok(idx)
}

/// Compute the AIC profile and its first minimum.
pub fn compute_aic_profile(signal: &[f64], config: &PickerConfig) -> Result<Pick> {
    let mut profile = vec![0.0f64; signal.len().saturating_sub(1)];
    let idx = compute_aic_profile_into(signal, &mut profile, config)?;
    Ok(Pick::new(profile, idx))
}

/// Recursive refinement of the AIC pick around a coarse onset.
///
/// Not implemented: the refinement algorithm is undefined, so this always
/// fails without producing a profile or index.
pub fn recursive_aic_pick(_signal: &[f64], _config: &PickerConfig) -> Result<Pick> {
    Err(PickerError::NotImplemented("recursive AIC refinement"))
}

use log::debug;

use crate::config::PickerConfig;
use crate::error::Result;
use crate::pick::Pick;
use crate::profile::{check_lengths, fill_profile};

/// Reciprocal-variance (REC) score of one split.
///
/// REC(k) = -k / var(x[0..k]) - (n - k) / var(x[k..n])
/// A zero-variance segment contributes 0 instead of dividing by zero.
#[inline]
pub fn rec_score(lead_dev: f64, lead_len: usize, trail_dev: f64, trail_len: usize) -> f64 {
    -reciprocal_term(lead_dev, lead_len) - reciprocal_term(trail_dev, trail_len)
}

#[inline]
fn reciprocal_term(dev: f64, len: usize) -> f64 {
    let var = dev / len as f64;
    if var == 0.0 {
        0.0
    } else {
        len as f64 / var
    }
}

/// Fill a caller-owned REC profile of length `signal.len() - 1`.
///
/// Returns the pick index. On error nothing is written.
pub fn compute_rec_profile_into(
    signal: &[f64],
    profile: &mut [f64],
    config: &PickerConfig,
) -> Result<usize> {
    check_lengths(signal.len(), profile.len(), config)?;
    let idx = fill_profile(signal, profile, config.method, &rec_score);
    debug!("REC minimum at index {} of {}", idx, signal.len());
    Ok(idx)
}

/// Compute the REC characteristic function and its first minimum.
pub fn compute_rec_profile(signal: &[f64], config: &PickerConfig) -> Result<Pick> {
    let mut profile = vec![0.0f64; signal.len().saturating_sub(1)];
    let idx = compute_rec_profile_into(signal, &mut profile, config)?;
    Ok(Pick::new(profile, idx))
}

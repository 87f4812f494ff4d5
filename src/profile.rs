use log::trace;
use rayon::prelude::*;

use crate::config::{PickerConfig, ProfileMethod};
use crate::error::{PickerError, Result};

/// Segment statistics handed to a split scorer: deviation sum and length of the
/// leading segment, then of the trailing segment.
pub(crate) trait SplitScore: Fn(f64, usize, f64, usize) -> f64 + Sync {}

impl<F> SplitScore for F where F: Fn(f64, usize, f64, usize) -> f64 + Sync {}

/// Replace any non-finite value with +inf so degenerate splits never win.
#[inline]
pub fn sanitize(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        f64::INFINITY
    }
}

/// First index holding the minimum, strict less-than against a +inf start.
/// An all-infinite (or empty) profile yields 0.
pub fn first_minimum(profile: &[f64]) -> usize {
    let mut min_val = f64::INFINITY;
    let mut min_idx = 0usize;
    for (i, &value) in profile.iter().enumerate() {
        if value < min_val {
            min_val = value;
            min_idx = i;
        }
    }
    min_idx
}

/// Validate lengths before anything is written.
pub(crate) fn check_lengths(signal_len: usize, profile_len: usize, config: &PickerConfig) -> Result<()> {
    let needed = config.required_len();
    if signal_len < needed {
        return Err(PickerError::InsufficientData {
            needed,
            got: signal_len,
        });
    }
    let expected = signal_len - 1;
    if profile_len != expected {
        return Err(PickerError::BufferMismatch {
            expected,
            got: profile_len,
        });
    }
    Ok(())
}

/// Fill `profile[i - 1]` with the sanitized score of split `i` for `i in 1..n`
/// and return the first minimum. Lengths must already be validated.
pub(crate) fn fill_profile<S: SplitScore>(
    signal: &[f64],
    profile: &mut [f64],
    method: ProfileMethod,
    score: &S,
) -> usize {
    trace!("filling {} split scores with {} method", profile.len(), method);
    match method {
        ProfileMethod::Direct => fill_direct(signal, profile, score),
        ProfileMethod::Parallel => fill_parallel(signal, profile, score),
        ProfileMethod::Incremental => fill_incremental(signal, profile, score),
    }
    first_minimum(profile)
}

/// Sum of squared deviations from the segment mean, two passes.
/// A constant run is exactly 0 even when its mean is not representable.
fn deviation_sum(segment: &[f64]) -> f64 {
    let first = segment[0];
    let mut constant = true;
    let mut sum = 0.0f64;
    for &x in segment {
        sum += x;
        constant &= x == first;
    }
    if constant {
        return 0.0;
    }
    let mean = sum / segment.len() as f64;

    let mut dev = 0.0f64;
    for &x in segment {
        let diff = x - mean;
        dev += diff * diff;
    }
    dev
}

#[inline]
fn direct_split<S: SplitScore>(signal: &[f64], split: usize, score: &S) -> f64 {
    let n = signal.len();
    let lead = deviation_sum(&signal[..split]);
    let trail = deviation_sum(&signal[split..]);
    sanitize(score(lead, split, trail, n - split))
}

fn fill_direct<S: SplitScore>(signal: &[f64], profile: &mut [f64], score: &S) {
    for (k, slot) in profile.iter_mut().enumerate() {
        *slot = direct_split(signal, k + 1, score);
    }
}

fn fill_parallel<S: SplitScore>(signal: &[f64], profile: &mut [f64], score: &S) {
    profile.par_iter_mut().enumerate().for_each(|(k, slot)| {
        *slot = direct_split(signal, k + 1, score);
    });
}

fn fill_incremental<S: SplitScore>(signal: &[f64], profile: &mut [f64], score: &S) {
    let n = signal.len();

    // Backward pass: profile[i - 1] holds the deviation sum of signal[i..n)
    let mut mean = 0.0f64;
    let mut m2 = 0.0f64;
    for i in (1..n).rev() {
        let count = (n - i) as f64;
        let x = signal[i];
        let delta = x - mean;
        mean += delta / count;
        m2 += delta * (x - mean);
        profile[i - 1] = m2;
    }

    // Forward pass: grow the leading segment and finalize each split
    let mut mean = 0.0f64;
    let mut m2 = 0.0f64;
    for i in 1..n {
        let x = signal[i - 1];
        let delta = x - mean;
        mean += delta / i as f64;
        m2 += delta * (x - mean);
        let trail = profile[i - 1];
        profile[i - 1] = sanitize(score(m2, i, trail, n - i));
    }
}

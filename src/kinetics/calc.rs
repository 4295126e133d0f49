//! Pure calculation functions for degradation kinetics
//!
//! This module contains stateless functions over caller-provided slices.
//! None of them validate their inputs apart from the regression denominator
//! guard in [`fit_linear`]; zero or negative absorbances propagate as
//! IEEE-754 infinities and NaN.

use super::error::KineticsError;
use super::types::LinearFit;

// ============================================================================
// Log ratio
// ============================================================================

/// Natural-log concentration ratio `ln(a0 / at[i])` for every measurement
///
/// `at[i] == 0` gives `+inf` (for `a0 > 0`), `a0 == 0` gives `-inf`, and a
/// negative ratio gives NaN.
pub fn ln_ratio(a0: f64, at: &[f64]) -> Vec<f64> {
    at.iter().map(|&a| (a0 / a).ln()).collect()
}

/// Write `ln(a0 / at[i])` into a caller-allocated buffer
///
/// Only `min(at.len(), out.len())` elements are written.
pub fn ln_ratio_into(a0: f64, at: &[f64], out: &mut [f64]) {
    for (o, &a) in out.iter_mut().zip(at.iter()) {
        *o = (a0 / a).ln();
    }
}

// ============================================================================
// Linear regression
// ============================================================================

/// Ordinary least-squares fit of `y = k * t + C`
///
/// Closed form, single pass over the `(t, y)` pairs. Unpaired trailing values
/// of the longer slice are ignored.
///
/// # Errors
/// Returns [`KineticsError::DegenerateRegression`] when `n·Σt² − (Σt)²` is
/// exactly zero: every `t` is equal, or there are fewer than two pairs.
pub fn fit_linear(t: &[f64], y: &[f64]) -> Result<LinearFit, KineticsError> {
    let mut n = 0usize;
    let mut sum_t = 0.0;
    let mut sum_y = 0.0;
    let mut sum_ty = 0.0;
    let mut sum_tt = 0.0;

    for (&ti, &yi) in t.iter().zip(y.iter()) {
        n += 1;
        sum_t += ti;
        sum_y += yi;
        sum_ty += ti * yi;
        sum_tt += ti * ti;
    }

    let n = n as f64;
    let denominator = n * sum_tt - sum_t * sum_t;
    if denominator == 0.0 {
        return Err(KineticsError::DegenerateRegression { denominator });
    }

    let slope = (n * sum_ty - sum_t * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_t) / n;

    Ok(LinearFit { slope, intercept })
}

// ============================================================================
// Derived quantities
// ============================================================================

/// Remaining fraction `at[i] / a0`
pub fn relative_concentration(a0: f64, at: &[f64]) -> Vec<f64> {
    at.iter().map(|&a| a / a0).collect()
}

/// Percentage degraded, `(a0 - at[i]) / a0 * 100`
pub fn degradation_efficiency(a0: f64, at: &[f64]) -> Vec<f64> {
    at.iter().map(|&a| (a0 - a) / a0 * 100.0).collect()
}

/// Half-life of a first-order process with rate constant `k`
///
/// NaN unless `k` is finite and positive.
#[inline]
pub fn half_life(k: f64) -> f64 {
    if k > 0.0 && k.is_finite() {
        std::f64::consts::LN_2 / k
    } else {
        f64::NAN
    }
}

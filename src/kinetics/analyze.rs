//! Kinetics analysis orchestrator
//!
//! Validates a series, resolves the reference absorbance, and chains the
//! log-ratio and regression primitives from [`super::calc`].

use super::calc;
use super::error::KineticsError;
use super::types::*;
use crate::data::{DegradationSeries, Spectrum};
use crate::error::DegradationError;

/// Minimum number of measurements for a fit
const MIN_POINTS: usize = 2;

/// Perform first-order kinetics analysis on raw arrays
///
/// # Errors
/// Returns an error if the arrays differ in length, hold fewer than two
/// points, are not time-ordered, if an explicit reference is not finite, or
/// if the regression is degenerate.
pub fn analyze_arrays(
    sample_id: &str,
    times: &[f64],
    absorbances: &[f64],
    options: &KineticsOptions,
) -> Result<KineticsResult, KineticsError> {
    if times.len() != absorbances.len() {
        return Err(KineticsError::LengthMismatch {
            times: times.len(),
            values: absorbances.len(),
        });
    }

    if times.len() < MIN_POINTS {
        return Err(KineticsError::InsufficientData {
            n: times.len(),
            required: MIN_POINTS,
        });
    }

    if times.windows(2).any(|w| w[1] < w[0]) {
        return Err(KineticsError::InvalidTimeSequence);
    }

    let a0 = match options.reference {
        Reference::First => absorbances[0],
        Reference::Value(v) if v.is_finite() => v,
        Reference::Value(v) => {
            return Err(KineticsError::InvalidParameter {
                param: "reference".to_string(),
                value: v.to_string(),
            })
        }
    };

    tracing::debug!(sample = sample_id, n = times.len(), a0, "analyzing degradation series");

    let ln_ratio = calc::ln_ratio(a0, absorbances);

    let n_non_finite = ln_ratio.iter().filter(|v| !v.is_finite()).count();
    if n_non_finite > 0 {
        tracing::warn!(
            sample = sample_id,
            n_non_finite,
            "log ratio has non-finite values (zero or negative absorbance)"
        );
    }

    let (fit, n_points) = if options.exclude_non_finite && n_non_finite > 0 {
        let (t, y): (Vec<f64>, Vec<f64>) = times
            .iter()
            .zip(ln_ratio.iter())
            .filter(|(_, y)| y.is_finite())
            .map(|(&t, &y)| (t, y))
            .unzip();
        if t.len() < MIN_POINTS {
            return Err(KineticsError::InsufficientData {
                n: t.len(),
                required: MIN_POINTS,
            });
        }
        (calc::fit_linear(&t, &y)?, t.len())
    } else {
        (calc::fit_linear(times, &ln_ratio)?, times.len())
    };

    let half_life = calc::half_life(fit.slope);

    tracing::debug!(
        sample = sample_id,
        k = fit.slope,
        c = fit.intercept,
        half_life,
        "fitted first-order kinetics"
    );

    Ok(KineticsResult {
        sample_id: sample_id.to_string(),
        reference: a0,
        time_unit: options.time_unit.clone(),
        times: times.to_vec(),
        relative_concentration: calc::relative_concentration(a0, absorbances),
        degradation_pct: calc::degradation_efficiency(a0, absorbances),
        ln_ratio,
        fit,
        n_points,
        half_life,
    })
}

/// Perform first-order kinetics analysis on a series
pub fn analyze(
    series: &DegradationSeries,
    options: &KineticsOptions,
) -> Result<KineticsResult, KineticsError> {
    analyze_arrays(series.id(), series.times(), series.absorbances(), options)
}

/// Analyze a sequence of scans taken every [`KineticsOptions::time_step`]
///
/// Each scan contributes its peak absorbance.
pub fn analyze_spectra(
    sample_id: &str,
    spectra: &[Spectrum],
    options: &KineticsOptions,
) -> Result<KineticsResult, DegradationError> {
    if !(options.time_step.is_finite() && options.time_step > 0.0) {
        return Err(KineticsError::InvalidParameter {
            param: "time_step".to_string(),
            value: options.time_step.to_string(),
        }
        .into());
    }

    let series = DegradationSeries::from_spectra(sample_id, spectra, options.time_step)?;
    Ok(analyze(&series, options)?)
}

//! Kinetics types: options, fit and result structures
//!
//! - [`KineticsOptions`]: analysis configuration
//! - [`LinearFit`]: slope and intercept of a regression line
//! - [`KineticsResult`]: everything computed for one series

use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};

// ============================================================================
// Configuration Types
// ============================================================================

/// Where the reference absorbance `A0` comes from
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum Reference {
    /// The first measurement of the series
    #[default]
    First,
    /// An explicitly supplied value
    Value(f64),
}

/// Degradation kinetics configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KineticsOptions {
    /// Source of `A0` (default: first measurement)
    pub reference: Reference,

    /// Spacing between scans when times are implied by scan order (default: 1.0)
    pub time_step: f64,

    /// Label for the time axis, carried into results (default: "h")
    pub time_unit: String,

    /// Drop points with a non-finite log ratio before fitting (default: false)
    ///
    /// With the default, a zero or negative absorbance puts an infinity or NaN
    /// into the regression sums and the fit comes out non-finite.
    pub exclude_non_finite: bool,
}

impl Default for KineticsOptions {
    fn default() -> Self {
        Self {
            reference: Reference::First,
            time_step: 1.0,
            time_unit: "h".to_string(),
            exclude_non_finite: false,
        }
    }
}

impl KineticsOptions {
    /// Use an explicit reference absorbance
    pub fn with_reference(mut self, a0: f64) -> Self {
        self.reference = Reference::Value(a0);
        self
    }

    /// Set the spacing between scans
    pub fn with_time_step(mut self, time_step: f64) -> Self {
        self.time_step = time_step;
        self
    }

    /// Set the time unit label
    pub fn with_time_unit(mut self, unit: impl Into<String>) -> Self {
        self.time_unit = unit.into();
        self
    }

    /// Drop non-finite log ratios before fitting
    pub fn with_exclude_non_finite(mut self, exclude: bool) -> Self {
        self.exclude_non_finite = exclude;
        self
    }

    /// Parse options from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

// ============================================================================
// Result Types
// ============================================================================

/// A fitted line `y = slope * t + intercept`
///
/// For first-order degradation, `slope` is the rate constant `k` and
/// `intercept` is the constant `C` of `ln(A0/At) = k·t + C`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Evaluate the line at `t`
    #[inline]
    pub fn predict(&self, t: f64) -> f64 {
        self.slope * t + self.intercept
    }
}

impl fmt::Display for LinearFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y = {:.4} * t + {:.2}", self.slope, self.intercept)
    }
}

/// Complete kinetics result for one series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KineticsResult {
    /// Series identifier
    pub sample_id: String,
    /// Reference absorbance `A0` actually used
    pub reference: f64,
    /// Time axis label
    pub time_unit: String,
    /// Measurement times
    pub times: Vec<f64>,
    /// `ln(A0/At)` per measurement
    pub ln_ratio: Vec<f64>,
    /// `At/A0` per measurement
    pub relative_concentration: Vec<f64>,
    /// `(A0 - At)/A0 * 100` per measurement
    pub degradation_pct: Vec<f64>,
    /// Fit of `ln(A0/At)` against time
    pub fit: LinearFit,
    /// Points used in the fit
    pub n_points: usize,
    /// `ln 2 / k`, NaN when `k` is not positive
    pub half_life: f64,
}

impl KineticsResult {
    /// Rate constant `k`
    pub fn rate_constant(&self) -> f64 {
        self.fit.slope
    }

    /// Kinetic equation in the form `ln(A0/At) = k * t + C`
    pub fn equation(&self) -> String {
        format!(
            "ln(A0/At) = {:.4} * t + {:.2}",
            self.fit.slope, self.fit.intercept
        )
    }

    /// Degradation percentage at the final measurement
    pub fn final_degradation_pct(&self) -> Option<f64> {
        self.degradation_pct.last().copied()
    }

    /// Flatten scalar results to name-value pairs for export
    pub fn to_params(&self) -> HashMap<&'static str, f64> {
        let mut p = HashMap::new();
        p.insert("a0", self.reference);
        p.insert("k", self.fit.slope);
        p.insert("c", self.fit.intercept);
        p.insert("half_life", self.half_life);
        p.insert("n_points", self.n_points as f64);
        if let Some(v) = self.final_degradation_pct() {
            p.insert("final_degradation_pct", v);
        }
        p
    }
}

impl fmt::Display for KineticsResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sample: {}", self.sample_id)?;
        writeln!(f, "  A0: {:.4}", self.reference)?;
        writeln!(f, "  {}", self.equation())?;
        writeln!(f, "  k: {:.4} 1/{}", self.fit.slope, self.time_unit)?;
        write!(f, "  t½: {:.4} {}", self.half_life, self.time_unit)
    }
}

//! Kinetics error types

use thiserror::Error;

/// Errors that can occur during degradation kinetics analysis
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KineticsError {
    /// The regression denominator `n·Σt² − (Σt)²` is exactly zero
    ///
    /// All time points are identical, or there are fewer than two points.
    #[error("Degenerate regression: denominator is {denominator}, all time points are equal or too few points")]
    DegenerateRegression { denominator: f64 },

    /// Not enough measurements to fit a line
    #[error("Insufficient data: {n} points, need at least {required}")]
    InsufficientData { n: usize, required: usize },

    /// Times and absorbances have different lengths
    #[error("Length mismatch: {times} times, {values} values")]
    LengthMismatch { times: usize, values: usize },

    /// Times are not in non-decreasing order
    #[error("Time points must be in non-decreasing order")]
    InvalidTimeSequence,

    /// Invalid parameter value
    #[error("Invalid parameter: {param} = {value}")]
    InvalidParameter { param: String, value: String },
}

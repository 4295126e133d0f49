//! Extension trait for kinetics analysis on series collections
//!
//! ```rust,ignore
//! use degradation::prelude::*;
//!
//! let result = series.kinetics(&KineticsOptions::default())?;
//! let all = batch.kinetics_all(&KineticsOptions::default());
//! ```

use crate::data::DegradationSeries;
use crate::kinetics::analyze::analyze;
use crate::kinetics::error::KineticsError;
use crate::kinetics::types::{KineticsOptions, KineticsResult};
use rayon::prelude::*;

/// Extension trait for first-order degradation kinetics
///
/// Provides `.kinetics()` (first series) and `.kinetics_all()` (every series,
/// in parallel) on a [`DegradationSeries`] and on slices of them.
pub trait Kinetics {
    /// Analyze the first (or only) series
    fn kinetics(&self, options: &KineticsOptions) -> Result<KineticsResult, KineticsError>;

    /// Analyze every series
    fn kinetics_all(&self, options: &KineticsOptions) -> Vec<Result<KineticsResult, KineticsError>>;
}

impl Kinetics for DegradationSeries {
    fn kinetics(&self, options: &KineticsOptions) -> Result<KineticsResult, KineticsError> {
        analyze(self, options)
    }

    fn kinetics_all(&self, options: &KineticsOptions) -> Vec<Result<KineticsResult, KineticsError>> {
        vec![self.kinetics(options)]
    }
}

impl Kinetics for [DegradationSeries] {
    fn kinetics(&self, options: &KineticsOptions) -> Result<KineticsResult, KineticsError> {
        self.first()
            .map(|s| s.kinetics(options))
            .unwrap_or(Err(KineticsError::InvalidParameter {
                param: "series".to_string(),
                value: "none found".to_string(),
            }))
    }

    fn kinetics_all(&self, options: &KineticsOptions) -> Vec<Result<KineticsResult, KineticsError>> {
        self.par_iter()
            .map(|series| {
                let result = series.kinetics(options);
                if let Err(ref e) = result {
                    tracing::warn!(sample = series.id(), error = %e, "kinetics analysis failed");
                }
                result
            })
            .collect()
    }
}

impl Kinetics for Vec<DegradationSeries> {
    fn kinetics(&self, options: &KineticsOptions) -> Result<KineticsResult, KineticsError> {
        self.as_slice().kinetics(options)
    }

    fn kinetics_all(&self, options: &KineticsOptions) -> Vec<Result<KineticsResult, KineticsError>> {
        self.as_slice().kinetics_all(options)
    }
}

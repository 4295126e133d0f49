//! Absorbance-over-time series for one sample

use serde::{Deserialize, Serialize};

use super::error::SpectrumError;
use super::spectrum::Spectrum;

/// Peak absorbance of a single sample measured at successive times
///
/// The first measurement is taken as the reference `A0` unless the analysis
/// options say otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegradationSeries {
    id: String,
    times: Vec<f64>,
    absorbances: Vec<f64>,
}

impl DegradationSeries {
    /// Create a series from parallel time and absorbance vectors
    ///
    /// Lengths are not checked here; analysis reports a mismatch.
    pub fn new(id: impl Into<String>, times: Vec<f64>, absorbances: Vec<f64>) -> Self {
        Self {
            id: id.into(),
            times,
            absorbances,
        }
    }

    /// Start building a series one measurement at a time
    pub fn builder(id: impl Into<String>) -> SeriesBuilder {
        SeriesBuilder {
            id: id.into(),
            times: Vec::new(),
            absorbances: Vec::new(),
        }
    }

    /// Build a series from scans taken every `time_step`
    ///
    /// Scan `i` is placed at time `i * time_step` and contributes its peak
    /// absorbance.
    ///
    /// # Errors
    /// Returns [`SpectrumError::NoFiniteAbsorbance`] if a scan has no usable peak.
    pub fn from_spectra(
        id: impl Into<String>,
        spectra: &[Spectrum],
        time_step: f64,
    ) -> Result<Self, SpectrumError> {
        let absorbances = spectra
            .iter()
            .enumerate()
            .map(|(index, s)| {
                s.peak_absorbance()
                    .ok_or(SpectrumError::NoFiniteAbsorbance { index })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let times = (0..absorbances.len())
            .map(|i| i as f64 * time_step)
            .collect();

        Ok(Self::new(id, times, absorbances))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn absorbances(&self) -> &[f64] {
        &self.absorbances
    }

    pub fn len(&self) -> usize {
        self.absorbances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.absorbances.is_empty()
    }

    /// First measured absorbance
    pub fn initial(&self) -> Option<f64> {
        self.absorbances.first().copied()
    }
}

/// Incremental builder for [`DegradationSeries`]
#[derive(Debug, Clone)]
pub struct SeriesBuilder {
    id: String,
    times: Vec<f64>,
    absorbances: Vec<f64>,
}

impl SeriesBuilder {
    /// Add a measurement of `absorbance` taken at `time`
    pub fn measurement(mut self, time: f64, absorbance: f64) -> Self {
        self.times.push(time);
        self.absorbances.push(absorbance);
        self
    }

    pub fn build(self) -> DegradationSeries {
        DegradationSeries {
            id: self.id,
            times: self.times,
            absorbances: self.absorbances,
        }
    }
}

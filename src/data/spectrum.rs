//! UV-Vis spectra
//!
//! A [`Spectrum`] is one scan of a sample: absorbance over wavelength. The
//! kinetics only need the peak absorbance of each scan, which is what
//! [`DegradationSeries::from_spectra`](super::DegradationSeries::from_spectra)
//! reads.

use serde::{Deserialize, Serialize};

use super::error::SpectrumError;

/// A single absorbance spectrum
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spectrum {
    wavelengths: Vec<f64>,
    absorbance: Vec<f64>,
}

impl Spectrum {
    /// Create a spectrum from parallel wavelength and absorbance vectors
    ///
    /// # Errors
    /// Returns [`SpectrumError::LengthMismatch`] if the vectors differ in length,
    /// or [`SpectrumError::Empty`] if they hold no points.
    pub fn new(wavelengths: Vec<f64>, absorbance: Vec<f64>) -> Result<Self, SpectrumError> {
        if wavelengths.len() != absorbance.len() {
            return Err(SpectrumError::LengthMismatch {
                wavelengths: wavelengths.len(),
                absorbance: absorbance.len(),
            });
        }
        if wavelengths.is_empty() {
            return Err(SpectrumError::Empty);
        }
        Ok(Self {
            wavelengths,
            absorbance,
        })
    }

    pub fn wavelengths(&self) -> &[f64] {
        &self.wavelengths
    }

    pub fn absorbance(&self) -> &[f64] {
        &self.absorbance
    }

    pub fn len(&self) -> usize {
        self.wavelengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wavelengths.is_empty()
    }

    /// Index of the largest finite absorbance
    fn peak_idx(&self) -> Option<usize> {
        self.absorbance
            .iter()
            .enumerate()
            .filter(|(_, a)| a.is_finite())
            .fold(None, |best: Option<(usize, f64)>, (i, &a)| match best {
                Some((_, b)) if b >= a => best,
                _ => Some((i, a)),
            })
            .map(|(i, _)| i)
    }

    /// Maximum absorbance, ignoring NaN and infinite values
    pub fn peak_absorbance(&self) -> Option<f64> {
        self.peak_idx().map(|i| self.absorbance[i])
    }

    /// Wavelength at which [`Self::peak_absorbance`] occurs
    pub fn peak_wavelength(&self) -> Option<f64> {
        self.peak_idx().map(|i| self.wavelengths[i])
    }

    /// Transmittance `10^(-A)` at every wavelength
    pub fn transmittance(&self) -> Vec<f64> {
        self.absorbance.iter().map(|a| 10f64.powf(-a)).collect()
    }
}

//! Errors raised while constructing measurement data

use thiserror::Error;

/// Errors from building a [`Spectrum`](super::Spectrum) or a
/// [`DegradationSeries`](super::DegradationSeries) from spectra
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpectrumError {
    /// Wavelength and absorbance vectors differ in length
    #[error("Spectrum length mismatch: {wavelengths} wavelengths, {absorbance} absorbance values")]
    LengthMismatch { wavelengths: usize, absorbance: usize },

    /// The spectrum holds no points
    #[error("Spectrum is empty")]
    Empty,

    /// Every absorbance value is NaN or infinite, so no peak can be read
    #[error("Spectrum {index} has no finite absorbance value")]
    NoFiniteAbsorbance { index: usize },
}

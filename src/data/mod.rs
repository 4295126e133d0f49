//! Measurement data: UV-Vis spectra and absorbance-over-time series

pub mod error;
pub mod series;
pub mod spectrum;

pub use error::SpectrumError;
pub use series::{DegradationSeries, SeriesBuilder};
pub use spectrum::Spectrum;

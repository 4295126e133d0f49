//! First-order degradation kinetics for UV-Vis absorbance data
//!
//! Computes `ln(A0/At)` from a series of absorbances and fits
//! `ln(A0/At) = k·t + C` by ordinary least squares. See [`kinetics`] for the
//! primitives and the analysis entry points.

pub mod data;
pub mod error;
pub mod ffi;
pub mod kinetics;

pub use crate::data::{DegradationSeries, SeriesBuilder, Spectrum, SpectrumError};
pub use crate::kinetics::{
    fit_linear, ln_ratio, Kinetics, KineticsError, KineticsOptions, KineticsResult, LinearFit,
};
pub use error::DegradationError;

pub mod prelude {
    pub mod data {
        pub use crate::data::{DegradationSeries, Spectrum};
    }
    pub mod kinetics {
        pub use crate::kinetics::{
            analyze, analyze_spectra, degradation_efficiency, fit_linear, half_life, ln_ratio,
            relative_concentration,
        };
    }

    pub use crate::data::{DegradationSeries, SeriesBuilder, Spectrum, SpectrumError};
    pub use crate::kinetics::{
        Kinetics, KineticsError, KineticsOptions, KineticsResult, LinearFit, Reference,
    };
    pub use crate::DegradationError;
}

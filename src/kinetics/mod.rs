//! First-order degradation kinetics
//!
//! A first-order process decays as `At = A0·e^(−k·t)`, which linearizes to
//!
//! ```text
//! ln(A0/At) = k·t + C
//! ```
//!
//! The two primitives [`ln_ratio`] and [`fit_linear`] compute the left-hand
//! side and the ordinary least-squares line. [`analyze`] chains them for a
//! [`DegradationSeries`](crate::data::DegradationSeries) and adds half-life,
//! relative concentration and degradation percentage.
//!
//! # Usage
//!
//! ```rust
//! use degradation::kinetics::{fit_linear, ln_ratio};
//!
//! let times = [0.0, 1.0, 2.0];
//! let y = ln_ratio(100.0, &[100.0, 50.0, 25.0]);
//! let fit = fit_linear(&times, &y).unwrap();
//! assert!((fit.slope - std::f64::consts::LN_2).abs() < 1e-12);
//! ```
//!
//! ```rust,ignore
//! use degradation::prelude::*;
//!
//! let series = DegradationSeries::builder("methylene_blue")
//!     .measurement(0.0, 1.20)
//!     .measurement(1.0, 0.81)
//!     .measurement(2.0, 0.55)
//!     .build();
//!
//! let result = series.kinetics(&KineticsOptions::default())?;
//! println!("{}", result.equation());
//! ```

mod analyze;
mod calc;
mod error;
mod traits;
mod types;


pub use analyze::{analyze, analyze_arrays, analyze_spectra};
pub use calc::{
    degradation_efficiency, fit_linear, half_life, ln_ratio, ln_ratio_into,
    relative_concentration,
};
pub use error::KineticsError;
pub use traits::Kinetics;
pub use types::{KineticsOptions, KineticsResult, LinearFit, Reference};

use thiserror::Error;

use crate::data::SpectrumError;
use crate::kinetics::KineticsError;

#[derive(Error, Debug)]
pub enum DegradationError {
    #[error("Error in the kinetics analysis: {0}")]
    Kinetics(#[from] KineticsError),
    #[error("Error in the spectrum data: {0}")]
    Spectrum(#[from] SpectrumError),
    #[error("Error in the configuration: {0}")]
    Config(#[from] serde_json::Error),
}

//! Error type for the mechanics lab

use thiserror::Error;

/// Everything that can go wrong when configuring or driving an experiment.
///
/// Steppers themselves are infallible: invalid inputs are rejected here,
/// before a run starts, rather than surfacing as NaN mid-run.
#[derive(Debug, Error)]
pub enum LabError {
    #[error("invalid parameter `{name}` = {value}: must be {requirement}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        requirement: &'static str,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("no trajectory predictor attached")]
    NoPredictor,

    #[error("predictor needs {need} training samples, have {have}")]
    InsufficientTrainingData { have: usize, need: usize },
}

pub type Result<T> = std::result::Result<T, LabError>;

/// Reject anything that is not a finite, strictly positive number
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(LabError::InvalidParameter {
            name,
            value,
            requirement: "finite and > 0",
        })
    }
}

/// Reject negative or non-finite numbers
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(LabError::InvalidParameter {
            name,
            value,
            requirement: "finite and >= 0",
        })
    }
}

pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(LabError::InvalidParameter {
            name,
            value,
            requirement: "finite",
        })
    }
}

//! Curve generation errors

use crate::float_types::Real;
use std::fmt::Display;

/// Everything that can go wrong while turning a request into a curve
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CurveError {
    /// (InvalidParameter) A radius, offset or sampling option is unusable
    InvalidParameter {
        name: &'static str,
        value: Real,
        reason: &'static str,
    },
    /// (DegenerateResult) A sampled point came out NaN or infinite
    DegenerateResult { pen: usize, sample: usize },
    /// (SampleLimitExceeded) The period needs more samples than allowed
    SampleLimitExceeded { samples: usize, limit: usize },
    /// (UnknownPreset) No preset goes by that name
    UnknownPreset(String),
    /// (MalformedQuery) A query string value could not be parsed
    MalformedQuery { key: String, value: String },
}

impl CurveError {
    pub(crate) const fn invalid(name: &'static str, value: Real, reason: &'static str) -> Self {
        CurveError::InvalidParameter { name, value, reason }
    }
}

impl Display for CurveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CurveError::InvalidParameter { name, value, reason } => {
                write!(f, "(InvalidParameter) `{}` = {} {}", name, value, reason)
            },
            CurveError::DegenerateResult { pen, sample } => write!(
                f,
                "(DegenerateResult) pen {} produced a non-finite point at sample {}",
                pen, sample
            ),
            CurveError::SampleLimitExceeded { samples, limit } => write!(
                f,
                "(SampleLimitExceeded) {} samples per pen needed, limit is {}",
                samples, limit
            ),
            CurveError::UnknownPreset(name) => write!(f, "(UnknownPreset) no preset named '{}'", name),
            CurveError::MalformedQuery { key, value } => {
                write!(f, "(MalformedQuery) cannot parse '{}' for key '{}'", value, key)
            },
        }
    }
}

/// Shorthand used throughout the crate.
pub type Result<T> = std::result::Result<T, CurveError>;

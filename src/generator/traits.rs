//! Traits for curve generation.

use crate::errors::Result;
use crate::request::CurveRequest;
use crate::result::CurveResult;
use crate::sampling::SamplingOptions;

/// Turns a [`CurveRequest`] into one sampled trace per pen.
pub trait CurveGenerator {
    /// Generates every pen's trace with explicit sampling options.
    ///
    /// Validation happens before any sampling; a rejected request never
    /// yields partial traces.
    fn generate_with(&self, request: &CurveRequest, options: &SamplingOptions) -> Result<CurveResult>;

    /// Generates every pen's trace with the default step of 0.01 rad.
    fn generate(&self, request: &CurveRequest) -> Result<CurveResult> {
        self.generate_with(request, &SamplingOptions::default())
    }
}

//! Serial implementation of curve generation.

use super::plan::Plan;
use super::traits::CurveGenerator;
use crate::errors::Result;
use crate::request::CurveRequest;
use crate::result::CurveResult;
use crate::sampling::SamplingOptions;

/// Serial implementation of `CurveGenerator`: pens are traced one after another.
#[derive(Debug, Clone, Copy)]
pub struct SerialCurveGenerator;

impl Default for SerialCurveGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SerialCurveGenerator {
    pub const fn new() -> Self {
        Self
    }
}

impl CurveGenerator for SerialCurveGenerator {
    fn generate_with(&self, request: &CurveRequest, options: &SamplingOptions) -> Result<CurveResult> {
        let plan = Plan::new(request, options)?;
        let traces = plan.trochoids.iter().map(|pen| plan.trace(pen)).collect();
        Ok(plan.finish(traces))
    }
}

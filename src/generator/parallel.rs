//! Parallel implementation of curve generation.

use super::plan::Plan;
use super::traits::CurveGenerator;
use crate::errors::Result;
use crate::request::CurveRequest;
use crate::result::CurveResult;
use crate::sampling::SamplingOptions;
use rayon::prelude::*;

/// Parallel implementation of `CurveGenerator`: one rayon task per pen.
///
/// Samples within a pen are still produced in order; the indexed collect
/// keeps the traces aligned with the pen offsets.
#[derive(Debug, Clone, Copy)]
pub struct ParallelCurveGenerator;

impl Default for ParallelCurveGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ParallelCurveGenerator {
    pub const fn new() -> Self {
        Self
    }
}

impl CurveGenerator for ParallelCurveGenerator {
    fn generate_with(&self, request: &CurveRequest, options: &SamplingOptions) -> Result<CurveResult> {
        let plan = Plan::new(request, options)?;
        let traces = plan.trochoids.par_iter().map(|pen| plan.trace(pen)).collect();
        Ok(plan.finish(traces))
    }
}

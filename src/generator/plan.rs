//! Validation and period work shared by every generator.

use crate::errors::Result;
use crate::period::Period;
use crate::request::CurveRequest;
use crate::result::{CurveResult, PenTrace};
use crate::sampling::SamplingOptions;
use crate::trochoid::Trochoid;

/// Everything known about a request before the first sample is taken.
pub(crate) struct Plan {
    pub period: Period,
    pub options: SamplingOptions,
    pub samples: usize,
    pub trochoids: Vec<Trochoid>,
}

impl Plan {
    pub fn new(request: &CurveRequest, options: &SamplingOptions) -> Result<Self> {
        request.validate()?;
        options.validate()?;

        let period = Period::new(request.ring_radius, request.wheel_radius)?;
        let samples = options.sample_count(period.end_t)?;

        log::debug!(
            "spirograph R={} r={} {}: gcd={} revolutions={} end_t={} samples/pen={} pens={}",
            request.ring_radius,
            request.wheel_radius,
            request.mode,
            period.gcd,
            period.revolutions,
            period.end_t,
            samples,
            request.pen_offsets.len()
        );

        let trochoids = request
            .pen_offsets
            .iter()
            .map(|&offset| Trochoid::new(request.ring_radius, request.wheel_radius, offset, request.mode))
            .collect();

        Ok(Self {
            period,
            options: *options,
            samples,
            trochoids,
        })
    }

    /// Samples one pen over `[0, end_t]`.
    pub fn trace(&self, pen: &Trochoid) -> PenTrace {
        let mut points = Vec::with_capacity(self.samples);
        points.extend((0..self.samples).map(|i| pen.point_at(self.options.parameter_at(i))));
        PenTrace::new(pen.offset(), points)
    }

    pub fn finish(self, traces: Vec<PenTrace>) -> CurveResult {
        let result = CurveResult::new(self.period, traces);
        debug_assert!(result.check_finite().is_ok(), "valid request produced non-finite samples");
        result
    }
}

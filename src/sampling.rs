//! Sampling resolution and work bounds.

use crate::errors::{CurveError, Result};
use crate::float_types::Real;

/// Default parameter increment between consecutive samples, in radians.
pub const DEFAULT_STEP: Real = 0.01;

/// Default cap on samples per pen.
///
/// Near-incommensurate radii push the period (and the sample count) up
/// without bound, so requests past this are refused rather than computed.
pub const DEFAULT_MAX_SAMPLES: usize = 1_000_000;

/// How densely each pen's curve is sampled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplingOptions {
    /// Increment of the curve parameter `t` between samples.
    pub step: Real,
    /// Largest number of samples a single pen may produce.
    pub max_samples: usize,
}

impl Default for SamplingOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl SamplingOptions {
    pub const fn new() -> Self {
        Self {
            step: DEFAULT_STEP,
            max_samples: DEFAULT_MAX_SAMPLES,
        }
    }

    pub const fn with_step(mut self, step: Real) -> Self {
        self.step = step;
        self
    }

    pub const fn with_max_samples(mut self, max_samples: usize) -> Self {
        self.max_samples = max_samples;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(CurveError::invalid("step", self.step, "must be positive and finite"));
        }
        if self.max_samples == 0 {
            return Err(CurveError::invalid(
                "max_samples",
                self.max_samples as Real,
                "must allow at least one sample",
            ));
        }
        Ok(())
    }

    /// Parameter values `0, step, 2·step, ...` up to and including `end_t`.
    pub fn parameters(&self, end_t: Real) -> Result<impl Iterator<Item = Real>> {
        let options = *self;
        Ok((0..self.sample_count(end_t)?).map(move |i| options.parameter_at(i)))
    }

    /// The `index`-th parameter value. Derived from the index so the last
    /// sample does not drift the way a running sum would.
    #[inline]
    pub fn parameter_at(&self, index: usize) -> Real {
        index as Real * self.step
    }

    /// Number of samples that fit in `[0, end_t]`, both ends included.
    ///
    /// Fails with [`CurveError::SampleLimitExceeded`] when that is more than
    /// `max_samples`, or too many to count at all.
    pub fn sample_count(&self, end_t: Real) -> Result<usize> {
        let steps = (end_t / self.step).floor();
        if steps.is_finite() && steps >= 0.0 && steps < self.max_samples as Real {
            return Ok(steps as usize + 1);
        }
        let samples = if steps.is_finite() {
            (steps as usize).saturating_add(1)
        } else {
            usize::MAX
        };
        Err(CurveError::SampleLimitExceeded {
            samples,
            limit: self.max_samples,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameters_are_index_derived() {
        let options = SamplingOptions::new().with_step(0.25);
        let ts: Vec<Real> = options.parameters(1.0).unwrap().collect();
        assert_eq!(ts, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn sample_count_includes_both_ends() {
        // 2π / 0.01 = 628.3..
        assert_eq!(SamplingOptions::new().sample_count(crate::float_types::TAU), Ok(629));
    }

    #[test]
    fn sample_count_never_overflows() {
        let tiny_step = SamplingOptions::new().with_step(1e-300);
        assert_eq!(
            tiny_step.sample_count(1.0),
            Err(CurveError::SampleLimitExceeded {
                samples: usize::MAX,
                limit: DEFAULT_MAX_SAMPLES
            })
        );
        assert!(SamplingOptions::new().sample_count(Real::INFINITY).is_err());

        let exact = SamplingOptions::new().with_step(1.0).with_max_samples(3);
        assert_eq!(exact.sample_count(2.0), Ok(3));
        assert_eq!(
            exact.sample_count(3.0),
            Err(CurveError::SampleLimitExceeded { samples: 4, limit: 3 })
        );
    }

    #[test]
    fn rejects_bad_step() {
        assert!(SamplingOptions::new().with_step(0.0).validate().is_err());
        assert!(SamplingOptions::new().with_step(-0.1).validate().is_err());
        assert!(SamplingOptions::new().with_step(Real::NAN).validate().is_err());
        assert!(SamplingOptions::new().with_max_samples(0).validate().is_err());
        assert!(SamplingOptions::default().validate().is_ok());
    }
}

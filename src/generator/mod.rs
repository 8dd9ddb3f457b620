//! Spirograph curve generation.

mod plan;
pub mod serial;
pub mod traits;

#[cfg(feature = "parallel")]
pub mod parallel;

// Re-export core types
pub use traits::CurveGenerator;

pub use serial::SerialCurveGenerator;

#[cfg(feature = "parallel")]
pub use parallel::ParallelCurveGenerator;

use crate::errors::Result;
use crate::request::CurveRequest;
use crate::result::CurveResult;
use crate::sampling::SamplingOptions;

/// The generator `generate` uses: parallel when the `parallel` feature is on.
#[cfg(not(feature = "parallel"))]
pub type DefaultCurveGenerator = SerialCurveGenerator;
/// The generator `generate` uses: parallel when the `parallel` feature is on.
#[cfg(feature = "parallel")]
pub type DefaultCurveGenerator = ParallelCurveGenerator;

/// Samples every pen of `request` with the default step.
///
/// # Example
/// ```
/// use spirograph::{generate, CurveRequest};
/// let result = generate(&CurveRequest::inside(5.0, 3.0, vec![2.0])).unwrap();
/// let first = result.traces[0].points[0];
/// assert_eq!((first.x, first.y), (4.0, 0.0));
/// ```
pub fn generate(request: &CurveRequest) -> Result<CurveResult> {
    DefaultCurveGenerator::new().generate(request)
}

/// Samples every pen of `request` with explicit sampling options.
pub fn generate_with(request: &CurveRequest, options: &SamplingOptions) -> Result<CurveResult> {
    DefaultCurveGenerator::new().generate_with(request, options)
}

//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use spirograph::{PenTrace, Point, float_types::Real};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Same as [`approx_eq`] for both coordinates of a point.
pub fn point_approx_eq(p: &Point, x: Real, y: Real, eps: Real) -> bool {
    approx_eq(p.x, x, eps) && approx_eq(p.y, y, eps)
}

/// Largest distance of any sample from the origin.
pub fn max_radius(trace: &PenTrace) -> Real {
    trace.iter().map(|p| p.coords.norm()).fold(0.0, Real::max)
}

/// Asserts every coordinate of the trace is finite.
pub fn assert_finite(trace: &PenTrace) {
    assert_eq!(
        trace.first_non_finite(),
        None,
        "trace for offset {} has non-finite samples",
        trace.offset
    );
}

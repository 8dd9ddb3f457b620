//! Scalar type, circle constants and the gcd stopping tolerance.

/// Coordinate and parameter type, chosen by the `f64` / `f32` features.
#[cfg(feature = "f32")]
pub type Real = f32;
/// Coordinate and parameter type, chosen by the `f64` / `f32` features.
#[cfg(feature = "f64")]
pub type Real = f64;

use core::str::FromStr;
use std::sync::OnceLock;

/// Relative slack for deciding that a Euclid remainder is zero.
///
/// [`crate::period::gcd`] treats a remainder as exhausted once it lies within
/// `tolerance() * min(R, r)` of zero or of the divisor, so radii such as
/// `5.1` and `3.0` resolve to a gcd of `0.3` instead of chasing rounding
/// noise. Larger values close curves sooner; smaller ones make near-integer
/// ratios run for many more revolutions.
///
/// The value is fixed the first time it is read. `SPIROGRAPH_TOLERANCE`
/// in the build environment overrides the default, and so does calling
/// [`set_tolerance`] before the first curve is generated.
static TOLERANCE_CELL: OnceLock<Real> = OnceLock::new();

#[inline]
const fn default_tolerance() -> Real {
    #[cfg(feature = "f32")]
    {
        1e-5
    }
    #[cfg(feature = "f64")]
    {
        1e-9
    }
}

/// The gcd stopping tolerance currently in force, never below `Real::EPSILON`.
pub fn tolerance() -> Real {
    *TOLERANCE_CELL.get_or_init(|| {
        option_env!("SPIROGRAPH_TOLERANCE")
            .and_then(|raw| Real::from_str(raw).ok())
            .map_or(default_tolerance(), |value| value.max(Real::EPSILON))
    })
}

//// Half a turn, in radians.
#[cfg(feature = "f32")]
pub const PI: Real = core::f32::consts::PI;
/// Half a turn, in radians.
#[cfg(feature = "f64")]
pub const PI: Real = core::f64::consts::PI;

/// One full turn of the wheel around the ring, in radians.
#[cfg(feature = "f32")]
pub const TAU: Real = core::f32::consts::TAU;
/// One full turn of the wheel around the ring, in radians.
#[cfg(feature = "f64")]
pub const TAU: Real = core::f64::consts::TAU;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_is_a_small_positive_fraction() {
        let value = tolerance();
        assert!(value >= Real::EPSILON);
        assert!(value < 1e-3);
        // later overrides are ignored once the value has been read
        set_tolerance(0.5);
        assert_eq!(tolerance(), value);
    }
}

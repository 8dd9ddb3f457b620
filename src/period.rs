//! How long the wheel has to roll before the pattern repeats.
//!
//! The pen returns to its starting point once the wheel has travelled a
//! whole number of its own circumferences *and* a whole number of ring
//! circumferences, i.e. after `lcm(R, r)` units of arc length:
//! ```text
//! revolutions = lcm(R, r) / R = r / gcd(R, r)
//! end_t       = 2π · revolutions
//! ```
//! The second form never multiplies the two radii, so huge radii do not
//! overflow.
//!
//! The gcd is computed with Euclid's algorithm on reals. Floating-point
//! remainders rarely hit exactly zero for non-integer radii, so a remainder
//! counts as zero once it is within [`tolerance`] of the *smaller* radius
//! (plus a few ulps of the larger one, the rounding `%` itself introduces).
//! A remainder just short of the divisor is a near-multiple and counts as
//! zero too. The loop gives up after [`MAX_GCD_ITERATIONS`] reductions.

use crate::errors::{CurveError, Result};
use crate::float_types::{Real, TAU, tolerance};

/// Upper bound on Euclid reductions before the current divisor is accepted.
pub const MAX_GCD_ITERATIONS: usize = 128;

/// Rounding slack of one `%` step, in ulps of the larger radius.
const REMAINDER_ULPS: Real = 4.0;

/// The closing period of a spirograph with radii `R` and `r`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Period {
    pub gcd: Real,
    pub lcm: Real,
    /// Turns around the ring before the curve closes.
    pub revolutions: Real,
    /// Last parameter value of the sweep, `2π · revolutions`.
    pub end_t: Real,
}

impl Period {
    /// Computes the period for a ring of radius `ring` and a wheel of radius `wheel`.
    ///
    /// Both radii must be positive and finite.
    ///
    /// # Example
    /// ```
    /// use spirograph::period::Period;
    /// let period = Period::new(5.0, 3.0).unwrap();
    /// assert_eq!(period.revolutions, 3.0);
    /// ```
    pub fn new(ring: Real, wheel: Real) -> Result<Self> {
        for (name, value) in [("ring_radius", ring), ("wheel_radius", wheel)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(CurveError::invalid(name, value, "must be positive and finite"));
            }
        }

        let gcd = gcd(ring, wheel);
        let lcm = ring / gcd * wheel;
        let revolutions = wheel / gcd;
        Ok(Self {
            gcd,
            lcm,
            revolutions,
            end_t: TAU * revolutions,
        })
    }
}

/// Euclid's algorithm over positive reals.
///
/// Terminates on a remainder within `tolerance() * min(a, b)` of zero or of
/// the divisor, or after [`MAX_GCD_ITERATIONS`] steps.
pub fn gcd(a: Real, b: Real) -> Real {
    let (mut a, mut b) = (a.abs(), b.abs());
    let threshold = tolerance() * a.min(b) + REMAINDER_ULPS * Real::EPSILON * a.max(b);

    for _ in 0..MAX_GCD_ITERATIONS {
        if b <= threshold {
            return a;
        }
        let remainder = a % b;
        (a, b) = (b, if b - remainder <= threshold { 0.0 } else { remainder });
    }

    log::warn!(
        "gcd did not converge after {} iterations, using {} (radii look incommensurate)",
        MAX_GCD_ITERATIONS,
        a
    );
    a
}

/// Least common multiple of two positive reals, `a / gcd(a, b) · b`.
pub fn lcm(a: Real, b: Real) -> Real {
    a / gcd(a, b) * b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_radii() {
        assert_eq!(gcd(5.0, 3.0), 1.0);
        assert_eq!(gcd(3.0, 5.0), 1.0);
        assert_eq!(gcd(200.0, 120.0), 40.0);
        assert_eq!(lcm(5.0, 3.0), 15.0);
    }

    #[test]
    fn equal_radii_close_after_one_turn() {
        let period = Period::new(4.0, 4.0).unwrap();
        assert_eq!(period.gcd, 4.0);
        assert_eq!(period.revolutions, 1.0);
        assert_eq!(period.end_t, TAU);
    }

    #[test]
    fn huge_radii_do_not_overflow() {
        let period = Period::new(1e300, 1e300).unwrap();
        assert_eq!(period.revolutions, 1.0);
        assert_eq!(period.end_t, TAU);

        let period = Period::new(1e200, 3e199).unwrap();
        assert!((period.revolutions - 3.0).abs() < 1e-9);
        assert!(period.lcm.is_finite());
    }

    #[test]
    fn tiny_wheel_still_closes_after_one_turn() {
        let period = Period::new(1.0, 1e-10).unwrap();
        assert_eq!(period.gcd, 1e-10);
        assert_eq!(period.revolutions, 1.0);

        let period = Period::new(7.0, 1e-12).unwrap();
        assert_eq!(period.revolutions, 1.0);
    }

    #[test]
    fn near_multiple_remainder_counts_as_zero() {
        // 0.3 % 0.1 == 0.09999999999999998
        assert_eq!(gcd(0.3, 0.1), 0.1);
        assert_eq!(Period::new(0.3, 0.1).unwrap().revolutions, 1.0);
    }

    #[test]
    fn rejects_zero_radius() {
        assert!(Period::new(0.0, 3.0).is_err());
        assert!(Period::new(3.0, 0.0).is_err());
        assert!(Period::new(-3.0, 1.0).is_err());
    }
}

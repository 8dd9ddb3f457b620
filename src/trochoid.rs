//! **Mathematical Foundation: Trochoids of a Rolling Circle**
//!
//! A wheel of radius `r` rolls without slipping along a fixed ring of
//! radius `R`. A pen sits at distance `d` from the wheel's centre.
//!
//! ### **Hypotrochoid** (wheel inside the ring)
//! ```text
//! x(t) = (R − r)·cos(t) + d·cos(((R − r)/r)·t)
//! y(t) = (R − r)·sin(t) − d·sin(((R − r)/r)·t)
//! ```
//!
//! ### **Epitrochoid** (wheel outside the ring)
//! ```text
//! x(t) = (R + r)·cos(t) − d·cos(((R + r)/r)·t)
//! y(t) = (R + r)·sin(t) − d·sin(((R + r)/r)·t)
//! ```
//!
//! The first term is the path of the wheel centre, the second the pen
//! spinning around it. With `d = 0` only the centre circle remains.

use crate::float_types::Real;
use crate::request::Mode;
use nalgebra::Point2;

/// One pen's curve, ready to be evaluated at any parameter `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trochoid {
    /// Distance from the ring centre to the wheel centre, `R ∓ r`.
    center_distance: Real,
    /// Angular speed of the pen relative to the wheel centre's, `(R ∓ r)/r`.
    spin_ratio: Real,
    offset: Real,
    mode: Mode,
}

impl Trochoid {
    /// `wheel` must be non-zero; callers validate the request first.
    pub fn new(ring: Real, wheel: Real, offset: Real, mode: Mode) -> Self {
        let center_distance = match mode {
            Mode::Inside => ring - wheel,
            Mode::Outside => ring + wheel,
        };
        Self {
            center_distance,
            spin_ratio: center_distance / wheel,
            offset,
            mode,
        }
    }

    pub const fn offset(&self) -> Real {
        self.offset
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Position of the pen at parameter `t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point2<Real> {
        let (sin_t, cos_t) = t.sin_cos();
        let (sin_spin, cos_spin) = (self.spin_ratio * t).sin_cos();
        let x = match self.mode {
            Mode::Inside => self.center_distance * cos_t + self.offset * cos_spin,
            Mode::Outside => self.center_distance * cos_t - self.offset * cos_spin,
        };
        let y = self.center_distance * sin_t - self.offset * sin_spin;
        Point2::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::float_types::PI;

    #[test]
    fn starts_on_the_x_axis() {
        let hypo = Trochoid::new(5.0, 3.0, 2.0, Mode::Inside);
        assert_eq!(hypo.point_at(0.0), Point2::new(4.0, 0.0));

        let epi = Trochoid::new(4.0, 4.0, 1.0, Mode::Outside);
        assert_eq!(epi.point_at(0.0), Point2::new(7.0, 0.0));
    }

    #[test]
    fn zero_offset_follows_the_wheel_centre() {
        let hypo = Trochoid::new(10.0, 4.0, 0.0, Mode::Inside);
        let p = hypo.point_at(PI / 2.0);
        assert!(p.x.abs() < 1e-9);
        assert!((p.y - 6.0).abs() < 1e-9);
    }
}

//! The parameters of a spirograph drawing.

use crate::errors::{CurveError, Result};
use crate::float_types::Real;
use std::fmt;

/// Which side of the fixed ring the wheel rolls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Wheel rolls inside the ring and traces a hypotrochoid.
    Inside,
    /// Wheel rolls around the outside of the ring and traces an epitrochoid.
    #[default]
    Outside,
}

impl Mode {
    pub const fn is_inside(self) -> bool {
        matches!(self, Mode::Inside)
    }
}

/// Host conventions pass the mode as a flag where `true` means inside.
impl From<bool> for Mode {
    fn from(inside: bool) -> Self {
        if inside { Mode::Inside } else { Mode::Outside }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Inside => write!(f, "inside"),
            Mode::Outside => write!(f, "outside"),
        }
    }
}

/// A fixed ring of radius `ring_radius`, a wheel of radius `wheel_radius`
/// and one pen per entry of `pen_offsets`.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveRequest {
    pub ring_radius: Real,
    pub wheel_radius: Real,
    pub pen_offsets: Vec<Real>,
    pub mode: Mode,
}

impl CurveRequest {
    /// Creates a request. Nothing is checked until [`CurveRequest::validate`]
    /// (which [`crate::generate`] calls for you).
    ///
    /// # Example
    /// ```
    /// use spirograph::{CurveRequest, Mode};
    /// let request = CurveRequest::new(5.0, 3.0, vec![2.0], Mode::Inside);
    /// assert!(request.validate().is_ok());
    /// ```
    pub fn new(ring_radius: Real, wheel_radius: Real, pen_offsets: Vec<Real>, mode: Mode) -> Self {
        Self {
            ring_radius,
            wheel_radius,
            pen_offsets,
            mode,
        }
    }

    /// Hypotrochoid request with the wheel inside the ring.
    pub fn inside(ring_radius: Real, wheel_radius: Real, pen_offsets: Vec<Real>) -> Self {
        Self::new(ring_radius, wheel_radius, pen_offsets, Mode::Inside)
    }

    /// Epitrochoid request with the wheel outside the ring.
    pub fn outside(ring_radius: Real, wheel_radius: Real, pen_offsets: Vec<Real>) -> Self {
        Self::new(ring_radius, wheel_radius, pen_offsets, Mode::Outside)
    }

    /// Appends another pen.
    pub fn with_pen(mut self, offset: Real) -> Self {
        self.pen_offsets.push(offset);
        self
    }

    /// Rejects anything that would divide by zero or poison the samples with
    /// NaN/infinity. An empty pen list is fine.
    pub fn validate(&self) -> Result<()> {
        check_radius("ring_radius", self.ring_radius)?;
        check_radius("wheel_radius", self.wheel_radius)?;
        for &offset in &self.pen_offsets {
            if !offset.is_finite() {
                return Err(CurveError::invalid("pen_offset", offset, "must be finite"));
            }
        }
        Ok(())
    }
}

impl Default for CurveRequest {
    /// An epitrochoid with `R = 200`, `r = 120` and one pen at `d = 80`.
    fn default() -> Self {
        CurveRequest::outside(200.0, 120.0, vec![80.0])
    }
}

fn check_radius(name: &'static str, value: Real) -> Result<()> {
    if !value.is_finite() {
        Err(CurveError::invalid(name, value, "must be finite"))
    } else if value == 0.0 {
        Err(CurveError::invalid(name, value, "must not be zero"))
    } else if value < 0.0 {
        Err(CurveError::invalid(name, value, "must be positive"))
    } else {
        Ok(())
    }
}

//! Sampled curves, one trace per pen.

use crate::errors::{CurveError, Result};
use crate::float_types::Real;
use crate::period::Period;
use geo::{BoundingRect, Coord, LineString, MultiLineString, Rect};
use nalgebra::Point2;

/// A sampled point on a curve.
pub type Point = Point2<Real>;

/// The samples drawn by a single pen, in drawing order (increasing `t`).
#[derive(Debug, Clone, PartialEq)]
pub struct PenTrace {
    pub offset: Real,
    pub points: Vec<Point>,
}

impl PenTrace {
    pub const fn new(offset: Real, points: Vec<Point>) -> Self {
        Self { offset, points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Whether the final sample lands within `eps` of the first one.
    ///
    /// The sweep stops at the last step before the period ends, so `eps`
    /// has to allow for one step of travel.
    pub fn is_closed(&self, eps: Real) -> bool {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => (last - first).norm() <= eps,
            _ => false,
        }
    }

    /// Index of the first non-finite sample, if any.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.points
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
    }

    /// Converts the trace into a `geo` polyline.
    pub fn to_line_string(&self) -> LineString<Real> {
        self.points
            .iter()
            .map(|p| Coord { x: p.x, y: p.y })
            .collect::<Vec<_>>()
            .into()
    }
}

impl<'a> IntoIterator for &'a PenTrace {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Every pen's trace, index-aligned with the request's pen offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveResult {
    pub period: Period,
    pub traces: Vec<PenTrace>,
}

impl CurveResult {
    pub const fn new(period: Period, traces: Vec<PenTrace>) -> Self {
        Self { period, traces }
    }

    pub fn len(&self) -> usize {
        self.traces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PenTrace> {
        self.traces.iter()
    }

    /// Total number of points over all pens.
    pub fn point_count(&self) -> usize {
        self.traces.iter().map(PenTrace::len).sum()
    }

    /// Fails with [`CurveError::DegenerateResult`] naming the first pen and
    /// sample that is NaN or infinite.
    pub fn check_finite(&self) -> Result<()> {
        for (pen, trace) in self.traces.iter().enumerate() {
            if let Some(sample) = trace.first_non_finite() {
                return Err(CurveError::DegenerateResult { pen, sample });
            }
        }
        Ok(())
    }

    /// All traces as one `geo` multi-polyline.
    pub fn to_multi_line_string(&self) -> MultiLineString<Real> {
        MultiLineString::new(self.traces.iter().map(PenTrace::to_line_string).collect())
    }

    /// Axis-aligned extent of every pen together, `None` if nothing was drawn.
    pub fn bounding_rect(&self) -> Option<Rect<Real>> {
        self.to_multi_line_string().bounding_rect()
    }

    pub fn into_traces(self) -> Vec<PenTrace> {
        self.traces
    }
}

impl<'a> IntoIterator for &'a CurveResult {
    type Item = &'a PenTrace;
    type IntoIter = std::slice::Iter<'a, PenTrace>;

    fn into_iter(self) -> Self::IntoIter {
        self.traces.iter()
    }
}

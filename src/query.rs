//! Shareable query strings such as `R=200&r=120&d=80,40&inside=true`.
//!
//! Missing keys fall back to the defaults of [`CurveRequest::default`];
//! unknown keys are ignored so links carrying extra display settings
//! (colours, speed, line width) still parse.

use crate::errors::{CurveError, Result};
use crate::float_types::Real;
use crate::request::{CurveRequest, Mode};

impl CurveRequest {
    /// Encodes the request as `R=..&r=..&d=..&inside=..`.
    pub fn to_query_string(&self) -> String {
        let offsets = self
            .pen_offsets
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(",");
        format!(
            "R={}&r={}&d={}&inside={}",
            self.ring_radius,
            self.wheel_radius,
            offsets,
            self.mode.is_inside()
        )
    }

    /// Parses a query string produced by [`CurveRequest::to_query_string`].
    ///
    /// A leading `?` is accepted. The parsed request is validated.
    ///
    /// # Example
    /// ```
    /// use spirograph::{CurveRequest, Mode};
    /// let request = CurveRequest::from_query_string("?R=160&r=40&d=80&inside=true").unwrap();
    /// assert_eq!(request, CurveRequest::new(160.0, 40.0, vec![80.0], Mode::Inside));
    /// ```
    pub fn from_query_string(query: &str) -> Result<Self> {
        let mut request = CurveRequest::default();

        for pair in query.trim_start_matches('?').split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            match key {
                "R" => request.ring_radius = parse_real(key, value)?,
                "r" => request.wheel_radius = parse_real(key, value)?,
                "d" => {
                    request.pen_offsets = value
                        .split(',')
                        .filter(|d| !d.is_empty())
                        .map(|d| parse_real(key, d))
                        .collect::<Result<_>>()?
                },
                "inside" => request.mode = Mode::from(parse_flag(key, value)?),
                _ => log::debug!("ignoring query key '{}'", key),
            }
        }

        request.validate()?;
        Ok(request)
    }
}

fn malformed(key: &str, value: &str) -> CurveError {
    CurveError::MalformedQuery {
        key: key.to_string(),
        value: value.to_string(),
    }
}

fn parse_real(key: &str, value: &str) -> Result<Real> {
    value.trim().parse::<Real>().map_err(|_| malformed(key, value))
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(malformed(key, value)),
    }
}

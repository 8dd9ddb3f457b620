//! Sampled **spirograph** curves: the hypotrochoids and epitrochoids traced by
//! pens mounted on a wheel rolling inside or outside a fixed ring.
//!
//! Given the ring radius `R`, the wheel radius `r`, a list of pen offsets and
//! a [`Mode`], [`generate`] works out how many turns the wheel needs before
//! the pattern closes ([`period`]) and samples every pen's curve over that
//! range into a [`PenTrace`].
//!
//! ```
//! use spirograph::{generate, CurveRequest};
//!
//! let result = generate(&CurveRequest::outside(4.0, 4.0, vec![1.0, 2.0])).unwrap();
//! assert_eq!(result.len(), 2);
//! assert_eq!(result.traces[0].len(), 629);
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon to trace pens concurrently
//! - **wasm**: `wasm-bindgen` entry points (`spirograph`, `spirographPreset`, `CurveRequestJs`)
//! - **console_error_panic_hook**: readable panics in the browser console

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod generator;
pub mod period;
pub mod presets;
pub mod query;
pub mod request;
pub mod result;
pub mod sampling;
pub mod trochoid;

#[cfg(feature = "wasm")]
pub mod wasm;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::CurveError;
pub use generator::{CurveGenerator, SerialCurveGenerator, generate, generate_with};
pub use period::Period;
pub use presets::Preset;
pub use request::{CurveRequest, Mode};
pub use result::{CurveResult, PenTrace, Point};
pub use sampling::SamplingOptions;

#[cfg(feature = "parallel")]
pub use generator::ParallelCurveGenerator;

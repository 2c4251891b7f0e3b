//! # ramp-curve
//!
//! Curve model and interpolation engine for ramp widgets.
//!
//! A ramp is authored as a small set of control vertices (CVs), each with a
//! position in [0, 1], a value, and a per-segment interpolation mode. This
//! crate derives a continuous function from that list and keeps it in sync
//! through insert/remove/update edits.
//!
//! # Types
//!
//! - [`CurveModel`] - CV storage plus the derived evaluation structure
//! - [`CurveSampler`] - the rebuilt, position-sorted sampling data
//! - [`ControlVertex`] / [`InterpMode`] - the authored data model
//! - [`CurveValue`] - value abstraction over scalar and color ramps
//!
//! # Interpolation modes
//!
//! `None` (step), `Linear`, `Smooth` (smoothstep), `Spline` (global natural
//! cubic), and `MonotoneSpline` (Fritsch-Carlson Hermite, the default; never
//! overshoots between neighboring CVs).
//!
//! # Usage
//!
//! ```rust
//! use ramp_curve::{CurveModel, InterpMode};
//!
//! let mut curve = CurveModel::new();
//! curve.add_point(0.0, 0.0_f32, InterpMode::MonotoneSpline);
//! curve.add_point(0.5, 1.0_f32, InterpMode::MonotoneSpline);
//! curve.add_point(1.0, 0.0_f32, InterpMode::MonotoneSpline);
//!
//! // Flat extrapolation outside the CV range
//! assert_eq!(curve.evaluate(-1.0), 0.0);
//! assert_eq!(curve.evaluate(2.0), 0.0);
//!
//! // Color curves share the same semantics channel-wise
//! let mut ramp = CurveModel::<glam::Vec3>::new();
//! ramp.add_point(0.0, glam::Vec3::ZERO, InterpMode::Linear);
//! ramp.add_point(1.0, glam::Vec3::ONE, InterpMode::Linear);
//! ```
//!
//! # Concurrency
//!
//! Single-threaded and synchronous: every mutation rebuilds the derived
//! structure inline before returning, so `evaluate` never observes a stale
//! curve. Callers needing shared access serialize externally.
//!
//! # Dependencies
//!
//! - [`glam`] - color value type
//! - [`thiserror`] - error handling
//! - [`tracing`] - rebuild diagnostics
//!
//! # Used By
//!
//! - `ramp-edit` - selection and edit-intent session layer

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod model;
mod sampler;
mod spline;
mod types;
mod value;

pub use error::{CurveError, CurveResult};
pub use model::CurveModel;
pub use sampler::CurveSampler;
pub use types::{ControlVertex, InterpMode};
pub use value::CurveValue;

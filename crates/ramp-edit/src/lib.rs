//! # ramp-edit
//!
//! Selection and edit-intent session layer for [`ramp_curve`] models.
//!
//! A UI (or any other collaborator) owns the widget chrome, event handling,
//! and screen-space mapping; [`EditSession`] owns what is left of the
//! editing state: which CV is selected, which interpolation mode was used
//! last, and the contract that every completed edit produces exactly one
//! [`CurveChange`] notification.
//!
//! # Usage
//!
//! ```rust
//! use ramp_curve::{CurveModel, InterpMode};
//! use ramp_edit::{CurveChange, EditSession};
//! use std::cell::Cell;
//!
//! let changes = Cell::new(0);
//! let mut curve: CurveModel<f32> = CurveModel::new();
//! {
//!     let mut session = EditSession::new(&mut curve);
//!     session.on_change(|_: CurveChange| changes.set(changes.get() + 1));
//!
//!     session.create_at(0.0, 0.0);
//!     session.create_at(1.0, 1.0);
//!     session.move_selected(1.0, 0.9);
//! }
//! assert_eq!(changes.get(), 3);
//! assert_eq!(curve.len(), 2);
//! ```
//!
//! # Dependencies
//!
//! - [`ramp_curve`] - the curve model this session drives
//! - [`tracing`] - per-edit diagnostics

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod session;

pub use session::{CurveChange, EditSession};

//! Core types: interpolation modes and control vertices.

use crate::CurveValue;

/// Interpolation rule for the segment ending at a control vertex.
///
/// Between two adjacent CVs, the *right* CV's mode selects the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpMode {
    /// Step function: hold the left CV's value until the right CV's position.
    None,

    /// Linear interpolation between the neighboring CVs.
    Linear,

    /// Smoothstep (cubic Hermite with zero endpoint derivatives).
    Smooth,

    /// Global natural cubic spline through all CVs.
    ///
    /// May overshoot outside the CVs' value range.
    Spline,

    /// Monotone cubic Hermite spline (Fritsch-Carlson tangents).
    ///
    /// Never overshoots between consecutive CV values, which avoids visual
    /// ringing in ramps. The default and recommended mode.
    #[default]
    MonotoneSpline,
}

/// One authored point of a curve.
///
/// A control vertex carries a parameter position in [0, 1], a value, and the
/// interpolation mode applied to the segment ending at it.
///
/// # Example
///
/// ```rust
/// use ramp_curve::{ControlVertex, InterpMode};
///
/// let cv = ControlVertex::new(0.5, 0.8_f32, InterpMode::Linear);
/// assert_eq!(cv.position, 0.5);
///
/// // Positions and scalar values clamp to the unit range
/// let cv = ControlVertex::new(1.7, -0.2_f32, InterpMode::Linear);
/// assert_eq!(cv.position, 1.0);
/// assert_eq!(cv.value, 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ControlVertex<T: CurveValue> {
    /// Parameter position in [0, 1].
    pub position: f32,
    /// Curve value at this position.
    pub value: T,
    /// Rule for the segment ending at this CV.
    pub interp: InterpMode,
}

impl<T: CurveValue> ControlVertex<T> {
    /// Creates a control vertex, clamping `position` (and, for scalar
    /// curves, `value`) into the unit range.
    #[inline]
    pub fn new(position: f32, value: T, interp: InterpMode) -> Self {
        Self {
            position: position.clamp(0.0, 1.0),
            value: value.clamp_unit(),
            interp,
        }
    }
}

impl<T: CurveValue> Default for ControlVertex<T> {
    fn default() -> Self {
        Self {
            position: 0.0,
            value: T::default(),
            interp: InterpMode::default(),
        }
    }
}

//! Derived evaluation structure for a curve.
//!
//! [`CurveSampler`] is the precomputed, position-sorted representation that
//! answers `evaluate` and `lower_bound_interp` queries. It is rebuilt from
//! the control vertex list on every mutation and never mutated in place.

use crate::spline::{
    hermite, monotone_tangents, natural_second_derivatives, natural_segment, segment_width,
    smooth_weight,
};
use crate::{ControlVertex, CurveValue, InterpMode};

/// Precomputed sampling data for a set of control vertices.
///
/// Holds a stable position-sorted copy of the CVs (ties keep insertion
/// order) plus per-CV monotone Hermite tangents and natural-spline second
/// derivatives, one lane per value channel.
///
/// # Example
///
/// ```rust
/// use ramp_curve::{ControlVertex, CurveSampler, InterpMode};
///
/// let sampler = CurveSampler::build(&[
///     ControlVertex::new(0.0, 0.0_f32, InterpMode::Linear),
///     ControlVertex::new(1.0, 1.0_f32, InterpMode::Linear),
/// ]);
/// assert!((sampler.evaluate(0.5) - 0.5).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct CurveSampler<T: CurveValue> {
    /// CVs sorted by position ascending, stable on ties.
    cvs: Vec<ControlVertex<T>>,
    /// Fritsch-Carlson Hermite tangent per sorted CV.
    tangents: Vec<T>,
    /// Natural-spline second derivative per sorted CV.
    second_derivs: Vec<T>,
}

impl<T: CurveValue> CurveSampler<T> {
    /// Builds the sampler from a control vertex list in any order.
    pub fn build(points: &[ControlVertex<T>]) -> Self {
        let mut cvs = points.to_vec();
        // Stable sort: CVs sharing a position keep their insertion order
        cvs.sort_by(|a, b| a.position.total_cmp(&b.position));

        let n = cvs.len();
        let mut tangents = vec![T::default(); n];
        let mut second_derivs = vec![T::default(); n];

        if n >= 2 {
            let xs: Vec<f32> = cvs.iter().map(|cv| cv.position).collect();
            let mut ys = vec![0.0_f32; n];
            for c in 0..T::CHANNELS {
                for (y, cv) in ys.iter_mut().zip(&cvs) {
                    *y = cv.value.channel(c);
                }
                let m = monotone_tangents(&xs, &ys);
                let y2 = natural_second_derivatives(&xs, &ys);
                for i in 0..n {
                    tangents[i].set_channel(c, m[i]);
                    second_derivs[i].set_channel(c, y2[i]);
                }
            }
        }

        Self {
            cvs,
            tangents,
            second_derivs,
        }
    }

    /// Number of control vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.cvs.len()
    }

    /// Returns true if the sampler has no control vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cvs.is_empty()
    }

    /// Samples the curve at parameter `x`.
    ///
    /// Outside the CV range the boundary value extends flat. An empty curve
    /// evaluates to `T::default()`; a single CV evaluates to its value
    /// everywhere. Between two CVs the *right* CV's interpolation mode
    /// selects the segment rule, applied independently per channel.
    pub fn evaluate(&self, x: f32) -> T {
        let n = self.cvs.len();
        match n {
            0 => return T::default(),
            1 => return self.cvs[0].value,
            _ => {}
        }

        // NaN compares false against every position, which would send the
        // segment search below the first CV; treat it as preceding all CVs,
        // like lower_bound_interp does.
        if x.is_nan() || x < self.cvs[0].position {
            return self.cvs[0].value;
        }
        if x >= self.cvs[n - 1].position {
            return self.cvs[n - 1].value;
        }

        // First CV strictly past x; x is inside [first, last) so the
        // containing segment is [right - 1, right]. Landing exactly on a CV
        // position puts x at the start of the following segment, which makes
        // the step mode right-continuous.
        let right = self.cvs.partition_point(|cv| cv.position <= x);
        let left = right - 1;
        let lo = &self.cvs[left];
        let hi = &self.cvs[right];

        match hi.interp {
            InterpMode::None => lo.value,
            InterpMode::Linear => {
                let t = ((x - lo.position) / segment_width(lo.position, hi.position)).clamp(0.0, 1.0);
                blend(lo.value, hi.value, t)
            }
            InterpMode::Smooth => {
                let t = ((x - lo.position) / segment_width(lo.position, hi.position)).clamp(0.0, 1.0);
                blend(lo.value, hi.value, smooth_weight(t))
            }
            InterpMode::Spline => {
                let mut out = T::default();
                for c in 0..T::CHANNELS {
                    let y = natural_segment(
                        lo.position,
                        hi.position,
                        lo.value.channel(c),
                        hi.value.channel(c),
                        self.second_derivs[left].channel(c),
                        self.second_derivs[right].channel(c),
                        x,
                    );
                    out.set_channel(c, y);
                }
                out
            }
            InterpMode::MonotoneSpline => {
                let mut out = T::default();
                for c in 0..T::CHANNELS {
                    let y = hermite(
                        lo.position,
                        hi.position,
                        lo.value.channel(c),
                        hi.value.channel(c),
                        self.tangents[left].channel(c),
                        self.tangents[right].channel(c),
                        x,
                    );
                    out.set_channel(c, y);
                }
                out
            }
        }
    }

    /// Returns the interpolation mode of the CV with the greatest sorted
    /// position at or before `x`, or [`InterpMode::None`] if `x` precedes
    /// every CV.
    ///
    /// Used so a freshly inserted point inherits its left neighbor's mode.
    pub fn lower_bound_interp(&self, x: f32) -> InterpMode {
        let idx = self.cvs.partition_point(|cv| cv.position <= x);
        if idx == 0 {
            InterpMode::None
        } else {
            self.cvs[idx - 1].interp
        }
    }
}

fn blend<T: CurveValue>(a: T, b: T, w: f32) -> T {
    let mut out = T::default();
    for c in 0..T::CHANNELS {
        let y0 = a.channel(c);
        let y1 = b.channel(c);
        out.set_channel(c, y0 + (y1 - y0) * w);
    }
    out
}

impl<T: CurveValue> Default for CurveSampler<T> {
    fn default() -> Self {
        Self::build(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cv(p: f32, v: f32, i: InterpMode) -> ControlVertex<f32> {
        ControlVertex::new(p, v, i)
    }

    #[test]
    fn test_empty_returns_default() {
        let s: CurveSampler<f32> = CurveSampler::build(&[]);
        assert_eq!(s.evaluate(0.5), 0.0);
        assert_eq!(s.evaluate(-10.0), 0.0);
    }

    #[test]
    fn test_single_cv_is_constant() {
        let s = CurveSampler::build(&[cv(0.3, 0.7, InterpMode::Linear)]);
        assert_eq!(s.evaluate(0.0), 0.7);
        assert_eq!(s.evaluate(0.3), 0.7);
        assert_eq!(s.evaluate(5.0), 0.7);
    }

    #[test]
    fn test_flat_extrapolation() {
        let s = CurveSampler::build(&[
            cv(0.2, 0.4, InterpMode::Linear),
            cv(0.8, 0.9, InterpMode::Linear),
        ]);
        assert_eq!(s.evaluate(-1.0), 0.4);
        assert_eq!(s.evaluate(0.0), 0.4);
        assert_eq!(s.evaluate(1.0), 0.9);
        assert_eq!(s.evaluate(2.0), 0.9);
    }

    #[test]
    fn test_step_holds_left_value() {
        let s = CurveSampler::build(&[
            cv(0.2, 0.5, InterpMode::None),
            cv(0.8, 0.9, InterpMode::None),
        ]);
        // Step is right-continuous: left value holds on [0.2, 0.8)
        assert_eq!(s.evaluate(0.1), 0.5);
        assert_eq!(s.evaluate(0.2), 0.5);
        assert_eq!(s.evaluate(0.79), 0.5);
        assert_eq!(s.evaluate(0.8), 0.9);
    }

    #[test]
    fn test_nan_parameter_returns_first_value() {
        let s = CurveSampler::build(&[
            cv(0.2, 0.4, InterpMode::Linear),
            cv(0.8, 0.9, InterpMode::Linear),
        ]);
        assert_eq!(s.evaluate(f32::NAN), 0.4);
    }

    #[test]
    fn test_unsorted_input_is_sorted() {
        let s = CurveSampler::build(&[
            cv(1.0, 1.0, InterpMode::Linear),
            cv(0.0, 0.0, InterpMode::Linear),
        ]);
        assert_relative_eq!(s.evaluate(0.25), 0.25, epsilon = 1e-6);
    }

    #[test]
    fn test_smooth_midpoint() {
        let s = CurveSampler::build(&[
            cv(0.0, 0.0, InterpMode::Smooth),
            cv(1.0, 1.0, InterpMode::Smooth),
        ]);
        // Smoothstep keeps the midpoint on the secant
        assert_relative_eq!(s.evaluate(0.5), 0.5, epsilon = 1e-6);
        assert!(s.evaluate(0.25) < 0.25, "eased in below the secant");
        assert!(s.evaluate(0.75) > 0.75, "eased out above the secant");
    }

    #[test]
    fn test_lower_bound_interp() {
        let s = CurveSampler::build(&[
            cv(0.3, 0.0, InterpMode::Linear),
            cv(0.7, 1.0, InterpMode::Smooth),
        ]);
        assert_eq!(s.lower_bound_interp(0.1), InterpMode::None);
        assert_eq!(s.lower_bound_interp(0.3), InterpMode::Linear);
        assert_eq!(s.lower_bound_interp(0.5), InterpMode::Linear);
        assert_eq!(s.lower_bound_interp(0.7), InterpMode::Smooth);
        assert_eq!(s.lower_bound_interp(2.0), InterpMode::Smooth);
    }

    #[test]
    fn test_color_channels_independent() {
        let s = CurveSampler::build(&[
            ControlVertex::new(0.0, glam::Vec3::new(0.0, 1.0, 0.5), InterpMode::Linear),
            ControlVertex::new(1.0, glam::Vec3::new(1.0, 0.0, 0.5), InterpMode::Linear),
        ]);
        let mid = s.evaluate(0.5);
        assert_relative_eq!(mid.x, 0.5, epsilon = 1e-6);
        assert_relative_eq!(mid.y, 0.5, epsilon = 1e-6);
        assert_relative_eq!(mid.z, 0.5, epsilon = 1e-6);
    }
}

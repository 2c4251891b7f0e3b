//! Channel-wise interpolation math.
//!
//! These helpers operate on one channel of sorted control vertices at a
//! time: `xs` are positions, `ys` are the channel values. The caller runs
//! them once per channel and stores the results back into vector form.

/// Minimum segment width used by the solvers.
///
/// Authoring tools produce coincident positions mid-drag; segment widths are
/// clamped away from zero so the spline systems stay finite.
pub(crate) const MIN_SEGMENT: f32 = 1e-6;

#[inline]
pub(crate) fn segment_width(x0: f32, x1: f32) -> f32 {
    (x1 - x0).max(MIN_SEGMENT)
}

/// Smoothstep weight on [0, 1]: `t^2 * (3 - 2t)`.
#[inline]
pub(crate) fn smooth_weight(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Fritsch-Carlson monotone tangents for a cubic Hermite interpolant.
///
/// Tangents are the averaged secant slopes, zeroed at local extrema and
/// limited so that `alpha^2 + beta^2 <= 9` per segment. The resulting
/// Hermite curve never leaves the value range spanned by two consecutive
/// points.
pub(crate) fn monotone_tangents(xs: &[f32], ys: &[f32]) -> Vec<f32> {
    let n = xs.len();
    debug_assert_eq!(n, ys.len());
    if n < 2 {
        return vec![0.0; n];
    }

    let mut delta = Vec::with_capacity(n - 1);
    for i in 0..n - 1 {
        let dx = xs[i + 1] - xs[i];
        let dy = ys[i + 1] - ys[i];
        delta.push(if dx < MIN_SEGMENT { 0.0 } else { dy / dx });
    }

    let mut m = vec![0.0_f32; n];
    m[0] = delta[0];
    m[n - 1] = delta[n - 2];
    for i in 1..n - 1 {
        // Zero tangent at local extrema keeps the interpolant in bounds
        m[i] = if delta[i - 1] * delta[i] <= 0.0 {
            0.0
        } else {
            (delta[i - 1] + delta[i]) / 2.0
        };
    }

    for i in 0..n - 1 {
        if delta[i].abs() < MIN_SEGMENT {
            m[i] = 0.0;
            m[i + 1] = 0.0;
        } else {
            let alpha = m[i] / delta[i];
            let beta = m[i + 1] / delta[i];
            let s = alpha * alpha + beta * beta;
            if s > 9.0 {
                let tau = 3.0 / s.sqrt();
                m[i] = tau * alpha * delta[i];
                m[i + 1] = tau * beta * delta[i];
            }
        }
    }

    m
}

/// Second derivatives of a natural cubic spline through `(xs, ys)`.
///
/// Tridiagonal forward sweep with back substitution; natural boundary
/// conditions leave the end second derivatives at zero.
pub(crate) fn natural_second_derivatives(xs: &[f32], ys: &[f32]) -> Vec<f32> {
    let n = xs.len();
    debug_assert_eq!(n, ys.len());
    let mut y2 = vec![0.0_f32; n];
    if n < 3 {
        return y2;
    }

    let mut u = vec![0.0_f32; n - 1];
    for i in 1..n - 1 {
        let h0 = segment_width(xs[i - 1], xs[i]);
        let h1 = segment_width(xs[i], xs[i + 1]);
        let sig = h0 / (h0 + h1);
        let p = sig * y2[i - 1] + 2.0;
        y2[i] = (sig - 1.0) / p;
        let d = (ys[i + 1] - ys[i]) / h1 - (ys[i] - ys[i - 1]) / h0;
        u[i] = (6.0 * d / (h0 + h1) - sig * u[i - 1]) / p;
    }

    for k in (0..n - 2).rev() {
        y2[k + 1] = y2[k + 1] * y2[k + 2] + u[k + 1];
    }

    y2
}

/// Evaluates a cubic Hermite segment with explicit endpoint tangents.
#[inline]
pub(crate) fn hermite(x0: f32, x1: f32, y0: f32, y1: f32, m0: f32, m1: f32, x: f32) -> f32 {
    let h = segment_width(x0, x1);
    let t = ((x - x0) / h).clamp(0.0, 1.0);
    let t2 = t * t;
    let t3 = t2 * t;
    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;
    h00 * y0 + h10 * h * m0 + h01 * y1 + h11 * h * m1
}

/// Evaluates a natural cubic spline segment from precomputed second
/// derivatives at its endpoints.
#[inline]
pub(crate) fn natural_segment(x0: f32, x1: f32, y0: f32, y1: f32, y2_0: f32, y2_1: f32, x: f32) -> f32 {
    let h = segment_width(x0, x1);
    let a = ((x1 - x) / h).clamp(0.0, 1.0);
    let b = ((x - x0) / h).clamp(0.0, 1.0);
    a * y0 + b * y1 + ((a * a * a - a) * y2_0 + (b * b * b - b) * y2_1) * h * h / 6.0
}

//! Value types a curve can interpolate.
//!
//! [`CurveValue`] abstracts over the two ramp flavors: scalar ramps
//! (`f32`, one channel) and color ramps ([`glam::Vec3`], three channels).
//! All interpolation math in this crate is defined channel-wise, so both
//! instantiations share identical segment semantics.

/// A value type interpolated by a curve.
///
/// Implementors expose a fixed number of `f32` channels. Scalar curves have
/// one channel; color curves have three, each interpolated independently
/// with the same per-segment rule.
///
/// # Example
///
/// ```rust
/// use ramp_curve::CurveValue;
///
/// let rgb = glam::Vec3::new(0.2, 0.5, 0.8);
/// assert_eq!(glam::Vec3::CHANNELS, 3);
/// assert_eq!(rgb.channel(1), 0.5);
/// ```
pub trait CurveValue: Copy + Default + PartialEq + core::fmt::Debug {
    /// Number of independent channels.
    const CHANNELS: usize;

    /// Returns the channel at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= Self::CHANNELS`.
    fn channel(&self, index: usize) -> f32;

    /// Sets the channel at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= Self::CHANNELS`.
    fn set_channel(&mut self, index: usize, value: f32);

    /// Clamps the value to the editable unit range.
    ///
    /// Scalar ramps are authored in [0, 1] and clamp on every edit. Color
    /// ramps leave channel values unconstrained (HDR swatches are valid),
    /// so the vector implementation passes through unchanged.
    fn clamp_unit(self) -> Self;
}

impl CurveValue for f32 {
    const CHANNELS: usize = 1;

    #[inline]
    fn channel(&self, index: usize) -> f32 {
        assert_eq!(index, 0, "scalar curve value has a single channel");
        *self
    }

    #[inline]
    fn set_channel(&mut self, index: usize, value: f32) {
        assert_eq!(index, 0, "scalar curve value has a single channel");
        *self = value;
    }

    #[inline]
    fn clamp_unit(self) -> Self {
        self.clamp(0.0, 1.0)
    }
}

impl CurveValue for glam::Vec3 {
    const CHANNELS: usize = 3;

    #[inline]
    fn channel(&self, index: usize) -> f32 {
        self[index]
    }

    #[inline]
    fn set_channel(&mut self, index: usize, value: f32) {
        self[index] = value;
    }

    #[inline]
    fn clamp_unit(self) -> Self {
        self
    }
}

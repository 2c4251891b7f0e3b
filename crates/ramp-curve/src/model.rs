//! The curve model: control vertex storage plus its derived sampler.

use tracing::trace;

use crate::{ControlVertex, CurveError, CurveResult, CurveSampler, CurveValue, InterpMode};

/// An editable curve: an insertion-ordered control vertex list and the
/// evaluation structure derived from it.
///
/// The CV list keeps insertion order (the selection-index order a UI sees);
/// the derived [`CurveSampler`] is keyed by sorted position and is rebuilt
/// synchronously on every mutation, so [`evaluate`](Self::evaluate) always
/// reflects the latest committed state.
///
/// Mutations addressing a missing index return
/// [`CurveError::IndexOutOfRange`] and leave the curve untouched.
///
/// # Example
///
/// ```rust
/// use ramp_curve::{CurveModel, InterpMode};
///
/// let mut curve = CurveModel::new();
/// curve.add_point(0.0, 0.0_f32, InterpMode::MonotoneSpline);
/// curve.add_point(1.0, 1.0_f32, InterpMode::MonotoneSpline);
///
/// let mid = curve.evaluate(0.5);
/// assert!(mid > 0.0 && mid < 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct CurveModel<T: CurveValue> {
    cvs: Vec<ControlVertex<T>>,
    sampler: CurveSampler<T>,
}

impl<T: CurveValue> CurveModel<T> {
    /// Creates an empty curve.
    pub fn new() -> Self {
        Self {
            cvs: Vec::new(),
            sampler: CurveSampler::default(),
        }
    }

    /// Creates a curve from an existing CV list, clamping each point.
    ///
    /// Typically sourced from a persisted expression's curve literal.
    pub fn from_points(points: Vec<ControlVertex<T>>) -> Self {
        let mut model = Self::new();
        model.set_points(points);
        model
    }

    /// Number of control vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.cvs.len()
    }

    /// Returns true if the curve has no control vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cvs.is_empty()
    }

    /// The current CV list in insertion order, for persistence or rendering.
    #[inline]
    pub fn points(&self) -> &[ControlVertex<T>] {
        &self.cvs
    }

    /// Appends a control vertex and returns its index.
    ///
    /// `position` clamps to [0, 1]; scalar values clamp as well.
    pub fn add_point(&mut self, position: f32, value: T, interp: InterpMode) -> usize {
        self.cvs.push(ControlVertex::new(position, value, interp));
        self.rebuild();
        self.cvs.len() - 1
    }

    /// Removes the control vertex at `index`.
    ///
    /// Callers holding a selection equal to `index` must reset it.
    pub fn remove_point(&mut self, index: usize) -> CurveResult<()> {
        self.check_index(index)?;
        self.cvs.remove(index);
        self.rebuild();
        Ok(())
    }

    /// Moves the control vertex at `index` to a new (clamped) position.
    pub fn update_position(&mut self, index: usize, position: f32) -> CurveResult<()> {
        self.check_index(index)?;
        self.cvs[index].position = position.clamp(0.0, 1.0);
        self.rebuild();
        Ok(())
    }

    /// Replaces the value of the control vertex at `index`.
    pub fn update_value(&mut self, index: usize, value: T) -> CurveResult<()> {
        self.check_index(index)?;
        self.cvs[index].value = value.clamp_unit();
        self.rebuild();
        Ok(())
    }

    /// Moves position and value of the CV at `index` as one mutation.
    ///
    /// A drag tick changes both; this rebuilds once.
    pub fn update_point(&mut self, index: usize, position: f32, value: T) -> CurveResult<()> {
        self.check_index(index)?;
        self.cvs[index].position = position.clamp(0.0, 1.0);
        self.cvs[index].value = value.clamp_unit();
        self.rebuild();
        Ok(())
    }

    /// Changes the interpolation mode of the CV at `index`.
    pub fn update_interp(&mut self, index: usize, interp: InterpMode) -> CurveResult<()> {
        self.check_index(index)?;
        self.cvs[index].interp = interp;
        self.rebuild();
        Ok(())
    }

    /// Replaces the whole CV list, clamping each point, with one rebuild.
    pub fn set_points(&mut self, points: Vec<ControlVertex<T>>) {
        self.cvs = points
            .into_iter()
            .map(|cv| ControlVertex::new(cv.position, cv.value, cv.interp))
            .collect();
        self.rebuild();
    }

    /// Removes every control vertex.
    pub fn clear(&mut self) {
        self.cvs.clear();
        self.rebuild();
    }

    /// Samples the curve at parameter `x`.
    ///
    /// See [`CurveSampler::evaluate`] for boundary and segment semantics.
    #[inline]
    pub fn evaluate(&self, x: f32) -> T {
        self.sampler.evaluate(x)
    }

    /// Interpolation mode of the nearest CV at or before `x`.
    ///
    /// See [`CurveSampler::lower_bound_interp`].
    #[inline]
    pub fn lower_bound_interp(&self, x: f32) -> InterpMode {
        self.sampler.lower_bound_interp(x)
    }

    fn rebuild(&mut self) {
        trace!(points = self.cvs.len(), "rebuild curve sampler");
        self.sampler = CurveSampler::build(&self.cvs);
    }

    fn check_index(&self, index: usize) -> CurveResult<()> {
        if index >= self.cvs.len() {
            return Err(CurveError::IndexOutOfRange {
                index,
                len: self.cvs.len(),
            });
        }
        Ok(())
    }
}

impl<T: CurveValue> Default for CurveModel<T> {
    fn default() -> Self {
        Self::new()
    }
}

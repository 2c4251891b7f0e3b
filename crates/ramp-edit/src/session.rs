//! The editing session: selection bookkeeping and edit-intent dispatch.

use tracing::debug;

use ramp_curve::{CurveModel, CurveValue, InterpMode};

/// A completed curve mutation, passed to change listeners.
///
/// Exactly one event is delivered per logical edit, after the model's
/// derived structure has been rebuilt. A drag produces one `Moved` event per
/// interaction tick, not per pixel; batching beyond that is the caller's
/// responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveChange {
    /// A control vertex was added at `index`.
    Added {
        /// Insertion-order index of the new CV.
        index: usize,
    },
    /// The control vertex at `index` was removed.
    Removed {
        /// Insertion-order index the CV had before removal.
        index: usize,
    },
    /// The control vertex at `index` moved (position and/or value).
    Moved {
        /// Insertion-order index of the moved CV.
        index: usize,
    },
    /// The control vertex at `index` changed interpolation mode.
    InterpChanged {
        /// Insertion-order index of the retagged CV.
        index: usize,
    },
}

/// An editing session over a borrowed [`CurveModel`].
///
/// Tracks the currently selected CV and the last-used interpolation mode,
/// translates edit intents into model mutations, and notifies registered
/// listeners once per completed mutation. The exclusive borrow ties the
/// session's lifetime to its model and rules out concurrent mutation.
///
/// Screen-space concerns stay outside: hit testing takes caller-projected
/// points and a caller-chosen radius.
///
/// # Example
///
/// ```rust
/// use ramp_curve::{CurveModel, InterpMode};
/// use ramp_edit::EditSession;
///
/// let mut curve = CurveModel::new();
/// let mut session = EditSession::new(&mut curve);
///
/// // A fresh point on an empty model gets the recommended default mode
/// let index = session.create_at(0.5, 0.8_f32);
/// assert_eq!(session.selected(), Some(index));
/// assert_eq!(session.model().points()[index].interp, InterpMode::MonotoneSpline);
/// ```
pub struct EditSession<'m, T: CurveValue> {
    model: &'m mut CurveModel<T>,
    selected: Option<usize>,
    last_interp: InterpMode,
    listeners: Vec<Box<dyn FnMut(CurveChange) + 'm>>,
}

impl<'m, T: CurveValue> EditSession<'m, T> {
    /// Starts a session over `model` with no selection.
    pub fn new(model: &'m mut CurveModel<T>) -> Self {
        Self {
            model,
            selected: None,
            last_interp: InterpMode::default(),
            listeners: Vec::new(),
        }
    }

    /// Registers a listener invoked once per completed mutation.
    pub fn on_change(&mut self, listener: impl FnMut(CurveChange) + 'm) {
        self.listeners.push(Box::new(listener));
    }

    /// Read access to the underlying model.
    #[inline]
    pub fn model(&self) -> &CurveModel<T> {
        self.model
    }

    /// The currently selected CV index, if any.
    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// The most recently used interpolation mode.
    #[inline]
    pub fn last_interp(&self) -> InterpMode {
        self.last_interp
    }

    /// Drops the current selection.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Hit-tests `(x, y)` against caller-projected CV points and selects the
    /// nearest match within `radius`.
    ///
    /// `projected` holds one screen-space point per CV in insertion order;
    /// the projection and the radius are UI concerns supplied by the caller.
    /// Returns the selected index, or clears the selection on a miss.
    pub fn select_nearest(
        &mut self,
        x: f32,
        y: f32,
        projected: &[(f32, f32)],
        radius: f32,
    ) -> Option<usize> {
        let mut best: Option<(usize, f32)> = None;
        let count = projected.len().min(self.model.len());
        for (i, &(px, py)) in projected[..count].iter().enumerate() {
            let d2 = (px - x) * (px - x) + (py - y) * (py - y);
            if d2 <= radius * radius && best.is_none_or(|(_, bd2)| d2 < bd2) {
                best = Some((i, d2));
            }
        }

        match best {
            Some((index, _)) => {
                self.selected = Some(index);
                self.last_interp = self.model.points()[index].interp;
                Some(index)
            }
            None => {
                self.selected = None;
                None
            }
        }
    }

    /// Creates a point at `(position, value)`, inheriting the interpolation
    /// mode of its left neighbor, and selects it.
    ///
    /// A neighbor tagged [`InterpMode::None`] (or an empty curve) falls back
    /// to [`InterpMode::MonotoneSpline`].
    pub fn create_at(&mut self, position: f32, value: T) -> usize {
        let mut interp = self.model.lower_bound_interp(position.clamp(0.0, 1.0));
        if interp == InterpMode::None {
            interp = InterpMode::MonotoneSpline;
        }

        let index = self.model.add_point(position, value, interp);
        self.selected = Some(index);
        self.last_interp = interp;
        debug!(index, position, ?interp, "create point");
        self.notify(CurveChange::Added { index });
        index
    }

    /// Removes the selected CV and clears the selection.
    ///
    /// Returns false without notifying if nothing is selected or the
    /// selection went stale.
    pub fn delete_selected(&mut self) -> bool {
        let Some(index) = self.selected.take() else {
            return false;
        };
        if self.model.remove_point(index).is_err() {
            return false;
        }
        debug!(index, "delete point");
        self.notify(CurveChange::Removed { index });
        true
    }

    /// Moves the selected CV to `(position, value)` as one logical edit.
    ///
    /// Call at most once per interaction tick (e.g. per pointer-move event).
    /// Returns false without notifying if nothing is selected.
    pub fn move_selected(&mut self, position: f32, value: T) -> bool {
        let Some(index) = self.selected else {
            return false;
        };
        if self.model.update_point(index, position, value).is_err() {
            return false;
        }
        self.notify(CurveChange::Moved { index });
        true
    }

    /// Changes the interpolation mode of the selected CV.
    ///
    /// Returns false without notifying if nothing is selected.
    pub fn set_selected_interp(&mut self, interp: InterpMode) -> bool {
        let Some(index) = self.selected else {
            return false;
        };
        if self.model.update_interp(index, interp).is_err() {
            return false;
        }
        self.last_interp = interp;
        debug!(index, ?interp, "retag point");
        self.notify(CurveChange::InterpChanged { index });
        true
    }

    fn notify(&mut self, change: CurveChange) {
        for listener in &mut self.listeners {
            listener(change);
        }
    }
}

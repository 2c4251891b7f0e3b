//! Curve error types.

use thiserror::Error;

/// Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Errors that can occur during curve mutations.
///
/// All curve errors are recoverable. UI callers routinely hold stale indices
/// while selection and model momentarily diverge, so a failed mutation is a
/// no-op result, never a panic.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum CurveError {
    /// A mutation addressed a control vertex that does not exist.
    #[error("control vertex index {index} out of range (curve has {len} points)")]
    IndexOutOfRange {
        /// The index the caller supplied.
        index: usize,
        /// Number of control vertices in the curve at call time.
        len: usize,
    },
}

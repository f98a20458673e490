//! Error types for balancing operations.
//!
//! Every fallible operation in the crate reports through [`BalanceError`].
//! Errors are raised synchronously at the call that detects them and never
//! leave partially-mutated state behind: operations either return a new
//! structure or fail with their inputs untouched.

/// Errors raised by dataset construction and balancing operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BalanceError {
    /// A label value falls outside the declared class domain.
    #[error("label {label} outside expected domain [0, {n_classes}]")]
    InvalidLabel { label: u32, n_classes: u32 },

    /// Too few minority samples to run neighbor-based synthesis.
    #[error("found {found} minority samples, need at least {needed} for synthesis")]
    InsufficientSamples { found: usize, needed: usize },

    /// Target proportion outside `[0, 1)`.
    #[error("target proportion must be in [0, 1), got {0}")]
    InvalidProportion(f64),

    /// A scaler was applied before it was fit.
    #[error("scaler used before fit")]
    NotFitted,

    /// A zero-variance column was encountered during a strict fit.
    #[error("column {column} has zero variance")]
    DegenerateColumn { column: usize },

    /// Dimension mismatch between parallel structures.
    #[error("shape mismatch in {field}: expected {expected}, got {got}")]
    ShapeMismatch {
        expected: usize,
        got: usize,
        field: &'static str,
    },
}

//! # Meshing Errors
//!
//! Error types for set construction, boundary resolution, and field
//! composition. All errors are raised synchronously at the point of misuse;
//! nothing is recovered internally, so a failed operation never emits a
//! malformed statement.

use thiserror::Error;

/// Errors that can occur while composing sets and fields.
#[derive(Debug, Clone, Error)]
pub enum MeshingError {
    /// An operand of the wrong dimensionality was supplied to a set or
    /// field constructor.
    #[error("Type constraint violated: expected {expected}, found {found}")]
    TypeConstraint {
        expected: &'static str,
        found: &'static str,
    },

    /// The boundary of a point was requested. Points have no boundary.
    #[error("Cannot compute the boundary of a point")]
    PointBoundary,

    /// The boundary resolver exhausted every dimensionality attempt.
    #[error("No entity dimensionality matches the input: {0}")]
    Unclassified(String),

    /// A MathEval expression template could not be substituted.
    #[error("Invalid field expression: {0}")]
    BadExpression(String),
}

// =============================================================================
// TESTS
// =============================================================================

//! # Model Errors
//!
//! Error types for entity construction.

use thiserror::Error;

/// Errors that can occur while building geometric entities.
#[derive(Debug, Clone, Error)]
pub enum ModelError {
    /// A loop was constructed from an empty element list.
    #[error("{0} requires at least one element")]
    EmptyLoop(&'static str),

    /// A curve was constructed from too few control points.
    #[error("{kind} requires at least {required} points, got {given}")]
    TooFewPoints {
        kind: &'static str,
        required: usize,
        given: usize,
    },
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ModelError::EmptyLoop("Line Loop");
        assert!(err.to_string().contains("Line Loop"));

        let err = ModelError::TooFewPoints {
            kind: "Spline",
            required: 2,
            given: 1,
        };
        assert!(err.to_string().contains("Spline"));
    }
}

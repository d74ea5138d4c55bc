//! Error types for enumerable operations
//!
//! Only the cursor can run out of elements, so `EndOfSequence` is kept apart
//! from the ordering and operator errors that surface from the container and
//! from `reduce_with`.

use thiserror::Error;

/// Result type alias for enumerable operations
pub type Result<T> = std::result::Result<T, EnumerableError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumerableError {
    /// A cursor was pulled past the last element its traversal produced
    #[error("End of sequence: no element at position {position} (traversal visited {len})")]
    EndOfSequence {
        /// Position the cursor was advanced to
        position: usize,
        /// Number of elements the traversal visited
        len: usize,
    },

    /// The element cannot be ordered against itself or the stored elements
    #[error("Incomparable element: {0}")]
    Incomparable(String),

    /// No binary operator is known under this name
    #[error("Unknown operator: {0:?}")]
    UnknownOperator(String),
}

impl EnumerableError {
    /// True for the recoverable end-of-sequence signal
    pub fn is_end_of_sequence(&self) -> bool {
        matches!(self, EnumerableError::EndOfSequence { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_of_sequence_display() {
        let err = EnumerableError::EndOfSequence {
            position: 5,
            len: 5,
        };
        let msg = err.to_string();
        assert!(msg.contains("End of sequence"));
        assert!(msg.contains("position 5"));
        assert!(err.is_end_of_sequence());
    }

    #[test]
    fn test_incomparable_is_not_end_of_sequence() {
        let err = EnumerableError::Incomparable("NaN".to_string());
        assert!(err.to_string().contains("NaN"));
        assert!(!err.is_end_of_sequence());
    }

    #[test]
    fn test_unknown_operator_display() {
        let err = EnumerableError::UnknownOperator("%".to_string());
        assert_eq!(err.to_string(), "Unknown operator: \"%\"");
        assert!(!err.is_end_of_sequence());
    }
}

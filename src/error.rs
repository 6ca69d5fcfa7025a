//! Error types for the kinemap cross-modal mapping library.

use thiserror::Error;

/// The main error type for kinemap operations.
#[derive(Error, Debug)]
pub enum KinemapError {
    /// A vector's length disagrees with the map's input dimensionality.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// The input dimensionality the map was constructed with.
        expected: usize,
        /// The dimensionality of the offending vector.
        actual: usize,
    },

    /// Paired training sequences of unequal length passed to the
    /// association layer.
    #[error("Length mismatch: {left} samples in modality A, {right} in modality B")]
    LengthMismatch {
        /// Number of samples retained by the first map.
        left: usize,
        /// Number of samples retained by the second map.
        right: usize,
    },

    /// Prediction requested for a map region with no accumulated
    /// association.
    #[error("No association learned for node ({row}, {col})")]
    NoAssociation {
        /// Row of the winning node in the source map.
        row: usize,
        /// Column of the winning node in the source map.
        col: usize,
    },

    /// Empty input.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for kinemap operations.
pub type Result<T> = std::result::Result<T, KinemapError>;

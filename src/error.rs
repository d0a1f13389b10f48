//! Error types for trigpoly

use thiserror::Error;

/// Result type alias using trigpoly's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trigpoly operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Cosine and sine coefficient vectors have different lengths
    #[error("Shape mismatch: {cos} cosine coefficients vs {sin} sine coefficients")]
    CoefficientLengthMismatch {
        /// Number of cosine coefficients
        cos: usize,
        /// Number of sine coefficients
        sin: usize,
    },

    /// Flat coefficient or sample vector does not have odd length 2n+1
    #[error("Shape mismatch: expected odd length 2n+1, got {len}")]
    EvenFlatLength {
        /// The offending length
        len: usize,
    },

    /// Buffer length does not match the transform length
    #[error("Shape mismatch: expected length {expected}, got {got}")]
    LengthMismatch {
        /// Expected length
        expected: usize,
        /// Actual length
        got: usize,
    },

    /// Padding target below the current harmonic degree
    #[error("cannot pad to smaller degree: {target} < {degree}")]
    PadBelowDegree {
        /// Current harmonic degree
        degree: usize,
        /// Requested harmonic degree
        target: usize,
    },

    /// Truncation target above the current harmonic degree
    #[error("cannot truncate to higher degree: {target} > {degree}")]
    TruncateAboveDegree {
        /// Current harmonic degree
        degree: usize,
        /// Requested harmonic degree
        target: usize,
    },
}

/// Coarse classification of [`Error`] variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed coefficient or sample layout
    Shape,
    /// Invalid harmonic degree for a pad or truncate request
    Degree,
}

impl Error {
    /// Classify this error as a shape or degree error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::CoefficientLengthMismatch { .. }
            | Self::EvenFlatLength { .. }
            | Self::LengthMismatch { .. } => ErrorKind::Shape,
            Self::PadBelowDegree { .. } | Self::TruncateAboveDegree { .. } => ErrorKind::Degree,
        }
    }

    /// Create a coefficient length mismatch error
    pub fn coefficient_mismatch(cos: usize, sin: usize) -> Self {
        Self::CoefficientLengthMismatch { cos, sin }
    }

    /// Create a length mismatch error
    pub fn length_mismatch(expected: usize, got: usize) -> Self {
        Self::LengthMismatch { expected, got }
    }
}

//! Element type system for trigonometric polynomials
//!
//! This module provides the `DType` enum naming the supported floating point
//! precisions, the [`Element`] trait connecting `f32`/`f64` to it, and the
//! promotion rules used when operands of different precision are combined.

mod element;
mod promotion;

pub use element::Element;
pub use promotion::{Promote, Promoted, promote};

use std::fmt;

/// Floating point precision of polynomial coefficients
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DType {
    /// 32-bit floating point
    F32,
    /// 64-bit floating point
    F64,
}

impl DType {
    /// Size of one element in bytes
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::F64 => 8,
            Self::F32 => 4,
        }
    }

    /// Machine epsilon of this precision
    #[inline]
    pub const fn epsilon(self) -> f64 {
        match self {
            Self::F64 => f64::EPSILON,
            Self::F32 => f32::EPSILON as f64,
        }
    }

    /// Short name used in logs and display
    pub const fn short_name(self) -> &'static str {
        match self {
            Self::F64 => "f64",
            Self::F32 => "f32",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

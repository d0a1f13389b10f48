//! Real trigonometric polynomials
//!
//! A [`TrigPoly`] of harmonic degree `n` is
//!
//! ```text
//! p(x) = a0 + Σ_{k=1}^{n} ac[k]·cos(kx) + as[k]·sin(kx)
//! ```
//!
//! and is determined either by its `2n+1` coefficients or by its values at
//! the `2n+1` points `x_i = 2πi/(2n+1)`. This module converts between the
//! two in O(n log n) and builds multiplication on top of that conversion.
//!
//! # Functions
//!
//! - [`evaluate`] / [`TrigPoly::evaluate`] - Coefficients → samples
//! - [`evaluate_t`] - Adjoint of `evaluate`
//! - [`interpolatev`] / [`interpolate`] - Samples → coefficients
//! - [`TrigPoly::evaluate_at`] - Direct value at any point
//! - [`multiply`] - Product through the sample domain
//!
//! # Coefficient Convention
//!
//! The flat layout is `[a0, ac₁..acₙ, as₁..asₙ]`, always of odd length.
//!
//! # Example
//!
//! ```
//! use trigpoly::prelude::*;
//!
//! let p = TrigPoly::new(1.0f64, vec![2.0], vec![3.0]).unwrap();
//! let q = TrigPoly::new(0.0f64, vec![1.0], vec![0.0]).unwrap();
//!
//! let pq = &p * &q;
//! assert_eq!(pq.n(), 2);
//!
//! let x = 0.7f64;
//! assert!((pq.evaluate_at(x) - p.evaluate_at(x) * q.evaluate_at(x)).abs() < 1e-12);
//! ```

pub mod core;
pub mod helpers;
pub mod ops;
#[cfg(feature = "random")]
pub mod random;
pub mod traits;
pub mod types;

pub use self::core::{
    TrigTransformer, add, add_scalar, divide_scalar, evaluate, evaluate_t, interpolate,
    interpolatev, multiply, multiply_direct, negate, pad_flat_to, sample_grid, scale, subtract,
    truncate_flat_to,
};
pub use helpers::validate_flat_len;
pub use traits::TrigTransformAlgorithms;
pub use types::TrigPoly;

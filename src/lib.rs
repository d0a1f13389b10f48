//! # trigpoly
//!
//! **Real trigonometric polynomials with FFT-based transforms.**
//!
//! A trigonometric polynomial of harmonic degree `n`,
//!
//! ```text
//! p(x) = a0 + Σ_{k=1}^{n} ac[k]·cos(kx) + as[k]·sin(kx)
//! ```
//!
//! is stored by its `2n+1` coefficients and can be converted to and from its
//! values on `2n+1` uniformly spaced points with a single complex DFT.
//! Multiplication runs through that sample domain, costing O(n log n)
//! instead of the O(n²) coefficient convolution.
//!
//! ## Features
//!
//! - **Container**: [`TrigPoly`](algorithm::trigpoly::TrigPoly) generic over `f32`/`f64`
//! - **Transforms**: evaluate, its adjoint, and interpolation
//! - **Arithmetic**: `+`, `-`, `*`, `/` with precision promotion
//! - **Plan cache**: DFT plans are planned once per length, process-wide
//!
//! ## Quick Start
//!
//! ```rust
//! use trigpoly::prelude::*;
//!
//! let p = TrigPoly::new(1.0f64, vec![2.0], vec![3.0])?;
//! let samples = p.evaluate();
//! let back = interpolate(&samples)?;
//! assert!((back.a0() - 1.0).abs() < 1e-12);
//!
//! let square = &p * &p;
//! assert_eq!(square.n(), 2);
//! # Ok::<(), trigpoly::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `random` (default): `TrigPoly::random` with standard normal coefficients

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod algorithm;
pub mod dtype;
pub mod error;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithm::fft::{FftDirection, FftNormalization};
    pub use crate::algorithm::trigpoly::{
        TrigPoly, TrigTransformAlgorithms, TrigTransformer, evaluate, evaluate_t, interpolate,
        interpolatev, multiply_direct, pad_flat_to, sample_grid, truncate_flat_to,
    };
    pub use crate::dtype::{DType, Element, Promote, Promoted};
    pub use crate::error::{Error, ErrorKind, Result};
}

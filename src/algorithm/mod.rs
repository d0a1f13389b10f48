//! Algorithms over trigonometric polynomials
//!
//! - [`fft`] - Complex DFT primitive with a process-wide plan cache
//! - [`trigpoly`] - The `TrigPoly` container, its transform pair and arithmetic
//!
//! # Layering
//!
//! ```text
//! ops (operator overloads, precision promotion)
//!   └── core::arith (add, multiply, scale, ...)
//!         └── core::transform (evaluate, evaluate_t, interpolatev)
//!               └── fft (rustfft plans, cached per length)
//! ```

pub mod fft;
pub mod trigpoly;

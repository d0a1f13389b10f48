//! Core trigonometric polynomial algorithms
//!
//! - [`pad`] - Degree padding and truncation, on polynomials and flat vectors
//! - [`transform`] - `evaluate`, `evaluate_t`, `interpolatev`, `interpolate`
//! - [`pointwise`] - Direct evaluation at arbitrary points, direct product
//! - [`arith`] - Negation, sums, products and scalar operations

pub mod arith;
pub mod pad;
pub mod pointwise;
pub mod transform;

pub use arith::{add, add_scalar, divide_scalar, multiply, negate, scale, subtract};
pub use pad::{pad_flat_to, truncate_flat_to};
pub use pointwise::multiply_direct;
pub use transform::{
    TrigTransformer, evaluate, evaluate_t, interpolate, interpolatev, sample_grid,
};

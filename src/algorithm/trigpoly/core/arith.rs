//! Arithmetic on trigonometric polynomials of one precision
//!
//! Linear operations act on coefficients directly after padding both
//! operands to a common degree. Multiplication goes through the sample
//! domain:
//!
//! ```text
//! n       = n(lhs) + n(rhs)
//! samples = evaluate(pad(lhs, n)) ⊙ evaluate(pad(rhs, n))   // 2n+1 points
//! product = interpolate(samples)
//! ```
//!
//! `2n+1` points are exactly enough to represent a degree-`n` product
//! without aliasing, so the result equals the convolution of the
//! coefficients up to rounding, in O(n log n).

use super::transform::TrigTransformer;
use crate::algorithm::trigpoly::types::TrigPoly;
use crate::dtype::Element;

/// `-p`
pub fn negate<T: Element>(p: &TrigPoly<T>) -> TrigPoly<T> {
    p.map(|c| -c)
}

/// `lhs + rhs`, padded to the larger harmonic degree
pub fn add<T: Element>(lhs: &TrigPoly<T>, rhs: &TrigPoly<T>) -> TrigPoly<T> {
    let n = lhs.n().max(rhs.n());
    let (lhs, rhs) = (lhs.padded(n), rhs.padded(n));
    TrigPoly::from_parts(
        lhs.a0() + rhs.a0(),
        zip_with(lhs.ac(), rhs.ac(), |a, b| a + b),
        zip_with(lhs.as_(), rhs.as_(), |a, b| a + b),
    )
}

/// `lhs - rhs`
pub fn subtract<T: Element>(lhs: &TrigPoly<T>, rhs: &TrigPoly<T>) -> TrigPoly<T> {
    add(lhs, &negate(rhs))
}

/// `lhs · rhs` through the sample domain
///
/// The result has harmonic degree `lhs.n() + rhs.n()`.
pub fn multiply<T: Element>(lhs: &TrigPoly<T>, rhs: &TrigPoly<T>) -> TrigPoly<T> {
    let n = lhs.n() + rhs.n();
    tracing::trace!(lhs = lhs.n(), rhs = rhs.n(), n, "multiplying via samples");

    let mut tr = TrigTransformer::new(n);
    let (lhs, rhs) = (lhs.padded(n), rhs.padded(n));

    let mut samples = vec![T::zero(); tr.len()];
    let mut other = vec![T::zero(); tr.len()];
    tr.evaluate_parts(lhs.a0(), lhs.ac(), lhs.as_(), &mut samples);
    tr.evaluate_parts(rhs.a0(), rhs.ac(), rhs.as_(), &mut other);

    for (s, &o) in samples.iter_mut().zip(other.iter()) {
        *s = *s * o;
    }
    tr.interpolate_parts(&samples)
}

/// `c · p`, scaling coefficients directly
pub fn scale<T: Element>(p: &TrigPoly<T>, c: T) -> TrigPoly<T> {
    p.map(|x| x * c)
}

/// `p / c`, dividing coefficients directly
pub fn divide_scalar<T: Element>(p: &TrigPoly<T>, c: T) -> TrigPoly<T> {
    p.map(|x| x / c)
}

/// `p + c`; only the constant term changes
pub fn add_scalar<T: Element>(p: &TrigPoly<T>, c: T) -> TrigPoly<T> {
    add(p, &TrigPoly::constant(c))
}

fn zip_with<T: Element>(a: &[T], b: &[T], f: impl Fn(T, T) -> T) -> Vec<T> {
    a.iter().zip(b.iter()).map(|(&x, &y)| f(x, y)).collect()
}

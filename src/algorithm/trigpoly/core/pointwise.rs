//! Direct evaluation and multiplication without the DFT
//!
//! These are the O(n) and O(n·m) reference paths. They serve as oracles for
//! the transform-based operations and as the cheap route for single-point
//! queries.

use crate::algorithm::trigpoly::types::TrigPoly;
use crate::dtype::Element;
use num_complex::Complex;

impl<T: Element> TrigPoly<T> {
    /// Value at an arbitrary point `x`
    ///
    /// ```text
    /// p(x) = a0 + Σ_{k=1}^{n} ac[k]·cos(kx) + as[k]·sin(kx)
    /// ```
    pub fn evaluate_at(&self, x: T) -> T {
        self.harmonics().fold(self.a0(), |acc, (k, c, s)| {
            let (sin, cos) = (T::narrow(k as f64) * x).sin_cos();
            acc + c * cos + s * sin
        })
    }

    /// Values at each of `xs`
    pub fn evaluate_at_points(&self, xs: &[T]) -> Vec<T> {
        xs.iter().map(|&x| self.evaluate_at(x)).collect()
    }
}

/// Two-sided complex coefficients `c_{-n}..c_n`, index `n + k` holds `c_k`
///
/// `c_0 = a0`, `c_k = (ac[k] - i·as[k]) / 2`, `c_{-k} = conj(c_k)`.
fn two_sided<T: Element>(p: &TrigPoly<T>) -> Vec<Complex<T>> {
    let n = p.n();
    let half = T::narrow(0.5);
    let mut out = vec![Complex::new(T::zero(), T::zero()); 2 * n + 1];
    out[n] = Complex::new(p.a0(), T::zero());
    for (k, c, s) in p.harmonics() {
        let z = Complex::new(c, -s).scale(half);
        out[n + k] = z;
        out[n - k] = z.conj();
    }
    out
}

/// Product of two polynomials by direct convolution, O(n1·n2)
///
/// Exact up to rounding in the coefficient domain, with no sampling. The
/// harmonic degree of the result is `lhs.n() + rhs.n()`.
pub fn multiply_direct<T: Element>(lhs: &TrigPoly<T>, rhs: &TrigPoly<T>) -> TrigPoly<T> {
    let (a, b) = (two_sided(lhs), two_sided(rhs));
    let n = lhs.n() + rhs.n();

    let mut conv = vec![Complex::new(T::zero(), T::zero()); 2 * n + 1];
    for (i, &x) in a.iter().enumerate() {
        for (j, &y) in b.iter().enumerate() {
            conv[i + j] = conv[i + j] + x * y;
        }
    }

    let two = T::narrow(2.0);
    let a0 = conv[n].re;
    let ac = (1..=n).map(|k| two * conv[n + k].re).collect();
    let as_ = (1..=n).map(|k| -two * conv[n + k].im).collect();
    TrigPoly::from_parts(a0, ac, as_)
}

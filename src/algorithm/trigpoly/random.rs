//! Random trigonometric polynomials

use super::types::TrigPoly;
use crate::dtype::Element;
use rand::Rng;

impl<T: Element> TrigPoly<T> {
    /// Polynomial of harmonic degree `n` with independent standard normal
    /// coefficients
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let a0 = T::sample_standard_normal(rng);
        let ac = (0..n).map(|_| T::sample_standard_normal(rng)).collect();
        let as_ = (0..n).map(|_| T::sample_standard_normal(rng)).collect();
        Self::from_parts(a0, ac, as_)
    }
}

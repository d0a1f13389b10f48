//! Common test utilities
#![allow(dead_code)]

use rand::SeedableRng;
use rand::rngs::StdRng;
use trigpoly::prelude::*;

/// Deterministic RNG for reproducible random polynomials
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Odd lengths covering the small cases and the mixed-radix paths
pub const ODD_LENGTHS: &[usize] = &[1, 3, 5, 7, 9, 15, 21, 63, 101, 255, 1001];

/// Dot product
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "dot: length mismatch");
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Vector of `len` standard normal samples
#[cfg(feature = "random")]
pub fn random_vec(len: usize, rng: &mut StdRng) -> Vec<f64> {
    (0..len).map(|_| f64::sample_standard_normal(rng)).collect()
}

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Assert two f32 slices are close within tolerance
pub fn assert_allclose_f32(a: &[f32], b: &[f32], rtol: f32, atol: f32, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Assert two polynomials have the same degree and close coefficients
pub fn assert_poly_close(a: &TrigPoly<f64>, b: &TrigPoly<f64>, rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.n(), b.n(), "{}: harmonic degree mismatch", msg);
    assert_allclose_f64(&a.to_flat(), &b.to_flat(), rtol, atol, msg);
}

//! Integration tests for the process-wide DFT plan cache
//!
//! Tests verify:
//! - Transforms populate the cache for their length
//! - Concurrent transforms of the same and different lengths agree with
//!   sequential results

use std::thread;
use trigpoly::algorithm::fft::{FftDirection, FftNormalization, fft};
use trigpoly::prelude::*;

mod common;

use common::assert_allclose_f64;
use num_complex::Complex;

#[test]
fn test_evaluate_populates_cache() {
    // 2n+1 = 4099 is not used by any other test
    let p = TrigPoly::<f64>::zero(2049);
    let cache = <f64 as Element>::plan_cache();
    p.evaluate();
    assert!(cache.contains(4099, FftDirection::Forward));
    let before = cache.len();
    p.evaluate();
    assert_eq!(cache.len(), before);
}

#[test]
fn test_precisions_have_separate_caches() {
    TrigPoly::<f32>::zero(3001).evaluate();
    assert!(<f32 as Element>::plan_cache().contains(6003, FftDirection::Forward));
    assert!(!<f64 as Element>::plan_cache().contains(6003, FftDirection::Forward));
}

#[test]
fn test_concurrent_transforms_agree() {
    let polys: Vec<TrigPoly<f64>> = (0..8usize)
        .map(|i| {
            let n = 10 + (i % 3) * 7;
            let ac = (0..n).map(|k| ((k + i) as f64).sin()).collect();
            let as_ = (0..n).map(|k| ((k * i) as f64).cos()).collect();
            TrigPoly::new(i as f64, ac, as_).unwrap()
        })
        .collect();

    let sequential: Vec<Vec<f64>> = polys.iter().map(|p| p.evaluate()).collect();

    let concurrent: Vec<Vec<f64>> = thread::scope(|s| {
        let handles: Vec<_> = polys
            .iter()
            .map(|p| s.spawn(move || p.evaluate()))
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().expect("worker panicked"))
            .collect()
    });

    for (i, (a, b)) in concurrent.iter().zip(sequential.iter()).enumerate() {
        assert_allclose_f64(a, b, 0.0, 0.0, &format!("poly {i}"));
    }
}

#[test]
fn test_concurrent_multiply() {
    let p = TrigPoly::new(1.0f64, vec![0.5, -1.0], vec![2.0, 0.25]).unwrap();
    let q = TrigPoly::new(-2.0f64, vec![1.5], vec![0.75]).unwrap();
    let expected = &p * &q;

    thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                let got = &p * &q;
                assert_eq!(got, expected);
            });
        }
    });
}

#[test]
fn test_fft_helper_odd_length_roundtrip() {
    let input: Vec<Complex<f64>> = (0..9)
        .map(|k| Complex::new(k as f64, (k * k) as f64 * 0.1))
        .collect();
    let freq = fft(&input, FftDirection::Forward, FftNormalization::Ortho);
    let back = fft(&freq, FftDirection::Inverse, FftNormalization::Ortho);
    let re: Vec<f64> = back.iter().map(|z| z.re).collect();
    let im: Vec<f64> = back.iter().map(|z| z.im).collect();
    let re_in: Vec<f64> = input.iter().map(|z| z.re).collect();
    let im_in: Vec<f64> = input.iter().map(|z| z.im).collect();
    assert_allclose_f64(&re, &re_in, 1e-12, 1e-12, "real part");
    assert_allclose_f64(&im, &im_in, 1e-12, 1e-12, "imaginary part");
}

//! Coefficient ↔ sample transforms

use crate::algorithm::fft::FftDirection;
use crate::algorithm::trigpoly::helpers::{
    split_flat, validate_flat_len, validate_len, validate_pad,
};
use crate::algorithm::trigpoly::traits::TrigTransformAlgorithms;
use crate::algorithm::trigpoly::types::TrigPoly;
use crate::dtype::Element;
use crate::error::Result;
use num_complex::Complex;
use rustfft::Fft;
use std::fmt;
use std::sync::Arc;

/// Buffer-reusing transformer for one harmonic degree
///
/// Holds the cached forward DFT plan for length `m = 2n+1` together with the
/// complex work buffer and the plan's scratch space, so repeated transforms
/// of the same size allocate nothing.
///
/// ```
/// use trigpoly::prelude::*;
///
/// let p = TrigPoly::new(1.0f64, vec![2.0], vec![3.0]).unwrap();
/// let mut tr = TrigTransformer::<f64>::new(1);
/// let mut samples = vec![0.0; 3];
/// tr.evaluate_into(&p.to_flat(), &mut samples).unwrap();
/// let back = tr.interpolate(&samples).unwrap();
/// assert!((back.a0() - 1.0).abs() < 1e-12);
/// ```
pub struct TrigTransformer<T: Element> {
    n: usize,
    plan: Arc<dyn Fft<T>>,
    buffer: Vec<Complex<T>>,
    scratch: Vec<Complex<T>>,
}

impl<T: Element> TrigTransformer<T> {
    /// Create a transformer for harmonic degree `n`
    pub fn new(n: usize) -> Self {
        let m = 2 * n + 1;
        let plan = T::plan_cache().plan(m, FftDirection::Forward);
        let zero = Complex::new(T::zero(), T::zero());
        let scratch = vec![zero; plan.get_inplace_scratch_len()];
        tracing::trace!(n, dtype = %T::DTYPE, "created trigonometric transformer");
        Self {
            n,
            plan,
            buffer: vec![zero; m],
            scratch,
        }
    }

    /// Create a transformer sized for a flat vector of length `len`
    ///
    /// # Errors
    ///
    /// Shape error if `len` is even.
    pub fn for_len(len: usize) -> Result<Self> {
        Ok(Self::new(validate_flat_len(len)?))
    }

    /// Harmonic degree this transformer is bound to
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Transform length `2n + 1`
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Always false: the shortest transform has one point
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Evaluate `p` on the `2n+1` point grid
    ///
    /// # Errors
    ///
    /// Shape error if `p.n()` differs from the transformer's degree.
    pub fn evaluate(&mut self, p: &TrigPoly<T>) -> Result<Vec<T>> {
        validate_len(self.n, p.n())?;
        let mut out = vec![T::zero(); self.len()];
        self.evaluate_parts(p.a0(), p.ac(), p.as_(), &mut out);
        Ok(out)
    }

    /// Interpolate `2n+1` samples into a polynomial
    ///
    /// # Errors
    ///
    /// Shape error if `samples` is not of length `2n+1`.
    pub fn interpolate(&mut self, samples: &[T]) -> Result<TrigPoly<T>> {
        let mut coeffs = vec![T::zero(); self.len()];
        self.interpolatev_into(samples, &mut coeffs)?;
        TrigPoly::try_from(coeffs)
    }

    /// Evaluation from split coefficients; lengths are the caller's contract
    pub(crate) fn evaluate_parts(&mut self, a0: T, ac: &[T], as_: &[T], out: &mut [T]) {
        debug_assert_eq!(ac.len(), self.n);
        debug_assert_eq!(as_.len(), self.n);
        debug_assert_eq!(out.len(), self.len());

        let m = self.len();
        let half = T::narrow(0.5);
        self.buffer[0] = Complex::new(a0, T::zero());
        for (k, (&c, &s)) in ac.iter().zip(as_.iter()).enumerate() {
            let z = Complex::new(c, s).scale(half);
            self.buffer[k + 1] = z;
            self.buffer[m - k - 1] = z.conj();
        }

        self.forward();

        for (o, z) in out.iter_mut().zip(self.buffer.iter()) {
            *o = z.re;
        }
    }

    /// Interpolation into a polynomial; sample length is the caller's contract
    pub(crate) fn interpolate_parts(&mut self, samples: &[T]) -> TrigPoly<T> {
        debug_assert_eq!(samples.len(), self.len());

        let mut coeffs = vec![T::zero(); self.len()];
        self.adjoint(samples, &mut coeffs);
        self.normalize(&mut coeffs);

        let mut ac = coeffs;
        let as_ = ac.split_off(self.n + 1);
        let a0 = ac.remove(0);
        TrigPoly::from_parts(a0, ac, as_)
    }

    fn adjoint(&mut self, values: &[T], out: &mut [T]) {
        let (n, m) = (self.n, self.len());
        for (z, &v) in self.buffer.iter_mut().zip(values.iter()) {
            *z = Complex::new(v, T::zero());
        }

        self.forward();

        for (o, z) in out[..=n].iter_mut().zip(self.buffer.iter()) {
            *o = z.re;
        }
        for k in 1..=n {
            out[n + k] = self.buffer[m - k].im;
        }
    }

    fn normalize(&self, coeffs: &mut [T]) {
        let denom = T::narrow(self.n as f64 + 0.5);
        for c in coeffs.iter_mut() {
            *c = *c / denom;
        }
        coeffs[0] = coeffs[0] / T::narrow(2.0);
    }

    fn forward(&mut self) {
        self.plan
            .process_with_scratch(&mut self.buffer, &mut self.scratch);
    }
}

impl<T: Element> TrigTransformAlgorithms<T> for TrigTransformer<T> {
    fn evaluate_into(&mut self, coeffs: &[T], out: &mut [T]) -> Result<()> {
        validate_len(self.len(), coeffs.len())?;
        validate_len(self.len(), out.len())?;
        let (a0, ac, as_) = split_flat(coeffs);
        self.evaluate_parts(a0, ac, as_, out);
        Ok(())
    }

    fn evaluate_t_into(&mut self, values: &[T], out: &mut [T]) -> Result<()> {
        validate_len(self.len(), values.len())?;
        validate_len(self.len(), out.len())?;
        self.adjoint(values, out);
        Ok(())
    }

    fn interpolatev_into(&mut self, samples: &[T], out: &mut [T]) -> Result<()> {
        self.evaluate_t_into(samples, out)?;
        self.normalize(out);
        Ok(())
    }
}

impl<T: Element> fmt::Debug for TrigTransformer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrigTransformer")
            .field("n", &self.n)
            .field("len", &self.len())
            .field("dtype", &T::DTYPE)
            .finish()
    }
}

// ============================================================================
// Allocating entry points
// ============================================================================

/// Evaluate a flat coefficient vector on its `2n+1` point grid
///
/// # Errors
///
/// Shape error if `coeffs` has even length.
pub fn evaluate<T: Element>(coeffs: &[T]) -> Result<Vec<T>> {
    let mut tr = TrigTransformer::for_len(coeffs.len())?;
    let mut out = vec![T::zero(); coeffs.len()];
    tr.evaluate_into(coeffs, &mut out)?;
    Ok(out)
}

/// Adjoint of [`evaluate`]
///
/// # Errors
///
/// Shape error if `values` has even length.
pub fn evaluate_t<T: Element>(values: &[T]) -> Result<Vec<T>> {
    let mut tr = TrigTransformer::for_len(values.len())?;
    let mut out = vec![T::zero(); values.len()];
    tr.evaluate_t_into(values, &mut out)?;
    Ok(out)
}

/// Samples → flat coefficients, inverse of [`evaluate`]
///
/// # Errors
///
/// Shape error if `samples` has even length.
pub fn interpolatev<T: Element>(samples: &[T]) -> Result<Vec<T>> {
    let mut tr = TrigTransformer::for_len(samples.len())?;
    let mut out = vec![T::zero(); samples.len()];
    tr.interpolatev_into(samples, &mut out)?;
    Ok(out)
}

/// Samples → polynomial
///
/// # Errors
///
/// Shape error if `samples` has even length.
pub fn interpolate<T: Element>(samples: &[T]) -> Result<TrigPoly<T>> {
    let mut tr = TrigTransformer::for_len(samples.len())?;
    Ok(tr.interpolate_parts(samples))
}

/// The uniform grid `x_i = 2πi/m`, `i = 0..m`
pub fn sample_grid<T: Element>(m: usize) -> Vec<T> {
    let step = T::TAU() / T::narrow(m as f64);
    (0..m).map(|i| T::narrow(i as f64) * step).collect()
}

impl<T: Element> TrigPoly<T> {
    /// Values at the `2n+1` points `x_i = 2πi/(2n+1)`
    pub fn evaluate(&self) -> Vec<T> {
        let mut tr = TrigTransformer::new(self.n());
        let mut out = vec![T::zero(); self.degree()];
        tr.evaluate_parts(self.a0(), self.ac(), self.as_(), &mut out);
        out
    }

    /// Values on a finer grid of `samples` points
    ///
    /// # Errors
    ///
    /// Shape error if `samples` is even, degree error if it is smaller than
    /// [`degree`](Self::degree).
    pub fn evaluate_oversampled(&self, samples: usize) -> Result<Vec<T>> {
        let m = validate_flat_len(samples)?;
        validate_pad(self.n(), m)?;
        Ok(self.padded(m).evaluate())
    }
}

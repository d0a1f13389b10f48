//! The `TrigPoly` container

use super::helpers::{split_flat, validate_flat_len};
use crate::dtype::{Element, Promote, Promoted};
use crate::error::{Error, Result};
use std::fmt;

/// A real trigonometric polynomial of harmonic degree `n`
///
/// ```text
/// p(x) = a0 + Σ_{k=1}^{n} ac[k]·cos(kx) + as[k]·sin(kx)
/// ```
///
/// The cosine and sine coefficient vectors always have the same length; `n`
/// is derived from them and never stored. Values are immutable: every
/// operation returns a new polynomial.
///
/// Equality is structural. Polynomials of different `n` are never equal,
/// even if the extra coefficients are zero.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TrigPoly<T: Element> {
    a0: T,
    ac: Vec<T>,
    as_: Vec<T>,
}

impl<T: Element> TrigPoly<T> {
    /// Create a polynomial from its constant, cosine and sine coefficients
    ///
    /// # Errors
    ///
    /// Returns a shape error if `ac` and `as_` differ in length.
    pub fn new(a0: T, ac: Vec<T>, as_: Vec<T>) -> Result<Self> {
        if ac.len() != as_.len() {
            return Err(Error::coefficient_mismatch(ac.len(), as_.len()));
        }
        Ok(Self { a0, ac, as_ })
    }

    /// Constructor for callers that already hold equal-length vectors
    pub(crate) fn from_parts(a0: T, ac: Vec<T>, as_: Vec<T>) -> Self {
        debug_assert_eq!(ac.len(), as_.len());
        Self { a0, ac, as_ }
    }

    /// The constant polynomial `c` (`n = 0`)
    pub fn constant(c: T) -> Self {
        Self::from_parts(c, Vec::new(), Vec::new())
    }

    /// The zero polynomial of harmonic degree `n`
    pub fn zero(n: usize) -> Self {
        Self::from_parts(T::zero(), vec![T::zero(); n], vec![T::zero(); n])
    }

    /// Decode the flat layout `[a0, ac_1..ac_n, as_1..as_n]`
    ///
    /// # Errors
    ///
    /// Returns a shape error if `flat` has even length.
    pub fn from_flat(flat: &[T]) -> Result<Self> {
        validate_flat_len(flat.len())?;
        let (a0, ac, as_) = split_flat(flat);
        Ok(Self::from_parts(a0, ac.to_vec(), as_.to_vec()))
    }

    /// Encode as the flat layout `[a0, ac_1..ac_n, as_1..as_n]`
    pub fn to_flat(&self) -> Vec<T> {
        let mut flat = Vec::with_capacity(self.degree());
        flat.push(self.a0);
        flat.extend_from_slice(&self.ac);
        flat.extend_from_slice(&self.as_);
        flat
    }

    /// Consume into the flat layout, reusing the cosine buffer
    pub fn into_flat(self) -> Vec<T> {
        let Self { a0, mut ac, as_ } = self;
        ac.insert(0, a0);
        ac.extend(as_);
        ac
    }

    /// Harmonic degree: number of cosine/sine pairs
    #[inline]
    pub fn n(&self) -> usize {
        self.ac.len()
    }

    /// Number of independent real coefficients, `2n + 1`
    #[inline]
    pub fn degree(&self) -> usize {
        2 * self.n() + 1
    }

    /// Constant term
    #[inline]
    pub fn a0(&self) -> T {
        self.a0
    }

    /// Cosine coefficients for harmonics `1..=n`
    #[inline]
    pub fn ac(&self) -> &[T] {
        &self.ac
    }

    /// Sine coefficients for harmonics `1..=n`
    #[inline]
    pub fn as_(&self) -> &[T] {
        &self.as_
    }

    /// Iterate over `(k, ac[k], as[k])` for `k = 1..=n`
    pub fn harmonics(&self) -> impl Iterator<Item = (usize, T, T)> + '_ {
        self.ac
            .iter()
            .zip(self.as_.iter())
            .enumerate()
            .map(|(i, (&c, &s))| (i + 1, c, s))
    }

    /// Convert every coefficient to another precision
    pub fn cast<U: Element>(&self) -> TrigPoly<U> {
        TrigPoly::from_parts(
            self.a0.convert(),
            self.ac.iter().map(|&c| c.convert()).collect(),
            self.as_.iter().map(|&s| s.convert()).collect(),
        )
    }

    /// Apply `f` to every coefficient
    pub(crate) fn map(&self, f: impl Fn(T) -> T) -> Self {
        Self::from_parts(
            f(self.a0),
            self.ac.iter().map(|&c| f(c)).collect(),
            self.as_.iter().map(|&s| f(s)).collect(),
        )
    }
}

impl TrigPoly<f64> {
    /// Create a polynomial from coefficients of mixed precision
    ///
    /// The element type of the result is the most precise among the inputs.
    ///
    /// ```
    /// use trigpoly::prelude::*;
    ///
    /// let p = TrigPoly::promoted(1.0f32, &[2.0f64], &[3.0f32]).unwrap();
    /// let _: &TrigPoly<f64> = &p;
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a shape error if `ac` and `as_` differ in length.
    #[allow(clippy::type_complexity)]
    pub fn promoted<A, B, C>(
        a0: A,
        ac: &[B],
        as_: &[C],
    ) -> Result<TrigPoly<Promoted<Promoted<A, B>, C>>>
    where
        A: Promote<B>,
        B: Element,
        C: Element,
        Promoted<A, B>: Promote<C>,
    {
        TrigPoly::new(
            a0.convert(),
            ac.iter().map(|&c| c.convert()).collect(),
            as_.iter().map(|&s| s.convert()).collect(),
        )
    }
}

impl<T: Element> From<T> for TrigPoly<T> {
    fn from(c: T) -> Self {
        Self::constant(c)
    }
}

impl<T: Element> TryFrom<Vec<T>> for TrigPoly<T> {
    type Error = Error;

    fn try_from(flat: Vec<T>) -> Result<Self> {
        let n = validate_flat_len(flat.len())?;
        let mut ac = flat;
        let as_ = ac.split_off(n + 1);
        let a0 = ac.remove(0);
        Ok(Self::from_parts(a0, ac, as_))
    }
}

impl<T: Element> From<TrigPoly<T>> for Vec<T> {
    fn from(p: TrigPoly<T>) -> Self {
        p.into_flat()
    }
}

impl<T: Element> fmt::Display for TrigPoly<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.a0)?;
        for (k, c, s) in self.harmonics() {
            write!(f, " + {c}·cos({k}x) + {s}·sin({k}x)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_new_rejects_mismatched_lengths() {
        let err = TrigPoly::new(1.0f64, vec![1.0, 2.0], vec![1.0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Shape);
    }

    #[test]
    fn test_constant() {
        let p = TrigPoly::constant(3.5f64);
        assert_eq!(p.n(), 0);
        assert_eq!(p.degree(), 1);
        assert_eq!(p.a0(), 3.5);
        assert!(p.ac().is_empty());
        assert!(p.as_().is_empty());
        assert_eq!(TrigPoly::from(3.5f64), p);
    }

    #[test]
    fn test_flat_roundtrip() {
        let p = TrigPoly::new(1.0f64, vec![2.0, 3.0], vec![4.0, 5.0]).unwrap();
        let flat = p.to_flat();
        assert_eq!(flat, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(TrigPoly::from_flat(&flat).unwrap(), p);
        assert_eq!(TrigPoly::try_from(flat.clone()).unwrap(), p);
        assert_eq!(p.clone().into_flat(), flat);
        assert_eq!(Vec::from(p), flat);
    }

    #[test]
    fn test_from_flat_even_length() {
        for len in [0usize, 2, 4] {
            let err = TrigPoly::<f64>::from_flat(&vec![0.0; len]).unwrap_err();
            assert_eq!(err, Error::EvenFlatLength { len });
            assert!(TrigPoly::<f64>::try_from(vec![0.0; len]).is_err());
        }
    }

    #[test]
    fn test_equality_is_structural() {
        let a = TrigPoly::constant(1.0f64);
        let b = TrigPoly::new(1.0f64, vec![0.0], vec![0.0]).unwrap();
        assert_ne!(a, b);
        assert_eq!(b, TrigPoly::new(1.0, vec![0.0], vec![0.0]).unwrap());
    }

    #[test]
    fn test_zero() {
        let z = TrigPoly::<f32>::zero(3);
        assert_eq!(z.n(), 3);
        assert_eq!(z.to_flat(), vec![0.0; 7]);
        assert_eq!(TrigPoly::<f32>::default(), TrigPoly::zero(0));
    }

    #[test]
    fn test_harmonics() {
        let p = TrigPoly::new(0.0f64, vec![1.0, 2.0], vec![3.0, 4.0]).unwrap();
        let h: Vec<_> = p.harmonics().collect();
        assert_eq!(h, vec![(1, 1.0, 3.0), (2, 2.0, 4.0)]);
    }

    #[test]
    fn test_promoted_picks_widest() {
        let p = TrigPoly::promoted(1.0f32, &[2.0f32], &[3.0f32]).unwrap();
        let _: &TrigPoly<f32> = &p;
        let q = TrigPoly::promoted(1.0f32, &[2.0f32], &[3.0f64]).unwrap();
        let _: &TrigPoly<f64> = &q;
        assert_eq!(q.to_flat(), vec![1.0, 2.0, 3.0]);
        assert!(TrigPoly::promoted(1.0f64, &[2.0f32], &[] as &[f32]).is_err());
    }

    #[test]
    fn test_cast() {
        let p = TrigPoly::new(0.5f64, vec![0.25], vec![-1.0]).unwrap();
        let q: TrigPoly<f32> = p.cast();
        assert_eq!(q.to_flat(), vec![0.5f32, 0.25, -1.0]);
        assert_eq!(q.cast::<f64>(), p);
    }

    #[test]
    fn test_display() {
        let p = TrigPoly::new(1.0f64, vec![2.0], vec![3.0]).unwrap();
        assert_eq!(p.to_string(), "1 + 2·cos(1x) + 3·sin(1x)");
    }
}

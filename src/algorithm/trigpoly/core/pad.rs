//! Zero padding and truncation of harmonic degree

use crate::algorithm::trigpoly::helpers::{
    split_flat, validate_flat_len, validate_pad, validate_truncate,
};
use crate::algorithm::trigpoly::types::TrigPoly;
use crate::dtype::Element;
use crate::error::Result;

impl<T: Element> TrigPoly<T> {
    /// Zero-extend to harmonic degree `m`
    ///
    /// # Errors
    ///
    /// Returns a degree error if `m < self.n()`.
    pub fn pad_to(&self, m: usize) -> Result<Self> {
        validate_pad(self.n(), m)?;
        Ok(self.padded(m))
    }

    /// Zero-extend by `k` harmonics
    pub fn pad_by(&self, k: usize) -> Result<Self> {
        self.pad_to(self.n() + k)
    }

    /// Drop harmonics above `m`
    ///
    /// Lossy unless the dropped coefficients are zero.
    ///
    /// # Errors
    ///
    /// Returns a degree error if `m > self.n()`.
    pub fn truncate(&self, m: usize) -> Result<Self> {
        validate_truncate(self.n(), m)?;
        Ok(Self::from_parts(
            self.a0(),
            self.ac()[..m].to_vec(),
            self.as_()[..m].to_vec(),
        ))
    }

    /// `pad_to` for callers that already know `m >= n`
    pub(crate) fn padded(&self, m: usize) -> Self {
        debug_assert!(m >= self.n());
        Self::from_parts(self.a0(), zero_extend(self.ac(), m), zero_extend(self.as_(), m))
    }
}

fn zero_extend<T: Element>(block: &[T], m: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(m);
    out.extend_from_slice(block);
    out.resize(m, T::zero());
    out
}

/// Pad a flat vector of length `2n+1` to length `2m+1`
///
/// Both halves grow independently, so zeros land after each block:
///
/// ```text
/// [a0, c1..cn, s1..sn] -> [a0, c1..cn, 0..0, s1..sn, 0..0]
/// ```
///
/// # Errors
///
/// Shape error for even input length, degree error if `m < n`.
pub fn pad_flat_to<T: Element>(flat: &[T], m: usize) -> Result<Vec<T>> {
    let n = validate_flat_len(flat.len())?;
    validate_pad(n, m)?;
    let (a0, first, second) = split_flat(flat);

    let mut out = Vec::with_capacity(2 * m + 1);
    out.push(a0);
    out.extend(zero_extend(first, m));
    out.extend(zero_extend(second, m));
    Ok(out)
}

/// Truncate a flat vector of length `2n+1` to length `2m+1`
///
/// # Errors
///
/// Shape error for even input length, degree error if `m > n`.
pub fn truncate_flat_to<T: Element>(flat: &[T], m: usize) -> Result<Vec<T>> {
    let n = validate_flat_len(flat.len())?;
    validate_truncate(n, m)?;
    let (a0, first, second) = split_flat(flat);

    let mut out = Vec::with_capacity(2 * m + 1);
    out.push(a0);
    out.extend_from_slice(&first[..m]);
    out.extend_from_slice(&second[..m]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ErrorKind};

    fn sample() -> TrigPoly<f64> {
        TrigPoly::new(1.0, vec![2.0, 3.0], vec![4.0, 5.0]).unwrap()
    }

    #[test]
    fn test_pad_to() {
        let p = sample().pad_to(4).unwrap();
        assert_eq!(p.a0(), 1.0);
        assert_eq!(p.ac(), &[2.0, 3.0, 0.0, 0.0]);
        assert_eq!(p.as_(), &[4.0, 5.0, 0.0, 0.0]);
        assert_eq!(sample().pad_to(2).unwrap(), sample());
    }

    #[test]
    fn test_pad_to_smaller_fails() {
        let err = sample().pad_to(1).unwrap_err();
        assert_eq!(
            err,
            Error::PadBelowDegree {
                degree: 2,
                target: 1
            }
        );
        assert_eq!(err.kind(), ErrorKind::Degree);
    }

    #[test]
    fn test_pad_by() {
        assert_eq!(sample().pad_by(3).unwrap(), sample().pad_to(5).unwrap());
        assert_eq!(sample().pad_by(0).unwrap(), sample());
    }

    #[test]
    fn test_truncate() {
        let p = sample().truncate(1).unwrap();
        assert_eq!(p.to_flat(), vec![1.0, 2.0, 4.0]);
        let c = sample().truncate(0).unwrap();
        assert_eq!(c, TrigPoly::constant(1.0));
        assert_eq!(
            sample().truncate(3).unwrap_err().kind(),
            ErrorKind::Degree
        );
    }

    #[test]
    fn test_pad_then_truncate_is_identity() {
        let p = sample();
        assert_eq!(p.pad_to(9).unwrap().truncate(2).unwrap(), p);
    }

    #[test]
    fn test_pad_flat_interleaves_zeros() {
        let padded = pad_flat_to(&[1.0, 2.0, 3.0, 4.0, 5.0], 3).unwrap();
        assert_eq!(padded, vec![1.0, 2.0, 3.0, 0.0, 4.0, 5.0, 0.0]);
        assert_eq!(
            padded,
            sample().pad_to(3).unwrap().to_flat()
        );
    }

    #[test]
    fn test_pad_flat_errors() {
        assert_eq!(
            pad_flat_to(&[1.0, 2.0], 3).unwrap_err().kind(),
            ErrorKind::Shape
        );
        assert_eq!(
            pad_flat_to(&[1.0, 2.0, 3.0], 0).unwrap_err().kind(),
            ErrorKind::Degree
        );
    }

    #[test]
    fn test_truncate_flat() {
        let flat = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(truncate_flat_to(&flat, 1).unwrap(), vec![1.0, 2.0, 4.0]);
        assert_eq!(truncate_flat_to(&flat, 0).unwrap(), vec![1.0]);
        assert!(truncate_flat_to(&flat, 3).is_err());
        let padded = pad_flat_to(&flat, 6).unwrap();
        assert_eq!(truncate_flat_to(&padded, 2).unwrap(), flat.to_vec());
    }
}

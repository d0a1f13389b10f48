//! Helper functions for trigonometric polynomial operations

use crate::error::{Error, Result};

/// Validate the length of a flat coefficient or sample vector
///
/// Requirements:
/// - Length must be odd, `2n+1` (so zero is rejected)
///
/// Returns the harmonic degree `n`.
pub fn validate_flat_len(len: usize) -> Result<usize> {
    if len % 2 == 0 {
        return Err(Error::EvenFlatLength { len });
    }
    Ok(len / 2)
}

/// Validate a padding request from harmonic degree `degree` to `target`
pub fn validate_pad(degree: usize, target: usize) -> Result<()> {
    if target < degree {
        return Err(Error::PadBelowDegree { degree, target });
    }
    Ok(())
}

/// Validate a truncation request from harmonic degree `degree` to `target`
pub fn validate_truncate(degree: usize, target: usize) -> Result<()> {
    if target > degree {
        return Err(Error::TruncateAboveDegree { degree, target });
    }
    Ok(())
}

/// Validate that a buffer has exactly `expected` elements
pub fn validate_len(expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(Error::length_mismatch(expected, got));
    }
    Ok(())
}

/// Split a flat vector `[a0, block1(n), block2(n)]` at its midpoint
///
/// The caller must have validated the length with [`validate_flat_len`].
pub(crate) fn split_flat<T: Copy>(flat: &[T]) -> (T, &[T], &[T]) {
    let n = flat.len() / 2;
    (flat[0], &flat[1..=n], &flat[n + 1..])
}

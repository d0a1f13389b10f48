//! Trait definition for the trigonometric transform pair

use crate::dtype::Element;
use crate::error::Result;

/// Algorithmic contract for coefficient ↔ sample transforms
///
/// An implementor is bound to one harmonic degree `n` and transforms
/// buffers of length `m = 2n+1`.
///
/// # Layout Convention
///
/// Coefficients use the flat layout:
/// - `coeffs[0]` = constant term a0
/// - `coeffs[1..=n]` = cosine coefficients ac₁..acₙ
/// - `coeffs[n+1..]` = sine coefficients as₁..asₙ
///
/// Samples are values at `x_i = 2πi/m`, `i = 0..m`.
pub trait TrigTransformAlgorithms<T: Element> {
    /// Coefficients → samples
    ///
    /// # Algorithm
    ///
    /// Hermitian packing followed by one complex DFT:
    /// ```text
    /// z[0]   = a0
    /// z[k]   = (acₖ + i·asₖ) / 2      k = 1..n
    /// z[m-k] = (acₖ - i·asₖ) / 2      k = 1..n
    /// out    = Re(DFT(z))
    /// ```
    ///
    /// The spectrum is conjugate-symmetric, so the imaginary part of the
    /// result is zero up to rounding and is discarded.
    ///
    /// # Errors
    ///
    /// Shape error if either buffer is not of length `m`.
    fn evaluate_into(&mut self, coeffs: &[T], out: &mut [T]) -> Result<()>;

    /// Adjoint (transpose) of [`evaluate_into`](Self::evaluate_into)
    ///
    /// # Algorithm
    ///
    /// ```text
    /// X   = DFT(values)
    /// out = [Re X[0..=n]] ++ reverse(Im X[n+1..m])
    /// ```
    ///
    /// Satisfies `dot(evaluate(u), v) == dot(u, evaluate_t(v))`.
    ///
    /// # Errors
    ///
    /// Shape error if either buffer is not of length `m`.
    fn evaluate_t_into(&mut self, values: &[T], out: &mut [T]) -> Result<()>;

    /// Samples → coefficients, the exact inverse of
    /// [`evaluate_into`](Self::evaluate_into)
    ///
    /// # Algorithm
    ///
    /// ```text
    /// out     = evaluate_t(samples) / (n + 0.5)
    /// out[0] /= 2
    /// ```
    ///
    /// # Errors
    ///
    /// Shape error if either buffer is not of length `m`.
    fn interpolatev_into(&mut self, samples: &[T], out: &mut [T]) -> Result<()>;
}

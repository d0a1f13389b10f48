//! Complex DFT primitive backed by rustfft
//!
//! The trigonometric transforms only ever need complex-to-complex DFTs of
//! odd length `2n+1`, so this module is a thin layer over rustfft's
//! mixed-radix planner plus a process-wide plan cache.
//!
//! # Plan Cache
//!
//! Planning a transform is far more expensive than executing it. Plans are
//! cached per element type in a [`PlanCache`], keyed by length and direction.
//! The cache is read-mostly: lookups take a shared `parking_lot::RwLock`
//! read guard and only a miss takes the write guard.
//!
//! ```text
//! lookup(len, dir):
//!     read lock -> hit? return Arc<plan>
//!     plan with a fresh FftPlanner
//!     write lock -> insert if absent (first writer wins) -> return entry
//! ```

use crate::dtype::Element;
use num_complex::Complex;
use parking_lot::RwLock;
use rustfft::{Fft, FftNum, FftPlanner};
use std::collections::HashMap;
use std::sync::Arc;

// ============================================================================
// FFT Configuration
// ============================================================================

/// Direction of FFT computation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FftDirection {
    /// Forward FFT: time domain → frequency domain
    /// Uses twiddle factor: e^(-2πi * k / N)
    Forward,
    /// Inverse FFT: frequency domain → time domain
    /// Uses twiddle factor: e^(+2πi * k / N)
    Inverse,
}

impl From<FftDirection> for rustfft::FftDirection {
    fn from(direction: FftDirection) -> Self {
        match direction {
            FftDirection::Forward => rustfft::FftDirection::Forward,
            FftDirection::Inverse => rustfft::FftDirection::Inverse,
        }
    }
}

/// Normalization mode for FFT
///
/// # Default: `Backward`
///
/// | Mode     | Forward Factor | Inverse Factor | Roundtrip          |
/// |----------|----------------|----------------|--------------------|
/// | None     | 1              | 1              | ifft(fft(x)) = N*x |
/// | Backward | 1              | 1/N            | ifft(fft(x)) = x   |
/// | Ortho    | 1/√N           | 1/√N           | ifft(fft(x)) = x   |
/// | Forward  | 1/N            | 1              | ifft(fft(x)) = x   |
///
/// The trigonometric transforms always run the raw (`None`) forward DFT and
/// apply their own scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FftNormalization {
    /// No normalization (forward: 1, inverse: 1)
    None,
    /// Normalize inverse by 1/N (forward: 1, inverse: 1/N)
    #[default]
    Backward,
    /// Normalize both by 1/sqrt(N). Preserves Parseval's theorem.
    Ortho,
    /// Normalize forward by 1/N (forward: 1/N, inverse: 1)
    Forward,
}

impl FftNormalization {
    /// Get the normalization factor for a given direction and size
    #[inline]
    pub fn factor(self, direction: FftDirection, n: usize) -> f64 {
        let n_f = n as f64;
        match (self, direction) {
            (Self::None, _) => 1.0,
            (Self::Backward, FftDirection::Forward) => 1.0,
            (Self::Backward, FftDirection::Inverse) => 1.0 / n_f,
            (Self::Ortho, _) => 1.0 / n_f.sqrt(),
            (Self::Forward, FftDirection::Forward) => 1.0 / n_f,
            (Self::Forward, FftDirection::Inverse) => 1.0,
        }
    }
}

// ============================================================================
// Plan Cache
// ============================================================================

/// Process-wide cache of DFT plans for one element type
///
/// Obtain the shared instance through [`Element::plan_cache`].
pub struct PlanCache<T: FftNum> {
    plans: RwLock<HashMap<(usize, FftDirection), Arc<dyn Fft<T>>>>,
}

impl<T: FftNum> PlanCache<T> {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            plans: RwLock::new(HashMap::new()),
        }
    }

    /// Get the plan for a transform of length `len`, planning it on a miss
    pub fn plan(&self, len: usize, direction: FftDirection) -> Arc<dyn Fft<T>> {
        if let Some(plan) = self.plans.read().get(&(len, direction)) {
            return Arc::clone(plan);
        }

        let plan = FftPlanner::<T>::new().plan_fft(len, direction.into());
        tracing::debug!(len, ?direction, "planned DFT");

        let mut plans = self.plans.write();
        Arc::clone(plans.entry((len, direction)).or_insert(plan))
    }

    /// Number of cached plans
    pub fn len(&self) -> usize {
        self.plans.read().len()
    }

    /// Returns true if no plan has been cached yet
    pub fn is_empty(&self) -> bool {
        self.plans.read().is_empty()
    }

    /// Returns true if a plan for `(len, direction)` is cached
    pub fn contains(&self, len: usize, direction: FftDirection) -> bool {
        self.plans.read().contains_key(&(len, direction))
    }
}

impl<T: FftNum> Default for PlanCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Transforms
// ============================================================================

/// In-place complex DFT of any length
///
/// Uses the shared plan cache of `T`. Empty buffers are left untouched.
pub fn fft_in_place<T: Element>(
    buffer: &mut [Complex<T>],
    direction: FftDirection,
    norm: FftNormalization,
) {
    let len = buffer.len();
    if len == 0 {
        return;
    }

    T::plan_cache().plan(len, direction).process(buffer);

    let factor = norm.factor(direction, len);
    if factor != 1.0 {
        let factor = T::narrow(factor);
        for z in buffer.iter_mut() {
            *z = z.scale(factor);
        }
    }
}

/// Allocating complex DFT
pub fn fft<T: Element>(
    input: &[Complex<T>],
    direction: FftDirection,
    norm: FftNormalization,
) -> Vec<Complex<T>> {
    let mut buffer = input.to_vec();
    fft_in_place(&mut buffer, direction, norm);
    buffer
}

/// DFT of a real signal, returning the full complex spectrum
pub fn fft_real<T: Element>(input: &[T], norm: FftNormalization) -> Vec<Complex<T>> {
    let mut buffer: Vec<Complex<T>> = input.iter().map(|&x| Complex::new(x, T::zero())).collect();
    fft_in_place(&mut buffer, FftDirection::Forward, norm);
    buffer
}

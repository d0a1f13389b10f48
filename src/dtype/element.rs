//! Element trait for mapping Rust float types to DType

use super::DType;
use crate::algorithm::fft::PlanCache;
use num_traits::{Float, FloatConst};
use rustfft::FftNum;
use std::fmt;
use std::sync::OnceLock;

/// Trait for types that can be coefficients of a trigonometric polynomial
///
/// Implemented for `f32` and `f64`.
///
/// # Bounds
/// - `Float + FloatConst` - Transcendental functions and π (num-traits)
/// - `FftNum` - Usable as the scalar of a rustfft plan
/// - `Default + Debug + Display` - Formatting and zero-initialisation
///
/// Conversions between precisions go through `f64` with `widen`/`narrow`,
/// named so they do not collide with `num_traits` casts.
pub trait Element: Float + FloatConst + FftNum + Default + fmt::Debug + fmt::Display {
    /// The corresponding DType for this Rust type
    const DTYPE: DType;

    /// Convert to f64 (lossless for both supported types)
    fn widen(self) -> f64;

    /// Convert from f64, rounding to the nearest representable value
    fn narrow(v: f64) -> Self;

    /// Convert to another element type
    #[inline]
    fn convert<U: Element>(self) -> U {
        U::narrow(self.widen())
    }

    /// Process-wide DFT plan cache for this element type
    fn plan_cache() -> &'static PlanCache<Self>;

    /// Draw one sample from the standard normal distribution
    #[cfg(feature = "random")]
    fn sample_standard_normal<R: rand::Rng + ?Sized>(rng: &mut R) -> Self;
}

static F64_PLANS: OnceLock<PlanCache<f64>> = OnceLock::new();
static F32_PLANS: OnceLock<PlanCache<f32>> = OnceLock::new();

impl Element for f64 {
    const DTYPE: DType = DType::F64;

    #[inline]
    fn widen(self) -> f64 {
        self
    }

    #[inline]
    fn narrow(v: f64) -> Self {
        v
    }

    fn plan_cache() -> &'static PlanCache<Self> {
        F64_PLANS.get_or_init(PlanCache::new)
    }

    #[cfg(feature = "random")]
    #[inline]
    fn sample_standard_normal<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        rand_distr::Distribution::sample(&rand_distr::StandardNormal, rng)
    }
}

impl Element for f32 {
    const DTYPE: DType = DType::F32;

    #[inline]
    fn widen(self) -> f64 {
        self as f64
    }

    #[inline]
    fn narrow(v: f64) -> Self {
        v as f32
    }

    fn plan_cache() -> &'static PlanCache<Self> {
        F32_PLANS.get_or_init(PlanCache::new)
    }

    #[cfg(feature = "random")]
    #[inline]
    fn sample_standard_normal<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        rand_distr::Distribution::sample(&rand_distr::StandardNormal, rng)
    }
}

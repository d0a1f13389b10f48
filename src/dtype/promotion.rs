//! Type promotion rules for binary operations

use super::{DType, Element};

/// Promote two dtypes to a common dtype for binary operations
///
/// The more precise type wins.
pub fn promote(lhs: DType, rhs: DType) -> DType {
    if lhs >= rhs { lhs } else { rhs }
}

/// Compile-time counterpart of [`promote`]
///
/// `<T as Promote<U>>::Output` is the element type a binary operation on
/// `T` and `U` operands produces. The `DTYPE` of the output always equals
/// `promote(T::DTYPE, U::DTYPE)`.
pub trait Promote<Rhs: Element>: Element {
    /// The wider of `Self` and `Rhs`
    type Output: Element;
}

/// Shorthand for `<T as Promote<U>>::Output`
pub type Promoted<T, U> = <T as Promote<U>>::Output;

macro_rules! impl_promote {
    ($lhs:ty, $rhs:ty => $out:ty) => {
        impl Promote<$rhs> for $lhs {
            type Output = $out;
        }
    };
}

impl_promote!(f32, f32 => f32);
impl_promote!(f32, f64 => f64);
impl_promote!(f64, f32 => f64);
impl_promote!(f64, f64 => f64);

//! Operator overloads for `TrigPoly`
//!
//! Operands of different precision are promoted to the wider one before
//! combining, so `TrigPoly<f32> * TrigPoly<f64>` is a `TrigPoly<f64>`.
//! Scalars (`f32`, `f64`) act as constant polynomials of their own
//! precision. Owned and borrowed operands are both accepted.

use super::core::arith::{add, add_scalar, divide_scalar, multiply, negate, scale, subtract};
use super::types::TrigPoly;
use crate::dtype::{Element, Promote, Promoted};
use std::ops::{Add, Div, Mul, Neg, Sub};

impl<T: Element> Neg for &TrigPoly<T> {
    type Output = TrigPoly<T>;

    fn neg(self) -> TrigPoly<T> {
        negate(self)
    }
}

impl<T: Element> Neg for TrigPoly<T> {
    type Output = TrigPoly<T>;

    fn neg(self) -> TrigPoly<T> {
        negate(&self)
    }
}

macro_rules! impl_poly_binop {
    ($trait:ident, $method:ident, $func:ident) => {
        impl<'a, 'b, T, U> $trait<&'b TrigPoly<U>> for &'a TrigPoly<T>
        where
            T: Promote<U>,
            U: Element,
        {
            type Output = TrigPoly<Promoted<T, U>>;

            fn $method(self, rhs: &'b TrigPoly<U>) -> Self::Output {
                $func(&self.cast(), &rhs.cast())
            }
        }

        impl<'b, T, U> $trait<&'b TrigPoly<U>> for TrigPoly<T>
        where
            T: Promote<U>,
            U: Element,
        {
            type Output = TrigPoly<Promoted<T, U>>;

            fn $method(self, rhs: &'b TrigPoly<U>) -> Self::Output {
                $trait::$method(&self, rhs)
            }
        }

        impl<'a, T, U> $trait<TrigPoly<U>> for &'a TrigPoly<T>
        where
            T: Promote<U>,
            U: Element,
        {
            type Output = TrigPoly<Promoted<T, U>>;

            fn $method(self, rhs: TrigPoly<U>) -> Self::Output {
                $trait::$method(self, &rhs)
            }
        }

        impl<T, U> $trait<TrigPoly<U>> for TrigPoly<T>
        where
            T: Promote<U>,
            U: Element,
        {
            type Output = TrigPoly<Promoted<T, U>>;

            fn $method(self, rhs: TrigPoly<U>) -> Self::Output {
                $trait::$method(&self, &rhs)
            }
        }
    };
}

impl_poly_binop!(Add, add, add);
impl_poly_binop!(Sub, sub, subtract);
impl_poly_binop!(Mul, mul, multiply);

/// Scalar on the right: `p ∘ c`
macro_rules! impl_scalar_rhs {
    ($scalar:ty, $trait:ident, $method:ident, |$p:ident, $c:ident| $body:expr) => {
        impl<'a, T: Promote<$scalar>> $trait<$scalar> for &'a TrigPoly<T> {
            type Output = TrigPoly<Promoted<T, $scalar>>;

            fn $method(self, c: $scalar) -> Self::Output {
                let $p: TrigPoly<Promoted<T, $scalar>> = self.cast();
                let $c: Promoted<T, $scalar> = c.convert();
                $body
            }
        }

        impl<T: Promote<$scalar>> $trait<$scalar> for TrigPoly<T> {
            type Output = TrigPoly<Promoted<T, $scalar>>;

            fn $method(self, c: $scalar) -> Self::Output {
                $trait::$method(&self, c)
            }
        }
    };
}

/// Scalar on the left: `c ∘ p`
macro_rules! impl_scalar_lhs {
    ($scalar:ty, $trait:ident, $method:ident, |$c:ident, $p:ident| $body:expr) => {
        impl<'a, T: Element> $trait<&'a TrigPoly<T>> for $scalar
        where
            $scalar: Promote<T>,
        {
            type Output = TrigPoly<Promoted<$scalar, T>>;

            fn $method(self, p: &'a TrigPoly<T>) -> Self::Output {
                let $p: TrigPoly<Promoted<$scalar, T>> = p.cast();
                let $c: Promoted<$scalar, T> = self.convert();
                $body
            }
        }

        impl<T: Element> $trait<TrigPoly<T>> for $scalar
        where
            $scalar: Promote<T>,
        {
            type Output = TrigPoly<Promoted<$scalar, T>>;

            fn $method(self, p: TrigPoly<T>) -> Self::Output {
                $trait::$method(self, &p)
            }
        }
    };
}

macro_rules! impl_scalar_ops {
    ($($scalar:ty),*) => {
        $(
            impl_scalar_rhs!($scalar, Add, add, |p, c| add_scalar(&p, c));
            impl_scalar_rhs!($scalar, Sub, sub, |p, c| add_scalar(&p, -c));
            impl_scalar_rhs!($scalar, Mul, mul, |p, c| scale(&p, c));
            impl_scalar_rhs!($scalar, Div, div, |p, c| divide_scalar(&p, c));

            impl_scalar_lhs!($scalar, Add, add, |c, p| add_scalar(&p, c));
            impl_scalar_lhs!($scalar, Sub, sub, |c, p| add_scalar(&negate(&p), c));
            impl_scalar_lhs!($scalar, Mul, mul, |c, p| scale(&p, c));
        )*
    };
}

impl_scalar_ops!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn p() -> TrigPoly<f64> {
        TrigPoly::new(1.0, vec![2.0], vec![3.0]).unwrap()
    }

    #[test]
    fn test_neg() {
        assert_eq!((-p()).to_flat(), vec![-1.0, -2.0, -3.0]);
        assert_eq!(-&p(), -p());
    }

    #[test]
    fn test_ownership_variants_agree() {
        let q = TrigPoly::new(0.5f64, vec![-1.0, 1.0], vec![0.0, 2.0]).unwrap();
        let expected = &p() + &q;
        assert_eq!(p() + q.clone(), expected);
        assert_eq!(&p() + q.clone(), expected);
        assert_eq!(p() + &q, expected);
    }

    #[test]
    fn test_scalar_ops() {
        assert_eq!((p() + 1.0f64).a0(), 2.0);
        assert_eq!((1.0f64 + p()).a0(), 2.0);
        assert_eq!((p() - 1.0f64).a0(), 0.0);
        assert_eq!((1.0f64 - p()).to_flat(), vec![0.0, -2.0, -3.0]);
        assert_eq!((p() * 2.0f64).to_flat(), vec![2.0, 4.0, 6.0]);
        assert_eq!((2.0f64 * &p()).to_flat(), vec![2.0, 4.0, 6.0]);
        assert_eq!((p() / 2.0f64).to_flat(), vec![0.5, 1.0, 1.5]);
    }

    #[test]
    fn test_mixed_precision_promotes() {
        let single: TrigPoly<f32> = p().cast();
        let sum: TrigPoly<f64> = &single + &p();
        assert_eq!(sum.to_flat(), vec![2.0, 4.0, 6.0]);

        let scaled: TrigPoly<f64> = &single * 0.5f64;
        assert_eq!(scaled.to_flat(), vec![0.5, 1.0, 1.5]);

        let kept: TrigPoly<f32> = &single * 0.5f32;
        assert_eq!(kept.to_flat(), vec![0.5f32, 1.0, 1.5]);

        let left: TrigPoly<f64> = 1.0f64 + single;
        assert_eq!(left.a0(), 2.0);
    }

    #[test]
    fn test_mul_operator_degree() {
        let q = TrigPoly::new(0.0f64, vec![1.0, 0.0, 1.0], vec![0.0; 3]).unwrap();
        assert_eq!((p() * q).n(), 4);
    }
}

// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use crate::{error::BignumError, magnitude::Magnitude, radix::Radix, signed::Bignum};
use num_traits::Zero;

/// The arithmetic that number-theoretic algorithms need from a value type.
///
/// Implemented by [`Magnitude`], [`Bignum`] and the primitive integers, so an
/// algorithm written against this trait runs unchanged on any of them.
pub trait Arithmetic: Zero + Clone + Ord {
    fn try_add(&self, rhs: &Self) -> Result<Self, BignumError>;

    fn try_sub(&self, rhs: &Self) -> Result<Self, BignumError>;

    fn try_mul(&self, rhs: &Self) -> Result<Self, BignumError>;

    fn try_rem(&self, rhs: &Self) -> Result<Self, BignumError>;
}

impl<R: Radix> Arithmetic for Magnitude<R> {
    fn try_add(&self, rhs: &Self) -> Result<Self, BignumError> {
        Ok(self + rhs)
    }

    fn try_sub(&self, rhs: &Self) -> Result<Self, BignumError> {
        self.checked_sub(rhs)
    }

    fn try_mul(&self, rhs: &Self) -> Result<Self, BignumError> {
        Ok(self * rhs)
    }

    fn try_rem(&self, rhs: &Self) -> Result<Self, BignumError> {
        self.checked_rem(rhs)
    }
}

impl<R: Radix> Arithmetic for Bignum<R> {
    fn try_add(&self, rhs: &Self) -> Result<Self, BignumError> {
        Ok(self + rhs)
    }

    fn try_sub(&self, rhs: &Self) -> Result<Self, BignumError> {
        Ok(self - rhs)
    }

    fn try_mul(&self, rhs: &Self) -> Result<Self, BignumError> {
        Ok(self * rhs)
    }

    fn try_rem(&self, rhs: &Self) -> Result<Self, BignumError> {
        self.checked_rem(rhs)
    }
}

macro_rules! impl_arithmetic_native {
    ($($t:ty),* $(,)?) => {
        $(
            impl Arithmetic for $t {
                #[inline]
                fn try_add(&self, rhs: &Self) -> Result<Self, BignumError> {
                    self.checked_add(*rhs).ok_or(BignumError::Overflow)
                }

                #[inline]
                fn try_sub(&self, rhs: &Self) -> Result<Self, BignumError> {
                    self.checked_sub(*rhs).ok_or(BignumError::Overflow)
                }

                #[inline]
                fn try_mul(&self, rhs: &Self) -> Result<Self, BignumError> {
                    self.checked_mul(*rhs).ok_or(BignumError::Overflow)
                }

                #[inline]
                fn try_rem(&self, rhs: &Self) -> Result<Self, BignumError> {
                    if *rhs == 0 {
                        return Err(BignumError::DivisionByZero);
                    }
                    // MIN % -1 is the only other failure
                    self.checked_rem(*rhs).ok_or(BignumError::Overflow)
                }
            }
        )*
    };
}

impl_arithmetic_native!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// Greatest common divisor by repeated remainder.
///
/// For signed types the result carries whatever sign the remainder chain
/// leaves; pass non-negative operands for the conventional answer.
/// `gcd(0, 0)` is `0`.
pub fn gcd<T: Arithmetic>(a: &T, b: &T) -> Result<T, BignumError> {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let r = a.try_rem(&b)?;
        a = b;
        b = r;
    }

    Ok(a)
}

// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use core::{fmt, hash::Hash};
use num_traits::{PrimInt, Unsigned};

/// Storage type for a single digit.
///
/// Conversions go through `u128`, the widest primitive, so that construction
/// from any native integer and extraction into any native integer share one
/// code path.
pub trait Digit:
    PrimInt + Unsigned + Hash + Default + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Lossless widening to `u128`.
    fn widen(self) -> u128;

    /// Truncating narrowing from `u128`. Callers only pass values below `BASE`.
    fn narrow(value: u128) -> Self;
}

macro_rules! impl_digit {
    ($($t:ty),* $(,)?) => {
        $(
            impl Digit for $t {
                #[inline]
                fn widen(self) -> u128 { self as u128 }

                #[inline]
                fn narrow(value: u128) -> Self { value as $t }
            }
        )*
    };
}

impl_digit!(u8, u16, u32, u64, u128, usize);

#[doc(hidden)]
pub mod __private {
    /// Implemented only by [`crate::construct_radix!`], next to its base checks.
    pub trait Sealed {}
}

/// Binds a digit storage type to a compile-time base.
///
/// Sealed: the only implementations come from [`crate::construct_radix!`],
/// which checks `BASE > 1` and that `BASE * BASE` fits in `Digit`. Every
/// per-digit multiply-accumulate in the engine relies on that bound.
///
/// ```compile_fail
/// use radix_bignum::Radix;
///
/// #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// struct Wide;
///
/// impl Radix for Wide {
///     type Digit = u64;
///     const BASE: u64 = 1 << 40;
/// }
/// ```
pub trait Radix:
    __private::Sealed + Copy + Clone + Eq + Ord + Hash + Default + fmt::Debug + Send + Sync + 'static
{
    type Digit: Digit;

    const BASE: Self::Digit;
}

crate::construct_radix! {
    /// Base 10 over `u32` digits. Renders as `1_2_3`.
    pub struct Decimal(u32, 10);
}

crate::construct_radix! {
    /// Base 10^9 over `u64` digits: compact, and still legible when rendered.
    pub struct Billion(u64, 1_000_000_000);
}

crate::construct_radix! {
    /// Base 2^32 over `u128` digits.
    pub struct Word(u128, 1 << 32);
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::{CheckedMul, One};

    crate::construct_radix! {
        struct Tiny(u8, 15);
    }

    #[test]
    fn presets_expose_their_base() {
        assert_eq!(Decimal::BASE, 10u32);
        assert_eq!(Billion::BASE, 1_000_000_000u64);
        assert_eq!(Word::BASE, 1u128 << 32);
        assert_eq!(Tiny::BASE, 15u8);
    }

    fn base_squared_fits<R: Radix>() -> bool {
        R::BASE > R::Digit::one() && R::BASE.checked_mul(&R::BASE).is_some()
    }

    #[test]
    fn every_radix_keeps_digit_products_in_range() {
        assert!(base_squared_fits::<Decimal>());
        assert!(base_squared_fits::<Billion>());
        assert!(base_squared_fits::<Word>());
        assert!(base_squared_fits::<Tiny>());
    }

    #[test]
    fn widen_and_narrow() {
        assert_eq!(200u8.widen(), 200u128);
        assert_eq!(u8::narrow(7), 7u8);
        assert_eq!(u64::narrow(u128::from(u64::MAX)), u64::MAX);
        // narrowing truncates
        assert_eq!(u8::narrow(0x1ff), 0xffu8);
    }
}

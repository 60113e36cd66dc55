// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

/// Declares a radix marker type.
///
/// Usage example:
///
/// construct_radix! {
///     pub struct Decimal(u32, 10); // base 10 over u32 digits
/// }
///
/// Fails to compile unless `BASE > 1` and `BASE * BASE` fits in the digit type:
///
/// ```compile_fail
/// radix_bignum::construct_radix! {
///     struct Wide(u64, 1 << 40);
/// }
/// ```
///
/// ```compile_fail
/// radix_bignum::construct_radix! {
///     struct Unary(u32, 1);
/// }
/// ```
#[macro_export]
macro_rules! construct_radix {
    ( $(#[$attr:meta])* $vis:vis struct $name:ident ( $digit:ty, $base:expr ); ) => {
        $(#[$attr])*
        #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
        $vis struct $name;

        // --- compile-time guards ---
        const _: () = {
            let base: $digit = $base;
            if !(base > 1) {
                panic!("radix BASE must be > 1");
            }
            if base.checked_mul(base).is_none() {
                panic!("radix BASE * BASE must fit in the digit type");
            }
        };

        impl $crate::radix::__private::Sealed for $name {}

        impl $crate::radix::Radix for $name {
            type Digit = $digit;

            const BASE: $digit = $base;
        }
    };
}

/// Implements the by-value and by-reference forms of a binary operator for a
/// bignum type in terms of one in-place method `fn(&mut Self, &Self)`.
///
/// The by-value forms reuse the left operand's buffer; the by-reference forms
/// clone the left operand first. Neither aliases the right operand.
macro_rules! impl_binary_ops {
    ($ty:ident, $($op:ident :: $method:ident, $assign_op:ident :: $assign_method:ident => $inplace:ident;)*) => {
        $(
            impl<R: $crate::radix::Radix> core::ops::$assign_op<&$ty<R>> for $ty<R> {
                #[track_caller]
                #[inline]
                fn $assign_method(&mut self, rhs: &$ty<R>) {
                    self.$inplace(rhs);
                }
            }

            impl<R: $crate::radix::Radix> core::ops::$assign_op<$ty<R>> for $ty<R> {
                #[track_caller]
                #[inline]
                fn $assign_method(&mut self, rhs: $ty<R>) {
                    self.$inplace(&rhs);
                }
            }

            impl<R: $crate::radix::Radix> core::ops::$op<&$ty<R>> for &$ty<R> {
                type Output = $ty<R>;

                #[track_caller]
                #[inline]
                fn $method(self, rhs: &$ty<R>) -> $ty<R> {
                    let mut out = self.clone();
                    out.$inplace(rhs);
                    out
                }
            }

            impl<R: $crate::radix::Radix> core::ops::$op<$ty<R>> for &$ty<R> {
                type Output = $ty<R>;

                #[track_caller]
                #[inline]
                fn $method(self, rhs: $ty<R>) -> $ty<R> {
                    let mut out = self.clone();
                    out.$inplace(&rhs);
                    out
                }
            }

            impl<R: $crate::radix::Radix> core::ops::$op<&$ty<R>> for $ty<R> {
                type Output = $ty<R>;

                #[track_caller]
                #[inline]
                fn $method(mut self, rhs: &$ty<R>) -> $ty<R> {
                    self.$inplace(rhs);
                    self
                }
            }

            impl<R: $crate::radix::Radix> core::ops::$op<$ty<R>> for $ty<R> {
                type Output = $ty<R>;

                #[track_caller]
                #[inline]
                fn $method(mut self, rhs: $ty<R>) -> $ty<R> {
                    self.$inplace(&rhs);
                    self
                }
            }
        )*
    };
}

pub(crate) use impl_binary_ops;

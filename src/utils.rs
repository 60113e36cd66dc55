// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use crate::radix::Digit;

/// Drops most-significant zero digits so that zero is the empty sequence.
#[inline]
pub(crate) fn strip_leading_zeros<D: Digit>(digits: &mut Vec<D>) {
    while digits.last().is_some_and(|d| d.is_zero()) {
        digits.pop();
    }
}

/// `digits -= rhs * base^shift`, in place, then re-canonicalizes.
///
/// The caller guarantees the shifted subtrahend does not exceed `digits`.
pub(crate) fn sub_shifted<D: Digit>(digits: &mut Vec<D>, shift: usize, rhs: &[D], base: D) {
    debug_assert!(digits.len() >= shift + rhs.len(), "shifted subtrahend is longer than minuend");

    let mut borrow = D::zero();
    for (slot, &d) in digits[shift..].iter_mut().zip(rhs) {
        let take = d + borrow;
        if *slot < take {
            *slot = *slot + base - take;
            borrow = D::one();
        } else {
            *slot = *slot - take;
            borrow = D::zero();
        }
    }

    for slot in digits[shift + rhs.len()..].iter_mut() {
        if borrow.is_zero() {
            break;
        }
        if slot.is_zero() {
            *slot = base - D::one();
        } else {
            *slot = *slot - D::one();
            borrow = D::zero();
        }
    }

    debug_assert!(borrow.is_zero(), "subtraction underflowed");
    strip_leading_zeros(digits);
}

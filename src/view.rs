// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use crate::radix::Radix;
use core::{cmp::Ordering, fmt, marker::PhantomData};

/// Borrowed, read-only window over the digits of a [`crate::Magnitude`].
///
/// A view never owns or mutates digits and cannot outlive the magnitude it was
/// taken from. Windows are canonical: most-significant zero digits are trimmed
/// off when the view is created, so the ordering below is the numeric order.
pub struct MagnitudeView<'a, R: Radix> {
    digits: &'a [R::Digit],
    _radix: PhantomData<R>,
}

impl<'a, R: Radix> MagnitudeView<'a, R> {
    /// Wraps a digit slice, least-significant first, trimming its top zeros.
    pub(crate) fn new(digits: &'a [R::Digit]) -> Self {
        let end = digits.iter().rposition(|d| !num_traits::Zero::is_zero(d)).map_or(0, |i| i + 1);
        Self { digits: &digits[..end], _radix: PhantomData }
    }

    #[inline]
    pub fn digits(&self) -> &'a [R::Digit] {
        self.digits
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }
}

impl<R: Radix> Clone for MagnitudeView<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Radix> Copy for MagnitudeView<'_, R> {}

impl<R: Radix> PartialEq for MagnitudeView<'_, R> {
    fn eq(&self, other: &Self) -> bool {
        self.digits == other.digits
    }
}

impl<R: Radix> Eq for MagnitudeView<'_, R> {}

impl<R: Radix> PartialOrd for MagnitudeView<'_, R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<R: Radix> Ord for MagnitudeView<'_, R> {
    /// Longer is larger; equal lengths compare from the most-significant digit down.
    fn cmp(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.iter().rev().cmp(other.digits.iter().rev()))
    }
}

impl<R: Radix> fmt::Display for MagnitudeView<'_, R> {
    /// Most-significant digit first, digits separated by `_`. Zero renders as `0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.digits.is_empty() {
            return f.write_str("0");
        }
        for (i, digit) in self.digits.iter().rev().enumerate() {
            if i > 0 {
                f.write_str("_")?;
            }
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

impl<R: Radix> fmt::Debug for MagnitudeView<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use crate::{
    error::BignumError,
    integers::{NativeInt, U256},
    macros::impl_binary_ops,
    radix::{Digit, Radix},
    utils::{strip_leading_zeros, sub_shifted},
    view::MagnitudeView,
};
use core::{cmp::Ordering, fmt, marker::PhantomData};
use num_traits::{One, Zero};

/// Unsigned arbitrary-precision integer in base `R::BASE`.
///
/// Digits are stored least-significant first and kept canonical: the most
/// significant digit is never zero, and zero is the empty sequence. Every
/// operation below restores that form before returning.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Magnitude<R: Radix> {
    digits: Vec<R::Digit>,
    _radix: PhantomData<R>,
}

impl<R: Radix> Magnitude<R> {
    pub const fn zero() -> Self {
        Self { digits: Vec::new(), _radix: PhantomData }
    }

    pub fn one() -> Self {
        Self::from_canonical(vec![R::Digit::one()])
    }

    /// Builds the magnitude of `|value|` by repeated division by `BASE`.
    pub fn from_native<T: NativeInt>(value: T) -> Self {
        Self::from_canonical(value.abs_digits(R::BASE))
    }

    /// Builds a magnitude from digits given least-significant first.
    ///
    /// Top zero digits are dropped; any digit `>= BASE` is rejected.
    pub fn from_digits(mut digits: Vec<R::Digit>) -> Result<Self, BignumError> {
        if let Some(&digit) = digits.iter().find(|&&d| d >= R::BASE) {
            return Err(BignumError::DigitOutOfRange { digit: digit.widen(), base: R::BASE.widen() });
        }
        strip_leading_zeros(&mut digits);

        Ok(Self::from_canonical(digits))
    }

    #[inline]
    pub(crate) fn from_canonical(digits: Vec<R::Digit>) -> Self {
        debug_assert!(digits.last().map_or(true, |d| !d.is_zero()), "non-canonical digits");
        Self { digits, _radix: PhantomData }
    }

    /// Digits, least-significant first.
    #[inline]
    pub fn digits(&self) -> &[R::Digit] {
        &self.digits
    }

    #[inline]
    pub(crate) fn digits_mut(&mut self) -> &mut Vec<R::Digit> {
        &mut self.digits
    }

    /// Number of digits; zero has none.
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }

    #[inline]
    pub fn view(&self) -> MagnitudeView<'_, R> {
        MagnitudeView::new(&self.digits)
    }

    /// View of the digits in positions `[lo, hi)`, i.e. `(self / BASE^lo) mod BASE^(hi - lo)`.
    ///
    /// Panics if `lo > hi` or `hi > self.len()`, like slice indexing.
    #[track_caller]
    #[inline]
    pub fn view_range(&self, lo: usize, hi: usize) -> MagnitudeView<'_, R> {
        MagnitudeView::new(&self.digits[lo..hi])
    }

    /// Folds the digits into `T`, most-significant first, as `acc * BASE + digit`.
    ///
    /// Unchecked: if the value does not fit in `T` the result wraps modulo
    /// `T`'s width. Callers needing overflow detection narrow through a checked
    /// type themselves.
    pub fn get<T: NativeInt>(&self) -> T {
        let base = R::BASE.widen();
        self.digits
            .iter()
            .rev()
            .fold(T::ZERO, |acc, digit| acc.mul_add_wrapping(base, digit.widen()))
    }

    // --- addition ---

    pub fn add_assign_view(&mut self, rhs: MagnitudeView<'_, R>) {
        let base = R::BASE;
        let rhs = rhs.digits();
        let overlap = self.digits.len().min(rhs.len());

        self.digits.extend_from_slice(&rhs[overlap..]);

        let mut carry = R::Digit::zero();
        for (slot, &digit) in self.digits[..overlap].iter_mut().zip(&rhs[..overlap]) {
            let sum = *slot + digit + carry;
            if sum < base {
                *slot = sum;
                carry = R::Digit::zero();
            } else {
                *slot = sum - base;
                carry = R::Digit::one();
            }
        }

        for slot in self.digits[overlap..].iter_mut() {
            if carry.is_zero() {
                break;
            }
            let sum = *slot + carry;
            if sum < base {
                *slot = sum;
                carry = R::Digit::zero();
            } else {
                *slot = sum - base;
            }
        }

        if !carry.is_zero() {
            self.digits.push(carry);
        }
    }

    // --- subtraction ---

    /// `self -= rhs`, failing with [`BignumError::InvalidSubtraction`] when
    /// `rhs > self`. `self` is left untouched on failure.
    pub fn try_sub_assign(&mut self, rhs: MagnitudeView<'_, R>) -> Result<(), BignumError> {
        if self.view() < rhs {
            return Err(BignumError::InvalidSubtraction);
        }
        self.sub_assign_smaller(rhs);

        Ok(())
    }

    pub fn checked_sub(&self, rhs: &Self) -> Result<Self, BignumError> {
        let mut out = self.clone();
        out.try_sub_assign(rhs.view())?;

        Ok(out)
    }

    /// Subtraction whose caller has already established `rhs <= self`.
    #[inline]
    pub(crate) fn sub_assign_smaller(&mut self, rhs: MagnitudeView<'_, R>) {
        debug_assert!(self.view() >= rhs, "subtrahend exceeds minuend");
        sub_shifted(&mut self.digits, 0, rhs.digits(), R::BASE);
    }

    // --- multiplication ---

    pub fn mul_assign_view(&mut self, rhs: MagnitudeView<'_, R>) {
        if self.is_zero() || rhs.is_zero() {
            self.digits.clear();
            return;
        }
        self.digits = schoolbook_mul(&self.digits, rhs.digits(), R::BASE);
    }

    // --- operator plumbing ---

    #[inline]
    fn add_assign_impl(&mut self, rhs: &Self) {
        self.add_assign_view(rhs.view());
    }

    #[track_caller]
    #[inline]
    fn sub_assign_impl(&mut self, rhs: &Self) {
        if let Err(err) = self.try_sub_assign(rhs.view()) {
            panic!("{err}");
        }
    }

    #[inline]
    fn mul_assign_impl(&mut self, rhs: &Self) {
        self.mul_assign_view(rhs.view());
    }
}

/// Row-by-row schoolbook product. Each row carries as it goes, so every slot
/// is below `base` once its row is done; a slot never exceeds `base^2 - 1`.
fn schoolbook_mul<D: Digit>(lhs: &[D], rhs: &[D], base: D) -> Vec<D> {
    let mut acc = vec![D::zero(); lhs.len() + rhs.len()];

    for (i, &x) in lhs.iter().enumerate() {
        if x.is_zero() {
            continue;
        }
        let mut carry = D::zero();
        for (j, &y) in rhs.iter().enumerate() {
            let slot = acc[i + j] + x * y + carry;
            acc[i + j] = slot % base;
            carry = slot / base;
        }
        acc[i + rhs.len()] = carry;
    }

    strip_leading_zeros(&mut acc);
    acc
}

impl_binary_ops! {
    Magnitude,
    Add::add, AddAssign::add_assign => add_assign_impl;
    Sub::sub, SubAssign::sub_assign => sub_assign_impl;
    Mul::mul, MulAssign::mul_assign => mul_assign_impl;
}

impl<R: Radix> PartialOrd for Magnitude<R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<R: Radix> Ord for Magnitude<R> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.view().cmp(&other.view())
    }
}

impl<R: Radix> From<MagnitudeView<'_, R>> for Magnitude<R> {
    fn from(view: MagnitudeView<'_, R>) -> Self {
        Self::from_canonical(view.digits().to_vec())
    }
}

macro_rules! impl_magnitude_from_native {
    ($($t:ty),* $(,)?) => {
        $(
            impl<R: Radix> From<$t> for Magnitude<R> {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::from_native(value)
                }
            }
        )*
    };
}

impl_magnitude_from_native!(u8, u16, u32, u64, u128, usize, U256);

impl<R: Radix> num_traits::Zero for Magnitude<R> {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        self.digits.is_empty()
    }
}

impl<R: Radix> num_traits::One for Magnitude<R> {
    fn one() -> Self {
        Self::one()
    }
}

impl<R: Radix> fmt::Display for Magnitude<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.view(), f)
    }
}

impl<R: Radix> fmt::Debug for Magnitude<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// Optional: serde. Serialized as the digit sequence, least-significant first.
#[cfg(feature = "serde")]
impl<R: Radix> serde::Serialize for Magnitude<R>
where
    R::Digit: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.digits.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, R: Radix> serde::Deserialize<'de> for Magnitude<R>
where
    R::Digit: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let digits = Vec::<R::Digit>::deserialize(deserializer)?;
        Self::from_digits(digits).map_err(|err| {
            tracing::debug!(%err, "rejected serialized magnitude");
            serde::de::Error::custom(err)
        })
    }
}

// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use crate::{
    error::BignumError,
    integers::{NativeInt, U256},
    macros::impl_binary_ops,
    magnitude::Magnitude,
    radix::Radix,
};
use core::{cmp::Ordering, fmt, ops::Neg};

/// Three-state sign tag. Declaration order gives `Negative < Zero < Positive`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sign {
    Negative,
    #[default]
    Zero,
    Positive,
}

impl Sign {
    pub const fn opposite(self) -> Self {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }

    /// Sign of a product, quotient or remainder of values with these signs.
    pub const fn product(self, other: Self) -> Self {
        match (self, other) {
            (Sign::Zero, _) | (_, Sign::Zero) => Sign::Zero,
            (Sign::Positive, Sign::Positive) | (Sign::Negative, Sign::Negative) => Sign::Positive,
            (Sign::Positive, Sign::Negative) | (Sign::Negative, Sign::Positive) => Sign::Negative,
        }
    }
}

impl Neg for Sign {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.opposite()
    }
}

/// Signed arbitrary-precision integer: a [`Sign`] paired with a [`Magnitude`].
///
/// The sign is [`Sign::Zero`] exactly when the magnitude is zero.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct Bignum<R: Radix> {
    sign: Sign,
    magnitude: Magnitude<R>,
}

impl<R: Radix> Bignum<R> {
    pub const fn zero() -> Self {
        Self { sign: Sign::Zero, magnitude: Magnitude::zero() }
    }

    pub fn one() -> Self {
        Self { sign: Sign::Positive, magnitude: Magnitude::one() }
    }

    /// Sign by comparison with zero, magnitude from the absolute value.
    pub fn from_native<T: NativeInt>(value: T) -> Self {
        Self::with_sign(value.sign(), Magnitude::from_native(value))
    }

    /// Non-negative value with the given magnitude.
    pub fn from_magnitude(magnitude: Magnitude<R>) -> Self {
        Self::with_sign(Sign::Positive, magnitude)
    }

    /// Pairs a sign with a magnitude. Fails with [`BignumError::InconsistentSign`]
    /// unless the sign is `Zero` exactly when the magnitude is zero.
    pub fn from_parts(sign: Sign, magnitude: Magnitude<R>) -> Result<Self, BignumError> {
        if (sign == Sign::Zero) != magnitude.is_zero() {
            return Err(BignumError::InconsistentSign);
        }

        Ok(Self { sign, magnitude })
    }

    /// Any non-zero `sign` is replaced by `Zero` when `magnitude` is zero.
    #[inline]
    fn with_sign(sign: Sign, magnitude: Magnitude<R>) -> Self {
        let sign = if magnitude.is_zero() { Sign::Zero } else { sign };
        debug_assert!(sign != Sign::Zero || magnitude.is_zero(), "zero sign on non-zero magnitude");
        Self { sign, magnitude }
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub fn magnitude(&self) -> &Magnitude<R> {
        &self.magnitude
    }

    pub fn into_parts(self) -> (Sign, Magnitude<R>) {
        (self.sign, self.magnitude)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Positive
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    pub fn abs(&self) -> Self {
        Self::with_sign(Sign::Positive, self.magnitude.clone())
    }

    pub fn unsigned_abs(&self) -> Magnitude<R> {
        self.magnitude.clone()
    }

    /// Extracts into `T`, negating when negative. Wraps on overflow, like
    /// [`Magnitude::get`].
    pub fn get<T: NativeInt>(&self) -> T {
        let out = self.magnitude.get::<T>();
        match self.sign {
            Sign::Negative => out.neg_wrapping(),
            Sign::Zero | Sign::Positive => out,
        }
    }

    // --- addition & subtraction ---

    /// `self += rhs_sign * rhs_magnitude`.
    ///
    /// Subtraction calls this with the subtrahend's sign flipped, so both
    /// share one set of sign rules and neither clones its right operand.
    fn accumulate(&mut self, rhs_sign: Sign, rhs_magnitude: &Magnitude<R>) {
        if rhs_sign == Sign::Zero {
            return;
        }
        if self.sign == Sign::Zero {
            *self = Self { sign: rhs_sign, magnitude: rhs_magnitude.clone() };
            return;
        }
        if self.sign == rhs_sign {
            self.magnitude.add_assign_view(rhs_magnitude.view());
            return;
        }

        match self.magnitude.cmp(rhs_magnitude) {
            Ordering::Less => {
                let mut larger = rhs_magnitude.clone();
                larger.sub_assign_smaller(self.magnitude.view());
                *self = Self { sign: rhs_sign, magnitude: larger };
            }
            Ordering::Greater => {
                self.magnitude.sub_assign_smaller(rhs_magnitude.view());
            }
            Ordering::Equal => {
                *self = Self::zero();
            }
        }
    }

    #[inline]
    fn add_assign_impl(&mut self, rhs: &Self) {
        self.accumulate(rhs.sign, &rhs.magnitude);
    }

    #[inline]
    fn sub_assign_impl(&mut self, rhs: &Self) {
        self.accumulate(rhs.sign.opposite(), &rhs.magnitude);
    }

    // --- multiplication ---

    fn mul_assign_impl(&mut self, rhs: &Self) {
        if self.is_zero() {
            return;
        }
        if rhs.is_zero() {
            *self = Self::zero();
            return;
        }
        self.magnitude.mul_assign_view(rhs.magnitude.view());
        self.sign = self.sign.product(rhs.sign);
    }

    // --- division & remainder ---

    /// Truncating division: the quotient's magnitude is `|self| / |rhs|` and
    /// its sign is the product of the operands' signs.
    pub fn try_div_assign(&mut self, rhs: &Self) -> Result<(), BignumError> {
        if rhs.is_zero() {
            return Err(BignumError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok(());
        }
        self.magnitude.try_div_assign(rhs.magnitude.view())?;
        *self = Self::with_sign(self.sign.product(rhs.sign), core::mem::take(&mut self.magnitude));

        Ok(())
    }

    /// Remainder of [`Bignum::try_div_assign`]: `|self| mod |rhs|`, signed like
    /// the quotient. The dividend's sign flips when `rhs` is negative.
    ///
    /// `|a / b| * |b| + |a % b| == |a|` holds for every sign combination; the
    /// signed identity `(a / b) * b + a % b == a` only when `b` is positive.
    pub fn try_rem_assign(&mut self, rhs: &Self) -> Result<(), BignumError> {
        if rhs.is_zero() {
            return Err(BignumError::DivisionByZero);
        }
        if self.is_zero() {
            return Ok(());
        }
        self.magnitude.try_rem_assign(rhs.magnitude.view())?;
        *self = Self::with_sign(self.sign.product(rhs.sign), core::mem::take(&mut self.magnitude));

        Ok(())
    }

    pub fn div_rem(&self, rhs: &Self) -> Result<(Self, Self), BignumError> {
        if rhs.is_zero() {
            return Err(BignumError::DivisionByZero);
        }
        let (quotient, remainder) = self.magnitude.div_rem(&rhs.magnitude)?;
        let sign = self.sign.product(rhs.sign);

        Ok((Self::with_sign(sign, quotient), Self::with_sign(sign, remainder)))
    }

    pub fn checked_div(&self, rhs: &Self) -> Result<Self, BignumError> {
        let mut out = self.clone();
        out.try_div_assign(rhs)?;

        Ok(out)
    }

    pub fn checked_rem(&self, rhs: &Self) -> Result<Self, BignumError> {
        let mut out = self.clone();
        out.try_rem_assign(rhs)?;

        Ok(out)
    }

    #[track_caller]
    #[inline]
    fn div_assign_impl(&mut self, rhs: &Self) {
        if let Err(err) = self.try_div_assign(rhs) {
            panic!("{err}");
        }
    }

    #[track_caller]
    #[inline]
    fn rem_assign_impl(&mut self, rhs: &Self) {
        if let Err(err) = self.try_rem_assign(rhs) {
            panic!("{err}");
        }
    }
}

impl_binary_ops! {
    Bignum,
    Add::add, AddAssign::add_assign => add_assign_impl;
    Sub::sub, SubAssign::sub_assign => sub_assign_impl;
    Mul::mul, MulAssign::mul_assign => mul_assign_impl;
    Div::div, DivAssign::div_assign => div_assign_impl;
    Rem::rem, RemAssign::rem_assign => rem_assign_impl;
}

impl<R: Radix> Neg for Bignum<R> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self { sign: self.sign.opposite(), magnitude: self.magnitude }
    }
}

impl<R: Radix> Neg for &Bignum<R> {
    type Output = Bignum<R>;

    #[inline]
    fn neg(self) -> Bignum<R> {
        Bignum { sign: self.sign.opposite(), magnitude: self.magnitude.clone() }
    }
}

impl<R: Radix> PartialOrd for Bignum<R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<R: Radix> Ord for Bignum<R> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (lhs, rhs) if lhs != rhs => lhs.cmp(&rhs),
            (Sign::Zero, _) => Ordering::Equal,
            (Sign::Positive, _) => self.magnitude.cmp(&other.magnitude),
            // larger magnitude is the smaller value
            (Sign::Negative, _) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl<R: Radix> From<Magnitude<R>> for Bignum<R> {
    fn from(magnitude: Magnitude<R>) -> Self {
        Self::from_magnitude(magnitude)
    }
}

macro_rules! impl_bignum_from_native {
    ($($t:ty),* $(,)?) => {
        $(
            impl<R: Radix> From<$t> for Bignum<R> {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::from_native(value)
                }
            }
        )*
    };
}

impl_bignum_from_native!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, U256);

impl<R: Radix> num_traits::Zero for Bignum<R> {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }
}

impl<R: Radix> num_traits::One for Bignum<R> {
    fn one() -> Self {
        Self::one()
    }
}

impl<R: Radix> fmt::Display for Bignum<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        fmt::Display::fmt(&self.magnitude, f)
    }
}

impl<R: Radix> fmt::Debug for Bignum<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

// Optional: serde. Serialized as `{ sign, magnitude }`; the zero/sign pairing
// is checked on the way back in.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename = "Bignum")]
struct BignumRepr<M> {
    sign: Sign,
    magnitude: M,
}

#[cfg(feature = "serde")]
impl<R: Radix> serde::Serialize for Bignum<R>
where
    R::Digit: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        BignumRepr { sign: self.sign, magnitude: &self.magnitude }.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, R: Radix> serde::Deserialize<'de> for Bignum<R>
where
    R::Digit: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let BignumRepr { sign, magnitude } = BignumRepr::<Magnitude<R>>::deserialize(deserializer)?;
        Self::from_parts(sign, magnitude).map_err(|err| {
            tracing::debug!(%err, ?sign, "rejected serialized bignum");
            serde::de::Error::custom(err)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::radix::{Billion, Decimal};
    use pretty_assertions::assert_eq;

    type Int = Bignum<Decimal>;

    fn int(value: i64) -> Int {
        Int::from(value)
    }

    #[test]
    fn sign_table() {
        assert_eq!(Sign::Negative.opposite(), Sign::Positive);
        assert_eq!(Sign::Zero.opposite(), Sign::Zero);
        assert_eq!(-Sign::Positive, Sign::Negative);
        assert_eq!(Sign::Negative.product(Sign::Negative), Sign::Positive);
        assert_eq!(Sign::Negative.product(Sign::Zero), Sign::Zero);
        assert!(Sign::Negative < Sign::Zero && Sign::Zero < Sign::Positive);
    }

    #[test]
    fn construction_from_natives() {
        assert_eq!(int(-42).sign(), Sign::Negative);
        assert_eq!(int(0).sign(), Sign::Zero);
        assert_eq!(Int::from(7u8).sign(), Sign::Positive);
        assert_eq!(int(-42).magnitude(), &Magnitude::from(42u32));
        assert!(int(0).magnitude().is_zero());
        assert_eq!(Int::from(i128::MIN).get::<i128>(), i128::MIN);
        assert_eq!(Int::from(i64::MIN).get::<i64>(), i64::MIN);
    }

    #[test]
    fn scenario_7_minus_15() {
        let diff = int(7) - int(15);
        assert_eq!(diff.get::<i64>(), -8);
        assert_eq!(diff.to_string(), "-8");
    }

    #[test]
    fn scenario_123_and_45() {
        let x = int(123);
        let y = int(45);
        assert_eq!((&x + &y).get::<i64>(), 168);
        assert_eq!((&x - &y).get::<i64>(), 78);
        assert_eq!((&x * &y).get::<i64>(), 5535);
        assert_eq!((&x / &y).get::<i64>(), 2);
        assert_eq!((&x % &y).get::<i64>(), 33);
    }

    #[test]
    fn agrees_with_native_arithmetic() {
        for a in -40i64..=40 {
            for b in -40i64..=40 {
                let (x, y) = (int(a), int(b));
                assert_eq!((&x + &y).get::<i64>(), a + b, "{a} + {b}");
                assert_eq!((&x - &y).get::<i64>(), a - b, "{a} - {b}");
                assert_eq!((&x * &y).get::<i64>(), a * b, "{a} * {b}");
                assert_eq!(x.cmp(&y), a.cmp(&b), "{a} <=> {b}");
                if b != 0 {
                    assert_eq!((&x / &y).get::<i64>(), a / b, "{a} / {b}");
                    // |a| mod |b|, signed like the quotient
                    let r = (a % b).abs() * (a.signum() * b.signum());
                    assert_eq!((&x % &y).get::<i64>(), r, "{a} % {b}");
                }
            }
        }
    }

    #[test]
    fn zero_sign_iff_zero_magnitude() {
        let cases = [
            int(5) - int(5),
            int(-5) + int(5),
            int(3) / int(5),
            int(-3) / int(5),
            int(10) % int(-5),
            int(0) * int(-9),
            int(-9) * int(0),
        ];
        for value in cases {
            assert!(value.is_zero(), "{value}");
            assert!(value.magnitude().is_zero());
            assert_eq!(value, Int::zero());
        }
    }

    #[test]
    fn additive_inverse() {
        for a in [-1_000_000_007i64, -1, 0, 1, 99, 123_456_789_012] {
            let x = int(a);
            assert_eq!(&x + &(-&x), Int::zero());
            assert_eq!(&x + &Int::zero(), x);
            assert_eq!(Int::zero() - &x, -x);
        }
    }

    #[test]
    fn abs_and_parts() {
        let x = Bignum::<Billion>::from(-5_000_000_007i64);
        assert_eq!(x.abs(), Bignum::from(5_000_000_007u64));
        assert_eq!(x.unsigned_abs(), Magnitude::from(5_000_000_007u64));
        let (sign, magnitude) = x.into_parts();
        assert_eq!(sign, Sign::Negative);
        assert_eq!(Bignum::from_parts(sign, magnitude.clone()).map(|v| v.get::<i64>()), Ok(-5_000_000_007));
        assert_eq!(Bignum::<Billion>::from_parts(Sign::Zero, magnitude), Err(BignumError::InconsistentSign));
        assert_eq!(
            Bignum::<Billion>::from_parts(Sign::Positive, Magnitude::zero()),
            Err(BignumError::InconsistentSign)
        );
        assert_eq!(Bignum::from(Magnitude::<Billion>::zero()).sign(), Sign::Zero);
    }

    #[test]
    fn ordering_reverses_for_negatives() {
        assert!(int(-100) < int(-99));
        assert!(int(-1) < int(0));
        assert!(int(0) < int(1));
        assert!(int(99) < int(100));
        assert_eq!(int(0).cmp(&Int::zero()), Ordering::Equal);
    }

    #[test]
    fn division_by_zero_is_reported() {
        for a in [-3i64, 0, 3] {
            assert_eq!(int(a).checked_div(&Int::zero()), Err(BignumError::DivisionByZero));
            assert_eq!(int(a).checked_rem(&Int::zero()), Err(BignumError::DivisionByZero));
            assert_eq!(int(a).div_rem(&Int::zero()), Err(BignumError::DivisionByZero));
        }
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn division_operator_panics_on_zero() {
        let _ = int(0) / int(0);
    }

    #[test]
    fn remainder_is_signed_like_the_quotient() {
        let cases = [(17, 5, 3, 2), (-17, 5, -3, -2), (17, -5, -3, -2), (-17, -5, 3, 2), (15, -5, -3, 0)];
        for (a, b, q, r) in cases {
            assert_eq!(int(a).div_rem(&int(b)), Ok((int(q), int(r))), "{a} divrem {b}");
            assert_eq!((int(a) / int(b), int(a) % int(b)), (int(q), int(r)), "{a} / {b}, {a} % {b}");

            let mut rem = int(a);
            rem %= int(b);
            assert_eq!(rem, int(r));
        }
    }

    #[test]
    fn magnitudes_satisfy_division_identity() {
        for a in -60i64..=60 {
            for b in (-12i64..=12).filter(|&b| b != 0) {
                let (x, y) = (int(a), int(b));
                let (q, r) = x.div_rem(&y).unwrap();
                assert!(r.magnitude() < y.magnitude());
                assert_eq!(q.magnitude() * y.magnitude() + r.magnitude(), *x.magnitude(), "{a} / {b}");
                if b > 0 {
                    assert_eq!(&q * &y + &r, x, "{a} / {b}");
                }
            }
        }
    }

    #[test]
    fn renders_sign_and_digits() {
        assert_eq!(int(-120).to_string(), "-1_2_0");
        assert_eq!(int(0).to_string(), "0");
        assert_eq!(format!("{:?}", int(45)), "4_5");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_checks_the_sign() {
        let json = serde_json::to_string(&int(-21)).unwrap();
        assert_eq!(json, r#"{"sign":"Negative","magnitude":[1,2]}"#);
        assert_eq!(serde_json::from_str::<Int>(&json).unwrap(), int(-21));
        assert!(serde_json::from_str::<Int>(r#"{"sign":"Zero","magnitude":[1]}"#).is_err());
    }
}

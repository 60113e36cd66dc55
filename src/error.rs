// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BignumError {
    /// Unsigned subtraction whose result would be negative.
    #[error("invalid subtraction: subtrahend exceeds minuend")]
    InvalidSubtraction,

    #[error("division by zero")]
    DivisionByZero,

    #[error("digit {digit} is out of range for base {base}")]
    DigitOutOfRange { digit: u128, base: u128 },

    #[error("sign does not agree with magnitude")]
    InconsistentSign,

    /// Raised by native-width implementations of [`crate::Arithmetic`].
    #[error("arithmetic overflow")]
    Overflow,
}

// Copyright (c) 2025, Arcane Labs
// SPDX-License-Identifier: Apache-2.0

pub mod error;
pub mod macros;
pub mod radix;
pub mod integers;
pub mod view;
pub mod magnitude;
mod division;
pub mod signed;
pub mod arith;
mod utils;

pub use arith::{gcd, Arithmetic};
pub use error::BignumError;
pub use integers::{NativeInt, U256};
pub use magnitude::Magnitude;
pub use radix::{Billion, Decimal, Digit, Radix, Word};
pub use signed::{Bignum, Sign};
pub use view::MagnitudeView;

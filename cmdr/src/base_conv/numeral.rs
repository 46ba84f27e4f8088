/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! Parse a numeral token into an arbitrary precision value. The accepted shapes
//! are:
//!
//! | Shape                 | Example                | Radix                 |
//! | --------------------- | ---------------------- | --------------------- |
//! | `DIGITS`              | `255`                  | decimal               |
//! | `DIGITS MARKER`       | `12h`, `17o`, `101b`   | declared by marker    |
//! | `["0"] MARKER DIGITS` | `0x12`, `x12`, `0b101` | declared by marker    |
//!
//! Digits are always ASCII `0-9`, even for hexadecimal numerals. Markers are
//! lowercase `d`, `h`, `x`, `o` and `b`.

use std::fmt::{Display, Formatter, Result};

use num_bigint::BigUint;
use strum_macros::EnumIter;

use super::NumeralError;

/// Variants are declared in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Radix {
    Hexadecimal,
    Decimal,
    Octal,
    Binary,
}

impl Radix {
    #[must_use]
    pub const fn value(self) -> u32 {
        match self {
            Radix::Hexadecimal => 16,
            Radix::Decimal => 10,
            Radix::Octal => 8,
            Radix::Binary => 2,
        }
    }

    #[must_use]
    pub const fn from_marker(marker: char) -> Option<Radix> {
        match marker {
            'h' | 'x' => Some(Radix::Hexadecimal),
            'd' => Some(Radix::Decimal),
            'o' => Some(Radix::Octal),
            'b' => Some(Radix::Binary),
            _ => None,
        }
    }

    /// Formatted values are zero padded up to this many digits.
    #[must_use]
    pub const fn min_width(self) -> usize {
        match self {
            Radix::Hexadecimal => 2,
            Radix::Binary => 4,
            Radix::Decimal | Radix::Octal => 1,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Radix::Hexadecimal => "Hexadecimal",
            Radix::Decimal => "Decimal",
            Radix::Octal => "Octal",
            Radix::Binary => "Binary",
        }
    }
}

impl Display for Radix {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.label().to_lowercase())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numeral {
    pub radix: Radix,
    /// The digit run w/out any marker or redundant leading zero.
    pub digits: String,
    pub value: BigUint,
}

/// # Errors
///
/// - [`NumeralError::Unrecognized`] when the token doesn't have one of the
///   accepted shapes.
/// - [`NumeralError::DigitOutOfRange`] when the shape is fine, but a digit is
///   too large for the declared radix, eg: `12b`.
pub fn parse_numeral(token: &str) -> std::result::Result<Numeral, NumeralError> {
    let Some((radix, digits)) = classify(token) else {
        tracing::debug!(message = "Unrecognized numeral", token = ?token);
        return Err(NumeralError::Unrecognized {
            token: token.to_string(),
        });
    };

    if let Some(digit) = digits.chars().find(|it| it.to_digit(radix.value()).is_none()) {
        tracing::debug!(message = "Digit out of range", token = ?token, radix = %radix);
        return Err(NumeralError::DigitOutOfRange {
            token: token.to_string(),
            digit,
            radix,
        });
    }

    let value = BigUint::parse_bytes(digits.as_bytes(), radix.value()).ok_or_else(|| {
        NumeralError::Unrecognized {
            token: token.to_string(),
        }
    })?;

    tracing::debug!(message = "Parsed numeral", token = ?token, radix = %radix, value = %value);

    Ok(Numeral {
        radix,
        digits: digits.to_string(),
        value,
    })
}

/// Match the token against each shape in turn. A token matches at most one
/// shape: a digit run can't end in a marker, and a suffix marker can't be
/// followed by digits.
fn classify(token: &str) -> Option<(Radix, &str)> {
    if is_digit_run(token) {
        return Some((Radix::Decimal, token));
    }

    if let Some(marker) = token.chars().next_back()
        && let Some(radix) = Radix::from_marker(marker)
        && let Some(digits) = token.strip_suffix(marker)
        && is_digit_run(digits)
    {
        return Some((radix, digits));
    }

    let rest = token.strip_prefix('0').unwrap_or(token);
    let mut chars = rest.chars();
    let radix = Radix::from_marker(chars.next()?)?;
    let digits = chars.as_str();
    is_digit_run(digits).then_some((radix, digits))
}

fn is_digit_run(it: &str) -> bool { !it.is_empty() && it.bytes().all(|b| b.is_ascii_digit()) }

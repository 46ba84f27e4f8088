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

use super::Radix;

/// For more information on error types, see:
///
/// 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
/// 2. [Video](https://youtu.be/TmLF7vI8lKk)
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, miette::Diagnostic)]
pub enum NumeralError {
    #[error("'{token}' is not a recognized numeral")]
    #[diagnostic(
        code(base_conv::unrecognized_numeral),
        help(
            "Use decimal digits w/ at most one base marker, eg: 255, 255d, 0x12, 12h, 17o, 0b101, 101b"
        )
    )]
    Unrecognized { token: String },

    #[error("'{digit}' in '{token}' is not a valid {radix} digit")]
    #[diagnostic(
        code(base_conv::digit_out_of_range),
        help("The digits must be less than the base that the marker declares")
    )]
    DigitOutOfRange {
        token: String,
        digit: char,
        radix: Radix,
    },
}

impl NumeralError {
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            NumeralError::Unrecognized { token }
            | NumeralError::DigitOutOfRange { token, .. } => token,
        }
    }
}

#[derive(thiserror::Error, Debug, miette::Diagnostic)]
pub enum BatchError {
    #[error("Skipped {} of {total} token(s) that could not be converted", .skipped.len())]
    #[diagnostic(
        code(base_conv::skipped_tokens),
        help("Run without `--strict` to only print a warning for each skipped token")
    )]
    SkippedTokens {
        total: usize,
        #[related]
        skipped: Vec<NumeralError>,
    },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn messages() {
        let unrecognized = NumeralError::Unrecognized {
            token: "1a".into(),
        };
        assert_eq!(unrecognized.to_string(), "'1a' is not a recognized numeral");
        assert_eq!(unrecognized.token(), "1a");

        let out_of_range = NumeralError::DigitOutOfRange {
            token: "12b".into(),
            digit: '2',
            radix: Radix::Binary,
        };
        assert_eq!(
            out_of_range.to_string(),
            "'2' in '12b' is not a valid binary digit"
        );
        assert_eq!(out_of_range.token(), "12b");
    }

    #[test]
    fn batch_error_counts_skipped() {
        let error = BatchError::SkippedTokens {
            total: 3,
            skipped: vec![NumeralError::Unrecognized { token: "x".into() }],
        };
        assert_eq!(
            error.to_string(),
            "Skipped 1 of 3 token(s) that could not be converted"
        );
    }
}

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


use charcodes_ansi_color::ColorSupport;

use super::{BatchError, NumeralError, format_value, parse_numeral, render_block};

/// Outcome of converting every token given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub total: usize,
    /// One rendered block per converted token, in input order.
    pub blocks: Vec<String>,
    /// Tokens that could not be converted, in input order.
    pub skipped: Vec<NumeralError>,
}

impl BatchReport {
    #[must_use]
    pub fn output(&self) -> String { self.blocks.join("\n") }

    /// # Errors
    ///
    /// [`BatchError::SkippedTokens`] if any token was skipped.
    pub fn check_none_skipped(&self) -> Result<(), BatchError> {
        if self.skipped.is_empty() {
            return Ok(());
        }
        Err(BatchError::SkippedTokens {
            total: self.total,
            skipped: self.skipped.clone(),
        })
    }
}

/// Each token is converted on its own, so a bad token never affects the others.
#[must_use]
pub fn convert_batch(
    tokens: &[impl AsRef<str>],
    color_support: ColorSupport,
) -> BatchReport {
    let mut blocks = Vec::with_capacity(tokens.len());
    let mut skipped = vec![];

    for token in tokens {
        let token = token.as_ref();
        match parse_numeral(token) {
            Ok(numeral) => {
                let format = format_value(&numeral.value);
                blocks.push(render_block(token, &format, color_support));
            }
            Err(error) => {
                tracing::warn!(message = "Skipped token", token = ?token, error = %error);
                skipped.push(error);
            }
        }
    }

    BatchReport {
        total: tokens.len(),
        blocks,
        skipped,
    }
}

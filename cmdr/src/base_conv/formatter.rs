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


use std::fmt::Write;

use charcodes_ansi_color::ColorSupport;
use num_bigint::BigUint;
use strum::IntoEnumIterator;

use super::{Radix, ui_str};
use crate::heading;

/// Value lines of a block are indented by this.
pub const VALUE_INDENT: &str = "    ";

/// One value rendered in every [Radix].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiBaseFormat {
    pub hexadecimal: String,
    pub decimal: String,
    pub octal: String,
    pub binary: String,
}

impl MultiBaseFormat {
    #[must_use]
    pub fn get(&self, radix: Radix) -> &str {
        match radix {
            Radix::Hexadecimal => &self.hexadecimal,
            Radix::Decimal => &self.decimal,
            Radix::Octal => &self.octal,
            Radix::Binary => &self.binary,
        }
    }
}

/// Hexadecimal digits are lowercase. Each field is zero padded on the left up to
/// [`Radix::min_width`] and never truncated.
#[must_use]
pub fn format_value(value: &BigUint) -> MultiBaseFormat {
    let render = |radix: Radix| {
        let digits = value.to_str_radix(radix.value());
        format!("{digits:0>width$}", width = radix.min_width())
    };
    MultiBaseFormat {
        hexadecimal: render(Radix::Hexadecimal),
        decimal: render(Radix::Decimal),
        octal: render(Radix::Octal),
        binary: render(Radix::Binary),
    }
}

/// ```text
/// Input: 12h
///     Hexadecimal: 12
///     Decimal: 18
///     Octal: 22
///     Binary: 10010
/// ```
///
/// There is no trailing newline.
#[must_use]
pub fn render_block(
    token: &str,
    format: &MultiBaseFormat,
    color_support: ColorSupport,
) -> String {
    let mut acc = heading(ui_str::input_heading_text(token), color_support);
    for radix in Radix::iter() {
        _ = write!(
            acc,
            "\n{VALUE_INDENT}{}: {}",
            ui_str::radix_label_style(radix).render(color_support),
            format.get(radix)
        );
    }
    tracing::debug!(message = "Rendered block", token = ?token, format = ?format);
    acc
}

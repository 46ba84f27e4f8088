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

use charcodes_ansi_color::{AnsiStyledText, ColorSupport, fg_blue, fg_bright_yellow,
                           fg_magenta, fg_red};

use super::{NumeralError, Radix};
use crate::{de_emphasis, emphasis, warning};

#[must_use]
pub fn radix_label_style(radix: Radix) -> AnsiStyledText<'static> {
    let label = radix.label();
    let it = match radix {
        Radix::Hexadecimal => fg_magenta(label),
        Radix::Decimal => fg_blue(label),
        Radix::Octal => fg_bright_yellow(label),
        Radix::Binary => fg_red(label),
    };
    it.bold()
}

#[must_use]
pub fn input_heading_text(token: &str) -> String { format!("Input: {token}") }

/// Printed to stderr for every token that is not converted.
#[must_use]
pub fn skipped_token_msg(error: &NumeralError, color_support: ColorSupport) -> String {
    format!(
        "{} {}: {}",
        warning("Skipped", color_support),
        emphasis(error.token(), color_support),
        de_emphasis(error, color_support)
    )
}

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

use charcodes_ansi_color::{AnsiStyledText, bold, fg_blue, fg_bright_yellow, fg_magenta,
                           fg_red, plain};

use super::CodeCategory;

pub const CONTROL_CODES_HEADING: &str = "Control Codes";
pub const PRINTABLE_CHARACTERS_HEADING: &str = "Printable Characters";

/// The character itself, styled by category. Control codes never reach this since they
/// are not printable, they are displayed by their short name instead.
#[must_use]
pub fn category_style(category: CodeCategory, text: &str) -> AnsiStyledText<'_> {
    match category {
        CodeCategory::Control | CodeCategory::Symbol => plain(text),
        CodeCategory::Number => fg_red(text).bold(),
        CodeCategory::Letter => fg_bright_yellow(text).bold(),
    }
}

/// The `h` after the hexadecimal value.
#[must_use]
pub fn hex_marker() -> AnsiStyledText<'static> { fg_magenta("h") }

/// The `d` after the decimal value.
#[must_use]
pub fn dec_marker() -> AnsiStyledText<'static> { fg_blue("d") }

#[must_use]
pub fn short_name_style(short_name: &str, highlighted: bool) -> AnsiStyledText<'_> {
    let it = bold(short_name);
    if highlighted { it.invert() } else { it }
}

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

use super::{CodeCategory, ControlCode, LayoutConfig,
            ui_str::{category_style, dec_marker, hex_marker, short_name_style}};

/// The description column is padded to this width, then followed by a tab.
pub const DESCRIPTION_WIDTH: usize = 20;
pub const SHORT_NAME_WIDTH: usize = 3;

/// The rendered text for one character code, plus what it was rendered from. The text
/// already contains whatever escape sequences the [`LayoutConfig::color_support`]
/// allows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedCell {
    pub code: u8,
    pub category: CodeCategory,
    /// Decided from the cell's own short name, see [`ControlCode::is_highlighted`].
    pub highlighted: bool,
    pub text: String,
}

/// `<HH>h <sep> <DDD>d <sep> <short name> <sep> <description>\t`
#[must_use]
pub fn format_control_cell(control_code: &ControlCode, config: &LayoutConfig) -> FormattedCell {
    let color_support = config.color_support;
    let highlighted = control_code.is_highlighted();

    let short_name = {
        let styled = short_name_style(control_code.short_name, highlighted)
            .to_small_str(color_support);
        let padding = SHORT_NAME_WIDTH.saturating_sub(control_code.short_name.len());
        format!("{styled}{}", " ".repeat(padding))
    };
    let description = format!("{:<DESCRIPTION_WIDTH$}\t", control_code.description);

    let parts = value_parts(control_code.code, config)
        .into_iter()
        .chain([short_name, description]);

    FormattedCell {
        code: control_code.code,
        category: CodeCategory::Control,
        highlighted,
        text: join_parts(parts, &config.part_separator),
    }
}

/// `<HH>h <sep> <DDD>d <sep> <character>`
#[must_use]
pub fn format_printable_cell(
    code: u8,
    category: CodeCategory,
    config: &LayoutConfig,
) -> FormattedCell {
    let character = char::from(code).to_string();
    let character = category_style(category, &character)
        .to_small_str(config.color_support)
        .to_string();

    let parts = value_parts(code, config).into_iter().chain([character]);

    FormattedCell {
        code,
        category,
        highlighted: false,
        text: join_parts(parts, &config.part_separator),
    }
}

/// The hex field, and unless [`LayoutConfig::hex_only`] the decimal field.
fn value_parts(code: u8, config: &LayoutConfig) -> Vec<String> {
    let color_support = config.color_support;
    let hex = format!("{code:02X}{}", hex_marker().to_small_str(color_support));
    if config.hex_only {
        return vec![hex];
    }
    let dec = format!("{code:03}{}", dec_marker().to_small_str(color_support));
    vec![hex, dec]
}

fn join_parts(parts: impl Iterator<Item = String>, separator: &str) -> String {
    parts.collect::<Vec<_>>().join(separator)
}

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

use std::ops::Range;

use strum_macros::EnumIter;

/// The display category of a character code. This decides how the character (or the
/// control code's short name) is styled; see [`crate::ascii_table::category_style`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum CodeCategory {
    Control,
    Symbol,
    Number,
    Letter,
}

/// A contiguous, half open `[start, end)` block of character codes that share one
/// [`CodeCategory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeRange {
    pub start: u8,
    pub end: u8,
    pub category: CodeCategory,
}

pub const FIRST_PRINTABLE: u8 = 0x20;
/// Exclusive, `0x7F` (DEL) is not printable.
pub const END_PRINTABLE: u8 = 0x7F;

/// Ordered, non overlapping, and exactly covers `0x20..0x7F`.
pub const PRINTABLE_RANGES: [CodeRange; 7] = [
    CodeRange::new(0x20, 0x30, CodeCategory::Symbol),
    CodeRange::new(0x30, 0x3A, CodeCategory::Number),
    CodeRange::new(0x3A, 0x41, CodeCategory::Symbol),
    CodeRange::new(0x41, 0x5B, CodeCategory::Letter),
    CodeRange::new(0x5B, 0x61, CodeCategory::Symbol),
    CodeRange::new(0x61, 0x7B, CodeCategory::Letter),
    CodeRange::new(0x7B, 0x7F, CodeCategory::Symbol),
];

impl CodeRange {
    #[must_use]
    pub const fn new(start: u8, end: u8, category: CodeCategory) -> Self {
        Self {
            start,
            end,
            category,
        }
    }

    #[must_use]
    pub fn contains(&self, code: u8) -> bool { self.codes().contains(&code) }

    #[must_use]
    pub fn codes(&self) -> Range<u8> { self.start..self.end }
}

/// Codes below `0x20` are [`CodeCategory::Control`]. Printable codes get the category of
/// the first range in [`PRINTABLE_RANGES`] that contains them. `0x7F` and above have no
/// category.
#[must_use]
pub fn category_of(code: u8) -> Option<CodeCategory> {
    if code < FIRST_PRINTABLE {
        return Some(CodeCategory::Control);
    }
    PRINTABLE_RANGES
        .iter()
        .find(|range| range.contains(code))
        .map(|range| range.category)
}

/// Every printable code paired w/ its category, in code order.
pub fn printable_codes() -> impl Iterator<Item = (u8, CodeCategory)> {
    PRINTABLE_RANGES
        .iter()
        .flat_map(|range| range.codes().map(move |code| (code, range.category)))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test]
    fn ranges_are_contiguous_and_cover_printables() {
        assert_eq!(PRINTABLE_RANGES[0].start, FIRST_PRINTABLE);
        assert_eq!(PRINTABLE_RANGES[PRINTABLE_RANGES.len() - 1].end, END_PRINTABLE);
        for pair in PRINTABLE_RANGES.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
            assert!(pair[0].start < pair[0].end);
        }
    }

    #[test]
    fn every_code_maps_to_exactly_one_range() {
        for code in FIRST_PRINTABLE..END_PRINTABLE {
            let matches = PRINTABLE_RANGES
                .iter()
                .filter(|range| range.contains(code))
                .count();
            assert_eq!(matches, 1, "code {code:#04x}");
        }
    }

    #[test]
    fn printable_codes_are_in_order() {
        let codes: Vec<u8> = printable_codes().map(|(code, _)| code).collect();
        let expected: Vec<u8> = (FIRST_PRINTABLE..END_PRINTABLE).collect();
        assert_eq!(codes.len(), 95);
        assert_eq!(codes, expected);
    }

    #[test_case(0x00, Some(CodeCategory::Control))]
    #[test_case(0x1F, Some(CodeCategory::Control))]
    #[test_case(b' ', Some(CodeCategory::Symbol))]
    #[test_case(b'/', Some(CodeCategory::Symbol))]
    #[test_case(b'0', Some(CodeCategory::Number))]
    #[test_case(b'9', Some(CodeCategory::Number))]
    #[test_case(b':', Some(CodeCategory::Symbol))]
    #[test_case(b'@', Some(CodeCategory::Symbol))]
    #[test_case(b'A', Some(CodeCategory::Letter))]
    #[test_case(b'Z', Some(CodeCategory::Letter))]
    #[test_case(b'[', Some(CodeCategory::Symbol))]
    #[test_case(b'`', Some(CodeCategory::Symbol))]
    #[test_case(b'a', Some(CodeCategory::Letter))]
    #[test_case(b'z', Some(CodeCategory::Letter))]
    #[test_case(b'{', Some(CodeCategory::Symbol))]
    #[test_case(b'~', Some(CodeCategory::Symbol))]
    #[test_case(0x7F, None)]
    #[test_case(0xFF, None)]
    fn category_lookup(code: u8, expected: Option<CodeCategory>) {
        assert_eq!(category_of(code), expected);
    }
}

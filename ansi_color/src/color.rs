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

//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#3-bit_and_4-bit>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//! - <https://www.ditig.com/256-colors-cheat-sheet>

use strum_macros::{EnumCount, EnumIter};

/// The 16 color palette that every ANSI capable terminal understands. The discriminant
/// is the palette index, which is also the index of the same color in the 256 color
/// palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCount, EnumIter)]
pub enum BasicColor {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    BrightBlack = 8,
    BrightRed = 9,
    BrightGreen = 10,
    BrightYellow = 11,
    BrightBlue = 12,
    BrightMagenta = 13,
    BrightCyan = 14,
    BrightWhite = 15,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ASTColor {
    Basic(BasicColor),
    Ansi256(u8),
}

mod basic_color_impl {
    use strum::IntoEnumIterator;

    use super::BasicColor;

    impl BasicColor {
        #[must_use]
        pub fn palette_index(self) -> u8 { self as u8 }

        /// SGR foreground code: `30..=37` for the normal colors, `90..=97` for the
        /// bright ones.
        #[must_use]
        pub fn fg_code(self) -> u8 {
            let index = self.palette_index();
            if index < 8 { 30 + index } else { 90 + (index - 8) }
        }

        #[must_use]
        pub fn from_palette_index(index: u8) -> Option<Self> {
            BasicColor::iter().find(|it| it.palette_index() == index)
        }
    }
}

mod ast_color_impl {
    use super::{ASTColor, BasicColor};

    impl From<BasicColor> for ASTColor {
        fn from(color: BasicColor) -> Self { ASTColor::Basic(color) }
    }

    impl ASTColor {
        /// Only the first 16 entries of the 256 color palette have a basic equivalent.
        #[must_use]
        pub fn as_basic(self) -> Option<BasicColor> {
            match self {
                ASTColor::Basic(color) => Some(color),
                ASTColor::Ansi256(index) => BasicColor::from_palette_index(index),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::{EnumCount, IntoEnumIterator};
    use test_case::test_case;

    use super::*;

    #[test_case(BasicColor::Black, 30)]
    #[test_case(BasicColor::Red, 31)]
    #[test_case(BasicColor::Blue, 34)]
    #[test_case(BasicColor::Magenta, 35)]
    #[test_case(BasicColor::White, 37)]
    #[test_case(BasicColor::BrightBlack, 90)]
    #[test_case(BasicColor::BrightYellow, 93)]
    #[test_case(BasicColor::BrightWhite, 97)]
    fn fg_code(color: BasicColor, expected: u8) {
        assert_eq!(color.fg_code(), expected);
    }

    #[test]
    fn palette_indices_round_trip() {
        assert_eq!(BasicColor::iter().count(), BasicColor::COUNT);
        for color in BasicColor::iter() {
            assert_eq!(
                BasicColor::from_palette_index(color.palette_index()),
                Some(color)
            );
        }
        assert_eq!(BasicColor::from_palette_index(16), None);
    }

    #[test]
    fn ansi256_downgrades_only_inside_basic_palette() {
        assert_eq!(ASTColor::Ansi256(9).as_basic(), Some(BasicColor::BrightRed));
        assert_eq!(ASTColor::Ansi256(150).as_basic(), None);
        assert_eq!(
            ASTColor::from(BasicColor::Cyan).as_basic(),
            Some(BasicColor::Cyan)
        );
    }
}

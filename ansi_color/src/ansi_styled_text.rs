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

use std::fmt::{Display, Formatter, Result};

use smallstr::SmallString;
use smallvec::{SmallVec, smallvec};
use strum_macros::EnumCount;

use crate::{ASTColor, BasicColor, ColorSupport, SgrCode};

/// The main struct that we have to consider is `AnsiStyledText`. It has two fields:
/// - `text` - the text to print.
/// - `style` - a list of [`ASTStyle`] to apply to the text. This is owned in a stack
///   allocated buffer (which can spill to the heap if it gets larger than
///   [`sizing::MAX_ANSI_STYLED_TEXT_STYLE_ATTRIB_SIZE`]).
///
/// How the styles are turned into escape sequences depends on the [`ColorSupport`]
/// passed to [`AnsiStyledText::render`]. With [`ColorSupport::NoColor`] only the text
/// is emitted.
///
/// # Example usage:
///
/// ```rust
/// use charcodes_ansi_color::*;
///
/// let heading = bold_underline("Control Codes");
/// assert_eq!(heading.render(ColorSupport::NoColor), "Control Codes");
/// assert_eq!(
///     heading.render(ColorSupport::Basic),
///     "\x1b[1m\x1b[4mControl Codes\x1b[0m"
/// );
///
/// let number = fg(BasicColor::Red, "7").bold();
/// assert_eq!(number.render(ColorSupport::Basic), "\x1b[31m\x1b[1m7\x1b[0m");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnsiStyledText<'a> {
    pub text: &'a str,
    pub style: sizing::InlineVecASTStyles,
}

pub mod sizing {
    use super::{ASTStyle, SmallVec};

    /// Attributes are: `color_fg`, bold, dim, italic, underline, invert, which are in
    /// [`crate::ASTStyle`].
    pub const MAX_ANSI_STYLED_TEXT_STYLE_ATTRIB_SIZE: usize = 6;
    pub type InlineVecASTStyles =
        SmallVec<[ASTStyle; MAX_ANSI_STYLED_TEXT_STYLE_ATTRIB_SIZE]>;

    pub const DEFAULT_STRING_STORAGE_SIZE: usize = 32;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumCount)]
pub enum ASTStyle {
    Foreground(ASTColor),
    Bold,
    Dim,
    Italic,
    Underline,
    Invert,
}

mod ansi_styled_text_impl {
    use super::{ASTStyle, AnsiStyledText, ColorSupport, SgrCode, SmallString, sizing};

    impl AnsiStyledText<'_> {
        /// Render the text w/ the escape sequences that the given color support allows.
        #[must_use]
        pub fn render(&self, color_support: ColorSupport) -> String {
            let mut acc = String::with_capacity(self.text.len());
            self.write_to(&mut acc, color_support);
            acc
        }

        /// This is different than [`Self::render`], because it doesn't allocate a new
        /// [String], but instead allocates an inline buffer on the stack. If this buffer
        /// gets larger than [`sizing::DEFAULT_STRING_STORAGE_SIZE`], it will spill to the
        /// heap.
        #[must_use]
        pub fn to_small_str(
            &self,
            color_support: ColorSupport,
        ) -> SmallString<[u8; sizing::DEFAULT_STRING_STORAGE_SIZE]> {
            let mut acc = SmallString::new();
            self.write_to(&mut acc, color_support);
            acc
        }

        fn write_to(&self, acc: &mut impl std::fmt::Write, color_support: ColorSupport) {
            let codes: Vec<SgrCode> = self
                .style
                .iter()
                .filter_map(|style| style.as_sgr_code(color_support))
                .collect();

            if codes.is_empty() {
                _ = acc.write_str(self.text);
                return;
            }

            for code in &codes {
                _ = write!(acc, "{code}");
            }
            _ = acc.write_str(self.text);
            _ = write!(acc, "{}", SgrCode::Reset);
        }

        pub fn println(&self, color_support: ColorSupport) {
            println!("{}", self.render(color_support));
        }
    }

    impl ASTStyle {
        /// [`ColorSupport::NoColor`] drops every style, including the non color ones,
        /// so that piped output does not contain any escape sequences.
        #[must_use]
        pub fn as_sgr_code(self, color_support: ColorSupport) -> Option<SgrCode> {
            if color_support == ColorSupport::NoColor {
                return None;
            }
            match self {
                ASTStyle::Foreground(color) => fg_sgr_code(color, color_support),
                ASTStyle::Bold => Some(SgrCode::Bold),
                ASTStyle::Dim => Some(SgrCode::Dim),
                ASTStyle::Italic => Some(SgrCode::Italic),
                ASTStyle::Underline => Some(SgrCode::Underline),
                ASTStyle::Invert => Some(SgrCode::Invert),
            }
        }
    }

    fn fg_sgr_code(
        color: crate::ASTColor,
        color_support: ColorSupport,
    ) -> Option<SgrCode> {
        use crate::ASTColor;
        match (color_support, color) {
            (ColorSupport::NoColor, _) => None,
            (_, ASTColor::Basic(basic)) => Some(SgrCode::ForegroundBasic(basic.fg_code())),
            (ColorSupport::Ansi256, ASTColor::Ansi256(index)) => {
                Some(SgrCode::ForegroundAnsi256(index))
            }
            (ColorSupport::Basic, it @ ASTColor::Ansi256(_)) => it
                .as_basic()
                .map(|basic| SgrCode::ForegroundBasic(basic.fg_code())),
        }
    }
}

mod builder_impl {
    use super::{ASTColor, ASTStyle, AnsiStyledText};

    impl AnsiStyledText<'_> {
        #[must_use]
        pub fn bold(mut self) -> Self {
            self.style.push(ASTStyle::Bold);
            self
        }

        #[must_use]
        pub fn underline(mut self) -> Self {
            self.style.push(ASTStyle::Underline);
            self
        }

        #[must_use]
        pub fn invert(mut self) -> Self {
            self.style.push(ASTStyle::Invert);
            self
        }

        #[must_use]
        pub fn fg_color(mut self, color: impl Into<ASTColor>) -> Self {
            self.style.push(ASTStyle::Foreground(color.into()));
            self
        }
    }
}

/// Text w/ no styles. Renders as is, regardless of color support.
#[must_use]
pub fn plain(text: &str) -> AnsiStyledText<'_> {
    AnsiStyledText {
        text,
        style: smallvec!(),
    }
}

#[must_use]
pub fn fg(color: impl Into<ASTColor>, text: &str) -> AnsiStyledText<'_> {
    AnsiStyledText {
        text,
        style: smallvec!(ASTStyle::Foreground(color.into())),
    }
}

#[must_use]
pub fn fg_red(text: &str) -> AnsiStyledText<'_> { fg(BasicColor::Red, text) }

#[must_use]
pub fn fg_blue(text: &str) -> AnsiStyledText<'_> { fg(BasicColor::Blue, text) }

#[must_use]
pub fn fg_magenta(text: &str) -> AnsiStyledText<'_> { fg(BasicColor::Magenta, text) }

#[must_use]
pub fn fg_bright_yellow(text: &str) -> AnsiStyledText<'_> {
    fg(BasicColor::BrightYellow, text)
}

#[must_use]
pub fn bold(text: &str) -> AnsiStyledText<'_> {
    AnsiStyledText {
        text,
        style: smallvec!(ASTStyle::Bold),
    }
}

#[must_use]
pub fn bold_underline(text: &str) -> AnsiStyledText<'_> {
    AnsiStyledText {
        text,
        style: smallvec!(ASTStyle::Bold, ASTStyle::Underline),
    }
}

#[must_use]
pub fn dim(text: &str) -> AnsiStyledText<'_> {
    AnsiStyledText {
        text,
        style: smallvec!(ASTStyle::Dim),
    }
}

mod display_trait_impl {
    use super::{AnsiStyledText, ColorSupport, Display, Formatter, Result};

    /// Renders w/ [`ColorSupport::Ansi256`]. Use [`AnsiStyledText::render`] to pick the
    /// color support explicitly.
    impl Display for AnsiStyledText<'_> {
        fn fmt(&self, f: &mut Formatter<'_>) -> Result {
            f.write_str(&self.render(ColorSupport::Ansi256))
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use strum::EnumCount;

    use super::*;

    #[test]
    fn debug_output_lists_styles_in_order() {
        let eg_1 = fg_red("Hello").bold();
        assert_eq!(
            format!("{eg_1:?}"),
            r#"AnsiStyledText { text: "Hello", style: [Foreground(Basic(Red)), Bold] }"#
        );
    }

    #[test]
    fn no_color_emits_only_text() {
        let it = fg_bright_yellow("A").bold().invert();
        assert_eq!(it.render(ColorSupport::NoColor), "A");
        assert_eq!(it.to_small_str(ColorSupport::NoColor).as_str(), "A");
    }

    #[test]
    fn small_str_matches_render_and_stays_inline() {
        let it = bold("DEL").invert();
        let small = it.to_small_str(ColorSupport::Ansi256);
        assert_eq!(small.as_str(), it.render(ColorSupport::Ansi256));
        assert!(!small.spilled());
    }

    #[test]
    fn inline_style_storage_fits_every_style() {
        assert_eq!(sizing::MAX_ANSI_STYLED_TEXT_STYLE_ATTRIB_SIZE, ASTStyle::COUNT);
    }

    #[test]
    fn plain_text_has_no_reset() {
        assert_eq!(plain("!").render(ColorSupport::Ansi256), "!");
    }

    #[test]
    fn basic_styles() {
        assert_eq!(
            bold("BS").invert().render(ColorSupport::Basic),
            "\x1b[1m\x1b[7mBS\x1b[0m"
        );
        assert_eq!(
            fg_magenta("h").render(ColorSupport::Basic),
            "\x1b[35mh\x1b[0m"
        );
        assert_eq!(fg_blue("d").to_string(), "\x1b[34md\x1b[0m");
    }

    #[test]
    fn ansi256_color_downgrades_under_basic_support() {
        let inside = fg(ASTColor::Ansi256(9), "x");
        assert_eq!(inside.render(ColorSupport::Ansi256), "\x1b[38;5;9mx\x1b[0m");
        assert_eq!(inside.render(ColorSupport::Basic), "\x1b[91mx\x1b[0m");

        let outside = fg(ASTColor::Ansi256(150), "x").bold();
        assert_eq!(outside.render(ColorSupport::Basic), "\x1b[1mx\x1b[0m");
    }

    #[test]
    fn dim_and_underline() {
        assert_eq!(dim("a").render(ColorSupport::Basic), "\x1b[2ma\x1b[0m");
        assert_eq!(
            plain("a").underline().render(ColorSupport::Basic),
            "\x1b[4ma\x1b[0m"
        );
    }
}

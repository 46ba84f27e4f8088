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

use std::fmt::Display;

use charcodes_ansi_color::{BasicColor, ColorSupport, bold_underline, dim, fg};

/// Section heading style, e.g. `Control Codes` or `Input: 12h`.
pub fn heading(arg_text: impl Display, color_support: ColorSupport) -> String {
    let text = arg_text.to_string();
    bold_underline(&text).render(color_support)
}

/// Warning text style.
pub fn warning(arg_text: impl Display, color_support: ColorSupport) -> String {
    let text = arg_text.to_string();
    fg(BasicColor::BrightRed, &text).render(color_support)
}

/// Emphasis text style to highlight.
pub fn emphasis(arg_text: impl Display, color_support: ColorSupport) -> String {
    let text = arg_text.to_string();
    fg(BasicColor::BrightYellow, &text).bold().render(color_support)
}

/// De-emphasize (dim) text.
pub fn de_emphasis(arg_text: impl Display, color_support: ColorSupport) -> String {
    let text = arg_text.to_string();
    dim(&text).render(color_support)
}

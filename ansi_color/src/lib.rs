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

//! # charcodes_ansi_color
//!
//! Styled terminal text for the `ascii-table` and `base-conv` command line tools.
//!
//! 1. [`AnsiStyledText`] pairs a `&str` w/ a small list of [`ASTStyle`]s (bold, invert,
//!    foreground color, etc).
//! 2. [`ColorSupport`] decides which escape sequences actually get emitted. Detect it
//!    once at startup using [`examine_env_vars_to_determine_color_support`] and pass it
//!    down to whatever renders text. There is no global override.
//! 3. [`SgrCode`] is the raw SGR escape sequence.
//!
//! ```rust
//! use charcodes_ansi_color::*;
//!
//! let color_support = examine_env_vars_to_determine_color_support(Stream::Stdout);
//! bold_underline("Printable Characters").println(color_support);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]
#![warn(rust_2018_idioms)]

// Attach sources.
pub mod ansi_escape_codes;
pub mod ansi_styled_text;
pub mod color;
pub mod detect_color_support;

// Re-export.
pub use ansi_escape_codes::*;
pub use ansi_styled_text::*;
pub use color::*;
pub use detect_color_support::*;

/*
 *   Copyright (c) 2024-2025 R3BL LLC
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

//! # Table of contents
//!
//! <!-- TOC -->
//!
//! - [Introduction](#introduction)
//! - [Run ascii-table binary target](#run-ascii-table-binary-target)
//! - [Run base-conv binary target](#run-base-conv-binary-target)
//! - [Colors](#colors)
//! - [Logging](#logging)
//!
//! <!-- /TOC -->
//!
//! # Introduction
//!
//! Two small command line apps for people who stare at bytes all day.
//!
//! - `ascii-table` prints the control codes and printable characters of the ASCII
//!   table, w/ their hexadecimal and decimal values.
//! - `base-conv` takes numerals like `0x12`, `17o` or `101b` and prints them in
//!   hexadecimal, decimal, octal and binary.
//!
//! # Run ascii-table binary target
//!
//! ```sh
//! cargo run --bin ascii-table -- --full
//! cargo run --bin ascii-table -- --controlonly --slim --hexonly
//! ```
//!
//! # Run base-conv binary target
//!
//! ```sh
//! cargo run --bin base-conv -- 255 0x12 12h 17o 0b101
//! cargo run --bin base-conv -- --strict 12h nope
//! ```
//!
//! The digits of a numeral are always `0-9`, the base comes from a marker that is
//! either a suffix (`12h`) or a prefix (`0x12`, `x12`). Tokens that are not numerals
//! are reported on stderr and skipped. Pass `--strict` to also exit w/ an error.
//!
//! # Colors
//!
//! Both apps detect whether the terminal supports colors (honoring `NO_COLOR`,
//! `TERM`, `COLORTERM` and `CLICOLOR`). Use `--color always` or `--color never` to
//! override this.
//!
//! # Logging
//!
//! Pass `--enable-logging` (or `-l`) to write debug logs to `log.txt` in the current
//! working directory.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
// - `#!` (Inner Attribute): The `!` indicates that this is an inner attribute. Inner
//   attributes apply to the entire item containing them. When you use
//   #![warn(clippy::<Lint>)] at the crate level (i.e., in your lib.rs or main.rs), it
//   will make Clippy emit a warning for any `Lint` violations found anywhere within that
//   entire crate. If placed inside a module, it would apply to that module and all its
//   sub-modules.
// - `#` (Outer Attribute): This is an outer attribute. Outer attributes apply to the item
//   immediately following them.
#![warn(clippy::all)]
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]
#![warn(rust_2018_idioms)]
#![warn(clippy::doc_markdown)]
#![warn(clippy::redundant_closure)]
#![warn(clippy::redundant_closure_for_method_calls)]
#![warn(clippy::cast_sign_loss)]
#![warn(clippy::cast_lossless)]
#![warn(clippy::cast_possible_truncation)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(clippy::must_use_candidate)]
#![warn(clippy::items_after_statements)]
#![warn(clippy::manual_is_multiple_of)]
#![warn(clippy::needless_return)]
#![warn(clippy::unreadable_literal)]
#![warn(clippy::redundant_else)]
#![warn(clippy::iter_without_into_iter)]
#![warn(clippy::explicit_iter_loop)]
#![warn(clippy::ignored_unit_patterns)]
#![warn(clippy::match_wildcard_for_single_variants)]
#![warn(clippy::default_trait_access)]
#![warn(clippy::manual_instant_elapsed)]
#![warn(clippy::map_unwrap_or)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unused_self)]
#![warn(clippy::single_char_pattern)]
#![warn(clippy::manual_let_else)]
#![warn(clippy::unnecessary_semicolon)]
#![warn(clippy::if_not_else)]
#![warn(clippy::unnecessary_wraps)]
#![warn(clippy::single_match_else)]
#![warn(clippy::return_self_not_must_use)]
#![warn(clippy::needless_pass_by_value)]

// Attach sources.
pub mod ascii_table;
pub mod base_conv;
pub mod common;

// Re-export.
pub use common::*;

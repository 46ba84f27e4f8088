// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Convert numerals between bases. A numeral is parsed w/ [`parse_numeral`], its value
//! is formatted in every [Radix] w/ [`format_value`], and [`render_block`] turns that
//! into text. [`convert_batch`] does this for every token given on the command line.

// Attach.
pub mod batch;
pub mod cli_arg;
pub mod error;
pub mod formatter;
pub mod numeral;
pub mod ui_str;

// Re-export.
pub use batch::*;
pub use cli_arg::*;
pub use error::*;
pub use formatter::*;
pub use numeral::*;

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod cli_common;
pub mod common_result;
pub mod fmt;
pub mod log_support;

// Re-export.
pub use cli_common::*;
pub use common_result::*;
pub use fmt::*;
pub use log_support::*;

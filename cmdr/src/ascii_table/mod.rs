// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod cell;
pub mod cli_arg;
pub mod code_range;
pub mod control_codes;
pub mod layout;
pub mod table;
pub mod ui_str;

// Re-export.
pub use cell::*;
pub use cli_arg::*;
pub use code_range::*;
pub use control_codes::*;
pub use layout::*;
pub use table::*;
pub use ui_str::category_style;

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

/// One of the 32 C0 control codes, `0x00..0x20`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlCode {
    pub code: u8,
    pub short_name: &'static str,
    pub description: &'static str,
}

/// Short names of the control codes that move the cursor, which are called out in the
/// rendered table.
pub const HIGHLIGHTED_SHORT_NAMES: [&str; 4] = ["BS", "CR", "LF", "HT"];

impl ControlCode {
    #[must_use]
    pub const fn new(code: u8, short_name: &'static str, description: &'static str) -> Self {
        Self {
            code,
            short_name,
            description,
        }
    }

    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        HIGHLIGHTED_SHORT_NAMES.contains(&self.short_name)
    }
}

/// Indexed by code.
#[rustfmt::skip]
pub const CONTROL_CODES: [ControlCode; 32] = [
    ControlCode::new(0x00, "NUL", "Null character"),
    ControlCode::new(0x01, "SOH", "Start of Heading"),
    ControlCode::new(0x02, "STX", "Start of Text"),
    ControlCode::new(0x03, "ETX", "End of Text"),
    ControlCode::new(0x04, "EOT", "End of Transmission"),
    ControlCode::new(0x05, "ENQ", "Enquiry"),
    ControlCode::new(0x06, "ACK", "Acknowledge"),
    ControlCode::new(0x07, "BEL", "Bell, Alert"),
    ControlCode::new(0x08, "BS",  "Backspace"),
    ControlCode::new(0x09, "HT",  "Horizontal Tab"),
    ControlCode::new(0x0A, "LF",  "Line Feed"),
    ControlCode::new(0x0B, "VT",  "Vertical Tabulation"),
    ControlCode::new(0x0C, "FF",  "Form Feed"),
    ControlCode::new(0x0D, "CR",  "Carriage Return"),
    ControlCode::new(0x0E, "SO",  "Shift Out"),
    ControlCode::new(0x0F, "SI",  "Shift In"),
    ControlCode::new(0x10, "DLE", "Data Link Escape"),
    ControlCode::new(0x11, "DC1", "Device Control One (XON)"),
    ControlCode::new(0x12, "DC2", "Device Control Two"),
    ControlCode::new(0x13, "DC3", "Device Control Three (XOFF)"),
    ControlCode::new(0x14, "DC4", "Device Control Four"),
    ControlCode::new(0x15, "NAK", "Negative Acknowledge"),
    ControlCode::new(0x16, "SYN", "Synchronous Idle"),
    ControlCode::new(0x17, "ETB", "End of Transmission Block"),
    ControlCode::new(0x18, "CAN", "Cancel"),
    ControlCode::new(0x19, "EM",  "End of medium"),
    ControlCode::new(0x1A, "SUB", "Substitute"),
    ControlCode::new(0x1B, "ESC", "Escape"),
    ControlCode::new(0x1C, "FS",  "File Separator"),
    ControlCode::new(0x1D, "GS",  "Group Separator"),
    ControlCode::new(0x1E, "RS",  "Record Separator"),
    ControlCode::new(0x1F, "US",  "Unit Separator"),
];

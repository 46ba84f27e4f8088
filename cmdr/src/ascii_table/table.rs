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

use charcodes_ansi_color::ColorSupport;

use super::{CLIArg, LayoutConfig, render_control_block, render_printable_block,
            ui_str::{CONTROL_CODES_HEADING, PRINTABLE_CHARACTERS_HEADING}};
use crate::heading;

/// Which blocks to render, and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRequest {
    pub control_only: bool,
    pub full: bool,
    pub layout: LayoutConfig,
}

impl TableRequest {
    #[must_use]
    pub fn from_cli_arg(cli_arg: &CLIArg, color_support: ColorSupport) -> Self {
        let spacing = if cli_arg.slim {
            LayoutConfig::slim()
        } else {
            LayoutConfig::default()
        };
        Self {
            control_only: cli_arg.controlonly,
            full: cli_arg.full,
            layout: LayoutConfig {
                hex_only: cli_arg.hexonly,
                color_support,
                ..spacing
            },
        }
    }

    #[must_use]
    pub fn includes_control_block(&self) -> bool { self.full || self.control_only }

    #[must_use]
    pub fn includes_printable_block(&self) -> bool { !self.control_only }
}

/// Each block is preceded by an empty line and its heading.
#[must_use]
pub fn render_table(request: &TableRequest) -> String {
    let color_support = request.layout.color_support;
    let mut acc = String::new();

    if request.includes_control_block() {
        acc.push('\n');
        acc.push_str(&heading(CONTROL_CODES_HEADING, color_support));
        acc.push('\n');
        acc.push_str(&render_control_block(&request.layout));
    }

    if request.includes_printable_block() {
        acc.push('\n');
        acc.push_str(&heading(PRINTABLE_CHARACTERS_HEADING, color_support));
        acc.push('\n');
        acc.push_str(&render_printable_block(&request.layout));
    }

    acc
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use pretty_assertions::assert_eq;

    use super::*;

    fn request(args: &[&str]) -> TableRequest {
        let cli_arg = CLIArg::try_parse_from(args).unwrap();
        TableRequest::from_cli_arg(&cli_arg, ColorSupport::NoColor)
    }

    #[test]
    fn default_is_printable_only() {
        let output = render_table(&request(&["ascii-table"]));
        assert!(output.starts_with("\nPrintable Characters\n 20h  032d"));
        assert!(!output.contains(CONTROL_CODES_HEADING));
        assert_eq!(output.lines().count(), 2 + 16);
    }

    #[test]
    fn full_has_control_block_first() {
        let output = render_table(&request(&["ascii-table", "--full"]));
        let control = output.find(CONTROL_CODES_HEADING).unwrap();
        let printable = output.find(PRINTABLE_CHARACTERS_HEADING).unwrap();
        assert!(control < printable);
        assert_eq!(output.lines().count(), 2 * (2 + 16));
    }

    #[test]
    fn control_only_wins_over_full() {
        let output = render_table(&request(&["ascii-table", "-c", "-f"]));
        assert!(output.starts_with("\nControl Codes\n 00h  000d  NUL"));
        assert!(!output.contains(PRINTABLE_CHARACTERS_HEADING));
    }

    #[test]
    fn slim_and_hex_only_flow_into_layout() {
        let it = request(&["ascii-table", "-s", "-x"]);
        assert_eq!(
            it.layout,
            LayoutConfig {
                hex_only: true,
                color_support: ColorSupport::NoColor,
                ..LayoutConfig::slim()
            }
        );
    }
}

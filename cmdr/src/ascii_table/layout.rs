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

use super::{CONTROL_CODES, FormattedCell, format_control_cell, format_printable_cell,
            printable_codes};

pub const ROWS: usize = 16;
pub const CONTROL_COLUMNS: usize = 2;
pub const PRINTABLE_COLUMNS: usize = 6;

/// Each emitted row starts w/ this.
pub const ROW_PREFIX: &str = " ";

/// How the table is spaced and styled. This is built once from the command line flags
/// and passed into the renderers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Between the fields (hex, decimal, character, ...) of one cell.
    pub part_separator: String,
    /// Between the cells of one row.
    pub column_separator: String,
    /// Omit the decimal field from every cell.
    pub hex_only: bool,
    pub color_support: ColorSupport,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            part_separator: "  ".into(),
            column_separator: "    ".into(),
            hex_only: false,
            color_support: ColorSupport::Ansi256,
        }
    }
}

impl LayoutConfig {
    #[must_use]
    pub fn slim() -> Self {
        Self {
            part_separator: " ".into(),
            column_separator: "  ".into(),
            ..Self::default()
        }
    }
}

/// Entry `i` of `items` lands at row `i % rows`, column `i / rows`. In other words
/// `items` is split into `rows` sized chunks and each chunk becomes one column. Columns
/// past `columns` are dropped, and the trailing rows of the last column may be short.
#[must_use]
pub fn arrange_column_major<T>(items: &[T], rows: usize, columns: usize) -> Vec<Vec<&T>> {
    (0..rows)
        .map(|row| {
            items
                .iter()
                .skip(row)
                .step_by(rows)
                .take(columns)
                .collect()
        })
        .collect()
}

/// One line per grid row: [`ROW_PREFIX`], then the cells joined by the column separator.
fn render_grid(
    grid: &[Vec<&FormattedCell>],
    column_separator: &str,
    trim_trailing_whitespace: bool,
) -> String {
    let mut acc = String::new();
    for row in grid {
        let cells: Vec<&str> = row.iter().map(|cell| cell.text.as_str()).collect();
        let line = format!("{ROW_PREFIX}{}", cells.join(column_separator));
        acc.push_str(if trim_trailing_whitespace {
            line.trim_end()
        } else {
            &line
        });
        acc.push('\n');
    }
    acc
}

/// All 32 control codes in a 16 x 2 grid. Trailing whitespace (the padding and the tab
/// after the last description) is trimmed from each row.
#[must_use]
pub fn render_control_block(config: &LayoutConfig) -> String {
    let cells: Vec<FormattedCell> = CONTROL_CODES
        .iter()
        .map(|control_code| format_control_cell(control_code, config))
        .collect();
    let grid = arrange_column_major(&cells, ROWS, CONTROL_COLUMNS);
    tracing::debug!(message = "Render control block", cells = cells.len(), rows = grid.len());
    render_grid(&grid, &config.column_separator, true)
}

/// All 95 printable characters, `0x20..0x7F`, in a 16 x 6 grid. The last row only has 5
/// cells.
#[must_use]
pub fn render_printable_block(config: &LayoutConfig) -> String {
    let cells: Vec<FormattedCell> = printable_codes()
        .map(|(code, category)| format_printable_cell(code, category, config))
        .collect();
    let grid = arrange_column_major(&cells, ROWS, PRINTABLE_COLUMNS);
    tracing::debug!(message = "Render printable block", cells = cells.len(), rows = grid.len());
    render_grid(&grid, &config.column_separator, false)
}

#[cfg(test)]
mod tests {
    use charcodes_ansi_color::SgrCode;
    use pretty_assertions::assert_eq;

    use super::*;

    fn plain_config() -> LayoutConfig {
        LayoutConfig {
            color_support: ColorSupport::NoColor,
            ..LayoutConfig::default()
        }
    }

    #[test]
    fn arrange_splits_into_column_chunks() {
        let items: Vec<usize> = (0..95).collect();
        let grid = arrange_column_major(&items, ROWS, PRINTABLE_COLUMNS);

        assert_eq!(grid.len(), 16);
        let row_0: Vec<usize> = grid[0].iter().map(|it| **it).collect();
        assert_eq!(row_0, vec![0, 16, 32, 48, 64, 80]);
        let row_15: Vec<usize> = grid[15].iter().map(|it| **it).collect();
        assert_eq!(row_15, vec![15, 31, 47, 63, 79]);

        let total: usize = grid.iter().map(Vec::len).sum();
        assert_eq!(total, 95);
    }

    #[test]
    fn arrange_drops_items_past_the_last_column() {
        let items = [1, 2, 3, 4, 5];
        let grid = arrange_column_major(&items, 2, 2);
        assert_eq!(grid, vec![vec![&1, &3], vec![&2, &4]]);
    }

    #[test]
    fn arrange_with_fewer_items_than_rows() {
        let items = ['a', 'b'];
        let grid = arrange_column_major(&items, 3, 2);
        assert_eq!(grid, vec![vec![&'a'], vec![&'b'], vec![]]);
    }

    #[test]
    fn printable_block_shape() {
        let block = render_printable_block(&plain_config());
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines.len(), ROWS);
        assert!(block.ends_with('\n'));

        assert_eq!(
            lines[0],
            " 20h  032d       30h  048d  0    40h  064d  @    50h  080d  P    60h  096d  `    70h  112d  p"
        );
        assert_eq!(
            lines[15],
            " 2Fh  047d  /    3Fh  063d  ?    4Fh  079d  O    5Fh  095d  _    6Fh  111d  o"
        );

        for code in 0x20_u8..0x7F {
            assert!(block.contains(&format!("{code:02X}h  {code:03}d  ")));
        }
    }

    #[test]
    fn printable_block_slim_hex_only() {
        let config = LayoutConfig {
            hex_only: true,
            color_support: ColorSupport::NoColor,
            ..LayoutConfig::slim()
        };
        let block = render_printable_block(&config);
        let first = block.lines().next().unwrap();
        assert_eq!(first, " 20h    30h 0  40h @  50h P  60h `  70h p");
        assert!(!block.contains("032d"));
    }

    #[test]
    fn control_block_shape() {
        let block = render_control_block(&plain_config());
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines.len(), ROWS);

        assert_eq!(
            lines[0],
            " 00h  000d  NUL  Null character      \t    10h  016d  DLE  Data Link Escape"
        );
        assert_eq!(
            lines[15],
            " 0Fh  015d  SI   Shift In            \t    1Fh  031d  US   Unit Separator"
        );
        for line in &lines {
            assert_eq!(*line, line.trim_end());
        }
        for code in 0x00_u8..0x20 {
            assert!(block.contains(&format!("{code:02X}h  {code:03}d  ")));
        }
    }

    #[test]
    fn control_block_hex_only_keeps_field_order() {
        let config = LayoutConfig {
            hex_only: true,
            ..plain_config()
        };
        let block = render_control_block(&config);
        let first = block.lines().next().unwrap();
        assert_eq!(
            first,
            " 00h  NUL  Null character      \t    10h  DLE  Data Link Escape"
        );
        assert!(!block.contains("000d"));
    }

    #[test]
    fn control_block_inverts_exactly_the_highlighted_names() {
        let config = LayoutConfig {
            color_support: ColorSupport::Basic,
            ..LayoutConfig::default()
        };
        let block = render_control_block(&config);
        let invert = SgrCode::Invert.to_string();
        let bold = SgrCode::Bold.to_string();
        let reset = SgrCode::Reset.to_string();

        assert_eq!(block.matches(invert.as_str()).count(), 4);
        for name in ["BS", "CR", "LF", "HT"] {
            assert!(block.contains(&format!("{bold}{invert}{name}{reset}")));
        }
        assert!(block.contains(&format!("{bold}VT{reset}")));
    }
}

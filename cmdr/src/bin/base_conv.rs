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


use charcodes_ansi_color::Stream;
use charcodes_cmdr::{CommonResult,
                     base_conv::{CLIArg, convert_batch, ui_str::skipped_token_msg}};
use clap::Parser;

fn main() -> CommonResult<()> {
    // If no args are passed, the following line will fail, and help will be printed
    // thanks to `arg_required_else_help(true)` in the `CLIArg` struct.
    let cli_arg = CLIArg::parse();

    cli_arg.global_options.try_start_logging()?;
    // % is Display, ? is Debug.
    tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);

    let color_choice = cli_arg.global_options.color;
    let report = convert_batch(&cli_arg.tokens, color_choice.resolve(Stream::Stdout));

    if !report.blocks.is_empty() {
        println!("{}", report.output());
    }

    let stderr_color_support = color_choice.resolve(Stream::Stderr);
    for error in &report.skipped {
        eprintln!("{}", skipped_token_msg(error, stderr_color_support));
    }

    if cli_arg.strict {
        report.check_none_skipped()?;
    }

    tracing::debug!(message = "Stop logging...");
    Ok(())
}

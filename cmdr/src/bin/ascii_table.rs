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
                     ascii_table::{CLIArg, TableRequest, render_table}};
use clap::Parser;

fn main() -> CommonResult<()> {
    let cli_arg = CLIArg::parse();

    cli_arg.global_options.try_start_logging()?;
    // % is Display, ? is Debug.
    tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);

    let color_support = cli_arg.global_options.color.resolve(Stream::Stdout);
    let request = TableRequest::from_cli_arg(&cli_arg, color_support);
    tracing::debug!(message = "Rendering table", request = ?request);

    println!("{}", render_table(&request));

    tracing::debug!(message = "Stop logging...");
    Ok(())
}

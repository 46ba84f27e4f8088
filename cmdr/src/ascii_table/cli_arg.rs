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

use clap::Parser;

use crate::GlobalOption;

#[derive(Debug, Parser)]
#[command(bin_name = "ascii-table")]
#[command(about = "🔡 Prints the ASCII table w/ hex and decimal values")]
#[command(version)]
#[command(next_line_help = true)]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  ascii-table [\x1b[34mOptions\x1b[0m]\n\n{all-args}\n"
)]
pub struct CLIArg {
    #[arg(long, short = 'c', help = "Only print details of control codes")]
    pub controlonly: bool,

    #[arg(long, short = 'f', help = "Include control codes in printout")]
    pub full: bool,

    #[arg(long, short = 's', help = "Use slim spacing between the fields and columns")]
    pub slim: bool,

    #[arg(long, short = 'x', help = "Do not print decimal values")]
    pub hexonly: bool,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

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
#[command(bin_name = "base-conv")]
#[command(about = "🔢 Converts numerals to hexadecimal, decimal, octal and binary")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(true))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version} 💻\n\nUSAGE 📓:\n  base-conv [\x1b[34mOptions\x1b[0m] <\x1b[32mNUMERAL\x1b[0m>...\n\n{all-args}\n"
)]
pub struct CLIArg {
    #[arg(
        value_name = "NUMERAL",
        required = true,
        allow_negative_numbers = true,
        help = "Digits w/ an optional base marker: d (decimal), h or x (hexadecimal), o (octal), b (binary). Eg: 255, 0x12, 12h, 17o, 101b"
    )]
    pub tokens: Vec<String>,

    #[arg(long, help = "Exit w/ an error if any numeral could not be converted")]
    pub strict: bool,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn verify_cli() { CLIArg::command().debug_assert(); }

    #[test]
    fn collects_tokens_in_order() {
        let cli_arg =
            CLIArg::try_parse_from(["base-conv", "12h", "0b101", "abc", "--strict"])
                .unwrap();
        assert_eq!(cli_arg.tokens, vec!["12h", "0b101", "abc"]);
        assert!(cli_arg.strict);
    }

    #[test]
    fn negative_looking_tokens_are_values() {
        let cli_arg =
            CLIArg::try_parse_from(["base-conv", "12h", "-12", "255", "--strict"]).unwrap();
        assert_eq!(cli_arg.tokens, vec!["12h", "-12", "255"]);
        assert!(cli_arg.strict);
        assert!(!cli_arg.global_options.enable_logging);
    }

    #[test]
    fn at_least_one_token_is_required() {
        let error = CLIArg::try_parse_from(["base-conv", "--strict"]).unwrap_err();
        assert_eq!(
            error.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }
}

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

use charcodes_ansi_color::{ColorSupport, Stream,
                           examine_env_vars_to_determine_color_support};
use clap::{Args, ValueEnum};
use tracing_core::LevelFilter;

use crate::{CommonResult, try_initialize_logging_global};

/// Options shared by both binaries. Use `#[command(flatten)]` to add them to a parser.
#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        value_enum,
        default_value_t = ColorChoice::Auto,
        help = "When to use ANSI colors in the output"
    )]
    pub color: ColorChoice,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    #[default]
    #[clap(help = "Use colors if stdout is a terminal that supports them")]
    Auto,
    #[clap(help = "Always use colors")]
    Always,
    #[clap(help = "Never use colors")]
    Never,
}

impl ColorChoice {
    #[must_use]
    pub fn resolve(self, stream: Stream) -> ColorSupport {
        match self {
            ColorChoice::Always => ColorSupport::Ansi256,
            ColorChoice::Never => ColorSupport::NoColor,
            ColorChoice::Auto => examine_env_vars_to_determine_color_support(stream),
        }
    }
}

impl GlobalOption {
    /// # Errors
    ///
    /// If logging was requested and the log file can't be created.
    pub fn try_start_logging(&self) -> CommonResult<()> {
        if self.enable_logging {
            try_initialize_logging_global(LevelFilter::DEBUG)?;
        }
        Ok(())
    }
}

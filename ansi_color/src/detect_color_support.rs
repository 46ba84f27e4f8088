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

use std::{env,
          io::IsTerminal};

/// The stream to check for color support.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

/// The result of the color support check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSupport {
    Ansi256,
    Basic,
    NoColor,
}

/// The environment variables and tty state that [`color_support_from`] decides on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorEnv {
    pub no_color: Option<String>,
    pub term: Option<String>,
    pub colorterm: Option<String>,
    pub clicolor: Option<String>,
    pub is_ci: bool,
    pub is_tty: bool,
}

impl ColorEnv {
    #[must_use]
    pub fn capture(stream: Stream) -> Self {
        Self {
            no_color: env::var("NO_COLOR").ok(),
            term: env::var("TERM").ok(),
            colorterm: env::var("COLORTERM").ok(),
            clicolor: env::var("CLICOLOR").ok(),
            is_ci: is_ci::uncached(),
            is_tty: is_a_tty(stream),
        }
    }
}

/// Determine whether color is supported heuristically. This is based on the environment
/// variables.
#[must_use]
pub fn examine_env_vars_to_determine_color_support(stream: Stream) -> ColorSupport {
    color_support_from(&ColorEnv::capture(stream))
}

#[must_use]
pub fn color_support_from(color_env: &ColorEnv) -> ColorSupport {
    let no_color = matches!(color_env.no_color.as_deref(), Some(it) if it != "0");
    if no_color || color_env.term.as_deref() == Some("dumb") || !color_env.is_tty {
        return ColorSupport::NoColor;
    }

    if color_env.colorterm.is_some()
        || color_env.term.as_deref().is_some_and(check_256_color)
    {
        return ColorSupport::Ansi256;
    }

    if color_env.term.as_deref().is_some_and(check_ansi_color)
        || color_env.clicolor.as_deref().is_some_and(|it| it != "0")
        || color_env.is_ci
    {
        return ColorSupport::Basic;
    }

    ColorSupport::NoColor
}

mod helpers {
    use super::{IsTerminal, Stream};

    #[must_use]
    pub fn is_a_tty(stream: Stream) -> bool {
        match stream {
            Stream::Stdout => std::io::stdout().is_terminal(),
            Stream::Stderr => std::io::stderr().is_terminal(),
        }
    }

    #[must_use]
    pub fn check_256_color(term: &str) -> bool { term.contains("256") }

    #[must_use]
    pub fn check_ansi_color(term: &str) -> bool {
        term.starts_with("screen")
            || term.starts_with("xterm")
            || term.starts_with("vt100")
            || term.starts_with("vt220")
            || term.starts_with("rxvt")
            || term.contains("color")
            || term.contains("ansi")
            || term.contains("cygwin")
            || term.contains("linux")
    }
}
pub use helpers::*;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn tty_env() -> ColorEnv {
        ColorEnv {
            is_tty: true,
            ..ColorEnv::default()
        }
    }

    #[test]
    fn not_a_tty_has_no_color() {
        let color_env = ColorEnv {
            term: Some("xterm-256color".into()),
            ..ColorEnv::default()
        };
        assert_eq!(color_support_from(&color_env), ColorSupport::NoColor);
    }

    #[test]
    fn no_color_wins_over_term() {
        let color_env = ColorEnv {
            no_color: Some("1".into()),
            term: Some("xterm-256color".into()),
            ..tty_env()
        };
        assert_eq!(color_support_from(&color_env), ColorSupport::NoColor);
    }

    #[test]
    fn no_color_zero_is_ignored() {
        let color_env = ColorEnv {
            no_color: Some("0".into()),
            term: Some("xterm-256color".into()),
            ..tty_env()
        };
        assert_eq!(color_support_from(&color_env), ColorSupport::Ansi256);
    }

    #[test]
    fn dumb_term_has_no_color() {
        let color_env = ColorEnv {
            term: Some("dumb".into()),
            ..tty_env()
        };
        assert_eq!(color_support_from(&color_env), ColorSupport::NoColor);
    }

    #[test]
    fn colorterm_means_ansi256() {
        let color_env = ColorEnv {
            colorterm: Some("truecolor".into()),
            ..tty_env()
        };
        assert_eq!(color_support_from(&color_env), ColorSupport::Ansi256);
    }

    #[test]
    fn plain_xterm_means_basic() {
        let color_env = ColorEnv {
            term: Some("xterm".into()),
            ..tty_env()
        };
        assert_eq!(color_support_from(&color_env), ColorSupport::Basic);
    }

    #[test]
    fn clicolor_and_ci_mean_basic() {
        let clicolor = ColorEnv {
            clicolor: Some("1".into()),
            ..tty_env()
        };
        assert_eq!(color_support_from(&clicolor), ColorSupport::Basic);

        let ci = ColorEnv {
            is_ci: true,
            ..tty_env()
        };
        assert_eq!(color_support_from(&ci), ColorSupport::Basic);
    }

    #[test]
    fn unknown_term_has_no_color() {
        let color_env = ColorEnv {
            term: Some("nonsense".into()),
            ..tty_env()
        };
        assert_eq!(color_support_from(&color_env), ColorSupport::NoColor);
    }
}

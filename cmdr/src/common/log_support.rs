/*
 *   Copyright (c) 2024-2025 R3BL LLC
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

//! Logging is **DISABLED** by **default**. Both binaries only install a subscriber when
//! the user passes `--enable-logging`, in which case the log output goes to
//! [`DEFAULT_LOG_FILE_NAME`] in the current working directory.
//!
//! The library code uses the [`tracing::debug!`], [`tracing::warn!`], etc. macros
//! directly. If no subscriber is installed these are no-ops.

use std::{ops::Add, path::Path};

use miette::IntoDiagnostic;
use tracing::dispatcher;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use crate::CommonResult;

pub const DEFAULT_LOG_FILE_NAME: &str = "log.txt";

/// Configure the tracing logging to suit your needs. You can display the logs to a:
/// 1. file,
/// 2. stdout or stderr,
/// 3. both.
///
/// This configuration also allows you to set the log level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    pub level_filter: LevelFilter,
    pub writer_config: WriterConfig,
}

/// The `String` is the file path to use for the log file. Eg: `/tmp/base_conv.log` or
/// `log.txt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String),
    DisplayAndFile(DisplayPreference, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

/// Instead of having lots of arguments to [`try_initialize_logging_global`] and
/// [`try_initialize_logging_thread_local`], they both receive a type that implements
/// [`Into<TracingConfig>`].
///
/// ```no_run
/// use charcodes_cmdr::{DisplayPreference, TracingConfig, WriterConfig,
///                      try_initialize_logging_global};
///
/// let level_filter = tracing_core::LevelFilter::DEBUG;
/// let config_1: TracingConfig = level_filter.into();
///
/// let config_2: TracingConfig = DisplayPreference::Stderr.into();
///
/// try_initialize_logging_global(config_1 + config_2).ok();
/// ```
pub mod tracing_config_options {
    use super::{Add, DEFAULT_LOG_FILE_NAME, DisplayPreference, LevelFilter,
                TracingConfig, WriterConfig};

    impl From<tracing::Level> for TracingConfig {
        fn from(level: tracing::Level) -> Self { LevelFilter::from_level(level).into() }
    }

    impl From<LevelFilter> for TracingConfig {
        fn from(level_filter: LevelFilter) -> Self {
            Self {
                level_filter,
                writer_config: WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string()),
            }
        }
    }

    impl From<DisplayPreference> for TracingConfig {
        fn from(preferred_display: DisplayPreference) -> Self {
            Self {
                level_filter: LevelFilter::DEBUG,
                writer_config: WriterConfig::Display(preferred_display),
            }
        }
    }

    impl From<WriterConfig> for TracingConfig {
        fn from(writer_config: WriterConfig) -> Self {
            Self {
                level_filter: LevelFilter::DEBUG,
                writer_config,
            }
        }
    }

    /// The more verbose level filter wins, and the writer configs are merged.
    impl Add<TracingConfig> for TracingConfig {
        type Output = Self;

        fn add(self, rhs: Self) -> Self::Output {
            Self {
                level_filter: self.level_filter.max(rhs.level_filter),
                writer_config: self.writer_config + rhs.writer_config,
            }
        }
    }

    /// Merge two [`WriterConfig`] instances together. The `rhs` has higher specificity,
    /// so it clobbers the `self` when both set the same thing.
    ///
    /// - `{a: "foo"} + {a: "bar"} = {a: "bar"}`.
    /// - `{a: None } + {a: "bar"} = {a: "bar"}`.
    /// - `{a: "foo"} + {a: None } = {a: "foo"}`.
    impl Add<WriterConfig> for WriterConfig {
        type Output = Self;

        fn add(self, rhs: WriterConfig) -> Self::Output {
            use WriterConfig::{Display, DisplayAndFile, File, None};

            match (self, rhs) {
                // No collision merge.
                (None, wc_rhs) => wc_rhs,
                (wc_lhs, None) => wc_lhs,
                (Display(dp_lhs), File(f_rhs)) => DisplayAndFile(dp_lhs, f_rhs),
                (File(f_lhs), Display(dp_rhs)) => DisplayAndFile(dp_rhs, f_lhs),

                // Collision (rhs has higher specificity).
                (Display(_) | File(_) | DisplayAndFile(..), DisplayAndFile(dp, f)) => {
                    DisplayAndFile(dp, f)
                }
                (Display(_), Display(dp_rhs)) => Display(dp_rhs),
                (File(_), File(f_rhs)) => File(f_rhs),
                (DisplayAndFile(_, f_lhs), Display(dp_rhs)) => {
                    DisplayAndFile(dp_rhs, f_lhs)
                }
                (DisplayAndFile(dp_lhs, _), File(f_rhs)) => DisplayAndFile(dp_lhs, f_rhs),
            }
        }
    }
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

impl TracingConfig {
    /// Global default subscriber, which once set, can't be unset or changed. This is what
    /// the binaries use.
    ///
    /// # Errors
    ///
    /// If the log file can't be created, or a global subscriber is already installed.
    pub fn install_global(self) -> CommonResult<()> {
        let layers = try_create_layers(self)?;
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .into_diagnostic()
    }

    /// Thread local subscriber, which is removed when the returned guard is dropped.
    /// This is what the tests use.
    ///
    /// # Errors
    ///
    /// If the log file can't be created.
    pub fn install_thread_local(self) -> CommonResult<dispatcher::DefaultGuard> {
        let layers = try_create_layers(self)?;
        let subscriber = tracing_subscriber::registry().with(layers);
        Ok(tracing::subscriber::set_default(subscriber))
    }
}

/// If the level filter is [`LevelFilter::OFF`] then nothing is installed.
///
/// # Errors
///
/// See [`TracingConfig::install_global`].
pub fn try_initialize_logging_global(options: impl Into<TracingConfig>) -> CommonResult<()> {
    let it: TracingConfig = options.into();
    if it.level_filter == LevelFilter::OFF {
        return Ok(());
    }
    it.install_global()
}

/// If the level filter is [`LevelFilter::OFF`] then nothing is installed, and `None` is
/// returned.
///
/// # Errors
///
/// See [`TracingConfig::install_thread_local`].
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> CommonResult<Option<dispatcher::DefaultGuard>> {
    let it: TracingConfig = options.into();
    if it.level_filter == LevelFilter::OFF {
        return Ok(None);
    }
    it.install_thread_local().map(Some)
}

/// Returns the layers. This does not initialize the tracing system.
///
/// # Errors
///
/// If the log file can't be created.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> CommonResult<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let TracingConfig {
        level_filter,
        writer_config,
    } = tracing_config;

    let mut acc: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];
    acc.push(Box::new(level_filter));
    if let Some(layer) = create_display_layer(level_filter, &writer_config) {
        acc.push(layer);
    }
    if let Some(layer) = try_create_file_layer(level_filter, &writer_config)? {
        acc.push(layer);
    }
    Ok(acc)
}

pub fn create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> Option<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let display_pref = match writer_config {
        WriterConfig::Display(it) | WriterConfig::DisplayAndFile(it, _) => *it,
        WriterConfig::None | WriterConfig::File(_) => return None,
    };

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);
    let layer: Box<DynLayer<S>> = match display_pref {
        DisplayPreference::Stdout => Box::new(
            fmt_layer
                .with_writer(std::io::stdout)
                .with_filter(level_filter),
        ),
        DisplayPreference::Stderr => Box::new(
            fmt_layer
                .with_writer(std::io::stderr)
                .with_filter(level_filter),
        ),
    };
    Some(layer)
}

/// # Errors
///
/// If the log file (or its parent folder) can't be created.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: &WriterConfig,
) -> CommonResult<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let file_path = match writer_config {
        WriterConfig::File(it) | WriterConfig::DisplayAndFile(_, it) => it,
        WriterConfig::None | WriterConfig::Display(_) => return Ok(None),
    };

    let file = try_create_file_appender(file_path)?;
    let layer: Box<DynLayer<S>> = Box::new(
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(file)
            .with_filter(level_filter),
    );
    Ok(Some(layer))
}

fn try_create_file_appender(path_str: &str) -> CommonResult<RollingFileAppender> {
    let path = Path::new(path_str);

    let file_name = path.file_name().ok_or_else(|| {
        miette::miette!("Can't use {} as the name of a log file.", path.display())
    })?;

    let parent = match path.parent() {
        Some(it) if !it.as_os_str().is_empty() => it,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name.to_string_lossy())
        .build(parent)
        .into_diagnostic()
}

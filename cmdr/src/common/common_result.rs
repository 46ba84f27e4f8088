// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`],
/// which are [`std::error::Error`] wrappers. Works hand in hand w/ the domain errors
/// that derive [`miette::Diagnostic`].
pub type CommonResult<T> = miette::Result<T>;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors raised while building parser options.

use thiserror::Error;

/// Errors that can occur when configuring how output is parsed.
#[derive(Debug, Error)]
pub enum OptionsError {
    /// The column separator is not a valid regular expression.
    #[error("invalid column separator `{pattern}`: {source}")]
    InvalidSeparator {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The column separator matches the empty string, so it would split
    /// between every character.
    #[error("column separator `{pattern}` matches the empty string")]
    EmptyMatch { pattern: String },

    /// The options document is not valid TOML or has unknown keys.
    #[error("invalid parser options: {0}")]
    Toml(#[from] toml::de::Error),
}

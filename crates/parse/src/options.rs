// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration for the tabular decoder.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::OptionsError;

/// Separator between columns in kubectl's tabular output.
pub const DEFAULT_COLUMN_SEPARATOR: &str = r"\s+";

// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
pub(crate) static KUBECTL_COLUMN_SEPARATOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DEFAULT_COLUMN_SEPARATOR).expect("constant regex pattern is valid")
});

/// How tabular output is split into columns.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    column_separator: Regex,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { column_separator: KUBECTL_COLUMN_SEPARATOR.clone() }
    }
}

/// On-disk shape of [`ParseOptions`].
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOptions {
    column_separator: Option<String>,
}

impl ParseOptions {
    /// Use `pattern` as the column separator.
    ///
    /// Each maximal run of text matching `pattern` separates two cells.
    /// Patterns that can match the empty string are rejected, including
    /// zero-width assertions such as `\b` that only match between characters.
    pub fn with_separator(pattern: &str) -> Result<Self, OptionsError> {
        let column_separator = Regex::new(pattern).map_err(|source| {
            OptionsError::InvalidSeparator { pattern: pattern.to_string(), source }
        })?;
        if column_separator.is_match("") || can_match_empty(pattern) {
            return Err(OptionsError::EmptyMatch { pattern: pattern.to_string() });
        }
        Ok(Self { column_separator })
    }

    /// Load options from a TOML document.
    ///
    /// ```toml
    /// column_separator = '\s{2,}'
    /// ```
    ///
    /// Missing keys fall back to the defaults.
    pub fn from_toml(content: &str) -> Result<Self, OptionsError> {
        let raw: RawOptions = toml::from_str(content)?;
        match raw.column_separator {
            Some(pattern) => Self::with_separator(&pattern),
            None => Ok(Self::default()),
        }
    }

    pub fn column_separator(&self) -> &Regex {
        &self.column_separator
    }
}

/// Whether the shortest possible match of `pattern` is zero characters long.
fn can_match_empty(pattern: &str) -> bool {
    regex_syntax::Parser::new()
        .parse(pattern)
        .map(|hir| hir.properties().minimum_len() == Some(0))
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;

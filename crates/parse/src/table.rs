// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Decoding of kubectl's column-aligned tabular output.
//!
//! Two stages: [`as_table_lines`] checks how kubectl exited and splits stdout
//! into a header line and body lines; [`parse_table_lines`] maps each body
//! line to a [`Dictionary`] keyed by the lower-cased column headers.
//!
//! ```text
//! NAME     FOO      BAR        {name: foo,    foo: true,  bar: false}
//! foo      true     false  =>  {name: barbar, foo: false, bar: twice}
//! barbar   false    twice
//! ```

use kp_core::{check_exit, Dictionary, Errorable, ShellResult};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::options::{ParseOptions, KUBECTL_COLUMN_SEPARATOR};

/// A line-oriented view of tabular kubectl output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableLines {
    /// The column header line, verbatim.
    pub header: String,
    /// Data lines, with empty lines removed.
    pub body: Vec<String>,
}

impl TableLines {
    /// No header and no rows: what kubectl prints when nothing matched.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_empty() || self.body.is_empty()
    }
}

/// Parse tabular kubectl output into one [`Dictionary`] per data row.
///
/// Uses kubectl's column separator (runs of whitespace). If kubectl ran
/// successfully but printed nothing, the result is an empty list rather than
/// a failure.
pub fn parse_tabular(output: Option<&ShellResult>) -> Errorable<Vec<Dictionary<String>>> {
    let table = as_table_lines(output)?;
    Ok(parse_table_lines(&table, &KUBECTL_COLUMN_SEPARATOR))
}

/// Like [`parse_tabular`], with a caller-configured column separator.
pub fn parse_tabular_with(
    output: Option<&ShellResult>,
    options: &ParseOptions,
) -> Errorable<Vec<Dictionary<String>>> {
    let table = as_table_lines(output)?;
    Ok(parse_table_lines(&table, options.column_separator()))
}

/// Split tabular kubectl output into a header line and body lines.
///
/// If kubectl exited 0 but printed nothing (stderr is ignored, it may say
/// "No resources found."), returns [`TableLines::empty`].
pub fn as_table_lines(output: Option<&ShellResult>) -> Errorable<TableLines> {
    let result = check_exit(output).inspect_err(|failure| {
        tracing::debug!(
            reason = %failure.reason,
            code = output.map(|o| o.code),
            "kubectl output not split into table lines"
        );
    })?;

    let mut lines = result.stdout.split('\n');
    let header = match lines.next() {
        Some(header) if !header.is_empty() => header,
        _ => return Ok(TableLines::empty()),
    };
    let body = lines.filter(|line| !line.is_empty()).map(str::to_string).collect();
    Ok(TableLines { header: header.to_string(), body })
}

/// Map each body line of `table` to a dictionary keyed by column header.
///
/// Column names are the lower-cased header split on `column_separator`.
/// Cells are paired with columns by position: surplus cells are dropped, and
/// a short row simply lacks the trailing keys.
pub fn parse_table_lines(table: &TableLines, column_separator: &Regex) -> Vec<Dictionary<String>> {
    if table.is_empty() {
        return Vec::new();
    }

    let header = table.header.to_lowercase();
    let columns: Vec<&str> = column_separator.split(&header).map(str::trim).collect();
    let rows: Vec<Dictionary<String>> =
        table.body.iter().map(|line| parse_line(line, &columns, column_separator)).collect();

    tracing::trace!(columns = columns.len(), rows = rows.len(), "parsed tabular output");
    rows
}

fn parse_line(line: &str, columns: &[&str], column_separator: &Regex) -> Dictionary<String> {
    column_separator
        .split(line)
        .zip(columns)
        .map(|(value, column)| (column.to_string(), value.trim().to_string()))
        .collect()
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for captured kubectl output.
pub mod strategies {
    use crate::ShellResult;
    use proptest::prelude::*;

    /// Printable text, possibly multi-line.
    pub fn arb_text() -> impl Strategy<Value = String> {
        "[ -~\n]{0,64}".prop_map(String::from)
    }

    pub fn arb_shell_result() -> impl Strategy<Value = ShellResult> {
        (-1i32..=255, arb_text(), arb_text())
            .prop_map(|(code, stdout, stderr)| ShellResult::new(code, stdout, stderr))
    }

    /// A result whose exit code is non-zero.
    pub fn arb_failing_result() -> impl Strategy<Value = ShellResult> {
        (prop_oneof![Just(-1i32), 1i32..=255], arb_text(), arb_text())
            .prop_map(|(code, stdout, stderr)| ShellResult::new(code, stdout, stderr))
    }

    /// A single table cell: no whitespace, never empty.
    pub fn arb_cell() -> impl Strategy<Value = String> {
        "[a-z0-9][a-z0-9./:-]{0,11}".prop_map(String::from)
    }

    /// Upper-case column headers plus rows with one cell per column.
    pub fn arb_table() -> impl Strategy<Value = (Vec<String>, Vec<Vec<String>>)> {
        prop::collection::btree_set("[A-Z][A-Z0-9_-]{0,9}", 1..6)
            .prop_map(|set| set.into_iter().collect::<Vec<_>>())
            .prop_flat_map(|columns| {
                let width = columns.len();
                let rows = prop::collection::vec(prop::collection::vec(arb_cell(), width), 1..8);
                (Just(columns), rows)
            })
    }
}

/// Render `columns` and `rows` the way kubectl prints tables: each column
/// padded to its widest cell plus three spaces, trailing padding trimmed.
pub fn render_table(columns: &[String], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = (0..columns.len())
        .map(|i| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .chain(std::iter::once(&columns[i]))
                .map(|cell| cell.len())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let render_line = |cells: &[String]| {
        let mut line = String::new();
        for (cell, width) in cells.iter().zip(&widths) {
            line.push_str(&format!("{:<pad$}", cell, pad = width + 3));
        }
        line.trim_end().to_string()
    };

    let mut out = render_line(columns);
    out.push('\n');
    for row in rows {
        out.push_str(&render_line(row.as_slice()));
        out.push('\n');
    }
    out
}

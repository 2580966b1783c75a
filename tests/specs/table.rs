// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tabular output specs
//!
//! Verify `kubectl get` tables decode into one dictionary per row.

use crate::prelude::*;
use kp_parse::{parse_tabular_with, ParseOptions};
use similar_asserts::assert_eq;

const GET_PODS: &str = "\
NAME                     READY   STATUS    RESTARTS   AGE
web-7d4b9c8f5d-2xk9q     1/1     Running   0          3d
web-7d4b9c8f5d-8mz4t     1/1     Running   2          3d
migrate-28374650-abcde   0/1     Completed 0          12m
";

#[test]
fn sample_table_decodes_to_two_rows() {
    let rows = exited(0)
        .stdout("NAME     FOO      BAR\nfoo      true     false\nbarbar   false    twice")
        .table()
        .passes();

    assert_eq!(
        rows,
        vec![
            row(&[("name", "foo"), ("foo", "true"), ("bar", "false")]),
            row(&[("name", "barbar"), ("foo", "false"), ("bar", "twice")]),
        ]
    );
}

#[test]
fn no_resources_found_is_an_empty_table() {
    let rows = exited(0).stderr("No resources found in default namespace.").table().passes();
    assert!(rows.is_empty());
}

#[test]
fn get_pods_decodes_every_row() {
    let rows = exited(0).stdout(GET_PODS).table().passes();
    assert_eq!(rows.len(), 3);
    assert_eq!(
        rows[0],
        row(&[
            ("name", "web-7d4b9c8f5d-2xk9q"),
            ("ready", "1/1"),
            ("status", "Running"),
            ("restarts", "0"),
            ("age", "3d"),
        ])
    );
    assert_eq!(rows[2]["status"], "Completed");
    assert_eq!(rows[2]["age"], "12m");
}

#[test]
fn ragged_rows_do_not_fail_the_table() {
    let rows = exited(0)
        .stdout("NAME    READY   STATUS\npod-a   1/1\npod-b   0/1     Pending\n")
        .table()
        .passes();

    assert_eq!(rows[0], row(&[("name", "pod-a"), ("ready", "1/1")]));
    assert_eq!(rows[1], row(&[("name", "pod-b"), ("ready", "0/1"), ("status", "Pending")]));
}

#[test]
fn header_and_body_lines_are_kept_verbatim() {
    let lines = exited(0).stdout(GET_PODS).table_lines().passes();
    assert_eq!(lines.header, "NAME                     READY   STATUS    RESTARTS   AGE");
    assert_eq!(lines.body.len(), 3);
    assert_eq!(lines.body[1], "web-7d4b9c8f5d-8mz4t     1/1     Running   2          3d");
}

#[test]
fn configured_separator_keeps_multi_word_cells() {
    let options = ParseOptions::from_toml(r#"column_separator = '\s{2,}'"#).unwrap();
    let output = ShellResult::success(
        "NAME    NOMINATED NODE   AGE\npod-a   <none>           2 days ago\n",
    );

    let rows = parse_tabular_with(Some(&output), &options).passes();
    assert_eq!(
        rows,
        vec![row(&[("name", "pod-a"), ("nominated node", "<none>"), ("age", "2 days ago")])]
    );
}

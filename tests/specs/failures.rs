// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Failure classification specs
//!
//! Verify every decoder reports the same failure for the same invocation.

use crate::prelude::*;
use kp_core::test_support::strategies::{arb_failing_result, arb_shell_result};
use proptest::prelude::*;
use similar_asserts::assert_eq;

#[test]
fn process_not_started_fails_to_run_everywhere() {
    let kubectl = not_started();
    let expected = Failed::failed_to_run();

    assert_eq!(kubectl.table().fails_with(FailureReason::FailedToRun), expected);
    assert_eq!(kubectl.table_lines().fails_with(FailureReason::FailedToRun), expected);
    assert_eq!(
        kubectl.json::<serde_json::Value>().fails_with(FailureReason::FailedToRun),
        expected
    );
    assert_eq!(
        kubectl.json_list::<serde_json::Value>().fails_with(FailureReason::FailedToRun),
        expected
    );
}

#[test]
fn non_zero_exit_reports_stderr_everywhere() {
    let kubectl = exited(1).stdout("NAME\nfoo\n").stderr("oh noes");
    let expected = Failed::kubectl_error("oh noes");

    assert_eq!(kubectl.table().fails_with(FailureReason::KubectlError), expected);
    assert_eq!(kubectl.table_lines().fails_with(FailureReason::KubectlError), expected);
    assert_eq!(
        kubectl.json::<serde_json::Value>().fails_with(FailureReason::KubectlError),
        expected
    );
    assert_eq!(
        kubectl.json_list::<serde_json::Value>().fails_with(FailureReason::KubectlError),
        expected
    );
}

#[test]
fn empty_output_is_an_empty_table_but_unparsable_json() {
    let kubectl = exited(0);
    assert!(kubectl.table().passes().is_empty());
    kubectl.json::<serde_json::Value>().fails_with(FailureReason::FailedToParse);
}

#[test]
fn failures_serialize_with_stable_reason_identifiers() {
    let failure = exited(1).stderr("oh noes").table().fails_with(FailureReason::KubectlError);
    let json = serde_json::to_value(&failure).unwrap();
    assert_eq!(json, serde_json::json!({ "reason": "kubectl-error", "error": "oh noes" }));
}

proptest! {
    /// Invariant: a non-zero exit is a kubectl error with verbatim stderr,
    /// for both decoders.
    #[test]
    fn decoders_agree_on_kubectl_errors(output in arb_failing_result()) {
        let table = parse_tabular(Some(&output)).unwrap_err();
        let json = parse_json::<serde_json::Value>(Some(&output)).unwrap_err();
        prop_assert_eq!(&table, &json);
        prop_assert_eq!(table.reason, FailureReason::KubectlError);
        prop_assert_eq!(table.error, output.stderr);
    }

    /// Invariant: decoding twice yields equal results.
    #[test]
    fn decoding_is_idempotent(output in arb_shell_result()) {
        prop_assert_eq!(parse_tabular(Some(&output)), parse_tabular(Some(&output)));
        prop_assert_eq!(
            parse_json::<serde_json::Value>(Some(&output)),
            parse_json::<serde_json::Value>(Some(&output))
        );
    }
}

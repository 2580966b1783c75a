// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Decoding of `kubectl -o json` output.

use kp_core::{check_exit, Dictionary, Errorable, Failed, ShellResult};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Message used when kubectl exited 0 but printed nothing but whitespace.
pub const EMPTY_OUTPUT_MESSAGE: &str = "Command returned empty output";

/// How `kubectl -o json` formats lists of resources.
///
/// `kind` must be exactly `"List"`. Typed lists such as the `"PodList"`
/// returned by `kubectl get --raw` fail to decode rather than being accepted
/// unchecked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KubernetesList<T> {
    /// The Kubernetes API version.
    pub api_version: String,
    /// Identifies this object to the Kubernetes API as a list.
    pub kind: ListKind,
    /// The contents of the list.
    pub items: Vec<T>,
    /// Additional data about the list.
    #[serde(default)]
    pub metadata: Dictionary<String>,
}

/// The `kind` of a [`KubernetesList`], which is always `"List"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListKind {
    #[default]
    List,
}

/// Parse JSON kubectl output into a `T`.
///
/// Fails with `failed-to-parse` if kubectl exited 0 but printed nothing, or
/// printed something that does not deserialize as `T`.
pub fn parse_json<T: DeserializeOwned>(output: Option<&ShellResult>) -> Errorable<T> {
    let result = check_exit(output).inspect_err(|failure| {
        tracing::debug!(
            reason = %failure.reason,
            code = output.map(|o| o.code),
            "kubectl output not decoded as JSON"
        );
    })?;

    let stdout = result.stdout.trim();
    if stdout.is_empty() {
        tracing::debug!("kubectl exited 0 with empty output");
        return Err(Failed::failed_to_parse(EMPTY_OUTPUT_MESSAGE));
    }

    tracing::trace!(len = stdout.len(), "decoding kubectl JSON output");
    serde_json::from_str(stdout).map_err(|e| {
        tracing::debug!(error = %e, "kubectl output is not the expected JSON");
        Failed::failed_to_parse(format!("Unable to parse command output: {e}"))
    })
}

/// Parse JSON kubectl output into a [`KubernetesList`] of `T`.
///
/// Use this when the command requested a list of resources rather than a
/// single resource.
pub fn parse_json_collection<T: DeserializeOwned>(
    output: Option<&ShellResult>,
) -> Errorable<KubernetesList<T>> {
    parse_json::<KubernetesList<T>>(output)
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Success/failure results for functions on kubectl output.
//!
//! Every decoder returns an [`Errorable<T>`]: either the computed value, or a
//! [`Failed`] describing which of the three failure modes occurred.

use serde::{Deserialize, Serialize};

use crate::ShellResult;

/// Message used when the kubectl process could not be created.
pub const FAILED_TO_RUN_MESSAGE: &str = "Unable to run command";

/// Why a function on kubectl output could not compute a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureReason {
    /// The kubectl process was not created.
    FailedToRun,
    /// kubectl ran and returned a non-zero exit code.
    KubectlError,
    /// kubectl succeeded but its standard output could not be interpreted.
    FailedToParse,
}

crate::simple_display! {
    FailureReason {
        FailedToRun => "failed-to-run",
        KubectlError => "kubectl-error",
        FailedToParse => "failed-to-parse",
    }
}

/// A failed result: the reason, plus a message.
///
/// For [`FailureReason::KubectlError`] the message is kubectl's stderr,
/// verbatim. Otherwise it is a descriptive message for the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{reason}: {error}")]
pub struct Failed {
    pub reason: FailureReason,
    pub error: String,
}

impl Failed {
    pub fn new(reason: FailureReason, error: impl Into<String>) -> Self {
        Self { reason, error: error.into() }
    }

    pub fn failed_to_run() -> Self {
        Self::new(FailureReason::FailedToRun, FAILED_TO_RUN_MESSAGE)
    }

    pub fn kubectl_error(stderr: impl Into<String>) -> Self {
        Self::new(FailureReason::KubectlError, stderr)
    }

    pub fn failed_to_parse(message: impl Into<String>) -> Self {
        Self::new(FailureReason::FailedToParse, message)
    }
}

/// The result of trying to interpret kubectl output.
pub type Errorable<T> = Result<T, Failed>;

/// Whether `e` holds a computed value.
pub fn succeeded<T>(e: &Errorable<T>) -> bool {
    e.is_ok()
}

/// Whether `e` holds a [`Failed`].
pub fn failed<T>(e: &Errorable<T>) -> bool {
    e.is_err()
}

/// Classify how kubectl exited, before looking at what it printed.
///
/// Returns the output itself when the process ran and exited 0. Standard
/// error is not inspected in that case: kubectl writes informational
/// messages such as "No resources found." there on success.
pub fn check_exit(output: Option<&ShellResult>) -> Errorable<&ShellResult> {
    match output {
        None => Err(Failed::failed_to_run()),
        Some(result) if result.code != 0 => Err(Failed::kubectl_error(result.stderr.as_str())),
        Some(result) => Ok(result),
    }
}

#[cfg(test)]
#[path = "errorable_tests.rs"]
mod tests;

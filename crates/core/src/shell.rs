// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Captured output of an external program run through the shell.

use serde::{Deserialize, Serialize};

/// Exit code recorded for a process that was terminated by a signal.
pub const SIGNALED_EXIT_CODE: i32 = -1;

/// The result of invoking an external program via the shell.
///
/// Decoders receive `Option<&ShellResult>`; `None` means the process could
/// not be created at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellResult {
    /// Exit code of the process (0 on success).
    pub code: i32,
    /// Captured standard output.
    #[serde(default)]
    pub stdout: String,
    /// Captured standard error.
    #[serde(default)]
    pub stderr: String,
}

impl ShellResult {
    pub fn new(code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self { code, stdout: stdout.into(), stderr: stderr.into() }
    }

    /// A zero exit with the given stdout and no stderr.
    pub fn success(stdout: impl Into<String>) -> Self {
        Self::new(0, stdout, String::new())
    }

    /// A non-zero exit with the given stderr and no stdout.
    pub fn failure(code: i32, stderr: impl Into<String>) -> Self {
        Self::new(code, String::new(), stderr)
    }

    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

impl From<std::process::Output> for ShellResult {
    fn from(output: std::process::Output) -> Self {
        Self {
            code: output.status.code().unwrap_or(SIGNALED_EXIT_CODE),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

crate::builder! {
    pub struct ShellResultBuilder => ShellResult {
        into {
            stdout: String = "",
            stderr: String = "",
        }
        set {
            code: i32 = 0,
        }
    }
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! kp-core: shared types for interpreting kubectl output

pub mod macros;

pub mod dictionary;
pub mod errorable;
pub mod shell;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use dictionary::Dictionary;
pub use errorable::{
    check_exit, failed, succeeded, Errorable, Failed, FailureReason, FAILED_TO_RUN_MESSAGE,
};
#[cfg(any(test, feature = "test-support"))]
pub use shell::ShellResultBuilder;
pub use shell::{ShellResult, SIGNALED_EXIT_CODE};

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Decoders for kubectl output.
//!
//! - [`json`]: `kubectl -o json` output into typed values
//! - [`table`]: column-aligned `kubectl get` output into dictionaries
//!
//! Every decoder takes the captured output of one kubectl invocation
//! (`None` if the process could not be created) and returns an
//! [`Errorable`](kp_core::Errorable).

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod error;
pub mod json;
pub mod options;
pub mod table;

pub use error::OptionsError;
pub use json::{parse_json, parse_json_collection, KubernetesList, ListKind, EMPTY_OUTPUT_MESSAGE};
pub use options::{ParseOptions, DEFAULT_COLUMN_SEPARATOR};
pub use table::{as_table_lines, parse_table_lines, parse_tabular, parse_tabular_with, TableLines};

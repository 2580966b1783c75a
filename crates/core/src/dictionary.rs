// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! String-keyed records whose key set is only known at runtime.

use std::collections::HashMap;

/// Objects with arbitrary property names whose values all have type `V`.
///
/// Used for decoded table rows, where the columns depend on the command that
/// produced the output.
pub type Dictionary<V> = HashMap<String, V>;

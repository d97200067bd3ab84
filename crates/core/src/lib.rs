// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rmk-core: execution tree model, severities and errors shared by the
//! discovery and evaluation passes.

pub mod macros;

pub mod error;
pub mod node;
pub mod status;
pub mod timing;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use error::{Error, MalformedTree};
pub use node::{ExecutionNode, NodeKind};
pub use status::{Severity, StatusEntry, StatusTable};
pub use timing::{format_seconds, ms_to_seconds, TimingSample};

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! rmk-check: discovery-level flattening and worst-case status roll-up for
//! execution trees.

pub mod aggregate;
pub mod check;
pub mod config;
pub mod flatten;
pub mod threshold;

pub use aggregate::{evaluate, Aggregator, Evaluation};
pub use check::{check, check_with, inventory, service_description, InventoryItem};
pub use config::{CheckConfig, ConfigError};
pub use flatten::{flatten, DiscoveredUnit, Flattener, DEFAULT_MAX_DEPTH};
pub use threshold::{NoThresholds, RuntimeThreshold};

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Inventory and check entry points used by the monitoring host.
//!
//! Both run a fresh discovery pass over the tree they are given; nothing is
//! cached between calls.

use crate::aggregate::{Aggregator, Evaluation};
use crate::config::CheckConfig;
use crate::flatten::Flattener;
use crate::threshold::{NoThresholds, RuntimeThreshold};
use rmk_core::{Error, ExecutionNode};
use serde::Serialize;

/// Placeholder substituted with a space in service prefixes.
pub const SPACE_PLACEHOLDER: &str = "%SPACE%";

/// One discovered service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryItem {
    /// Item name, as passed back to [`check`].
    pub item: String,
    /// Service description shown by the monitoring host.
    pub service: String,
    /// Discovered check parameters; always empty.
    pub params: Option<serde_json::Value>,
}

/// List the items found at the configured discovery level, in tree order.
pub fn inventory(root: &ExecutionNode, config: &CheckConfig) -> Result<Vec<InventoryItem>, Error> {
    let units = flattener(config).flatten(root)?;
    Ok(units
        .iter()
        .map(|unit| InventoryItem {
            item: unit.name().to_string(),
            service: service_description(config.service_prefix.as_deref(), unit.name()),
            params: None,
        })
        .collect())
}

/// Evaluate the unit called `item`.
pub fn check(item: &str, root: &ExecutionNode, config: &CheckConfig) -> Result<Evaluation, Error> {
    check_with(item, root, config, &NoThresholds)
}

/// [`check`] with a runtime threshold hook.
pub fn check_with(
    item: &str,
    root: &ExecutionNode,
    config: &CheckConfig,
    thresholds: &dyn RuntimeThreshold,
) -> Result<Evaluation, Error> {
    let units = flattener(config).flatten(root)?;
    let Some(unit) = units.iter().find(|unit| unit.name() == item) else {
        tracing::warn!(item, level = config.discovery_level, "item vanished from execution report");
        return Err(Error::item_not_found(item));
    };
    let table = config.status_table();
    Aggregator::new(&table)
        .max_depth(config.max_depth)
        .thresholds(thresholds)
        .evaluate(unit.node())
}

/// Service description for `item`, honoring the `%SPACE%` placeholder.
pub fn service_description(prefix: Option<&str>, item: &str) -> String {
    match prefix {
        Some(prefix) => format!("{}{item}", prefix.replace(SPACE_PLACEHOLDER, " ")),
        None => item.to_string(),
    }
}

fn flattener(config: &CheckConfig) -> Flattener {
    Flattener::new(config.discovery_level).max_depth(config.max_depth)
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;

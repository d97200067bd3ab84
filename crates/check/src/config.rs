// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Check configuration, read from TOML.
//!
//! ```toml
//! discovery_level = 1
//! service_prefix = "Robot%SPACE%"
//! max_depth = 100
//!
//! [statuses.SKIP]
//! severity = "warn"
//! label = "WARN"
//! ```

use crate::flatten::DEFAULT_MAX_DEPTH;
use rmk_core::StatusTable;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    /// Tree depth at which items are discovered (0 = root suite).
    pub discovery_level: usize,
    /// Prepended to item names to form service descriptions.
    pub service_prefix: Option<String>,
    /// 0 = unlimited.
    pub max_depth: usize,
    /// Entries added to (or overriding) the PASS/FAIL defaults.
    pub statuses: StatusTable,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            discovery_level: 0,
            service_prefix: None,
            max_depth: DEFAULT_MAX_DEPTH,
            statuses: StatusTable::empty(),
        }
    }
}

impl CheckConfig {
    rmk_core::setters! {
        set { discovery_level: usize, max_depth: usize, statuses: StatusTable }
        option { service_prefix: String }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.display().to_string(), source })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), level = config.discovery_level, "loaded check config");
        Ok(config)
    }

    /// Default status table with this config's entries applied on top.
    pub fn status_table(&self) -> StatusTable {
        StatusTable::default().merged(self.statuses.clone())
    }
}

/// Errors from loading a check configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid check config: {0}")]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

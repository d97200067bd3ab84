// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Monitoring severities and the status table that maps test-runner
//! statuses onto them.

use crate::error::Error;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Monitoring state, ordered from best to worst.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[default]
    Ok,
    #[serde(alias = "warning")]
    Warn,
    #[serde(alias = "critical")]
    Crit,
    Unknown,
}

impl Severity {
    /// Numeric state understood by the monitoring host (0..=3).
    pub fn code(self) -> u8 {
        match self {
            Severity::Ok => 0,
            Severity::Warn => 1,
            Severity::Crit => 2,
            Severity::Unknown => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Severity::Ok),
            1 => Some(Severity::Warn),
            2 => Some(Severity::Crit),
            3 => Some(Severity::Unknown),
            _ => None,
        }
    }

    /// Worst of a set of severities; `Ok` for an empty set.
    pub fn worst(severities: impl IntoIterator<Item = Severity>) -> Severity {
        severities.into_iter().max().unwrap_or_default()
    }
}

crate::simple_display! {
    Severity {
        Ok => "OK",
        Warn => "WARN",
        Crit => "CRIT",
        Unknown => "UNKNOWN",
    }
}

/// Severity and report label for one status string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatusEntry {
    pub severity: Severity,
    /// Text shown in reports; defaults to the severity's own label.
    #[serde(default)]
    pub label: Option<String>,
}

impl StatusEntry {
    pub fn new(severity: Severity, label: impl Into<String>) -> Self {
        Self { severity, label: Some(label.into()) }
    }

    pub fn label(&self) -> String {
        match &self.label {
            Some(label) => label.clone(),
            None => self.severity.to_string(),
        }
    }
}

/// Lookup from raw status strings (`PASS`, `FAIL`, ...) to severities.
///
/// Matching is exact. A status that is not in the table is an error, never a
/// silent default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusTable {
    entries: IndexMap<String, StatusEntry>,
}

impl Default for StatusTable {
    fn default() -> Self {
        Self::empty()
            .with_status("PASS", StatusEntry::new(Severity::Ok, "OK"))
            .with_status("FAIL", StatusEntry::new(Severity::Crit, "CRIT"))
    }
}

impl StatusTable {
    pub fn empty() -> Self {
        Self { entries: IndexMap::new() }
    }

    /// Add or replace the entry for `status`.
    pub fn with_status(mut self, status: impl Into<String>, entry: StatusEntry) -> Self {
        self.entries.insert(status.into(), entry);
        self
    }

    /// Overlay `other` on this table; entries in `other` win.
    pub fn merged(mut self, other: StatusTable) -> Self {
        self.entries.extend(other.entries);
        self
    }

    /// Resolve the status of the node called `node`.
    pub fn lookup(&self, status: &str, node: &str) -> Result<&StatusEntry, Error> {
        self.entries.get(status).ok_or_else(|| Error::unknown_status(status, node))
    }

    pub fn severity(&self, status: &str, node: &str) -> Result<Severity, Error> {
        self.lookup(status, node).map(|entry| entry.severity)
    }

    pub fn statuses(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;

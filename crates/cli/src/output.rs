// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rendering of inventory and check results.
//!
//! Text output follows the monitoring plugin convention: a status line,
//! optional performance data after `|`, then the long report.

use clap::ValueEnum;
use rmk_check::{Evaluation, InventoryItem};
use rmk_core::TimingSample;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn format_inventory(items: &[InventoryItem], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(items
            .iter()
            .map(|entry| {
                if entry.service == entry.item {
                    format!("{}\n", entry.item)
                } else {
                    format!("{}\t{}\n", entry.item, entry.service)
                }
            })
            .collect()),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(items)?)),
    }
}

pub fn format_check(eval: &Evaluation, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => {
            let (headline, details) = match eval.report.split_once('\n') {
                Some((headline, details)) => (headline, details.trim_end()),
                None => (eval.report.as_str(), ""),
            };
            let mut out = format!("{} - {headline}", eval.severity);
            if !eval.timings.is_empty() {
                out.push_str(" | ");
                out.push_str(&perfdata(&eval.timings));
            }
            out.push('\n');
            if !details.is_empty() {
                out.push_str(details);
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let obj = serde_json::json!({
                "state": eval.severity.code(),
                "severity": eval.severity,
                "report": eval.report,
                "perfdata": eval.timings,
            });
            Ok(format!("{}\n", serde_json::to_string_pretty(&obj)?))
        }
    }
}

/// `'label'=<seconds>s` entries separated by spaces.
pub fn perfdata(timings: &[TimingSample]) -> String {
    timings
        .iter()
        .map(|t| format!("'{}'={}s", t.label.replace('\'', "''"), t.seconds))
        .collect::<Vec<_>>()
        .join(" ")
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI help output specs

use crate::prelude::*;

#[test]
fn help_lists_subcommands() {
    cli().args(&["--help"]).passes().stdout_has("inventory").stdout_has("check");
}

#[test]
fn check_help_shows_usage() {
    cli().args(&["check", "--help"]).passes().stdout_has("Usage:").stdout_has("<ITEM>");
}

#[test]
fn version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    cli().exits(2);
}

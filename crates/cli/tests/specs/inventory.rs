// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Inventory specs
//!
//! Verify discovery output per level, prefixing and error reporting.

use crate::prelude::*;

#[test]
fn inventory_defaults_to_root_suite() {
    let temp = Project::empty();
    temp.file("report.json", SLEEP_SUITE);

    temp.rmk().args(&["inventory", "report.json"]).passes().stdout_eq("Testsuite\n");
}

#[test]
fn inventory_level_flag_selects_depth() {
    let temp = Project::empty();
    temp.file("report.json", TWO_TESTS);

    temp.rmk()
        .args(&["--level", "1", "inventory", "report.json"])
        .passes()
        .stdout_eq("Valid user\nBad password\n");

    temp.rmk()
        .args(&["inventory", "report.json", "-l", "2"])
        .passes()
        .stdout_eq("Open Page\nSubmit\n");
}

#[test]
fn inventory_beyond_tree_prints_nothing() {
    let temp = Project::empty();
    temp.file("report.json", SLEEP_SUITE);

    temp.rmk().args(&["-l", "7", "inventory", "report.json"]).passes().stdout_eq("");
}

#[test]
fn inventory_uses_config_file() {
    let temp = Project::empty();
    temp.file("report.json", TWO_TESTS);
    temp.file("rmk.toml", "discovery_level = 1\nservice_prefix = \"Robot%SPACE%\"\n");

    temp.rmk()
        .args(&["--config", "rmk.toml", "inventory", "report.json"])
        .passes()
        .stdout_eq("Valid user\tRobot Valid user\nBad password\tRobot Bad password\n");
}

#[test]
fn inventory_json_output() {
    let temp = Project::empty();
    temp.file("report.json", SLEEP_SUITE);

    let run = temp.rmk().args(&["--format", "json", "inventory", "report.json"]).passes();
    let value: serde_json::Value = serde_json::from_str(run.stdout()).unwrap();
    assert_eq!(value[0]["item"], "Testsuite");
    assert!(value[0]["params"].is_null());
}

#[test]
fn inventory_rejects_malformed_tree() {
    let temp = Project::empty();
    temp.file(
        "report.json",
        r#"{"kind": "test", "name": "T", "status": "PASS",
            "children": [{"kind": "suite", "name": "S", "status": "PASS"}]}"#,
    );

    temp.rmk()
        .args(&["inventory", "report.json"])
        .exits(1)
        .stderr_has("test 'T' cannot contain suite 'S'");
}

#[test]
fn inventory_missing_report() {
    let temp = Project::empty();
    temp.rmk().args(&["inventory", "absent.json"]).exits(1).stderr_has("cannot read report");
}

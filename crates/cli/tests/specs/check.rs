// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Check specs
//!
//! Verify check output, exit codes and the UNKNOWN paths.

use crate::prelude::*;

fn sleep_skipped() -> String {
    SLEEP_SUITE.replacen(
        r#""name": "Sleep", "status": "PASS""#,
        r#""name": "Sleep", "status": "SKIP""#,
        1,
    )
}

#[test]
fn passing_suite_is_ok() {
    let temp = Project::empty();
    temp.file("report.json", SLEEP_SUITE);

    temp.rmk()
        .args(&["check", "Testsuite", "report.json"])
        .passes()
        .stdout_eq("OK - Robot Suite Testsuite ran in 0.5 seconds | 'Sleep'=0.5s\nSuite Testcase 1: Sleep: OK\n");
}

#[test]
fn failing_test_exits_critical() {
    let temp = Project::empty();
    temp.file("report.json", TWO_TESTS);

    temp.rmk()
        .args(&["check", "Login", "report.json"])
        .exits(2)
        .stdout_has("CRIT - Robot Suite Login ran in 3.0 seconds")
        .stdout_has("Suite Bad password: Submit: CRIT");

    temp.rmk()
        .args(&["-l", "1", "check", "Valid user", "report.json"])
        .passes()
        .stdout_eq("OK - Robot Test Valid user ran in 1.0 seconds | 'Open Page'=1s\nOpen Page: OK\n");
}

#[test]
fn vanished_item_is_unknown() {
    let temp = Project::empty();
    temp.file("report.json", SLEEP_SUITE);

    temp.rmk()
        .args(&["check", "Gone", "report.json"])
        .exits(3)
        .stdout_eq("UNKNOWN - item 'Gone' vanished from the execution report\n")
        .stderr_has("item vanished");
}

#[test]
fn unknown_status_is_unknown() {
    let temp = Project::empty();
    temp.file("report.json", &sleep_skipped());

    temp.rmk()
        .args(&["check", "Testsuite", "report.json"])
        .exits(3)
        .stdout_has("UNKNOWN - unknown status 'SKIP' on 'Sleep'");
}

#[test]
fn configured_status_is_accepted() {
    let temp = Project::empty();
    temp.file("report.json", &sleep_skipped());
    temp.file("rmk.toml", "[statuses.SKIP]\nseverity = \"warn\"\nlabel = \"SKIPPED\"\n");

    temp.rmk()
        .args(&["-c", "rmk.toml", "check", "Testsuite", "report.json"])
        .exits(1)
        .stdout_has("WARN - Robot Suite Testsuite")
        .stdout_has("Sleep: SKIPPED");
}

#[test]
fn unreadable_config_is_unknown() {
    let temp = Project::empty();
    temp.file("report.json", SLEEP_SUITE);
    temp.file("rmk.toml", "discovery_level = \"one\"\n");

    temp.rmk()
        .args(&["-c", "rmk.toml", "check", "Testsuite", "report.json"])
        .exits(3)
        .stdout_has("UNKNOWN - invalid check config");
}

#[test]
fn check_json_output() {
    let temp = Project::empty();
    temp.file("report.json", TWO_TESTS);

    let run = temp.rmk().args(&["check", "Login", "report.json", "--format", "json"]).exits(2);
    let value: serde_json::Value = serde_json::from_str(run.stdout()).unwrap();
    assert_eq!(value["state"], 2);
    assert_eq!(value["perfdata"][1]["label"], "Submit");
    assert_eq!(value["perfdata"][1]["seconds"], 2.0);
}

#[test]
fn debug_logging_goes_to_stderr() {
    let temp = Project::empty();
    temp.file("report.json", SLEEP_SUITE);

    temp.rmk()
        .env("RMK_LOG", "debug")
        .args(&["check", "Testsuite", "report.json"])
        .passes()
        .stdout_has("OK - ")
        .stderr_has("evaluated unit");
}

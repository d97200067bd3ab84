// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for CLI specs.

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Suite → test → keyword, 0.5s everywhere, all passing.
pub const SLEEP_SUITE: &str = r#"{
  "kind": "suite", "name": "Testsuite", "status": "PASS", "start_ms": 0, "end_ms": 500,
  "children": [{
    "kind": "test", "name": "Testcase 1", "status": "PASS", "start_ms": 0, "end_ms": 500,
    "children": [
      {"kind": "keyword", "name": "Sleep", "status": "PASS", "start_ms": 0, "end_ms": 500}
    ]
  }]
}"#;

/// Suite with two tests; the second one fails.
pub const TWO_TESTS: &str = r#"{
  "kind": "suite", "name": "Login", "status": "FAIL", "elapsed_ms": 3000,
  "children": [
    {"kind": "test", "name": "Valid user", "status": "PASS", "elapsed_ms": 1000,
     "children": [{"kind": "keyword", "name": "Open Page", "status": "PASS", "elapsed_ms": 1000}]},
    {"kind": "test", "name": "Bad password", "status": "FAIL", "elapsed_ms": 2000,
     "children": [{"kind": "keyword", "name": "Submit", "status": "FAIL", "elapsed_ms": 2000}]}
  ]
}"#;

pub fn cli() -> CliBuilder {
    CliBuilder::new()
}

/// Temporary directory holding reports and configuration files.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self { dir: TempDir::new().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, rel: &str, content: &str) {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    pub fn rmk(&self) -> CliBuilder {
        let mut builder = CliBuilder::new();
        builder.cmd.current_dir(self.path());
        builder
    }
}

pub struct CliBuilder {
    cmd: Command,
}

impl CliBuilder {
    fn new() -> Self {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_rmk"));
        cmd.env_remove("RMK_LOG");
        Self { cmd }
    }

    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn passes(self) -> RunAssert {
        self.exits(0)
    }

    pub fn exits(mut self, code: i32) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        assert_eq!(
            output.status.code(),
            Some(code),
            "unexpected exit status\nstdout:\n{}\nstderr:\n{}",
            run.stdout,
            run.stderr
        );
        run
    }
}

pub struct RunAssert {
    stdout: String,
    stderr: String,
}

impl RunAssert {
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stdout_eq(&self, expected: &str) -> &Self {
        similar_asserts::assert_eq!(self.stdout, expected);
        self
    }

    pub fn stdout_has(&self, needle: &str) -> &Self {
        assert!(self.stdout.contains(needle), "stdout missing {needle:?}:\n{}", self.stdout);
        self
    }

    pub fn stderr_has(&self, needle: &str) -> &Self {
        assert!(self.stderr.contains(needle), "stderr missing {needle:?}:\n{}", self.stderr);
        self
    }
}

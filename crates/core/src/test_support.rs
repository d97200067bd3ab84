// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use crate::ExecutionNode;

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for well-formed execution trees.
///
/// Suites hold either sub-suites or tests, tests hold keywords and keywords
/// hold keywords, so flattening never drops a generated node.
pub mod strategies {
    use crate::ExecutionNode;
    use proptest::prelude::*;

    pub fn arb_status() -> impl Strategy<Value = &'static str> {
        prop_oneof![3 => Just("PASS"), 1 => Just("FAIL")]
    }

    fn arb_name() -> impl Strategy<Value = String> {
        "[A-Z][a-z]{0,6}( [0-9]{1,2})?".prop_map(String::from)
    }

    fn arb_elapsed() -> impl Strategy<Value = u64> {
        0u64..60_000
    }

    pub fn arb_keyword() -> impl Strategy<Value = ExecutionNode> {
        let leaf = (arb_name(), arb_status(), arb_elapsed())
            .prop_map(|(name, status, ms)| ExecutionNode::keyword(name, status).with_elapsed_ms(ms));
        leaf.prop_recursive(3, 24, 3, |inner| {
            (arb_name(), arb_status(), arb_elapsed(), prop::collection::vec(inner, 1..4)).prop_map(
                |(name, status, ms, kids)| {
                    ExecutionNode::keyword(name, status).with_elapsed_ms(ms).with_children(kids)
                },
            )
        })
    }

    pub fn arb_test() -> impl Strategy<Value = ExecutionNode> {
        (arb_name(), arb_status(), arb_elapsed(), prop::collection::vec(arb_keyword(), 0..4))
            .prop_map(|(name, status, ms, kids)| {
                ExecutionNode::test(name, status).with_elapsed_ms(ms).with_children(kids)
            })
    }

    pub fn arb_suite() -> impl Strategy<Value = ExecutionNode> {
        let with_tests =
            (arb_name(), arb_status(), arb_elapsed(), prop::collection::vec(arb_test(), 0..4))
                .prop_map(|(name, status, ms, tests)| {
                    ExecutionNode::suite(name, status).with_elapsed_ms(ms).with_children(tests)
                });
        with_tests.prop_recursive(2, 16, 3, |inner| {
            (arb_name(), arb_status(), arb_elapsed(), prop::collection::vec(inner, 1..4)).prop_map(
                |(name, status, ms, suites)| {
                    ExecutionNode::suite(name, status).with_elapsed_ms(ms).with_children(suites)
                },
            )
        })
    }
}

// ── Tree fixtures ───────────────────────────────────────────────────────

/// `Testsuite` → `Testcase 1` → `Sleep`, 0.5s at every level; only the
/// keyword carries `keyword_status`.
pub fn sleep_suite(keyword_status: &str) -> ExecutionNode {
    ExecutionNode::suite("Testsuite", "PASS").with_elapsed_ms(500).with_child(
        ExecutionNode::test("Testcase 1", "PASS")
            .with_elapsed_ms(500)
            .with_child(ExecutionNode::keyword("Sleep", keyword_status).with_elapsed_ms(500)),
    )
}

/// Root suite `Mkdemo` with two sub-suites, the second one failing:
///
/// ```text
/// Mkdemo
/// ├── A-Tests
/// │   ├── test-A-1 (Log, Sleep)
/// │   └── test-A-2 (Log)
/// └── B-Tests
///     └── test-B-1 (Open Browser → Click, Close Browser)
/// ```
pub fn demo_tree() -> ExecutionNode {
    let a_suite = ExecutionNode::suite("A-Tests", "PASS").with_elapsed_ms(1_500).with_children([
        ExecutionNode::test("test-A-1", "PASS").with_elapsed_ms(1_100).with_children([
            ExecutionNode::keyword("Log", "PASS").with_elapsed_ms(100),
            ExecutionNode::keyword("Sleep", "PASS").with_elapsed_ms(1_000),
        ]),
        ExecutionNode::test("test-A-2", "PASS")
            .with_elapsed_ms(400)
            .with_child(ExecutionNode::keyword("Log", "PASS").with_elapsed_ms(400)),
    ]);
    let b_suite = ExecutionNode::suite("B-Tests", "FAIL").with_elapsed_ms(2_250).with_child(
        ExecutionNode::test("test-B-1", "FAIL").with_elapsed_ms(2_250).with_children([
            ExecutionNode::keyword("Open Browser", "FAIL")
                .with_elapsed_ms(2_000)
                .with_child(ExecutionNode::keyword("Click", "FAIL").with_elapsed_ms(1_250)),
            ExecutionNode::keyword("Close Browser", "PASS").with_elapsed_ms(250),
        ]),
    );
    ExecutionNode::suite("Mkdemo", "FAIL").with_elapsed_ms(3_750).with_children([a_suite, b_suite])
}

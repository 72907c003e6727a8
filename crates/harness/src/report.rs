// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sweep results and their text/JSON rendering.

use crate::check::Mismatch;
use crate::invoke::InvokeError;
use crate::sweep::SetupError;
use serde_json::{json, Value};
use std::fmt::Write as _;

/// Exit codes for the harness binary.
pub mod exit_codes {
    /// Every fixture passed.
    pub const SUCCESS: i32 = 0;
    /// At least one mismatch or tool failure.
    pub const FAILURE: i32 = 1;
    /// Fixtures could not be found or read, and nothing else failed.
    pub const SETUP: i32 = 2;
}

/// Result of verifying one fixture.
#[derive(Debug)]
pub enum FixtureOutcome {
    Passed { antes_checked: usize },
    Setup(SetupError),
    ToolFailed(InvokeError),
    Mismatched(Vec<Mismatch>),
}

impl FixtureOutcome {
    pub fn label(&self) -> &'static str {
        match self {
            FixtureOutcome::Passed { .. } => "passed",
            FixtureOutcome::Setup(_) => "setup_error",
            FixtureOutcome::ToolFailed(_) => "tool_failed",
            FixtureOutcome::Mismatched(_) => "mismatched",
        }
    }
}

#[derive(Debug)]
pub struct FixtureReport {
    /// Fixture file name.
    pub fixture: String,
    pub outcome: FixtureOutcome,
}

/// Outcome counts across a sweep.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub passed: usize,
    pub mismatched: usize,
    pub setup: usize,
    pub tool_failed: usize,
}

#[derive(Debug, Default)]
pub struct SweepReport {
    fixtures: Vec<FixtureReport>,
}

impl SweepReport {
    pub fn new(fixtures: Vec<FixtureReport>) -> Self {
        Self { fixtures }
    }

    pub fn fixtures(&self) -> &[FixtureReport] {
        &self.fixtures
    }

    pub fn tally(&self) -> Tally {
        let mut tally = Tally::default();
        for report in &self.fixtures {
            match report.outcome {
                FixtureOutcome::Passed { .. } => tally.passed += 1,
                FixtureOutcome::Setup(_) => tally.setup += 1,
                FixtureOutcome::ToolFailed(_) => tally.tool_failed += 1,
                FixtureOutcome::Mismatched(_) => tally.mismatched += 1,
            }
        }
        tally
    }

    pub fn is_success(&self) -> bool {
        self.exit_code() == exit_codes::SUCCESS
    }

    /// Mismatches and tool failures outrank setup problems.
    pub fn exit_code(&self) -> i32 {
        let tally = self.tally();
        if tally.mismatched + tally.tool_failed > 0 {
            exit_codes::FAILURE
        } else if tally.setup > 0 {
            exit_codes::SETUP
        } else {
            exit_codes::SUCCESS
        }
    }

    /// Every mismatch across all fixtures.
    pub fn mismatches(&self) -> impl Iterator<Item = &Mismatch> {
        self.fixtures
            .iter()
            .filter_map(|report| match &report.outcome {
                FixtureOutcome::Mismatched(mismatches) => Some(mismatches),
                _ => None,
            })
            .flatten()
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for report in &self.fixtures {
            let name = &report.fixture;
            match &report.outcome {
                FixtureOutcome::Passed { antes_checked } => {
                    let _ = writeln!(out, "✓ {name} ({antes_checked} antes verified)");
                }
                FixtureOutcome::Setup(err) => {
                    let _ = writeln!(out, "! {name}: {err}");
                }
                FixtureOutcome::ToolFailed(err) => {
                    let _ = writeln!(out, "✗ {name}: tool failed: {err}");
                }
                FixtureOutcome::Mismatched(mismatches) => {
                    let count = plural(mismatches.len(), "mismatch", "mismatches");
                    let _ = writeln!(out, "✗ {name}: {count}");
                    for mismatch in mismatches {
                        let _ = writeln!(out, "    {mismatch}");
                    }
                }
            }
        }

        let tally = self.tally();
        let _ = writeln!(
            out,
            "\n{}: {} passed, {} mismatched, {}, {}",
            plural(self.fixtures.len(), "fixture", "fixtures"),
            tally.passed,
            tally.mismatched,
            plural(tally.setup, "setup error", "setup errors"),
            plural(tally.tool_failed, "tool failure", "tool failures"),
        );
        out
    }

    pub fn to_json(&self) -> Value {
        let tally = self.tally();
        let fixtures: Vec<Value> = self
            .fixtures
            .iter()
            .map(|report| {
                let mut entry = json!({
                    "fixture": report.fixture,
                    "outcome": report.outcome.label(),
                });
                match &report.outcome {
                    FixtureOutcome::Passed { antes_checked } => {
                        entry["antes_checked"] = json!(antes_checked);
                    }
                    FixtureOutcome::Setup(err) => entry["error"] = json!(err.to_string()),
                    FixtureOutcome::ToolFailed(err) => entry["error"] = json!(err.to_string()),
                    FixtureOutcome::Mismatched(mismatches) => {
                        entry["mismatches"] = json!(mismatches);
                    }
                }
                entry
            })
            .collect();

        json!({
            "fixtures": fixtures,
            "summary": {
                "passed": tally.passed,
                "mismatched": tally.mismatched,
                "setup_errors": tally.setup,
                "tool_failures": tally.tool_failed,
            },
            "exit_code": self.exit_code(),
        })
    }
}

fn plural(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {one}")
    } else {
        format!("{count} {many}")
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;

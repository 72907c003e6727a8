// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixture discovery and per-fixture verification.

use crate::ante::AnteNumber;
use crate::check::{cross_check, Mismatch};
use crate::invoke::{InvokeError, ToolCommand};
use crate::raw::build_raw_ante_map;
use crate::report::{FixtureOutcome, FixtureReport, SweepReport};
use crate::sample::{fixture_seed, pick_sample_indices};
use crate::summary::{parse_summary_output, SummaryMap, SummaryRecord};
use crate::text::{normalize_text, split_lines};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Problems with the inputs rather than with the tool's output.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("outputs directory not found: {}", .0.display())]
    MissingFixtureDir(PathBuf),

    #[error("no {pattern} fixtures found in {}", .dir.display())]
    NoFixtures { dir: PathBuf, pattern: String },

    #[error("invalid fixture pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no antes parsed from {0}")]
    NoAntesParsed(String),

    #[error("no summary lines parsed for {0}")]
    NoSummaryLines(String),
}

/// Per-fixture knobs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SweepOptions {
    /// Check at most this many antes per fixture.
    pub sample: Option<usize>,
    /// Run the tool twice and require identical output.
    pub check_idempotence: bool,
}

/// Everything needed to run a sweep.
#[derive(Clone, Debug)]
pub struct SweepPlan {
    pub tool: ToolCommand,
    pub outputs_dir: PathBuf,
    pub pattern: String,
    pub options: SweepOptions,
}

/// List fixtures in `dir` whose file name matches `pattern`, sorted.
pub fn discover_fixtures(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>, SetupError> {
    if !dir.is_dir() {
        return Err(SetupError::MissingFixtureDir(dir.to_path_buf()));
    }
    let matcher = glob::Pattern::new(pattern).map_err(|source| SetupError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let read_err = |source| SetupError::Read {
        path: dir.to_path_buf(),
        source,
    };
    let mut fixtures = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if entry
            .file_name()
            .to_str()
            .is_some_and(|name| matcher.matches(name))
        {
            fixtures.push(path);
        }
    }
    fixtures.sort();

    if fixtures.is_empty() {
        return Err(SetupError::NoFixtures {
            dir: dir.to_path_buf(),
            pattern: pattern.to_string(),
        });
    }
    Ok(fixtures)
}

/// Discover fixtures and verify each one. Discovery problems abort the
/// sweep; problems with a single fixture are recorded in its report.
pub fn run_sweep(plan: &SweepPlan) -> Result<SweepReport, SetupError> {
    let fixtures = discover_fixtures(&plan.outputs_dir, &plan.pattern)?;
    tracing::info!(
        count = fixtures.len(),
        dir = %plan.outputs_dir.display(),
        "verifying fixtures"
    );
    let reports = fixtures
        .iter()
        .map(|path| verify_fixture(&plan.tool, path, &plan.options))
        .collect();
    Ok(SweepReport::new(reports))
}

/// Verify one fixture file against the tool's summary of it.
pub fn verify_fixture(tool: &ToolCommand, path: &Path, options: &SweepOptions) -> FixtureReport {
    let fixture = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let outcome = match check_fixture(tool, path, &fixture, options) {
        Ok(outcome) => outcome,
        Err(FixtureFailure::Setup(err)) => FixtureOutcome::Setup(err),
        Err(FixtureFailure::Tool(err)) => FixtureOutcome::ToolFailed(err),
    };
    tracing::info!(fixture = %fixture, outcome = outcome.label(), "fixture verified");
    FixtureReport { fixture, outcome }
}

enum FixtureFailure {
    Setup(SetupError),
    Tool(InvokeError),
}

impl From<SetupError> for FixtureFailure {
    fn from(err: SetupError) -> Self {
        Self::Setup(err)
    }
}

impl From<InvokeError> for FixtureFailure {
    fn from(err: InvokeError) -> Self {
        Self::Tool(err)
    }
}

fn check_fixture(
    tool: &ToolCommand,
    path: &Path,
    fixture: &str,
    options: &SweepOptions,
) -> Result<FixtureOutcome, FixtureFailure> {
    let text = std::fs::read_to_string(path).map_err(|source| SetupError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = normalize_text(&text);

    let raw = build_raw_ante_map(split_lines(&text));
    if raw.is_empty() {
        return Err(SetupError::NoAntesParsed(fixture.to_string()).into());
    }

    let output = tool.run(path)?;
    let summary = parse_summary_output(&output);
    if summary.is_empty() {
        return Err(SetupError::NoSummaryLines(fixture.to_string()).into());
    }
    tracing::debug!(
        fixture,
        raw_antes = raw.len(),
        summary_antes = summary.len(),
        "parsed fixture"
    );

    let mut mismatches = Vec::new();
    if options.check_idempotence && tool.run(path)? != output {
        mismatches.push(Mismatch::non_deterministic(fixture));
    }

    let selected = select_antes(&summary, fixture, options.sample);
    let antes_checked = selected.len();
    mismatches.extend(cross_check(fixture, &raw, selected));

    if mismatches.is_empty() {
        Ok(FixtureOutcome::Passed { antes_checked })
    } else {
        Ok(FixtureOutcome::Mismatched(mismatches))
    }
}

fn select_antes<'a>(
    summary: &'a SummaryMap,
    fixture: &str,
    sample: Option<usize>,
) -> Vec<(&'a AnteNumber, &'a SummaryRecord)> {
    let entries: Vec<_> = summary.iter().collect();
    let Some(size) = sample else {
        return entries;
    };
    pick_sample_indices(entries.len(), size, fixture_seed(fixture))
        .into_iter()
        .filter_map(|index| entries.get(index).copied())
        .collect()
}

#[cfg(test)]
#[path = "sweep_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Regression harness for the ante summary tool.
//!
//! The summary tool reads an analysis dump and prints one line per ante.
//! This crate checks that those lines stay honest: it re-derives the facts
//! from the dump on its own ([`raw`]), runs the tool over the same file
//! ([`invoke`]), parses what the tool printed ([`summary`]) and compares the
//! two ([`check`]). [`sweep`] does this for every fixture in a directory.
//!
//! ```no_run
//! use ante_harness::config::HarnessConfig;
//! use ante_harness::sweep::run_sweep;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let plan = HarnessConfig::default().into_plan(&std::env::current_dir()?)?;
//! let report = run_sweep(&plan)?;
//! print!("{}", report.render_text());
//! # Ok(())
//! # }
//! ```

pub mod ante;
pub mod check;
pub mod cli;
pub mod config;
pub mod diagnostic;
pub mod invoke;
pub mod raw;
pub mod report;
pub mod sample;
pub mod summary;
pub mod sweep;
pub mod text;

pub use ante::AnteNumber;
pub use check::{cross_check, Mismatch, MismatchKind};
pub use invoke::{InvokeError, ScratchFixture, ToolCommand};
pub use raw::{build_raw_ante_map, RawAnte, RawAnteMap};
pub use report::{FixtureOutcome, FixtureReport, SweepReport};
pub use summary::{
    parse_summary_output, OversizedSlot, SummaryCard, SummaryMap, SummaryRecord,
};
pub use sweep::{discover_fixtures, run_sweep, verify_fixture, SetupError, SweepOptions, SweepPlan};

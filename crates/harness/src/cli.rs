// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line interface for the harness binary.

use crate::config::{HarnessConfig, TOOL_ENV};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Cross-check the ante summary tool against raw analysis dumps
#[derive(Parser, Debug)]
#[command(name = "ante-harness", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Config file (default: ./ante-harness.toml if present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Repository root; the tool runs from here
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Fixture directory, relative to the root
    #[arg(long, global = true, value_name = "DIR")]
    pub outputs: Option<PathBuf>,

    /// File-name glob selecting fixtures
    #[arg(long, global = true)]
    pub pattern: Option<String>,

    /// Tool command, split on whitespace (e.g. "node balatro_analysis.js")
    #[arg(long, global = true, env = TOOL_ENV)]
    pub tool: Option<String>,

    /// Check at most N antes per fixture
    #[arg(long, global = true, value_name = "N")]
    pub sample: Option<usize>,

    /// Run the tool twice per fixture and require identical output
    #[arg(long, global = true)]
    pub check_idempotence: bool,

    /// Report format
    #[arg(long, global = true, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Verify every fixture (default)
    Check,
    /// Print the raw and summary maps for one fixture as JSON
    Inspect { file: PathBuf },
    /// Print the tool's normalized output for one file
    Summarize { file: PathBuf },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Check)
    }

    /// Overlay command-line flags on top of file configuration.
    pub fn apply(&self, mut config: HarnessConfig) -> HarnessConfig {
        if let Some(root) = &self.root {
            config.root = Some(root.clone());
        }
        if let Some(outputs) = &self.outputs {
            config.outputs_dir = outputs.clone();
        }
        if let Some(pattern) = &self.pattern {
            config.pattern = pattern.clone();
        }
        if let Some(tool) = &self.tool {
            config.tool = tool.split_whitespace().map(str::to_string).collect();
        }
        if self.sample.is_some() {
            config.sample = self.sample;
        }
        if self.check_idempotence {
            config.check_idempotence = true;
        }
        config
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

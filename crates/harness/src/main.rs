// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ante harness binary entry point.

use std::path::Path;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use ante_harness::cli::{Cli, Command, ReportFormat};
use ante_harness::config::HarnessConfig;
use ante_harness::diagnostic::{print_warning, setup_error, tool_failure};
use ante_harness::raw::build_raw_ante_map;
use ante_harness::report::exit_codes;
use ante_harness::summary::parse_summary_output;
use ante_harness::sweep::run_sweep;
use ante_harness::text::{normalize_text, split_lines};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = std::env::current_dir()?;
    let config = match HarnessConfig::load_or_default(cli.config.as_deref(), &cwd) {
        Ok(config) => cli.apply(config),
        Err(e) => std::process::exit(setup_error(e)),
    };

    let code = match cli.command() {
        Command::Check => check(config, &cwd, cli.format)?,
        Command::Inspect { file } => inspect(&config, &cwd, &file)?,
        Command::Summarize { file } => summarize(&config, &cwd, &file),
    };
    std::process::exit(code)
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();
}

fn check(
    config: HarnessConfig,
    cwd: &Path,
    format: ReportFormat,
) -> Result<i32, Box<dyn std::error::Error>> {
    let plan = match config.into_plan(cwd) {
        Ok(plan) => plan,
        Err(e) => return Ok(setup_error(e)),
    };
    let report = match run_sweep(&plan) {
        Ok(report) => report,
        Err(e) => return Ok(setup_error(e)),
    };

    match format {
        ReportFormat::Text => print!("{}", report.render_text()),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report.to_json())?),
    }
    Ok(report.exit_code())
}

/// Print both views of one fixture side by side.
fn inspect(
    config: &HarnessConfig,
    cwd: &Path,
    file: &Path,
) -> Result<i32, Box<dyn std::error::Error>> {
    let path = cwd.join(file);
    let text = match std::fs::read_to_string(&path) {
        Ok(text) => normalize_text(&text),
        Err(e) => {
            return Ok(setup_error(format_args!(
                "failed to read {}: {e}",
                path.display()
            )))
        }
    };
    let raw = build_raw_ante_map(split_lines(&text));
    if raw.is_empty() {
        print_warning(format_args!("no antes parsed from {}", path.display()));
    }

    let tool = match config.tool_command(cwd) {
        Ok(tool) => tool,
        Err(e) => return Ok(setup_error(e)),
    };
    let output = match tool.run(&path) {
        Ok(output) => output,
        Err(e) => return Ok(tool_failure(e)),
    };
    let summary = parse_summary_output(&output);
    if summary.is_empty() {
        print_warning("tool printed no summary lines");
    }

    let view = serde_json::json!({
        "fixture": path.display().to_string(),
        "raw": raw,
        "summary": summary,
    });
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(exit_codes::SUCCESS)
}

fn summarize(config: &HarnessConfig, cwd: &Path, file: &Path) -> i32 {
    let tool = match config.tool_command(cwd) {
        Ok(tool) => tool,
        Err(e) => return setup_error(e),
    };
    match tool.run(&cwd.join(file)) {
        Ok(output) => {
            print!("{output}");
            exit_codes::SUCCESS
        }
        Err(e) => tool_failure(e),
    }
}

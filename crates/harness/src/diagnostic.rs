// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stderr diagnostics for the harness binary.
//!
//! Errors are reported together with the exit code they imply, so callers
//! print and pick the code in one step. Lines are colored when stderr is a
//! terminal.

use crate::report::exit_codes;
use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Severity {
    Error,
    Warning,
}

impl Severity {
    fn label(self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
        }
    }

    /// ANSI color: red for errors, yellow for warnings.
    fn color(self) -> &'static str {
        match self {
            Severity::Error => "\x1b[31m",
            Severity::Warning => "\x1b[33m",
        }
    }
}

/// Report a problem with the inputs (config, fixtures). Returns
/// [`exit_codes::SETUP`].
pub fn setup_error(msg: impl Display) -> i32 {
    emit(Severity::Error, msg);
    exit_codes::SETUP
}

/// Report a tool that could not be run or failed. Returns
/// [`exit_codes::FAILURE`].
pub fn tool_failure(msg: impl Display) -> i32 {
    emit(Severity::Error, msg);
    exit_codes::FAILURE
}

pub fn print_warning(msg: impl Display) {
    emit(Severity::Warning, msg);
}

fn emit(severity: Severity, msg: impl Display) {
    let is_tty = io::stderr().is_terminal();
    write_line(&mut io::stderr(), severity, msg, is_tty);
}

fn write_line<W: Write>(writer: &mut W, severity: Severity, msg: impl Display, is_terminal: bool) {
    let label = severity.label();
    if is_terminal {
        let _ = writeln!(writer, "{}{label}: {msg}\x1b[0m", severity.color());
    } else {
        let _ = writeln!(writer, "{label}: {msg}");
    }
}

#[cfg(test)]
#[path = "diagnostic_tests.rs"]
mod tests;

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Running the external summary tool.
//!
//! The tool is a black box invoked as `<program> [args..] <input-file>` from
//! the repository root. Each call blocks until the process exits; there is
//! no timeout and no retry.

use crate::text::normalize_text;
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::NamedTempFile;
use thiserror::Error;

/// Command line used to run the summary tool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToolCommand {
    program: String,
    args: Vec<String>,
    working_dir: PathBuf,
}

impl ToolCommand {
    /// Create a command for `program`, run from `working_dir`.
    pub fn new(program: impl Into<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: working_dir.into(),
        }
    }

    /// Build from a word list such as `["node", "balatro_analysis.js"]`.
    /// Returns `None` for an empty list.
    pub fn from_words<I, S>(words: I, working_dir: impl Into<PathBuf>) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut words = words.into_iter().map(Into::into);
        let program = words.next()?;
        Some(Self {
            program,
            args: words.collect(),
            working_dir: working_dir.into(),
        })
    }

    /// Append a fixed argument placed before the input path.
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Run the tool on `input` and return its normalized stdout.
    pub fn run(&self, input: &Path) -> Result<String, InvokeError> {
        // The child runs elsewhere, so relative inputs must be pinned first.
        let input = std::path::absolute(input).unwrap_or_else(|_| input.to_path_buf());
        tracing::debug!(tool = %self, input = %input.display(), "running summary tool");

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(&input)
            .current_dir(&self.working_dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| InvokeError::Spawn {
                tool: self.to_string(),
                source,
            })?;

        if !output.status.success() {
            return Err(InvokeError::NonZeroExit {
                tool: self.to_string(),
                input,
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8(output.stdout).map_err(|_| InvokeError::NonUtf8 {
            tool: self.to_string(),
            input: input.clone(),
        })?;
        Ok(normalize_text(&stdout))
    }

    /// Write `text` to a scratch fixture and run the tool on it.
    pub fn summarize_text(&self, text: &str) -> Result<String, InvokeError> {
        let scratch = ScratchFixture::write(text).map_err(InvokeError::Scratch)?;
        self.run(scratch.path())
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// A temporary `.txt` fixture that is removed when dropped.
#[derive(Debug)]
pub struct ScratchFixture {
    file: NamedTempFile,
}

impl ScratchFixture {
    pub fn write(text: &str) -> io::Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("ante-fixture-")
            .suffix(".txt")
            .tempfile()?;
        file.write_all(text.as_bytes())?;
        file.flush()?;
        Ok(Self { file })
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("failed to launch `{tool}`: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },

    #[error("`{tool}` exited with {} on {}: {stderr}", exit_label(.code), .input.display())]
    NonZeroExit {
        tool: String,
        input: PathBuf,
        code: Option<i32>,
        stderr: String,
    },

    #[error("`{tool}` wrote non-UTF-8 output for {}", .input.display())]
    NonUtf8 { tool: String, input: PathBuf },

    #[error("failed to write scratch fixture: {0}")]
    Scratch(#[source] io::Error),
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "a signal".to_string(),
    }
}

#[cfg(test)]
#[path = "invoke_tests.rs"]
mod tests;

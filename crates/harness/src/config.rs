// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Harness configuration loaded from `ante-harness.toml`.
//!
//! ```toml
//! tool = ["node", "balatro_analysis.js"]
//! outputs_dir = "outputs"
//! pattern = "*_analysis.txt"
//! sample = 5
//! check_idempotence = true
//! ```
//!
//! A relative `root` is resolved against the config file's directory, and
//! `root` defaults to that directory when omitted.

use crate::invoke::ToolCommand;
use crate::sweep::{SweepOptions, SweepPlan};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up in the current directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "ante-harness.toml";

pub const DEFAULT_OUTPUTS_DIR: &str = "outputs";

pub const DEFAULT_PATTERN: &str = "*_analysis.txt";

/// Environment variable holding a whitespace-separated tool command.
pub const TOOL_ENV: &str = "ANTE_HARNESS_TOOL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("tool command is empty")]
    EmptyTool,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarnessConfig {
    /// Tool command prefix; the fixture path is appended.
    pub tool: Vec<String>,
    /// Repository root and tool working directory.
    pub root: Option<PathBuf>,
    /// Fixture directory, relative to `root` unless absolute.
    pub outputs_dir: PathBuf,
    pub pattern: String,
    pub sample: Option<usize>,
    pub check_idempotence: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            tool: vec!["node".to_string(), "balatro_analysis.js".to_string()],
            root: None,
            outputs_dir: PathBuf::from(DEFAULT_OUTPUTS_DIR),
            pattern: DEFAULT_PATTERN.to_string(),
            sample: None,
            check_idempotence: false,
        }
    }
}

impl HarnessConfig {
    /// Load a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let config_dir = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        config.root = Some(match config.root.take() {
            Some(root) => config_dir.join(root),
            None => config_dir.to_path_buf(),
        });
        Ok(config)
    }

    /// Load `explicit` if given, else `ante-harness.toml` in `cwd` if it
    /// exists, else the defaults.
    pub fn load_or_default(explicit: Option<&Path>, cwd: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(&cwd.join(path));
        }
        let candidate = cwd.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "using config file");
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Resolved repository root.
    pub fn root_dir(&self, cwd: &Path) -> PathBuf {
        match &self.root {
            Some(root) => cwd.join(root),
            None => cwd.to_path_buf(),
        }
    }

    pub fn tool_command(&self, cwd: &Path) -> Result<ToolCommand, ConfigError> {
        ToolCommand::from_words(self.tool.iter().cloned(), self.root_dir(cwd))
            .ok_or(ConfigError::EmptyTool)
    }

    /// Resolve paths against `cwd` and build a sweep plan.
    pub fn into_plan(self, cwd: &Path) -> Result<SweepPlan, ConfigError> {
        let tool = self.tool_command(cwd)?;
        let outputs_dir = self.root_dir(cwd).join(&self.outputs_dir);
        Ok(SweepPlan {
            tool,
            outputs_dir,
            pattern: self.pattern,
            options: SweepOptions {
                sample: self.sample,
                check_idempotence: self.check_idempotence,
            },
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

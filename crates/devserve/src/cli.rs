// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::server::{ServeConfig, DEFAULT_PORT};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Serve a directory on 127.0.0.1
#[derive(Parser, Debug)]
#[command(name = "devserve", version, about)]
pub struct Args {
    /// Port to listen on
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Root directory to serve (default: current working directory)
    #[arg(long, value_name = "DIR")]
    pub directory: Option<PathBuf>,
}

impl Args {
    pub fn into_config(self, cwd: &Path) -> ServeConfig {
        ServeConfig {
            port: self.port,
            directory: match self.directory {
                Some(directory) => cwd.join(directory),
                None => cwd.to_path_buf(),
            },
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

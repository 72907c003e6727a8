// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for harness binary tests.

#![allow(dead_code)]
#![allow(deprecated)] // Command::cargo_bin is deprecated but still functional

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Two antes with a negative card, a plain card and a tag each.
pub const RAW_DUMP: &str = "\
==ANTE 1==
Boss: The Plant
Tags: Negative Tag, Speed Tag
Shop Queue:
1) Negative Blueprint
2) Joker
Voucher: Overstock

==ANTE 2==
Tags: Double Tag
Shop Queue:
1) Brainstorm
2) Standard Pack - Red Seal King of Hearts
";

/// A summary that agrees with [`RAW_DUMP`].
pub const GOOD_SUMMARY: &str =
    "1：🎞️Negative Tag | Blueprint‼️#1、Joker#2\n2：🖇️Double Tag | Brainstorm#1\n";

/// A temporary repository with a stub tool that prints `<fixture>.out`.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("outputs")).unwrap();
        fs::write(
            dir.path().join("ante-harness.toml"),
            "tool = [\"sh\", \"-c\", 'cat \"$1.out\"', \"sh\"]\n",
        )
        .unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `outputs/<name>` and the output the stub tool prints for it.
    pub fn fixture(&self, name: &str, raw: &str, summary: &str) -> PathBuf {
        let path = self.dir.path().join("outputs").join(name);
        fs::write(&path, raw).unwrap();
        fs::write(self.dir.path().join("outputs").join(format!("{name}.out")), summary).unwrap();
        path
    }

    /// Harness command running inside the workspace.
    pub fn harness(&self) -> Command {
        let mut cmd = Command::cargo_bin("ante-harness").unwrap();
        cmd.current_dir(self.dir.path()).env_remove("ANTE_HARNESS_TOOL");
        cmd
    }
}

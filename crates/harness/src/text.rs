// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line-ending normalization shared by fixture reading and tool output.

/// Convert CRLF and lone CR line endings to LF.
pub fn normalize_text(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Split normalized text into lines, keeping a trailing empty line if the
/// text ends with a newline.
pub fn split_lines(text: &str) -> std::str::Split<'_, char> {
    text.split('\n')
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;

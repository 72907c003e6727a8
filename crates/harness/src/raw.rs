// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Independent extraction of per-ante facts from an analysis dump.
//!
//! This parser never looks at the summary tool. It reads the dump the same
//! way a person would: an `ANTE N` header opens a record, `Tags:` lists the
//! skip tags, and `Shop Queue:` is followed by numbered `N) item` lines until
//! a blank line or a `Boss`/`Voucher` line ends the section.

use crate::ante::AnteNumber;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// `ANTE 3`, `==ANTE 3==`, `== ante 3 ==`, matched against the untrimmed line.
static ANTE_HEADER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*(?:==)?\s*ANTE\s+(\d+)(?:==)?").ok());

/// A numbered shop entry such as `4) Negative Blueprint`.
static SHOP_LINE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(\d+)\)\s+(.*)$").ok());

/// Facts recorded for one ante of the raw dump.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RawAnte {
    pub number: AnteNumber,
    pub tags: Vec<String>,
    /// Shop entry text keyed by its slot index.
    pub shop_entries: BTreeMap<u32, String>,
}

impl RawAnte {
    pub fn new(number: AnteNumber) -> Self {
        Self {
            number,
            tags: Vec::new(),
            shop_entries: BTreeMap::new(),
        }
    }
}

pub type RawAnteMap = BTreeMap<AnteNumber, RawAnte>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    None,
    Shop,
}

/// Build the raw ante map from the lines of a normalized dump.
///
/// Malformed lines are skipped; this never fails. A repeated ante header
/// starts over with a fresh record for that number.
pub fn build_raw_ante_map<'a, I>(lines: I) -> RawAnteMap
where
    I: IntoIterator<Item = &'a str>,
{
    let mut map = RawAnteMap::new();
    let (Some(header), Some(shop_line)) = (ANTE_HEADER.as_ref(), SHOP_LINE.as_ref()) else {
        return map;
    };

    let mut current: Option<AnteNumber> = None;
    let mut section = Section::None;

    for raw_line in lines {
        if let Some(caps) = header.captures(raw_line) {
            let number = AnteNumber::from(&caps[1]);
            map.insert(number.clone(), RawAnte::new(number.clone()));
            current = Some(number);
            section = Section::None;
            continue;
        }

        let Some(record) = current.as_ref().and_then(|number| map.get_mut(number)) else {
            continue;
        };

        let line = raw_line.trim();
        if line.is_empty() {
            section = Section::None;
            continue;
        }

        if line.starts_with("Shop Queue") {
            section = Section::Shop;
            continue;
        }

        if line.starts_with("Tags") {
            record.tags = parse_tag_list(line);
            section = Section::None;
            continue;
        }

        if line.starts_with("Boss") || line.starts_with("Voucher") {
            section = Section::None;
            continue;
        }

        if section == Section::Shop {
            if let Some(caps) = shop_line.captures(line) {
                if let Ok(index) = caps[1].parse::<u32>() {
                    record.shop_entries.insert(index, caps[2].to_string());
                }
            }
        }
    }

    map
}

/// Everything after the first colon, split on commas. No colon means no tags.
fn parse_tag_list(line: &str) -> Vec<String> {
    let Some((_, list)) = line.split_once(':') else {
        return Vec::new();
    };
    list.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
#[path = "raw_tests.rs"]
mod tests;

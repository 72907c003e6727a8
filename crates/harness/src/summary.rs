// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parser for the summary tool's per-ante output.
//!
//! The tool prints one line per ante, `<number>：<segments joined by |>`.
//! Tags are shown as marker glyphs and shop cards as `name[‼️]#index`
//! tokens separated by `、`.

use crate::ante::AnteNumber;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;

/// `3：...` with a full-width colon.
static SUMMARY_LINE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\s*(\d+)\s*：\s*(.*)$").ok());

/// A card token: name, optional negative marker, `#` slot index.
static CARD_ENTRY: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"([^、|#]+?)(‼️)?#(\d+)").ok());

/// Marker placed right after a card name when the card is negative.
pub const NEGATIVE_MARKER: &str = "‼️";

/// Tag marker glyphs, in inspection order, with the raw tag each stands for.
pub const TAG_MARKERS: [(&str, &str); 3] = [
    ("🎞️", "Negative Tag"),
    ("🖇️", "Double Tag"),
    ("🎟️", "Voucher Tag"),
];

/// A shop card the summary claims is available.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SummaryCard {
    pub name: String,
    pub index: u32,
    pub negative: bool,
}

/// A card token whose slot index is too large to name any shop entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct OversizedSlot {
    pub name: String,
    /// The index digits as printed.
    pub index: String,
}

/// Everything parsed from one summary line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SummaryRecord {
    pub tag_names: Vec<String>,
    pub cards: Vec<SummaryCard>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub oversized_slots: Vec<OversizedSlot>,
}

pub type SummaryMap = BTreeMap<AnteNumber, SummaryRecord>;

/// Parse the tool's normalized stdout. Lines that are not ante lines are
/// ignored; a repeated ante number keeps the last line.
pub fn parse_summary_output(text: &str) -> SummaryMap {
    let mut map = SummaryMap::new();
    let (Some(line_re), Some(card_re)) = (SUMMARY_LINE.as_ref(), CARD_ENTRY.as_ref()) else {
        return map;
    };

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        let Some(caps) = line_re.captures(line) else {
            continue;
        };
        let number = AnteNumber::from(&caps[1]);
        let rest = caps.get(2).map_or("", |m| m.as_str());

        let mut record = SummaryRecord {
            tag_names: parse_tag_names(rest),
            ..SummaryRecord::default()
        };
        parse_cards(card_re, rest, &mut record);
        map.insert(number, record);
    }

    map
}

/// Tags come from the first marker-bearing segment only; later tag
/// segments on the same line are not inspected.
fn parse_tag_names(rest: &str) -> Vec<String> {
    for segment in rest.split('|').map(str::trim) {
        if segment.contains('(') {
            continue;
        }
        let names: Vec<String> = TAG_MARKERS
            .iter()
            .filter(|(marker, _)| segment.contains(marker))
            .map(|(_, name)| (*name).to_string())
            .collect();
        if !names.is_empty() {
            return names;
        }
    }
    Vec::new()
}

fn parse_cards(card_re: &Regex, rest: &str, record: &mut SummaryRecord) {
    for caps in card_re.captures_iter(rest) {
        let name = strip_decoration(caps[1].trim());
        if name.is_empty() {
            continue;
        }
        let digits = &caps[3];
        match digits.parse() {
            Ok(index) => record.cards.push(SummaryCard {
                name: name.to_string(),
                index,
                negative: caps.get(2).is_some(),
            }),
            Err(_) => record.oversized_slots.push(OversizedSlot {
                name: name.to_string(),
                index: digits.to_string(),
            }),
        }
    }
}

/// Drop emoji and other non-letters in front of a card name. A name with
/// no ASCII letter at all is kept as printed.
fn strip_decoration(name: &str) -> &str {
    name.find(|c: char| c.is_ascii_alphabetic())
        .map_or(name, |start| &name[start..])
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;

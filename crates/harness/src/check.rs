// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cross-check of summary records against the raw ante map.
//!
//! The summary is a lossy projection of the raw dump. It may leave things
//! out, but every ante, tag and card it mentions must be backed by the raw
//! text, and a card's negative marker must agree with the shop line.

use crate::ante::AnteNumber;
use crate::raw::RawAnteMap;
use crate::summary::SummaryRecord;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// One disagreement between the summary and the raw dump.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// Fixture file name.
    pub fixture: String,
    /// Ante the mismatch belongs to; `None` for whole-file problems.
    pub ante: Option<AnteNumber>,
    #[serde(flatten)]
    pub kind: MismatchKind,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MismatchKind {
    /// The summary has an ante the raw dump does not.
    MissingAnte,
    /// A tag marker with no matching entry in the raw `Tags:` line.
    MissingTag { tag: String },
    /// A card points at a shop slot that does not exist.
    MissingShopEntry { card: String, index: u32 },
    /// A slot index too large to name any shop entry.
    SlotOutOfRange { card: String, index: String },
    /// The shop slot exists but does not name the card.
    CardNotInShopEntry { card: String, index: u32 },
    /// Negative marker disagrees with the shop line.
    NegativeFlag {
        card: String,
        index: u32,
        summary: bool,
        raw: bool,
    },
    /// Two runs of the tool on the same file printed different output.
    NonDeterministicOutput,
}

impl Mismatch {
    fn at(fixture: &str, ante: &AnteNumber, kind: MismatchKind) -> Self {
        Self {
            fixture: fixture.to_string(),
            ante: Some(ante.clone()),
            kind,
        }
    }

    pub fn non_deterministic(fixture: &str) -> Self {
        Self {
            fixture: fixture.to_string(),
            ante: None,
            kind: MismatchKind::NonDeterministicOutput,
        }
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fixture = &self.fixture;
        let ante = self.ante.as_ref().map_or("?", AnteNumber::as_str);
        match &self.kind {
            MismatchKind::MissingAnte => {
                write!(f, "Ante {ante} missing in raw data for {fixture}")
            }
            MismatchKind::MissingTag { tag } => write!(
                f,
                "Ante {ante}: expected tag '{tag}' not found in raw data ({fixture})"
            ),
            MismatchKind::MissingShopEntry { card, index } => write!(
                f,
                "Ante {ante}: no shop entry #{index} in raw data for {card} ({fixture})"
            ),
            MismatchKind::SlotOutOfRange { card, index } => write!(
                f,
                "Ante {ante}: shop entry #{index} for {card} is out of range ({fixture})"
            ),
            MismatchKind::CardNotInShopEntry { card, index } => write!(
                f,
                "Ante {ante}: shop entry #{index} does not mention {card} ({fixture})"
            ),
            MismatchKind::NegativeFlag { card, index, .. } => write!(
                f,
                "Ante {ante}: negative flag mismatch for {card} at #{index} ({fixture})"
            ),
            MismatchKind::NonDeterministicOutput => {
                write!(f, "tool output differs between runs ({fixture})")
            }
        }
    }
}

/// Check the given summary antes against the raw map, collecting every
/// mismatch instead of stopping at the first.
pub fn cross_check<'a, I>(fixture: &str, raw: &RawAnteMap, antes: I) -> Vec<Mismatch>
where
    I: IntoIterator<Item = (&'a AnteNumber, &'a SummaryRecord)>,
{
    let mut mismatches = Vec::new();

    for (number, summary) in antes {
        let Some(raw_ante) = raw.get(number) else {
            mismatches.push(Mismatch::at(fixture, number, MismatchKind::MissingAnte));
            continue;
        };

        for tag in &summary.tag_names {
            if !raw_ante.tags.contains(tag) {
                mismatches.push(Mismatch::at(
                    fixture,
                    number,
                    MismatchKind::MissingTag { tag: tag.clone() },
                ));
            }
        }

        for slot in &summary.oversized_slots {
            mismatches.push(Mismatch::at(
                fixture,
                number,
                MismatchKind::SlotOutOfRange {
                    card: slot.name.clone(),
                    index: slot.index.clone(),
                },
            ));
        }

        for card in &summary.cards {
            let Some(shop_line) = raw_ante.shop_entries.get(&card.index) else {
                mismatches.push(Mismatch::at(
                    fixture,
                    number,
                    MismatchKind::MissingShopEntry {
                        card: card.name.clone(),
                        index: card.index,
                    },
                ));
                continue;
            };

            if !mentions(shop_line, &card.name) {
                mismatches.push(Mismatch::at(
                    fixture,
                    number,
                    MismatchKind::CardNotInShopEntry {
                        card: card.name.clone(),
                        index: card.index,
                    },
                ));
                continue;
            }

            let raw_negative = mentions_negative(shop_line, &card.name);
            if raw_negative != card.negative {
                mismatches.push(Mismatch::at(
                    fixture,
                    number,
                    MismatchKind::NegativeFlag {
                        card: card.name.clone(),
                        index: card.index,
                        summary: card.negative,
                        raw: raw_negative,
                    },
                ));
            }
        }
    }

    mismatches
}

/// Whole-word occurrence of `name` in `line`.
pub fn mentions(line: &str, name: &str) -> bool {
    matches_pattern(line, &format!(r"\b{}\b", regex::escape(name)))
}

/// Whole-word occurrence of `Negative <name>` in `line`.
pub fn mentions_negative(line: &str, name: &str) -> bool {
    matches_pattern(line, &format!(r"\bNegative\s+{}\b", regex::escape(name)))
}

fn matches_pattern(line: &str, pattern: &str) -> bool {
    Regex::new(pattern).is_ok_and(|re| re.is_match(line))
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;

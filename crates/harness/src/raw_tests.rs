// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use proptest::prelude::*;
use yare::parameterized;

const DUMP: &str = "\
Seed: ABCD1234

==ANTE 1==
Boss: The Plant
Voucher: Overstock
Tags: Negative Tag, Double Tag
Shop Queue:
1) Joker
2) Negative Blueprint
3) Tarot Card
Packs:
Buffoon Pack - Brainstorm, Joker

==ANTE 2==
Boss: The Ox
Voucher: Clearance Sale
Tags: Voucher Tag
Shop Queue:
1) Brainstorm
Boss: late boss line
2) Not collected
";

fn build(text: &str) -> RawAnteMap {
    build_raw_ante_map(text.split('\n'))
}

fn ante<'a>(map: &'a RawAnteMap, number: &str) -> &'a RawAnte {
    map.get(&AnteNumber::from(number))
        .unwrap_or_else(|| panic!("ante {number} missing"))
}

#[test]
fn collects_tags_and_shop_entries() {
    let map = build(DUMP);
    assert_eq!(map.len(), 2);

    let first = ante(&map, "1");
    assert_eq!(first.tags, vec!["Negative Tag", "Double Tag"]);
    assert_eq!(first.shop_entries.len(), 3);
    assert_eq!(first.shop_entries[&2], "Negative Blueprint");
}

#[test]
fn boss_line_ends_shop_collection() {
    let map = build(DUMP);
    let second = ante(&map, "2");
    assert_eq!(second.tags, vec!["Voucher Tag"]);
    assert_eq!(second.shop_entries.len(), 1);
    assert_eq!(second.shop_entries[&1], "Brainstorm");
}

#[test]
fn pack_lines_are_not_shop_entries() {
    let map = build(DUMP);
    let first = ante(&map, "1");
    assert!(first.shop_entries.values().all(|entry| !entry.contains("Buffoon")));
}

#[parameterized(
    framed = { "==ANTE 4==" },
    bare = { "ANTE 4" },
    lowercase = { "ante 4" },
    spaced = { "  == Ante 4 ==" },
    trailing_text = { "==ANTE 4== (boss blind)" },
)]
fn recognizes_header_forms(header: &str) {
    let map = build(header);
    assert!(map.contains_key(&AnteNumber::from("4")), "header {header:?} not recognized");
}

#[parameterized(
    no_space = { "ANTE4" },
    no_number = { "==ANTE ==" },
    prefixed = { "PREANTE 4" },
)]
fn rejects_non_headers(line: &str) {
    assert!(build(line).is_empty(), "line {line:?} should not open an ante");
}

#[test]
fn blank_line_ends_shop_but_keeps_ante_open() {
    let map = build("ANTE 1\nShop Queue:\n1) Joker\n\n2) Blueprint\nTags: Double Tag\n");
    let first = ante(&map, "1");
    assert_eq!(first.shop_entries.keys().copied().collect::<Vec<_>>(), vec![1]);
    assert_eq!(first.tags, vec!["Double Tag"]);
}

#[test]
fn lines_before_first_header_are_ignored() {
    let map = build("Tags: Negative Tag\nShop Queue:\n1) Joker\nANTE 1\n");
    let first = ante(&map, "1");
    assert!(first.tags.is_empty());
    assert!(first.shop_entries.is_empty());
}

#[test]
fn tags_line_without_colon_clears_tags() {
    let map = build("ANTE 1\nTags: Double Tag\nTags\n");
    assert!(ante(&map, "1").tags.is_empty());
}

#[test]
fn tags_split_after_first_colon_only() {
    let map = build("ANTE 1\nTags: Odd: Tag, , Double Tag\n");
    assert_eq!(ante(&map, "1").tags, vec!["Odd: Tag", "Double Tag"]);
}

#[test]
fn shop_line_requires_space_after_paren() {
    let map = build("ANTE 1\nShop Queue:\n1)Joker\n2)  Blueprint\n");
    let first = ante(&map, "1");
    assert_eq!(first.shop_entries.len(), 1);
    assert_eq!(first.shop_entries[&2], "Blueprint");
}

#[test]
fn repeated_header_starts_a_fresh_record() {
    let map = build("ANTE 1\nTags: Double Tag\nANTE 1\nShop Queue:\n1) Joker\n");
    let first = ante(&map, "1");
    assert!(first.tags.is_empty());
    assert_eq!(first.shop_entries.len(), 1);
}

#[test]
fn header_resets_shop_section() {
    let map = build("ANTE 1\nShop Queue:\n1) Joker\nANTE 2\n1) Blueprint\n");
    assert!(ante(&map, "2").shop_entries.is_empty());
}

#[test]
fn no_header_yields_empty_map() {
    assert!(build("Tags: Negative Tag\nShop Queue:\n1) Joker\n").is_empty());
}

proptest! {
    #[test]
    fn text_without_ante_word_parses_to_nothing(lines in proptest::collection::vec("[b-zB-Z0-9 :),=]{0,24}", 0..24)) {
        let map = build_raw_ante_map(lines.iter().map(String::as_str));
        prop_assert!(map.is_empty());
    }

    #[test]
    fn every_header_number_becomes_a_key(numbers in proptest::collection::vec(1u32..500, 1..12)) {
        let text: String = numbers.iter().map(|n| format!("==ANTE {n}==\nShop Queue:\n1) Joker\n\n")).collect();
        let map = build(&text);
        for n in &numbers {
            prop_assert!(map.contains_key(&AnteNumber::from(n.to_string())));
        }
    }
}

// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use proptest::prelude::*;
use yare::parameterized;

#[parameterized(
    empty = { "", 0x811c_9dc5 },
    single_letter = { "a", 0xe40c_292c },
    fixture_name = { "seed_analysis.txt", 0xcc40_53b1 },
)]
fn fnv1a_reference_values(name: &str, expected: u32) {
    assert_eq!(fixture_seed(name), expected);
}

#[parameterized(
    seeded = { 10, 3, 1, &[0, 1, 3] },
    zero_seed_falls_back = { 10, 3, 0, &[0, 2, 4] },
    named_fixture = { 8, 4, 0xcc40_53b1, &[2, 3, 5, 6] },
    small = { 5, 2, 0xcc40_53b1, &[2, 4] },
)]
fn reference_samples(total: usize, size: usize, seed: u32, expected: &[usize]) {
    assert_eq!(pick_sample_indices(total, size, seed), expected);
}

#[test]
fn nothing_to_pick_from() {
    assert!(pick_sample_indices(0, 20, 7).is_empty());
}

#[test]
fn oversized_sample_takes_everything() {
    assert_eq!(pick_sample_indices(4, 20, 7), vec![0, 1, 2, 3]);
}

proptest! {
    #[test]
    fn sample_is_sorted_unique_and_bounded(total in 0usize..200, size in 0usize..50, seed: u32) {
        let picked = pick_sample_indices(total, size, seed);
        prop_assert_eq!(picked.len(), size.min(total));
        prop_assert!(picked.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(picked.iter().all(|&i| i < total));
    }

    #[test]
    fn sample_is_deterministic(total in 0usize..100, size in 0usize..30, seed: u32) {
        prop_assert_eq!(
            pick_sample_indices(total, size, seed),
            pick_sample_indices(total, size, seed)
        );
    }
}

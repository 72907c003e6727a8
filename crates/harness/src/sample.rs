// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Deterministic ante sampling for large fixtures.
//!
//! The seed is derived from the fixture file name, so a given fixture is
//! always checked against the same antes and failures reproduce.

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;
const FALLBACK_SEED: u32 = 0x1234_5678;

/// 32-bit FNV-1a over the UTF-16 code units of `name`.
pub fn fixture_seed(name: &str) -> u32 {
    name.encode_utf16().fold(FNV_OFFSET_BASIS, |hash, unit| {
        (hash ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}

/// Linear congruential generator (Numerical Recipes constants).
struct Lcg(u32);

impl Lcg {
    fn next(&mut self) -> u32 {
        self.0 = self.0.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.0
    }
}

/// Pick up to `size` of `total` indices, shuffled by `seed`, returned in
/// ascending order.
pub fn pick_sample_indices(total: usize, size: usize, seed: u32) -> Vec<usize> {
    if total == 0 {
        return Vec::new();
    }
    let mut rng = Lcg(if seed == 0 { FALLBACK_SEED } else { seed });
    let mut indices: Vec<usize> = (0..total).collect();
    for i in (1..total).rev() {
        let j = rng.next() as usize % (i + 1);
        indices.swap(i, j);
    }
    indices.truncate(size.min(total));
    indices.sort_unstable();
    indices
}

#[cfg(test)]
#[path = "sample_tests.rs"]
mod tests;

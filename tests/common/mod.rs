//! Shared helpers for integration tests: a seeded noisy channel and log setup

#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};

/// Surface codec `log` output when tests run with RUST_LOG set
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

pub fn random_message(rng: &mut StdRng, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.random()).collect()
}

/// Corrupt `count` distinct positions with nonzero XOR masks.
///
/// Returns the noisy codeword and the corrupted positions in ascending order.
pub fn corrupt(codeword: &[u8], count: usize, rng: &mut StdRng) -> (Vec<u8>, Vec<usize>) {
    let mut noisy = codeword.to_vec();
    let mut positions = sample(rng, codeword.len(), count).into_vec();
    positions.sort_unstable();

    for &pos in &positions {
        noisy[pos] ^= rng.random_range(1..=255u8);
    }

    (noisy, positions)
}

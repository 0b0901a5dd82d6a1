//! Benchmark comparing bottom-up DP against the memoization engine.
//!
//! Run with: cargo run -p algo-kit --example dp_cache_benchmark --release
//!
//! Set `RUST_LOG=algo_kit=debug` to see the library's own events.
//!
//! This benchmark compares, on generated string pairs:
//! - Bottom-up LCS and edit distance
//! - The same recurrences on `DpCache` with a `Vec2DBackend`
//! - LCS on `DpCache` with a `HashMapBackend`

use std::time::Instant;

use algo_kit::dynamic::dp_cache::{DpCache, DpProblem, HashMapBackend};
use algo_kit::dynamic::{edit_distance, edit_distance_memoized, lcs_length, lcs_memoized};
use anyhow::{Result, ensure};
use tracing_subscriber::EnvFilter;

/// LCS problem keyed by `(i, j)` prefix lengths
struct LcsProblem<'a> {
    a: &'a [u8],
    b: &'a [u8],
}

impl DpProblem<(usize, usize), usize> for LcsProblem<'_> {
    fn deps(&self, pos: &(usize, usize)) -> Vec<(usize, usize)> {
        let (i, j) = *pos;
        if i == 0 || j == 0 {
            vec![]
        } else if self.a[i - 1] == self.b[j - 1] {
            vec![(i - 1, j - 1)]
        } else {
            vec![(i - 1, j), (i, j - 1)]
        }
    }

    fn compute(&self, pos: &(usize, usize), deps: Vec<usize>) -> usize {
        let (i, j) = *pos;
        if i == 0 || j == 0 {
            0
        } else if self.a[i - 1] == self.b[j - 1] {
            deps[0] + 1
        } else {
            deps[0].max(deps[1])
        }
    }
}

/// Generate a pseudo-random lowercase string
fn generate_random_string(seed: u64, len: usize) -> Vec<u8> {
    let mut rng = seed;
    (0..len)
        .map(|_| {
            rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1);
            b'a' + ((rng >> 32) % 26) as u8
        })
        .collect()
}

const STR_LEN: usize = 200;
const NUM_PAIRS: usize = 50;

fn timed<F: FnMut(&[u8], &[u8]) -> usize>(
    label: &str,
    pairs: &[(Vec<u8>, Vec<u8>)],
    mut f: F,
) -> Vec<usize> {
    let start = Instant::now();
    let results = pairs.iter().map(|(a, b)| f(a, b)).collect();
    println!("{label:<28} {:?}", start.elapsed());
    results
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("DP Cache Benchmark");
    println!("==================\n");

    let pairs: Vec<(Vec<u8>, Vec<u8>)> = (0..NUM_PAIRS)
        .map(|i| {
            let a = generate_random_string(42 + i as u64, STR_LEN);
            let b = generate_random_string(1000 + i as u64, STR_LEN);
            (a, b)
        })
        .collect();
    println!("Testing {NUM_PAIRS} string pairs of {STR_LEN} chars\n");

    println!("=== Longest common subsequence ===");
    let bottom_up = timed("Bottom-up (two rows):", &pairs, lcs_length);
    let vec2d = timed("DpCache + Vec2DBackend:", &pairs, lcs_memoized);
    let hashmap = timed("DpCache + HashMapBackend:", &pairs, |a, b| {
        let cache = DpCache::with_problem(HashMapBackend::new(), LcsProblem { a, b });
        cache.get(&(a.len(), b.len()))
    });
    ensure!(bottom_up == vec2d, "Vec2DBackend LCS disagrees with bottom-up");
    ensure!(bottom_up == hashmap, "HashMapBackend LCS disagrees with bottom-up");

    println!("\n=== Edit distance ===");
    let bottom_up = timed("Bottom-up (two rows):", &pairs, edit_distance);
    let memoized = timed("DpCache + Vec2DBackend:", &pairs, edit_distance_memoized);
    ensure!(bottom_up == memoized, "memoized edit distance disagrees with bottom-up");

    println!("\nAll results match.");
    Ok(())
}

//! [Rabin-Karp]: rolling-hash substring search.
//!
//! [Rabin-Karp]: https://en.wikipedia.org/wiki/Rabin%E2%80%93Karp_algorithm

use crate::config::RollingHash;
use crate::error::AlgoError;

/// Rabin-Karp with the default [`RollingHash`] parameters.
///
/// ```
/// use algo_kit::pattern::rabin_karp;
///
/// assert_eq!(rabin_karp(b"GEEKS FOR GEEKS", b"GEEK"), vec![0, 10]);
/// ```
pub fn rabin_karp<T>(text: &[T], pattern: &[T]) -> Vec<usize>
where
    T: Copy + Eq + Into<u64>,
{
    search(text, pattern, RollingHash::default())
}

/// Rabin-Karp with explicit hash parameters.
///
/// Every window whose hash equals the pattern's is compared element by
/// element before it is reported, so a weak hash only costs time, never
/// correctness. Expected *O*(*n* + *m*) time, *O*(*n* · *m*) when every
/// window collides.
///
/// Returns [`AlgoError::InvalidHashModulus`] for a modulus below 2.
pub fn rabin_karp_with<T>(
    text: &[T],
    pattern: &[T],
    hash: RollingHash,
) -> Result<Vec<usize>, AlgoError>
where
    T: Copy + Eq + Into<u64>,
{
    if hash.modulus < 2 {
        return Err(AlgoError::InvalidHashModulus(hash.modulus));
    }
    Ok(search(text, pattern, hash))
}

fn search<T>(text: &[T], pattern: &[T], hash: RollingHash) -> Vec<usize>
where
    T: Copy + Eq + Into<u64>,
{
    let (n, m) = (text.len(), pattern.len());
    if m == 0 || m > n {
        return Vec::new();
    }

    // Products of two residues stay below 2^128.
    let modulus = u128::from(hash.modulus);
    let base = u128::from(hash.base) % modulus;
    let digit = |x: T| {
        let value: u64 = x.into();
        u128::from(value) % modulus
    };
    let push = |h: u128, x: T| (h * base + digit(x)) % modulus;

    // Weight of the leading symbol in a window: base^(m-1).
    let lead = (1..m).fold(1 % modulus, |acc, _| acc * base % modulus);

    let target = pattern.iter().fold(0, |h, &x| push(h, x));
    let mut window = text[..m].iter().fold(0, |h, &x| push(h, x));

    let mut matches = Vec::new();
    let mut collisions = 0usize;
    for start in 0..=n - m {
        if window == target {
            if text[start..start + m] == *pattern {
                matches.push(start);
            } else {
                collisions += 1;
            }
        }
        if start + m < n {
            let without = (window + modulus - digit(text[start]) * lead % modulus) % modulus;
            window = push(without, text[start + m]);
        }
    }

    if collisions > 0 {
        tracing::trace!(collisions, "rabin-karp hash collisions rejected");
    }
    matches
}

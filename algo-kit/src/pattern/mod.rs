//! Exact pattern matching over slices.
//!
//! Every single-pattern matcher returns all start positions of `pattern` in
//! `text`, overlapping ones included, in ascending order. An empty pattern
//! matches nowhere. Strings are searched through `as_bytes()`, giving byte
//! offsets, or as collected `Vec<char>`, giving character offsets.
//!
//! | Matcher     | Preprocessing | Search (worst)  |
//! |-------------|---------------|-----------------|
//! | naive       | none          | *O*(*nm*)       |
//! | Rabin-Karp  | *O*(*m*)      | *O*(*nm*)       |
//! | KMP         | *O*(*m*)      | *O*(*n*)        |
//! | Z           | *O*(*n + m*)  | *O*(*n + m*)    |
//! | Boyer-Moore | *O*(*m*)      | *O*(*nm*)       |

mod aho_corasick;
mod boyer_moore;
mod kmp;
mod naive;
mod rabin_karp;
mod z;

pub use aho_corasick::{AhoCorasick, Match};
pub use boyer_moore::boyer_moore;
pub use kmp::{kmp_search, prefix_function};
pub use naive::naive_search;
pub use rabin_karp::{rabin_karp, rabin_karp_with};
pub use z::{z_array, z_search};

//! Classical Algorithms Library
//!
//! Textbook searching, sorting, optimisation, string-matching, backtracking
//! and matrix routines behind small, strongly typed APIs. The containers
//! they build on live in [`algo_collections`], re-exported here as
//! [`collections`].
//!
//! # Overview
//!
//! - [`searching`]: linear and sorted-array searches, graph BFS/DFS
//! - [`sorting`]: comparison, divide-and-conquer and distribution sorts
//! - [`dynamic`]: knapsack, LCS, LIS, edit distance, coin change and
//!   matrix-chain, plus the [`dynamic::dp_cache`] memoization engine
//! - [`greedy`]: scheduling, Huffman coding, coin change, spanning trees
//!   and Dijkstra
//! - [`pattern`]: single- and multi-pattern matching
//! - [`backtracking`]: a generic search engine and the puzzles built on it
//! - [`matrix`]: dense matrices and grid search
//!
//! # Quick Example
//!
//! ```
//! use algo_kit::collections::Graph;
//! use algo_kit::greedy::dijkstra;
//! use algo_kit::searching::{binary_search, SortedSlice};
//! use algo_kit::sorting::merge_sort;
//!
//! let mut values = vec![5, 2, 9, 1];
//! merge_sort(&mut values);
//! let sorted = SortedSlice::new(&values)?;
//! assert_eq!(binary_search(&sorted, &9), Some(3));
//!
//! let g = Graph::from_edges(3, true, [(0, 1, 4), (1, 2, 1), (0, 2, 7)])?;
//! assert_eq!(dijkstra(&g, 0)?.distance(2), Some(5));
//! # Ok::<(), algo_kit::AlgoError>(())
//! ```
//!
//! # Errors
//!
//! Inputs that violate a routine's preconditions (an unsorted slice, a
//! negative Dijkstra weight, a zero coin, a ragged matrix) are rejected
//! with an [`AlgoError`]. Results that can legitimately be absent (a search
//! miss, an unreachable amount, an unsolvable puzzle) are `Option::None`.
//!
//! # Configuration
//!
//! Routines with more than one sensible policy take a value from
//! [`config`] in their `*_with` variant; the plain variant uses its
//! `Default`.
//!
//! # Logging
//!
//! The library emits [`tracing`] events (rejected inputs at `warn`, solver
//! summaries at `debug`, inner-loop detail at `trace`) and never installs a
//! subscriber.

pub mod backtracking;
pub mod config;
pub mod dynamic;
mod error;
pub mod greedy;
pub mod matrix;
pub mod pattern;
pub mod searching;
pub mod sorting;

pub use algo_collections as collections;
pub use error::AlgoError;

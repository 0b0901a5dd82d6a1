//! Memoization engine for top-down dynamic programming.
//!
//! A problem describes, for each index, which other indices it depends on
//! and how to combine their values. [`DpCache`] resolves those dependencies
//! lazily and computes every index at most once.
//!
//! # Backend Types
//!
//! - [`VecBackend`]: dense `usize` indices, grows on demand
//! - [`Vec2DBackend`]: runtime-sized 2D grid for `(row, col)` indices
//! - [`HashMapBackend`]: any hashable index type
//!
//! # Warning: Cycle Behavior
//!
//! **The cache does NOT detect cycles.** Dependencies must form a DAG;
//! a cycle recurses until the stack overflows.
//!
//! # Example: 2D Grid Backend
//!
//! ```rust
//! use algo_kit::dynamic::dp_cache::{DpCache, DpProblem, Vec2DBackend};
//!
//! struct GridPaths;
//!
//! impl DpProblem<(usize, usize), u64> for GridPaths {
//!     fn deps(&self, pos: &(usize, usize)) -> Vec<(usize, usize)> {
//!         let (r, c) = *pos;
//!         if r == 0 && c == 0 { vec![] }
//!         else if r == 0 { vec![(0, c - 1)] }
//!         else if c == 0 { vec![(r - 1, 0)] }
//!         else { vec![(r - 1, c), (r, c - 1)] }
//!     }
//!     fn compute(&self, _pos: &(usize, usize), deps: Vec<u64>) -> u64 {
//!         if deps.is_empty() { 1 } else { deps.iter().sum() }
//!     }
//! }
//!
//! let cache = DpCache::with_problem(Vec2DBackend::new(5, 5), GridPaths);
//! assert_eq!(cache.get(&(4, 4)), 70); // C(8,4) = 70 paths
//! ```

mod backend;
mod cache;
mod problem;

pub use backend::{Backend, HashMapBackend, Vec2DBackend, VecBackend};
pub use cache::DpCache;
pub use problem::{ClosureProblem, DpProblem};

#[cfg(test)]
mod tests;

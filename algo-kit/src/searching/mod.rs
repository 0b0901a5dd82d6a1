//! Searching over arrays and graphs.
//!
//! Sorted-array searches take a [`SortedSlice`], which checks the ordering
//! once up front; [`linear_search`] works on any slice.

mod binary;
mod graph;
mod linear;
mod probing;
mod sorted;

pub use binary::{binary_search, binary_search_recursive, lower_bound, upper_bound};
pub use graph::{bfs, bfs_distances, dfs, dfs_recursive, shortest_path_unweighted};
pub use linear::linear_search;
pub use probing::{
    exponential_search, fibonacci_search, interpolation_search, jump_search, ternary_search,
};
pub use sorted::SortedSlice;

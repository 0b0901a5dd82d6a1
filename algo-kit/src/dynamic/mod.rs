//! Dynamic programming solvers.
//!
//! Bottom-up solvers fill a table in an order that resolves every
//! dependency before use. The `_memoized` variants express the same
//! recurrences top-down on [`dp_cache::DpCache`].

pub mod dp_cache;

mod coin_change;
mod knapsack;
mod matrix_chain;
mod sequence;

pub use coin_change::{coin_change_min, coin_change_ways};
pub(crate) use coin_change::fewest_coins_table;
pub use knapsack::{KnapsackSolution, knapsack_01, knapsack_01_table, unbounded_knapsack};
pub use matrix_chain::{MatrixChainPlan, matrix_chain, matrix_chain_memoized};
pub use sequence::{
    edit_distance, edit_distance_memoized, lcs, lcs_length, lcs_memoized, lis, lis_length,
    lis_length_fast,
};

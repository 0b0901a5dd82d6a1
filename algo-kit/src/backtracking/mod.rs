//! Exhaustive search with pruning.
//!
//! Problems implement [`Backtrack`] (list choices, validate, apply, undo)
//! and are driven by [`solve_all`], [`solve_first`] or
//! [`solve_first_iterative`]. Every driver honours a
//! [`SearchLimits`](crate::config::SearchLimits) node budget and reports
//! what it did in a [`SearchReport`].
//!
//! | Problem | Entry point | Result |
//! |---|---|---|
//! | Permutations | [`permutations`] | all `n!` orderings |
//! | Power set | [`subsets`] | all `2^n` subsets |
//! | k-combinations | [`combinations`] | all `C(n, k)` selections |
//! | Subset sum | [`subset_sum`] | first matching selection |
//! | N-queens | [`n_queens`], [`n_queens_count`] | all placements / their count |
//! | Sudoku | [`Sudoku::solve`] | first solution |
//! | Hamiltonian path | [`hamiltonian_path`] | first path |
//! | Word search | [`word_search`], [`find_word`] | first cell chain |
//! | Knight's tour | [`knights_tour`] | first tour, Warnsdorff ordered |
//!
//! Mazes are solved by [`Maze::find_path`](crate::matrix::Maze::find_path),
//! which also runs on this engine.

mod combinatorics;
mod engine;
mod paths;
mod queens;
mod sudoku;

pub use combinatorics::{combinations, permutations, subset_sum, subsets};
pub use engine::{
    Backtrack, Control, Outcome, SearchReport, solve_all, solve_first, solve_first_iterative,
};
pub use paths::{
    find_word, hamiltonian_path, hamiltonian_path_with, knights_tour, knights_tour_with, word_search,
};
pub use queens::{n_queens, n_queens_count};
pub use sudoku::Sudoku;

//! Dense matrices and grid search.
//!
//! [`Matrix`] stores its cells row-major in a single `Vec` and is indexed
//! by `(row, col)`. Shape transforms return new matrices except
//! [`Matrix::rotate_in_place`] and [`Matrix::set_zeroes`], which mutate.
//! [`Maze`] and [`count_islands`] treat a grid as a 4-connected graph.

mod dense;
mod maze;
mod multiply;

pub use dense::Matrix;
pub use maze::{Maze, count_islands};
pub use multiply::strassen_multiply;

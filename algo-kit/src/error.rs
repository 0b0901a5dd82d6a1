//! Error types for the algorithm library
//!
//! Only precondition violations are errors. Routines that can legitimately
//! come up empty (a search miss, an unreachable coin amount, a puzzle with
//! no solution) return `Option::None` instead.

use algo_collections::CollectionError;
use thiserror::Error;

/// Error type for rejected inputs
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AlgoError {
    /// Input that must be sorted ascending has a descent at `index`
    #[error("Input is not sorted: element {index} is less than its predecessor")]
    Unsorted { index: usize },
    /// Dijkstra was given an edge with a negative weight
    #[error("Negative edge weight {weight} on edge {from} -> {to}")]
    NegativeWeight { from: usize, to: usize, weight: i64 },
    /// A counting-sort key exceeds the declared maximum
    #[error("Key {key} outside the allowed range 0..={max}")]
    KeyOutOfRange { key: usize, max: usize },
    /// A coin system contains a zero denomination
    #[error("Invalid coin denomination {0}")]
    InvalidDenomination(usize),
    /// A coin amount needs a table larger than can be allocated
    #[error("Amount {0} is too large to tabulate")]
    AmountTooLarge(usize),
    /// Greedy coin selection does not produce an optimal exact answer
    #[error(
        "Greedy coin change is not applicable for {target}: greedy uses {greedy:?} coins, optimum is {optimal:?}"
    )]
    GreedyInapplicable {
        target: usize,
        greedy: Option<usize>,
        optimal: Option<usize>,
    },
    /// Two parallel input slices have different lengths
    #[error("Length mismatch: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
    /// Matrix or grid dimensions do not line up
    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    /// The operation needs a square matrix
    #[error("Matrix is not square ({rows}x{cols})")]
    NotSquare { rows: usize, cols: usize },
    /// A grid coordinate lies outside the grid
    #[error("Cell ({row}, {col}) is outside the grid")]
    CellOutOfBounds { row: usize, col: usize },
    /// A bucket-sort key is not finite or lies outside `[0, 1)`
    #[error("Bucket sort key {0} is outside [0, 1)")]
    InvalidBucketKey(f64),
    /// The rolling-hash modulus is too small to be useful
    #[error("Rolling hash modulus must be greater than 1, got {0}")]
    InvalidHashModulus(u64),
    /// The operation needs an undirected graph
    #[error("Operation requires an undirected graph")]
    DirectedGraph,
    /// Puzzle or maze text could not be parsed
    #[error("Invalid puzzle: {0}")]
    InvalidPuzzle(String),
    /// Error raised by a container
    #[error("Collection error: {0}")]
    Collection(#[from] CollectionError),
}

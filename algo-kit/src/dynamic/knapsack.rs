//! 0/1 and unbounded knapsack.

use crate::error::AlgoError;

/// Optimal 0/1 knapsack packing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnapsackSolution {
    /// Total value of the chosen items
    pub value: u64,
    /// Indices of the chosen items, ascending
    pub items: Vec<usize>,
}

fn check_lengths(weights: &[usize], values: &[u64]) -> Result<(), AlgoError> {
    if weights.len() != values.len() {
        return Err(AlgoError::LengthMismatch {
            left: weights.len(),
            right: values.len(),
        });
    }
    Ok(())
}

/// Best total value of a subset of items whose weights fit in `capacity`,
/// each item used at most once.
///
/// Uses a single row indexed by capacity, filled in descending order so
/// that an item is never reused within its own pass. *O*(*n* · *W*) time,
/// *O*(*W*) space.
///
/// ```
/// use algo_kit::dynamic::knapsack_01;
///
/// assert_eq!(knapsack_01(&[1, 3, 4, 5], &[1, 4, 5, 7], 7).unwrap(), 9);
/// ```
pub fn knapsack_01(weights: &[usize], values: &[u64], capacity: usize) -> Result<u64, AlgoError> {
    check_lengths(weights, values)?;

    let mut best = vec![0u64; capacity + 1];
    for (&w, &v) in weights.iter().zip(values) {
        if w > capacity {
            continue;
        }
        for c in (w..=capacity).rev() {
            best[c] = best[c].max(best[c - w] + v);
        }
    }
    Ok(best[capacity])
}

/// 0/1 knapsack with the full item-prefix by capacity table, so the chosen
/// items can be recovered. *O*(*n* · *W*) time and space.
pub fn knapsack_01_table(
    weights: &[usize],
    values: &[u64],
    capacity: usize,
) -> Result<KnapsackSolution, AlgoError> {
    check_lengths(weights, values)?;
    let n = weights.len();
    tracing::trace!(rows = n + 1, cols = capacity + 1, "knapsack table");

    // table[i][c]: best value using the first i items within capacity c
    let mut table = vec![vec![0u64; capacity + 1]; n + 1];
    for i in 1..=n {
        let (w, v) = (weights[i - 1], values[i - 1]);
        for c in 0..=capacity {
            let skip = table[i - 1][c];
            table[i][c] = if w <= c {
                skip.max(table[i - 1][c - w] + v)
            } else {
                skip
            };
        }
    }

    let mut items = Vec::new();
    let mut c = capacity;
    for i in (1..=n).rev() {
        if table[i][c] != table[i - 1][c] {
            items.push(i - 1);
            c -= weights[i - 1];
        }
    }
    items.reverse();

    Ok(KnapsackSolution {
        value: table[n][capacity],
        items,
    })
}

/// Best total value when every item may be taken any number of times.
///
/// The capacity row is filled in ascending order, so an item can be reused
/// within its own pass. A zero-weight item contributes its value once.
pub fn unbounded_knapsack(
    weights: &[usize],
    values: &[u64],
    capacity: usize,
) -> Result<u64, AlgoError> {
    check_lengths(weights, values)?;

    let mut best = vec![0u64; capacity + 1];
    for (&w, &v) in weights.iter().zip(values) {
        if w > capacity {
            continue;
        }
        for c in w..=capacity {
            best[c] = best[c].max(best[c - w] + v);
        }
    }
    Ok(best[capacity])
}

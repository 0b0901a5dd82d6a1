//! Matrix-chain multiplication order.

use super::dp_cache::{DpCache, DpProblem, Vec2DBackend};

/// Cheapest way to multiply a chain of matrices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixChainPlan {
    /// Number of scalar multiplications
    pub cost: u64,
    /// Parenthesization with matrices named `A1`, `A2`, ...,
    /// e.g. `((A1A2)A3)`
    pub order: String,
}

/// Interval DP over `(i, j)` ranges by increasing length.
///
/// Matrix `k` (0-based) has shape `dims[k] x dims[k + 1]`, so `dims` holds
/// one more entry than there are matrices. Returns `None` when `dims`
/// describes no matrix at all. Costs saturate at `u64::MAX`. *O*(*n³*)
/// time.
///
/// ```
/// use algo_kit::dynamic::matrix_chain;
///
/// let plan = matrix_chain(&[10, 30, 5, 60]).unwrap();
/// assert_eq!(plan.cost, 4500);
/// assert_eq!(plan.order, "((A1A2)A3)");
/// ```
pub fn matrix_chain(dims: &[u64]) -> Option<MatrixChainPlan> {
    let n = dims.len().checked_sub(1).filter(|&n| n > 0)?;
    tracing::trace!(matrices = n, "matrix chain table");

    // cost[i][j]: cheapest product of matrices i..=j; split[i][j]: its last split
    let mut cost = vec![vec![0u64; n]; n];
    let mut split = vec![vec![0usize; n]; n];
    for len in 2..=n {
        for i in 0..=n - len {
            let j = i + len - 1;
            cost[i][j] = u64::MAX;
            for k in i..j {
                let candidate = cost[i][k]
                    .saturating_add(cost[k + 1][j])
                    .saturating_add(dims[i].saturating_mul(dims[k + 1]).saturating_mul(dims[j + 1]));
                if candidate < cost[i][j] {
                    cost[i][j] = candidate;
                    split[i][j] = k;
                }
            }
        }
    }

    let mut order = String::new();
    write_order(&split, 0, n - 1, &mut order);
    Some(MatrixChainPlan {
        cost: cost[0][n - 1],
        order,
    })
}

fn write_order(split: &[Vec<usize>], i: usize, j: usize, out: &mut String) {
    if i == j {
        out.push('A');
        out.push_str(&(i + 1).to_string());
        return;
    }
    let k = split[i][j];
    out.push('(');
    write_order(split, i, k, out);
    write_order(split, k + 1, j, out);
    out.push(')');
}

struct ChainProblem<'a> {
    dims: &'a [u64],
}

impl DpProblem<(usize, usize), u64> for ChainProblem<'_> {
    fn deps(&self, range: &(usize, usize)) -> Vec<(usize, usize)> {
        let (i, j) = *range;
        (i..j).flat_map(|k| [(i, k), (k + 1, j)]).collect()
    }

    fn compute(&self, range: &(usize, usize), deps: Vec<u64>) -> u64 {
        let (i, j) = *range;
        deps.chunks_exact(2)
            .zip(i..j)
            .map(|(pair, k)| {
                pair[0]
                    .saturating_add(pair[1])
                    .saturating_add(
                        self.dims[i]
                            .saturating_mul(self.dims[k + 1])
                            .saturating_mul(self.dims[j + 1]),
                    )
            })
            .min()
            .unwrap_or(0)
    }
}

/// Minimum cost only, top-down on [`DpCache`].
pub fn matrix_chain_memoized(dims: &[u64]) -> Option<u64> {
    let n = dims.len().checked_sub(1).filter(|&n| n > 0)?;
    let cache = DpCache::with_problem(Vec2DBackend::new(n, n), ChainProblem { dims });
    Some(cache.get(&(0, n - 1)))
}

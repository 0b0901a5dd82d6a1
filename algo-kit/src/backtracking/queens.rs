use super::engine::{Backtrack, Control, solve_all};
use crate::config::SearchLimits;

/// One queen per row; `cols[row]` is the column of that row's queen.
struct Queens {
    n: usize,
    cols: Vec<usize>,
    col_used: Vec<bool>,
    diag_used: Vec<bool>,
    anti_used: Vec<bool>,
}

impl Queens {
    fn new(n: usize) -> Self {
        let diagonals = (2 * n).saturating_sub(1);
        Self {
            n,
            cols: Vec::with_capacity(n),
            col_used: vec![false; n],
            diag_used: vec![false; diagonals],
            anti_used: vec![false; diagonals],
        }
    }

    fn row(&self) -> usize {
        self.cols.len()
    }

    fn mark(&mut self, col: usize, used: bool) {
        let row = self.row();
        self.col_used[col] = used;
        self.diag_used[row + col] = used;
        self.anti_used[row + self.n - 1 - col] = used;
    }
}

impl Backtrack for Queens {
    type Choice = usize;

    fn is_complete(&self) -> bool {
        self.row() == self.n
    }

    fn choices(&self) -> Vec<usize> {
        (0..self.n).collect()
    }

    fn is_valid(&self, &col: &usize) -> bool {
        let row = self.row();
        !self.col_used[col] && !self.diag_used[row + col] && !self.anti_used[row + self.n - 1 - col]
    }

    fn apply(&mut self, &col: &usize) {
        self.mark(col, true);
        self.cols.push(col);
    }

    fn undo(&mut self, &col: &usize) {
        self.cols.pop();
        self.mark(col, false);
    }
}

/// Every placement of `n` mutually non-attacking queens on an `n x n`
/// board. Each solution lists the queen's column for rows `0..n`; solutions
/// come in lexicographic order.
///
/// There is one (empty) placement for `n == 0`, and none for `n` of 2 or 3.
///
/// ```
/// use algo_kit::backtracking::n_queens;
///
/// assert_eq!(n_queens(4), vec![vec![1, 3, 0, 2], vec![2, 0, 3, 1]]);
/// ```
pub fn n_queens(n: usize) -> Vec<Vec<usize>> {
    let mut problem = Queens::new(n);
    let mut solutions = Vec::new();
    solve_all(&mut problem, SearchLimits::unlimited(), |p| {
        solutions.push(p.cols.clone());
        Control::Continue
    });
    solutions
}

/// Number of `n`-queens placements, without materialising them.
pub fn n_queens_count(n: usize) -> u64 {
    let mut problem = Queens::new(n);
    let report = solve_all(&mut problem, SearchLimits::unlimited(), |_| Control::Continue);
    tracing::debug!(n, nodes = report.nodes_visited, solutions = report.solutions, "n-queens");
    report.solutions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attacks(a: (usize, usize), b: (usize, usize)) -> bool {
        a.0 == b.0 || a.1 == b.1 || a.0.abs_diff(b.0) == a.1.abs_diff(b.1)
    }

    #[test]
    fn test_known_counts() {
        let expected = [1, 1, 0, 0, 2, 10, 4, 40, 92];
        for (n, &count) in expected.iter().enumerate() {
            assert_eq!(n_queens_count(n), count, "n={n}");
        }
    }

    #[test]
    fn test_eight_queens_are_safe() {
        let solutions = n_queens(8);
        assert_eq!(solutions.len(), 92);
        for cols in &solutions {
            let queens: Vec<_> = cols.iter().copied().enumerate().collect();
            for (i, &a) in queens.iter().enumerate() {
                for &b in &queens[i + 1..] {
                    assert!(!attacks(a, b), "{cols:?}");
                }
            }
        }
        assert_eq!(solutions[0], vec![0, 4, 7, 5, 2, 6, 1, 3]);
    }

    #[test]
    fn test_trivial_boards() {
        assert_eq!(n_queens(0), vec![Vec::<usize>::new()]);
        assert_eq!(n_queens(1), vec![vec![0]]);
        assert!(n_queens(3).is_empty());
    }
}

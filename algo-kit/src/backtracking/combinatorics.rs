//! Enumerations built on the [`Backtrack`] engine.

use super::engine::{Backtrack, Control, solve_all, solve_first};
use crate::config::SearchLimits;

struct Permutations {
    len: usize,
    used: Vec<bool>,
    order: Vec<usize>,
}

impl Backtrack for Permutations {
    type Choice = usize;

    fn is_complete(&self) -> bool {
        self.order.len() == self.len
    }

    fn choices(&self) -> Vec<usize> {
        (0..self.len).filter(|&i| !self.used[i]).collect()
    }

    fn apply(&mut self, &i: &usize) {
        self.used[i] = true;
        self.order.push(i);
    }

    fn undo(&mut self, &i: &usize) {
        self.used[i] = false;
        self.order.pop();
    }
}

/// Every ordering of `items`, `n!` in total, in lexicographic order of
/// positions. Equal items are not deduplicated.
///
/// ```
/// use algo_kit::backtracking::permutations;
///
/// assert_eq!(
///     permutations(&[1, 2, 3]),
///     vec![[1, 2, 3], [1, 3, 2], [2, 1, 3], [2, 3, 1], [3, 1, 2], [3, 2, 1]],
/// );
/// ```
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let mut problem = Permutations {
        len: items.len(),
        used: vec![false; items.len()],
        order: Vec::with_capacity(items.len()),
    };
    let mut result = Vec::new();
    solve_all(&mut problem, SearchLimits::unlimited(), |p| {
        result.push(p.order.iter().map(|&i| items[i].clone()).collect());
        Control::Continue
    });
    result
}

/// Include/exclude decisions over item positions, taken in order.
struct Subsets {
    len: usize,
    taken: Vec<bool>,
}

impl Backtrack for Subsets {
    type Choice = bool;

    fn is_complete(&self) -> bool {
        self.taken.len() == self.len
    }

    fn choices(&self) -> Vec<bool> {
        vec![false, true]
    }

    fn apply(&mut self, &take: &bool) {
        self.taken.push(take);
    }

    fn undo(&mut self, _take: &bool) {
        self.taken.pop();
    }
}

/// The power set of `items`: `2^n` subsets, each keeping the original
/// relative order. The empty subset comes first and the full set last.
pub fn subsets<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let mut problem = Subsets {
        len: items.len(),
        taken: Vec::with_capacity(items.len()),
    };
    let mut result = Vec::with_capacity(1 << items.len().min(20));
    solve_all(&mut problem, SearchLimits::unlimited(), |p| {
        let subset = items
            .iter()
            .zip(&p.taken)
            .filter(|&(_, &take)| take)
            .map(|(item, _)| item.clone())
            .collect();
        result.push(subset);
        Control::Continue
    });
    result
}

/// Strictly increasing index selections of a fixed size.
struct Combinations {
    len: usize,
    k: usize,
    chosen: Vec<usize>,
}

impl Combinations {
    fn next_index(&self) -> usize {
        self.chosen.last().map_or(0, |&last| last + 1)
    }
}

impl Backtrack for Combinations {
    type Choice = usize;

    fn is_complete(&self) -> bool {
        self.chosen.len() == self.k
    }

    fn choices(&self) -> Vec<usize> {
        // leave room for the picks still to come
        let still_needed = self.k - self.chosen.len();
        let last_start = (self.len + 1).saturating_sub(still_needed);
        (self.next_index()..last_start).collect()
    }

    fn apply(&mut self, &i: &usize) {
        self.chosen.push(i);
    }

    fn undo(&mut self, _i: &usize) {
        self.chosen.pop();
    }
}

/// Every `k`-element selection of `items`, in lexicographic order of
/// positions. Returns `C(n, k)` selections, none when `k > n`, and the
/// single empty selection when `k == 0`.
///
/// ```
/// use algo_kit::backtracking::combinations;
///
/// assert_eq!(
///     combinations(&['a', 'b', 'c', 'd'], 2),
///     vec![
///         vec!['a', 'b'], vec!['a', 'c'], vec!['a', 'd'],
///         vec!['b', 'c'], vec!['b', 'd'], vec!['c', 'd'],
///     ],
/// );
/// ```
pub fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    if k > items.len() {
        return Vec::new();
    }
    let mut problem = Combinations {
        len: items.len(),
        k,
        chosen: Vec::with_capacity(k),
    };
    let mut result = Vec::new();
    solve_all(&mut problem, SearchLimits::unlimited(), |p| {
        result.push(p.chosen.iter().map(|&i| items[i].clone()).collect());
        Control::Continue
    });
    result
}

struct SubsetSum<'a> {
    items: &'a [u64],
    target: u64,
    sum: u64,
    chosen: Vec<usize>,
}

impl Backtrack for SubsetSum<'_> {
    type Choice = usize;

    fn is_complete(&self) -> bool {
        self.sum == self.target
    }

    fn choices(&self) -> Vec<usize> {
        let start = self.chosen.last().map_or(0, |&last| last + 1);
        (start..self.items.len()).collect()
    }

    fn is_valid(&self, &i: &usize) -> bool {
        self.sum
            .checked_add(self.items[i])
            .is_some_and(|sum| sum <= self.target)
    }

    fn apply(&mut self, &i: &usize) {
        self.sum += self.items[i];
        self.chosen.push(i);
    }

    fn undo(&mut self, &i: &usize) {
        self.sum -= self.items[i];
        self.chosen.pop();
    }
}

/// Finds positions of items summing exactly to `target`.
///
/// Branches whose running sum would overshoot the target are pruned, so
/// the items must be non-negative. A target of zero is met by the empty
/// selection.
///
/// ```
/// use algo_kit::backtracking::subset_sum;
///
/// let items = [3, 34, 4, 12, 5, 2];
/// let picked = subset_sum(&items, 9).unwrap();
/// assert_eq!(picked.iter().map(|&i| items[i]).sum::<u64>(), 9);
/// assert_eq!(subset_sum(&items, 30), None);
/// ```
pub fn subset_sum(items: &[u64], target: u64) -> Option<Vec<usize>> {
    let mut problem = SubsetSum {
        items,
        target,
        sum: 0,
        chosen: Vec::new(),
    };
    let report = solve_first(&mut problem, SearchLimits::unlimited());
    tracing::debug!(target, nodes = report.nodes_visited, found = report.found(), "subset sum");
    report.found().then_some(problem.chosen)
}

//! Generic depth-first search with undo.

use crate::config::SearchLimits;

/// A problem searchable by extend / validate / undo.
///
/// The engine only ever calls [`apply`](Self::apply) with a choice that
/// [`is_valid`](Self::is_valid) accepted in the current state, and calls
/// [`undo`](Self::undo) with the same choice, in reverse order, before
/// trying a sibling.
pub trait Backtrack {
    /// One extension of a partial solution.
    type Choice;

    /// Returns true when the current state is a full solution. Complete
    /// states are reported and never extended.
    fn is_complete(&self) -> bool;

    /// Candidate extensions of the current state, in the order to try them.
    fn choices(&self) -> Vec<Self::Choice>;

    /// Returns false to prune `choice` before it is applied.
    fn is_valid(&self, _choice: &Self::Choice) -> bool {
        true
    }

    /// Extends the current state with `choice`.
    fn apply(&mut self, choice: &Self::Choice);

    /// Reverts a previous [`apply`](Self::apply) of `choice`.
    fn undo(&mut self, choice: &Self::Choice);
}

/// Returned by a solution callback to continue or end the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Stop,
}

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The callback stopped the search at a solution, which is left applied
    /// to the problem state
    Found,
    /// The whole search tree was explored
    Exhausted,
    /// The node budget ran out; the problem state is unwound to the root
    BudgetSpent,
}

/// Summary of a finished search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    pub outcome: Outcome,
    /// Complete states reported to the callback
    pub solutions: u64,
    /// Search-tree nodes visited, the root included
    pub nodes_visited: u64,
}

impl SearchReport {
    /// Returns true if the search stopped at a solution.
    pub fn found(&self) -> bool {
        self.outcome == Outcome::Found
    }
}

struct Search<F> {
    limits: SearchLimits,
    nodes_visited: u64,
    solutions: u64,
    on_solution: F,
}

impl<F> Search<F> {
    fn new(limits: SearchLimits, on_solution: F) -> Self {
        Self {
            limits,
            nodes_visited: 0,
            solutions: 0,
            on_solution,
        }
    }

    fn report(&self, outcome: Outcome) -> SearchReport {
        SearchReport {
            outcome,
            solutions: self.solutions,
            nodes_visited: self.nodes_visited,
        }
    }

    /// Counts a node, or returns `Some(BudgetSpent)` if the budget is gone.
    /// Reports the node to the callback if it is complete.
    fn visit<P>(&mut self, problem: &P) -> Option<Outcome>
    where
        P: Backtrack,
        F: FnMut(&P) -> Control,
    {
        if self.limits.exhausted(self.nodes_visited) {
            return Some(Outcome::BudgetSpent);
        }
        self.nodes_visited += 1;

        if problem.is_complete() {
            self.solutions += 1;
            if (self.on_solution)(problem) == Control::Stop {
                return Some(Outcome::Found);
            }
        }
        None
    }

    fn recurse<P>(&mut self, problem: &mut P) -> Option<Outcome>
    where
        P: Backtrack,
        F: FnMut(&P) -> Control,
    {
        if let Some(outcome) = self.visit(problem) {
            return Some(outcome);
        }
        if problem.is_complete() {
            return None;
        }

        for choice in problem.choices() {
            if !problem.is_valid(&choice) {
                continue;
            }
            problem.apply(&choice);
            match self.recurse(problem) {
                Some(Outcome::Found) => return Some(Outcome::Found),
                Some(outcome) => {
                    problem.undo(&choice);
                    return Some(outcome);
                }
                None => problem.undo(&choice),
            }
        }
        None
    }
}

/// Visits every solution, calling `on_solution` for each, until the
/// callback returns [`Control::Stop`], the tree is exhausted or the node
/// budget runs out. Recursion depth equals the depth of the search tree.
///
/// ```
/// use algo_kit::backtracking::{solve_all, Backtrack, Control, Outcome};
/// use algo_kit::config::SearchLimits;
///
/// /// Binary strings of a fixed length with no two adjacent ones.
/// struct NoAdjacentOnes { bits: Vec<u8>, len: usize }
///
/// impl Backtrack for NoAdjacentOnes {
///     type Choice = u8;
///     fn is_complete(&self) -> bool { self.bits.len() == self.len }
///     fn choices(&self) -> Vec<u8> { vec![0, 1] }
///     fn is_valid(&self, bit: &u8) -> bool { !(*bit == 1 && self.bits.last() == Some(&1)) }
///     fn apply(&mut self, bit: &u8) { self.bits.push(*bit); }
///     fn undo(&mut self, _bit: &u8) { self.bits.pop(); }
/// }
///
/// let mut problem = NoAdjacentOnes { bits: Vec::new(), len: 4 };
/// let report = solve_all(&mut problem, SearchLimits::unlimited(), |_| Control::Continue);
/// assert_eq!(report.outcome, Outcome::Exhausted);
/// assert_eq!(report.solutions, 8);
/// ```
pub fn solve_all<P, F>(problem: &mut P, limits: SearchLimits, on_solution: F) -> SearchReport
where
    P: Backtrack,
    F: FnMut(&P) -> Control,
{
    let mut search = Search::new(limits, on_solution);
    let outcome = search.recurse(problem).unwrap_or(Outcome::Exhausted);
    let report = search.report(outcome);
    tracing::trace!(
        nodes = report.nodes_visited,
        solutions = report.solutions,
        "backtracking search finished"
    );
    report
}

/// Stops at the first solution, leaving it applied to `problem`.
pub fn solve_first<P: Backtrack>(problem: &mut P, limits: SearchLimits) -> SearchReport {
    solve_all(problem, limits, |_| Control::Stop)
}

struct Frame<C> {
    choices: Vec<C>,
    next: usize,
    applied: Option<usize>,
}

/// [`solve_first`] on an explicit stack of choice frames instead of the
/// call stack, for search trees deeper than the thread stack allows.
///
/// Visits nodes in the same order as the recursive driver, so both report
/// the same solution and node count.
pub fn solve_first_iterative<P: Backtrack>(problem: &mut P, limits: SearchLimits) -> SearchReport {
    let mut search = Search::new(limits, |_: &P| Control::Stop);

    if let Some(outcome) = search.visit(problem) {
        return search.report(outcome);
    }
    if problem.is_complete() {
        return search.report(Outcome::Exhausted);
    }

    let mut stack = vec![Frame {
        choices: problem.choices(),
        next: 0,
        applied: None,
    }];

    while let Some(frame) = stack.last_mut() {
        if let Some(i) = frame.applied.take() {
            problem.undo(&frame.choices[i]);
        }

        while frame.next < frame.choices.len() && !problem.is_valid(&frame.choices[frame.next]) {
            frame.next += 1;
        }
        if frame.next == frame.choices.len() {
            stack.pop();
            continue;
        }

        let i = frame.next;
        frame.next += 1;
        problem.apply(&frame.choices[i]);
        frame.applied = Some(i);

        match search.visit(problem) {
            Some(Outcome::Found) => return search.report(Outcome::Found),
            Some(outcome) => {
                // Unwind every applied choice, innermost first.
                while let Some(frame) = stack.pop() {
                    if let Some(i) = frame.applied {
                        problem.undo(&frame.choices[i]);
                    }
                }
                return search.report(outcome);
            }
            None if problem.is_complete() => {}
            None => stack.push(Frame {
                choices: problem.choices(),
                next: 0,
                applied: None,
            }),
        }
    }

    search.report(Outcome::Exhausted)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sequences over `0..width` of a fixed length with strictly
    /// increasing elements.
    struct Increasing {
        seq: Vec<usize>,
        len: usize,
        width: usize,
        undone: usize,
    }

    impl Increasing {
        fn new(len: usize, width: usize) -> Self {
            Self {
                seq: Vec::new(),
                len,
                width,
                undone: 0,
            }
        }
    }

    impl Backtrack for Increasing {
        type Choice = usize;

        fn is_complete(&self) -> bool {
            self.seq.len() == self.len
        }

        fn choices(&self) -> Vec<usize> {
            (0..self.width).collect()
        }

        fn is_valid(&self, choice: &usize) -> bool {
            self.seq.last().is_none_or(|last| choice > last)
        }

        fn apply(&mut self, choice: &usize) {
            self.seq.push(*choice);
        }

        fn undo(&mut self, _choice: &usize) {
            self.seq.pop();
            self.undone += 1;
        }
    }

    #[test]
    fn test_solve_all_counts_solutions() {
        // C(5, 3) increasing triples
        let mut problem = Increasing::new(3, 5);
        let mut seen = Vec::new();
        let report = solve_all(&mut problem, SearchLimits::unlimited(), |p| {
            seen.push(p.seq.clone());
            Control::Continue
        });
        assert_eq!(report.outcome, Outcome::Exhausted);
        assert_eq!(report.solutions, 10);
        assert_eq!(seen.first(), Some(&vec![0, 1, 2]));
        assert_eq!(seen.last(), Some(&vec![2, 3, 4]));
        assert!(problem.seq.is_empty());
    }

    #[test]
    fn test_solve_first_keeps_solution_applied() {
        let mut problem = Increasing::new(3, 5);
        let report = solve_first(&mut problem, SearchLimits::unlimited());
        assert!(report.found());
        assert_eq!(problem.seq, vec![0, 1, 2]);
        assert_eq!(report.nodes_visited, 4);
    }

    #[test]
    fn test_iterative_matches_recursive() {
        for (len, width) in [(0, 3), (1, 1), (3, 5), (4, 6), (4, 3)] {
            let mut recursive = Increasing::new(len, width);
            let mut iterative = Increasing::new(len, width);
            let a = solve_first(&mut recursive, SearchLimits::unlimited());
            let b = solve_first_iterative(&mut iterative, SearchLimits::unlimited());
            assert_eq!(a, b, "len={len} width={width}");
            assert_eq!(recursive.seq, iterative.seq);
        }
    }

    #[test]
    fn test_exhausted_without_solution() {
        // no strictly increasing sequence of length 4 over 0..3
        let mut problem = Increasing::new(4, 3);
        let report = solve_first_iterative(&mut problem, SearchLimits::unlimited());
        assert_eq!(report.outcome, Outcome::Exhausted);
        assert_eq!(report.solutions, 0);
        assert!(problem.seq.is_empty());
    }

    #[test]
    fn test_budget_unwinds_state() {
        let limits = SearchLimits::default().with_max_nodes(3);

        let mut problem = Increasing::new(5, 5);
        let report = solve_all(&mut problem, limits, |_| Control::Continue);
        assert_eq!(report.outcome, Outcome::BudgetSpent);
        assert_eq!(report.nodes_visited, 3);
        assert!(problem.seq.is_empty());

        let mut problem = Increasing::new(5, 5);
        let report = solve_first_iterative(&mut problem, limits);
        assert_eq!(report.outcome, Outcome::BudgetSpent);
        assert_eq!(report.nodes_visited, 3);
        assert!(problem.seq.is_empty());
        assert_eq!(problem.undone, 3);
    }

    #[test]
    fn test_zero_budget_visits_nothing() {
        let mut problem = Increasing::new(1, 1);
        let report = solve_first(&mut problem, SearchLimits::default().with_max_nodes(0));
        assert_eq!(report.outcome, Outcome::BudgetSpent);
        assert_eq!(report.nodes_visited, 0);
    }
}

//! Path-finding puzzles: Hamiltonian paths, grid word search and the
//! knight's tour.

use algo_collections::Graph;

use super::engine::{Backtrack, Outcome, SearchReport, solve_first};
use crate::config::SearchLimits;
use crate::error::AlgoError;

struct HamiltonianPath<'a> {
    graph: &'a Graph,
    path: Vec<usize>,
    visited: Vec<bool>,
}

impl Backtrack for HamiltonianPath<'_> {
    type Choice = usize;

    fn is_complete(&self) -> bool {
        self.path.len() == self.graph.vertex_count()
    }

    fn choices(&self) -> Vec<usize> {
        match self.path.last() {
            None => (0..self.graph.vertex_count()).collect(),
            Some(&last) => self.graph.neighbors(last).iter().map(|e| e.to).collect(),
        }
    }

    fn is_valid(&self, &v: &usize) -> bool {
        !self.visited[v]
    }

    fn apply(&mut self, &v: &usize) {
        self.visited[v] = true;
        self.path.push(v);
    }

    fn undo(&mut self, &v: &usize) {
        self.visited[v] = false;
        self.path.pop();
    }
}

/// Finds a path visiting every vertex exactly once, trying start vertices
/// in increasing order. Directed graphs follow edge direction. A graph with
/// no vertices has no path.
///
/// ```
/// use algo_kit::backtracking::hamiltonian_path;
/// use algo_kit::collections::Graph;
///
/// let g = Graph::from_edges(4, false, [(0, 1, 1), (0, 2, 1), (0, 3, 1)])?;
/// assert_eq!(hamiltonian_path(&g), None);
///
/// let g = Graph::from_edges(4, false, [(1, 0, 1), (0, 2, 1), (2, 3, 1)])?;
/// assert_eq!(hamiltonian_path(&g), Some(vec![1, 0, 2, 3]));
/// # Ok::<(), algo_kit::AlgoError>(())
/// ```
pub fn hamiltonian_path(graph: &Graph) -> Option<Vec<usize>> {
    hamiltonian_path_with(graph, SearchLimits::unlimited()).0
}

/// [`hamiltonian_path`] under a node budget. The report tells a search
/// that ran out of budget ([`Outcome::BudgetSpent`]) apart from a graph
/// with no path ([`Outcome::Exhausted`]).
pub fn hamiltonian_path_with(
    graph: &Graph,
    limits: SearchLimits,
) -> (Option<Vec<usize>>, SearchReport) {
    if graph.vertex_count() == 0 {
        let report = SearchReport {
            outcome: Outcome::Exhausted,
            solutions: 0,
            nodes_visited: 0,
        };
        return (None, report);
    }
    let mut problem = HamiltonianPath {
        graph,
        path: Vec::with_capacity(graph.vertex_count()),
        visited: vec![false; graph.vertex_count()],
    };
    let report = solve_first(&mut problem, limits);
    tracing::debug!(
        vertices = graph.vertex_count(),
        nodes = report.nodes_visited,
        outcome = ?report.outcome,
        "hamiltonian path search"
    );
    (report.found().then_some(problem.path), report)
}

const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];

struct WordSearch<'a> {
    grid: &'a [Vec<char>],
    word: Vec<char>,
    path: Vec<(usize, usize)>,
    used: Vec<Vec<bool>>,
}

impl WordSearch<'_> {
    fn letter_at(&self, row: usize, col: usize) -> Option<char> {
        self.grid.get(row)?.get(col).copied()
    }
}

impl Backtrack for WordSearch<'_> {
    type Choice = (usize, usize);

    fn is_complete(&self) -> bool {
        self.path.len() == self.word.len()
    }

    fn choices(&self) -> Vec<(usize, usize)> {
        let wanted = self.word[self.path.len()];
        let cells: Vec<(usize, usize)> = match self.path.last() {
            None => self
                .grid
                .iter()
                .enumerate()
                .flat_map(|(r, row)| (0..row.len()).map(move |c| (r, c)))
                .collect(),
            Some(&(r, c)) => ORTHOGONAL
                .iter()
                .filter_map(|&(dr, dc)| {
                    Some((r.checked_add_signed(dr)?, c.checked_add_signed(dc)?))
                })
                .collect(),
        };
        cells
            .into_iter()
            .filter(|&(r, c)| self.letter_at(r, c) == Some(wanted))
            .collect()
    }

    fn is_valid(&self, &(r, c): &(usize, usize)) -> bool {
        !self.used[r][c]
    }

    fn apply(&mut self, &(r, c): &(usize, usize)) {
        self.used[r][c] = true;
        self.path.push((r, c));
    }

    fn undo(&mut self, &(r, c): &(usize, usize)) {
        self.used[r][c] = false;
        self.path.pop();
    }
}

/// Finds `word` in `grid` as a chain of horizontally or vertically adjacent
/// cells, each used at most once, returning the `(row, col)` of each letter.
/// Rows may differ in length. The empty word is found with an empty path.
pub fn find_word(grid: &[Vec<char>], word: &str) -> Option<Vec<(usize, usize)>> {
    let mut problem = WordSearch {
        grid,
        word: word.chars().collect(),
        path: Vec::new(),
        used: grid.iter().map(|row| vec![false; row.len()]).collect(),
    };
    let report = solve_first(&mut problem, SearchLimits::unlimited());
    tracing::trace!(word, nodes = report.nodes_visited, "word search");
    report.found().then_some(problem.path)
}

/// Returns true if [`find_word`] finds `word` in `grid`.
///
/// ```
/// use algo_kit::backtracking::word_search;
///
/// let grid: Vec<Vec<char>> = ["ABCE", "SFCS", "ADEE"]
///     .iter()
///     .map(|row| row.chars().collect())
///     .collect();
/// assert!(word_search(&grid, "ABCCED"));
/// assert!(word_search(&grid, "SEE"));
/// assert!(!word_search(&grid, "ABCB"));
/// ```
pub fn word_search(grid: &[Vec<char>], word: &str) -> bool {
    find_word(grid, word).is_some()
}

const KNIGHT_MOVES: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

struct KnightsTour {
    n: usize,
    board: Vec<Vec<Option<usize>>>,
    path: Vec<(usize, usize)>,
}

impl KnightsTour {
    fn open_moves(&self, (r, c): (usize, usize)) -> impl Iterator<Item = (usize, usize)> + '_ {
        KNIGHT_MOVES.iter().filter_map(move |&(dr, dc)| {
            let to = (r.checked_add_signed(dr)?, c.checked_add_signed(dc)?);
            (to.0 < self.n && to.1 < self.n && self.board[to.0][to.1].is_none()).then_some(to)
        })
    }
}

impl Backtrack for KnightsTour {
    type Choice = (usize, usize);

    fn is_complete(&self) -> bool {
        self.path.len() == self.n * self.n
    }

    /// Warnsdorff's rule: squares with the fewest onward moves first.
    fn choices(&self) -> Vec<(usize, usize)> {
        let Some(&here) = self.path.last() else {
            return Vec::new();
        };
        let mut moves: Vec<_> = self.open_moves(here).collect();
        moves.sort_by_cached_key(|&to| self.open_moves(to).count());
        moves
    }

    fn apply(&mut self, &(r, c): &(usize, usize)) {
        self.board[r][c] = Some(self.path.len());
        self.path.push((r, c));
    }

    fn undo(&mut self, &(r, c): &(usize, usize)) {
        self.board[r][c] = None;
        self.path.pop();
    }
}

/// Finds a knight's tour of an `n x n` board from `start`, returning the
/// move number (from 0) at which each square is visited.
///
/// Returns `Ok(None)` when no tour exists from `start`, and
/// [`AlgoError::CellOutOfBounds`] if `start` is off the board.
///
/// ```
/// use algo_kit::backtracking::knights_tour;
///
/// let board = knights_tour(5, (0, 0))?.unwrap();
/// assert_eq!(board[0][0], 0);
/// assert_eq!(board.iter().flatten().max(), Some(&24));
/// assert_eq!(knights_tour(4, (0, 0))?, None);
/// # Ok::<(), algo_kit::AlgoError>(())
/// ```
pub fn knights_tour(n: usize, start: (usize, usize)) -> Result<Option<Vec<Vec<usize>>>, AlgoError> {
    knights_tour_with(n, start, SearchLimits::unlimited()).map(|(board, _)| board)
}

/// [`knights_tour`] under a node budget, returning the board together with
/// the search report. A start square with no tour explores the whole tree
/// unless the budget cuts it short.
pub fn knights_tour_with(
    n: usize,
    start: (usize, usize),
    limits: SearchLimits,
) -> Result<(Option<Vec<Vec<usize>>>, SearchReport), AlgoError> {
    let (row, col) = start;
    if row >= n || col >= n {
        return Err(AlgoError::CellOutOfBounds { row, col });
    }

    let mut problem = KnightsTour {
        n,
        board: vec![vec![None; n]; n],
        path: Vec::with_capacity(n * n),
    };
    problem.apply(&start);

    let report = solve_first(&mut problem, limits);
    tracing::debug!(
        n,
        ?start,
        nodes = report.nodes_visited,
        outcome = ?report.outcome,
        "knight's tour"
    );
    if !report.found() {
        return Ok((None, report));
    }
    let board = problem
        .board
        .into_iter()
        .map(|row| row.into_iter().collect::<Option<Vec<_>>>())
        .collect();
    Ok((board, report))
}

//! Grid search on 4-connected boards.

use std::collections::VecDeque;

use algo_collections::DisjointSet;

use crate::backtracking::{Backtrack, solve_first_iterative};
use crate::config::SearchLimits;
use crate::error::AlgoError;

/// Neighbour order for every maze search: down, right, up, left.
const STEPS: [(isize, isize); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// A rectangular maze of open cells and walls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    rows: usize,
    cols: usize,
    open: Vec<bool>,
}

impl Maze {
    /// Parses one line per row: `.` is open, `#` is a wall. Surrounding
    /// whitespace and blank lines are skipped.
    ///
    /// Fails with [`AlgoError::InvalidPuzzle`] on any other character and
    /// [`AlgoError::DimensionMismatch`] when rows differ in width.
    pub fn parse(text: &str) -> Result<Self, AlgoError> {
        let lines: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        let cols = lines.first().map_or(0, |l| l.chars().count());
        let mut open = Vec::with_capacity(lines.len() * cols);

        for line in &lines {
            let width = line.chars().count();
            if width != cols {
                return Err(AlgoError::DimensionMismatch {
                    expected: cols,
                    found: width,
                });
            }
            for ch in line.chars() {
                open.push(match ch {
                    '.' => true,
                    '#' => false,
                    other => {
                        return Err(AlgoError::InvalidPuzzle(format!(
                            "unexpected maze character {other:?}"
                        )));
                    }
                });
            }
        }

        Ok(Self {
            rows: lines.len(),
            cols,
            open,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns true if `(row, col)` is on the board and not a wall.
    pub fn is_open(&self, (row, col): (usize, usize)) -> bool {
        row < self.rows && col < self.cols && self.open[row * self.cols + col]
    }

    fn check_cell(&self, (row, col): (usize, usize)) -> Result<(), AlgoError> {
        if row < self.rows && col < self.cols {
            Ok(())
        } else {
            Err(AlgoError::CellOutOfBounds { row, col })
        }
    }

    fn open_neighbors(&self, (row, col): (usize, usize)) -> impl Iterator<Item = (usize, usize)> + '_ {
        STEPS.iter().filter_map(move |&(dr, dc)| {
            let next = (row.checked_add_signed(dr)?, col.checked_add_signed(dc)?);
            self.is_open(next).then_some(next)
        })
    }

    /// Fewest steps from `start` to `end` by breadth-first search, or
    /// `None` if `end` is unreachable or either endpoint is a wall.
    ///
    /// ```
    /// use algo_kit::matrix::Maze;
    ///
    /// let maze = Maze::parse("
    ///     ..#
    ///     #..
    ///     ...
    /// ")?;
    /// assert_eq!(maze.shortest_path((0, 0), (2, 2))?, Some(4));
    /// assert_eq!(maze.shortest_path((0, 0), (0, 2))?, None);
    /// # Ok::<(), algo_kit::AlgoError>(())
    /// ```
    pub fn shortest_path(
        &self,
        start: (usize, usize),
        end: (usize, usize),
    ) -> Result<Option<usize>, AlgoError> {
        self.check_cell(start)?;
        self.check_cell(end)?;
        if !self.is_open(start) || !self.is_open(end) {
            return Ok(None);
        }

        let mut dist = vec![None; self.open.len()];
        dist[start.0 * self.cols + start.1] = Some(0);
        let mut queue = VecDeque::from([start]);

        while let Some(cell) = queue.pop_front() {
            let Some(d) = dist[cell.0 * self.cols + cell.1] else {
                continue;
            };
            if cell == end {
                return Ok(Some(d));
            }
            for next in self.open_neighbors(cell) {
                let slot = &mut dist[next.0 * self.cols + next.1];
                if slot.is_none() {
                    *slot = Some(d + 1);
                    queue.push_back(next);
                }
            }
        }
        Ok(None)
    }

    /// Some path from `start` to `end` by depth-first backtracking, trying
    /// neighbours down, right, up, left. The path is simple but not
    /// necessarily shortest.
    ///
    /// A cell that has been fully explored stays marked after the search
    /// backs out of it, so each cell is entered at most once.
    pub fn find_path(
        &self,
        start: (usize, usize),
        end: (usize, usize),
    ) -> Result<Option<Vec<(usize, usize)>>, AlgoError> {
        self.check_cell(start)?;
        self.check_cell(end)?;
        if !self.is_open(start) || !self.is_open(end) {
            return Ok(None);
        }

        let mut search = MazeSearch {
            maze: self,
            end,
            path: Vec::new(),
            seen: vec![false; self.open.len()],
        };
        search.apply(&start);

        let report = solve_first_iterative(&mut search, SearchLimits::unlimited());
        tracing::debug!(?start, ?end, nodes = report.nodes_visited, found = report.found(), "maze search");
        Ok(report.found().then_some(search.path))
    }
}

struct MazeSearch<'a> {
    maze: &'a Maze,
    end: (usize, usize),
    path: Vec<(usize, usize)>,
    seen: Vec<bool>,
}

impl MazeSearch<'_> {
    fn seen(&self, (row, col): (usize, usize)) -> bool {
        self.seen[row * self.maze.cols + col]
    }
}

impl Backtrack for MazeSearch<'_> {
    type Choice = (usize, usize);

    fn is_complete(&self) -> bool {
        self.path.last() == Some(&self.end)
    }

    fn choices(&self) -> Vec<(usize, usize)> {
        match self.path.last() {
            Some(&cell) => self.maze.open_neighbors(cell).collect(),
            None => Vec::new(),
        }
    }

    fn is_valid(&self, &cell: &(usize, usize)) -> bool {
        !self.seen(cell)
    }

    fn apply(&mut self, &(row, col): &(usize, usize)) {
        self.seen[row * self.maze.cols + col] = true;
        self.path.push((row, col));
    }

    fn undo(&mut self, _cell: &(usize, usize)) {
        self.path.pop();
    }
}

/// Number of 4-connected regions of `true` cells. Rows may differ in
/// length.
///
/// ```
/// use algo_kit::matrix::count_islands;
///
/// let grid: Vec<Vec<bool>> = ["11000", "11000", "00100", "00011"]
///     .iter()
///     .map(|row| row.chars().map(|c| c == '1').collect())
///     .collect();
/// assert_eq!(count_islands(&grid), 3);
/// ```
pub fn count_islands(grid: &[Vec<bool>]) -> usize {
    let offsets: Vec<usize> = grid
        .iter()
        .scan(0, |start, row| {
            let offset = *start;
            *start += row.len();
            Some(offset)
        })
        .collect();
    let cells = grid.iter().map(Vec::len).sum();
    let mut sets = DisjointSet::new(cells);
    let land = |r: usize, c: usize| grid.get(r).and_then(|row| row.get(c)).copied() == Some(true);

    for (r, row) in grid.iter().enumerate() {
        for (c, &is_land) in row.iter().enumerate() {
            if !is_land {
                continue;
            }
            if land(r, c + 1) {
                sets.union(offsets[r] + c, offsets[r] + c + 1);
            }
            if land(r + 1, c) {
                sets.union(offsets[r] + c, offsets[r + 1] + c);
            }
        }
    }

    let water = grid.iter().flatten().filter(|&&is_land| !is_land).count();
    sets.set_count() - water
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAZE: &str = "
        ....#
        .##.#
        .#...
        .#.#.
        ...#.
    ";

    fn assert_walkable(maze: &Maze, path: &[(usize, usize)]) {
        for cell in path {
            assert!(maze.is_open(*cell), "{cell:?} is a wall");
        }
        for pair in path.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert_eq!(a.0.abs_diff(b.0) + a.1.abs_diff(b.1), 1, "{a:?} -> {b:?}");
        }
    }

    #[test]
    fn test_parse() -> anyhow::Result<()> {
        let maze = Maze::parse(MAZE)?;
        assert_eq!((maze.rows(), maze.cols()), (5, 5));
        assert!(maze.is_open((0, 0)));
        assert!(!maze.is_open((0, 4)));
        assert!(!maze.is_open((5, 0)));

        assert!(matches!(
            Maze::parse("..\n.x"),
            Err(AlgoError::InvalidPuzzle(_))
        ));
        assert_eq!(
            Maze::parse("...\n.."),
            Err(AlgoError::DimensionMismatch {
                expected: 3,
                found: 2
            })
        );
        Ok(())
    }

    #[test]
    fn test_shortest_path() -> anyhow::Result<()> {
        let maze = Maze::parse(MAZE)?;
        assert_eq!(maze.shortest_path((0, 0), (4, 4))?, Some(8));
        assert_eq!(maze.shortest_path((0, 0), (0, 0))?, Some(0));
        assert_eq!(maze.shortest_path((0, 0), (1, 1))?, None);
        assert_eq!(
            maze.shortest_path((0, 0), (9, 9)),
            Err(AlgoError::CellOutOfBounds { row: 9, col: 9 })
        );
        Ok(())
    }

    #[test]
    fn test_find_path_tries_down_first() -> anyhow::Result<()> {
        let maze = Maze::parse(MAZE)?;
        let path = maze.find_path((0, 0), (4, 4))?.expect("maze is solvable");
        assert_walkable(&maze, &path);
        assert_eq!(path.first(), Some(&(0, 0)));
        assert_eq!(path.last(), Some(&(4, 4)));
        // down the left column before anything else
        assert_eq!(&path[..5], &[(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);
        Ok(())
    }

    #[test]
    fn test_find_path_blocked() -> anyhow::Result<()> {
        let maze = Maze::parse(
            "
            .#.
            ##.
            ...
            ",
        )?;
        assert_eq!(maze.find_path((0, 0), (2, 2))?, None);
        assert_eq!(maze.find_path((0, 1), (2, 2))?, None);
        assert_eq!(maze.find_path((2, 2), (2, 2))?, Some(vec![(2, 2)]));
        Ok(())
    }

    #[test]
    fn test_find_path_on_open_field_is_linear() -> anyhow::Result<()> {
        let field = vec![".".repeat(60); 60].join("\n");
        let maze = Maze::parse(&field)?;
        let path = maze.find_path((0, 0), (59, 59))?.expect("open field");
        assert_walkable(&maze, &path);
        assert!(path.len() <= 3600);
        Ok(())
    }

    #[test]
    fn test_count_islands() {
        let to_grid = |rows: &[&str]| -> Vec<Vec<bool>> {
            rows.iter().map(|r| r.chars().map(|c| c == '1').collect()).collect()
        };
        assert_eq!(count_islands(&to_grid(&["11110", "11010", "11000", "00000"])), 1);
        assert_eq!(count_islands(&to_grid(&["101", "010", "101"])), 5);
        assert_eq!(count_islands(&to_grid(&["1", "11", "0011"])), 2);
        assert_eq!(count_islands(&[]), 0);
    }
}

//! 9x9 Sudoku.
//!
//! Givens are validated on [`Sudoku::parse`]; the solver keeps one bitmask
//! of used digits per row, column and box and always branches on the empty
//! cell with the fewest candidates.

use std::fmt;

use super::engine::{Backtrack, solve_first};
use crate::config::SearchLimits;
use crate::error::AlgoError;

const SIZE: usize = 9;
const ALL_DIGITS: u16 = 0b11_1111_1110;

fn box_of(row: usize, col: usize) -> usize {
    (row / 3) * 3 + col / 3
}

/// A 9x9 grid; `0` marks an empty cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sudoku {
    cells: [[u8; SIZE]; SIZE],
}

impl Sudoku {
    /// Parses 81 cells in row-major order. Digits `1`-`9` are givens, `0` or
    /// `.` are blanks, whitespace is ignored.
    ///
    /// Fails with [`AlgoError::InvalidPuzzle`] on any other character, on a
    /// cell count other than 81, or when two givens clash.
    pub fn parse(input: &str) -> Result<Self, AlgoError> {
        let mut cells = [[0u8; SIZE]; SIZE];
        let mut count = 0;

        for ch in input.chars().filter(|ch| !ch.is_whitespace()) {
            let digit = match ch {
                '.' | '0' => 0,
                '1'..='9' => ch as u8 - b'0',
                other => {
                    return Err(AlgoError::InvalidPuzzle(format!(
                        "unexpected character {other:?}"
                    )));
                }
            };
            if count < SIZE * SIZE {
                cells[count / SIZE][count % SIZE] = digit;
            }
            count += 1;
        }

        if count != SIZE * SIZE {
            return Err(AlgoError::InvalidPuzzle(format!(
                "expected 81 cells, found {count}"
            )));
        }

        Self::checked(cells)
    }

    /// Wraps a grid directly, `0` for blanks.
    ///
    /// Applies the same checks as [`Sudoku::parse`]: a cell above 9 or two
    /// clashing givens fail with [`AlgoError::InvalidPuzzle`].
    pub fn from_grid(cells: [[u8; SIZE]; SIZE]) -> Result<Self, AlgoError> {
        if let Some((row, col, digit)) = cells.iter().enumerate().find_map(|(row, line)| {
            line.iter()
                .position(|&digit| digit > 9)
                .map(|col| (row, col, line[col]))
        }) {
            return Err(AlgoError::InvalidPuzzle(format!(
                "cell ({row}, {col}) holds {digit}, expected 0-9"
            )));
        }
        Self::checked(cells)
    }

    fn checked(cells: [[u8; SIZE]; SIZE]) -> Result<Self, AlgoError> {
        let sudoku = Self { cells };
        if !sudoku.is_valid() {
            tracing::warn!("sudoku givens conflict");
            return Err(AlgoError::InvalidPuzzle("conflicting givens".to_string()));
        }
        Ok(sudoku)
    }

    /// Digit at `(row, col)`, or `None` for a blank or out-of-range cell.
    pub fn cell(&self, row: usize, col: usize) -> Option<u8> {
        self.cells
            .get(row)?
            .get(col)
            .copied()
            .filter(|&digit| digit != 0)
    }

    pub fn grid(&self) -> &[[u8; SIZE]; SIZE] {
        &self.cells
    }

    /// Returns true if no row, column or box repeats a digit. Blanks are
    /// allowed.
    pub fn is_valid(&self) -> bool {
        Masks::from_cells(&self.cells).is_some()
    }

    /// Returns true if the grid is full and valid.
    pub fn is_solved(&self) -> bool {
        self.cells.iter().flatten().all(|&digit| digit != 0) && self.is_valid()
    }

    /// Solves the puzzle, returning `None` if it has no solution.
    ///
    /// ```
    /// use algo_kit::backtracking::Sudoku;
    ///
    /// let puzzle = Sudoku::parse(
    ///     "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79",
    /// )?;
    /// let solved = puzzle.solve().unwrap();
    /// assert!(solved.is_solved());
    /// assert_eq!(solved.cell(0, 2), Some(4));
    /// # Ok::<(), algo_kit::AlgoError>(())
    /// ```
    pub fn solve(&self) -> Option<Sudoku> {
        let masks = Masks::from_cells(&self.cells)?;
        let mut search = SudokuSearch {
            cells: self.cells,
            masks,
            blanks: self.cells.iter().flatten().filter(|&&d| d == 0).count(),
        };
        let report = solve_first(&mut search, SearchLimits::unlimited());
        tracing::debug!(nodes = report.nodes_visited, solved = report.found(), "sudoku search");
        report.found().then_some(Sudoku {
            cells: search.cells,
        })
    }
}

impl fmt::Display for Sudoku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for &digit in row {
                match digit {
                    0 => write!(f, ".")?,
                    d => write!(f, "{d}")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
struct Masks {
    rows: [u16; SIZE],
    cols: [u16; SIZE],
    boxes: [u16; SIZE],
}

impl Masks {
    /// Bitmasks of the givens, or `None` if a digit repeats in a unit.
    fn from_cells(cells: &[[u8; SIZE]; SIZE]) -> Option<Self> {
        let mut masks = Self {
            rows: [0; SIZE],
            cols: [0; SIZE],
            boxes: [0; SIZE],
        };
        for (row, line) in cells.iter().enumerate() {
            for (col, &digit) in line.iter().enumerate() {
                if digit == 0 {
                    continue;
                }
                if masks.candidates(row, col) & (1 << digit) == 0 {
                    return None;
                }
                masks.toggle(row, col, digit);
            }
        }
        Some(masks)
    }

    fn candidates(&self, row: usize, col: usize) -> u16 {
        ALL_DIGITS & !(self.rows[row] | self.cols[col] | self.boxes[box_of(row, col)])
    }

    fn toggle(&mut self, row: usize, col: usize, digit: u8) {
        let bit = 1 << digit;
        self.rows[row] ^= bit;
        self.cols[col] ^= bit;
        self.boxes[box_of(row, col)] ^= bit;
    }
}

struct SudokuSearch {
    cells: [[u8; SIZE]; SIZE],
    masks: Masks,
    blanks: usize,
}

#[derive(Debug, Clone, Copy)]
struct Placement {
    row: usize,
    col: usize,
    digit: u8,
}

impl Backtrack for SudokuSearch {
    type Choice = Placement;

    fn is_complete(&self) -> bool {
        self.blanks == 0
    }

    fn choices(&self) -> Vec<Placement> {
        let mut best: Option<(usize, usize, u16)> = None;
        for row in 0..SIZE {
            for col in 0..SIZE {
                if self.cells[row][col] != 0 {
                    continue;
                }
                let candidates = self.masks.candidates(row, col);
                if best.is_none_or(|(_, _, mask)| candidates.count_ones() < mask.count_ones()) {
                    best = Some((row, col, candidates));
                    if candidates.count_ones() <= 1 {
                        break;
                    }
                }
            }
            if best.is_some_and(|(_, _, mask)| mask.count_ones() <= 1) {
                break;
            }
        }

        let Some((row, col, mask)) = best else {
            return Vec::new();
        };
        (1..=9u8)
            .filter(|&digit| mask & (1 << digit) != 0)
            .map(|digit| Placement { row, col, digit })
            .collect()
    }

    fn apply(&mut self, p: &Placement) {
        self.cells[p.row][p.col] = p.digit;
        self.masks.toggle(p.row, p.col, p.digit);
        self.blanks -= 1;
    }

    fn undo(&mut self, p: &Placement) {
        self.cells[p.row][p.col] = 0;
        self.masks.toggle(p.row, p.col, p.digit);
        self.blanks += 1;
    }
}

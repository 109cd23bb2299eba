//! The single-pass solver.
//!
//! [`SinglesSolver`] runs a fixed pipeline over one shared grid of cell
//! states: one candidate elimination sweep, one hidden-singles pass per
//! grouping axis, one naked-singles pass. There is no iteration to a fixed
//! point and no backtracking; puzzles needing deeper inference come back
//! partially solved, with the stubborn cells still blank.

mod hidden_singles;
mod naked_singles;

use crate::bitset::Set;
use crate::board::{Axis, Cell, CellState, Sudoku};
use crate::consts::N_CELLS;
use crate::helper::CellArray;

/// Applies candidate elimination and singles placement to a sudoku.
///
/// The passes can be run individually in any order; [`SinglesSolver::solve`]
/// runs them in the standard sequence.
#[derive(Clone, Debug)]
pub struct SinglesSolver {
    cells: CellArray<CellState>,
}

impl SinglesSolver {
    /// Builds the cell grid from a sudoku. Givens become resolved cells,
    /// blanks start out with the full candidate set.
    pub fn from_sudoku(sudoku: Sudoku) -> SinglesSolver {
        let mut cells = CellArray([CellState::Candidates(Set::ALL); N_CELLS]);
        for (cell, digit) in Cell::all().zip(sudoku.iter()) {
            if let Some(digit) = digit {
                cells[cell] = CellState::Digit(digit);
            }
        }
        SinglesSolver { cells }
    }

    /// Returns the current state of a cell.
    pub fn cell_state(&self, cell: Cell) -> CellState {
        self.cells[cell]
    }

    /// Removes every digit that is already resolved somewhere in a cell's
    /// row, column or block from that cell's candidates.
    ///
    /// The solved digits of all groups are snapshotted before any pruning,
    /// so one sweep never feeds on its own results. Resolves nothing.
    pub fn eliminate_candidates(&mut self) {
        let mut rows = [Set::NONE; 9];
        let mut cols = [Set::NONE; 9];
        let mut blocks = [Set::NONE; 9];
        for cell in Cell::all() {
            if let CellState::Digit(digit) = self.cells[cell] {
                rows[cell.row().as_index()] |= digit;
                cols[cell.col().as_index()] |= digit;
                blocks[cell.block().as_index()] |= digit;
            }
        }

        for cell in Cell::all() {
            let solved_in_groups = rows[cell.row().as_index()]
                | cols[cell.col().as_index()]
                | blocks[cell.block().as_index()];
            if let CellState::Candidates(candidates) = &mut self.cells[cell] {
                candidates.remove(solved_in_groups);
            }
        }
    }

    /// Resolves every digit that has exactly one remaining slot within a
    /// group of the given axis. See [`Axis`] for the grouping.
    pub fn place_hidden_singles(&mut self, axis: Axis) {
        hidden_singles::place_hidden_singles(&mut self.cells, axis);
    }

    /// Resolves every cell whose candidate set has collapsed to one digit.
    pub fn place_naked_singles(&mut self) {
        naked_singles::place_naked_singles(&mut self.cells);
    }

    /// Extracts the resolved values, unresolved cells as `0`.
    pub fn to_sudoku(&self) -> Sudoku {
        let mut grid = [0; N_CELLS];
        for cell in Cell::all() {
            if let Some(digit) = self.cells[cell].digit() {
                grid[cell.as_index()] = digit.get();
            }
        }
        Sudoku(grid)
    }

    /// Runs the full pipeline: elimination, hidden singles along rows,
    /// columns and blocks, naked singles.
    pub fn solve(mut self) -> Sudoku {
        self.eliminate_candidates();
        for axis in Axis::ALL {
            self.place_hidden_singles(axis);
        }
        self.place_naked_singles();
        self.to_sudoku()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Col, Digit, Row};

    fn cell(row: u8, col: u8) -> Cell {
        Cell::from_row_col(Row::new(row), Col::new(col))
    }

    #[test]
    fn elimination_prunes_row_col_and_block_peers() {
        let mut bytes = [0u8; 81];
        bytes[cell(0, 0).as_index()] = 1; // row peer
        bytes[cell(8, 4).as_index()] = 2; // column peer
        bytes[cell(1, 1).as_index()] = 3; // same block as neither

        let mut solver = SinglesSolver::from_sudoku(Sudoku(bytes));
        solver.eliminate_candidates();

        let candidates = solver.cell_state(cell(0, 4)).candidates().unwrap();
        assert!(!candidates.contains(Digit::new(1)));
        assert!(!candidates.contains(Digit::new(2)));
        assert!(candidates.contains(Digit::new(3)));

        // block peer of the 3 at (1, 1)
        let candidates = solver.cell_state(cell(2, 2)).candidates().unwrap();
        assert!(!candidates.contains(Digit::new(3)));
    }

    #[test]
    fn elimination_does_not_resolve_cells() {
        let mut bytes = [0u8; 81];
        for col in 0..8 {
            bytes[cell(0, col).as_index()] = col + 1;
        }

        let mut solver = SinglesSolver::from_sudoku(Sudoku(bytes));
        solver.eliminate_candidates();

        // (0, 8) is down to a lone 9, but stays a candidate cell until the
        // naked singles pass runs
        let state = solver.cell_state(cell(0, 8));
        assert_eq!(
            state.candidates().unwrap().unique(),
            Ok(Some(Digit::new(9)))
        );
    }

    #[test]
    fn elimination_is_idempotent_without_new_resolutions() {
        let mut bytes = [0u8; 81];
        bytes[0] = 5;
        bytes[40] = 7;
        bytes[80] = 1;

        let mut solver = SinglesSolver::from_sudoku(Sudoku(bytes));
        solver.eliminate_candidates();
        let first = solver.clone();
        solver.eliminate_candidates();

        for cell in Cell::all() {
            assert_eq!(first.cell_state(cell), solver.cell_state(cell));
        }
    }

    #[test]
    fn solve_keeps_givens() {
        let mut bytes = [0u8; 81];
        bytes[cell(3, 3).as_index()] = 6;
        let solved = SinglesSolver::from_sudoku(Sudoku(bytes)).solve();
        assert_eq!(solved.to_bytes()[cell(3, 3).as_index()], 6);
    }
}

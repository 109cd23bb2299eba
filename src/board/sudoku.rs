use crate::board::{Axis, Digit, Slot};
use crate::consts::{N_CELLS, N_GROUPS};
use crate::errors::FromBytesError;
use crate::solver::SinglesSolver;

use std::fmt;
use std::io::{self, Read};

/// The main structure exposing all the functionality of the library
///
/// A 9×9 grid of digits in row-major order, `0` marking a blank cell.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Sudoku(pub(crate) [u8; N_CELLS]);

impl Sudoku {
    /// Reads a sudoku from a stream of characters.
    ///
    /// Every ASCII digit is assigned to the next cell, going from left to
    /// right, top to bottom; all other characters are treated as layout and
    /// skipped. Reading stops after 81 digits or at end of input, whichever
    /// comes first. Missing trailing cells stay blank.
    pub fn from_read<R: Read>(reader: R) -> io::Result<Sudoku> {
        let mut grid = [0; N_CELLS];
        let mut cell = 0;
        for byte in reader.bytes() {
            let byte = byte?;
            if byte.is_ascii_digit() {
                grid[cell] = byte - b'0';
                cell += 1;
                if cell == N_CELLS {
                    break;
                }
            }
        }
        Ok(Sudoku(grid))
    }

    /// Creates a sudoku from a byte array. Bytes must be in the range `0..=9`,
    /// `0` marking a blank cell.
    pub fn from_bytes(bytes: [u8; N_CELLS]) -> Result<Sudoku, FromBytesError> {
        match bytes.iter().position(|&value| value > 9) {
            Some(cell) => Err(FromBytesError {
                cell: cell as u8,
                value: bytes[cell],
            }),
            None => Ok(Sudoku(bytes)),
        }
    }

    /// Returns the cell contents as a byte array in row-major order.
    pub fn to_bytes(self) -> [u8; N_CELLS] {
        self.0
    }

    /// Returns an iterator over the cells, going from left to right, top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = Option<Digit>> + '_ {
        self.0.iter().map(|&value| Digit::new_checked(value))
    }

    /// Returns the number of filled cells.
    pub fn n_clues(&self) -> u8 {
        self.0.iter().filter(|&&value| value != 0).count() as u8
    }

    /// Checks whether every row, column and block contains all nine digits.
    pub fn is_solved(&self) -> bool {
        Axis::ALL.iter().all(|&axis| {
            (0..N_GROUPS).all(|group| {
                let mut solved = crate::bitset::Set::<Digit>::NONE;
                for slot in Slot::all() {
                    let value = self.0[axis.cell_at(group, slot).as_index()];
                    match Digit::new_checked(value) {
                        Some(digit) => solved |= digit,
                        None => return false,
                    }
                }
                solved.is_full()
            })
        })
    }

    /// Runs the single-pass solving pipeline and returns the resulting grid.
    ///
    /// Cells the pipeline could not deduce remain blank; see
    /// [`SinglesSolver`] for what one pass can and cannot resolve.
    pub fn solve_singles(self) -> Sudoku {
        SinglesSolver::from_sudoku(self).solve()
    }
}

impl fmt::Display for Sudoku {
    /// Writes the grid as 9 lines of space-separated digits with `| `
    /// after every third column and a 21-dash line after every third row,
    /// blanks printed as `0`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..9 {
            for col in 0..9 {
                write!(f, "{}", self.0[row * 9 + col])?;
                if col < 8 {
                    write!(f, " ")?;
                    if (col + 1) % 3 == 0 {
                        write!(f, "| ")?;
                    }
                }
            }
            if row < 8 {
                writeln!(f)?;
                if (row + 1) % 3 == 0 {
                    writeln!(f, "{:-<21}", "")?;
                }
            }
        }
        Ok(())
    }
}

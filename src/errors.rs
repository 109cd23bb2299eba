#[cfg(doc)]
use crate::Sudoku;

/// Error for [`Sudoku::from_bytes`]
#[derive(Debug, thiserror::Error)]
#[error("cell {cell} contains {value}, expected a value in 0..=9")]
pub struct FromBytesError {
    /// Cell number goes from 0..=80, 0..=8 for the first row, 9..=17 for the 2nd and so on
    pub cell: u8,
    /// The offending byte
    pub value: u8,
}

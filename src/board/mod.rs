//! Types for cells, digits and other things on a sudoku board
mod cell_state;
mod digit;
pub mod positions;
mod sudoku;

pub use self::{
    cell_state::CellState,
    digit::Digit,
    positions::{Axis, Block, Cell, Col, Row, Slot},
    sudoku::Sudoku,
};

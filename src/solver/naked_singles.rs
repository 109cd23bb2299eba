use crate::board::{Cell, CellState};
use crate::helper::CellArray;

pub(crate) fn place_naked_singles(cells: &mut CellArray<CellState>) {
    for cell in Cell::all() {
        if let CellState::Candidates(candidates) = cells[cell] {
            // if Err(_), the candidate set is empty and the puzzle has a
            // contradiction; the cell is left unresolved (via unwrap_or(None))
            if let Some(digit) = candidates.unique().unwrap_or(None) {
                cells[cell] = CellState::Digit(digit);
            }
        }
    }
}

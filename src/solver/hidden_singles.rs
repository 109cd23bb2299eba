use crate::bitset::Set;
use crate::board::{Axis, CellState, Digit, Slot};
use crate::consts::{N_DIGITS, N_GROUPS};
use crate::helper::{CellArray, DigitArray};

pub(crate) fn place_hidden_singles(cells: &mut CellArray<CellState>, axis: Axis) {
    for group in 0..N_GROUPS {
        // one snapshot per group, covering all digits; it is not refreshed
        // between digits, so a cell resolved for an earlier digit stays a
        // recorded slot for later ones
        let mut placed: Set<Digit> = Set::NONE;
        let mut slots_by_digit = DigitArray([Set::<Slot>::NONE; N_DIGITS]);
        for slot in Slot::all() {
            match cells[axis.cell_at(group, slot)] {
                CellState::Digit(digit) => placed |= digit,
                CellState::Candidates(candidates) => {
                    for digit in candidates {
                        slots_by_digit[digit] |= slot;
                    }
                }
            }
        }

        for digit in Digit::all() {
            if placed.contains(digit) {
                continue;
            }
            // Err(Empty) means the group has no room left for the digit;
            // contradictions are left alone, not reported
            if let Ok(Some(slot)) = slots_by_digit[digit].unique() {
                cells[axis.cell_at(group, slot)] = CellState::Digit(digit);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Col, Row};
    use crate::consts::N_CELLS;

    fn digit_set(digits: &[u8]) -> Set<Digit> {
        let mut set = Set::NONE;
        for &digit in digits {
            set |= Digit::new(digit);
        }
        set
    }

    fn all_candidates() -> CellArray<CellState> {
        CellArray([CellState::Candidates(Set::ALL); N_CELLS])
    }

    #[test]
    fn lone_slot_for_a_digit_is_resolved() {
        let mut cells = all_candidates();
        // digit 7 can only go in the middle of block 0
        for row in 0..3 {
            for col in 0..3 {
                if (row, col) != (1, 1) {
                    let cell = Cell::from_row_col(Row::new(row), Col::new(col));
                    cells[cell] = CellState::Candidates(Set::ALL.without(Digit::new(7).as_set()));
                }
            }
        }

        place_hidden_singles(&mut cells, Axis::Blocks);

        let center = Cell::from_row_col(Row::new(1), Col::new(1));
        assert_eq!(cells[center], CellState::Digit(Digit::new(7)));
    }

    #[test]
    fn placed_digit_is_not_placed_again() {
        let mut cells = all_candidates();
        let resolved = Cell::from_row_col(Row::new(0), Col::new(0));
        let lone_five = Cell::from_row_col(Row::new(0), Col::new(3));
        cells[resolved] = CellState::Digit(Digit::new(5));
        cells[lone_five] = CellState::Candidates(digit_set(&[5, 6]));
        for col in [1, 2, 4, 5, 6, 7, 8] {
            let cell = Cell::from_row_col(Row::new(0), Col::new(col));
            cells[cell] = CellState::Candidates(digit_set(&[6, 7, 8, 9]));
        }

        place_hidden_singles(&mut cells, Axis::Rows);

        // (0, 3) is the only remaining home for a 5, but the row already
        // has one
        assert_eq!(cells[lone_five], CellState::Candidates(digit_set(&[5, 6])));
    }

    #[test]
    fn later_digit_overwrites_shared_lone_slot() {
        let mut cells = all_candidates();
        let corner = Cell::from_row_col(Row::new(0), Col::new(0));
        cells[corner] = CellState::Candidates(digit_set(&[1, 2]));
        for col in 1..9 {
            let cell = Cell::from_row_col(Row::new(0), Col::new(col));
            cells[cell] = CellState::Candidates(digit_set(&[3, 4, 5, 6, 7, 8, 9]));
        }

        place_hidden_singles(&mut cells, Axis::Rows);

        // both 1 and 2 have their lone slot at (0, 0); the snapshot is not
        // refreshed after 1 is placed there, so 2 wins
        assert_eq!(cells[corner], CellState::Digit(Digit::new(2)));
    }

    #[test]
    fn no_placement_when_digit_fits_in_several_slots() {
        let mut cells = all_candidates();

        place_hidden_singles(&mut cells, Axis::Rows);
        place_hidden_singles(&mut cells, Axis::Cols);
        place_hidden_singles(&mut cells, Axis::Blocks);

        assert!(cells.iter().all(|&state| state == CellState::Candidates(Set::ALL)));
    }
}

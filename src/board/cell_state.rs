use crate::bitset::Set;
use crate::board::Digit;

/// Contains either a digit or all the candidates for an unsolved cell
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[allow(missing_docs)]
pub enum CellState {
    Digit(Digit),
    Candidates(Set<Digit>),
}

impl CellState {
    /// Returns the resolved digit, if the cell is resolved.
    pub fn digit(self) -> Option<Digit> {
        match self {
            CellState::Digit(digit) => Some(digit),
            CellState::Candidates(_) => None,
        }
    }

    /// Returns the candidate set, if the cell is unresolved.
    pub fn candidates(self) -> Option<Set<Digit>> {
        match self {
            CellState::Digit(_) => None,
            CellState::Candidates(candidates) => Some(candidates),
        }
    }
}

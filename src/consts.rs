// Grid geometry shared across modules
pub(crate) const N_CELLS: usize = 81;
pub(crate) const N_DIGITS: usize = 9;
pub(crate) const N_GROUPS: u8 = 9;

//! Index types for the grid and its groups.
//!
//! A cell belongs to exactly one row, one column and one block. Each of the
//! three groupings partitions the grid into 9 groups of 9 cells; [`Axis`]
//! selects a grouping and maps `(group, slot)` pairs back to cells.

use crate::consts::N_GROUPS;

macro_rules! define_types(
    ($( $name:ident : $limit:expr ),* $(,)*) => {
        $(
            #[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
            #[allow(missing_docs)]
            pub struct $name(u8);

            impl $name {
                /// Constructs a new instance.
                ///
                /// # Panic
                /// Panics in debug mode, if the index is out of range.
                pub fn new(num: u8) -> Self {
                    debug_assert!(num < $limit);
                    $name(num)
                }

                /// Returns the index contained within.
                pub fn get(self) -> u8 {
                    self.0
                }

                /// Returns the index as `usize` for array access.
                pub fn as_index(self) -> usize {
                    self.0 as _
                }

                /// Returns an iterator over all instances.
                pub fn all() -> impl Iterator<Item = Self> {
                    (0..$limit).map(Self::new)
                }
            }
        )*
    };
);

define_types!(
    Cell: 81,
    Row: 9,
    Col: 9,
    Block: 9,
    Slot: 9,
);

impl Cell {
    /// Constructs the cell at the given row and column.
    pub fn from_row_col(row: Row, col: Col) -> Self {
        Cell::new(row.get() * 9 + col.get())
    }

    /// Returns the row of this cell.
    pub fn row(self) -> Row {
        Row::new(self.0 / 9)
    }

    /// Returns the column of this cell.
    pub fn col(self) -> Col {
        Col::new(self.0 % 9)
    }

    /// Returns the block (3×3 box) of this cell.
    pub fn block(self) -> Block {
        Block::new(self.row().get() / 3 * 3 + self.col().get() / 3)
    }
}

/// One of the three grouping axes of the grid.
///
/// An axis splits the 81 cells into 9 groups of 9; [`Axis::cell_at`] is the
/// pure coordinate mapping from a group and a slot within it to the cell.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Axis {
    /// Groups are rows, slots are columns.
    Rows,
    /// Groups are columns, slots are rows.
    Cols,
    /// Groups are blocks, slots go left to right, top to bottom within one.
    Blocks,
}

impl Axis {
    /// All three axes, in the order the solver visits them.
    pub const ALL: [Axis; 3] = [Axis::Rows, Axis::Cols, Axis::Blocks];

    /// Returns the cell in slot `slot` of group `group` along this axis.
    pub fn cell_at(self, group: u8, slot: Slot) -> Cell {
        debug_assert!(group < N_GROUPS);
        let slot = slot.get();
        let (row, col) = match self {
            Axis::Rows => (group, slot),
            Axis::Cols => (slot, group),
            Axis::Blocks => (group / 3 * 3 + slot / 3, group % 3 * 3 + slot % 3),
        };
        Cell::from_row_col(Row::new(row), Col::new(col))
    }

    /// Returns the group index of `cell` along this axis.
    pub fn group_of(self, cell: Cell) -> u8 {
        match self {
            Axis::Rows => cell.row().get(),
            Axis::Cols => cell.col().get(),
            Axis::Blocks => cell.block().get(),
        }
    }
}

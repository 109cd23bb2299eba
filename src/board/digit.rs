use std::num::NonZeroU8;

/// A digit from 1 to 9, the only values a resolved cell can hold.
///
/// Blank cells are not digits; interfaces that deal in "digit or blank"
/// use `Option<Digit>`.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct Digit(NonZeroU8);

impl Digit {
    /// Constructs a new `Digit`.
    ///
    /// # Panic
    /// Panics, if `digit` is not in the range of `1..=9`.
    pub fn new(digit: u8) -> Self {
        Self::new_checked(digit).unwrap()
    }

    /// Constructs a new `Digit`. Returns `None` for anything outside
    /// `1..=9`, which makes this double as the blank-cell filter.
    pub fn new_checked(digit: u8) -> Option<Self> {
        match digit {
            1..=9 => NonZeroU8::new(digit).map(Digit),
            _ => None,
        }
    }

    /// Constructs a `Digit` from its `0`-based index, i.e. `digit - 1`.
    ///
    /// # Panic
    /// Panics, if the index is not in the range of `0..=8`.
    pub(crate) fn from_index(idx: u8) -> Self {
        Self::new(idx + 1)
    }

    /// Returns an iterator over all nine digits in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=9).map(Digit::new)
    }

    /// Returns the digit contained within.
    pub fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns the digit as a `0`-based `usize` for array access.
    pub fn as_index(self) -> usize {
        self.get() as usize - 1
    }
}

//! Cursor coordinates in a document.

/// A single point in a text buffer, in character columns.
/// 0-indexed as all things should be.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
  pub row: usize,
  pub col: usize,
}

impl Position {
  pub fn new(row: usize, col: usize) -> Self {
    Self { row, col }
  }

  pub const fn zero() -> Self {
    Self { row: 0, col: 0 }
  }

  /// A point on the same row, at a different column.
  pub fn with_col(self, col: usize) -> Self {
    Self { row: self.row, col }
  }
}

impl From<(usize, usize)> for Position {
  fn from((row, col): (usize, usize)) -> Self {
    Self { row, col }
  }
}

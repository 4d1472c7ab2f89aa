use std::fmt;

use super::player::PlayerId;
use crate::error::{MoveError, SetupError};

/// One grid position: empty, or owned by the player whose disc landed there.
/// A cell never changes once occupied — a game only adds pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(PlayerId),
}

/// A rectangular grid of cells with gravity along columns.
///
/// Dimensions are fixed at creation. Row 0 is the top, row `height - 1` is
/// the bottom; cells are stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board.
    ///
    /// Degenerate dimensions are a configuration error and are rejected
    /// here, not during play.
    pub fn new(width: usize, height: usize) -> Result<Self, SetupError> {
        if width == 0 || height == 0 {
            return Err(SetupError::InvalidDimensions { width, height });
        }
        Ok(Board {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at a position, or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        self.cells[col] != Cell::Empty
    }

    /// Drop a disc into a column, returning the row where it landed.
    ///
    /// The column is scanned from the bottom up, so the disc lands on the
    /// lowest empty cell. Both failures return before anything is written,
    /// leaving the board exactly as it was.
    pub fn drop_disc(&mut self, column: usize, player: PlayerId) -> Result<usize, MoveError> {
        if column >= self.width {
            return Err(MoveError::InvalidColumn {
                column,
                width: self.width,
            });
        }
        if self.is_column_full(column) {
            return Err(MoveError::ColumnFull { column });
        }

        // Find the lowest empty row in this column
        for row in (0..self.height).rev() {
            let idx = row * self.width + column;
            if self.cells[idx] == Cell::Empty {
                self.cells[idx] = Cell::Occupied(player);
                return Ok(row);
            }
        }

        unreachable!("column should not be full if is_column_full returned false");
    }

    /// Check if the board is completely full.
    pub fn is_full(&self) -> bool {
        (0..self.width).all(|col| self.is_column_full(col))
    }

    /// A new empty board with the same dimensions — what a rematch starts
    /// from.
    pub fn cleared(&self) -> Board {
        Board {
            width: self.width,
            height: self.height,
            cells: vec![Cell::Empty; self.width * self.height],
        }
    }

    /// Count of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }
}

/// One character per cell: `.` for empty, the terminal digit of the owner's
/// id otherwise. A debugging and test aid, not a UI.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let symbol = match self.cells[row * self.width + col] {
                    Cell::Empty => '.',
                    Cell::Occupied(id) => {
                        char::from_digit(id.0 % 10, 10).unwrap_or('?')
                    }
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const P1: PlayerId = PlayerId(0);
    const P2: PlayerId = PlayerId(1);

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(7, 6).unwrap();
        assert_eq!(board.width(), 7);
        assert_eq!(board.height(), 6);
        for row in 0..6 {
            for col in 0..7 {
                assert_eq!(board.cell(row, col), Some(Cell::Empty));
            }
        }
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_rejects_degenerate_dimensions() {
        assert_eq!(
            Board::new(0, 6),
            Err(SetupError::InvalidDimensions { width: 0, height: 6 })
        );
        assert_eq!(
            Board::new(7, 0),
            Err(SetupError::InvalidDimensions { width: 7, height: 0 })
        );
        assert_eq!(
            Board::new(0, 0),
            Err(SetupError::InvalidDimensions { width: 0, height: 0 })
        );
    }

    #[test]
    fn test_drop_lands_on_bottom_then_stacks() {
        let mut board = Board::new(7, 6).unwrap();

        let row = board.drop_disc(3, P1).unwrap();
        assert_eq!(row, 5); // bottom row has the highest index
        assert_eq!(board.cell(5, 3), Some(Cell::Occupied(P1)));

        let row = board.drop_disc(3, P2).unwrap();
        assert_eq!(row, 4);
        assert_eq!(board.cell(4, 3), Some(Cell::Occupied(P2)));
    }

    #[test]
    fn test_full_column_rejected_and_unchanged() {
        let mut board = Board::new(7, 6).unwrap();
        for _ in 0..6 {
            board.drop_disc(0, P1).unwrap();
        }
        assert!(board.is_column_full(0));

        let before = board.clone();
        assert_eq!(
            board.drop_disc(0, P2),
            Err(MoveError::ColumnFull { column: 0 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_invalid_column_rejected_and_unchanged() {
        let mut board = Board::new(7, 6).unwrap();
        let before = board.clone();
        assert_eq!(
            board.drop_disc(7, P1),
            Err(MoveError::InvalidColumn { column: 7, width: 7 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(7, 6).unwrap();
        for col in 0..7 {
            for _ in 0..6 {
                board.drop_disc(col, P1).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.occupied_count(), 42);
    }

    #[test]
    fn test_cell_out_of_bounds_is_none() {
        let board = Board::new(7, 6).unwrap();
        assert_eq!(board.cell(6, 0), None);
        assert_eq!(board.cell(0, 7), None);
        assert_eq!(board.cell(usize::MAX, usize::MAX), None);
    }

    #[test]
    fn test_display_marks_pieces_and_gaps() {
        let mut board = Board::new(3, 2).unwrap();
        board.drop_disc(0, P1).unwrap();
        board.drop_disc(2, P2).unwrap();
        assert_eq!(board.to_string(), ". . . \n0 . 1 \n");
    }

    #[test]
    fn test_cleared_keeps_dimensions_only() {
        let mut board = Board::new(4, 3).unwrap();
        board.drop_disc(2, P1).unwrap();

        let fresh = board.cleared();
        assert_eq!(fresh.width(), 4);
        assert_eq!(fresh.height(), 3);
        assert_eq!(fresh.occupied_count(), 0);
        // The original is untouched
        assert_eq!(board.cell(2, 2), Some(Cell::Occupied(P1)));
    }

    proptest! {
        /// On any board, a drop either lands on the lowest empty cell of its
        /// column without disturbing anything else, or fails on a full
        /// column leaving the board bit-identical.
        #[test]
        fn prop_drop_lands_low_and_disturbs_nothing(
            width in 1usize..9,
            height in 1usize..8,
            seed_cols in proptest::collection::vec(0usize..16, 0..64),
            target in 0usize..16,
        ) {
            let mut board = Board::new(width, height).unwrap();
            for (i, &col) in seed_cols.iter().enumerate() {
                let _ = board.drop_disc(col % width, PlayerId((i % 3) as u32));
            }

            let column = target % width;
            let before = board.clone();
            match board.drop_disc(column, PlayerId(9)) {
                Ok(row) => {
                    // Landed on the lowest cell that was empty
                    prop_assert_eq!(before.cell(row, column), Some(Cell::Empty));
                    prop_assert_eq!(board.cell(row, column), Some(Cell::Occupied(PlayerId(9))));
                    for r in row + 1..height {
                        prop_assert_ne!(board.cell(r, column), Some(Cell::Empty));
                    }
                    // Every other cell is exactly as it was
                    for r in 0..height {
                        for c in 0..width {
                            if (r, c) != (row, column) {
                                prop_assert_eq!(board.cell(r, c), before.cell(r, c));
                            }
                        }
                    }
                }
                Err(err) => {
                    prop_assert_eq!(err, MoveError::ColumnFull { column });
                    prop_assert!(before.is_column_full(column));
                    prop_assert_eq!(&board, &before);
                }
            }
        }
    }
}

// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board representation and marking

use crate::{Coord, GameError, Symbol};
use serde::{Deserialize, Serialize};

/// Number of rows and columns on the board
pub const BOARD_SIZE: usize = 3;

/// The 3x3 grid of cells, each empty or holding a symbol.
///
/// Boards are values: [`Board::mark_cell`] leaves `self` untouched and
/// returns the next snapshot. Serializes as nested rows with `null` for
/// empty cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[Option<Symbol>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the symbol at the specified coordinate
    pub fn get(&self, coord: Coord) -> Option<&Symbol> {
        if !coord.is_valid() {
            return None;
        }

        self.cells[coord.row][coord.col].as_ref()
    }

    /// Produce a board equal to this one except `coord` holds `symbol`.
    ///
    /// Occupied cells are overwritten; there is no turn or ownership check.
    pub fn mark_cell(&self, coord: Coord, symbol: Symbol) -> Result<Board, GameError> {
        if !coord.is_valid() {
            return Err(GameError::InvalidCoordinate {
                row: coord.row,
                col: coord.col,
            });
        }

        let mut next = self.clone();
        next.cells[coord.row][coord.col] = Some(symbol);
        Ok(next)
    }

    /// Rows of the board, top to bottom
    pub fn rows(&self) -> &[[Option<Symbol>; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Iterate over every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Option<&Symbol>)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(move |(col, cell)| (Coord::new(row, col), cell.as_ref()))
        })
    }

    /// Count cells holding a symbol
    pub fn occupied_count(&self) -> usize {
        self.cells().filter(|(_, cell)| cell.is_some()).count()
    }

    /// True when no cell has been marked
    pub fn is_empty(&self) -> bool {
        self.occupied_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.is_empty());
        assert_eq!(board.cells().count(), BOARD_SIZE * BOARD_SIZE);
    }

    #[test]
    fn test_mark_leaves_previous_snapshot() {
        let before = Board::new();
        let after = before.mark_cell(Coord::new(2, 1), Symbol::from("X")).unwrap();

        assert!(before.is_empty());
        assert_eq!(after.get(Coord::new(2, 1)), Some(&Symbol::from("X")));
    }

    #[test]
    fn test_cells_are_row_major() {
        let coords: Vec<Coord> = Board::new().cells().map(|(c, _)| c).collect();
        assert_eq!(coords[0], Coord::new(0, 0));
        assert_eq!(coords[1], Coord::new(0, 1));
        assert_eq!(coords[3], Coord::new(1, 0));
        assert_eq!(coords[8], Coord::new(2, 2));
    }

    #[test]
    fn test_get_out_of_range() {
        assert_eq!(Board::new().get(Coord::new(3, 0)), None);
    }
}

//! Board module - manages the game grid
//!
//! The board is a `width x height` grid where each cell is empty or holds the color
//! of a locked piece. Cells live in one flat row-major vector.
//! Coordinates are `(row, col)`: row 0 is the top, col 0 is the left edge.
//! Rows above the top (negative) are outside the grid but legal for a falling piece.

use crate::piece::Piece;
use crate::pieces::PieceShape;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// The settled-block grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= self.height || col as usize >= self.width {
            return None;
        }
        Some(row as usize * self.width + col as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at (row, col). Returns None if out of bounds.
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Whether a falling mino may sit at (row, col)
    ///
    /// Columns must be inside the grid and rows above the floor. Rows above the
    /// top are always open; rows inside the grid must be empty.
    pub fn is_open(&self, row: i32, col: i32) -> bool {
        if col < 0 || col as usize >= self.width {
            return false;
        }
        if row >= 0 && row as usize >= self.height {
            return false;
        }
        row < 0 || !self.is_occupied(row, col)
    }

    /// Check a piece placement, optionally shifted and/or with another shape.
    ///
    /// This is the single predicate behind every move, rotation and spawn check.
    /// It never mutates the board or the piece.
    pub fn is_valid(
        &self,
        piece: &Piece,
        d_row: i32,
        d_col: i32,
        shape_override: Option<&PieceShape>,
    ) -> bool {
        piece
            .cells_with(d_row, d_col, shape_override)
            .iter()
            .all(|&(row, col)| self.is_open(row, col))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .map(|cells| cells.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Borrow one row of cells
    pub fn row(&self, row: usize) -> Option<&[Cell]> {
        if row >= self.height {
            return None;
        }
        let start = row * self.width;
        Some(&self.cells[start..start + self.width])
    }

    /// Iterate rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width.max(1))
    }

    /// Write the piece's color into each of its cells that lies inside the grid.
    ///
    /// Cells above the top are dropped. No validity check is made.
    /// Returns the number of cells written.
    pub fn lock(&mut self, piece: &Piece) -> usize {
        let color = Some(piece.color());
        piece
            .cells()
            .iter()
            .filter(|&&(row, col)| self.set(row, col, color))
            .count()
    }

    /// Remove every full row and return how many were removed.
    ///
    /// Scans bottom to top, compacting surviving rows downward with a write
    /// pointer, then blanks the rows left over at the top. Equivalent to deleting
    /// each full row and inserting an empty one at the top, so the height never
    /// changes.
    pub fn clear_completed_lines(&mut self) -> usize {
        let width = self.width;
        let mut cleared = 0;
        let mut write_row = self.height;

        for read_row in (0..self.height).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * width;
                    self.cells.copy_within(src..src + width, write_row * width);
                }
            }
        }

        for cell in &mut self.cells[..write_row * width] {
            *cell = None;
        }

        cleared
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Copy into a row-major 2D vector
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}

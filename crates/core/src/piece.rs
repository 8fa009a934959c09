//! Piece module - the single movable tetromino instance
//!
//! A piece is fully described by its kind, rotation index and anchor. It owns no
//! board cells; bounds and collisions are checked by the board before a move is
//! committed.

use serde::Serialize;

use crate::pieces::{color_of, get_shape, rotation_count, PieceShape};
use crate::types::{Color, PieceKind};

/// Absolute board position as `(row, col)`
pub type CellPos = (i32, i32);

/// Active or upcoming falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: usize,
    pub row: i32,
    pub col: i32,
}

impl Piece {
    /// Create a piece in its first rotation state, anchored at (0, 0)
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: 0,
            row: 0,
            col: 0,
        }
    }

    /// Mino offsets for the current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    pub fn color(&self) -> Color {
        color_of(self.kind)
    }

    pub fn rotation_count(&self) -> usize {
        rotation_count(self.kind)
    }

    /// Advance the rotation index cyclically. Never fails; validity is the caller's job.
    pub fn rotate(&mut self) {
        self.rotation = (self.rotation + 1) % self.rotation_count();
    }

    /// Offsets the piece would use after one more rotation
    pub fn next_rotation_shape(&self) -> PieceShape {
        get_shape(self.kind, (self.rotation + 1) % self.rotation_count())
    }

    /// Absolute cells currently occupied
    pub fn cells(&self) -> [CellPos; 4] {
        self.cells_with(0, 0, None)
    }

    /// Absolute cells for a hypothetical offset and/or shape, without mutating
    pub fn cells_with(
        &self,
        d_row: i32,
        d_col: i32,
        shape_override: Option<&PieceShape>,
    ) -> [CellPos; 4] {
        let shape = match shape_override {
            Some(shape) => *shape,
            None => self.shape(),
        };
        shape.map(|(r, c)| (self.row + r + d_row, self.col + c + d_col))
    }
}

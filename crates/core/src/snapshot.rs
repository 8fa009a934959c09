use serde::Serialize;

use crate::piece::CellPos;
use crate::pieces::PieceShape;
use crate::types::{Cell, Color, GameStatus, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub color: Color,
    pub rotation: usize,
    pub row: i32,
    pub col: i32,
    pub cells: [CellPos; 4],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NextSnapshot {
    pub kind: PieceKind,
    pub color: Color,
    /// Offsets of the first rotation state, for a preview box
    pub offsets: PieceShape,
}

/// Everything a renderer reads once per frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    /// Rows top to bottom
    pub board: Vec<Vec<Cell>>,
    pub active: Option<ActiveSnapshot>,
    pub ghost_row: Option<i32>,
    /// Set only when the ghost sits below the active piece
    pub ghost_cells: Option<[CellPos; 4]>,
    pub next: NextSnapshot,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub status: GameStatus,
    pub paused: bool,
    pub game_over: bool,
    pub tick_interval_ms: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }

    /// Color drawn at (row, col): the active piece wins over the locked grid
    pub fn color_at(&self, row: i32, col: i32) -> Cell {
        if let Some(active) = &self.active {
            if active.cells.contains(&(row, col)) {
                return Some(active.color);
            }
        }
        if row < 0 || col < 0 {
            return None;
        }
        self.board
            .get(row as usize)
            .and_then(|cells| cells.get(col as usize))
            .copied()
            .flatten()
    }
}

//! Game state module - the engine surrounding code drives
//!
//! Ties together board, pieces, piece generation and scoring. Every command is
//! synchronous and finishes before returning; pacing belongs to the caller, which
//! reads [`GameState::tick_interval_ms`] to schedule its next [`GameState::tick`].
//!
//! Rule violations (blocked moves, blocked rotations, commands while paused or
//! after game over) come back as `false` and leave the state untouched.

use serde::Serialize;

use crate::board::Board;
use crate::config::{ConfigError, EngineConfig};
use crate::piece::{CellPos, Piece};
use crate::pieces::{top_aligned_row, try_rotate};
use crate::rng::PieceGenerator;
use crate::scoring::{calculate_score, tick_interval_ms};
use crate::snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};
use crate::types::{GameAction, GameStatus, PieceKind};

/// Record of the most recent lock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub score_gained: u32,
    /// Level after the lock was scored
    pub level: u32,
    /// The following spawn was blocked
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: EngineConfig,
    board: Board,
    /// Absent only after a blocked spawn
    active: Option<Piece>,
    next: Piece,
    generator: PieceGenerator,
    status: GameStatus,
    /// Landing row of the active piece, refreshed after every committed change
    ghost_row: Option<i32>,
    score: u32,
    lines: u32,
    level: u32,
    pieces_spawned: u32,
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a default 10x20 game with a seeded uniform generator
    pub fn new(seed: u64) -> Self {
        Self::build(EngineConfig::default(), PieceGenerator::uniform(seed))
    }

    /// Create a game from an explicit config and generator
    pub fn with_config(
        config: EngineConfig,
        generator: PieceGenerator,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, generator))
    }

    fn build(config: EngineConfig, mut generator: PieceGenerator) -> Self {
        let next = Piece::new(generator.draw());
        let mut state = Self {
            config,
            board: Board::new(config.width, config.height),
            active: None,
            next,
            generator,
            status: GameStatus::Active,
            ghost_row: None,
            score: 0,
            lines: 0,
            level: 1,
            pieces_spawned: 0,
            last_event: None,
        };
        state.reset();
        state
    }

    /// Start over: empty board, zeroed counters, active state, fresh spawn.
    ///
    /// Allowed in every state. The pending next piece becomes the first piece.
    pub fn reset(&mut self) {
        self.board = Board::new(self.config.width, self.config.height);
        self.active = None;
        self.status = GameStatus::Active;
        self.ghost_row = None;
        self.score = 0;
        self.lines = 0;
        self.level = 1;
        self.pieces_spawned = 0;
        self.last_event = None;
        self.spawn_next();
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn next(&self) -> Piece {
        self.next
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn paused(&self) -> bool {
        self.status == GameStatus::Paused
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    pub fn ghost_row(&self) -> Option<i32> {
        self.ghost_row
    }

    /// Cells the active piece would occupy at its ghost row
    pub fn ghost_cells(&self) -> Option<[CellPos; 4]> {
        let piece = self.active?;
        let ghost_row = self.ghost_row?;
        Some(piece.cells_with(ghost_row - piece.row, 0, None))
    }

    /// Recommended tick interval for the current level
    pub fn tick_interval_ms(&self) -> u32 {
        tick_interval_ms(
            self.level,
            self.config.base_interval_ms,
            self.config.min_interval_ms,
        )
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Active piece, but only while the game is running
    fn playable_piece(&self) -> Option<Piece> {
        match self.status {
            GameStatus::Active => self.active,
            GameStatus::Paused | GameStatus::GameOver => None,
        }
    }

    /// Promote the next piece to active and draw a new next piece.
    ///
    /// The piece is centered (anchor col = width / 2) with its top row on row 0.
    /// If that placement is blocked the game ends and no piece stays active.
    /// Only called once the previous piece is locked (or on reset).
    fn spawn_next(&mut self) -> bool {
        if self.status != GameStatus::Active {
            return false;
        }

        let fresh = Piece::new(self.generator.draw());
        let mut piece = std::mem::replace(&mut self.next, fresh);
        piece.col = (self.board.width() / 2) as i32;
        piece.row = top_aligned_row(&piece.shape());

        if !self.board.is_valid(&piece, 0, 0, None) {
            self.status = GameStatus::GameOver;
            self.active = None;
            self.ghost_row = None;
            return false;
        }

        self.active = Some(piece);
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
        self.compute_ghost();
        true
    }

    /// Recompute and store the ghost row for the active piece
    pub fn compute_ghost(&mut self) -> Option<i32> {
        self.ghost_row = self.active.map(|piece| self.landing_row(&piece));
        self.ghost_row
    }

    /// Lowest row the piece reaches by falling straight down
    fn landing_row(&self, piece: &Piece) -> i32 {
        let mut drop_distance = 0;
        while self.board.is_valid(piece, drop_distance + 1, 0, None) {
            drop_distance += 1;
        }
        piece.row + drop_distance
    }

    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_shift(1)
    }

    fn try_shift(&mut self, d_col: i32) -> bool {
        let Some(piece) = self.playable_piece() else {
            return false;
        };

        if !self.board.is_valid(&piece, 0, d_col, None) {
            return false;
        }

        self.active = Some(Piece {
            col: piece.col + d_col,
            ..piece
        });
        self.compute_ghost();
        true
    }

    /// Move down one row.
    ///
    /// When the piece cannot move down it is locked, full rows are cleared and
    /// the next piece spawns; that branch returns `false`.
    pub fn soft_drop(&mut self) -> bool {
        let Some(piece) = self.playable_piece() else {
            return false;
        };

        if self.board.is_valid(&piece, 1, 0, None) {
            self.active = Some(Piece {
                row: piece.row + 1,
                ..piece
            });
            self.compute_ghost();
            return true;
        }

        self.lock_and_spawn(piece);
        false
    }

    /// Place the piece on its ghost row and lock it
    pub fn hard_drop(&mut self) -> bool {
        let Some(piece) = self.playable_piece() else {
            return false;
        };

        let row = self
            .ghost_row
            .unwrap_or_else(|| self.landing_row(&piece));
        self.lock_and_spawn(Piece { row, ..piece });
        true
    }

    /// Advance to the next rotation state, kicking sideways if needed
    pub fn rotate(&mut self) -> bool {
        let Some(piece) = self.playable_piece() else {
            return false;
        };

        let board = &self.board;
        let result = try_rotate(piece.kind, piece.rotation, |shape, d_col| {
            board.is_valid(&piece, 0, d_col, Some(shape))
        });

        let Some((rotation, d_col)) = result else {
            return false;
        };

        self.active = Some(Piece {
            rotation,
            col: piece.col + d_col,
            ..piece
        });
        self.compute_ghost();
        true
    }

    /// Flip between active and paused. Does nothing after game over.
    pub fn toggle_pause(&mut self) -> bool {
        self.status = match self.status {
            GameStatus::Active => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Active,
            GameStatus::GameOver => return false,
        };
        true
    }

    /// Gravity step from the external pacer: one soft drop while active
    pub fn tick(&mut self) -> bool {
        if self.status != GameStatus::Active {
            return false;
        }
        self.soft_drop()
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Rotate => self.rotate(),
            GameAction::TogglePause => self.toggle_pause(),
            GameAction::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Lock the piece, clear full rows, score them and spawn the next piece
    fn lock_and_spawn(&mut self, piece: Piece) {
        self.board.lock(&piece);
        self.active = None;
        self.ghost_row = None;

        let cleared = self.board.clear_completed_lines();
        let result = calculate_score(cleared, self.lines, self.level);
        self.score = self.score.saturating_add(result.points);
        self.lines = result.total_lines;
        self.level = result.level;

        let spawned = self.spawn_next();

        self.last_event = Some(LockEvent {
            kind: piece.kind,
            lines_cleared: cleared as u32,
            score_gained: result.points,
            level: self.level,
            game_over: !spawned,
        });
    }

    /// Read-only view for renderers
    pub fn snapshot(&self) -> GameSnapshot {
        let active = self.active.map(|piece| ActiveSnapshot {
            kind: piece.kind,
            color: piece.color(),
            rotation: piece.rotation,
            row: piece.row,
            col: piece.col,
            cells: piece.cells(),
        });

        // Ghost is only worth drawing when it sits below the piece.
        let ghost_cells = match (self.active, self.ghost_row) {
            (Some(piece), Some(row)) if row > piece.row => self.ghost_cells(),
            _ => None,
        };

        GameSnapshot {
            width: self.board.width(),
            height: self.board.height(),
            board: self.board.to_rows(),
            active,
            ghost_row: self.ghost_row,
            ghost_cells,
            next: NextSnapshot {
                kind: self.next.kind,
                color: self.next.color(),
                offsets: self.next.shape(),
            },
            score: self.score,
            level: self.level,
            lines: self.lines,
            status: self.status,
            paused: self.paused(),
            game_over: self.game_over(),
            tick_interval_ms: self.tick_interval_ms(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::build(EngineConfig::default(), PieceGenerator::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Color;

    fn scripted(kinds: &[PieceKind]) -> GameState {
        let generator = PieceGenerator::sequence(kinds.iter().copied()).unwrap();
        GameState::with_config(EngineConfig::default(), generator).unwrap()
    }

    fn fill_row_except(state: &mut GameState, row: i32, gaps: &[i32]) {
        for col in 0..10 {
            if !gaps.contains(&col) {
                state.board_mut().set(row, col, Some(Color::Red));
            }
        }
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert_eq!(state.status(), GameStatus::Active);
        assert_eq!(state.score(), 0);
        assert_eq!(state.level(), 1);
        assert_eq!(state.lines(), 0);
        assert_eq!(state.pieces_spawned(), 1);
        assert!(state.active().is_some());
        assert!(state.ghost_row().is_some());
    }

    #[test]
    fn test_spawn_position_for_every_kind() {
        for kind in PieceKind::ALL {
            let state = scripted(&[kind]);
            let piece = state.active().unwrap();

            assert_eq!(piece.kind, kind);
            assert_eq!(piece.col, 5, "{:?}", kind);
            let top = piece.cells().iter().map(|&(row, _)| row).min().unwrap();
            assert_eq!(top, 0, "{:?} should touch row 0", kind);
        }
    }

    #[test]
    fn test_spawn_promotes_next() {
        let mut state = scripted(&[PieceKind::T, PieceKind::S, PieceKind::Z]);
        assert_eq!(state.active().unwrap().kind, PieceKind::T);
        assert_eq!(state.next().kind, PieceKind::S);

        assert!(state.hard_drop());
        assert_eq!(state.active().unwrap().kind, PieceKind::S);
        assert_eq!(state.next().kind, PieceKind::Z);
        assert_eq!(state.pieces_spawned(), 2);
    }

    #[test]
    fn test_spawn_follows_lock() {
        let mut state = scripted(&[PieceKind::T, PieceKind::O]);
        let t_cells = state.active().unwrap().cells();

        assert!(state.hard_drop());
        // The T is on the board before the O replaces it.
        let landed_row = state.board().height() as i32 - 1;
        assert_eq!(state.board().filled_count(), 4);
        assert_eq!(state.board().get(landed_row, 4), Some(Some(Color::Magenta)));
        assert_ne!(state.active().unwrap().cells(), t_cells);
        assert_eq!(state.active().unwrap().kind, PieceKind::O);
        assert_eq!(state.pieces_spawned(), 2);
    }

    #[test]
    fn test_o_piece_soft_drops_to_floor() {
        let mut state = scripted(&[PieceKind::O, PieceKind::T]);

        let mut steps = 0;
        while state.soft_drop() {
            steps += 1;
        }
        assert_eq!(steps, 18);

        let board = state.board();
        for (row, col) in [(18, 5), (18, 6), (19, 5), (19, 6)] {
            assert_eq!(board.get(row, col), Some(Some(Color::Yellow)));
        }
        assert_eq!(board.filled_count(), 4);
        assert_eq!(state.lines(), 0);
        assert_eq!(state.score(), 0);
        assert_eq!(state.active().unwrap().kind, PieceKind::T);
    }

    #[test]
    fn test_move_left_right() {
        let mut state = scripted(&[PieceKind::T]);
        let initial_col = state.active().unwrap().col;

        assert!(state.move_right());
        assert_eq!(state.active().unwrap().col, initial_col + 1);
        assert!(state.move_left());
        assert!(state.move_left());
        assert_eq!(state.active().unwrap().col, initial_col - 1);
    }

    #[test]
    fn test_move_stops_at_wall() {
        // T spans cols -1..=1 around its anchor, so col 1 is the leftmost anchor.
        let mut state = scripted(&[PieceKind::T]);
        let mut moved = 0;
        for _ in 0..10 {
            if state.move_left() {
                moved += 1;
            }
        }
        assert_eq!(moved, 4);
        assert_eq!(state.active().unwrap().col, 1);
    }

    #[test]
    fn test_blocked_move_leaves_state_unchanged() {
        let mut state = scripted(&[PieceKind::O]);
        state.board_mut().set(0, 7, Some(Color::Blue));
        let before = state.active();
        let ghost = state.ghost_row();

        assert!(!state.move_right());
        assert_eq!(state.active(), before);
        assert_eq!(state.ghost_row(), ghost);
    }

    #[test]
    fn test_hard_drop_single_line_clear() {
        let mut state = scripted(&[PieceKind::I, PieceKind::O]);
        // Horizontal I at anchor col 5 covers cols 4..=7.
        fill_row_except(&mut state, 19, &[4, 5, 6, 7]);

        assert!(state.hard_drop());

        assert_eq!(state.lines(), 1);
        assert_eq!(state.score(), 40);
        assert_eq!(state.board().filled_count(), 0);
        assert_eq!(state.board().height(), 20);

        let event = state.take_last_event().unwrap();
        assert_eq!(event.kind, PieceKind::I);
        assert_eq!(event.lines_cleared, 1);
        assert_eq!(event.score_gained, 40);
        assert!(!event.game_over);
        assert!(state.take_last_event().is_none());
    }

    #[test]
    fn test_clear_keeps_rows_above() {
        let mut state = scripted(&[PieceKind::O, PieceKind::T]);
        fill_row_except(&mut state, 19, &[5, 6]);
        state.board_mut().set(10, 0, Some(Color::Green));

        assert!(state.hard_drop());

        assert_eq!(state.lines(), 1);
        // Upper half of the O and the marker both shift down one row.
        assert_eq!(state.board().get(19, 5), Some(Some(Color::Yellow)));
        assert_eq!(state.board().get(19, 6), Some(Some(Color::Yellow)));
        assert_eq!(state.board().get(11, 0), Some(Some(Color::Green)));
        assert!(state.board().row(0).unwrap().iter().all(|c| c.is_none()));
    }

    #[test]
    fn test_score_uses_level_before_clear() {
        let mut state = scripted(&[PieceKind::I]);
        state.lines = 9;
        fill_row_except(&mut state, 19, &[4, 5, 6, 7]);

        assert!(state.hard_drop());

        assert_eq!(state.lines(), 10);
        assert_eq!(state.level(), 2);
        assert_eq!(state.score(), 40);
    }

    #[test]
    fn test_hard_drop_lands_on_ghost() {
        let mut state = scripted(&[PieceKind::L, PieceKind::O]);
        state.board_mut().set(12, 5, Some(Color::Blue));
        let piece = state.active().unwrap();
        let ghost = state.ghost_row().unwrap();
        let landed = Piece { row: ghost, ..piece };

        assert!(state.board().is_valid(&landed, 0, 0, None));
        assert!(!state.board().is_valid(&landed, 1, 0, None));

        assert!(state.hard_drop());
        for (row, col) in landed.cells() {
            assert_eq!(state.board().get(row, col), Some(Some(Color::DarkYellow)));
        }
    }

    #[test]
    fn test_ghost_tracks_moves() {
        let mut state = scripted(&[PieceKind::O]);
        assert_eq!(state.ghost_row(), Some(18));

        // A column stack at col 7 only matters after moving right.
        for row in 10..20 {
            state.board_mut().set(row, 7, Some(Color::Red));
        }
        state.compute_ghost();
        assert_eq!(state.ghost_row(), Some(18));

        assert!(state.move_right());
        assert_eq!(state.ghost_row(), Some(8));
        assert_eq!(
            state.ghost_cells(),
            Some([(8, 6), (8, 7), (9, 6), (9, 7)])
        );
    }

    #[test]
    fn test_compute_ghost_idempotent() {
        let mut state = GameState::new(99);
        let first = state.compute_ghost();
        let second = state.compute_ghost();
        assert_eq!(first, second);
        assert_eq!(state.ghost_row(), first);
    }

    #[test]
    fn test_rotate_in_open_space() {
        let mut state = scripted(&[PieceKind::T]);
        let col = state.active().unwrap().col;

        for expected in [1, 2, 3, 0] {
            assert!(state.rotate());
            let piece = state.active().unwrap();
            assert_eq!(piece.rotation, expected);
            assert_eq!(piece.col, col);
        }
    }

    #[test]
    fn test_rotate_o_piece_is_noop() {
        let mut state = scripted(&[PieceKind::O]);
        let before = state.active();
        assert!(state.rotate());
        assert_eq!(state.active(), before);
    }

    #[test]
    fn test_rotate_kicks_off_left_wall() {
        let mut state = scripted(&[PieceKind::I]);
        assert!(state.rotate()); // vertical
        while state.move_left() {}
        assert_eq!(state.active().unwrap().col, 0);

        // Horizontal at col 0 would need col -1; the first fitting kick is +1.
        assert!(state.rotate());
        let piece = state.active().unwrap();
        assert_eq!(piece.rotation, 0);
        assert_eq!(piece.col, 1);
        assert!(piece.cells().iter().all(|&(_, col)| col >= 0));
    }

    #[test]
    fn test_rotate_kicks_off_right_wall() {
        let mut state = scripted(&[PieceKind::I]);
        assert!(state.rotate());
        while state.move_right() {}
        assert_eq!(state.active().unwrap().col, 9);

        // Needs cols 8..=11; -1 and +1 still overflow, -2 fits.
        assert!(state.rotate());
        let piece = state.active().unwrap();
        assert_eq!(piece.rotation, 0);
        assert_eq!(piece.col, 7);
    }

    #[test]
    fn test_rotate_blocked_everywhere() {
        let mut state = scripted(&[PieceKind::I]);
        assert!(state.rotate()); // vertical at col 5, rows -1..=2
        fill_row_except(&mut state, 0, &[5]);
        let before = state.active();

        assert!(!state.rotate());
        assert_eq!(state.active(), before);
    }

    #[test]
    fn test_pause_blocks_commands() {
        let mut state = GameState::new(5);
        assert!(state.toggle_pause());
        assert!(state.paused());

        let before = state.active();
        assert!(!state.move_left());
        assert!(!state.move_right());
        assert!(!state.rotate());
        assert!(!state.soft_drop());
        assert!(!state.hard_drop());
        assert!(!state.tick());
        assert_eq!(state.active(), before);

        assert!(state.toggle_pause());
        assert_eq!(state.status(), GameStatus::Active);
        assert!(state.tick());
    }

    #[test]
    fn test_game_over_on_blocked_spawn() {
        let mut state = scripted(&[PieceKind::O]);

        // Each O adds two rows to the column stack; the tenth reaches row 0.
        for _ in 0..9 {
            assert!(state.hard_drop());
            assert!(!state.game_over());
        }
        assert!(state.hard_drop());

        assert!(state.game_over());
        assert!(state.active().is_none());
        assert!(state.ghost_row().is_none());
        assert!(state.take_last_event().unwrap().game_over);

        assert!(!state.move_left());
        assert!(!state.rotate());
        assert!(!state.hard_drop());
        assert!(!state.tick());
        assert!(!state.toggle_pause());
        assert!(!state.spawn_next());
        assert_eq!(state.status(), GameStatus::GameOver);
    }

    #[test]
    fn test_reset_after_game_over() {
        let mut state = scripted(&[PieceKind::O, PieceKind::I]);
        while !state.game_over() {
            state.hard_drop();
        }

        assert!(state.apply_action(GameAction::Reset));
        assert_eq!(state.status(), GameStatus::Active);
        assert_eq!(state.score(), 0);
        assert_eq!(state.lines(), 0);
        assert_eq!(state.level(), 1);
        assert_eq!(state.pieces_spawned(), 1);
        assert_eq!(state.board().filled_count(), 0);
        assert!(state.active().is_some());
        assert!(state.take_last_event().is_none());
    }

    #[test]
    fn test_tick_soft_drops_and_locks() {
        let mut state = scripted(&[PieceKind::I, PieceKind::T]);
        let start_row = state.active().unwrap().row;

        assert!(state.tick());
        assert_eq!(state.active().unwrap().row, start_row + 1);

        while state.tick() {}
        assert_eq!(state.active().unwrap().kind, PieceKind::T);
        assert_eq!(state.board().filled_count(), 4);
    }

    #[test]
    fn test_tick_interval_follows_level() {
        let mut state = GameState::new(1);
        assert_eq!(state.tick_interval_ms(), 500);
        state.level = 4;
        assert_eq!(state.tick_interval_ms(), 380);
        state.level = 30;
        assert_eq!(state.tick_interval_ms(), 50);
    }

    #[test]
    fn test_apply_action_mapping() {
        let mut state = scripted(&[PieceKind::T]);
        let col = state.active().unwrap().col;

        assert!(state.apply_action(GameAction::MoveRight));
        assert_eq!(state.active().unwrap().col, col + 1);
        assert!(state.apply_action(GameAction::MoveLeft));
        assert!(state.apply_action(GameAction::Rotate));
        assert_eq!(state.active().unwrap().rotation, 1);
        assert!(state.apply_action(GameAction::SoftDrop));
        assert!(state.apply_action(GameAction::TogglePause));
        assert!(state.paused());
        assert!(state.apply_action(GameAction::Reset));
        assert!(!state.paused());
        assert!(state.apply_action(GameAction::HardDrop));
        assert_eq!(state.board().filled_count(), 4);
    }

    #[test]
    fn test_snapshot_contents() {
        let mut state = scripted(&[PieceKind::J, PieceKind::S]);
        let snap = state.snapshot();

        assert_eq!((snap.width, snap.height), (10, 20));
        assert_eq!(snap.board.len(), 20);
        let active = snap.active.unwrap();
        assert_eq!(active.kind, PieceKind::J);
        assert_eq!(active.color, Color::Blue);
        assert_eq!(snap.next.kind, PieceKind::S);
        assert_eq!(snap.next.offsets, crate::pieces::get_shape(PieceKind::S, 0));
        assert!(snap.ghost_cells.is_some());
        assert_eq!(snap.tick_interval_ms, 500);

        // Once the piece sits on its ghost row there is nothing to preview.
        while state.soft_drop() {
            if state.active().unwrap().row == state.ghost_row().unwrap() {
                break;
            }
        }
        assert!(state.snapshot().ghost_cells.is_none());
    }
}

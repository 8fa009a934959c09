//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every rule of the falling-block engine. It has no
//! dependencies on rendering, input devices, clocks or I/O; callers drive it with
//! discrete commands and read its state back for display.
//!
//! # Module Structure
//!
//! - [`pieces`]: static shape catalog (rotation states, colors) and kick-based rotation
//! - [`piece`]: the movable piece instance
//! - [`board`]: grid with placement validity, locking and line clearing
//! - [`scoring`]: line bonus, level and tick interval math
//! - [`rng`]: uniform (or scripted) piece generation
//! - [`config`]: board size and pacing configuration
//! - [`game_state`]: the engine state machine (Active / Paused / GameOver)
//! - [`snapshot`]: read-only view for renderers
//!
//! # Game Rules
//!
//! - **Random pieces**: each spawn draws uniformly over the 7 kinds (no bag)
//! - **Rotation**: fixed offset tables, kicked sideways by 0, -1, +1, -2, +2 columns
//! - **Locking**: a piece locks only when it cannot move down (or on hard drop)
//! - **Ghost piece**: landing row, recomputed after every committed change
//! - **Scoring**: 40 / 100 / 300 / 1200 times the level before the clear
//! - **Leveling**: one level per 10 lines, starting at 1
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.board().filled_count(), 4);
//! assert!(game.active().is_some());
//! ```

pub mod board;
pub mod config;
pub mod game_state;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::{ConfigError, EngineConfig};
pub use game_state::{GameState, LockEvent};
pub use piece::{CellPos, Piece};
pub use pieces::{get_shape, try_rotate, PieceShape};
pub use rng::PieceGenerator;
pub use scoring::{calculate_score, tick_interval_ms, ScoreResult};
pub use snapshot::{ActiveSnapshot, GameSnapshot, NextSnapshot};

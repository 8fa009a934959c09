//! Blockfall (workspace facade crate).
//!
//! Re-exports the engine crates under `blockfall::{core, types}` and hosts the
//! headless simulation driver used by the `blockfall-sim` binary.
//!
//! ```
//! use blockfall::core::GameState;
//! use blockfall::types::GameAction;
//!
//! let mut game = GameState::new(7);
//! assert!(game.apply_action(GameAction::TogglePause));
//! assert!(!game.tick());
//! assert_eq!(game.snapshot().status.as_str(), "paused");
//! ```

pub use blockfall_core as core;
pub use blockfall_types as types;

pub mod sim;

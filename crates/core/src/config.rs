//! Engine configuration, fixed at construction

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pieces::spawn_fits_width;
use crate::types::{BASE_INTERVAL_MS, BOARD_HEIGHT, BOARD_WIDTH, MIN_INTERVAL_MS};

/// Smallest board side accepted; the width must also fit every spawn shape
pub const MIN_BOARD_SIDE: usize = 4;

/// Largest board side accepted
pub const MAX_BOARD_SIDE: usize = 255;

/// Errors raised while building an engine
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("board {width}x{height} is out of range (sides 4..=255, every piece must spawn in bounds)")]
    InvalidDimensions { width: usize, height: usize },

    #[error("invalid tick interval: base {base_ms}ms, floor {min_ms}ms")]
    InvalidInterval { base_ms: u32, min_ms: u32 },

    #[error("piece sequence is empty")]
    EmptySequence,

    #[error("failed to parse engine config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Board size and pacing parameters
///
/// Missing fields in a JSON document fall back to the defaults.
///
/// ```
/// use blockfall_core::EngineConfig;
///
/// let config = EngineConfig::from_json_str(r#"{ "width": 12 }"#).unwrap();
/// assert_eq!(config.width, 12);
/// assert_eq!(config.height, 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub width: usize,
    pub height: usize,
    pub base_interval_ms: u32,
    pub min_interval_ms: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            base_interval_ms: BASE_INTERVAL_MS,
            min_interval_ms: MIN_INTERVAL_MS,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let side_ok = |side: usize| (MIN_BOARD_SIDE..=MAX_BOARD_SIDE).contains(&side);
        if !side_ok(self.width) || !side_ok(self.height) || !spawn_fits_width(self.width) {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.min_interval_ms == 0 || self.min_interval_ms > self.base_interval_ms {
            return Err(ConfigError::InvalidInterval {
                base_ms: self.base_interval_ms,
                min_ms: self.min_interval_ms,
            });
        }
        Ok(())
    }

    /// Parse a JSON document and validate the result
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::GameState;
    use crate::rng::PieceGenerator;
    use crate::types::PieceKind;

    #[test]
    fn test_default_is_valid() {
        let config = EngineConfig::default();
        assert_eq!(config.width, 10);
        assert_eq!(config.height, 20);
        assert_eq!(config.base_interval_ms, 500);
        assert_eq!(config.min_interval_ms, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_tiny_board() {
        let config = EngineConfig {
            width: 3,
            ..EngineConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDimensions { width: 3, height: 20 })
        ));
    }

    #[test]
    fn test_width_must_fit_spawned_i() {
        let narrow = EngineConfig {
            width: 4,
            ..EngineConfig::default()
        };
        assert!(matches!(
            narrow.validate(),
            Err(ConfigError::InvalidDimensions { width: 4, height: 20 })
        ));

        let config = EngineConfig {
            width: 5,
            ..EngineConfig::default()
        };
        let generator = PieceGenerator::sequence([PieceKind::I]).unwrap();
        let state = GameState::with_config(config, generator).unwrap();
        assert!(!state.game_over());
        let piece = state.active().unwrap();
        assert_eq!(piece.kind, PieceKind::I);
        assert!(piece.cells().iter().all(|&(_, col)| (0..5).contains(&col)));

        // Height keeps the plain minimum.
        let short = EngineConfig {
            width: 5,
            height: 4,
            ..EngineConfig::default()
        };
        assert!(short.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_intervals() {
        let zero_floor = EngineConfig {
            min_interval_ms: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(
            zero_floor.validate(),
            Err(ConfigError::InvalidInterval { .. })
        ));

        let inverted = EngineConfig {
            base_interval_ms: 40,
            ..EngineConfig::default()
        };
        assert!(matches!(
            inverted.validate(),
            Err(ConfigError::InvalidInterval { base_ms: 40, min_ms: 50 })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = EngineConfig::from_json_str(r#"{ "height": 24, "base_interval_ms": 800 }"#)
            .unwrap();
        assert_eq!(config.width, 10);
        assert_eq!(config.height, 24);
        assert_eq!(config.base_interval_ms, 800);
        assert_eq!(config.min_interval_ms, 50);
    }

    #[test]
    fn test_json_errors() {
        assert!(matches!(
            EngineConfig::from_json_str("{ not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            EngineConfig::from_json_str(r#"{ "width": 1000 }"#),
            Err(ConfigError::InvalidDimensions { .. })
        ));
    }
}

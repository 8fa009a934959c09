//! RNG module - piece generation
//!
//! Every draw is an independent uniform choice over the seven kinds. There is no
//! bag, so repeats and droughts happen.
//!
//! A fixed cycling sequence is also available for deterministic scenarios.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::ConfigError;
use crate::types::PieceKind;

#[derive(Debug, Clone)]
enum Rule {
    Uniform(StdRng),
    Sequence { kinds: Vec<PieceKind>, index: usize },
}

/// Source of new piece kinds
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rule: Rule,
}

impl PieceGenerator {
    /// Uniform generator with a reproducible seed
    pub fn uniform(seed: u64) -> Self {
        Self {
            rule: Rule::Uniform(StdRng::seed_from_u64(seed)),
        }
    }

    /// Uniform generator seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rule: Rule::Uniform(StdRng::from_entropy()),
        }
    }

    /// Cycle through a fixed list of kinds, starting at its first entry
    pub fn sequence(kinds: impl IntoIterator<Item = PieceKind>) -> Result<Self, ConfigError> {
        let kinds: Vec<PieceKind> = kinds.into_iter().collect();
        if kinds.is_empty() {
            return Err(ConfigError::EmptySequence);
        }
        Ok(Self {
            rule: Rule::Sequence { kinds, index: 0 },
        })
    }

    /// Draw the next piece kind
    pub fn draw(&mut self) -> PieceKind {
        match &mut self.rule {
            Rule::Uniform(rng) => PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())],
            Rule::Sequence { kinds, index } => {
                let kind = kinds[*index];
                *index = (*index + 1) % kinds.len();
                kind
            }
        }
    }

    pub fn is_uniform(&self) -> bool {
        matches!(self.rule, Rule::Uniform(_))
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

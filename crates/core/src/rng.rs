//! RNG module - piece selection
//!
//! Pieces are drawn with a plain uniform choice over the seven kinds (no bag, no
//! history). The source is pluggable so tests and replays can fix the sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::PieceKind;

/// Supplies the kind of every newly drawn piece
pub trait PieceSource {
    fn next_kind(&mut self) -> PieceKind;
}

/// Uniform choice over all seven kinds
#[derive(Debug, Clone)]
pub struct UniformRandom {
    rng: StdRng,
}

impl UniformRandom {
    /// Unseeded: every run deals a different sequence
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Same seed, same sequence
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for UniformRandom {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl PieceSource for UniformRandom {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())]
    }
}

/// Cycles through a fixed list of kinds
#[derive(Debug, Clone)]
pub struct Scripted {
    kinds: Vec<PieceKind>,
    cursor: usize,
}

impl Scripted {
    /// An empty list deals `O` pieces forever.
    pub fn new(kinds: Vec<PieceKind>) -> Self {
        Self {
            kinds,
            cursor: 0,
        }
    }

    /// Always the same kind
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new(vec![kind])
    }
}

impl PieceSource for Scripted {
    fn next_kind(&mut self) -> PieceKind {
        if self.kinds.is_empty() {
            return PieceKind::O;
        }
        let kind = self.kinds[self.cursor % self.kinds.len()];
        self.cursor = self.cursor.wrapping_add(1);
        kind
    }
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

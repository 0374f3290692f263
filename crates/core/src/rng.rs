//! RNG module - where the next piece comes from
//!
//! The engine draws pieces through the [`PieceSource`] trait:
//!
//! - [`UniformPieces`]: each draw picks one of the 7 kinds with equal
//!   probability, independent of history (no 7-bag).
//! - [`ScriptedPieces`]: replays a fixed sequence, for tests and replays.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::PieceKind;

/// Supplies the kind of every newly spawned piece.
pub trait PieceSource {
    fn next_kind(&mut self) -> PieceKind;
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

/// Uniform random piece generator
#[derive(Debug, Clone)]
pub struct UniformPieces {
    rng: StdRng,
}

impl UniformPieces {
    /// Deterministic generator: the same seed yields the same sequence.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl PieceSource for UniformPieces {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.gen_range(0..PieceKind::ALL.len())]
    }
}

/// Cycles through a fixed list of kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedPieces {
    kinds: Vec<PieceKind>,
    next: usize,
}

impl ScriptedPieces {
    /// # Panics
    ///
    /// Panics if `kinds` is empty.
    pub fn new(kinds: &[PieceKind]) -> Self {
        assert!(!kinds.is_empty(), "scripted piece sequence must not be empty");
        Self {
            kinds: kinds.to_vec(),
            next: 0,
        }
    }
}

impl PieceSource for ScriptedPieces {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.next];
        self.next = (self.next + 1) % self.kinds.len();
        kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_is_deterministic_per_seed() {
        let mut a = UniformPieces::new(12345);
        let mut b = UniformPieces::new(12345);
        for _ in 0..100 {
            assert_eq!(a.next_kind(), b.next_kind());
        }
    }

    #[test]
    fn test_uniform_covers_every_kind_roughly_evenly() {
        let mut source = UniformPieces::new(7);
        let mut counts = [0u32; 7];
        for _ in 0..7000 {
            let kind = source.next_kind();
            let idx = PieceKind::ALL.iter().position(|&k| k == kind).unwrap();
            counts[idx] += 1;
        }
        for (kind, count) in PieceKind::ALL.iter().zip(counts) {
            assert!(
                (800..1200).contains(&count),
                "{kind:?} drawn {count} times out of 7000"
            );
        }
    }

    #[test]
    fn test_uniform_allows_repeats() {
        // No bag: somewhere in a long run the same kind must come up twice in a row.
        let mut source = UniformPieces::new(99);
        let mut prev = source.next_kind();
        let mut repeated = false;
        for _ in 0..500 {
            let kind = source.next_kind();
            if kind == prev {
                repeated = true;
                break;
            }
            prev = kind;
        }
        assert!(repeated);
    }

    #[test]
    fn test_scripted_cycles() {
        let mut source = ScriptedPieces::new(&[PieceKind::O, PieceKind::I]);
        assert_eq!(source.next_kind(), PieceKind::O);
        assert_eq!(source.next_kind(), PieceKind::I);
        assert_eq!(source.next_kind(), PieceKind::O);
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn test_scripted_rejects_empty() {
        let _ = ScriptedPieces::new(&[]);
    }

    #[test]
    fn test_boxed_source() {
        let mut source: Box<dyn PieceSource> = Box::new(ScriptedPieces::new(&[PieceKind::T]));
        assert_eq!(source.next_kind(), PieceKind::T);
    }
}

//! RNG module - where piece kinds come from
//!
//! The round never picks kinds itself. It asks a [`KindSource`] for "one of the
//! seven kinds, uniformly", so tests can substitute a fixed sequence.
//!
//! Also provides a simple LCG that makes a seeded game reproducible.

use crate::types::BlockKind;

/// Capability to pick a piece kind
///
/// Implementations must only return the seven piece kinds, never
/// [`BlockKind::None`].
pub trait KindSource {
    fn next_kind(&mut self) -> BlockKind;
}

impl<S: KindSource + ?Sized> KindSource for &mut S {
    fn next_kind(&mut self) -> BlockKind {
        (**self).next_kind()
    }
}

impl<S: KindSource + ?Sized> KindSource for Box<S> {
    fn next_kind(&mut self) -> BlockKind {
        (**self).next_kind()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    pub fn new(seed: u32) -> Self {
        // A zero state would stay at the additive constant sequence forever; keep it non-zero.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        // state = a * state + c (mod 2^32)
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Random value in `[0, max)`
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle with short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl KindSource for SimpleRng {
    fn next_kind(&mut self) -> BlockKind {
        BlockKind::PIECES[self.next_range(BlockKind::PIECES.len() as u32) as usize]
    }
}

/// Cycles through a fixed list of kinds
///
/// Meant for deterministic tests and demos.
#[derive(Debug, Clone)]
pub struct KindSequence {
    kinds: Vec<BlockKind>,
    index: usize,
}

impl KindSequence {
    /// # Panics
    ///
    /// Panics if `kinds` is empty or contains [`BlockKind::None`].
    pub fn new(kinds: &[BlockKind]) -> Self {
        assert!(!kinds.is_empty(), "kind sequence must not be empty");
        assert!(
            kinds.iter().all(|k| !k.is_empty()),
            "kind sequence must only contain piece kinds"
        );
        Self {
            kinds: kinds.to_vec(),
            index: 0,
        }
    }

    /// Number of kinds handed out so far
    pub fn drawn(&self) -> usize {
        self.index
    }
}

impl KindSource for KindSequence {
    fn next_kind(&mut self) -> BlockKind {
        let kind = self.kinds[self.index % self.kinds.len()];
        self.index += 1;
        kind
    }
}

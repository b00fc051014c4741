//! Opponent move sources
//!
//! The session never picks the opponent's move itself; it asks a
//! [`MoveSource`]. Production code uses a random source, tests script one.

use std::collections::VecDeque;

use crate::error::MoveSelectionError;
use crate::moves::Move;
use crate::random::SeededRng;

/// Anything that can yield the opponent's next move.
pub trait MoveSource {
    fn next_move(&mut self) -> Result<Move, MoveSelectionError>;
}

impl<S: MoveSource + ?Sized> MoveSource for &mut S {
    fn next_move(&mut self) -> Result<Move, MoveSelectionError> {
        (**self).next_move()
    }
}

impl<S: MoveSource + ?Sized> MoveSource for Box<S> {
    fn next_move(&mut self) -> Result<Move, MoveSelectionError> {
        (**self).next_move()
    }
}

fn draw(rng: &mut SeededRng) -> Move {
    Move::ALL[rng.next_below(Move::ALL.len() as u32) as usize]
}

/// Deterministic uniform source
#[derive(Clone, Debug)]
pub struct SeededMoveSource {
    rng: SeededRng,
}

impl SeededMoveSource {
    pub fn new(seed: &[u8; 32], stream: u32) -> Self {
        Self { rng: SeededRng::new(seed, stream) }
    }
}

impl MoveSource for SeededMoveSource {
    fn next_move(&mut self) -> Result<Move, MoveSelectionError> {
        Ok(draw(&mut self.rng))
    }
}

/// Uniform source seeded from platform randomness on first use.
///
/// A failed seeding attempt is reported and retried on the next call.
#[derive(Clone, Debug)]
pub struct EntropyMoveSource {
    rng: Option<SeededRng>,
    seeder: fn() -> Result<SeededRng, MoveSelectionError>,
}

impl EntropyMoveSource {
    pub fn new() -> Self {
        Self::with_seeder(SeededRng::from_entropy)
    }

    pub(crate) fn with_seeder(seeder: fn() -> Result<SeededRng, MoveSelectionError>) -> Self {
        Self { rng: None, seeder }
    }
}

impl Default for EntropyMoveSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSource for EntropyMoveSource {
    fn next_move(&mut self) -> Result<Move, MoveSelectionError> {
        let mut rng = match self.rng.take() {
            Some(rng) => rng,
            None => (self.seeder)()?,
        };
        let m = draw(&mut rng);
        self.rng = Some(rng);
        Ok(m)
    }
}

/// Replays a fixed list of moves.
///
/// Once the list runs out every call fails with
/// [`MoveSelectionError::Exhausted`], unless built with [`ScriptedMoves::cycle`].
#[derive(Clone, Debug)]
pub struct ScriptedMoves {
    queue: VecDeque<Move>,
    repeat: bool,
}

impl ScriptedMoves {
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self { queue: moves.into_iter().collect(), repeat: false }
    }

    /// Loop over the moves forever. An empty list still reports exhaustion.
    pub fn cycle(moves: impl IntoIterator<Item = Move>) -> Self {
        Self { queue: moves.into_iter().collect(), repeat: true }
    }

    /// Always the same move.
    pub fn always(m: Move) -> Self {
        Self::cycle([m])
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl MoveSource for ScriptedMoves {
    fn next_move(&mut self) -> Result<Move, MoveSelectionError> {
        let m = self.queue.pop_front().ok_or(MoveSelectionError::Exhausted)?;
        if self.repeat {
            self.queue.push_back(m);
        }
        Ok(m)
    }
}

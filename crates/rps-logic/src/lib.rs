//! Game logic for Rock Paper Scissors
//!
//! The outcome rule and the per-page session state (score, last round,
//! theme). This crate is compiled to:
//! - Native (for tests and embedding)
//! - WASM (for the browser page)

mod error;
mod moves;
mod random;
mod session;
mod source;
mod theme;

#[cfg(feature = "wasm")]
mod wasm;

pub use error::{GameError, MoveSelectionError, Result};
pub use moves::{Move, Verdict};
pub use random::SeededRng;
pub use session::{DynSession, PlayOutcome, RoundResult, Score, Session, SessionConfig, SessionState};
pub use source::{EntropyMoveSource, MoveSource, ScriptedMoves, SeededMoveSource};
pub use theme::Theme;

/// Outcome of `player` against `opponent`, from the player's side
pub fn resolve(player: Move, opponent: Move) -> Verdict {
    if player == opponent {
        Verdict::Draw
    } else if player.beats() == opponent {
        Verdict::Win
    } else {
        Verdict::Lose
    }
}

/// [`resolve`] for moves given by name
pub fn resolve_str(player: &str, opponent: &str) -> Result<Verdict> {
    Ok(resolve(player.parse()?, opponent.parse()?))
}

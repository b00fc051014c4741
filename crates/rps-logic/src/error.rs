//! Error types surfaced by the resolver and the session

use thiserror::Error;

/// Errors visible to callers of the game API.
///
/// Every variant leaves the session exactly as it was before the failing call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Input could not be turned into Rock, Paper or Scissors.
    #[error("invalid move: {input:?} (expected rock, paper or scissors)")]
    InvalidMove { input: String },

    /// The opponent move source could not produce a move.
    #[error("opponent move selection failed: {0}")]
    MoveSelection(#[from] MoveSelectionError),

    /// Session configuration was malformed.
    #[error("invalid session config: {0}")]
    Config(String),
}

impl GameError {
    pub fn invalid_move(input: impl Into<String>) -> Self {
        Self::InvalidMove { input: input.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Why a [`MoveSource`](crate::MoveSource) failed to yield a move.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveSelectionError {
    /// A finite scripted sequence has no moves left.
    #[error("move source exhausted")]
    Exhausted,

    /// The platform randomness source is unavailable.
    #[error("randomness unavailable: {0}")]
    Entropy(String),
}

pub type Result<T> = std::result::Result<T, GameError>;

//! Moves and verdicts

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// A move in Rock Paper Scissors
///
/// Deserializes through [`FromStr`], so bad input reports [`GameError::InvalidMove`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// All moves, in the order the page lays out its buttons.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// The move this one defeats.
    pub fn beats(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Scissors => Move::Paper,
            Move::Paper => Move::Rock,
        }
    }

    /// Stable lowercase identifier, same as the serde form.
    pub fn id(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }

    /// Button label
    pub fn label(self) -> &'static str {
        match self {
            Move::Rock => "✊ Rock",
            Move::Paper => "✋ Paper",
            Move::Scissors => "✌️ Scissors",
        }
    }

    /// Position in [`Move::ALL`].
    pub fn index(self) -> u8 {
        match self {
            Move::Rock => 0,
            Move::Paper => 1,
            Move::Scissors => 2,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Move {
    type Err = GameError;

    /// Accepts the identifiers case-insensitively, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Move::ALL
            .into_iter()
            .find(|m| m.id().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| GameError::invalid_move(s))
    }
}

impl TryFrom<String> for Move {
    type Error = GameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl TryFrom<u8> for Move {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Move::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| GameError::invalid_move(value.to_string()))
    }
}

/// Outcome of a round from the perspective of the first party
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Win,
    Lose,
    Draw,
}

impl Verdict {
    /// The same round seen from the other side.
    pub fn flip(self) -> Verdict {
        match self {
            Verdict::Win => Verdict::Lose,
            Verdict::Lose => Verdict::Win,
            Verdict::Draw => Verdict::Draw,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Verdict::Win => "win",
            Verdict::Lose => "lose",
            Verdict::Draw => "draw",
        }
    }

    /// Result banner shown after a round.
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Win => "You Win! 🎉",
            Verdict::Lose => "You Lose! 😥",
            Verdict::Draw => "It's a Draw.",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beats_cycle() {
        assert_eq!(Move::Rock.beats(), Move::Scissors);
        assert_eq!(Move::Scissors.beats(), Move::Paper);
        assert_eq!(Move::Paper.beats(), Move::Rock);

        // Every move is beaten by exactly one other
        for m in Move::ALL {
            let beaten_by = Move::ALL.iter().filter(|o| o.beats() == m).count();
            assert_eq!(beaten_by, 1, "{:?} beaten by {} moves", m, beaten_by);
        }
    }

    #[test]
    fn test_parse_moves() {
        assert_eq!("rock".parse::<Move>().unwrap(), Move::Rock);
        assert_eq!("Paper".parse::<Move>().unwrap(), Move::Paper);
        assert_eq!("  SCISSORS ".parse::<Move>().unwrap(), Move::Scissors);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for bad in ["", "lizard", "spock", "rocks", "r"] {
            let err = bad.parse::<Move>().unwrap_err();
            assert_eq!(err, GameError::invalid_move(bad));
        }
    }

    #[test]
    fn test_try_from_index() {
        for m in Move::ALL {
            assert_eq!(Move::try_from(m.index()).unwrap(), m);
        }
        assert_eq!(Move::try_from(3u8), Err(GameError::invalid_move("3")));
        assert!(Move::try_from(255u8).is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Move::Scissors).unwrap(), "\"scissors\"");
        assert_eq!(serde_json::to_string(&Verdict::Lose).unwrap(), "\"lose\"");

        let m: Move = serde_json::from_str("\"paper\"").unwrap();
        assert_eq!(m, Move::Paper);
        let err = serde_json::from_str::<Move>("\"lizard\"").unwrap_err();
        assert!(
            err.to_string().contains(&GameError::invalid_move("lizard").to_string()),
            "unexpected serde error: {}",
            err
        );
    }

    #[test]
    fn test_labels() {
        assert_eq!(Move::Rock.to_string(), "✊ Rock");
        assert_eq!(Verdict::Win.to_string(), "You Win! 🎉");
        assert_eq!(Verdict::Draw.message(), "It's a Draw.");
    }

    #[test]
    fn test_flip() {
        assert_eq!(Verdict::Win.flip(), Verdict::Lose);
        assert_eq!(Verdict::Lose.flip(), Verdict::Win);
        assert_eq!(Verdict::Draw.flip(), Verdict::Draw);
    }
}

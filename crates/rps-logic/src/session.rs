//! Session state: score tally, last round and theme

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};
use crate::moves::{Move, Verdict};
use crate::resolve;
use crate::source::{EntropyMoveSource, MoveSource, SeededMoveSource};
use crate::theme::Theme;

/// Running tally since the session started or was last reset
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub win: u32,
    pub lose: u32,
    pub draw: u32,
}

impl Score {
    pub fn get(&self, verdict: Verdict) -> u32 {
        match verdict {
            Verdict::Win => self.win,
            Verdict::Lose => self.lose,
            Verdict::Draw => self.draw,
        }
    }

    /// Count one more round with this verdict.
    pub fn record(&mut self, verdict: Verdict) {
        let counter = match verdict {
            Verdict::Win => &mut self.win,
            Verdict::Lose => &mut self.lose,
            Verdict::Draw => &mut self.draw,
        };
        *counter = counter.saturating_add(1);
    }

    /// Rounds played. Summed in u64 so three saturated counters still fit.
    pub fn rounds(&self) -> u64 {
        self.win as u64 + self.lose as u64 + self.draw as u64
    }
}

/// The most recently completed round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundResult {
    pub player_move: Move,
    pub opponent_move: Move,
    pub verdict: Verdict,
}

/// Returned by [`Session::play`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOutcome {
    pub player_move: Move,
    pub opponent_move: Move,
    pub verdict: Verdict,
    pub score: Score,
}

/// Read-only snapshot for rendering
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub score: Score,
    pub last_round: Option<RoundResult>,
    pub theme: Theme,
}

impl SessionState {
    /// Shown in place of the status line before the first round.
    pub const PROMPT: &'static str = "Select your move to play!";

    /// "You picked ... – Computer picked ..." once a round has been played.
    pub fn status_line(&self) -> Option<String> {
        self.last_round.map(|r| {
            format!(
                "You picked {} – Computer picked {}",
                r.player_move.label(),
                r.opponent_move.label()
            )
        })
    }

    /// Status line, or [`SessionState::PROMPT`] when no round has been played.
    pub fn prompt(&self) -> String {
        self.status_line()
            .unwrap_or_else(|| Self::PROMPT.to_string())
    }
}

/// Session construction options
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Starting theme
    pub theme: Theme,
    /// Fixes the opponent's move sequence. `None` draws from platform randomness.
    pub seed: Option<[u8; 32]>,
}

impl SessionConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| GameError::config(e.to_string()))
    }

    /// Opponent source matching this config.
    pub fn move_source(&self) -> Box<dyn MoveSource> {
        match &self.seed {
            Some(seed) => Box::new(SeededMoveSource::new(seed, 0)),
            None => Box::new(EntropyMoveSource::new()),
        }
    }
}

/// A single player's game against a random opponent.
///
/// Every transition either applies completely or leaves the session as it was.
pub struct Session<S: MoveSource> {
    source: S,
    score: Score,
    last_round: Option<RoundResult>,
    theme: Theme,
}

/// Session whose opponent source is chosen at runtime.
pub type DynSession = Session<Box<dyn MoveSource>>;

impl<S: MoveSource> Session<S> {
    pub fn new(source: S) -> Self {
        Self::with_theme(source, Theme::default())
    }

    pub fn with_theme(source: S, theme: Theme) -> Self {
        Self {
            source,
            score: Score::default(),
            last_round: None,
            theme,
        }
    }

    /// Play one round against the next opponent move.
    pub fn play(&mut self, player_move: Move) -> Result<PlayOutcome> {
        let opponent_move = self.source.next_move().map_err(|e| {
            warn!("opponent move unavailable, round skipped: {}", e);
            GameError::from(e)
        })?;

        let verdict = resolve(player_move, opponent_move);
        self.last_round = Some(RoundResult { player_move, opponent_move, verdict });
        self.score.record(verdict);

        debug!(
            "round {}: {} vs {} -> {}",
            self.score.rounds(),
            player_move.id(),
            opponent_move.id(),
            verdict.id()
        );

        Ok(PlayOutcome {
            player_move,
            opponent_move,
            verdict,
            score: self.score,
        })
    }

    /// [`Session::play`] with a move given by name.
    pub fn play_str(&mut self, player_move: &str) -> Result<PlayOutcome> {
        let player_move = player_move.parse::<Move>()?;
        self.play(player_move)
    }

    /// Zero the score and forget the last round. The theme is kept.
    pub fn reset(&mut self) -> Score {
        debug!("reset after {} rounds", self.score.rounds());
        self.score = Score::default();
        self.last_round = None;
        self.score
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        debug!("theme -> {}", self.theme);
        self.theme
    }

    pub fn state(&self) -> SessionState {
        SessionState {
            score: self.score,
            last_round: self.last_round,
            theme: self.theme,
        }
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn last_round(&self) -> Option<RoundResult> {
        self.last_round
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }
}

impl DynSession {
    pub fn from_config(config: &SessionConfig) -> Self {
        Session::with_theme(config.move_source(), config.theme)
    }
}

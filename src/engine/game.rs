//! Match records and their state machine.
//!
//! A match is created Pending when the first participant plays a move naming
//! an opponent, and moves exactly once to a terminal state: Done (one side
//! won), Draw, or Cancelled. Terminal matches accept no further moves and
//! cannot be cancelled. Records are kept forever for historical queries.

use serde::{Deserialize, Serialize};

use crate::core::{resolve, MatchId, Move, Outcome, PlayerHandle};

/// Lifecycle state of a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchState {
    /// Waiting for the named opponent's move.
    Pending,
    /// Resolved with a winner.
    Done,
    /// Resolved with no winner.
    Draw,
    /// Abandoned before resolution.
    Cancelled,
}

impl MatchState {
    /// Check whether this state admits no further transition.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, MatchState::Pending)
    }
}

/// One side of a match: an identity and the move it has played, if any.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contender {
    /// Who is playing this side.
    pub handle: PlayerHandle,

    /// The move this side has played. `None` until the side plays.
    pub choice: Option<Move>,
}

impl Contender {
    /// A side that has not played yet.
    #[must_use]
    pub const fn new(handle: PlayerHandle) -> Self {
        Self {
            handle,
            choice: None,
        }
    }

    /// A side created with its move already on the table.
    #[must_use]
    pub const fn with_choice(handle: PlayerHandle, choice: Move) -> Self {
        Self {
            handle,
            choice: Some(choice),
        }
    }

    /// Check whether this side has played its move.
    #[must_use]
    pub const fn has_played(&self) -> bool {
        self.choice.is_some()
    }
}

/// One two-participant match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Unique id, assigned at creation.
    pub id: MatchId,

    /// The side that opened the match. Its move is set from creation.
    pub host: Contender,

    /// The side named by the host. Its move is set at resolution.
    pub opponent: Contender,

    /// Current lifecycle state.
    pub state: MatchState,
}

impl Match {
    /// Open a new Pending match with the host's move on the table.
    #[must_use]
    pub const fn open(id: MatchId, host: PlayerHandle, choice: Move, opponent: PlayerHandle) -> Self {
        Self {
            id,
            host: Contender::with_choice(host, choice),
            opponent: Contender::new(opponent),
            state: MatchState::Pending,
        }
    }

    /// Check whether the match still accepts the opponent's move.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self.state, MatchState::Pending)
    }

    /// The winning identity, or `PlayerHandle::EMPTY` when the match has no
    /// winner (Pending, Draw, Cancelled).
    #[must_use]
    pub fn winner(&self) -> PlayerHandle {
        match (self.state, self.host.choice, self.opponent.choice) {
            (MatchState::Done, Some(host), Some(opponent)) => match resolve(host, opponent) {
                Outcome::FirstWins => self.host.handle,
                Outcome::SecondWins => self.opponent.handle,
                Outcome::Draw => PlayerHandle::EMPTY,
            },
            _ => PlayerHandle::EMPTY,
        }
    }
}

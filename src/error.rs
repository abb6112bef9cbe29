//! Crate error taxonomy.
//!
//! Every fallible operation reports exactly one of these at the offending
//! call. Operations are all-or-nothing: after an error, no partial mutation
//! is observable. Nothing is retried internally.

use thiserror::Error;

use crate::core::{BoardId, MatchId, PlayerHandle};

/// Errors reported by the match and ranking engines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The referenced match id was never assigned.
    #[error("game {0} not found")]
    MatchNotFound(MatchId),

    /// The referenced board id was never assigned.
    #[error("leaderboard {0} not found")]
    BoardNotFound(BoardId),

    /// A state-changing operation hit a match already in a terminal state.
    #[error("game {0} has already finished")]
    AlreadyFinished(MatchId),

    /// The named identity cannot take part in the match: the empty handle,
    /// or a participant playing against itself.
    #[error("{0} is not a valid participant")]
    InvalidParticipant(PlayerHandle),

    /// Board update attempted after its validity window.
    #[error("leaderboard {0} cannot be updated anymore")]
    WindowClosed(BoardId),

    /// Score or streak arithmetic would exceed the representable range.
    #[error("score arithmetic overflowed")]
    Overflow,
}

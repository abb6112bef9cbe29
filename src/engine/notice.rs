//! Match notifications.
//!
//! Every state-changing call on the match engine returns exactly one
//! `MatchNotice` describing the transition it performed. Notices are plain
//! values so callers and tests assert on them directly; they are also what
//! `game_result` reconstructs for historical queries.

use serde::{Deserialize, Serialize};

use crate::core::{MatchId, PlayerHandle};
use crate::engine::game::{Contender, MatchState};

/// A state transition performed by the match engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchNotice {
    /// A match was opened and waits for its named opponent.
    Pending {
        /// The new match's id.
        match_id: MatchId,
    },

    /// A match resolved to Done or Draw.
    Finished {
        /// The resolved match's id.
        match_id: MatchId,
        /// The host side, move included.
        host: Contender,
        /// The opponent side, move included.
        opponent: Contender,
        /// `MatchState::Done` or `MatchState::Draw`.
        state: MatchState,
        /// The winning identity, `PlayerHandle::EMPTY` on a draw.
        winner: PlayerHandle,
    },

    /// A Pending match was abandoned.
    Cancelled {
        /// The cancelled match's id.
        match_id: MatchId,
    },
}

impl MatchNotice {
    /// The match this notice is about.
    #[must_use]
    pub fn match_id(&self) -> MatchId {
        match self {
            MatchNotice::Pending { match_id }
            | MatchNotice::Finished { match_id, .. }
            | MatchNotice::Cancelled { match_id } => *match_id,
        }
    }

    /// Check whether this notice reports an opened, unresolved match.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, MatchNotice::Pending { .. })
    }

    /// Check whether this notice reports a resolution.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        matches!(self, MatchNotice::Finished { .. })
    }

    /// The winner carried by a `Finished` notice, if there is one.
    ///
    /// Returns `None` for non-`Finished` notices and for draws.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerHandle> {
        match self {
            MatchNotice::Finished { winner, .. } if !winner.is_empty() => Some(*winner),
            _ => None,
        }
    }
}

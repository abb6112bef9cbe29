//! Board notifications.
//!
//! Every state-changing call on the ranking engine returns exactly one
//! `BoardNotice` describing the transition it performed.

use serde::{Deserialize, Serialize};

use crate::core::BoardId;

/// A state transition performed by the ranking engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardNotice {
    /// A board was allocated.
    Created {
        /// The new board's id.
        board_id: BoardId,
    },

    /// A board's entries were refreshed from its source.
    Updated {
        /// The refreshed board's id.
        board_id: BoardId,
    },
}

impl BoardNotice {
    /// The board this notice is about.
    #[must_use]
    pub fn board_id(&self) -> BoardId {
        match self {
            BoardNotice::Created { board_id } | BoardNotice::Updated { board_id } => *board_id,
        }
    }
}

//! The ranking engine: capped leaderboards over score sources.
//!
//! One `RankingEngine` owns a growing table of boards. Each board is bound
//! at creation to a shared score source and a validity window, and is
//! refreshed only by an explicit `update` call, so leaderboard cadence is
//! decoupled from match cadence. The engine reads sources and never writes
//! them; the dependency between the two engines runs in one direction.
//!
//! As with the match engine, all operations take `&mut self`; embedders
//! needing concurrent access wrap the engine in `Arc<Mutex<_>>`.
//!
//! ```
//! use std::sync::{Arc, Mutex};
//!
//! use roshambo::core::{Move, PlayerHandle, Timestamp};
//! use roshambo::engine::MatchEngine;
//! use roshambo::ranking::{RankingEngine, SharedSource};
//!
//! let engine = Arc::new(Mutex::new(MatchEngine::new()));
//! {
//!     let mut game = engine.lock().unwrap();
//!     game.play(PlayerHandle::new(1), Move::Rock, PlayerHandle::new(2)).unwrap();
//!     game.play(PlayerHandle::new(2), Move::Paper, PlayerHandle::new(1)).unwrap();
//! }
//!
//! let mut ranking = RankingEngine::new();
//! let source: SharedSource = engine.clone();
//! let board = ranking
//!     .create_board(source, Timestamp::new(0), Timestamp::new(600), 0)
//!     .board_id();
//! ranking.update(board, Timestamp::new(10)).unwrap();
//!
//! let (players, scores) = ranking.leaderboard_data(board).unwrap();
//! assert_eq!(players[0], PlayerHandle::new(2));
//! assert_eq!(scores[0], 12);
//! ```

pub mod board;
pub mod notice;
pub mod source;

pub use board::{Board, BoardEntry, DISPLAY_WIDTH};
pub use notice::BoardNotice;
pub use source::{shared, ScoreSource, SharedSource};

use tracing::debug;

use crate::core::{BoardId, PlayerHandle, Timestamp};
use crate::error::Error;

/// The ranking engine. See the module docs for the refresh model.
#[derive(Debug)]
pub struct RankingEngine {
    /// All boards ever created, indexed by id.
    boards: Vec<Board>,

    /// Display width applied to boards at creation.
    width: usize,
}

impl Default for RankingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RankingEngine {
    /// Create an engine whose boards display `DISPLAY_WIDTH` entries.
    #[must_use]
    pub fn new() -> Self {
        Self {
            boards: Vec::new(),
            width: DISPLAY_WIDTH,
        }
    }

    /// Set the display width applied to boards created from here on.
    #[must_use]
    pub fn with_display_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Allocate a board over `source` with the given validity window.
    ///
    /// The new board starts fully sentinel-padded. `stake` is stored
    /// verbatim; it carries no ranking semantics.
    pub fn create_board(
        &mut self,
        source: SharedSource,
        valid_from: Timestamp,
        valid_until: Timestamp,
        stake: u64,
    ) -> BoardNotice {
        let id = BoardId::new(self.boards.len() as u64);
        self.boards
            .push(Board::new(id, source, valid_from, valid_until, stake, self.width));
        debug!(board_id = id.raw(), stake, "board created");
        BoardNotice::Created { board_id: id }
    }

    /// Refresh a board from its source.
    ///
    /// Fails `BoardNotFound` for an unassigned id and `WindowClosed` when
    /// `now` is past `valid_until`. Idempotent while the underlying scores
    /// are unchanged.
    pub fn update(&mut self, id: BoardId, now: Timestamp) -> Result<BoardNotice, Error> {
        let board = self
            .boards
            .get_mut(id.raw() as usize)
            .ok_or(Error::BoardNotFound(id))?;
        if board.window_closed(now) {
            return Err(Error::WindowClosed(id));
        }
        board.pull();
        debug!(board_id = id.raw(), "board refreshed");
        Ok(BoardNotice::Updated { board_id: id })
    }

    /// The board's entries as parallel identity and score sequences, each
    /// exactly the display width, descending by score, sentinel-padded.
    ///
    /// Read-only; fails `BoardNotFound` for an unassigned id.
    pub fn leaderboard_data(&self, id: BoardId) -> Result<(Vec<PlayerHandle>, Vec<u64>), Error> {
        let board = self
            .boards
            .get(id.raw() as usize)
            .ok_or(Error::BoardNotFound(id))?;
        Ok(board
            .entries()
            .iter()
            .map(|entry| (entry.player, entry.score))
            .unzip())
    }

    /// The stored record for a board, if the id was assigned.
    #[must_use]
    pub fn board(&self, id: BoardId) -> Option<&Board> {
        self.boards.get(id.raw() as usize)
    }

    /// Number of boards ever created.
    #[must_use]
    pub fn board_count(&self) -> usize {
        self.boards.len()
    }
}

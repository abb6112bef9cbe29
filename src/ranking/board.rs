//! Leaderboards.
//!
//! A board is a fixed-width, time-windowed view over one score source. Its
//! entries always hold exactly `width` slots: the top scores seen at the
//! last refresh in descending order, padded with sentinel entries while
//! fewer participants exist.
//!
//! ## Refresh
//!
//! A refresh rebuilds the entries from the full candidate snapshot through
//! a size-capped ordered list: each candidate either fails the floor check
//! in O(1) or is inserted in rank order and the overflow truncated. The
//! candidate set is never fully sorted. Candidates arrive in the source's
//! first-seen order and an equal score never displaces an earlier
//! candidate, which makes the tie order stable and the refresh idempotent.

use std::sync::PoisonError;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{BoardId, PlayerHandle, Timestamp};
use crate::ranking::source::SharedSource;

/// Default number of entries a board displays.
pub const DISPLAY_WIDTH: usize = 10;

/// One ranked slot: an identity and the score it held at the last refresh.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardEntry {
    /// The ranked identity, `PlayerHandle::EMPTY` for an unfilled slot.
    pub player: PlayerHandle,

    /// The identity's score at the last refresh.
    pub score: u64,
}

impl BoardEntry {
    /// The padding value for slots below the participant count.
    #[must_use]
    pub const fn sentinel() -> Self {
        Self {
            player: PlayerHandle::EMPTY,
            score: 0,
        }
    }

    /// Check whether this slot is padding.
    #[must_use]
    pub const fn is_sentinel(&self) -> bool {
        self.player.is_empty()
    }
}

/// A capped, time-windowed leaderboard over one score source.
#[derive(Clone)]
pub struct Board {
    /// Unique id, assigned at creation.
    pub id: BoardId,

    /// Start of the validity window.
    pub valid_from: Timestamp,

    /// End of the validity window. Refreshes are rejected after this.
    pub valid_until: Timestamp,

    /// Opaque pass-through value attached at creation. No ranking
    /// semantics.
    pub stake: u64,

    width: usize,
    entries: SmallVec<[BoardEntry; DISPLAY_WIDTH]>,
    source: SharedSource,
}

impl Board {
    /// Create a board over `source` with all slots sentinel-padded.
    #[must_use]
    pub fn new(
        id: BoardId,
        source: SharedSource,
        valid_from: Timestamp,
        valid_until: Timestamp,
        stake: u64,
        width: usize,
    ) -> Self {
        Self {
            id,
            valid_from,
            valid_until,
            stake,
            width,
            entries: std::iter::repeat(BoardEntry::sentinel()).take(width).collect(),
            source,
        }
    }

    /// The ranked entries, exactly `width` of them, descending by score.
    #[must_use]
    pub fn entries(&self) -> &[BoardEntry] {
        &self.entries
    }

    /// The fixed display width.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Check whether `now` falls past the validity window.
    #[must_use]
    pub fn window_closed(&self, now: Timestamp) -> bool {
        now > self.valid_until
    }

    /// Snapshot the source and rebuild the entries from it.
    ///
    /// The source lock is released before the entries change.
    pub(crate) fn pull(&mut self) {
        let candidates: Vec<(PlayerHandle, u64)> = {
            let source = self.source.lock().unwrap_or_else(PoisonError::into_inner);
            source
                .known_players()
                .into_iter()
                .map(|player| (player, source.lifetime_score(player)))
                .collect()
        };
        self.refresh(candidates);
    }

    /// Fold a candidate snapshot into a fresh capped ranking.
    fn refresh<I>(&mut self, candidates: I)
    where
        I: IntoIterator<Item = (PlayerHandle, u64)>,
    {
        let mut top: SmallVec<[BoardEntry; DISPLAY_WIDTH]> = SmallVec::new();
        for (player, score) in candidates {
            if top.len() == self.width {
                // Full list: only a score strictly above the floor enters.
                match top.last() {
                    Some(floor) if score <= floor.score => continue,
                    Some(_) => {}
                    None => continue,
                }
            }
            // Insert after every entry scoring at least as much, so ties
            // keep the earlier candidate ahead.
            let slot = top
                .iter()
                .position(|entry| entry.score < score)
                .unwrap_or(top.len());
            top.insert(slot, BoardEntry { player, score });
            top.truncate(self.width);
        }
        while top.len() < self.width {
            top.push(BoardEntry::sentinel());
        }
        self.entries = top;
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("id", &self.id)
            .field("valid_from", &self.valid_from)
            .field("valid_until", &self.valid_until)
            .field("stake", &self.stake)
            .field("width", &self.width)
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::source::{shared, ScoreSource};

    fn handle(id: u64) -> PlayerHandle {
        PlayerHandle::new(id)
    }

    struct FixedScores(Vec<(PlayerHandle, u64)>);

    impl ScoreSource for FixedScores {
        fn known_players(&self) -> Vec<PlayerHandle> {
            self.0.iter().map(|(player, _)| *player).collect()
        }

        fn lifetime_score(&self, player: PlayerHandle) -> u64 {
            self.0
                .iter()
                .find(|(candidate, _)| *candidate == player)
                .map(|(_, score)| *score)
                .unwrap_or(0)
        }
    }

    fn empty_board(width: usize) -> Board {
        Board::new(
            BoardId::new(0),
            shared(FixedScores(Vec::new())),
            Timestamp::new(0),
            Timestamp::new(100),
            0,
            width,
        )
    }

    #[test]
    fn test_new_board_is_all_sentinels() {
        let board = empty_board(DISPLAY_WIDTH);
        assert_eq!(board.entries().len(), DISPLAY_WIDTH);
        assert!(board.entries().iter().all(BoardEntry::is_sentinel));
    }

    #[test]
    fn test_refresh_sorts_descending() {
        let mut board = empty_board(5);
        board.refresh([(handle(1), 10), (handle(2), 30), (handle(3), 20)]);

        let scores: Vec<u64> = board.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![30, 20, 10, 0, 0]);
        assert_eq!(board.entries()[0].player, handle(2));
        assert!(board.entries()[3].is_sentinel());
    }

    #[test]
    fn test_refresh_caps_at_width() {
        let mut board = empty_board(3);
        let candidates: Vec<_> = (1..=8).map(|n| (handle(n), n * 10)).collect();
        board.refresh(candidates);

        let scores: Vec<u64> = board.entries().iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![80, 70, 60]);
    }

    #[test]
    fn test_tie_keeps_first_seen_ahead() {
        let mut board = empty_board(3);
        board.refresh([(handle(1), 10), (handle(2), 20), (handle(3), 10)]);

        let players: Vec<PlayerHandle> = board.entries().iter().map(|e| e.player).collect();
        assert_eq!(players, vec![handle(2), handle(1), handle(3)]);
    }

    #[test]
    fn test_tie_at_floor_does_not_displace() {
        let mut board = empty_board(2);
        board.refresh([(handle(1), 10), (handle(2), 20), (handle(3), 10)]);

        let players: Vec<PlayerHandle> = board.entries().iter().map(|e| e.player).collect();
        assert_eq!(players, vec![handle(2), handle(1)]);
    }

    #[test]
    fn test_refresh_idempotent() {
        let mut board = empty_board(4);
        let candidates = [(handle(1), 10), (handle(2), 10), (handle(3), 25)];
        board.refresh(candidates);
        let first: Vec<BoardEntry> = board.entries().to_vec();

        board.refresh(candidates);
        assert_eq!(board.entries(), first.as_slice());
    }

    #[test]
    fn test_pull_snapshots_source() {
        let source = shared(FixedScores(vec![
            (handle(1), 5),
            (handle(2), 17),
            (handle(3), 12),
        ]));
        let mut board = Board::new(
            BoardId::new(0),
            source,
            Timestamp::new(0),
            Timestamp::new(100),
            0,
            DISPLAY_WIDTH,
        );
        board.pull();

        assert_eq!(board.entries()[0], BoardEntry { player: handle(2), score: 17 });
        assert_eq!(board.entries()[1], BoardEntry { player: handle(3), score: 12 });
        assert_eq!(board.entries()[2], BoardEntry { player: handle(1), score: 5 });
        assert!(board.entries()[3].is_sentinel());
    }

    #[test]
    fn test_window_boundary() {
        let board = empty_board(1);
        assert!(!board.window_closed(Timestamp::new(99)));
        assert!(!board.window_closed(Timestamp::new(100)));
        assert!(board.window_closed(Timestamp::new(101)));
    }

    #[test]
    fn test_entry_serialization() {
        let entry = BoardEntry {
            player: handle(4),
            score: 31,
        };
        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: BoardEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, deserialized);
    }
}

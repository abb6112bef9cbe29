//! The match engine: pairing, resolution, scoring.
//!
//! One `MatchEngine` owns a growing table of matches, the first-seen roster
//! of every identity that has appeared in one, and the score ledger those
//! matches feed. All operations take `&mut self`, so a single engine value
//! is a single-writer serialization point; embedders that need concurrent
//! access wrap the engine in `Arc<Mutex<_>>` and every call runs as one
//! critical section.
//!
//! ## Protocol
//!
//! `play(participant, choice, opponent)` either opens or resolves a match:
//!
//! - If some Pending match was opened by `opponent` naming `participant`,
//!   the call joins the earliest such match and resolves it on the spot:
//!   outcome, ledger application, and the terminal state transition happen
//!   within this one call. There is no separate settlement step, so a score
//!   query can never observe a finished match that has not been scored.
//! - Otherwise the call opens a new Pending match hosted by `participant`.
//!
//! Repeated plays in the same direction stack up additional Pending
//! matches; joins consume them oldest first.
//!
//! ```
//! use roshambo::core::{Move, PlayerHandle};
//! use roshambo::engine::MatchEngine;
//!
//! let mut engine = MatchEngine::new();
//! let alice = PlayerHandle::new(1);
//! let bob = PlayerHandle::new(2);
//!
//! let opened = engine.play(alice, Move::Rock, bob).unwrap();
//! assert!(opened.is_pending());
//!
//! let finished = engine.play(bob, Move::Paper, alice).unwrap();
//! assert_eq!(finished.winner(), Some(bob));
//! assert_eq!(engine.lifetime_score(bob), 12);
//! ```

pub mod game;
pub mod ledger;
pub mod notice;

pub use game::{Contender, Match, MatchState};
pub use ledger::{ScoreLedger, ScoreRecord, ScoreRules};
pub use notice::MatchNotice;

use serde::{Deserialize, Serialize};
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::core::{resolve, MatchId, Move, Outcome, PlayerHandle};
use crate::error::Error;
use crate::ranking::ScoreSource;

/// The match engine. See the module docs for the play protocol.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MatchEngine {
    /// All matches ever opened, indexed by id.
    matches: Vec<Match>,

    /// Every identity that has appeared in a match, first-seen order.
    roster: Vec<PlayerHandle>,
    seen: FxHashSet<PlayerHandle>,

    ledger: ScoreLedger,
}

impl MatchEngine {
    /// Create an engine with the default scoring rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with custom scoring rules.
    #[must_use]
    pub fn with_rules(rules: ScoreRules) -> Self {
        Self {
            ledger: ScoreLedger::with_rules(rules),
            ..Self::default()
        }
    }

    /// Submit a move. Opens a new Pending match or resolves an existing one,
    /// per the module-level protocol.
    ///
    /// Fails `InvalidParticipant` for the empty handle or a self-match.
    /// Fails `Overflow` if scoring the resolution would wrap; the match then
    /// stays Pending with no move recorded.
    pub fn play(
        &mut self,
        participant: PlayerHandle,
        choice: Move,
        opponent: PlayerHandle,
    ) -> Result<MatchNotice, Error> {
        if participant.is_empty() {
            return Err(Error::InvalidParticipant(participant));
        }
        if opponent.is_empty() || opponent == participant {
            return Err(Error::InvalidParticipant(opponent));
        }

        let joinable = self.matches.iter().enumerate().find_map(|(index, m)| {
            match (m.state, m.host.choice) {
                (MatchState::Pending, Some(host_choice))
                    if m.host.handle == opponent && m.opponent.handle == participant =>
                {
                    Some((index, host_choice))
                }
                _ => None,
            }
        });

        match joinable {
            Some((index, host_choice)) => self.settle(index, host_choice, choice),
            None => {
                let id = MatchId::new(self.matches.len() as u64);
                self.matches.push(Match::open(id, participant, choice, opponent));
                self.register(participant);
                self.register(opponent);
                debug!(
                    match_id = id.raw(),
                    host = participant.raw(),
                    opponent = opponent.raw(),
                    "match opened"
                );
                Ok(MatchNotice::Pending { match_id: id })
            }
        }
    }

    /// Abandon a Pending match.
    ///
    /// Fails `MatchNotFound` for an unassigned id and `AlreadyFinished` for
    /// any terminal state, Cancelled included. No score effects.
    pub fn cancel_game(&mut self, id: MatchId) -> Result<MatchNotice, Error> {
        let m = self
            .matches
            .get_mut(id.raw() as usize)
            .ok_or(Error::MatchNotFound(id))?;
        if !m.is_pending() {
            return Err(Error::AlreadyFinished(id));
        }
        m.state = MatchState::Cancelled;
        debug!(match_id = id.raw(), "match cancelled");
        Ok(MatchNotice::Cancelled { match_id: id })
    }

    /// Reconstruct the notice matching a match's current state: `Pending`,
    /// `Finished` (for Done and Draw), or `Cancelled`.
    ///
    /// Read-only; fails `MatchNotFound` for an unassigned id.
    pub fn game_result(&self, id: MatchId) -> Result<MatchNotice, Error> {
        let m = self
            .matches
            .get(id.raw() as usize)
            .ok_or(Error::MatchNotFound(id))?;
        Ok(match m.state {
            MatchState::Pending => MatchNotice::Pending { match_id: m.id },
            MatchState::Cancelled => MatchNotice::Cancelled { match_id: m.id },
            state @ (MatchState::Done | MatchState::Draw) => MatchNotice::Finished {
                match_id: m.id,
                host: m.host.clone(),
                opponent: m.opponent.clone(),
                state,
                winner: m.winner(),
            },
        })
    }

    /// Every identity that has ever appeared in a match, in first-seen
    /// order, duplicates suppressed. Participants of cancelled matches
    /// appear too.
    #[must_use]
    pub fn players(&self) -> &[PlayerHandle] {
        &self.roster
    }

    /// Lifetime score for an identity, 0 if never seen.
    #[must_use]
    pub fn lifetime_score(&self, handle: PlayerHandle) -> u64 {
        self.ledger.lifetime_score(handle)
    }

    /// Current consecutive-win count for an identity, 0 if never seen.
    #[must_use]
    pub fn win_streak(&self, handle: PlayerHandle) -> u64 {
        self.ledger.win_streak(handle)
    }

    /// Number of matches ever opened.
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// The stored record for a match, if the id was assigned.
    #[must_use]
    pub fn match_record(&self, id: MatchId) -> Option<&Match> {
        self.matches.get(id.raw() as usize)
    }

    /// The score ledger this engine writes to.
    #[must_use]
    pub fn ledger(&self) -> &ScoreLedger {
        &self.ledger
    }

    fn register(&mut self, handle: PlayerHandle) {
        if self.seen.insert(handle) {
            self.roster.push(handle);
        }
    }

    /// Resolve the match at `index` with the opponent's move.
    ///
    /// The ledger is applied before the match record is touched; a failed
    /// application leaves the match Pending with no move recorded.
    fn settle(
        &mut self,
        index: usize,
        host_choice: Move,
        opponent_choice: Move,
    ) -> Result<MatchNotice, Error> {
        let (host, opponent) = {
            let m = &self.matches[index];
            (m.host.handle, m.opponent.handle)
        };

        let (state, winner) = match resolve(host_choice, opponent_choice) {
            Outcome::Draw => {
                self.ledger.apply_draw(host, opponent)?;
                (MatchState::Draw, PlayerHandle::EMPTY)
            }
            Outcome::FirstWins => {
                self.ledger.apply_win(host, opponent)?;
                (MatchState::Done, host)
            }
            Outcome::SecondWins => {
                self.ledger.apply_win(opponent, host)?;
                (MatchState::Done, opponent)
            }
        };

        let m = &mut self.matches[index];
        m.opponent.choice = Some(opponent_choice);
        m.state = state;
        debug!(
            match_id = m.id.raw(),
            winner = winner.raw(),
            state = ?state,
            "match resolved"
        );
        Ok(MatchNotice::Finished {
            match_id: m.id,
            host: m.host.clone(),
            opponent: m.opponent.clone(),
            state,
            winner,
        })
    }
}

impl ScoreSource for MatchEngine {
    fn known_players(&self) -> Vec<PlayerHandle> {
        self.roster.clone()
    }

    fn lifetime_score(&self, player: PlayerHandle) -> u64 {
        self.ledger.lifetime_score(player)
    }
}

//! Lifetime scores and win streaks.
//!
//! The ledger keeps one record per participant: a lifetime score that only
//! ever grows, and the current run of consecutive wins. The match engine is
//! the only writer; it applies exactly one outcome per resolved match.
//!
//! ## Scoring
//!
//! With the default rules:
//!
//! - A draw pays both sides 5 points and breaks both streaks.
//! - The n-th consecutive win pays `10 + 2n` points: 12 for the first, 14
//!   for the second, 16 for the third. A loss pays nothing and breaks the
//!   loser's streak.
//!
//! All arithmetic is checked. An increment that would wrap reports
//! `Error::Overflow` and leaves every record untouched.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::PlayerHandle;
use crate::error::Error;

/// Scoring constants applied at match resolution.
///
/// `Default` carries the standard values; variants are configuration, not
/// code edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRules {
    /// Points paid to both sides of a draw.
    pub draw_points: u64,

    /// Base points for any win.
    pub win_base: u64,

    /// Extra points per position in the winner's current streak.
    pub streak_bonus: u64,
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self {
            draw_points: 5,
            win_base: 10,
            streak_bonus: 2,
        }
    }
}

/// Per-participant score state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Total points earned across all matches. Never decreases.
    pub lifetime_score: u64,

    /// Consecutive wins not yet broken by a loss or draw.
    pub win_streak: u64,
}

/// The per-engine store of score records.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ScoreLedger {
    rules: ScoreRules,
    records: FxHashMap<PlayerHandle, ScoreRecord>,
}

impl ScoreLedger {
    /// Create a ledger with the default scoring rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger with custom scoring rules.
    #[must_use]
    pub fn with_rules(rules: ScoreRules) -> Self {
        Self {
            rules,
            records: FxHashMap::default(),
        }
    }

    /// The rules this ledger scores by.
    #[must_use]
    pub fn rules(&self) -> ScoreRules {
        self.rules
    }

    /// The record for an identity. Identities never seen score 0.
    #[must_use]
    pub fn record(&self, handle: PlayerHandle) -> ScoreRecord {
        self.records.get(&handle).copied().unwrap_or_default()
    }

    /// Lifetime score for an identity, 0 if never seen.
    #[must_use]
    pub fn lifetime_score(&self, handle: PlayerHandle) -> u64 {
        self.record(handle).lifetime_score
    }

    /// Current consecutive-win count for an identity, 0 if never seen.
    #[must_use]
    pub fn win_streak(&self, handle: PlayerHandle) -> u64 {
        self.record(handle).win_streak
    }

    /// Score a drawn match: both sides earn the draw points and both
    /// streaks break.
    ///
    /// Both new records are computed before either is stored, so an
    /// overflow on either side leaves the ledger unchanged.
    pub fn apply_draw(&mut self, first: PlayerHandle, second: PlayerHandle) -> Result<(), Error> {
        let first_score = self
            .lifetime_score(first)
            .checked_add(self.rules.draw_points)
            .ok_or(Error::Overflow)?;
        let second_score = self
            .lifetime_score(second)
            .checked_add(self.rules.draw_points)
            .ok_or(Error::Overflow)?;

        self.records.insert(
            first,
            ScoreRecord {
                lifetime_score: first_score,
                win_streak: 0,
            },
        );
        self.records.insert(
            second,
            ScoreRecord {
                lifetime_score: second_score,
                win_streak: 0,
            },
        );
        trace!(first = first.raw(), second = second.raw(), "draw scored");
        Ok(())
    }

    /// Score a decided match: the winner's streak extends and pays
    /// `win_base + streak_bonus * streak`, the loser's streak breaks and
    /// its score stands.
    pub fn apply_win(&mut self, winner: PlayerHandle, loser: PlayerHandle) -> Result<(), Error> {
        let record = self.record(winner);
        let streak = record.win_streak.checked_add(1).ok_or(Error::Overflow)?;
        let points = self
            .rules
            .streak_bonus
            .checked_mul(streak)
            .and_then(|bonus| bonus.checked_add(self.rules.win_base))
            .ok_or(Error::Overflow)?;
        let score = record
            .lifetime_score
            .checked_add(points)
            .ok_or(Error::Overflow)?;

        self.records.insert(
            winner,
            ScoreRecord {
                lifetime_score: score,
                win_streak: streak,
            },
        );
        let loser_record = self.record(loser);
        self.records.insert(
            loser,
            ScoreRecord {
                lifetime_score: loser_record.lifetime_score,
                win_streak: 0,
            },
        );
        trace!(
            winner = winner.raw(),
            loser = loser.raw(),
            points,
            streak,
            "win scored"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handle(id: u64) -> PlayerHandle {
        PlayerHandle::new(id)
    }

    #[test]
    fn test_unknown_identity_scores_zero() {
        let ledger = ScoreLedger::new();
        assert_eq!(ledger.lifetime_score(handle(99)), 0);
        assert_eq!(ledger.win_streak(handle(99)), 0);
    }

    #[test]
    fn test_draw_pays_both_and_breaks_streaks() {
        let mut ledger = ScoreLedger::new();
        ledger.apply_win(handle(1), handle(2)).unwrap();
        assert_eq!(ledger.win_streak(handle(1)), 1);

        ledger.apply_draw(handle(1), handle(2)).unwrap();
        assert_eq!(ledger.lifetime_score(handle(1)), 12 + 5);
        assert_eq!(ledger.lifetime_score(handle(2)), 5);
        assert_eq!(ledger.win_streak(handle(1)), 0);
        assert_eq!(ledger.win_streak(handle(2)), 0);
    }

    #[test]
    fn test_streak_formula() {
        let mut ledger = ScoreLedger::new();

        ledger.apply_win(handle(1), handle(2)).unwrap();
        assert_eq!(ledger.lifetime_score(handle(1)), 12);

        ledger.apply_win(handle(1), handle(2)).unwrap();
        assert_eq!(ledger.lifetime_score(handle(1)), 12 + 14);

        ledger.apply_win(handle(1), handle(2)).unwrap();
        assert_eq!(ledger.lifetime_score(handle(1)), 12 + 14 + 16);
        assert_eq!(ledger.win_streak(handle(1)), 3);
    }

    #[test]
    fn test_loss_breaks_streak_and_keeps_score() {
        let mut ledger = ScoreLedger::new();
        ledger.apply_win(handle(1), handle(2)).unwrap();
        ledger.apply_win(handle(1), handle(2)).unwrap();
        assert_eq!(ledger.lifetime_score(handle(1)), 26);

        ledger.apply_win(handle(2), handle(1)).unwrap();
        assert_eq!(ledger.lifetime_score(handle(1)), 26);
        assert_eq!(ledger.win_streak(handle(1)), 0);
        assert_eq!(ledger.lifetime_score(handle(2)), 12);

        // Streak restarts from 1 after the break.
        ledger.apply_win(handle(1), handle(2)).unwrap();
        assert_eq!(ledger.lifetime_score(handle(1)), 26 + 12);
        assert_eq!(ledger.win_streak(handle(1)), 1);
    }

    #[test]
    fn test_draw_overflow_leaves_ledger_unchanged() {
        let rules = ScoreRules {
            draw_points: u64::MAX,
            ..ScoreRules::default()
        };
        let mut ledger = ScoreLedger::with_rules(rules);
        ledger.apply_draw(handle(1), handle(2)).unwrap();
        assert_eq!(ledger.lifetime_score(handle(1)), u64::MAX);

        // Either side wrapping must roll back the whole application.
        let err = ledger.apply_draw(handle(1), handle(2)).unwrap_err();
        assert_eq!(err, Error::Overflow);
        assert_eq!(ledger.lifetime_score(handle(1)), u64::MAX);
        assert_eq!(ledger.lifetime_score(handle(2)), u64::MAX);
        assert_eq!(ledger.win_streak(handle(1)), 0);
    }

    #[test]
    fn test_win_overflow_reported() {
        let rules = ScoreRules {
            win_base: u64::MAX,
            ..ScoreRules::default()
        };
        let mut ledger = ScoreLedger::with_rules(rules);

        let err = ledger.apply_win(handle(1), handle(2)).unwrap_err();
        assert_eq!(err, Error::Overflow);
        assert_eq!(ledger.lifetime_score(handle(1)), 0);
        assert_eq!(ledger.win_streak(handle(1)), 0);
        assert_eq!(ledger.win_streak(handle(2)), 0);
    }

    #[test]
    fn test_streak_bonus_mul_overflow_reported() {
        let rules = ScoreRules {
            streak_bonus: u64::MAX,
            win_base: 0,
            draw_points: 5,
        };
        let mut ledger = ScoreLedger::with_rules(rules);
        ledger.apply_win(handle(1), handle(2)).unwrap();

        // Second consecutive win multiplies the bonus by streak 2.
        let err = ledger.apply_win(handle(1), handle(2)).unwrap_err();
        assert_eq!(err, Error::Overflow);
        assert_eq!(ledger.lifetime_score(handle(1)), u64::MAX);
        assert_eq!(ledger.win_streak(handle(1)), 1);
    }

    #[test]
    fn test_serialization() {
        let mut ledger = ScoreLedger::new();
        ledger.apply_win(handle(1), handle(2)).unwrap();

        let json = serde_json::to_string(&ledger).unwrap();
        let deserialized: ScoreLedger = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.lifetime_score(handle(1)), 12);
        assert_eq!(deserialized.rules(), ScoreRules::default());
    }
}

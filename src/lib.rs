//! # roshambo
//!
//! A two-player rock-paper-scissors match engine with streak scoring and
//! capped leaderboards.
//!
//! ## Design Principles
//!
//! 1. **Symmetric Protocol**: One `play` call both opens and joins matches.
//!    Whether a call creates a pending match or resolves one depends only
//!    on what is already pending, never on which API the caller picked.
//!
//! 2. **Append-Only History**: Matches and boards are assigned dense ids
//!    and are never deleted. Finished and cancelled matches stay readable.
//!
//! 3. **Explicit Time**: Nothing reads a system clock. Operations that
//!    care about time take a `Timestamp` argument, so embedders control
//!    the clock and tests are deterministic.
//!
//! ## Architecture
//!
//! - **One-Way Score Flow**: The match engine accumulates lifetime scores;
//!   the ranking engine reads them through the `ScoreSource` trait. The
//!   ranking side never writes back.
//!
//! - **Capped Ranking**: Boards keep a size-capped ordered list and reject
//!   below-floor candidates in O(1) instead of sorting the candidate set.
//!
//! - **Single-Writer Engines**: All mutating operations take `&mut self`.
//!   Embedders wanting shared access wrap an engine in `Arc<Mutex<_>>`,
//!   which is exactly the shape the ranking side consumes.
//!
//! ## Modules
//!
//! - `core`: Player handles, match and board ids, moves, timestamps
//! - `engine`: Match lifecycle, streak scoring ledger, match notices
//! - `ranking`: Leaderboards, score sources, the ranking engine
//! - `error`: The crate-wide error type

pub mod core;
pub mod engine;
pub mod error;
pub mod ranking;

// Re-export commonly used types
pub use crate::core::{resolve, BoardId, MatchId, Move, Outcome, PlayerHandle, Timestamp};

pub use crate::error::Error;

pub use crate::engine::{
    Contender, Match, MatchEngine, MatchNotice, MatchState, ScoreLedger, ScoreRecord, ScoreRules,
};

pub use crate::ranking::{
    shared, Board, BoardEntry, BoardNotice, RankingEngine, ScoreSource, SharedSource,
    DISPLAY_WIDTH,
};

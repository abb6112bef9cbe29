//! Core vocabulary types: moves, resolution, identities, ids, timestamps.
//!
//! Everything here is a plain value type shared by both engines. Nothing in
//! this module holds state or performs I/O.

pub mod identity;
pub mod ids;
pub mod moves;
pub mod time;

pub use identity::PlayerHandle;
pub use ids::{BoardId, MatchId};
pub use moves::{resolve, Move, Outcome};
pub use time::Timestamp;

//! Read-only access to a score ledger.
//!
//! Boards never own the ledger they rank. They hold a shared handle to
//! anything that can report its participants and their scores, and pull a
//! snapshot from it on each refresh. The match engine implements this
//! trait; tests substitute fixtures.

use std::sync::{Arc, Mutex};

use crate::core::PlayerHandle;

/// A provider of participant scores.
///
/// Implementations must report a stable first-seen participant order:
/// refresh tie-breaking follows it.
pub trait ScoreSource {
    /// Every identity known to the source, first-seen order.
    fn known_players(&self) -> Vec<PlayerHandle>;

    /// Lifetime score for an identity, 0 if never seen.
    fn lifetime_score(&self, player: PlayerHandle) -> u64;
}

/// A shared handle to a score source.
///
/// Many boards may hold clones of one handle. Refreshes lock it once, take
/// the full snapshot, and release before merging, so a source is never held
/// across board mutation.
pub type SharedSource = Arc<Mutex<dyn ScoreSource + Send>>;

/// Wrap a source for sharing with boards.
pub fn shared<S>(source: S) -> SharedSource
where
    S: ScoreSource + Send + 'static,
{
    Arc::new(Mutex::new(source))
}

//! Participant identities.
//!
//! Participants are identified by an opaque `PlayerHandle`. The engine never
//! interprets handle values; callers allocate them however they like
//! (account ids, session ids, row keys).
//!
//! Handle 0 is reserved as `PlayerHandle::EMPTY`: it marks "no winner" on a
//! drawn match and pads leaderboard slots below the participant count. It is
//! never accepted as a match participant.

use serde::{Deserialize, Serialize};

/// Opaque unique handle identifying a participant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerHandle(pub u64);

impl PlayerHandle {
    /// The reserved empty identity (no winner, sentinel padding).
    pub const EMPTY: PlayerHandle = PlayerHandle(0);

    /// Create a handle from a raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw handle value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Check whether this is the reserved empty identity.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for PlayerHandle {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PlayerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_handle() {
        assert!(PlayerHandle::EMPTY.is_empty());
        assert!(PlayerHandle::new(0).is_empty());
        assert!(!PlayerHandle::new(1).is_empty());
        assert_eq!(PlayerHandle::EMPTY, PlayerHandle::new(0));
    }

    #[test]
    fn test_raw_round_trip() {
        let handle = PlayerHandle::new(42);
        assert_eq!(handle.raw(), 42);
        assert_eq!(PlayerHandle::from(42u64), handle);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", PlayerHandle::new(7)), "Player(7)");
    }

    #[test]
    fn test_serialization() {
        let handle = PlayerHandle::new(123);
        let json = serde_json::to_string(&handle).unwrap();
        let deserialized: PlayerHandle = serde_json::from_str(&json).unwrap();
        assert_eq!(handle, deserialized);
    }
}

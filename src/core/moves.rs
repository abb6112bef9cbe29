//! Moves and the pair resolver.
//!
//! The game has exactly three moves forming a dominance cycle:
//! Rock beats Scissors, Paper beats Rock, Scissors beats Paper.
//!
//! ## Resolution
//!
//! `resolve` maps an ordered pair of moves to an `Outcome` through an
//! explicit lookup over all 9 ordered pairs.
//!
//! ```
//! use roshambo::core::{resolve, Move, Outcome};
//!
//! assert_eq!(resolve(Move::Rock, Move::Scissors), Outcome::FirstWins);
//! assert_eq!(resolve(Move::Rock, Move::Paper), Outcome::SecondWins);
//! assert_eq!(resolve(Move::Rock, Move::Rock), Outcome::Draw);
//! ```

use serde::{Deserialize, Serialize};

/// One of the three playable moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    /// All moves, in declaration order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Check whether this move beats `other` under the three-cycle.
    ///
    /// A move never beats itself.
    ///
    /// ```
    /// use roshambo::core::Move;
    ///
    /// assert!(Move::Rock.beats(Move::Scissors));
    /// assert!(!Move::Rock.beats(Move::Paper));
    /// assert!(!Move::Rock.beats(Move::Rock));
    /// ```
    #[must_use]
    pub const fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Paper, Move::Rock)
                | (Move::Scissors, Move::Paper)
        )
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Rock => write!(f, "Rock"),
            Move::Paper => write!(f, "Paper"),
            Move::Scissors => write!(f, "Scissors"),
        }
    }
}

/// Result of resolving an ordered pair of moves.
///
/// `FirstWins`/`SecondWins` refer to argument position in `resolve`, not to
/// any participant role. Callers map positions back to identities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Draw,
    FirstWins,
    SecondWins,
}

impl Outcome {
    /// Check if the pair resolved to a draw.
    #[must_use]
    pub const fn is_draw(self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

/// Resolve an ordered pair of moves.
///
/// Total over all 9 ordered pairs: 3 draws on the diagonal, 3 first-wins,
/// 3 second-wins. Swapping the arguments swaps `FirstWins` and `SecondWins`
/// and fixes `Draw`.
#[must_use]
pub const fn resolve(first: Move, second: Move) -> Outcome {
    match (first, second) {
        (Move::Rock, Move::Rock) => Outcome::Draw,
        (Move::Rock, Move::Paper) => Outcome::SecondWins,
        (Move::Rock, Move::Scissors) => Outcome::FirstWins,
        (Move::Paper, Move::Rock) => Outcome::FirstWins,
        (Move::Paper, Move::Paper) => Outcome::Draw,
        (Move::Paper, Move::Scissors) => Outcome::SecondWins,
        (Move::Scissors, Move::Rock) => Outcome::SecondWins,
        (Move::Scissors, Move::Paper) => Outcome::FirstWins,
        (Move::Scissors, Move::Scissors) => Outcome::Draw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle() {
        assert!(Move::Rock.beats(Move::Scissors));
        assert!(Move::Paper.beats(Move::Rock));
        assert!(Move::Scissors.beats(Move::Paper));
    }

    #[test]
    fn test_no_self_beat() {
        for mv in Move::ALL {
            assert!(!mv.beats(mv));
        }
    }

    #[test]
    fn test_resolve_total() {
        for first in Move::ALL {
            for second in Move::ALL {
                let outcome = resolve(first, second);
                if first == second {
                    assert_eq!(outcome, Outcome::Draw);
                } else if first.beats(second) {
                    assert_eq!(outcome, Outcome::FirstWins);
                } else {
                    assert_eq!(outcome, Outcome::SecondWins);
                }
            }
        }
    }

    #[test]
    fn test_resolve_swap_symmetry() {
        for first in Move::ALL {
            for second in Move::ALL {
                let forward = resolve(first, second);
                let backward = resolve(second, first);
                match forward {
                    Outcome::Draw => assert_eq!(backward, Outcome::Draw),
                    Outcome::FirstWins => assert_eq!(backward, Outcome::SecondWins),
                    Outcome::SecondWins => assert_eq!(backward, Outcome::FirstWins),
                }
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Move::Rock), "Rock");
        assert_eq!(format!("{}", Move::Scissors), "Scissors");
    }

    #[test]
    fn test_serialization() {
        let mv = Move::Paper;
        let json = serde_json::to_string(&mv).unwrap();
        let deserialized: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(mv, deserialized);

        let outcome = resolve(Move::Paper, Move::Scissors);
        let json = serde_json::to_string(&outcome).unwrap();
        let deserialized: Outcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, deserialized);
    }
}

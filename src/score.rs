//! Scoring strategies.

use crate::card::Card;
use crate::kind::{CardKind, MOON, STAR, SUN};

/// Points awarded for a matched pair.
pub trait ScoreCalculator {
    /// Scores a match of `card`'s pair after `attempts` attempts.
    fn score(&self, card: &Card, attempts: u32) -> u32;
}

/// Base points for a regular pair.
pub const BASE_POINTS: u32 = 10;

/// The default scoring rules.
///
/// Base points double for special kinds and shrink as attempts pile up:
/// `base / max(1, attempts / 2)`, plus a flat per-kind bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StandardScoreCalculator;

impl StandardScoreCalculator {
    /// Flat bonus for matching a pair of `kind`.
    #[must_use]
    pub fn kind_bonus(kind: &CardKind) -> u32 {
        if *kind == STAR {
            5
        } else if *kind == SUN {
            3
        } else if *kind == MOON {
            2
        } else {
            0
        }
    }
}

impl ScoreCalculator for StandardScoreCalculator {
    fn score(&self, card: &Card, attempts: u32) -> u32 {
        let multiplier = if card.is_special() { 2 } else { 1 };
        let base = BASE_POINTS * multiplier;
        let divisor = (attempts / 2).max(1);
        base / divisor + Self::kind_bonus(card.kind())
    }
}

use crate::card::Card;

use super::MatchEngine;

#[cfg(feature = "std")]
fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_tenths(value: f64) -> f64 {
    libm::round(value * 10.0) / 10.0
}

/// Snapshot of game progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GameStats {
    /// Cards on the board.
    pub total_cards: usize,
    /// Cards already paired.
    pub matched_cards: usize,
    /// Cards face up and unpaired.
    pub revealed_cards: usize,
    /// Pairs left to find.
    pub remaining_pairs: usize,
    /// Player score.
    pub score: u32,
    /// Pair comparisons made.
    pub attempts: u32,
    /// Pairs found.
    pub matches: u32,
    /// Share of attempts that found a pair, in percent, to one decimal.
    pub accuracy: f64,
    /// Seconds of play time.
    pub elapsed: f32,
}

impl MatchEngine {
    /// Returns a snapshot of the current game.
    #[must_use]
    pub fn game_stats(&self) -> GameStats {
        let total_cards = self.board.len();
        let matched_cards = self.board.cards().filter(|c| c.is_matched()).count();
        let revealed_cards = self
            .board
            .cards()
            .filter(|c| c.is_revealed() && !c.is_matched())
            .count();

        let attempts = self.player.attempts();
        let matches = self.player.matches();
        let accuracy = if attempts == 0 {
            0.0
        } else {
            round_tenths(f64::from(matches) * 100.0 / f64::from(attempts))
        };

        GameStats {
            total_cards,
            matched_cards,
            revealed_cards,
            remaining_pairs: (total_cards - matched_cards) / 2,
            score: self.player.score(),
            attempts,
            matches,
            accuracy,
            elapsed: self.player.elapsed(),
        }
    }

    /// Cards matched this game, in match order.
    #[must_use]
    pub fn matched_cards(&self) -> &[Card] {
        &self.matched
    }

    /// Returns the matched card with the highest value.
    #[must_use]
    pub fn most_valuable_matched_card(&self) -> Option<&Card> {
        self.matched.iter().max()
    }
}

use alloc::string::String;
use alloc::vec::Vec;

use log::{debug, info};

use crate::card::Card;
use crate::error::{GameError, MoveRejection};

use super::{GameState, MAX_REVEALED, MatchEngine};

/// What a successful reveal led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The card is face up and waits for a partner.
    Revealed,
    /// The card completed a pair worth `points`.
    Matched {
        /// Points awarded for the pair.
        points: u32,
    },
    /// The card did not match the other face-up card.
    ///
    /// Both stay revealed until [`MatchEngine::clear_revealed_cards`].
    Mismatched,
}

impl MatchEngine {
    /// Returns whether another card may be revealed.
    #[must_use]
    pub fn can_reveal_more_cards(&self) -> bool {
        self.revealed.len() < MAX_REVEALED
    }

    /// Position ids of the face-up, unresolved cards.
    #[must_use]
    pub fn revealed_cards(&self) -> &[String] {
        &self.revealed
    }

    /// Turns the card at `position` face up.
    ///
    /// Revealing the second card resolves the pair immediately: a match is
    /// scored and cleared, a mismatch stays face up until
    /// [`MatchEngine::clear_revealed_cards`] is called.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The game is not playing
    /// - No card sits at `position`
    /// - Two cards are already face up
    /// - The card is already revealed, matched, or locked
    ///
    /// Every error is also delivered to error listeners, and leaves the
    /// engine ready for the next move.
    pub fn reveal_card(&mut self, position: &str) -> Result<RevealOutcome, GameError> {
        let result = self.try_reveal(position);
        self.guard(result)
    }

    fn try_reveal(&mut self, position: &str) -> Result<RevealOutcome, GameError> {
        self.ensure_state(GameState::PLAYING)?;

        if self.board.try_get_card(position).is_none() {
            return Err(GameError::CardNotFound {
                position: position.into(),
            });
        }

        if !self.can_reveal_more_cards() {
            return Err(GameError::InvalidMove {
                position: position.into(),
                reason: MoveRejection::RevealLimitReached,
            });
        }

        // A pair is always two distinct positions.
        if self.revealed.iter().any(|p| p == position) {
            return Err(GameError::InvalidMove {
                position: position.into(),
                reason: MoveRejection::AlreadyRevealed,
            });
        }

        let card = self
            .board
            .try_get_card_mut(position)
            .ok_or_else(|| GameError::CardNotFound {
                position: position.into(),
            })?;
        card.reveal()?;
        debug!("revealed {card} at {position}");
        self.revealed.push(position.into());

        if self.revealed.len() < MAX_REVEALED {
            return Ok(RevealOutcome::Revealed);
        }

        let outcome = self.resolve_pair()?;
        self.check_victory();
        Ok(outcome)
    }

    fn revealed_pair(&self) -> Result<(Card, Card), GameError> {
        let lookup = |position: &String| {
            self.board
                .try_get_card(position)
                .cloned()
                .ok_or_else(|| GameError::CardNotFound {
                    position: position.clone(),
                })
        };
        Ok((lookup(&self.revealed[0])?, lookup(&self.revealed[1])?))
    }

    fn resolve_pair(&mut self) -> Result<RevealOutcome, GameError> {
        self.player.add_attempt();
        let (first, second) = self.revealed_pair()?;

        if first != second {
            debug!("{first} and {second} do not match");
            self.listeners.match_attempt(&first, &second, false);
            return Ok(RevealOutcome::Mismatched);
        }

        for position in &self.revealed {
            if let Some(card) = self.board.try_get_card_mut(position) {
                card.set_matched();
            }
        }
        let (first, second) = self.revealed_pair()?;

        let points = self.calculator.score(&first, self.player.attempts());
        self.player.add_match();
        self.player.add_score(points);
        debug!("matched {first} for {points} points");

        self.matched.push(first.clone());
        self.matched.push(second.clone());
        self.listeners.score_changed(self.player.score());
        self.listeners.match_attempt(&first, &second, true);
        self.revealed.clear();

        Ok(RevealOutcome::Matched { points })
    }

    fn check_victory(&mut self) {
        if !self.board.is_cleared() {
            return;
        }

        info!(
            "all pairs found: score {} in {} attempts",
            self.player.score(),
            self.player.attempts()
        );
        self.lock_board();
        self.set_state(GameState::GAME_OVER | GameState::VICTORY);
    }

    /// Empties the reveal buffer after a mismatch has been shown.
    ///
    /// The cards stay face up; flip them back with
    /// [`MatchEngine::hide_card`] or use [`MatchEngine::clear_and_hide`].
    /// Returns the position ids that were cleared.
    pub fn clear_revealed_cards(&mut self) -> Vec<String> {
        core::mem::take(&mut self.revealed)
    }

    /// Turns a revealed, unmatched card face down.
    ///
    /// A card still waiting in the reveal buffer is dropped from it.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not playing, no card sits at
    /// `position`, or the card is matched.
    pub fn hide_card(&mut self, position: &str) -> Result<(), GameError> {
        let result = self.try_hide(position);
        self.guard(result)
    }

    fn try_hide(&mut self, position: &str) -> Result<(), GameError> {
        self.ensure_state(GameState::PLAYING)?;

        match self.board.try_get_card_mut(position) {
            None => Err(GameError::CardNotFound {
                position: position.into(),
            }),
            Some(card) if card.is_matched() => Err(GameError::InvalidMove {
                position: position.into(),
                reason: MoveRejection::AlreadyMatched,
            }),
            Some(card) => {
                card.hide();
                self.revealed.retain(|p| p != position);
                Ok(())
            }
        }
    }

    /// Empties the reveal buffer and turns its cards face down.
    pub fn clear_and_hide(&mut self) {
        for position in self.clear_revealed_cards() {
            if let Some(card) = self.board.try_get_card_mut(&position) {
                if !card.is_matched() {
                    card.hide();
                }
            }
        }
    }
}

//! Grid of dealt cards.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::Card;
use crate::entity::Entity;
use crate::error::{ConfigError, GameError};

/// Builds the position id for a cell.
#[must_use]
pub fn position_id(row: usize, column: usize) -> String {
    format!("{row}_{column}")
}

/// A fixed-size grid holding one card per cell.
#[derive(Debug, Clone)]
pub struct Board {
    rows: usize,
    columns: usize,
    /// Cards in row-major order.
    cards: Vec<Card>,
    /// Position id -> index into `cards`.
    index: HashMap<String, usize>,
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cards: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Returns `(rows, columns)`.
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Number of cells on the grid, or `None` if it overflows.
    #[must_use]
    pub const fn cell_count(&self) -> Option<usize> {
        self.rows.checked_mul(self.columns)
    }

    /// Lays `cards` out row-major, replacing their ids with grid positions.
    ///
    /// Any previously dealt cards are discarded.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the grid size overflows or the deck
    /// does not fill the grid exactly.
    pub fn deal(&mut self, cards: Vec<Card>) -> Result<(), GameError> {
        let cells = self.cell_count().ok_or(ConfigError::GridTooLarge {
            rows: self.rows,
            columns: self.columns,
        })?;
        if cards.len() != cells {
            return Err(ConfigError::DeckSizeMismatch {
                expected: cells,
                actual: cards.len(),
            }
            .into());
        }

        self.cards = cards;
        self.index.clear();
        for (i, card) in self.cards.iter_mut().enumerate() {
            let id = position_id(i / self.columns, i % self.columns);
            card.set_id(id.clone());
            self.index.insert(id, i);
        }

        Ok(())
    }

    /// Returns the card at `position`, if any.
    #[must_use]
    pub fn try_get_card(&self, position: &str) -> Option<&Card> {
        self.index.get(position).map(|&i| &self.cards[i])
    }

    /// Returns a mutable reference to the card at `position`, if any.
    pub fn try_get_card_mut(&mut self, position: &str) -> Option<&mut Card> {
        let i = *self.index.get(position)?;
        self.cards.get_mut(i)
    }

    /// Returns the card in the given cell, if dealt.
    #[must_use]
    pub fn card_at(&self, row: usize, column: usize) -> Option<&Card> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.cards.get(row * self.columns + column)
    }

    /// Iterates over all dealt cards in row-major order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub(crate) fn cards_mut(&mut self) -> impl Iterator<Item = &mut Card> {
        self.cards.iter_mut()
    }

    /// Number of dealt cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns `true` if no cards have been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns `true` if cards are dealt and every one is matched.
    #[must_use]
    pub fn is_cleared(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(Card::is_matched)
    }
}

impl Entity for Board {
    fn update(&mut self, dt: f32) {
        for card in &mut self.cards {
            card.update(dt);
        }
    }

    fn reset(&mut self) {
        for card in &mut self.cards {
            card.reset();
        }
    }
}

//! The fixed registry of card kinds.

use core::fmt;

/// A suit or symbol family a card belongs to.
///
/// Kinds live in a process-wide static registry and are only ever handed
/// out by reference. Two kinds are equal when their ids are equal.
#[derive(Debug, Eq)]
pub struct CardKind {
    id: u8,
    name: &'static str,
    glyph: char,
}

impl CardKind {
    const fn new(id: u8, name: &'static str, glyph: char) -> Self {
        Self { id, name, glyph }
    }

    /// Numeric id of the kind.
    #[must_use]
    pub const fn id(&self) -> u8 {
        self.id
    }

    /// Display name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Display glyph.
    #[must_use]
    pub const fn glyph(&self) -> char {
        self.glyph
    }

    /// Whether cards of this kind are bonus cards.
    #[must_use]
    pub fn is_special(&self) -> bool {
        self.id == STAR.id || self.id == SUN.id
    }

    /// Looks up a kind by its id.
    #[must_use]
    pub fn from_id(id: u8) -> Option<&'static Self> {
        ALL_KINDS.iter().copied().find(|kind| kind.id == id)
    }
}

impl PartialEq for CardKind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl core::hash::Hash for CardKind {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.glyph, self.name)
    }
}

/// Hearts.
pub static HEARTS: CardKind = CardKind::new(0, "Hearts", '♥');
/// Diamonds.
pub static DIAMONDS: CardKind = CardKind::new(1, "Diamonds", '♦');
/// Clubs.
pub static CLUBS: CardKind = CardKind::new(2, "Clubs", '♣');
/// Spades.
pub static SPADES: CardKind = CardKind::new(3, "Spades", '♠');
/// Sun (special).
pub static SUN: CardKind = CardKind::new(4, "Sun", '☀');
/// Moon.
pub static MOON: CardKind = CardKind::new(5, "Moon", '☾');
/// Star (special).
pub static STAR: CardKind = CardKind::new(6, "Star", '★');
/// Comet.
pub static COMET: CardKind = CardKind::new(7, "Comet", '☄');

/// Number of registered kinds.
pub const KIND_COUNT: usize = 8;

/// Every registered kind, ordered by id.
pub static ALL_KINDS: [&CardKind; KIND_COUNT] =
    [&HEARTS, &DIAMONDS, &CLUBS, &SPADES, &SUN, &MOON, &STAR, &COMET];

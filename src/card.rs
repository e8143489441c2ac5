//! Card types and state flags.

use alloc::string::String;
use core::cmp::Ordering;
use core::fmt;
use core::ops::{BitOr, BitOrAssign};

use crate::entity::Entity;
use crate::error::{GameError, MoveRejection};
use crate::kind::CardKind;

/// Set of state flags carried by a [`Card`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CardFlags(u8);

impl CardFlags {
    /// No flags set.
    pub const NONE: Self = Self(0);
    /// The card is face up.
    pub const REVEALED: Self = Self(1);
    /// The card has been paired.
    pub const MATCHED: Self = Self(1 << 1);
    /// The card belongs to a bonus kind.
    pub const SPECIAL: Self = Self(1 << 2);
    /// The card no longer accepts reveals.
    pub const LOCKED: Self = Self(1 << 3);

    /// Returns `true` if every flag in `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if no flag is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Sets the given flags.
    pub const fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Clears the given flags.
    pub const fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    /// Raw bit representation.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }
}

impl BitOr for CardFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for CardFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// A playable card.
///
/// Cards compare by kind and value only. The position id is ignored, so two
/// distinct cards of the same pair are equal.
#[derive(Debug, Clone)]
pub struct Card {
    id: String,
    kind: &'static CardKind,
    value: u32,
    flags: CardFlags,
}

impl Card {
    /// Creates a face-down card.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: &'static CardKind, value: u32) -> Self {
        let flags = if kind.is_special() {
            CardFlags::SPECIAL
        } else {
            CardFlags::NONE
        };

        Self {
            id: id.into(),
            kind,
            value,
            flags,
        }
    }

    /// Position id of the card.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    pub(crate) fn set_id(&mut self, id: String) {
        self.id = id;
    }

    /// Kind of the card.
    #[must_use]
    pub const fn kind(&self) -> &'static CardKind {
        self.kind
    }

    /// Pair discriminator baked in at deck generation.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// Current state flags.
    #[must_use]
    pub const fn flags(&self) -> CardFlags {
        self.flags
    }

    /// Whether the card is face up.
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.flags.contains(CardFlags::REVEALED)
    }

    /// Whether the card has been paired.
    #[must_use]
    pub const fn is_matched(&self) -> bool {
        self.flags.contains(CardFlags::MATCHED)
    }

    /// Whether the card rejects reveals.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        self.flags.contains(CardFlags::LOCKED)
    }

    /// Whether the card belongs to a bonus kind.
    #[must_use]
    pub fn is_special(&self) -> bool {
        self.kind.is_special()
    }

    /// Turns the card face up.
    ///
    /// Returns the flags held before the reveal.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidMove`] if the card is already revealed,
    /// matched, or locked. The card is left untouched.
    pub fn reveal(&mut self) -> Result<CardFlags, GameError> {
        let reason = if self.is_matched() {
            MoveRejection::AlreadyMatched
        } else if self.is_revealed() {
            MoveRejection::AlreadyRevealed
        } else if self.is_locked() {
            MoveRejection::CardLocked
        } else {
            let prior = self.flags;
            self.flags.insert(CardFlags::REVEALED);
            return Ok(prior);
        };

        Err(GameError::InvalidMove {
            position: self.id.clone(),
            reason,
        })
    }

    /// Marks the card as matched. Callers only do this for confirmed pairs.
    pub const fn set_matched(&mut self) {
        self.flags.insert(CardFlags::MATCHED);
    }

    /// Turns the card face down.
    pub const fn hide(&mut self) {
        self.flags.remove(CardFlags::REVEALED);
    }

    /// Locks the card against further reveals.
    pub const fn lock(&mut self) {
        self.flags.insert(CardFlags::LOCKED);
    }

    /// Lifts a lock set by [`Card::lock`].
    pub const fn unlock(&mut self) {
        self.flags.remove(CardFlags::LOCKED);
    }
}

impl Entity for Card {
    fn reset(&mut self) {
        self.flags = if self.is_special() {
            CardFlags::SPECIAL
        } else {
            CardFlags::NONE
        };
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.kind.id() == other.kind.id() && self.value == other.value
    }
}

impl Eq for Card {}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value
            .cmp(&other.value)
            .then_with(|| self.kind.id().cmp(&other.kind.id()))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.glyph(), self.value)
    }
}

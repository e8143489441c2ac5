//! Error types for game operations.

use alloc::string::String;

use thiserror::Error;

use crate::game::GameState;

/// Why a reveal was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveRejection {
    /// Two cards are already face up and unresolved.
    RevealLimitReached,
    /// The card is already face up.
    AlreadyRevealed,
    /// The card has already been paired.
    AlreadyMatched,
    /// The card is locked.
    CardLocked,
}

/// Invalid construction or setup parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ConfigError {
    /// Pair count must be positive.
    #[error("pair count must be greater than zero")]
    ZeroPairs,
    /// No card kinds were supplied.
    #[error("at least one card kind is required")]
    NoKinds,
    /// The board has no cells.
    #[error("board must have at least one row and one column")]
    EmptyGrid,
    /// The cell count does not fit in a `usize`.
    #[error("board of {rows}x{columns} cells is too large")]
    GridTooLarge {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        columns: usize,
    },
    /// Pair values must fit in a `u32`.
    #[error("{0} pairs exceed the largest supported deck")]
    TooManyPairs(usize),
    /// Cards come in pairs, so the cell count must be even.
    #[error("board has {0} cells, which cannot hold whole pairs")]
    OddCellCount(usize),
    /// The deck does not fill the board exactly.
    #[error("deck has {actual} cards but the board has {expected} cells")]
    DeckSizeMismatch {
        /// Number of cells on the board.
        expected: usize,
        /// Number of cards in the deck.
        actual: usize,
    },
}

/// Broad classification of a [`GameError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// No card at the requested position.
    CardNotFound,
    /// The move breaks a game rule.
    InvalidMove,
    /// The operation needs a different game state.
    GameStateViolation,
    /// Bad construction or setup parameters.
    Configuration,
    /// No moves remain.
    OutOfMoves,
}

/// Errors raised by the match engine and its collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// No card at the requested position.
    #[error("no card at position {position:?}")]
    CardNotFound {
        /// Requested position id.
        position: String,
    },
    /// The move breaks a game rule.
    #[error("invalid move on {position:?}: {reason:?}")]
    InvalidMove {
        /// Position id of the targeted card.
        position: String,
        /// Why the move was refused.
        reason: MoveRejection,
    },
    /// The operation needs a different game state.
    #[error("operation requires {expected:?} but game is {actual:?}")]
    GameStateViolation {
        /// State the operation needs.
        expected: GameState,
        /// State the game was in.
        actual: GameState,
    },
    /// Bad construction or setup parameters.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigError),
    /// No moves remain.
    #[error("no moves remain")]
    OutOfMoves,
}

impl GameError {
    /// Returns the kind tag of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::CardNotFound { .. } => ErrorKind::CardNotFound,
            Self::InvalidMove { .. } => ErrorKind::InvalidMove,
            Self::GameStateViolation { .. } => ErrorKind::GameStateViolation,
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::OutOfMoves => ErrorKind::OutOfMoves,
        }
    }

    /// Whether the game can simply continue after this error.
    ///
    /// Domain rejections are recoverable; configuration failures are not.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::CardNotFound | ErrorKind::InvalidMove | ErrorKind::GameStateViolation
        )
    }
}

//! A memory-matching card game engine with optional `no_std` support.
//!
//! The crate provides a [`MatchEngine`] that deals a shuffled grid of paired
//! cards, accepts reveal requests, resolves pairs, keeps score, and detects
//! victory. Presentation is left to the caller, which observes the engine
//! through synchronous listeners.
//!
//! # Example
//!
//! ```
//! use pairs::{GameOptions, MatchEngine, RevealOutcome};
//!
//! let options = GameOptions::default().with_rows(2).with_columns(2);
//! let mut engine = MatchEngine::new(options, 42).unwrap();
//! engine.start_game().unwrap();
//!
//! let outcome = engine.reveal_card("0_0").unwrap();
//! assert_eq!(outcome, RevealOutcome::Revealed);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod board;
pub mod card;
pub mod deck;
pub mod entity;
pub mod error;
pub mod game;
pub mod kind;
pub mod options;
pub mod player;
pub mod score;

// Re-export main types
pub use board::Board;
pub use card::{Card, CardFlags};
pub use deck::generate_deck;
pub use entity::Entity;
pub use error::{ConfigError, ErrorKind, GameError, MoveRejection};
pub use game::{GameState, GameStats, ListenerId, MAX_REVEALED, MatchEngine, RevealOutcome};
pub use kind::{ALL_KINDS, CardKind};
pub use options::GameOptions;
pub use player::Player;
pub use score::{ScoreCalculator, StandardScoreCalculator};

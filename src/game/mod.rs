//! Match engine and state management.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use log::{debug, error, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::board::Board;
use crate::card::Card;
use crate::deck::generate_deck;
use crate::entity::Entity;
use crate::error::GameError;
use crate::options::GameOptions;
use crate::player::Player;
use crate::score::{ScoreCalculator, StandardScoreCalculator};

mod events;
mod reveal;
pub mod state;
mod stats;

pub use events::ListenerId;
pub use reveal::RevealOutcome;
pub use state::GameState;
pub use stats::GameStats;

/// Most cards that may be face up and unresolved at once.
pub const MAX_REVEALED: usize = 2;

/// A memory-matching engine that owns the board, the player, and game flow.
///
/// The engine is a synchronous state reducer: each call runs to completion,
/// firing any listeners inline before it returns.
pub struct MatchEngine {
    options: GameOptions,
    state: GameState,
    board: Board,
    player: Player,
    /// Position ids of face-up, unresolved cards.
    revealed: Vec<String>,
    /// Cards matched this game, in match order.
    matched: Vec<Card>,
    calculator: Box<dyn ScoreCalculator>,
    listeners: events::Listeners,
    rng: ChaCha8Rng,
}

impl MatchEngine {
    /// Creates an engine using the standard scoring rules.
    ///
    /// The seed drives deck shuffling, so equal seeds deal equal games.
    ///
    /// # Example
    ///
    /// ```
    /// use pairs::{GameOptions, MatchEngine};
    ///
    /// let mut engine = MatchEngine::new(GameOptions::default(), 42).unwrap();
    /// engine.start_game().unwrap();
    /// assert!(engine.state().is_playing());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the options fail validation.
    pub fn new(options: GameOptions, seed: u64) -> Result<Self, GameError> {
        Self::with_calculator(options, seed, Box::new(StandardScoreCalculator))
    }

    /// Creates an engine with a custom scoring strategy.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the options fail validation.
    pub fn with_calculator(
        options: GameOptions,
        seed: u64,
        calculator: Box<dyn ScoreCalculator>,
    ) -> Result<Self, GameError> {
        options.validate()?;

        Ok(Self {
            board: Board::new(options.rows, options.columns),
            player: Player::new(options.player_name.clone()),
            options,
            state: GameState::READY,
            revealed: Vec::with_capacity(MAX_REVEALED),
            matched: Vec::new(),
            calculator,
            listeners: events::Listeners::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Deals a fresh shuffled deck and starts playing.
    ///
    /// May be called in any state; an ongoing game is discarded.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the deck cannot be built or dealt.
    /// The error is also delivered to error listeners.
    pub fn start_game(&mut self) -> Result<(), GameError> {
        if let Err(err) = self.deal_new_game() {
            error!("failed to start game: {err}");
            self.listeners.error(&err);
            return Err(err);
        }

        debug!(
            "started {}x{} game with {} pairs",
            self.options.rows,
            self.options.columns,
            self.options.pair_count()
        );
        self.set_state(GameState::PLAYING);
        Ok(())
    }

    fn deal_new_game(&mut self) -> Result<(), GameError> {
        let deck = generate_deck(
            self.options.pair_count(),
            &self.options.kinds,
            &mut self.rng,
        )?;
        self.board.deal(deck)?;
        self.board.reset();
        self.player.reset();
        self.revealed.clear();
        self.matched.clear();
        Ok(())
    }

    /// Suspends a game in progress.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not playing.
    pub fn pause(&mut self) -> Result<(), GameError> {
        self.guard(self.ensure_state(GameState::PLAYING))?;
        self.set_state(GameState::PAUSED);
        Ok(())
    }

    /// Resumes a paused game.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not paused.
    pub fn resume(&mut self) -> Result<(), GameError> {
        self.guard(self.ensure_state(GameState::PAUSED))?;
        self.set_state(GameState::PLAYING);
        Ok(())
    }

    /// Ends a playing or paused game without victory.
    ///
    /// # Errors
    ///
    /// Returns an error if no game is in progress.
    pub fn end_game(&mut self) -> Result<(), GameError> {
        if self.state != GameState::PLAYING && self.state != GameState::PAUSED {
            let err = GameError::GameStateViolation {
                expected: GameState::PLAYING,
                actual: self.state,
            };
            return self.guard(Err(err));
        }

        self.lock_board();
        self.set_state(GameState::GAME_OVER);
        Ok(())
    }

    /// Advances play time by `dt` seconds while the game is playing.
    pub fn update(&mut self, dt: f32) {
        if self.state == GameState::PLAYING {
            self.player.update(dt);
            self.board.update(dt);
        }
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the options the engine was built with.
    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Registers a listener for score changes. It receives the new total.
    pub fn on_score_changed(&mut self, listener: impl FnMut(u32) + 'static) -> ListenerId {
        self.listeners.on_score_changed(Box::new(listener))
    }

    /// Registers a listener for resolved pairs.
    ///
    /// It receives both cards and whether they matched.
    pub fn on_match_attempt(
        &mut self,
        listener: impl FnMut(&Card, &Card, bool) + 'static,
    ) -> ListenerId {
        self.listeners.on_match_attempt(Box::new(listener))
    }

    /// Registers a listener for state transitions.
    pub fn on_state_changed(&mut self, listener: impl FnMut(GameState) + 'static) -> ListenerId {
        self.listeners.on_state_changed(Box::new(listener))
    }

    /// Registers a listener for rejected operations and setup failures.
    pub fn on_error(&mut self, listener: impl FnMut(&GameError) + 'static) -> ListenerId {
        self.listeners.on_error(Box::new(listener))
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    fn set_state(&mut self, state: GameState) {
        debug!("state {:?} -> {:?}", self.state, state);
        self.state = state;
        self.listeners.state_changed(state);
    }

    fn ensure_state(&self, expected: GameState) -> Result<(), GameError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(GameError::GameStateViolation {
                expected,
                actual: self.state,
            })
        }
    }

    /// Delivers an error to listeners before handing it back.
    fn guard<T>(&mut self, result: Result<T, GameError>) -> Result<T, GameError> {
        if let Err(err) = &result {
            warn!("rejected: {err}");
            self.listeners.error(err);
        }
        result
    }

    fn lock_board(&mut self) {
        for card in self.board.cards_mut() {
            card.lock();
        }
    }
}

impl core::fmt::Debug for MatchEngine {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MatchEngine")
            .field("state", &self.state)
            .field("board", &self.board)
            .field("player", &self.player)
            .field("revealed", &self.revealed)
            .field("matched", &self.matched.len())
            .field("listeners", &self.listeners)
            .finish_non_exhaustive()
    }
}

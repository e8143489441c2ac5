//! Synchronous event listeners.

use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::card::Card;
use crate::error::GameError;

use super::GameState;

/// Handle returned by a subscription, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type ScoreListener = Box<dyn FnMut(u32)>;
type MatchListener = Box<dyn FnMut(&Card, &Card, bool)>;
type StateListener = Box<dyn FnMut(GameState)>;
type ErrorListener = Box<dyn FnMut(&GameError)>;

/// Registered listeners, invoked in registration order.
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    score: Vec<(ListenerId, ScoreListener)>,
    match_attempt: Vec<(ListenerId, MatchListener)>,
    state: Vec<(ListenerId, StateListener)>,
    error: Vec<(ListenerId, ErrorListener)>,
}

impl Listeners {
    const fn next_id(&mut self) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn on_score_changed(&mut self, listener: ScoreListener) -> ListenerId {
        let id = self.next_id();
        self.score.push((id, listener));
        id
    }

    pub fn on_match_attempt(&mut self, listener: MatchListener) -> ListenerId {
        let id = self.next_id();
        self.match_attempt.push((id, listener));
        id
    }

    pub fn on_state_changed(&mut self, listener: StateListener) -> ListenerId {
        let id = self.next_id();
        self.state.push((id, listener));
        id
    }

    pub fn on_error(&mut self, listener: ErrorListener) -> ListenerId {
        let id = self.next_id();
        self.error.push((id, listener));
        id
    }

    /// Removes a listener. Returns `false` if it was not registered.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let before = self.len();
        self.score.retain(|(l, _)| *l != id);
        self.match_attempt.retain(|(l, _)| *l != id);
        self.state.retain(|(l, _)| *l != id);
        self.error.retain(|(l, _)| *l != id);
        self.len() != before
    }

    fn len(&self) -> usize {
        self.score.len() + self.match_attempt.len() + self.state.len() + self.error.len()
    }

    pub fn score_changed(&mut self, score: u32) {
        for (_, listener) in &mut self.score {
            listener(score);
        }
    }

    pub fn match_attempt(&mut self, first: &Card, second: &Card, matched: bool) {
        for (_, listener) in &mut self.match_attempt {
            listener(first, second, matched);
        }
    }

    pub fn state_changed(&mut self, state: GameState) {
        for (_, listener) in &mut self.state {
            listener(state);
        }
    }

    pub fn error(&mut self, error: &GameError) {
        for (_, listener) in &mut self.error {
            listener(error);
        }
    }
}

impl core::fmt::Debug for Listeners {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Listeners")
            .field("score", &self.score.len())
            .field("match_attempt", &self.match_attempt.len())
            .field("state", &self.state.len())
            .field("error", &self.error.len())
            .finish()
    }
}

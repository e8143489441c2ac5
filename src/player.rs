//! Per-session player statistics.

use alloc::string::String;

use crate::entity::Entity;

/// A player's running tally for the current game.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    name: String,
    score: u32,
    matches: u32,
    attempts: u32,
    /// Seconds spent playing.
    elapsed: f32,
}

impl Player {
    /// Creates a player with zeroed statistics.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            matches: 0,
            attempts: 0,
            elapsed: 0.0,
        }
    }

    /// Player name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Accumulated score.
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Number of pairs found.
    #[must_use]
    pub const fn matches(&self) -> u32 {
        self.matches
    }

    /// Number of pair comparisons made.
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Seconds of play time.
    #[must_use]
    pub const fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Adds points to the score.
    pub const fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Records a found pair.
    pub const fn add_match(&mut self) {
        self.matches += 1;
    }

    /// Records a pair comparison.
    pub const fn add_attempt(&mut self) {
        self.attempts += 1;
    }
}

impl Entity for Player {
    fn update(&mut self, dt: f32) {
        if dt > 0.0 {
            self.elapsed += dt;
        }
    }

    fn reset(&mut self) {
        self.score = 0;
        self.matches = 0;
        self.attempts = 0;
        self.elapsed = 0.0;
    }
}

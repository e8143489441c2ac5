//! Capability shared by every stateful game entity.

/// An entity that advances with time and can be returned to its initial state.
pub trait Entity {
    /// Advances the entity by `dt` seconds.
    fn update(&mut self, _dt: f32) {}

    /// Restores the entity to the state it had when a game started.
    fn reset(&mut self);
}

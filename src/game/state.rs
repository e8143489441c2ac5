//! Game state types.

use core::fmt;
use core::ops::BitOr;

/// Lifecycle state of a game.
///
/// States are flags so that a finished game can be both
/// [`GameState::GAME_OVER`] and [`GameState::VICTORY`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GameState(u8);

impl GameState {
    /// Created but not started.
    pub const READY: Self = Self(0);
    /// Accepting reveals.
    pub const PLAYING: Self = Self(1);
    /// Temporarily suspended.
    pub const PAUSED: Self = Self(1 << 1);
    /// Finished.
    pub const GAME_OVER: Self = Self(1 << 2);
    /// Every pair was found.
    pub const VICTORY: Self = Self(1 << 3);

    const NAMES: [(Self, &'static str); 4] = [
        (Self::PLAYING, "Playing"),
        (Self::PAUSED, "Paused"),
        (Self::GAME_OVER, "GameOver"),
        (Self::VICTORY, "Victory"),
    ];

    /// Returns `true` if every flag in `other` is set.
    ///
    /// Every state contains [`GameState::READY`]; compare with `==` to test
    /// for it.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether reveals are accepted.
    #[must_use]
    pub const fn is_playing(self) -> bool {
        self.contains(Self::PLAYING)
    }

    /// Whether the game is suspended.
    #[must_use]
    pub const fn is_paused(self) -> bool {
        self.contains(Self::PAUSED)
    }

    /// Whether the game has finished.
    #[must_use]
    pub const fn is_over(self) -> bool {
        self.contains(Self::GAME_OVER)
    }

    /// Whether the game was won.
    #[must_use]
    pub const fn is_victory(self) -> bool {
        self.contains(Self::VICTORY)
    }
}

impl BitOr for GameState {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::READY {
            return f.write_str("Ready");
        }

        let mut first = true;
        for (flag, name) in Self::NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn victory_combines_with_game_over() {
        let state = GameState::GAME_OVER | GameState::VICTORY;
        assert!(state.is_over());
        assert!(state.is_victory());
        assert!(!state.is_playing());
        assert_eq!(format!("{state:?}"), "GameOver | Victory");
        assert_eq!(format!("{}", GameState::READY), "Ready");
    }
}

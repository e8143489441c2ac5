//! Game configuration options.

use alloc::string::String;
use alloc::vec::Vec;

use crate::error::ConfigError;
use crate::kind::{ALL_KINDS, CardKind};

/// Configuration options for a memory game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use pairs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_rows(2)
///     .with_columns(3)
///     .with_player_name("Ada");
/// assert_eq!(options.pair_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Number of grid rows.
    pub rows: usize,
    /// Number of grid columns.
    pub columns: usize,
    /// Kinds to draw pairs from, cycled in order.
    pub kinds: Vec<&'static CardKind>,
    /// Display name of the player.
    pub player_name: String,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            rows: 4,
            columns: 4,
            kinds: ALL_KINDS.to_vec(),
            player_name: String::from("Player"),
        }
    }
}

impl GameOptions {
    /// Sets the number of rows.
    ///
    /// # Example
    ///
    /// ```
    /// use pairs::GameOptions;
    ///
    /// let options = GameOptions::default().with_rows(6);
    /// assert_eq!(options.rows, 6);
    /// ```
    #[must_use]
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Sets the number of columns.
    #[must_use]
    pub fn with_columns(mut self, columns: usize) -> Self {
        self.columns = columns;
        self
    }

    /// Sets the kinds pairs are drawn from.
    ///
    /// # Example
    ///
    /// ```
    /// use pairs::GameOptions;
    /// use pairs::kind::{DIAMONDS, HEARTS};
    ///
    /// let options = GameOptions::default().with_kinds([&HEARTS, &DIAMONDS]);
    /// assert_eq!(options.kinds.len(), 2);
    /// ```
    #[must_use]
    pub fn with_kinds(mut self, kinds: impl IntoIterator<Item = &'static CardKind>) -> Self {
        self.kinds = kinds.into_iter().collect();
        self
    }

    /// Sets the player name.
    #[must_use]
    pub fn with_player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    /// Number of cells on the grid, or `None` if it overflows.
    #[must_use]
    pub const fn cell_count(&self) -> Option<usize> {
        self.rows.checked_mul(self.columns)
    }

    /// Number of pairs the grid holds. Zero if the grid size overflows.
    #[must_use]
    pub const fn pair_count(&self) -> usize {
        match self.cell_count() {
            Some(cells) => cells / 2,
            None => 0,
        }
    }

    /// Checks that the options describe a playable board.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is empty, too large, has an odd number of
    /// cells, or no kinds are configured.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let cells = self.cell_count().ok_or(ConfigError::GridTooLarge {
            rows: self.rows,
            columns: self.columns,
        })?;
        if cells == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if cells % 2 != 0 {
            return Err(ConfigError::OddCellCount(cells));
        }
        if self.kinds.is_empty() {
            return Err(ConfigError::NoKinds);
        }
        Ok(())
    }
}

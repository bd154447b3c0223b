use crate::error::{LevelError, Result};

use super::{level_at, level_count, Level};

/// Position of a player in the level catalog.
///
/// Progression is strictly forward, one level at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LevelCursor {
    index: usize,
}

impl LevelCursor {
    /// Creates a cursor on the first level.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the 0-based catalog index of the current level.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the current level.
    #[must_use]
    pub fn current(&self) -> &'static Level {
        // `index` never leaves `0..level_count()`.
        &super::levels()[self.index]
    }

    /// Returns `true` if the cursor is on the last level.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 == level_count()
    }

    /// Moves to the next level and returns it.
    ///
    /// # Errors
    ///
    /// Returns `LevelError::AllLevelsComplete` when already on the last
    /// level; the cursor does not move.
    pub fn advance(&mut self) -> Result<&'static Level> {
        if self.is_last() {
            return Err(LevelError::AllLevelsComplete.into());
        }
        let next = level_at(self.index + 1)?;
        self.index += 1;
        tracing::debug!(level = next.id, shape = %next.shape, "advanced to next level");
        Ok(next)
    }

    /// Returns to the first level.
    pub fn restart(&mut self) {
        self.index = 0;
    }
}

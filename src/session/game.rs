use crate::error::{Result, SessionError};
use crate::level::{Level, LevelCursor, Reward};
use crate::math::Tolerances;

use super::Sketch;

/// Lives a player starts with.
pub const STARTING_LIVES: u32 = 3;

/// Experience needed per player level.
const EXP_PER_PLAYER_LEVEL: u32 = 100;

/// Outcome of checking the sketch against the current level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Fewer than four points placed; nothing is charged.
    Incomplete,
    /// The shape satisfies the level. The reward is credited once per level.
    Passed(Reward),
    /// The shape does not satisfy the level and a life was lost.
    Failed { lives_left: u32 },
    /// The last life was lost.
    GameOver,
}

/// State of one play-through: level progression, the current sketch and
/// the player's score, experience and lives.
#[derive(Debug, Clone)]
pub struct GameSession {
    cursor: LevelCursor,
    sketch: Sketch,
    tolerances: Tolerances,
    score: u32,
    exp: u32,
    lives: u32,
    cleared: bool,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Creates a session on the first level with default tolerances.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cursor: LevelCursor::new(),
            sketch: Sketch::new(),
            tolerances: Tolerances::default(),
            score: 0,
            exp: 0,
            lives: STARTING_LIVES,
            cleared: false,
        }
    }

    /// Sets the tolerances used when checking shapes.
    #[must_use]
    pub fn with_tolerances(mut self, tolerances: Tolerances) -> Self {
        self.tolerances = tolerances;
        self
    }

    /// Returns the level being played.
    #[must_use]
    pub fn current_level(&self) -> &'static Level {
        self.cursor.current()
    }

    /// Returns the points placed for the current attempt.
    #[must_use]
    pub fn sketch(&self) -> &Sketch {
        &self.sketch
    }

    /// Returns the sketch for editing.
    pub fn sketch_mut(&mut self) -> &mut Sketch {
        &mut self.sketch
    }

    /// Returns the coins collected so far.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns the experience collected so far.
    #[must_use]
    pub fn exp(&self) -> u32 {
        self.exp
    }

    /// Returns the remaining lives.
    #[must_use]
    pub fn lives(&self) -> u32 {
        self.lives
    }

    /// Player level derived from experience, starting at 1.
    #[must_use]
    pub fn player_level(&self) -> u32 {
        self.exp / EXP_PER_PLAYER_LEVEL + 1
    }

    /// Returns `true` once every life is spent.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.lives == 0
    }

    /// Checks the sketch against the current level.
    ///
    /// A quad with a collapsed edge counts as a wrong answer.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::GameOver` once all lives are spent.
    pub fn check(&mut self) -> Result<CheckOutcome> {
        if self.is_over() {
            return Err(SessionError::GameOver.into());
        }
        if !self.sketch.is_complete() {
            return Ok(CheckOutcome::Incomplete);
        }

        let level = self.cursor.current();
        let quad = self.sketch.quad()?;
        let passed = match level.shape.matches(&quad, &self.tolerances) {
            Ok(passed) => passed,
            Err(e) if e.is_degenerate() => {
                tracing::debug!(level = level.id, error = %e, "shape not classifiable");
                false
            }
            Err(e) => return Err(e),
        };

        if passed {
            if !self.cleared {
                self.cleared = true;
                self.score += level.reward.coins;
                self.exp += level.reward.exp;
            }
            tracing::debug!(level = level.id, score = self.score, exp = self.exp, "level cleared");
            return Ok(CheckOutcome::Passed(level.reward));
        }

        self.lives -= 1;
        tracing::debug!(level = level.id, lives = self.lives, "wrong shape");
        if self.is_over() {
            Ok(CheckOutcome::GameOver)
        } else {
            Ok(CheckOutcome::Failed {
                lives_left: self.lives,
            })
        }
    }

    /// Moves to the next level with an empty sketch.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::LevelNotCleared` if the current level has not
    /// been passed, or `LevelError::AllLevelsComplete` after the last level.
    pub fn next_level(&mut self) -> Result<&'static Level> {
        if !self.cleared {
            return Err(SessionError::LevelNotCleared.into());
        }
        let level = self.cursor.advance()?;
        self.cleared = false;
        self.sketch.clear();
        Ok(level)
    }

    /// Clears the sketch for another attempt at the current level.
    pub fn reset_level(&mut self) {
        self.sketch.clear();
    }

    /// Starts over from the first level with full lives and no score.
    pub fn restart(&mut self) {
        *self = Self::new().with_tolerances(self.tolerances);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{LevelError, QuadraError};
    use crate::math::Point2;

    fn draw(session: &mut GameSession, coords: [(f64, f64); 4]) {
        session.reset_level();
        for (x, y) in coords {
            session.sketch_mut().add(Point2::new(x, y)).unwrap();
        }
    }

    const SQUARE: [(f64, f64); 4] = [(100.0, 100.0), (300.0, 100.0), (300.0, 300.0), (100.0, 300.0)];
    const TRAPEZOID: [(f64, f64); 4] =
        [(100.0, 100.0), (300.0, 100.0), (350.0, 300.0), (50.0, 300.0)];
    const PARALLELOGRAM: [(f64, f64); 4] =
        [(100.0, 100.0), (300.0, 100.0), (380.0, 250.0), (180.0, 250.0)];

    #[test]
    fn incomplete_sketch_costs_nothing() {
        let mut session = GameSession::new();
        session.sketch_mut().add(Point2::new(1.0, 1.0)).unwrap();
        assert_eq!(session.check().unwrap(), CheckOutcome::Incomplete);
        assert_eq!(session.lives(), STARTING_LIVES);
    }

    #[test]
    fn pass_credits_reward_once() {
        let mut session = GameSession::new();
        draw(&mut session, TRAPEZOID);
        let reward = Reward { coins: 100, exp: 50 };
        assert_eq!(session.check().unwrap(), CheckOutcome::Passed(reward));
        assert_eq!(session.check().unwrap(), CheckOutcome::Passed(reward));
        assert_eq!(session.score(), 100);
        assert_eq!(session.exp(), 50);
        assert_eq!(session.player_level(), 1);
    }

    #[test]
    fn failures_spend_lives_until_game_over() {
        let mut session = GameSession::new();
        draw(&mut session, TRAPEZOID);
        session.check().unwrap();
        session.next_level().unwrap();
        draw(&mut session, TRAPEZOID);

        assert_eq!(session.check().unwrap(), CheckOutcome::Failed { lives_left: 2 });
        assert_eq!(session.check().unwrap(), CheckOutcome::Failed { lives_left: 1 });
        assert_eq!(session.check().unwrap(), CheckOutcome::GameOver);
        assert!(session.is_over());
        assert_eq!(
            session.check().unwrap_err(),
            QuadraError::Session(SessionError::GameOver)
        );
    }

    #[test]
    fn degenerate_sketch_is_a_wrong_answer() {
        let mut session = GameSession::new();
        draw(&mut session, [(5.0, 5.0), (5.0, 5.0), (90.0, 5.0), (5.0, 90.0)]);
        assert_eq!(session.check().unwrap(), CheckOutcome::Failed { lives_left: 2 });
    }

    #[test]
    fn next_level_requires_clear() {
        let mut session = GameSession::new();
        assert_eq!(
            session.next_level().unwrap_err(),
            QuadraError::Session(SessionError::LevelNotCleared)
        );
    }

    #[test]
    fn full_play_through() {
        let mut session = GameSession::new();
        let answers = [TRAPEZOID, SQUARE, SQUARE, PARALLELOGRAM, TRAPEZOID];
        for (i, answer) in answers.into_iter().enumerate() {
            draw(&mut session, answer);
            assert!(matches!(session.check().unwrap(), CheckOutcome::Passed(_)));
            if i + 1 < answers.len() {
                session.next_level().unwrap();
                assert!(session.sketch().points().is_empty());
            }
        }
        assert_eq!(session.score(), 1000);
        assert_eq!(session.exp(), 500);
        assert_eq!(session.player_level(), 6);
        assert_eq!(
            session.next_level().unwrap_err(),
            QuadraError::Level(LevelError::AllLevelsComplete)
        );
    }

    #[test]
    fn restart_resets_progress() {
        let mut session = GameSession::new();
        draw(&mut session, SQUARE);
        session.check().unwrap();
        session.next_level().unwrap();
        session.restart();
        assert_eq!(session.current_level().id, 1);
        assert_eq!(session.score(), 0);
        assert_eq!(session.lives(), STARTING_LIVES);
        assert!(session.sketch().points().is_empty());
    }
}

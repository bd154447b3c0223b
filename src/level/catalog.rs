use crate::error::{LevelError, Result};

use super::{Level, Reward, ShapeClass};

static LEVELS: [Level; 5] = [
    Level {
        id: 1,
        name: "Meet the Quadrilateral",
        description: "Draw any quadrilateral",
        hint: "Click four points on the canvas to make a quadrilateral",
        reward: Reward { coins: 100, exp: 50 },
        shape: ShapeClass::AnyQuadrilateral,
    },
    Level {
        id: 2,
        name: "Rectangle Master",
        description: "Draw a rectangle (all four corners are right angles)",
        hint: "Remember: every corner of a rectangle is 90 degrees",
        reward: Reward { coins: 150, exp: 75 },
        shape: ShapeClass::Rectangle,
    },
    Level {
        id: 3,
        name: "Perfect Square",
        description: "Draw a square (four equal sides, four right angles)",
        hint: "A square has four sides of equal length and four 90 degree corners",
        reward: Reward { coins: 200, exp: 100 },
        shape: ShapeClass::Square,
    },
    Level {
        id: 4,
        name: "Parallelogram Challenge",
        description: "Draw a parallelogram (opposite sides parallel and equal)",
        hint: "Make sure opposite sides are parallel and the same length",
        reward: Reward { coins: 250, exp: 125 },
        shape: ShapeClass::Parallelogram,
    },
    Level {
        id: 5,
        name: "Trapezoid Quest",
        description: "Draw a trapezoid (exactly one pair of parallel sides)",
        hint: "A trapezoid has one pair of parallel sides, the other pair is not parallel",
        reward: Reward { coins: 300, exp: 150 },
        shape: ShapeClass::Trapezoid,
    },
];

/// Returns the full catalog in play order.
#[must_use]
pub fn levels() -> &'static [Level] {
    &LEVELS
}

/// Returns the number of levels in the catalog.
#[must_use]
pub fn level_count() -> usize {
    LEVELS.len()
}

/// Returns the level at a 0-based catalog index.
///
/// # Errors
///
/// Returns `LevelError::OutOfRange` if `index >= level_count()`.
pub fn level_at(index: usize) -> Result<&'static Level> {
    LEVELS.get(index).ok_or_else(|| {
        LevelError::OutOfRange {
            index,
            count: LEVELS.len(),
        }
        .into()
    })
}

/// Returns the level with the given 1-based id.
///
/// # Errors
///
/// Returns `LevelError::OutOfRange` if no level has that id.
pub fn level_by_id(id: u32) -> Result<&'static Level> {
    let index = usize::try_from(id)
        .ok()
        .and_then(|id| id.checked_sub(1))
        .unwrap_or(usize::MAX);
    level_at(index)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::QuadraError;

    #[test]
    fn catalog_has_five_levels_in_order() {
        assert_eq!(level_count(), 5);
        for (i, level) in levels().iter().enumerate() {
            assert_eq!(level.id as usize, i + 1);
        }
    }

    #[test]
    fn levels_bind_shapes_in_order() {
        let shapes: Vec<_> = levels().iter().map(|l| l.shape).collect();
        assert_eq!(
            shapes,
            [
                ShapeClass::AnyQuadrilateral,
                ShapeClass::Rectangle,
                ShapeClass::Square,
                ShapeClass::Parallelogram,
                ShapeClass::Trapezoid,
            ]
        );
    }

    #[test]
    fn rewards_grow_with_level() {
        let first = level_at(0).unwrap().reward;
        assert_eq!(first, Reward { coins: 100, exp: 50 });
        let last = level_at(4).unwrap().reward;
        assert_eq!(last, Reward { coins: 300, exp: 150 });
        assert!(levels()
            .windows(2)
            .all(|w| w[0].reward.coins < w[1].reward.coins));
    }

    #[test]
    fn level_at_out_of_range() {
        assert_eq!(
            level_at(5).unwrap_err(),
            QuadraError::Level(LevelError::OutOfRange { index: 5, count: 5 })
        );
    }

    #[test]
    fn level_by_id_is_one_based() {
        assert_eq!(level_by_id(3).unwrap().shape, ShapeClass::Square);
        assert!(level_by_id(0).is_err());
        assert!(level_by_id(6).is_err());
    }
}

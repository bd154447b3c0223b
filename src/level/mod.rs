mod catalog;
mod cursor;
mod shape;

pub use catalog::{level_at, level_by_id, level_count, levels};
pub use cursor::LevelCursor;
pub use shape::ShapeClass;

/// Coins and experience granted for completing a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reward {
    pub coins: u32,
    pub exp: u32,
}

/// One challenge: descriptive text, a reward and the shape it asks for.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    /// 1-based identifier, equal to the catalog index plus one.
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub hint: &'static str,
    pub reward: Reward,
    pub shape: ShapeClass,
}

mod game;
mod sketch;

pub use game::{CheckOutcome, GameSession, STARTING_LIVES};
pub use sketch::{Sketch, PICK_RADIUS};

pub mod classify;

pub use classify::{
    is_parallelogram, is_rectangle, is_square, is_trapezoid, Classification, ClassifyQuad,
};

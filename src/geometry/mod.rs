pub mod quad;

pub use quad::Quad;

pub use nalgebra::vector;

mod shape;
pub mod indexing;
pub use shape::*;

/// Cell coordinate, `[row, col]`.
/// Signed so that neighbor offsets may step off the grid
/// before the boundary policy decides what to do with them.
pub type Coord = nalgebra::Vector2<i32>;

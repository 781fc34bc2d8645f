mod wave_stencil;

pub use wave_stencil::*;

/// Five point star, without the center.
/// The order is fixed so that every strategy sums neighbors identically:
/// down, up, right, left.
pub const STAR_OFFSETS: [[i32; 2]; 4] = [[1, 0], [-1, 0], [0, 1], [0, -1]];

use crate::util::*;

/// Row-major linear index of `coord` in a buffer with `cols` columns.
#[inline]
pub fn coord_to_linear(coord: &Coord, cols: usize) -> usize {
    debug_assert!(coord[0] >= 0 && coord[1] >= 0, "{:?}", coord);
    coord[0] as usize * cols + coord[1] as usize
}

#[inline]
pub fn linear_to_coord(linear_index: usize, cols: usize) -> Coord {
    vector![(linear_index / cols) as i32, (linear_index % cols) as i32]
}

/// Redirect an index that stepped off `0..len` onto the nearest valid one.
#[inline]
pub fn clamp_index(index: i32, len: usize) -> i32 {
    debug_assert!(len > 0);
    index.clamp(0, len as i32 - 1)
}

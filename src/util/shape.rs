use crate::util::indexing::*;
use crate::util::*;

/// Dimensions of the simulation grid.
/// This type is responsible for the indexing operations
/// where we map between a flat row-major buffer and cell coordinates.
/// Construction does not validate, solvers check `rows` and `cols`
/// at the start of every step.
#[derive(Hash, Debug, Copy, Clone, Eq, PartialEq)]
pub struct GridShape {
    pub rows: usize,
    pub cols: usize,
}

impl std::fmt::Display for GridShape {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> Result<(), std::fmt::Error> {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

impl GridShape {
    #[inline]
    pub fn new(rows: usize, cols: usize) -> Self {
        GridShape { rows, cols }
    }

    /// Number of cells, i.e. the length every field buffer must have.
    #[inline]
    pub fn buffer_size(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    #[inline]
    pub fn coord_to_linear(&self, coord: &Coord) -> usize {
        debug_assert!(
            self.contains(coord),
            "{} does not contain {:?}",
            self,
            coord
        );
        coord_to_linear(coord, self.cols)
    }

    #[inline]
    pub fn linear_to_coord(&self, index: usize) -> Coord {
        debug_assert!(index < self.buffer_size());
        linear_to_coord(index, self.cols)
    }

    #[inline]
    pub fn contains(&self, coord: &Coord) -> bool {
        coord[0] >= 0
            && coord[1] >= 0
            && (coord[0] as usize) < self.rows
            && (coord[1] as usize) < self.cols
    }

    /// Nearest in-grid coordinate.
    #[inline]
    pub fn clamp(&self, coord: &Coord) -> Coord {
        vector![
            clamp_index(coord[0], self.rows),
            clamp_index(coord[1], self.cols)
        ]
    }

    /// Rows that have a row on both sides of them.
    /// Zero for grids with fewer than three rows.
    pub fn interior_rows(&self) -> std::ops::Range<usize> {
        1..self.rows.saturating_sub(1).max(1)
    }

    /// Columns that have a column on both sides of them.
    pub fn interior_cols(&self) -> std::ops::Range<usize> {
        1..self.cols.saturating_sub(1).max(1)
    }

    /// Return iterator over contained coords in linear ordering.
    pub fn coord_iter(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.buffer_size()).map(|i| self.linear_to_coord(i))
    }
}

mod clamped;
mod classify;
mod reflecting;

pub use clamped::*;
pub use classify::*;
pub use reflecting::*;

use crate::domain::FieldView;
use crate::stencil::STAR_OFFSETS;
use crate::util::*;

/// The in-grid part of a cell's five point neighborhood:
/// the sum of the neighbor values the stencil sees and how many there are.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Neighborhood {
    pub sum: f64,
    pub count: u32,
}

impl Neighborhood {
    #[inline]
    pub fn push(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }
}

/// A boundary policy.
/// Shared by every execution strategy so that edges and corners
/// are handled the same way no matter how the grid is partitioned.
pub trait BoundaryCheck: Sync {
    fn neighbors(&self, field: &FieldView<'_>, coord: &Coord) -> Neighborhood;
}

/// Selects one of the boundary policies at runtime.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Boundary {
    /// One-sided stencil, out-of-grid neighbors are omitted.
    #[default]
    Reflecting,

    /// Out-of-grid neighbors are redirected to the nearest in-grid cell.
    Clamped,
}

/// All four neighbors are in the grid, no checks needed.
#[inline]
fn star_sum(field: &FieldView<'_>, coord: &Coord) -> Neighborhood {
    let mut result = Neighborhood::default();
    for o in STAR_OFFSETS {
        result.push(field.view(&(coord + Coord::new(o[0], o[1]))));
    }
    result
}

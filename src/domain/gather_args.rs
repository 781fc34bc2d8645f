use crate::domain::*;
use crate::util::*;

/// Everything the wave stencil needs to update one cell.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StencilArgs {
    pub current: f64,
    pub previous: f64,
    pub neighbors: Neighborhood,
}

impl StencilArgs {
    /// Discrete Laplacian:
    /// neighbor sum minus neighbor count times the center value.
    #[inline]
    pub fn laplacian(&self) -> f64 {
        self.neighbors.sum - self.neighbors.count as f64 * self.current
    }
}

#[inline]
pub fn gather_args<BC: BoundaryCheck>(
    bc: &BC,
    current: &FieldView<'_>,
    previous: &FieldView<'_>,
    coord: &Coord,
) -> StencilArgs {
    StencilArgs {
        current: current.view(coord),
        previous: previous.view(coord),
        neighbors: bc.neighbors(current, coord),
    }
}

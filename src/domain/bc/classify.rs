use crate::util::*;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Which stencil form a cell gets.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CellClass {
    Interior,
    Edge(Side),
    Corner(Corner),

    /// Any cell of a grid that is a single row or column wide.
    Degenerate,
}

impl CellClass {
    /// In-grid neighbor count, `None` when it depends on the cell's
    /// position in a degenerate grid.
    pub fn neighbor_count(&self) -> Option<u32> {
        match self {
            CellClass::Interior => Some(4),
            CellClass::Edge(_) => Some(3),
            CellClass::Corner(_) => Some(2),
            CellClass::Degenerate => None,
        }
    }
}

/// Pure function of position and grid dimensions.
#[inline]
pub fn classify(coord: &Coord, shape: &GridShape) -> CellClass {
    debug_assert!(
        shape.contains(coord),
        "{} does not contain {:?}",
        shape,
        coord
    );
    if shape.rows == 1 || shape.cols == 1 {
        return CellClass::Degenerate;
    }
    let top = coord[0] == 0;
    let bottom = coord[0] as usize == shape.rows - 1;
    let left = coord[1] == 0;
    let right = coord[1] as usize == shape.cols - 1;
    match (top, bottom, left, right) {
        (false, false, false, false) => CellClass::Interior,
        (true, _, true, _) => CellClass::Corner(Corner::TopLeft),
        (true, _, _, true) => CellClass::Corner(Corner::TopRight),
        (_, true, true, _) => CellClass::Corner(Corner::BottomLeft),
        (_, true, _, true) => CellClass::Corner(Corner::BottomRight),
        (true, _, _, _) => CellClass::Edge(Side::Top),
        (_, true, _, _) => CellClass::Edge(Side::Bottom),
        (_, _, true, _) => CellClass::Edge(Side::Left),
        (_, _, _, true) => CellClass::Edge(Side::Right),
    }
}

use crate::util::*;

/// A contiguous, exclusively borrowed run of output cells.
/// `offset` is the linear index of the first cell in the full grid.
pub struct FieldChunk<'a> {
    offset: usize,
    shape: GridShape,
    buffer: &'a mut [f64],
}

impl<'a> FieldChunk<'a> {
    pub fn new(offset: usize, shape: GridShape, buffer: &'a mut [f64]) -> Self {
        debug_assert!(offset + buffer.len() <= shape.buffer_size());
        FieldChunk {
            offset,
            shape,
            buffer,
        }
    }

    pub fn coord_iter_mut(
        &mut self,
    ) -> impl Iterator<Item = (Coord, &mut f64)> {
        let offset = self.offset;
        let shape = self.shape;
        self.buffer
            .iter_mut()
            .enumerate()
            .map(move |(i, v): (usize, &mut f64)| {
                let coord = shape.linear_to_coord(offset + i);
                (coord, v)
            })
    }
}

mod chunk;
mod field;

pub use chunk::*;
pub use field::*;

use crate::util::*;
use rayon::prelude::*;

/// Split an output buffer into disjoint chunks of `chunk_size` cells
/// for parallel writing.
/// Each chunk knows its linear offset so it can hand out world coordinates.
pub fn par_modify_access<'a>(
    shape: &GridShape,
    buffer: &'a mut [f64],
    chunk_size: usize,
) -> impl IndexedParallelIterator<Item = FieldChunk<'a>> + 'a {
    debug_assert!(chunk_size > 0);
    let shape = *shape;
    buffer[0..shape.buffer_size()]
        .par_chunks_mut(chunk_size)
        .enumerate()
        .map(move |(i, buffer_chunk): (usize, &mut [f64])| {
            let offset = i * chunk_size;
            FieldChunk::new(offset, shape, buffer_chunk)
        })
}

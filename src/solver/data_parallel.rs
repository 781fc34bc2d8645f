use crate::domain::*;
use crate::error::*;
use crate::solver::{apply_chunk, check_step_args};
use crate::stencil::*;
use crate::util::*;
use rayon::prelude::*;
use tracing::trace;

/// Fork-join strategy on rayon's global pool.
/// `next` is split into disjoint row-aligned chunks of `chunk_rows` rows,
/// `0` picks a size from the grid and the thread count.
/// Cells get the same arithmetic as the sequential strategy,
/// so results are bitwise identical.
pub fn step<BC: BoundaryCheck>(
    bc: &BC,
    stencil: &WaveStencil,
    shape: &GridShape,
    current: &[f64],
    previous: &[f64],
    next: &mut [f64],
    chunk_rows: usize,
) -> Result<()> {
    profiling::scope!("data_parallel::step");
    check_step_args(shape, current, previous, next)?;

    let chunk_rows = if chunk_rows == 0 {
        default_chunk_rows(shape)
    } else {
        // rows * cols is a real buffer length, so this cannot overflow.
        chunk_rows.min(shape.rows)
    };
    trace!(%shape, chunk_rows, "data parallel step");

    let current = FieldView::new(*shape, current);
    let previous = FieldView::new(*shape, previous);
    par_modify_access(shape, next, chunk_rows * shape.cols).for_each(
        |mut chunk: FieldChunk<'_>| {
            profiling::scope!("data_parallel: chunk");
            apply_chunk(bc, stencil, &current, &previous, &mut chunk);
        },
    );
    Ok(())
}

/// About four chunks per worker thread, at least one row each.
pub fn default_chunk_rows(shape: &GridShape) -> usize {
    let tasks = rayon::current_num_threads() * 4;
    shape.rows.div_ceil(tasks).max(1)
}

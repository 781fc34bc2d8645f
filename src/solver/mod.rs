//! The three execution strategies.
//! Each one validates its inputs, writes every cell of `next` exactly once
//! and returns only after all cells are written.

pub mod data_parallel;
pub mod sequential;
pub mod thread_pool;
mod validate;
mod wave_solver;

pub use thread_pool::{PoolState, WorkerPool};
pub use validate::*;
pub use wave_solver::*;

use crate::domain::*;
use crate::error::*;
use crate::params::WaveParams;
use crate::stencil::*;
use crate::util::*;

/// Evaluate the stencil for every cell of an output chunk.
/// The only per-cell loop in the crate, every strategy goes through it.
#[inline]
pub(crate) fn apply_chunk<BC: BoundaryCheck>(
    bc: &BC,
    stencil: &WaveStencil,
    current: &FieldView<'_>,
    previous: &FieldView<'_>,
    chunk: &mut FieldChunk<'_>,
) {
    chunk.coord_iter_mut().for_each(|(coord, value_mut)| {
        let args = gather_args(bc, current, previous, &coord);
        *value_mut = stencil.apply(&args);
    });
}

/// Single-threaded update with the reflecting boundary and implicit damping.
#[allow(clippy::too_many_arguments)]
pub fn sequential_update(
    current: &[f64],
    previous: &[f64],
    next: &mut [f64],
    rows: usize,
    cols: usize,
    c: f64,
    k: f64,
    dt: f64,
) -> Result<()> {
    let stencil =
        WaveStencil::new(&WaveParams::new(c, k, dt), DampingScheme::Implicit)?;
    sequential::step(
        &ReflectingCheck,
        &stencil,
        &GridShape::new(rows, cols),
        current,
        previous,
        next,
    )
}

/// Data-parallel update on rayon's global pool
/// with the reflecting boundary and implicit damping.
#[allow(clippy::too_many_arguments)]
pub fn data_parallel_update(
    current: &[f64],
    previous: &[f64],
    next: &mut [f64],
    rows: usize,
    cols: usize,
    c: f64,
    k: f64,
    dt: f64,
) -> Result<()> {
    let stencil =
        WaveStencil::new(&WaveParams::new(c, k, dt), DampingScheme::Implicit)?;
    data_parallel::step(
        &ReflectingCheck,
        &stencil,
        &GridShape::new(rows, cols),
        current,
        previous,
        next,
        0,
    )
}

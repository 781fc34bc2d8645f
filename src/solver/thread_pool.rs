//! Persistent worker pool fed with one task per interior row.
//!
//! The pool is an explicit, caller-owned value.
//! Worker threads are created once, on `start` or on the first step,
//! behind a lock so that concurrent first calls cannot race.
//! Every step enqueues its row tasks, computes the boundary cells on the
//! calling thread while the workers run, then waits for all of its tasks.
//! `shutdown` (or drop) releases the workers and blocks until they exit.

use crate::domain::*;
use crate::error::*;
use crate::params::WaveParams;
use crate::solver::{apply_chunk, check_step_args};
use crate::stencil::*;
use crate::util::*;
use std::sync::mpsc::{self, Receiver};
use std::sync::{Mutex, OnceLock, PoisonError};
use tracing::{debug, trace};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PoolState {
    /// No worker threads exist yet.
    Uninitialized,

    /// Workers are running and accept tasks.
    Ready,
}

#[derive(Debug)]
pub struct WorkerPool {
    threads: usize,
    pool: OnceLock<rayon::ThreadPool>,

    /// Held while the workers are built,
    /// afterwards receives one message per exited worker.
    exits: Mutex<Option<Receiver<usize>>>,
}

impl Default for WorkerPool {
    fn default() -> Self {
        WorkerPool::new(0)
    }
}

impl WorkerPool {
    /// `threads == 0` sizes the pool to the hardware concurrency.
    /// No threads are created until the first step or `start`.
    pub fn new(threads: usize) -> Self {
        let threads = if threads == 0 {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        } else {
            threads
        };
        WorkerPool {
            threads,
            pool: OnceLock::new(),
            exits: Mutex::new(None),
        }
    }

    pub fn threads(&self) -> usize {
        self.threads
    }

    pub fn state(&self) -> PoolState {
        if self.pool.get().is_some() {
            PoolState::Ready
        } else {
            PoolState::Uninitialized
        }
    }

    /// Create the worker threads now instead of on the first step.
    /// Calling it again, from any thread, is a no-op.
    pub fn start(&self) -> Result<()> {
        self.ready().map(|_| ())
    }

    fn ready(&self) -> Result<&rayon::ThreadPool> {
        if let Some(pool) = self.pool.get() {
            return Ok(pool);
        }

        let mut exits =
            self.exits.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(pool) = self.pool.get() {
            return Ok(pool);
        }

        let (sender, receiver) = mpsc::channel();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.threads)
            .thread_name(|i| format!("wave2d-worker-{}", i))
            .exit_handler(move |i| {
                // Only fails once shutdown stopped listening.
                let _ = sender.send(i);
            })
            .build()
            .map_err(|e| WaveError::PoolBuild(e.to_string()))?;
        *exits = Some(receiver);
        debug!(threads = self.threads, "worker pool started");
        Ok(self.pool.get_or_init(|| pool))
    }

    /// One step of the damped wave equation.
    /// Blocks until every cell of `next` is written.
    pub fn step<BC: BoundaryCheck>(
        &self,
        bc: &BC,
        stencil: &WaveStencil,
        shape: &GridShape,
        current: &[f64],
        previous: &[f64],
        next: &mut [f64],
    ) -> Result<()> {
        profiling::scope!("thread_pool::step");
        check_step_args(shape, current, previous, next)?;
        let pool = self.ready()?;

        let shape = *shape;
        let cols = shape.cols;
        let interior_rows = shape.interior_rows();
        let interior_cols = shape.interior_cols().len();
        let current = &FieldView::new(shape, current);
        let previous = &FieldView::new(shape, previous);
        let tasks = if interior_cols > 0 {
            interior_rows.len()
        } else {
            0
        };
        trace!(%shape, tasks, "thread pool step");

        let rows = next.chunks_mut(cols).enumerate();
        pool.in_place_scope(move |scope| {
            for (row, row_buffer) in rows {
                let offset = row * cols;
                if interior_cols == 0 || !interior_rows.contains(&row) {
                    let mut chunk = FieldChunk::new(offset, shape, row_buffer);
                    apply_chunk(bc, stencil, current, previous, &mut chunk);
                    continue;
                }

                let (first, rest) = row_buffer.split_at_mut(1);
                let (middle, last) = rest.split_at_mut(interior_cols);
                scope.spawn(move |_| {
                    profiling::scope!("thread_pool: row task");
                    let mut chunk = FieldChunk::new(offset + 1, shape, middle);
                    apply_chunk(bc, stencil, current, previous, &mut chunk);
                });

                let mut chunk = FieldChunk::new(offset, shape, first);
                apply_chunk(bc, stencil, current, previous, &mut chunk);
                let mut chunk = FieldChunk::new(offset + cols - 1, shape, last);
                apply_chunk(bc, stencil, current, previous, &mut chunk);
            }
        });
        Ok(())
    }

    /// `step` with the reflecting boundary and implicit damping.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &self,
        current: &[f64],
        previous: &[f64],
        next: &mut [f64],
        rows: usize,
        cols: usize,
        c: f64,
        k: f64,
        dt: f64,
    ) -> Result<()> {
        let stencil = WaveStencil::new(
            &WaveParams::new(c, k, dt),
            DampingScheme::Implicit,
        )?;
        self.step(
            &ReflectingCheck,
            &stencil,
            &GridShape::new(rows, cols),
            current,
            previous,
            next,
        )
    }

    /// Stop the workers and wait for every one of them to exit.
    pub fn shutdown(mut self) {
        self.release();
    }

    fn release(&mut self) {
        let Some(pool) = self.pool.take() else {
            return;
        };
        let workers = pool.current_num_threads();
        drop(pool);

        let exits = self
            .exits
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(exits) = exits {
            for _ in 0..workers {
                if exits.recv().is_err() {
                    break;
                }
            }
        }
        debug!(workers, "worker pool shut down");
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.release();
    }
}

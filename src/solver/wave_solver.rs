use crate::domain::*;
use crate::error::*;
use crate::params::WaveParams;
use crate::solver::{data_parallel, sequential, WorkerPool};
use crate::stencil::*;
use crate::util::*;

#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Strategy {
    #[default]
    Sequential,
    DataParallel,
    ThreadPool,
}

/// Everything that selects how a step is computed.
/// Physical parameters are passed per step, not stored here.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct SolverConfig {
    pub strategy: Strategy,
    pub boundary: Boundary,
    pub scheme: DampingScheme,

    /// Worker threads for `Strategy::ThreadPool`,
    /// 0 for the hardware concurrency.
    pub threads: usize,

    /// Rows per task for `Strategy::DataParallel`,
    /// 0 to derive it from the thread count.
    pub chunk_rows: usize,
}

impl SolverConfig {
    pub fn new(strategy: Strategy) -> Self {
        SolverConfig {
            strategy,
            ..Default::default()
        }
    }

    pub fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn with_scheme(mut self, scheme: DampingScheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_chunk_rows(mut self, chunk_rows: usize) -> Self {
        self.chunk_rows = chunk_rows;
        self
    }
}

#[derive(Debug)]
enum Executor {
    Sequential,
    DataParallel { chunk_rows: usize },
    ThreadPool(WorkerPool),
}

/// Configured front door over the three strategies.
/// The caller still owns the buffers and rotates them between steps.
#[derive(Debug)]
pub struct WaveSolver {
    config: SolverConfig,
    executor: Executor,
}

impl WaveSolver {
    /// A thread pool strategy gets its own `WorkerPool`,
    /// whose threads start on the first step.
    pub fn new(config: SolverConfig) -> Self {
        let executor = match config.strategy {
            Strategy::Sequential => Executor::Sequential,
            Strategy::DataParallel => Executor::DataParallel {
                chunk_rows: config.chunk_rows,
            },
            Strategy::ThreadPool => {
                Executor::ThreadPool(WorkerPool::new(config.threads))
            }
        };
        WaveSolver { config, executor }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn pool(&self) -> Option<&WorkerPool> {
        match &self.executor {
            Executor::ThreadPool(pool) => Some(pool),
            _ => None,
        }
    }

    pub fn step(
        &self,
        shape: &GridShape,
        params: &WaveParams,
        current: &[f64],
        previous: &[f64],
        next: &mut [f64],
    ) -> Result<()> {
        let stencil = WaveStencil::new(params, self.config.scheme)?;
        match self.config.boundary {
            Boundary::Reflecting => self.step_with(
                &ReflectingCheck,
                &stencil,
                shape,
                current,
                previous,
                next,
            ),
            Boundary::Clamped => self.step_with(
                &ClampedCheck,
                &stencil,
                shape,
                current,
                previous,
                next,
            ),
        }
    }

    fn step_with<BC: BoundaryCheck>(
        &self,
        bc: &BC,
        stencil: &WaveStencil,
        shape: &GridShape,
        current: &[f64],
        previous: &[f64],
        next: &mut [f64],
    ) -> Result<()> {
        match &self.executor {
            Executor::Sequential => {
                sequential::step(bc, stencil, shape, current, previous, next)
            }
            Executor::DataParallel { chunk_rows } => data_parallel::step(
                bc,
                stencil,
                shape,
                current,
                previous,
                next,
                *chunk_rows,
            ),
            Executor::ThreadPool(pool) => {
                pool.step(bc, stencil, shape, current, previous, next)
            }
        }
    }

    /// Release the worker threads, if any, and wait for them to exit.
    pub fn shutdown(self) {
        if let Executor::ThreadPool(pool) = self.executor {
            pool.shutdown();
        }
    }
}

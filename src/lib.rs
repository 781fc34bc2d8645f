//! One explicit time step of the damped 2D wave equation
//! ∂²u/∂t² + K·∂u/∂t = C²·∇²u
//! on a rectangular grid, computed from the field at t and t-1.
//!
//! The caller owns three flat row-major buffers (`current`, `previous`,
//! `next`) and rotates them between steps.
//! Three interchangeable strategies fill `next`:
//! [`solver::sequential`], [`solver::data_parallel`] and
//! [`solver::WorkerPool`].

pub mod domain;
pub mod error;
pub mod params;
pub mod solver;
pub mod stencil;
pub mod util;

pub use error::{Result, WaveError};
pub use params::WaveParams;
pub use solver::{
    data_parallel_update, sequential_update, SolverConfig, Strategy,
    WaveSolver, WorkerPool,
};

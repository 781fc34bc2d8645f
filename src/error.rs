use thiserror::Error;

pub type Result<T> = std::result::Result<T, WaveError>;

/// Reasons a step is rejected before any output is written.
/// All of these are deterministic, retrying with the same inputs
/// fails the same way.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WaveError {
    #[error("grid needs at least one row and one column, got {rows}x{cols}")]
    EmptyGrid { rows: usize, cols: usize },

    #[error("grid {rows}x{cols} exceeds the addressable cell coordinates")]
    GridTooLarge { rows: usize, cols: usize },

    #[error("buffer '{buffer}' holds {actual} values, grid needs {expected}")]
    BufferLength {
        buffer: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("output buffer overlaps buffer '{0}'")]
    AliasedOutput(&'static str),

    #[error("parameter '{name}' is invalid: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("failed to start worker pool: {0}")]
    PoolBuild(String),
}

use crate::error::*;
use crate::util::*;
use tracing::warn;

/// Eager precondition check shared by all strategies.
/// Runs before anything is written, so on error `next` is untouched.
pub fn check_step_args(
    shape: &GridShape,
    current: &[f64],
    previous: &[f64],
    next: &[f64],
) -> Result<()> {
    let result = check(shape, current, previous, next);
    if let Err(e) = &result {
        warn!(%shape, error = %e, "rejected wave step");
    }
    result
}

fn check(
    shape: &GridShape,
    current: &[f64],
    previous: &[f64],
    next: &[f64],
) -> Result<()> {
    if shape.is_empty() {
        return Err(WaveError::EmptyGrid {
            rows: shape.rows,
            cols: shape.cols,
        });
    }

    // Cell coordinates are i32, one step past an edge included.
    let max = i32::MAX as usize;
    if shape.rows > max
        || shape.cols > max
        || shape.rows.checked_mul(shape.cols).is_none()
    {
        return Err(WaveError::GridTooLarge {
            rows: shape.rows,
            cols: shape.cols,
        });
    }

    let expected = shape.buffer_size();
    for (buffer, values) in
        [("current", current), ("previous", previous), ("next", next)]
    {
        if values.len() != expected {
            return Err(WaveError::BufferLength {
                buffer,
                expected,
                actual: values.len(),
            });
        }
    }

    if overlaps(next, current) {
        return Err(WaveError::AliasedOutput("current"));
    }
    if overlaps(next, previous) {
        return Err(WaveError::AliasedOutput("previous"));
    }
    Ok(())
}

fn overlaps(a: &[f64], b: &[f64]) -> bool {
    let a = a.as_ptr_range();
    let b = b.as_ptr_range();
    a.start < b.end && b.start < a.end
}

use crate::domain::*;
use crate::error::*;
use crate::solver::{apply_chunk, check_step_args};
use crate::stencil::*;
use crate::util::*;
use tracing::trace;

/// Reference strategy: one thread, row-major order.
pub fn step<BC: BoundaryCheck>(
    bc: &BC,
    stencil: &WaveStencil,
    shape: &GridShape,
    current: &[f64],
    previous: &[f64],
    next: &mut [f64],
) -> Result<()> {
    profiling::scope!("sequential::step");
    check_step_args(shape, current, previous, next)?;
    trace!(%shape, "sequential step");

    let current = FieldView::new(*shape, current);
    let previous = FieldView::new(*shape, previous);
    let mut output = FieldChunk::new(0, *shape, next);
    apply_chunk(bc, stencil, &current, &previous, &mut output);
    Ok(())
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use crate::params::WaveParams;
    use float_cmp::assert_approx_eq;

    fn unit_stencil() -> WaveStencil {
        let params = WaveParams::new(1.0, 0.0, 1.0);
        WaveStencil::new(&params, DampingScheme::Implicit).unwrap()
    }

    #[test]
    fn uniform_3x3() {
        let shape = GridShape::new(3, 3);
        let current = vec![1.0; 9];
        let previous = vec![1.0; 9];
        let mut next = vec![0.0; 9];
        step(
            &ReflectingCheck,
            &unit_stencil(),
            &shape,
            &current,
            &previous,
            &mut next,
        )
        .unwrap();
        for x in next {
            assert_approx_eq!(f64, x, 1.0);
        }
    }

    #[test]
    fn perturbed_center_3x3() {
        let shape = GridShape::new(3, 3);
        let mut current = vec![1.0; 9];
        current[4] = 2.0;
        let previous = vec![1.0; 9];
        let mut next = vec![0.0; 9];
        step(
            &ReflectingCheck,
            &unit_stencil(),
            &shape,
            &current,
            &previous,
            &mut next,
        )
        .unwrap();

        // next = lap + 2u - prev
        assert_approx_eq!(f64, next[4], -1.0);
        for i in [1, 3, 5, 7] {
            assert_approx_eq!(f64, next[i], 2.0);
        }
        for i in [0, 2, 6, 8] {
            assert_approx_eq!(f64, next[i], 1.0);
        }
    }

    #[test]
    fn error_leaves_output() {
        let shape = GridShape::new(3, 3);
        let current = vec![1.0; 8];
        let previous = vec![1.0; 9];
        let mut next = vec![7.0; 9];
        let r = step(
            &ReflectingCheck,
            &unit_stencil(),
            &shape,
            &current,
            &previous,
            &mut next,
        );
        assert!(r.is_err());
        assert!(next.iter().all(|x| *x == 7.0));
    }
}

use float_cmp::assert_approx_eq;
use rand::prelude::*;
use wave2d::domain::*;
use wave2d::solver::*;
use wave2d::stencil::*;
use wave2d::util::*;
use wave2d::WaveParams;

fn random_field(shape: &GridShape, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..shape.buffer_size())
        .map(|_| rng.gen_range(-1.0..1.0))
        .collect()
}

/// Run every strategy on the same inputs, return their outputs
/// in the order sequential, data parallel, thread pool.
fn run_all(
    config: SolverConfig,
    shape: &GridShape,
    params: &WaveParams,
    current: &[f64],
    previous: &[f64],
) -> Vec<Vec<f64>> {
    [Strategy::Sequential, Strategy::DataParallel, Strategy::ThreadPool]
        .into_iter()
        .map(|strategy| {
            let solver = WaveSolver::new(SolverConfig { strategy, ..config });
            let mut next = vec![f64::NAN; shape.buffer_size()];
            solver
                .step(shape, params, current, previous, &mut next)
                .unwrap();
            solver.shutdown();
            next
        })
        .collect()
}

#[test]
fn strategies_bitwise_equal() {
    let params = WaveParams::new(1.3, 0.4, 0.3);
    let shapes = [
        GridShape::new(3, 3),
        GridShape::new(64, 48),
        GridShape::new(17, 101),
        GridShape::new(2, 9),
        GridShape::new(9, 2),
        GridShape::new(1, 12),
        GridShape::new(12, 1),
        GridShape::new(1, 1),
    ];
    for boundary in [Boundary::Reflecting, Boundary::Clamped] {
        for scheme in [DampingScheme::Implicit, DampingScheme::Explicit] {
            let config = SolverConfig::default()
                .with_boundary(boundary)
                .with_scheme(scheme)
                .with_threads(4)
                .with_chunk_rows(3);
            for (i, shape) in shapes.iter().enumerate() {
                let current = random_field(shape, 2 * i as u64);
                let previous = random_field(shape, 2 * i as u64 + 1);
                let results =
                    run_all(config, shape, &params, &current, &previous);
                assert!(results[0].iter().all(|x| x.is_finite()));
                assert_eq!(
                    results[0], results[1],
                    "data parallel {:?} {:?} {}",
                    boundary, scheme, shape
                );
                assert_eq!(
                    results[0], results[2],
                    "thread pool {:?} {:?} {}",
                    boundary, scheme, shape
                );
            }
        }
    }
}

#[test]
fn front_door_functions_agree() {
    let shape = GridShape::new(31, 23);
    let current = random_field(&shape, 7);
    let previous = random_field(&shape, 8);
    let n = shape.buffer_size();
    let (c, k, dt) = (12.0, 0.9, 0.05);

    let mut seq = vec![0.0; n];
    sequential_update(&current, &previous, &mut seq, 31, 23, c, k, dt).unwrap();

    let mut par = vec![0.0; n];
    data_parallel_update(&current, &previous, &mut par, 31, 23, c, k, dt)
        .unwrap();

    let pool = WorkerPool::new(3);
    let mut pooled = vec![0.0; n];
    pool.update(&current, &previous, &mut pooled, 31, 23, c, k, dt)
        .unwrap();
    pool.shutdown();

    assert_eq!(seq, par);
    assert_eq!(seq, pooled);
}

#[test]
fn boundary_policies_agree_within_tolerance() {
    // The clamped duplicate of the center cancels in the Laplacian,
    // so the two policies only differ by rounding.
    let params = WaveParams::default();
    let shape = GridShape::new(20, 15);
    let current = random_field(&shape, 21);
    let previous = random_field(&shape, 22);

    let reflecting = run_all(
        SolverConfig::default().with_boundary(Boundary::Reflecting),
        &shape,
        &params,
        &current,
        &previous,
    );
    let clamped = run_all(
        SolverConfig::default().with_boundary(Boundary::Clamped),
        &shape,
        &params,
        &current,
        &previous,
    );
    for (r, c) in reflecting[0].iter().zip(clamped[0].iter()) {
        let scale = r.abs().max(1.0);
        assert_approx_eq!(f64, *r / scale, *c / scale, epsilon = 1e-12);
    }
}

#[test]
fn implicit_matches_explicit_without_damping() {
    // With K = 0 both schemes reduce to 2u - prev + (C dt)^2 lap.
    let params = WaveParams::new(0.7, 0.0, 0.5);
    let shape = GridShape::new(11, 13);
    let current = random_field(&shape, 3);
    let previous = random_field(&shape, 4);
    let implicit = run_all(
        SolverConfig::default().with_scheme(DampingScheme::Implicit),
        &shape,
        &params,
        &current,
        &previous,
    );
    let explicit = run_all(
        SolverConfig::default().with_scheme(DampingScheme::Explicit),
        &shape,
        &params,
        &current,
        &previous,
    );
    for (a, b) in implicit[0].iter().zip(explicit[0].iter()) {
        assert_approx_eq!(f64, *a, *b, epsilon = 1e-12);
    }
}

#[test]
fn direct_strategy_calls_agree() {
    let shape = GridShape::new(40, 40);
    let current = random_field(&shape, 11);
    let previous = random_field(&shape, 12);
    let stencil =
        WaveStencil::new(&WaveParams::default(), DampingScheme::Implicit)
            .unwrap();
    let n = shape.buffer_size();

    let mut a = vec![0.0; n];
    sequential::step(
        &ClampedCheck,
        &stencil,
        &shape,
        &current,
        &previous,
        &mut a,
    )
    .unwrap();

    let mut b = vec![0.0; n];
    data_parallel::step(
        &ClampedCheck,
        &stencil,
        &shape,
        &current,
        &previous,
        &mut b,
        1,
    )
    .unwrap();

    let pool = WorkerPool::new(2);
    let mut c = vec![0.0; n];
    pool.step(&ClampedCheck, &stencil, &shape, &current, &previous, &mut c)
        .unwrap();

    assert_eq!(a, b);
    assert_eq!(a, c);
}

#[test]
fn oversized_chunk_rows() {
    let params = WaveParams::default();
    let shape = GridShape::new(6, 5);
    let current = random_field(&shape, 31);
    let previous = random_field(&shape, 32);
    let expected = run_all(
        SolverConfig::default(),
        &shape,
        &params,
        &current,
        &previous,
    );
    for chunk_rows in [7, usize::MAX / 5 + 1, usize::MAX] {
        let config = SolverConfig::new(Strategy::DataParallel)
            .with_chunk_rows(chunk_rows);
        let solver = WaveSolver::new(config);
        let mut next = vec![f64::NAN; shape.buffer_size()];
        solver
            .step(&shape, &params, &current, &previous, &mut next)
            .unwrap();
        assert_eq!(next, expected[0], "chunk_rows: {}", chunk_rows);
    }
}

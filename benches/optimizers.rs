use criterion::{criterion_group, criterion_main, Criterion};
use optlib::{
    algo::{GradientDescent, NelderMead, Newton},
    functions::{FourWell, NarrowValley, Sphere},
    testing::*,
    CandidateSet, Function, PointState, Segment, SimplexState, Step, Vector, WithHessian,
};
use optlib::{Optimizer, OptimizerParams};

const MAX_ITERS: usize = 100_000;
const TOLERANCE: f64 = 1e-8;

fn params() -> OptimizerParams {
    OptimizerParams::new(TOLERANCE, TOLERANCE, MAX_ITERS).unwrap()
}

fn simplex<F, S>(f: &F, mut step: S, x: Vector<2>) -> bool
where
    F: TestFunction<2>,
    S: Step<SimplexState<3, 2>, F>,
{
    let simplex = CandidateSet::<3, Vector<2>>::simplex_around(x, 0.5);
    let mut state = SimplexState::new(simplex, f);

    match Optimizer::with_observer(&mut state, f, params(), ()).optimize(&mut step) {
        Ok(outcome) => outcome.converged(),
        Err(_) => false,
    }
}

fn descent<F, S>(f: &F, mut step: S, x: Vector<2>) -> bool
where
    F: Function<2>,
    S: Step<PointState<2>, F>,
{
    let mut state = PointState::new(Segment::new([x + 1.0, x]), f);

    match Optimizer::with_observer(&mut state, f, params(), ()).optimize(&mut step) {
        Ok(outcome) => outcome.converged(),
        Err(_) => false,
    }
}

fn derivatives<F: TestFunction<2> + WithHessian<2>>(c: &mut Criterion, name: &str, f: &F) {
    for (i, x) in f.initials().into_iter().enumerate() {
        c.bench_function(&format!("Newton {} {}", name, i + 1), |b| {
            b.iter(|| descent(f, Newton::new(), x))
        });

        c.bench_function(&format!("gradient descent {} {}", name, i + 1), |b| {
            b.iter(|| descent(f, GradientDescent::new(), x))
        });

        c.bench_function(&format!("Nelder-Mead {} {}", name, i + 1), |b| {
            b.iter(|| simplex(f, NelderMead::new(), x))
        });
    }
}

fn narrow_valley(c: &mut Criterion) {
    derivatives(c, "narrow valley", &NarrowValley::new());
}

fn four_well(c: &mut Criterion) {
    derivatives(c, "four well", &FourWell::new());
}

fn sphere(c: &mut Criterion) {
    let f = Sphere::<2>::new();
    let x = f.initials()[0];

    c.bench_function("Nelder-Mead sphere", |b| {
        b.iter(|| simplex(&f, NelderMead::new(), x))
    });
}

fn line_search(c: &mut Criterion) {
    let f = NarrowValley::new();
    let x = Vector::new([-1.2, 1.0]);

    c.bench_function("line search along gradient", |b| {
        b.iter(|| {
            let state = PointState::new(Segment::new([x + 1.0, x]), &f);
            GradientDescent::new().next_domain(&state, &f).is_ok()
        })
    });
}

criterion_group!(optimizers, narrow_valley, four_well, sphere, line_search);
criterion_main!(optimizers);

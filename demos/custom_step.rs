use optlib::{
    CandidateSet, Function, Optimizer, OptimizerParams, PointState, PointValue, Segment, Step,
    Vector,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Samples around the current point and moves there if it is better.
struct RandomSearch {
    rng: StdRng,
    radius: f64,
}

impl RandomSearch {
    fn new(rng: StdRng, radius: f64) -> Self {
        Self { rng, radius }
    }
}

impl<F: Function<DIM>, const DIM: usize> Step<PointState<DIM>, F> for RandomSearch {
    const NAME: &'static str = "Random search";
    type Error = optlib::Error;

    fn next_domain(
        &mut self,
        state: &PointState<DIM>,
        f: &F,
    ) -> Result<CandidateSet<2, PointValue<DIM>>, Self::Error> {
        let current = *state.current();

        // Randomly sample in the neighborhood.
        let radius = self.radius;
        let offset = Vector::from_fn(|_| self.rng.gen_range(-radius..=radius));
        let trial = PointValue::evaluate(current.vector() + offset, f);

        if trial.value() < current.value() {
            Ok(CandidateSet::new([current, trial]))
        } else {
            Ok(CandidateSet::new([current, current]))
        }
    }
}

// https://en.wikipedia.org/wiki/Rosenbrock_function
struct Rosenbrock {
    a: f64,
    b: f64,
}

impl Function<2> for Rosenbrock {
    fn apply(&self, x: &Vector<2>) -> f64 {
        (self.a - x[0]).powi(2) + self.b * (x[1] - x[0].powi(2)).powi(2)
    }
}

fn main() -> Result<(), String> {
    let f = Rosenbrock { a: 1.0, b: 1.0 };
    let x0 = Vector::new([-10.0, -5.0]);
    let mut state = PointState::new(Segment::new([x0, x0]), &f);
    let params = OptimizerParams::new(0.0, 0.0, 100).map_err(|error| format!("{error}"))?;

    let mut optimizer = Optimizer::new(&mut state, &f, params);
    let mut step = RandomSearch::new(StdRng::seed_from_u64(42), 0.5);

    for iter in 0..100 {
        let guess = optimizer
            .next(&mut step)
            .map_err(|error| format!("{error}"))?;
        println!(
            "iter = {}\tf(x) = {}\tx = {:?}",
            iter,
            guess.value(),
            guess.vector().as_slice()
        );
    }

    Ok(())
}

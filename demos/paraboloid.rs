use optlib::algo::{GradientDescent, Newton};
use optlib::functions::Quadratic;
use optlib::{Observer, Optimizer, OptimizerParams, PointState, PointValue, Segment, Vector};

struct Printer;

impl Observer<PointValue<2>> for Printer {
    fn iteration(&mut self, iteration: usize, guess: &PointValue<2>) {
        println!(
            "iter = {}\tf(x) = {}\tx = {:?}",
            iteration,
            guess.value(),
            guess.vector().as_slice()
        );
    }
}

fn main() -> Result<(), String> {
    // An elliptic paraboloid with minimum at the origin.
    let f = Quadratic::new([[1.0, 0.5], [0.5, 4.0]]);
    let x0 = Vector::new([-10.0, 5.0]);
    let params = OptimizerParams::new(1e-8, 1e-8, 500).map_err(|error| format!("{error}"))?;

    println!("gradient descent");
    let mut state = PointState::new(Segment::new([x0 + 1.0, x0]), &f);
    let outcome = Optimizer::with_observer(&mut state, &f, params, Printer)
        .optimize(&mut GradientDescent::new())
        .map_err(|error| format!("{error}"))?;
    println!("converged = {}\n", outcome.converged());

    println!("Newton");
    let mut state = PointState::new(Segment::new([x0 + 1.0, x0]), &f);
    let outcome = Optimizer::with_observer(&mut state, &f, params, Printer)
        .optimize(&mut Newton::new())
        .map_err(|error| format!("{error}"))?;

    if outcome.converged() {
        Ok(())
    } else {
        Err("did not converge".to_string())
    }
}

extern crate piecewise_interp;

use std::{error::Error, f64::consts::FRAC_PI_2};

use piecewise_interp::{
    analysis::{max_abs, relative_error},
    grid::{arange, linspace},
    linear, BoundaryCondition, CubicSpline, SampleSet,
};

fn true_function(x: f64) -> f64 {
    (FRAC_PI_2 * x).sin() + x / 2.0
}

fn main() -> Result<(), Box<dyn Error>> {

    let samples = SampleSet::from_fn(arange(0.0, 11.0, 1.0), true_function)?;

    let x_fine = linspace(0.0, 10.0, 101);
    let y_true: Vec<f64> = x_fine.iter().map(|x| true_function(*x)).collect();

    let y_linear = linear::evaluate(&samples, &x_fine);
    let y_cubic = CubicSpline::new(samples, BoundaryCondition::NotAKnot)?.batch_evaluate(&x_fine);

    let error_linear = relative_error(&y_linear, &y_true)?;
    let error_cubic = relative_error(&y_cubic, &y_true)?;

    println!("x;true;linear;cubic;linear_error;cubic_error");
    for i in 0..x_fine.len() {
        println!(
            "{:.2};{:.4};{:.4};{:.4};{:.4};{:.4}",
            x_fine[i], y_true[i], y_linear[i], y_cubic[i], error_linear[i], error_cubic[i]
        );
    }

    eprintln!("linear max relative error: {:?}", max_abs(&error_linear));
    eprintln!("cubic max relative error: {:?}", max_abs(&error_cubic));
    Ok(())
}

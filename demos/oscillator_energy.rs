extern crate piecewise_interp;

use std::error::Error;

use piecewise_interp::{
    analysis::{gradient, mechanical_energy},
    grid::linspace,
    linear, BoundaryCondition, CubicSpline, SampleSet,
};

fn main() -> Result<(), Box<dyn Error>> {

    let mass: f64 = 1.0;
    let stiffness = 1.0;
    let omega = (stiffness / mass).sqrt();

    let samples = SampleSet::from_fn(linspace(0.0, 10.0, 20), |t| (omega * t).sin())?;
    let t_fine = linspace(0.0, 10.0, 500);

    let x_linear = linear::evaluate(&samples, &t_fine);
    let x_cubic = CubicSpline::new(samples, BoundaryCondition::NotAKnot)?.batch_evaluate(&t_fine);

    let energy_linear = mechanical_energy(&x_linear, &gradient(&x_linear, &t_fine)?, mass, stiffness)?;
    let energy_cubic = mechanical_energy(&x_cubic, &gradient(&x_cubic, &t_fine)?, mass, stiffness)?;

    println!("t;linear_energy;cubic_energy;true_energy");
    for i in 0..t_fine.len() {
        println!("{:.3};{:.4};{:.4};{:.4}", t_fine[i], energy_linear[i], energy_cubic[i], 0.5 * stiffness);
    }
    Ok(())
}

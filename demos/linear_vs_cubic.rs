extern crate piecewise_interp;

use std::{env, error::Error};

use piecewise_interp::{dataset::load_table, grid::refine, linear, BoundaryCondition, CubicSpline};

fn main() -> Result<(), Box<dyn Error>> {

    let path = env::args().nth(1).unwrap_or_else(|| "demos/data/hw01.tsv".to_string());
    let samples = load_table(&path)?;

    eprintln!("loaded {} samples from {}, x in {:?}", samples.len(), path, samples.x_range());

    let x_fine = refine(&samples, 10);
    let y_linear = linear::evaluate(&samples, &x_fine);

    let spline = CubicSpline::new(samples, BoundaryCondition::NotAKnot)?;
    let y_cubic = spline.batch_evaluate(&x_fine);

    println!("x;linear;cubic");
    for i in 0..x_fine.len() {
        println!("{:.3};{:.4};{:.4}", x_fine[i], y_linear[i], y_cubic[i]);
    }
    Ok(())
}

extern crate piecewise_interp;

use piecewise_interp::{grid::linspace, LinearInterpolator, SampleSet};

fn main() {

    let samples = SampleSet::new(
        vec![-1.0, 0.0, 1.0, 2.0, 3.0, 3.5, 5.0, 6.0, 7.0, 8.0],
        vec![-3.0, -1.0, 1.0, 3.0, 3.0, 1.0, 4.0, 2.0, 1.0, 1.0]
    ).unwrap();

    let interpolator = LinearInterpolator::new(samples);

    let x_vector = linspace(-1.0, 8.0, 50);
    let result = interpolator.batch_interpolate(&x_vector).unwrap();

    println!("x;y");
    for i in 0..x_vector.len() {
        println!("{:.2};{:.2}", x_vector[i], result[i]);
    }
}

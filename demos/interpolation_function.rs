extern crate piecewise_interp;

use piecewise_interp::{grid::linspace, linear, SampleSet};

fn main() {

    let samples = SampleSet::new(
        vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
        vec![-1.0, 1.0, 2.0, 3.0, 1.0, 4.0]
    ).unwrap();

    let x_vector = linspace(0.0, 5.0, 30);
    let result = linear::evaluate(&samples, &x_vector);

    println!("x;y");
    for (x, y) in x_vector.iter().zip(result.iter()) {
        println!("{:.2};{:.2}", x, y);
    }
}

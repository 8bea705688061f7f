extern crate piecewise_interp;

use piecewise_interp::{LinearInterpolator, SampleSet};

fn main() {

    let samples = SampleSet::new(
        vec![1.0, 2.0, 3.0, 4.0, 5.0],
        vec![1.0, 0.0, -2.0, 1.0, 1.5]
    ).unwrap();

    let interpolator = LinearInterpolator::new(samples);

    let x_min = 0.0;
    let x_max = 6.0;
    let number_of_steps = 60;
    let step = (x_max - x_min) / number_of_steps as f64;

    println!("x;y");
    for i in 0..=number_of_steps {
        let x = x_min + step * i as f64;
        println!("{:.2};{:.2}", x, interpolator.evaluate(x));
    }
}

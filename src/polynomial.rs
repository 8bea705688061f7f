/// Polynomial in the local coordinate `t = x - x_start` of a segment,
/// coefficients stored from the lowest order up.
#[derive(Debug, Clone)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {

    pub fn new(coefficients: Vec<f64>) -> Self {
        Polynomial { coefficients }
    }

    pub fn evaluate(&self, t: f64) -> f64 {
        self.coefficients.iter().rev().fold(0.0, |acc, c| acc * t + c)
    }

    pub fn derivative(&self, t: f64) -> f64 {
        self.coefficients.iter()
            .enumerate()
            .skip(1)
            .rev()
            .fold(0.0, |acc, (order, c)| acc * t + order as f64 * c)
    }
}

use nalgebra::{DMatrix, DVector};

use crate::{error::InterpolationError, polynomial::Polynomial, sample::SampleSet};

/// End conditions closing the cubic spline equation system.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BoundaryCondition {
    /// Third derivative is continuous across the second and the second to last sample.
    /// Needs at least 4 samples.
    #[default]
    NotAKnot,
    /// Second derivative is zero at both ends.
    Natural,
    /// First derivative is fixed at both ends.
    Clamped { start: f64, end: f64 },
}

impl BoundaryCondition {
    fn min_samples(&self) -> usize {
        match self {
            BoundaryCondition::NotAKnot => 4,
            BoundaryCondition::Natural | BoundaryCondition::Clamped { .. } => 2,
        }
    }
}

/// Twice continuously differentiable piecewise cubic through every sample.
///
/// Outside the sample range the boundary cubics are continued.
/// # Example
/// ```
/// use piecewise_interp::{BoundaryCondition, CubicSpline, SampleSet};
/// use assert_approx_eq::assert_approx_eq;
///
/// let samples = SampleSet::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 0.0]).unwrap();
/// let spline = CubicSpline::new(samples, BoundaryCondition::Natural).unwrap();
///
/// assert_approx_eq!(spline.evaluate(0.5), 0.6875, 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct CubicSpline {
    samples: SampleSet,
    polynomials: Vec<Polynomial>,
    boundary_condition: BoundaryCondition,
}

impl CubicSpline {
    pub fn new(samples: SampleSet, boundary_condition: BoundaryCondition) -> Result<Self, InterpolationError> {
        samples.check_min_len(boundary_condition.min_samples())?;

        let second_derivatives = solve_second_derivatives(&samples, boundary_condition)?;
        let polynomials = (0..samples.len() - 1)
            .map(|i| segment_polynomial(&samples, &second_derivatives, i))
            .collect();

        Ok(CubicSpline { samples, polynomials, boundary_condition })
    }

    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    pub fn boundary_condition(&self) -> BoundaryCondition {
        self.boundary_condition
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        let index = self.samples.segment_index(x);
        self.polynomials[index].evaluate(x - self.samples.xs()[index])
    }

    pub fn derivative(&self, x: f64) -> f64 {
        let index = self.samples.segment_index(x);
        self.polynomials[index].derivative(x - self.samples.xs()[index])
    }

    pub fn interpolate(&self, x: f64) -> Result<f64, InterpolationError> {
        if self.samples.contains(x) {
            Ok(self.evaluate(x))
        } else {
            let (min, max) = self.samples.x_range();
            Err(InterpolationError::OutOfRange { x, min, max })
        }
    }

    pub fn batch_evaluate(&self, x_vector: &[f64]) -> Vec<f64> {
        x_vector.iter().map(|x| self.evaluate(*x)).collect()
    }
}

/// Second derivatives at the samples, from the continuity equations of
/// the first derivative plus the two boundary equations.
fn solve_second_derivatives(
    samples: &SampleSet,
    boundary_condition: BoundaryCondition,
) -> Result<DVector<f64>, InterpolationError> {
    let size = samples.len();
    let xs = samples.xs();
    let ys = samples.ys();
    let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();
    let secant: Vec<f64> = (0..size - 1).map(|i| (ys[i + 1] - ys[i]) / h[i]).collect();

    let mut matrix = DMatrix::<f64>::zeros(size, size);
    let mut rhs = DVector::<f64>::zeros(size);

    for i in 1..size - 1 {
        matrix[(i, i - 1)] = h[i - 1];
        matrix[(i, i)] = 2.0 * (h[i - 1] + h[i]);
        matrix[(i, i + 1)] = h[i];
        rhs[i] = 6.0 * (secant[i] - secant[i - 1]);
    }

    let last = size - 1;
    match boundary_condition {
        BoundaryCondition::Natural => {
            matrix[(0, 0)] = 1.0;
            matrix[(last, last)] = 1.0;
        }
        BoundaryCondition::Clamped { start, end } => {
            matrix[(0, 0)] = 2.0 * h[0];
            matrix[(0, 1)] = h[0];
            rhs[0] = 6.0 * (secant[0] - start);

            matrix[(last, last - 1)] = h[last - 1];
            matrix[(last, last)] = 2.0 * h[last - 1];
            rhs[last] = 6.0 * (end - secant[last - 1]);
        }
        BoundaryCondition::NotAKnot => {
            matrix[(0, 0)] = h[1];
            matrix[(0, 1)] = -(h[0] + h[1]);
            matrix[(0, 2)] = h[0];

            matrix[(last, last - 2)] = h[last - 1];
            matrix[(last, last - 1)] = -(h[last - 2] + h[last - 1]);
            matrix[(last, last)] = h[last - 2];
        }
    }

    matrix.lu().solve(&rhs).ok_or(InterpolationError::SingularSystem)
}

fn segment_polynomial(samples: &SampleSet, second_derivatives: &DVector<f64>, index: usize) -> Polynomial {
    let (x0, x1, y0, y1) = samples.segment(index);
    let h = x1 - x0;
    let m0 = second_derivatives[index];
    let m1 = second_derivatives[index + 1];

    Polynomial::new(vec![
        y0,
        (y1 - y0) / h - h * (2.0 * m0 + m1) / 6.0,
        m0 / 2.0,
        (m1 - m0) / (6.0 * h),
    ])
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;
    use crate::{error::SampleSetError, linear};

    fn cubic(x: f64) -> f64 {
        x.powi(3) - 2.0 * x.powi(2) + x - 1.0
    }

    fn cubic_derivative(x: f64) -> f64 {
        3.0 * x.powi(2) - 4.0 * x + 1.0
    }

    #[test]
    fn natural_three_points() {
        let eps = 1e-12;
        let samples = SampleSet::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 0.0]).unwrap();
        let spline = CubicSpline::new(samples, BoundaryCondition::Natural).unwrap();

        assert_approx_eq!(spline.evaluate(0.0), 0.0, eps);
        assert_approx_eq!(spline.evaluate(0.5), 0.6875, eps);
        assert_approx_eq!(spline.evaluate(1.0), 1.0, eps);
        assert_approx_eq!(spline.evaluate(1.5), 0.6875, eps);
        assert_approx_eq!(spline.evaluate(2.0), 0.0, eps);
        assert_approx_eq!(spline.derivative(0.0), 1.5, eps);
        assert_approx_eq!(spline.derivative(1.0), 0.0, eps);

        assert_approx_eq!(spline.evaluate(-1.0), -1.0, eps);
        assert_approx_eq!(spline.evaluate(3.0), -1.0, eps);
    }

    #[test]
    fn natural_reproduces_line() {
        let eps = 1e-9;
        let samples = SampleSet::from_fn(vec![-2.0, -0.5, 0.3, 1.7, 4.0], |x| 2.0 * x + 1.0).unwrap();
        let spline = CubicSpline::new(samples, BoundaryCondition::Natural).unwrap();

        for x in [-3.0, -2.0, -1.1, 0.0, 1.0, 2.5, 4.0, 6.0] {
            assert_approx_eq!(spline.evaluate(x), 2.0 * x + 1.0, eps);
            assert_approx_eq!(spline.derivative(x), 2.0, eps);
        }
    }

    #[test]
    fn natural_two_points_is_linear() {
        let eps = 1e-12;
        let samples = SampleSet::new(vec![1.0, 3.0], vec![2.0, 6.0]).unwrap();
        let spline = CubicSpline::new(samples, BoundaryCondition::Natural).unwrap();

        assert_approx_eq!(spline.evaluate(2.0), 4.0, eps);
        assert_approx_eq!(spline.evaluate(0.0), 0.0, eps);
    }

    #[test]
    fn not_a_knot_reproduces_cubic() {
        let eps = 1e-9;
        let samples = SampleSet::from_fn(vec![0.0, 0.5, 1.3, 2.0, 3.0], cubic).unwrap();
        let spline = CubicSpline::new(samples, BoundaryCondition::default()).unwrap();

        assert_eq!(BoundaryCondition::NotAKnot, spline.boundary_condition());
        for x in [-1.0, 0.0, 0.25, 0.9, 1.3, 1.75, 2.6, 3.0, 4.0] {
            assert_approx_eq!(spline.evaluate(x), cubic(x), eps);
            assert_approx_eq!(spline.derivative(x), cubic_derivative(x), eps);
        }
    }

    #[test]
    fn not_a_knot_four_points() {
        let eps = 1e-9;
        let samples = SampleSet::from_fn(vec![0.0, 1.0, 2.5, 3.0], cubic).unwrap();
        let spline = CubicSpline::new(samples, BoundaryCondition::NotAKnot).unwrap();

        assert_approx_eq!(spline.evaluate(1.7), cubic(1.7), eps);
        assert_approx_eq!(spline.evaluate(-0.5), cubic(-0.5), eps);
    }

    #[test]
    fn not_a_knot_too_few_samples() {
        let samples = SampleSet::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 4.0]).unwrap();

        assert!(matches!(
            CubicSpline::new(samples, BoundaryCondition::NotAKnot),
            Err(InterpolationError::InvalidSampleSet(SampleSetError::TooFewSamples { got: 3, need: 4 }))
        ));
    }

    #[test]
    fn clamped_reproduces_cubic() {
        let eps = 1e-9;
        let samples = SampleSet::from_fn(vec![-1.0, 0.2, 1.0, 2.4], cubic).unwrap();
        let boundary_condition = BoundaryCondition::Clamped {
            start: cubic_derivative(-1.0),
            end: cubic_derivative(2.4),
        };
        let spline = CubicSpline::new(samples, boundary_condition).unwrap();

        for x in [-1.0, -0.4, 0.2, 0.6, 1.0, 1.9, 2.4] {
            assert_approx_eq!(spline.evaluate(x), cubic(x), eps);
        }
        assert_approx_eq!(spline.derivative(-1.0), cubic_derivative(-1.0), eps);
        assert_approx_eq!(spline.derivative(2.4), cubic_derivative(2.4), eps);
    }

    #[test]
    fn passes_through_samples() {
        let eps = 1e-12;
        let samples = SampleSet::new(
            vec![-1.0, 0.0, 1.0, 2.0, 3.0, 3.5, 5.0, 6.0, 7.0, 8.0],
            vec![-3.0, -1.0, 1.0, 3.0, 3.0, 1.0, 4.0, 2.0, 1.0, 1.0],
        ).unwrap();
        let spline = CubicSpline::new(samples.clone(), BoundaryCondition::NotAKnot).unwrap();

        let result = spline.batch_evaluate(samples.xs());
        for (value, expected) in result.iter().zip(samples.ys()) {
            assert_approx_eq!(*value, *expected, eps);
        }
    }

    #[test]
    fn strict_interpolate() {
        let samples = SampleSet::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 0.0]).unwrap();
        let spline = CubicSpline::new(samples, BoundaryCondition::Natural).unwrap();

        assert!(spline.interpolate(2.0).is_ok());
        assert!(matches!(spline.interpolate(2.5), Err(InterpolationError::OutOfRange { .. })));
    }

    #[test]
    fn smooth_function_beats_linear() {
        let true_function = |x: f64| (std::f64::consts::FRAC_PI_2 * x).sin() + x / 2.0;
        let samples = SampleSet::from_fn((0..=10).map(f64::from).collect(), true_function).unwrap();
        let spline = CubicSpline::new(samples.clone(), BoundaryCondition::NotAKnot).unwrap();

        let x_fine: Vec<f64> = (0..=100).map(|i| i as f64 / 10.0).collect();
        let linear_values = linear::evaluate(&samples, &x_fine);
        let cubic_values = spline.batch_evaluate(&x_fine);

        let max_error = |values: &[f64]| {
            values.iter()
                .zip(&x_fine)
                .map(|(v, x)| (v - true_function(*x)).abs())
                .fold(0.0, f64::max)
        };
        assert!(max_error(&cubic_values) < max_error(&linear_values));
    }
}

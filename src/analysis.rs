//! Helpers for comparing interpolants against known functions.

use crate::error::InterpolationError;

fn check_same_len(left: &[f64], right: &[f64]) -> Result<(), InterpolationError> {
    if left.len() != right.len() {
        return Err(InterpolationError::LengthMismatch { left: left.len(), right: right.len() });
    }
    Ok(())
}

/// `(approx - truth) / truth` element-wise.
///
/// Where `truth` is zero the error is `0.0` if `approx` matches exactly and `NaN` otherwise.
/// ```
/// use piecewise_interp::analysis::relative_error;
///
/// let error = relative_error(&[0.0, 2.2, 1.0], &[0.0, 2.0, 0.0]).unwrap();
/// assert_eq!(error[0], 0.0);
/// assert!((error[1] - 0.1).abs() < 1e-12);
/// assert!(error[2].is_nan());
/// ```
pub fn relative_error(approx: &[f64], truth: &[f64]) -> Result<Vec<f64>, InterpolationError> {
    check_same_len(approx, truth)?;
    Ok(approx.iter()
        .zip(truth)
        .map(|(a, t)| {
            if *t != 0.0 {
                (a - t) / t
            } else if a == t {
                0.0
            } else {
                f64::NAN
            }
        })
        .collect())
}

/// Largest absolute value, NaN entries are skipped.
pub fn max_abs(values: &[f64]) -> Option<f64> {
    values.iter()
        .filter(|v| !v.is_nan())
        .map(|v| v.abs())
        .reduce(f64::max)
}

/// Numerical derivative of `values` sampled on `grid`.
///
/// Interior points use second order central differences valid for uneven spacing,
/// the two ends use one sided first order differences.
/// # Errors
/// Lengths must match and at least 2 points are needed.
pub fn gradient(values: &[f64], grid: &[f64]) -> Result<Vec<f64>, InterpolationError> {
    check_same_len(values, grid)?;
    let size = values.len();
    if size < 2 {
        return Err(InterpolationError::TooFewValues { got: size, need: 2 });
    }

    let mut result = Vec::with_capacity(size);
    result.push((values[1] - values[0]) / (grid[1] - grid[0]));
    for i in 1..size - 1 {
        let h_prev = grid[i] - grid[i - 1];
        let h_next = grid[i + 1] - grid[i];
        result.push(
            (h_prev.powi(2) * values[i + 1] + (h_next.powi(2) - h_prev.powi(2)) * values[i]
                - h_next.powi(2) * values[i - 1])
                / (h_prev * h_next * (h_prev + h_next)),
        );
    }
    result.push((values[size - 1] - values[size - 2]) / (grid[size - 1] - grid[size - 2]));
    Ok(result)
}

/// Kinetic plus potential energy `m v^2 / 2 + k x^2 / 2` of a harmonic oscillator.
pub fn mechanical_energy(
    positions: &[f64],
    velocities: &[f64],
    mass: f64,
    stiffness: f64,
) -> Result<Vec<f64>, InterpolationError> {
    check_same_len(positions, velocities)?;
    Ok(positions.iter()
        .zip(velocities)
        .map(|(x, v)| 0.5 * mass * v.powi(2) + 0.5 * stiffness * x.powi(2))
        .collect())
}

use crate::sample::SampleSet;

/// `num` evenly spaced values over `[start, stop]`, both ends included.
/// # Example
/// ```
/// use piecewise_interp::grid::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// assert!(linspace(0.0, 1.0, 0).is_empty());
/// assert_eq!(linspace(2.0, 3.0, 1), vec![2.0]);
/// ```
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    match num {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            let mut values: Vec<f64> = (0..num).map(|i| start + step * i as f64).collect();
            values[num - 1] = stop;
            values
        }
    }
}

/// Upper bound on the number of points [arange] produces.
pub const MAX_ARANGE_POINTS: usize = 1 << 26;

/// Values `start, start + step, ...` below `stop`.
///
/// Empty when `step` is not positive, the interval is empty, or the point
/// count is not finite or above [MAX_ARANGE_POINTS].
pub fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !(stop > start) {
        return Vec::new();
    }
    let num = ((stop - start) / step).ceil();
    if !num.is_finite() || num > MAX_ARANGE_POINTS as f64 {
        return Vec::new();
    }
    (0..num as usize).map(|i| start + step * i as f64).collect()
}

/// Evenly spaced grid over the sample range with `factor` times as many points as samples.
pub fn refine(samples: &SampleSet, factor: usize) -> Vec<f64> {
    let (min_x, max_x) = samples.x_range();
    linspace(min_x, max_x, samples.len() * factor)
}

use crate::{error::InterpolationError, sample::SampleSet};

/// Evaluates the piecewise-linear interpolant of `samples` at every query.
///
/// Inside the sample range values lie on the segment bracketing the query.
/// Outside it the first or last segment is continued with its slope. The
/// result has one value per query, and a query equal to a sample x returns
/// that sample's y exactly.
/// # Example
/// ```
/// use piecewise_interp::{linear, SampleSet};
///
/// let samples = SampleSet::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 4.0]).unwrap();
/// assert_eq!(linear::evaluate(&samples, &[0.5, 2.0, 2.5]), vec![0.5, 4.0, 5.5]);
/// ```
pub fn evaluate(samples: &SampleSet, queries: &[f64]) -> Vec<f64> {
    queries.iter().map(|x| evaluate_at(samples, *x)).collect()
}

/// Same as [evaluate] but takes raw coordinates, which are validated first.
/// # Errors
/// Returns [InterpolationError::InvalidSampleSet] when `xs` and `ys` do not form a valid [SampleSet].
/// ```
/// use piecewise_interp::linear;
///
/// assert!(linear::evaluate_slices(&[1.0], &[2.0], &[1.0]).is_err());
/// ```
pub fn evaluate_slices(xs: &[f64], ys: &[f64], queries: &[f64]) -> Result<Vec<f64>, InterpolationError> {
    let samples = SampleSet::new(xs.to_vec(), ys.to_vec())?;
    Ok(evaluate(&samples, queries))
}

fn evaluate_at(samples: &SampleSet, x: f64) -> f64 {
    let (min_x, max_x) = samples.x_range();
    if x < min_x {
        let (x0, x1, y0, y1) = samples.segment(0);
        extend(y0, slope(x0, x1, y0, y1), x - x0)
    } else if x > max_x {
        let (x0, x1, y0, y1) = samples.segment(samples.len() - 2);
        extend(y1, slope(x0, x1, y0, y1), x - x1)
    } else if let Some(index) = samples.knot_index(x) {
        samples.ys()[index]
    } else {
        evaluate_on_segment(samples, samples.segment_index(x), x)
    }
}

fn evaluate_on_segment(samples: &SampleSet, index: usize, x: f64) -> f64 {
    let (x0, x1, y0, y1) = samples.segment(index);
    y0 + slope(x0, x1, y0, y1) * (x - x0)
}

/// Continues a boundary line by `offset`. A flat line stays at `y` even for infinite offsets.
fn extend(y: f64, slope: f64, offset: f64) -> f64 {
    if slope == 0.0 {
        y
    } else {
        y + slope * offset
    }
}

#[inline]
fn slope(x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    (y1 - y0) / (x1 - x0)
}

/// Owning piecewise-linear interpolant with single, strict and batch evaluation.
/// # Example
/// ```
/// use piecewise_interp::{LinearInterpolator, SampleSet};
///
/// let samples = SampleSet::new(vec![-1.0, 0.0, 1.0], vec![-3.0, -1.0, 1.0]).unwrap();
/// let interpolator = LinearInterpolator::new(samples);
///
/// assert_eq!(interpolator.evaluate(-2.0), -5.0);
/// assert!(interpolator.interpolate(-2.0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    samples: SampleSet,
}

impl LinearInterpolator {
    pub fn new(samples: SampleSet) -> Self {
        LinearInterpolator { samples }
    }

    pub fn samples(&self) -> &SampleSet {
        &self.samples
    }

    /// Interpolates inside the sample range and extrapolates with boundary slopes outside it.
    pub fn evaluate(&self, x: f64) -> f64 {
        evaluate_at(&self.samples, x)
    }

    /// Like [LinearInterpolator::evaluate] but refuses queries outside the sample range.
    pub fn interpolate(&self, x: f64) -> Result<f64, InterpolationError> {
        self.check_in_range(x)?;
        Ok(evaluate_at(&self.samples, x))
    }

    /// Evaluates many queries. The segment of the previous query is tried first,
    /// so sorted queries are resolved without a full search.
    pub fn batch_evaluate(&self, x_vector: &[f64]) -> Vec<f64> {
        let (min_x, max_x) = self.samples.x_range();
        let mut results = Vec::with_capacity(x_vector.len());
        let mut index = 0;

        for x in x_vector {
            if *x < min_x || *x > max_x {
                results.push(evaluate_at(&self.samples, *x));
            } else if let Some(knot) = self.knot_near_hint(index, *x) {
                results.push(self.samples.ys()[knot]);
            } else {
                index = self.find_segment_with_hint(index, *x);
                results.push(evaluate_on_segment(&self.samples, index, *x));
            }
        }
        results
    }

    /// Strict batch form, fails if any query is outside the sample range.
    pub fn batch_interpolate(&self, x_vector: &[f64]) -> Result<Vec<f64>, InterpolationError> {
        for x in x_vector {
            self.check_in_range(*x)?;
        }
        Ok(self.batch_evaluate(x_vector))
    }

    /// Derivative of the interpolant, the slope of the segment used at `x`.
    /// At an interior sample the segment ending there is used.
    pub fn slope(&self, x: f64) -> f64 {
        let (x0, x1, y0, y1) = self.samples.segment(self.samples.segment_index(x));
        slope(x0, x1, y0, y1)
    }

    fn check_in_range(&self, x: f64) -> Result<(), InterpolationError> {
        if self.samples.contains(x) {
            Ok(())
        } else {
            let (min, max) = self.samples.x_range();
            Err(InterpolationError::OutOfRange { x, min, max })
        }
    }

    fn knot_near_hint(&self, index_hint: usize, x: f64) -> Option<usize> {
        let xs = self.samples.xs();
        if xs[index_hint] == x {
            Some(index_hint)
        } else if xs[index_hint + 1] == x {
            Some(index_hint + 1)
        } else if self.samples.is_in_segment(index_hint, x) {
            None
        } else {
            self.samples.knot_index(x)
        }
    }

    fn find_segment_with_hint(&self, index_hint: usize, x: f64) -> usize {
        if self.samples.is_in_segment(index_hint, x) {
            return index_hint;
        }
        let next = index_hint + 1;
        if next < self.samples.len() - 1 && self.samples.is_in_segment(next, x) {
            return next;
        }
        self.samples.segment_index(x)
    }
}

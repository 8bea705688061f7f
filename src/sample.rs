use crate::error::{InterpolationError, SampleSetError};

/// Known data point used as interpolation input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    pub fn new(x: f64, y: f64) -> Self {
        Sample { x, y }
    }
}

/// Ordered samples with strictly increasing, finite x values. There are always at least 2.
///
/// The set is validated once on construction and cannot be changed afterwards.
/// # Example
/// ```
/// use piecewise_interp::SampleSet;
///
/// let samples = SampleSet::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 4.0]);
/// assert!(samples.is_ok());
/// ```
/// # Errors
/// Fewer than 2 samples, mismatched lengths, non-finite values and x values
/// which do not strictly increase are rejected.
/// ```
/// use piecewise_interp::SampleSet;
///
/// assert!(SampleSet::new(vec![1.0], vec![2.0]).is_err());
/// assert!(SampleSet::new(vec![0.0, 2.0, 1.0], vec![0.0, 1.0, 2.0]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl SampleSet {
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> Result<Self, InterpolationError> {
        validate(&xs, &ys)?;
        Ok(SampleSet { xs, ys })
    }

    pub fn from_samples(samples: Vec<Sample>) -> Result<Self, InterpolationError> {
        let (xs, ys): (Vec<f64>, Vec<f64>) = samples.into_iter().map(|s| (s.x, s.y)).unzip();
        Self::new(xs, ys)
    }

    /// Samples function `f` at every value of `xs`.
    /// ```
    /// use piecewise_interp::SampleSet;
    ///
    /// let samples = SampleSet::from_fn(vec![0.0, 1.0, 2.0], |x| x * x).unwrap();
    /// assert_eq!(samples.ys(), &[0.0, 1.0, 4.0]);
    /// ```
    pub fn from_fn<F>(xs: Vec<f64>, f: F) -> Result<Self, InterpolationError>
    where
        F: Fn(f64) -> f64,
    {
        let ys = xs.iter().map(|x| f(*x)).collect();
        Self::new(xs, ys)
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Always `false`, a valid set holds at least 2 samples.
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    pub fn sample(&self, index: usize) -> Option<Sample> {
        Some(Sample::new(*self.xs.get(index)?, *self.ys.get(index)?))
    }

    pub fn first(&self) -> Sample {
        Sample::new(self.xs[0], self.ys[0])
    }

    pub fn last(&self) -> Sample {
        let last = self.len() - 1;
        Sample::new(self.xs[last], self.ys[last])
    }

    /// `(min_x, max_x)` of the samples.
    pub fn x_range(&self) -> (f64, f64) {
        (self.xs[0], self.xs[self.len() - 1])
    }

    pub fn contains(&self, x: f64) -> bool {
        let (min, max) = self.x_range();
        min <= x && x <= max
    }

    /// Index of the segment `[x[i], x[i+1]]` used for `x`.
    ///
    /// It is the binary search insertion point minus one, clamped into
    /// `[0, n-2]`. Queries outside the range map to the boundary segments.
    pub fn segment_index(&self, x: f64) -> usize {
        let insertion = self.xs.partition_point(|xi| *xi < x);
        insertion.saturating_sub(1).min(self.len() - 2)
    }

    /// Index of the sample whose x is exactly `x`, if any.
    pub fn knot_index(&self, x: f64) -> Option<usize> {
        let insertion = self.xs.partition_point(|xi| *xi < x);
        match self.xs.get(insertion) {
            Some(xi) if *xi == x => Some(insertion),
            _ => None,
        }
    }

    pub(crate) fn is_in_segment(&self, segment: usize, x: f64) -> bool {
        self.xs[segment] <= x && x <= self.xs[segment + 1]
    }

    /// `(x0, x1, y0, y1)` of segment `index`.
    pub(crate) fn segment(&self, index: usize) -> (f64, f64, f64, f64) {
        (self.xs[index], self.xs[index + 1], self.ys[index], self.ys[index + 1])
    }

    pub(crate) fn check_min_len(&self, need: usize) -> Result<(), SampleSetError> {
        if self.len() < need {
            return Err(SampleSetError::TooFewSamples { got: self.len(), need });
        }
        Ok(())
    }
}

fn validate(xs: &[f64], ys: &[f64]) -> Result<(), SampleSetError> {
    if xs.len() != ys.len() {
        return Err(SampleSetError::LengthMismatch { x_len: xs.len(), y_len: ys.len() });
    }
    if xs.len() < 2 {
        return Err(SampleSetError::TooFewSamples { got: xs.len(), need: 2 });
    }
    if let Some(index) = xs.iter().zip(ys).position(|(x, y)| !x.is_finite() || !y.is_finite()) {
        return Err(SampleSetError::NonFinite { index });
    }
    if let Some(index) = xs.windows(2).position(|w| w[1] <= w[0]) {
        return Err(SampleSetError::NonIncreasing { index: index + 1 });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn invalid_reason(result: Result<SampleSet, InterpolationError>) -> SampleSetError {
        match result {
            Err(InterpolationError::InvalidSampleSet(reason)) => reason,
            other => panic!("expected invalid sample set, got {:?}", other),
        }
    }

    #[test]
    fn new() {
        let samples = SampleSet::new(vec![-1.0, 0.0, 1.0], vec![-3.0, -1.0, 1.0]).unwrap();

        assert_eq!(3, samples.len());
        assert!(!samples.is_empty());
        assert_eq!((-1.0, 1.0), samples.x_range());
        assert_eq!(Sample::new(-1.0, -3.0), samples.first());
        assert_eq!(Sample::new(1.0, 1.0), samples.last());
        assert_eq!(Some(Sample::new(0.0, -1.0)), samples.sample(1));
        assert_eq!(None, samples.sample(3));
    }

    #[test]
    fn from_samples() {
        let samples = SampleSet::from_samples(vec![Sample::new(0.0, 1.0), Sample::new(2.0, 5.0)]).unwrap();

        assert_eq!(&[0.0, 2.0], samples.xs());
        assert_eq!(&[1.0, 5.0], samples.ys());
    }

    #[test]
    fn too_few_samples() {
        assert_eq!(
            SampleSetError::TooFewSamples { got: 1, need: 2 },
            invalid_reason(SampleSet::new(vec![0.0], vec![1.0]))
        );
        assert_eq!(
            SampleSetError::TooFewSamples { got: 0, need: 2 },
            invalid_reason(SampleSet::new(vec![], vec![]))
        );
    }

    #[test]
    fn length_mismatch() {
        assert_eq!(
            SampleSetError::LengthMismatch { x_len: 3, y_len: 2 },
            invalid_reason(SampleSet::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0]))
        );
    }

    #[test]
    fn non_increasing() {
        assert_eq!(
            SampleSetError::NonIncreasing { index: 2 },
            invalid_reason(SampleSet::new(vec![0.0, 1.0, 1.0], vec![0.0, 1.0, 2.0]))
        );
        assert_eq!(
            SampleSetError::NonIncreasing { index: 1 },
            invalid_reason(SampleSet::new(vec![3.0, 1.0], vec![0.0, 1.0]))
        );
    }

    #[test]
    fn non_finite() {
        assert_eq!(
            SampleSetError::NonFinite { index: 1 },
            invalid_reason(SampleSet::new(vec![0.0, f64::NAN, 2.0], vec![0.0, 1.0, 2.0]))
        );
        assert_eq!(
            SampleSetError::NonFinite { index: 0 },
            invalid_reason(SampleSet::new(vec![0.0, 1.0], vec![f64::INFINITY, 1.0]))
        );
    }

    #[test]
    fn segment_index() {
        let samples = SampleSet::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0; 4]).unwrap();

        assert_eq!(0, samples.segment_index(-5.0));
        assert_eq!(0, samples.segment_index(0.0));
        assert_eq!(0, samples.segment_index(0.5));
        // exact interior knot resolves to the segment ending at it
        assert_eq!(0, samples.segment_index(1.0));
        assert_eq!(1, samples.segment_index(1.5));
        assert_eq!(2, samples.segment_index(2.5));
        assert_eq!(2, samples.segment_index(3.0));
        assert_eq!(2, samples.segment_index(10.0));
    }

    #[test]
    fn knot_index() {
        let samples = SampleSet::new(vec![-1.0, 0.0, 3.5], vec![0.0; 3]).unwrap();

        assert_eq!(Some(0), samples.knot_index(-1.0));
        assert_eq!(Some(1), samples.knot_index(-0.0));
        assert_eq!(Some(2), samples.knot_index(3.5));
        assert_eq!(None, samples.knot_index(0.5));
        assert_eq!(None, samples.knot_index(4.0));
        assert_eq!(None, samples.knot_index(f64::NAN));
    }
}

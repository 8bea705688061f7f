use thiserror::Error;

/// Reasons a set of samples cannot be interpolated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SampleSetError {
    #[error("at least {need} samples are required, got {got}")]
    TooFewSamples { got: usize, need: usize },

    #[error("x has {x_len} values while y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },

    #[error("non-finite coordinate at sample {index}")]
    NonFinite { index: usize },

    #[error("x values must be strictly increasing, violated at sample {index}")]
    NonIncreasing { index: usize },
}

#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("invalid sample set: {0}")]
    InvalidSampleSet(#[from] SampleSetError),

    #[error("x = {x} is out of range [{min}, {max}]")]
    OutOfRange { x: f64, min: f64, max: f64 },

    #[error("spline equation system is singular")]
    SingularSystem,

    #[error("input lengths differ: {left} and {right}")]
    LengthMismatch { left: usize, right: usize },

    #[error("at least {need} values are required, got {got}")]
    TooFewValues { got: usize, need: usize },

    #[error("table has no '{0}' column")]
    MissingColumn(String),

    #[error("cannot parse '{value}' as a number on line {line}")]
    Parse { line: usize, value: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

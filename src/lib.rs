//! Piecewise-linear interpolation of 1-D samples with extrapolation along the boundary segments,
//! plus a cubic spline and a few helpers for comparing the two.
//!
//! # Example
//! ```
//! use piecewise_interp::{linear, BoundaryCondition, CubicSpline, SampleSet};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let samples = SampleSet::new(
//!     vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0],
//!     vec![-1.0, 1.0, 2.0, 3.0, 1.0, 4.0]
//! ).unwrap();
//!
//! assert_eq!(linear::evaluate(&samples, &[0.5, 5.0, 6.0]), vec![0.0, 4.0, 7.0]);
//!
//! let spline = CubicSpline::new(samples, BoundaryCondition::NotAKnot).unwrap();
//! assert_approx_eq!(3.0, spline.evaluate(3.0), 1e-12);
//! ```

pub mod analysis;
pub mod dataset;
pub mod grid;
pub mod linear;
mod error;
mod polynomial;
mod sample;
mod spline;

pub use error::{InterpolationError, SampleSetError};
pub use linear::LinearInterpolator;
pub use sample::{Sample, SampleSet};
pub use spline::{BoundaryCondition, CubicSpline};

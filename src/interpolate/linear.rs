//! Piecewise-linear interpolation through a set of anchors.
//!
//! [`LinearInterp`] is the reader side of a sparsified lookup table: given strictly
//! increasing anchors it returns the value of the linear interpolant through the two
//! anchors bracketing a query. Queries outside the anchor range fail with
//! [`InterpolateError::OutOfDomain`] instead of extrapolating.

use crate::interpolate::error::{InterpolateError, InterpolateResult};
use crate::interpolate::segment::lerp;
use numr::dtype::DType;
use numr::error::Error;
use numr::runtime::Runtime;
use numr::tensor::Tensor;

/// Piecewise-linear interpolator that owns its anchors.
///
/// # Example
///
/// ```
/// use sparsr::interpolate::LinearInterp;
///
/// let interp = LinearInterp::new(&[0.0, 1.0, 3.0], &[0.0, 2.0, 6.0]).unwrap();
/// assert!((interp.evaluate(2.0).unwrap() - 4.0).abs() < 1e-12);
/// assert!(interp.evaluate(3.5).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterp {
    /// Anchor x coordinates, strictly increasing.
    x: Vec<f64>,
    /// Anchor y values.
    y: Vec<f64>,
}

impl LinearInterp {
    /// Create an interpolator over `(x, y)` anchors.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - x and y have different lengths
    /// - there are fewer than 2 anchors
    /// - x values are not strictly increasing (NaN counts as out of order)
    pub fn new(x: &[f64], y: &[f64]) -> InterpolateResult<Self> {
        let n = x.len();
        if n != y.len() {
            return Err(InterpolateError::ShapeMismatch {
                expected: n,
                actual: y.len(),
                context: "LinearInterp::new".to_string(),
            });
        }

        if n < 2 {
            return Err(InterpolateError::InsufficientData {
                required: 2,
                actual: n,
                context: "linear interpolation".to_string(),
            });
        }

        ensure_strictly_increasing(x, "LinearInterp::new")?;

        Ok(Self {
            x: x.to_vec(),
            y: y.to_vec(),
        })
    }

    /// Create an interpolator from 1D F64 numr tensors.
    pub fn from_tensors<R: Runtime<DType = DType>>(
        x: &Tensor<R>,
        y: &Tensor<R>,
    ) -> InterpolateResult<Self> {
        if x.shape().len() != 1 || y.shape().len() != 1 {
            return Err(InterpolateError::InvalidParameter {
                parameter: "x, y".to_string(),
                message: "x and y must be 1D tensors".to_string(),
            });
        }
        let x_data = host_f64(x, "LinearInterp::from_tensors")?;
        let y_data = host_f64(y, "LinearInterp::from_tensors")?;
        Self::new(&x_data, &y_data)
    }

    /// Evaluate the interpolant at `xi`.
    ///
    /// # Errors
    ///
    /// Returns [`InterpolateError::OutOfDomain`] if `xi` is outside `[x_min, x_max]` or NaN.
    pub fn evaluate(&self, xi: f64) -> InterpolateResult<f64> {
        let (x_min, x_max) = self.bounds();
        if !(xi >= x_min && xi <= x_max) {
            return Err(InterpolateError::OutOfDomain {
                point: xi,
                min: x_min,
                max: x_max,
                context: "LinearInterp::evaluate".to_string(),
            });
        }

        let idx = self.find_interval(xi);
        Ok(lerp(
            self.x[idx],
            self.y[idx],
            self.x[idx + 1],
            self.y[idx + 1],
            xi,
        ))
    }

    /// Evaluate the interpolant at every point of `x_new`.
    pub fn evaluate_many(&self, x_new: &[f64]) -> InterpolateResult<Vec<f64>> {
        x_new.iter().map(|&xi| self.evaluate(xi)).collect()
    }

    /// Evaluate at the points of a 1D tensor, returning a tensor on the same device.
    pub fn evaluate_tensor<R: Runtime<DType = DType>>(
        &self,
        x_new: &Tensor<R>,
    ) -> InterpolateResult<Tensor<R>> {
        if x_new.shape().len() != 1 {
            return Err(InterpolateError::InvalidParameter {
                parameter: "x_new".to_string(),
                message: "x_new must be a 1D tensor".to_string(),
            });
        }

        let x_new_data = host_f64(x_new, "LinearInterp::evaluate_tensor")?;
        let y_new_data = self.evaluate_many(&x_new_data)?;

        let device = x_new.device();
        Ok(Tensor::from_slice(&y_new_data, &[y_new_data.len()], device)?)
    }

    /// Find the interval index for a given x value.
    /// Returns i such that x[i] <= xi < x[i+1] (or i = n-2 if xi == x[n-1]).
    fn find_interval(&self, xi: f64) -> usize {
        let mut lo = 0;
        let mut hi = self.x.len() - 1;

        while lo < hi - 1 {
            let mid = (lo + hi) / 2;
            if self.x[mid] <= xi {
                lo = mid;
            } else {
                hi = mid;
            }
        }

        lo
    }

    /// Returns the number of anchors.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false: construction requires at least two anchors.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Returns the domain bounds (x_min, x_max).
    pub fn bounds(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    /// Anchor x coordinates.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Anchor y values.
    pub fn y(&self) -> &[f64] {
        &self.y
    }
}

fn host_f64<R: Runtime<DType = DType>>(
    t: &Tensor<R>,
    op: &'static str,
) -> InterpolateResult<Vec<f64>> {
    let dtype = t.dtype();
    if dtype != DType::F64 {
        return Err(Error::UnsupportedDType { dtype, op }.into());
    }
    Ok(t.try_to_vec()?)
}

/// Check that `x` is strictly increasing. NaN anywhere fails the check.
pub(crate) fn ensure_strictly_increasing(x: &[f64], context: &str) -> InterpolateResult<()> {
    if x.windows(2).any(|w| !(w[1] > w[0])) {
        return Err(InterpolateError::NotMonotonic {
            context: context.to_string(),
        });
    }
    Ok(())
}

//! Tolerance audit for a finished retention mask.

use crate::interpolate::LinearInterp;
use crate::sparsify::error::{SparsifyError, SparsifyResult};
use crate::sparsify::mask::RetentionMask;

/// Largest absolute deviation between a dropped sample and the curve through the
/// retained samples.
///
/// Returns 0.0 when the mask drops nothing, and NaN when any dropped sample has a
/// NaN deviation. A result `<= tol` confirms that `mask` honors the tolerance
/// guarantee for `(x, y)`; a NaN result never does.
///
/// # Errors
///
/// - [`SparsifyError::ShapeMismatch`] if `x`, `y` and `mask` differ in length
/// - [`SparsifyError::InvalidParameter`] if the mask drops an endpoint
/// - [`SparsifyError::Interpolation`] if the retained x values are not strictly increasing
pub fn max_deviation(x: &[f64], y: &[f64], mask: &[bool]) -> SparsifyResult<f64> {
    let n = x.len();
    for (len, context) in [(y.len(), "max_deviation (y)"), (mask.len(), "max_deviation (mask)")] {
        if len != n {
            return Err(SparsifyError::ShapeMismatch {
                expected: n,
                actual: len,
                context: context.to_string(),
            });
        }
    }

    let mask = RetentionMask::from_vec(mask.to_vec());
    if !mask.endpoints_retained() {
        return Err(SparsifyError::InvalidParameter {
            parameter: "mask".to_string(),
            message: "first and last samples must be retained".to_string(),
        });
    }
    if mask.retained_count() == n {
        return Ok(0.0);
    }

    let interp = LinearInterp::new(&mask.select(x), &mask.select(y))?;
    let mut worst: f64 = 0.0;
    for i in mask.removed_indices() {
        debug_assert!(mask.lower_anchor(i).is_some() && mask.upper_anchor(i).is_some());
        let deviation = (interp.evaluate(x[i])? - y[i]).abs();
        if deviation.is_nan() {
            return Ok(f64::NAN);
        }
        worst = worst.max(deviation);
    }
    Ok(worst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_removed() {
        let x = [0.0, 1.0, 2.0];
        let y = [0.0, 5.0, 0.0];
        assert_eq!(max_deviation(&x, &y, &[true, true, true]).unwrap(), 0.0);
    }

    #[test]
    fn test_reports_worst_removed_sample() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y = [0.0, 0.5, 0.0, -0.25, 0.0];
        let mask = [true, false, false, false, true];

        let dev = max_deviation(&x, &y, &mask).unwrap();
        assert!((dev - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_nan_deviation_reported() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [f64::INFINITY, 1.0, f64::INFINITY, 0.0];

        let dev = max_deviation(&x, &y, &[true, false, true, true]).unwrap();
        assert!(dev.is_nan());

        let y = [0.0, f64::NAN, 0.0, 0.0];
        let dev = max_deviation(&x, &y, &[true, false, false, true]).unwrap();
        assert!(dev.is_nan());
    }

    #[test]
    fn test_span_overflow_reported() {
        let x = [-1e308, 0.0, 1e308];
        let y = [0.0, 0.0, 10.0];

        let dev = max_deviation(&x, &y, &[true, false, true]).unwrap();
        assert!((dev - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_dropped_endpoint() {
        let x = [0.0, 1.0, 2.0];
        assert!(matches!(
            max_deviation(&x, &x, &[false, true, true]),
            Err(SparsifyError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_rejects_length_mismatch() {
        let x = [0.0, 1.0, 2.0];
        assert!(matches!(
            max_deviation(&x, &x, &[true, true]),
            Err(SparsifyError::ShapeMismatch {
                expected: 3,
                actual: 2,
                ..
            })
        ));
    }
}

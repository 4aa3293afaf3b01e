//! Single-bracket linear interpolation.

use crate::interpolate::error::{InterpolateError, InterpolateResult};

/// Linear interpolant between two anchors `(x0, y0)` and `(x1, y1)`.
///
/// Evaluating a [`LinearSegment`] gives bit-identical results to evaluating a
/// [`LinearInterp`](super::LinearInterp) whose bracket around the query is the
/// same pair of anchors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearSegment {
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
}

impl LinearSegment {
    /// Create a segment. Requires `x0 < x1`.
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> InterpolateResult<Self> {
        if !(x1 > x0) {
            return Err(InterpolateError::NotMonotonic {
                context: "LinearSegment::new".to_string(),
            });
        }
        Ok(Self { x0, y0, x1, y1 })
    }

    /// Evaluate the segment at `xi`, which must lie in `[x0, x1]`.
    pub fn evaluate(&self, xi: f64) -> InterpolateResult<f64> {
        if !(xi >= self.x0 && xi <= self.x1) {
            return Err(InterpolateError::OutOfDomain {
                point: xi,
                min: self.x0,
                max: self.x1,
                context: "LinearSegment::evaluate".to_string(),
            });
        }
        Ok(lerp(self.x0, self.y0, self.x1, self.y1, xi))
    }

    /// Returns the segment bounds (x0, x1).
    pub fn bounds(&self) -> (f64, f64) {
        (self.x0, self.x1)
    }
}

/// y = y0 + (y1 - y0) * (x - x0) / (x1 - x0)
///
/// Spans that overflow `f64` are computed from halved operands, which keeps finite
/// anchors finite. Ordinary spans take the direct formula so results stay exact for
/// exactly linear data.
#[inline]
pub(crate) fn lerp(x0: f64, y0: f64, x1: f64, y1: f64, xi: f64) -> f64 {
    let dx = x1 - x0;
    let t = if dx.is_finite() {
        (xi - x0) / dx
    } else {
        (xi / 2.0 - x0 / 2.0) / (x1 / 2.0 - x0 / 2.0)
    };

    let dy = y1 - y0;
    if dy.is_finite() {
        y0 + t * dy
    } else {
        let half = y1 / 2.0 - y0 / 2.0;
        (y0 + t * half) + t * half
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_endpoints_exact() {
        let seg = LinearSegment::new(1.0, 10.0, 3.0, 30.0).unwrap();
        assert_eq!(seg.evaluate(1.0).unwrap(), 10.0);
        assert_eq!(seg.evaluate(3.0).unwrap(), 30.0);
        assert!((seg.evaluate(2.0).unwrap() - 20.0).abs() < 1e-12);
    }

    #[test]
    fn test_segment_rejects_reversed_anchors() {
        let result = LinearSegment::new(2.0, 0.0, 2.0, 1.0);
        assert!(matches!(result, Err(InterpolateError::NotMonotonic { .. })));

        let result = LinearSegment::new(3.0, 0.0, 1.0, 1.0);
        assert!(matches!(result, Err(InterpolateError::NotMonotonic { .. })));
    }

    #[test]
    fn test_segment_span_overflow() {
        // x1 - x0 overflows to inf
        let seg = LinearSegment::new(-1e308, 0.0, 1e308, 10.0).unwrap();
        assert!((seg.evaluate(0.0).unwrap() - 5.0).abs() < 1e-12);
        assert_eq!(seg.evaluate(1e308).unwrap(), 10.0);

        // y1 - y0 overflows to inf
        let seg = LinearSegment::new(0.0, -1e308, 2.0, 1e308).unwrap();
        assert_eq!(seg.evaluate(1.0).unwrap(), 0.0);
        assert_eq!(seg.evaluate(2.0).unwrap(), 1e308);
        assert!(seg.evaluate(1.5).unwrap().is_finite());
    }

    #[test]
    fn test_segment_infinite_anchors_give_nan() {
        let seg = LinearSegment::new(0.0, f64::INFINITY, 2.0, f64::INFINITY).unwrap();
        assert!(seg.evaluate(1.0).unwrap().is_nan());
    }

    #[test]
    fn test_segment_no_extrapolation() {
        let seg = LinearSegment::new(0.0, 0.0, 1.0, 1.0).unwrap();
        assert!(matches!(
            seg.evaluate(1.5),
            Err(InterpolateError::OutOfDomain { .. })
        ));
        assert!(matches!(
            seg.evaluate(f64::NAN),
            Err(InterpolateError::OutOfDomain { .. })
        ));
    }
}

//! Greedy single-pass sparsification.
//!
//! Interior samples are visited left to right. Each candidate is tentatively
//! dropped, and the drop is kept only if every sample in the gap since the last
//! retained anchor (the candidate included) is still reproduced within tolerance
//! by the widened bracket `[lower, candidate + 1]`. A rejected candidate becomes
//! the new left anchor.
//!
//! Samples to the right of the candidate are never examined early: they are all
//! still retained when the candidate is decided, so `candidate + 1` is always the
//! right anchor.

use std::ops::RangeInclusive;

use crate::interpolate::{
    InterpolateResult, LinearInterp, LinearSegment, ensure_strictly_increasing,
};
use crate::sparsify::error::{SparsifyError, SparsifyResult};
use crate::sparsify::mask::RetentionMask;
use crate::sparsify::types::{BracketStrategy, Sparsified, SparsifyOptions};

/// Sparsify `(x, y)` so that linear interpolation through the retained samples
/// reproduces every dropped sample within `tol`.
///
/// Returns `(retained_x, retained_y, mask)`. Uses [`BracketStrategy::Global`];
/// see [`sparsify_with`] for the configurable form.
///
/// # Example
///
/// ```
/// use sparsr::sparsify::sparsify;
///
/// let x = [0.0, 1.0, 2.0, 3.0, 4.0];
/// let y = [0.0, 1.0, 2.0, 3.0, 4.0];
/// let (xs, ys, mask) = sparsify(&x, &y, 0.01).unwrap();
///
/// assert_eq!(xs, vec![0.0, 4.0]);
/// assert_eq!(ys, vec![0.0, 4.0]);
/// assert_eq!(mask, vec![true, false, false, false, true]);
/// ```
pub fn sparsify(x: &[f64], y: &[f64], tol: f64) -> SparsifyResult<(Vec<f64>, Vec<f64>, Vec<bool>)> {
    sparsify_with(x, y, &SparsifyOptions::with_tolerance(tol)).map(Sparsified::into_parts)
}

/// Sparsify `(x, y)` with explicit options.
///
/// # Preconditions
///
/// x must be strictly increasing. For three or more samples this is checked up
/// front and reported as [`SparsifyError::Interpolation`]; no repair is attempted.
/// With fewer than three samples there is nothing to remove and the input is
/// returned unchanged without inspection.
///
/// # Errors
///
/// - [`SparsifyError::ShapeMismatch`] if `x` and `y` differ in length
/// - [`SparsifyError::InvalidTolerance`] if the tolerance is negative or NaN
/// - [`SparsifyError::Interpolation`] if the evaluator rejects the anchors
pub fn sparsify_with(
    x: &[f64],
    y: &[f64],
    options: &SparsifyOptions,
) -> SparsifyResult<Sparsified> {
    let n = x.len();
    if n != y.len() {
        return Err(SparsifyError::ShapeMismatch {
            expected: n,
            actual: y.len(),
            context: "sparsify".to_string(),
        });
    }
    options.validate()?;

    let mut mask = RetentionMask::new(n);
    if n < 3 {
        return Ok(Sparsified {
            x: x.to_vec(),
            y: y.to_vec(),
            mask: mask.into_vec(),
        });
    }

    ensure_strictly_increasing(x, "sparsify")?;

    let tol = options.tolerance;
    tracing::debug!(
        n,
        tolerance = tol,
        strategy = ?options.strategy,
        "sparsify pass started"
    );

    // Last confirmed anchor left of the candidate.
    let mut lower = 0;
    for i in 1..n - 1 {
        debug_assert_eq!(mask.lower_anchor(i), Some(lower));

        mask.remove(i);
        let upper = i + 1;
        let gap = lower + 1..=i;

        let accepted = match options.strategy {
            BracketStrategy::Global => {
                let interp = LinearInterp::new(&mask.select(x), &mask.select(y))?;
                gap_within_tolerance(|xi| interp.evaluate(xi), x, y, gap, tol)?
            }
            BracketStrategy::Local => {
                let segment = LinearSegment::new(x[lower], y[lower], x[upper], y[upper])?;
                gap_within_tolerance(|xi| segment.evaluate(xi), x, y, gap, tol)?
            }
        };

        if !accepted {
            mask.restore(i);
            tracing::trace!(index = i, lower, "removal rejected");
            lower = i;
        }
    }

    let out = Sparsified {
        x: mask.select(x),
        y: mask.select(y),
        mask: mask.into_vec(),
    };
    tracing::debug!(
        n,
        retained = out.len(),
        removed = out.removed_count(),
        "sparsify pass finished"
    );
    Ok(out)
}

/// True if `|eval(x[j]) - y[j]| <= tol` for every `j` in `gap`. A NaN deviation fails.
fn gap_within_tolerance<F>(
    eval: F,
    x: &[f64],
    y: &[f64],
    gap: RangeInclusive<usize>,
    tol: f64,
) -> InterpolateResult<bool>
where
    F: Fn(f64) -> InterpolateResult<f64>,
{
    for j in gap {
        let deviation = (eval(x[j])? - y[j]).abs();
        if !(deviation <= tol) {
            return Ok(false);
        }
    }
    Ok(true)
}

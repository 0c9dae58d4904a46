//! Piecewise-linear interpolation over borrowed breakpoint slices.

use crate::error::{MathError, MathResult};
use crate::extrapolation::ExtrapolationPolicy;
use crate::interpolation::Segment;

/// Interpolates `x` over the table given by `domain` and `range`.
///
/// `policy` accepts either a full [`ExtrapolationPolicy`] or a single
/// [`ExtrapolationMode`](crate::extrapolation::ExtrapolationMode) applied to
/// both sides. The domain is assumed non-decreasing and is never re-sorted.
///
/// # Errors
///
/// Returns [`MathError::InvalidArgument`] if either slice has fewer than two
/// values or if their lengths differ.
///
/// # Example
///
/// ```rust
/// use linterp_math::extrapolation::{ExtrapolationMode, ExtrapolationPolicy};
/// use linterp_math::interpolation::interpolate;
///
/// let domain = [0.0, 1.0];
/// let range = [2.0, 4.0];
/// let policy = ExtrapolationPolicy::new(ExtrapolationMode::Clamp, ExtrapolationMode::Extend);
///
/// assert_eq!(interpolate(-5.0, &domain, &range, policy).unwrap(), 2.0);
/// assert_eq!(interpolate(0.5, &domain, &range, policy).unwrap(), 3.0);
/// assert_eq!(interpolate(10.0, &domain, &range, policy).unwrap(), 22.0);
/// ```
pub fn interpolate(
    x: f32,
    domain: &[f32],
    range: &[f32],
    policy: impl Into<ExtrapolationPolicy>,
) -> MathResult<f32> {
    validate_table(domain.len(), range.len())?;

    let segment = Segment::select(x, domain, range);
    Ok(segment.evaluate(x, &policy.into()))
}

/// Interpolates `x` with the default policy, extending both sides.
///
/// # Errors
///
/// Same as [`interpolate`].
pub fn interpolate_extended(x: f32, domain: &[f32], range: &[f32]) -> MathResult<f32> {
    interpolate(x, domain, range, ExtrapolationPolicy::default())
}

/// Interpolates `x` over an integer table.
///
/// The breakpoints are widened to `f32` before the regular algorithm runs.
///
/// # Errors
///
/// Same as [`interpolate`].
pub fn interpolate_ints(
    x: f32,
    domain: &[i32],
    range: &[i32],
    policy: impl Into<ExtrapolationPolicy>,
) -> MathResult<f32> {
    validate_table(domain.len(), range.len())?;

    let domain = widen(domain);
    let range = widen(range);
    interpolate(x, &domain, &range, policy)
}

/// Widens integer breakpoints to `f32`.
pub(crate) fn widen(values: &[i32]) -> Vec<f32> {
    values.iter().map(|&v| v as f32).collect()
}

/// Checks the minimum size of both sequences, then their agreement.
pub(crate) fn validate_table(domain_len: usize, range_len: usize) -> MathResult<()> {
    if domain_len < 2 {
        return Err(MathError::insufficient_data("domain", 2, domain_len));
    }
    if range_len < 2 {
        return Err(MathError::insufficient_data("range", 2, range_len));
    }
    if domain_len != range_len {
        return Err(MathError::length_mismatch(domain_len, range_len));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extrapolation::ExtrapolationMode;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_interpolation() {
        let domain = [0.0, 1.0, 2.0];
        let range = [0.0, 2.0, 4.0];

        // Test at exact points
        assert_relative_eq!(interpolate_extended(0.0, &domain, &range).unwrap(), 0.0);
        assert_relative_eq!(interpolate_extended(1.0, &domain, &range).unwrap(), 2.0);
        assert_relative_eq!(interpolate_extended(2.0, &domain, &range).unwrap(), 4.0);

        // Test interpolation
        assert_relative_eq!(interpolate_extended(0.5, &domain, &range).unwrap(), 1.0);
        assert_relative_eq!(interpolate_extended(1.5, &domain, &range).unwrap(), 3.0);
    }

    #[test]
    fn test_clamp_left_extend_right() {
        let domain = [0.0, 1.0];
        let range = [2.0, 4.0];
        let policy = ExtrapolationPolicy::new(ExtrapolationMode::Clamp, ExtrapolationMode::Extend);

        assert_relative_eq!(interpolate(-5.0, &domain, &range, policy).unwrap(), 2.0);
        assert_relative_eq!(interpolate(0.5, &domain, &range, policy).unwrap(), 3.0);
        assert_relative_eq!(interpolate(10.0, &domain, &range, policy).unwrap(), 22.0);
    }

    #[test]
    fn test_peak_table() {
        let domain = [0.0, 1.0, 2.0];
        let range = [0.0, 1.0, 0.0];

        for mode in [
            ExtrapolationMode::Identity,
            ExtrapolationMode::Clamp,
            ExtrapolationMode::Extend,
        ] {
            assert_relative_eq!(interpolate(1.5, &domain, &range, mode).unwrap(), 0.5);
        }
        assert_relative_eq!(
            interpolate(3.0, &domain, &range, ExtrapolationMode::Extend).unwrap(),
            -1.0
        );
        assert_relative_eq!(
            interpolate(3.0, &domain, &range, ExtrapolationMode::Clamp).unwrap(),
            0.0
        );
    }

    #[test]
    fn test_identity_outside_table() {
        let domain = [0.0, 1.0];
        let range = [2.0, 4.0];

        for x in [-7.5, 3.25] {
            assert_eq!(
                interpolate(x, &domain, &range, ExtrapolationMode::Identity).unwrap(),
                x
            );
        }
    }

    #[test]
    fn test_descending_table_clamps_both_sides() {
        // Decreasing domain and range
        let domain = [0.0, -1.0];
        let range = [-2.0, -4.0];
        let policy = ExtrapolationPolicy::new(ExtrapolationMode::Clamp, ExtrapolationMode::Extend);

        assert_relative_eq!(interpolate(-0.5, &domain, &range, policy).unwrap(), -3.0);
        // x > 0 gives value above -2.0: the segment is descending, so this is the left side
        assert_relative_eq!(interpolate(5.0, &domain, &range, policy).unwrap(), -2.0);
        assert_relative_eq!(interpolate(-3.0, &domain, &range, policy).unwrap(), -8.0);
    }

    #[test]
    fn test_integer_table() {
        let policy = ExtrapolationPolicy::new(ExtrapolationMode::Clamp, ExtrapolationMode::Extend);

        assert_relative_eq!(interpolate_ints(-200.0, &[0, 1], &[2, 4], policy).unwrap(), 2.0);
        assert_relative_eq!(interpolate_ints(0.25, &[0, 1], &[2, 4], policy).unwrap(), 2.5);
        assert_relative_eq!(interpolate_ints(199.0, &[0, 1], &[2, 4], policy).unwrap(), 400.0);
    }

    #[test]
    fn test_degenerate_segment() {
        assert_relative_eq!(
            interpolate_extended(1.0, &[1.0, 1.0], &[3.0, 7.0]).unwrap(),
            3.0
        );
        assert_relative_eq!(
            interpolate_extended(5.0, &[0.0, 1.0, 1.0], &[0.0, 3.0, 7.0]).unwrap(),
            3.0
        );
    }

    #[test]
    fn test_insufficient_points() {
        let err = interpolate(0.0, &[1.0], &[2.0], ExtrapolationMode::Extend).unwrap_err();
        assert!(matches!(err, MathError::InvalidArgument { .. }));

        assert!(interpolate_extended(0.0, &[0.0, 1.0], &[2.0]).is_err());
        assert!(interpolate_ints(0.0, &[], &[], ExtrapolationMode::Clamp).is_err());
    }

    #[test]
    fn test_length_mismatch() {
        let err = interpolate_extended(0.0, &[0.0, 1.0, 2.0], &[0.0, 1.0]).unwrap_err();
        assert_eq!(err, MathError::length_mismatch(3, 2));
    }
}

//! Segment selection and evaluation.

use crate::extrapolation::{ExtrapolationPolicy, Side};

/// Direction of a segment's outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// The second output is at least the first.
    Ascending,
    /// The second output is below the first.
    Descending,
}

impl Orientation {
    /// Returns `1.0` for ascending segments and `-1.0` for descending ones.
    ///
    /// Multiplying both sides of a comparison by the sign makes it independent
    /// of the segment direction.
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            Self::Ascending => 1.0,
            Self::Descending => -1.0,
        }
    }
}

/// Two adjacent breakpoints used to answer one query.
///
/// `domain_start`/`domain_end` are consecutive domain values and
/// `range_start`/`range_end` are the outputs at the same indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Domain value of the first breakpoint.
    pub domain_start: f32,
    /// Domain value of the second breakpoint.
    pub domain_end: f32,
    /// Output at the first breakpoint.
    pub range_start: f32,
    /// Output at the second breakpoint.
    pub range_end: f32,
}

impl Segment {
    /// Creates a segment from two breakpoints.
    #[must_use]
    pub const fn new(domain_start: f32, domain_end: f32, range_start: f32, range_end: f32) -> Self {
        Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        }
    }

    /// Segment ending at breakpoint `i` (`1 <= i < len`).
    fn ending_at(domain: &[f32], range: &[f32], i: usize) -> Self {
        Self::new(domain[i - 1], domain[i], range[i - 1], range[i])
    }

    /// Selects the segment for `x` with a left-to-right scan.
    ///
    /// Queries past the last breakpoint use the last segment. Otherwise the
    /// first `i` with `x <= domain[i]` wins. Two-point tables, and scans that
    /// find nothing, fall back to the first segment.
    ///
    /// Both slices must hold at least two values and `range` must be at least
    /// as long as `domain`.
    pub(crate) fn select(x: f32, domain: &[f32], range: &[f32]) -> Self {
        let n = domain.len();
        let mut segment = Self::ending_at(domain, range, 1);

        if n > 2 {
            if x > domain[n - 1] {
                segment = Self::ending_at(domain, range, n - 1);
            } else if let Some(i) = (1..n).find(|&i| x <= domain[i]) {
                segment = Self::ending_at(domain, range, i);
            }
        }

        log::trace!("x={x}: selected {segment:?}");
        segment
    }

    /// Selects the same segment as [`Segment::select`] by binary search.
    ///
    /// Only equivalent when `domain` is non-decreasing.
    pub(crate) fn select_sorted(x: f32, domain: &[f32], range: &[f32]) -> Self {
        let n = domain.len();
        if n > 2 {
            if x > domain[n - 1] {
                return Self::ending_at(domain, range, n - 1);
            }
            let i = 1 + domain[1..].partition_point(|&d| d < x);
            if i < n {
                return Self::ending_at(domain, range, i);
            }
        }
        Self::ending_at(domain, range, 1)
    }

    /// Returns the direction of the segment's outputs.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        if self.range_end >= self.range_start {
            Orientation::Ascending
        } else {
            Orientation::Descending
        }
    }

    /// Returns true if both domain values are equal.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_degenerate(&self) -> bool {
        self.domain_end - self.domain_start == 0.0
    }

    /// Returns the raw value of the segment's line at `x`.
    ///
    /// Degenerate segments have no line and yield `range_start`.
    #[must_use]
    pub fn line_at(&self, x: f32) -> f32 {
        if self.is_degenerate() {
            return self.range_start;
        }
        let progress = (x - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + progress * (self.range_end - self.range_start)
    }

    /// Returns the side whose edge output `value` has passed, if any.
    #[must_use]
    pub fn overshoot(&self, value: f32) -> Option<Side> {
        let sign = self.orientation().sign();
        if sign * value < sign * self.range_start {
            Some(Side::Left)
        } else if sign * value > sign * self.range_end {
            Some(Side::Right)
        } else {
            None
        }
    }

    /// Interpolates `x` on this segment, extrapolating per `policy`.
    #[must_use]
    pub fn evaluate(&self, x: f32, policy: &ExtrapolationPolicy) -> f32 {
        if self.is_degenerate() {
            return self.range_start;
        }

        let value = self.line_at(x);
        match self.overshoot(value) {
            Some(side) => {
                let mode = policy.mode(side);
                log::trace!("x={x}: {side:?} extrapolation with {mode}");
                mode.apply(x, value, self)
            }
            None => value,
        }
    }
}

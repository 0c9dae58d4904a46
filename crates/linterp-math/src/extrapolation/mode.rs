//! Per-side extrapolation behaviour.

use serde::{Deserialize, Serialize};

use crate::interpolation::Segment;

/// How a query outside a segment's output span is resolved.
///
/// # Example
///
/// ```rust
/// use linterp_math::extrapolation::ExtrapolationMode;
///
/// let mode: ExtrapolationMode = "clamp".parse().unwrap();
/// assert_eq!(mode, ExtrapolationMode::Clamp);
/// assert_eq!(ExtrapolationMode::default(), ExtrapolationMode::Extend);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtrapolationMode {
    /// Return the query point itself.
    Identity,
    /// Return the nearest boundary output of the segment.
    Clamp,
    /// Continue the segment's line indefinitely.
    #[default]
    Extend,
}

impl ExtrapolationMode {
    /// Resolves an out-of-span `value` computed for query `x` on `segment`.
    ///
    /// `value` is the raw linear result on the segment's line. `Clamp` picks
    /// whichever edge output `value` has passed, taking the segment's
    /// orientation into account.
    #[must_use]
    pub fn apply(self, x: f32, value: f32, segment: &Segment) -> f32 {
        match self {
            Self::Identity => x,
            Self::Extend => value,
            Self::Clamp => {
                let sign = segment.orientation().sign();
                if sign * value < sign * segment.range_start {
                    segment.range_start
                } else {
                    segment.range_end
                }
            }
        }
    }

    /// Returns the lowercase name used in table files.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Clamp => "clamp",
            Self::Extend => "extend",
        }
    }
}

impl std::fmt::Display for ExtrapolationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ExtrapolationMode {
    type Err = crate::MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "identity" => Ok(Self::Identity),
            "clamp" => Ok(Self::Clamp),
            "extend" => Ok(Self::Extend),
            other => Err(crate::MathError::invalid_argument(format!(
                "unknown extrapolation mode '{other}' (expected identity, clamp or extend)"
            ))),
        }
    }
}

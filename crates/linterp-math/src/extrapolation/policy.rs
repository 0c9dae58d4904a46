//! Two-sided extrapolation policy.

use serde::{Deserialize, Serialize};

use super::ExtrapolationMode;

/// Side of a breakpoint table on which a query falls outside the output span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Before the first output of the segment.
    Left,
    /// Past the second output of the segment.
    Right,
}

/// Independent extrapolation modes for the two sides of a table.
///
/// Missing fields deserialize to [`ExtrapolationMode::Extend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ExtrapolationPolicy {
    /// Mode used left of the table.
    #[serde(default)]
    pub left: ExtrapolationMode,
    /// Mode used right of the table.
    #[serde(default)]
    pub right: ExtrapolationMode,
}

impl ExtrapolationPolicy {
    /// Creates a policy from explicit left and right modes.
    #[must_use]
    pub const fn new(left: ExtrapolationMode, right: ExtrapolationMode) -> Self {
        Self { left, right }
    }

    /// Creates a policy using the same mode on both sides.
    #[must_use]
    pub const fn symmetric(mode: ExtrapolationMode) -> Self {
        Self::new(mode, mode)
    }

    /// Returns the mode configured for `side`.
    #[must_use]
    pub fn mode(&self, side: Side) -> ExtrapolationMode {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Returns a copy with the left mode replaced.
    #[must_use]
    pub fn with_left(mut self, mode: ExtrapolationMode) -> Self {
        self.left = mode;
        self
    }

    /// Returns a copy with the right mode replaced.
    #[must_use]
    pub fn with_right(mut self, mode: ExtrapolationMode) -> Self {
        self.right = mode;
        self
    }
}

impl From<ExtrapolationMode> for ExtrapolationPolicy {
    fn from(mode: ExtrapolationMode) -> Self {
        Self::symmetric(mode)
    }
}

impl std::fmt::Display for ExtrapolationPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "left={}, right={}", self.left, self.right)
    }
}

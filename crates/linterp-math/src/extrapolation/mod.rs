//! Extrapolation policies for breakpoint tables.
//!
//! A query whose linear value falls outside the output span of its segment is
//! handed to an [`ExtrapolationMode`]. Each side of the table has its own mode,
//! bundled together in an [`ExtrapolationPolicy`]:
//!
//! - [`ExtrapolationMode::Identity`]: pass the query through unchanged
//! - [`ExtrapolationMode::Clamp`]: hold the nearest boundary output
//! - [`ExtrapolationMode::Extend`]: continue the bounding segment's slope
//!
//! # Choosing a Mode
//!
//! | Mode | Result outside the table | Typical use |
//! |------|--------------------------|-------------|
//! | Identity | `x` | Pass-through regions of a transfer curve |
//! | Clamp | Boundary output | Saturating lookups |
//! | Extend | Linear continuation | **Default** |
//!
//! # Example
//!
//! ```rust
//! use linterp_math::extrapolation::{ExtrapolationMode, ExtrapolationPolicy};
//!
//! let policy = ExtrapolationPolicy::new(ExtrapolationMode::Clamp, ExtrapolationMode::Extend);
//! assert_eq!(policy.left, ExtrapolationMode::Clamp);
//!
//! // A single mode expands to a symmetric policy.
//! let symmetric: ExtrapolationPolicy = ExtrapolationMode::Identity.into();
//! assert_eq!(symmetric.right, ExtrapolationMode::Identity);
//! ```

mod mode;
mod policy;

pub use mode::ExtrapolationMode;
pub use policy::{ExtrapolationPolicy, Side};

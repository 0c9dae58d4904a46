//! # Linterp Math
//!
//! Piecewise-linear interpolation over breakpoint tables, with independent
//! extrapolation policies for each side of the table.
//!
//! This crate provides:
//!
//! - **Interpolation**: Segment selection and linear evaluation over `f32` tables
//! - **Extrapolation**: Identity, Clamp and Extend modes, configurable per side
//! - **Tables**: An owned, validated [`BreakpointTable`] loadable with serde
//!
//! ## Design Philosophy
//!
//! - **Pure**: Every query is a deterministic function of its inputs
//! - **No Re-sorting**: The domain is taken as given; only its size is checked
//! - **One Algorithm**: Integer tables and single-mode policies are thin adapters
//!
//! ## Example
//!
//! ```rust
//! use linterp_math::prelude::*;
//!
//! let domain = [0.0, 1.0, 2.0];
//! let range = [0.0, 1.0, 0.0];
//!
//! let y = interpolate(3.0, &domain, &range, ExtrapolationMode::Extend).unwrap();
//! assert_eq!(y, -1.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod extrapolation;
pub mod interpolation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::extrapolation::{ExtrapolationMode, ExtrapolationPolicy, Side};
    pub use crate::interpolation::{
        interpolate, interpolate_extended, interpolate_ints, BreakpointTable, Interpolator,
        Segment,
    };
}

pub use error::{MathError, MathResult};
pub use interpolation::BreakpointTable;

//! Random variables driven by a [`UniformSource`](crate::random::UniformSource).
//!
//! - [`DiscreteSampler`]: one-shot weighted selection (cumulative inversion).
//! - [`DiscreteDistribution`]: the same inversion over a validated,
//!   reusable distribution.
//! - [`UniformContinuous`]: affine map of a draw onto `[min, max)`.
//!
//! # References
//!
//! - Devroye (1986), "Non-Uniform Random Variate Generation", ch. III.2
//!   (inversion by sequential search)

mod continuous;
mod discrete;

pub use continuous::UniformContinuous;
pub use discrete::{DiscreteDistribution, DiscreteSampler};

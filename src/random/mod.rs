//! Uniform random sources.
//!
//! Every probabilistic choice in this crate consumes values from a
//! [`UniformSource`]: an explicit, caller-owned producer of reals in `[0, 1)`.
//! There is no process-wide default generator, so a run is reproducible
//! from its source alone.
//!
//! Provided sources:
//!
//! - [`RngSource`]: adapts any [`rand::Rng`] (seed it with [`create_rng`]).
//! - [`ReplaySource`]: replays a fixed sequence, cycling when exhausted.
//! - [`LinearCongruential`] and [`MiddleSquare`]: the classic textbook
//!   generators, useful for hand-checkable runs.

mod generators;

pub use generators::{LinearCongruential, MiddleSquare, MAX_MODULUS};

use crate::error::{AcoError, AcoResult};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces a sequence of reals in `[0, 1)`.
///
/// # Examples
///
/// ```
/// use u_antsys::random::{ReplaySource, UniformSource};
///
/// let mut source = ReplaySource::new(vec![0.25, 0.75]).unwrap();
/// assert_eq!(source.next_uniform(), 0.25);
/// assert_eq!(source.next_uniform(), 0.75);
/// assert_eq!(source.next_uniform(), 0.25);
/// ```
pub trait UniformSource {
    /// Returns the next value in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

impl<S: UniformSource + ?Sized> UniformSource for Box<S> {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

/// Creates a deterministic RNG from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Adapts a [`rand::Rng`] into a [`UniformSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wraps an existing RNG.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Returns the wrapped RNG.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<StdRng> {
    /// Seeded standard RNG, for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(create_rng(seed))
    }

    /// Standard RNG seeded from the thread-local generator.
    pub fn from_entropy() -> Self {
        Self::seeded(rand::random())
    }
}

impl<R: Rng> UniformSource for RngSource<R> {
    fn next_uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed list of values, wrapping around at the end.
///
/// Intended for tests that need to steer every draw.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplaySource {
    values: Vec<f64>,
    position: usize,
}

impl ReplaySource {
    /// Creates a replay source.
    ///
    /// Fails if `values` is empty or any value lies outside `[0, 1)`.
    pub fn new(values: Vec<f64>) -> AcoResult<Self> {
        if values.is_empty() {
            return Err(AcoError::invalid_parameter(
                "values",
                "[]",
                "replay sequence must not be empty",
            ));
        }
        if let Some(&bad) = values.iter().find(|v| !(0.0..1.0).contains(*v)) {
            return Err(AcoError::invalid_parameter(
                "values",
                bad,
                "replayed values must lie in [0, 1)",
            ));
        }
        Ok(Self {
            values,
            position: 0,
        })
    }

    /// Number of values drawn so far (not wrapped).
    pub fn draws(&self) -> usize {
        self.position
    }
}

impl UniformSource for ReplaySource {
    fn next_uniform(&mut self) -> f64 {
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}

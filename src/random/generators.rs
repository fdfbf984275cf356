//! Classic pseudorandom generators.
//!
//! Both generators walk a finite integer state space, so their output is
//! eventually periodic. [`LinearCongruential::sequence`] and
//! [`MiddleSquare::sequence`] return one full pass up to the first
//! repeated state.

use super::UniformSource;
use crate::error::{AcoError, AcoResult};
use std::collections::HashSet;

/// Largest modulus whose states all convert to `f64` exactly.
pub const MAX_MODULUS: u64 = 1 << 53;

/// Linear congruential generator: `x' = (a * x + b) mod m`, emitting `x / m`.
///
/// # Examples
///
/// ```
/// use u_antsys::random::{LinearCongruential, UniformSource};
///
/// let mut lcg = LinearCongruential::mixed(4, 5, 7, 8).unwrap();
/// assert_eq!(lcg.next_uniform(), 0.5);   // 4 / 8
/// assert_eq!(lcg.next_uniform(), 0.375); // 3 / 8
/// assert_eq!(lcg.period(), 8);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearCongruential {
    a: u64,
    b: u64,
    m: u64,
    seed: u64,
    state: u64,
}

impl LinearCongruential {
    /// Mixed generator with increment `b`.
    ///
    /// Requires `0 < m <= 2^53`, `0 < a < m`, `0 <= b < m` and
    /// `0 <= seed < m`. Above `2^53` the state no longer converts to `f64`
    /// exactly and `x / m` can round up to 1.
    pub fn mixed(seed: u64, a: u64, b: u64, m: u64) -> AcoResult<Self> {
        if m == 0 || m > MAX_MODULUS {
            return Err(AcoError::invalid_parameter("m", m, "must satisfy 0 < m <= 2^53"));
        }
        if a == 0 || a >= m {
            return Err(AcoError::invalid_parameter("a", a, "must satisfy 0 < a < m"));
        }
        if b >= m {
            return Err(AcoError::invalid_parameter("b", b, "must satisfy 0 <= b < m"));
        }
        if seed >= m {
            return Err(AcoError::invalid_parameter(
                "seed",
                seed,
                "must satisfy 0 <= seed < m",
            ));
        }
        Ok(Self {
            a,
            b,
            m,
            seed,
            state: seed,
        })
    }

    /// Multiplicative generator (`b = 0`).
    pub fn multiplicative(seed: u64, a: u64, m: u64) -> AcoResult<Self> {
        Self::mixed(seed, a, 0, m)
    }

    /// Multiplier `a`.
    pub fn multiplier(&self) -> u64 {
        self.a
    }

    /// Increment `b` (zero for multiplicative generators).
    pub fn increment(&self) -> u64 {
        self.b
    }

    /// Modulus `m`.
    pub fn modulus(&self) -> u64 {
        self.m
    }

    fn step(&self, x: u64) -> u64 {
        ((u128::from(self.a) * u128::from(x) + u128::from(self.b)) % u128::from(self.m)) as u64
    }

    /// Integer states from the seed up to (excluding) the first repeat.
    ///
    /// Memory grows with the period, which is at most `m`.
    pub fn states(&self) -> Vec<u64> {
        collect_until_repeat(self.seed, |x| self.step(x))
    }

    /// Emitted values from the seed up to the first repeat.
    pub fn sequence(&self) -> Vec<f64> {
        let m = self.m as f64;
        self.states().into_iter().map(|x| x as f64 / m).collect()
    }

    /// Length of [`sequence`](Self::sequence).
    pub fn period(&self) -> usize {
        self.states().len()
    }

    /// Rewinds to the seed.
    pub fn reset(&mut self) {
        self.state = self.seed;
    }
}

impl UniformSource for LinearCongruential {
    fn next_uniform(&mut self) -> f64 {
        let value = self.state as f64 / self.m as f64;
        self.state = self.step(self.state);
        value
    }
}

/// Von Neumann's middle-square generator with `k` digits, emitting `x / 10^k`.
///
/// The square is right-padded with zeros until it has at least `k` digits
/// and the same digit parity as `k`, then the middle `k` digits become the
/// next state. Each step squares the state once: `x' = mid_k(x^2)`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiddleSquare {
    digits: u32,
    seed: u64,
    state: u64,
}

/// Largest supported `k`; keeps the padded square within `u128`.
const MAX_DIGITS: u32 = 18;

impl MiddleSquare {
    /// Creates a generator with `k` digits.
    ///
    /// Requires `1 <= k <= 18` and `0 < seed < 10^k`.
    pub fn new(k: u32, seed: u64) -> AcoResult<Self> {
        if k == 0 || k > MAX_DIGITS {
            return Err(AcoError::invalid_parameter(
                "k",
                k,
                "must satisfy 1 <= k <= 18",
            ));
        }
        if seed == 0 {
            return Err(AcoError::invalid_parameter("seed", seed, "must be > 0"));
        }
        if seed >= 10u64.pow(k) {
            return Err(AcoError::invalid_parameter(
                "seed",
                seed,
                "must have at most k digits",
            ));
        }
        Ok(Self {
            digits: k,
            seed,
            state: seed,
        })
    }

    /// Number of digits `k`.
    pub fn digits(&self) -> u32 {
        self.digits
    }

    fn step(&self, x: u64) -> u64 {
        let k = self.digits;
        let mut square = u128::from(x) * u128::from(x);
        let mut len = decimal_len(square);
        while len < k || len % 2 != k % 2 {
            square *= 10;
            len += 1;
        }
        let start = (len - k) / 2;
        let dropped = len - start - k;
        ((square / 10u128.pow(dropped)) % 10u128.pow(k)) as u64
    }

    /// Integer states from the seed up to (excluding) the first repeat.
    pub fn states(&self) -> Vec<u64> {
        collect_until_repeat(self.seed, |x| self.step(x))
    }

    /// Emitted values from the seed up to the first repeat.
    pub fn sequence(&self) -> Vec<f64> {
        let scale = 10u64.pow(self.digits) as f64;
        self.states().into_iter().map(|x| x as f64 / scale).collect()
    }

    /// Length of [`sequence`](Self::sequence).
    pub fn period(&self) -> usize {
        self.states().len()
    }

    /// Rewinds to the seed.
    pub fn reset(&mut self) {
        self.state = self.seed;
    }
}

impl UniformSource for MiddleSquare {
    fn next_uniform(&mut self) -> f64 {
        let value = self.state as f64 / 10u64.pow(self.digits) as f64;
        self.state = self.step(self.state);
        value
    }
}

fn decimal_len(mut n: u128) -> u32 {
    let mut len = 1;
    while n >= 10 {
        n /= 10;
        len += 1;
    }
    len
}

fn collect_until_repeat(seed: u64, step: impl Fn(u64) -> u64) -> Vec<u64> {
    let mut seen = HashSet::new();
    let mut states = Vec::new();
    let mut x = seed;
    while seen.insert(x) {
        states.push(x);
        x = step(x);
    }
    states
}

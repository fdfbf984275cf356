//! Discrete weighted sampling by cumulative-probability inversion.

use crate::error::{AcoError, AcoResult};
use crate::random::UniformSource;

/// Stateless weighted selector.
///
/// Each call validates the weights, normalizes them into cumulative
/// probabilities, consumes exactly one draw `u` from the source and
/// returns the first value whose cumulative probability reaches `u`.
///
/// If rounding leaves every cumulative probability below `u`, the last
/// value with a positive weight is returned.
///
/// # Examples
///
/// ```
/// use u_antsys::random::ReplaySource;
/// use u_antsys::sampling::DiscreteSampler;
///
/// let mut source = ReplaySource::new(vec![0.9]).unwrap();
/// let picked = DiscreteSampler::select(&["a", "b", "c"], &[1.0, 1.0, 2.0], &mut source);
/// assert_eq!(picked, Ok("c"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscreteSampler;

impl DiscreteSampler {
    /// Selects one of `values` with probability proportional to `weights`.
    ///
    /// # Errors
    ///
    /// [`AcoError::InvalidDistribution`] if the lengths differ, the input is
    /// empty, any weight is negative or non-finite, or the weights sum to
    /// zero. No draw is consumed in that case.
    pub fn select<T: Clone, S: UniformSource + ?Sized>(
        values: &[T],
        weights: &[f64],
        source: &mut S,
    ) -> AcoResult<T> {
        if values.len() != weights.len() {
            return Err(AcoError::invalid_distribution(format!(
                "{} values but {} weights",
                values.len(),
                weights.len()
            )));
        }
        let index = Self::select_index(weights, source)?;
        Ok(values[index].clone())
    }

    /// Selects an index into `weights` with probability proportional to its weight.
    pub fn select_index<S: UniformSource + ?Sized>(
        weights: &[f64],
        source: &mut S,
    ) -> AcoResult<usize> {
        let cumulative = cumulative_probabilities(weights)?;
        Ok(invert(&cumulative, weights, source.next_uniform()))
    }

    /// Selects one of `values` with equal probability `1 / len`.
    pub fn select_uniform<T: Clone, S: UniformSource + ?Sized>(
        values: &[T],
        source: &mut S,
    ) -> AcoResult<T> {
        if values.is_empty() {
            return Err(AcoError::invalid_distribution("no values to select from"));
        }
        let weight = 1.0 / values.len() as f64;
        let weights = vec![weight; values.len()];
        Self::select(values, &weights, source)
    }
}

/// A validated discrete distribution that can be sampled repeatedly.
///
/// # Examples
///
/// ```
/// use u_antsys::random::RngSource;
/// use u_antsys::sampling::DiscreteDistribution;
///
/// let dist = DiscreteDistribution::new(vec!['x', 'y'], &[3.0, 1.0]).unwrap();
/// assert!((dist.probability(0) - 0.75).abs() < 1e-12);
///
/// let mut source = RngSource::seeded(1);
/// let v = dist.sample(&mut source);
/// assert!(*v == 'x' || *v == 'y');
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DiscreteDistribution<T> {
    values: Vec<T>,
    weights: Vec<f64>,
    cumulative: Vec<f64>,
}

impl<T> DiscreteDistribution<T> {
    /// Builds a distribution from values and nonnegative weights.
    pub fn new(values: Vec<T>, weights: &[f64]) -> AcoResult<Self> {
        if values.len() != weights.len() {
            return Err(AcoError::invalid_distribution(format!(
                "{} values but {} weights",
                values.len(),
                weights.len()
            )));
        }
        let cumulative = cumulative_probabilities(weights)?;
        Ok(Self {
            values,
            weights: weights.to_vec(),
            cumulative,
        })
    }

    /// Builds a distribution assigning `1 / len` to every value.
    pub fn uniform(values: Vec<T>) -> AcoResult<Self> {
        let weights = vec![1.0; values.len()];
        Self::new(values, &weights)
    }

    /// Draws one value, consuming exactly one uniform.
    pub fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> &T {
        let index = invert(&self.cumulative, &self.weights, source.next_uniform());
        &self.values[index]
    }

    /// Normalized probability of the value at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn probability(&self, index: usize) -> f64 {
        let previous = if index == 0 {
            0.0
        } else {
            self.cumulative[index - 1]
        };
        self.cumulative[index] - previous
    }

    /// The values, in input order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; empty distributions cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Validates weights and returns their running normalized sums.
fn cumulative_probabilities(weights: &[f64]) -> AcoResult<Vec<f64>> {
    if weights.is_empty() {
        return Err(AcoError::invalid_distribution("no values to select from"));
    }
    if let Some((i, w)) = weights
        .iter()
        .enumerate()
        .find(|(_, w)| !w.is_finite() || **w < 0.0)
    {
        return Err(AcoError::invalid_distribution(format!(
            "weight {i} is {w}, expected a finite value >= 0"
        )));
    }

    let total: f64 = weights.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        return Err(AcoError::invalid_distribution(format!(
            "weights sum to {total}"
        )));
    }

    let mut running = 0.0;
    Ok(weights
        .iter()
        .map(|w| {
            running += w / total;
            running
        })
        .collect())
}

/// First positive-weight index whose cumulative probability is `>= u`.
///
/// Falls back to the last positive-weight index when rounding keeps the
/// final cumulative value below `u`.
fn invert(cumulative: &[f64], weights: &[f64], u: f64) -> usize {
    for (i, (&c, &w)) in cumulative.iter().zip(weights).enumerate() {
        if w > 0.0 && c >= u {
            return i;
        }
    }
    weights
        .iter()
        .rposition(|&w| w > 0.0)
        .unwrap_or(weights.len() - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ReplaySource, RngSource};
    use proptest::prelude::*;

    #[test]
    fn test_select_by_cumulative_inversion() {
        let values = [10, 20, 30];
        let weights = [1.0, 2.0, 1.0];
        // cumulative: 0.25, 0.75, 1.0
        let mut source = ReplaySource::new(vec![0.0, 0.25, 0.26, 0.75, 0.99]).expect("valid");
        let picks: Vec<i32> = (0..5)
            .map(|_| DiscreteSampler::select(&values, &weights, &mut source).expect("valid"))
            .collect();
        assert_eq!(picks, vec![10, 10, 20, 20, 30]);
    }

    #[test]
    fn test_rounding_falls_back_to_last() {
        // Final cumulative value short of 1.0, as rounding can leave it
        let cumulative = [0.3, 0.6, 0.999_999_9];
        let weights = [1.0, 1.0, 1.0];
        assert_eq!(invert(&cumulative, &weights, 0.999_999_99), 2);
    }

    #[test]
    fn test_fallback_skips_trailing_zero_weight() {
        let cumulative = [0.5, 0.999_999, 0.999_999];
        let weights = [1.0, 1.0, 0.0];
        assert_eq!(invert(&cumulative, &weights, 0.999_999_9), 1);
    }

    #[test]
    fn test_zero_weight_never_selected() {
        let values = ['a', 'b', 'c'];
        let weights = [0.0, 1.0, 0.0];
        let mut source = ReplaySource::new(vec![0.0, 0.5, 0.999]).expect("valid");
        for _ in 0..3 {
            assert_eq!(
                DiscreteSampler::select(&values, &weights, &mut source),
                Ok('b')
            );
        }
    }

    #[test]
    fn test_all_zero_weights_rejected_without_draw() {
        let mut source = ReplaySource::new(vec![0.5]).expect("valid");
        let result = DiscreteSampler::select(&[1, 2, 3], &[0.0, 0.0, 0.0], &mut source);
        assert!(matches!(result, Err(AcoError::InvalidDistribution { .. })));
        assert_eq!(source.draws(), 0);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let mut source = RngSource::seeded(1);
        let result = DiscreteSampler::select(&[1, 2], &[1.0], &mut source);
        assert!(matches!(result, Err(AcoError::InvalidDistribution { .. })));
    }

    #[test]
    fn test_empty_rejected() {
        let mut source = RngSource::seeded(1);
        let empty: [u8; 0] = [];
        assert!(DiscreteSampler::select(&empty, &[], &mut source).is_err());
        assert!(DiscreteSampler::select_uniform(&empty, &mut source).is_err());
    }

    #[test]
    fn test_negative_and_nan_weights_rejected() {
        let mut source = RngSource::seeded(1);
        assert!(DiscreteSampler::select(&[1, 2], &[1.0, -0.5], &mut source).is_err());
        assert!(DiscreteSampler::select(&[1, 2], &[1.0, f64::NAN], &mut source).is_err());
        assert!(DiscreteSampler::select(&[1, 2], &[1.0, f64::INFINITY], &mut source).is_err());
    }

    #[test]
    fn test_single_value() {
        let mut source = RngSource::seeded(3);
        for _ in 0..10 {
            assert_eq!(DiscreteSampler::select(&["only"], &[0.2], &mut source), Ok("only"));
        }
    }

    #[test]
    fn test_uniform_frequencies() {
        let values = [0usize, 1, 2, 3];
        let mut source = RngSource::seeded(42);
        let mut counts = [0u32; 4];
        let n = 20_000;
        for _ in 0..n {
            let v = DiscreteSampler::select_uniform(&values, &mut source).expect("valid");
            counts[v] += 1;
        }
        for &c in &counts {
            let freq = c as f64 / n as f64;
            assert!((freq - 0.25).abs() < 0.02, "expected ~0.25, got {counts:?}");
        }
    }

    #[test]
    fn test_weighted_frequencies_converge() {
        let dist = DiscreteDistribution::new(vec![0usize, 1, 2], &[1.0, 3.0, 6.0]).expect("valid");
        let mut source = RngSource::seeded(42);
        let mut counts = [0u32; 3];
        let n = 50_000;
        for _ in 0..n {
            counts[*dist.sample(&mut source)] += 1;
        }
        for (i, &expected) in [0.1, 0.3, 0.6].iter().enumerate() {
            let freq = counts[i] as f64 / n as f64;
            assert!(
                (freq - expected).abs() < 0.015,
                "value {i}: expected {expected}, got {freq} ({counts:?})"
            );
        }
    }

    #[test]
    fn test_distribution_probabilities() {
        let dist = DiscreteDistribution::uniform(vec!["a", "b", "c", "d"]).expect("valid");
        assert_eq!(dist.len(), 4);
        for i in 0..4 {
            assert!((dist.probability(i) - 0.25).abs() < 1e-12);
        }
        assert!(DiscreteDistribution::<u8>::uniform(vec![]).is_err());
    }

    proptest! {
        #[test]
        fn prop_select_returns_input_value(
            weights in prop::collection::vec(0.0f64..10.0, 1..16),
            u in 0.0f64..1.0,
        ) {
            prop_assume!(weights.iter().any(|&w| w > 0.0));
            let values: Vec<usize> = (100..100 + weights.len()).collect();
            let mut source = ReplaySource::new(vec![u]).expect("valid");
            let picked = DiscreteSampler::select(&values, &weights, &mut source).expect("valid");
            let index = picked - 100;
            prop_assert!(index < weights.len());
            prop_assert!(weights[index] > 0.0);
            prop_assert_eq!(source.draws(), 1);
        }

        #[test]
        fn prop_cumulative_is_monotone_and_ends_near_one(
            weights in prop::collection::vec(0.0f64..100.0, 1..32),
        ) {
            prop_assume!(weights.iter().sum::<f64>() > 0.0);
            let cumulative = cumulative_probabilities(&weights).expect("valid");
            for pair in cumulative.windows(2) {
                prop_assert!(pair[1] >= pair[0]);
            }
            let last = cumulative[cumulative.len() - 1];
            prop_assert!((last - 1.0).abs() < 1e-9);
        }
    }
}

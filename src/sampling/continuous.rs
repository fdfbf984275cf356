//! Continuous uniform variable over `[min, max)`.

use crate::error::{AcoError, AcoResult};
use crate::random::UniformSource;

/// Maps one uniform draw `u` to `min + (max - min) * u`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformContinuous {
    min: f64,
    max: f64,
}

impl UniformContinuous {
    /// Creates the variable. Both bounds must be finite with `min <= max`.
    pub fn new(min: f64, max: f64) -> AcoResult<Self> {
        if !min.is_finite() {
            return Err(AcoError::invalid_parameter("min", min, "must be finite"));
        }
        if !max.is_finite() || max < min {
            return Err(AcoError::invalid_parameter(
                "max",
                max,
                "must be finite and >= min",
            ));
        }
        Ok(Self { min, max })
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Draws one value.
    pub fn sample<S: UniformSource + ?Sized>(&self, source: &mut S) -> f64 {
        self.min + (self.max - self.min) * source.next_uniform()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ReplaySource, RngSource};

    #[test]
    fn test_maps_draws_linearly() {
        let var = UniformContinuous::new(2.0, 6.0).expect("valid");
        let mut source = ReplaySource::new(vec![0.0, 0.5, 0.75]).expect("valid");
        assert_eq!(var.sample(&mut source), 2.0);
        assert_eq!(var.sample(&mut source), 4.0);
        assert_eq!(var.sample(&mut source), 5.0);
    }

    #[test]
    fn test_samples_stay_in_range() {
        let var = UniformContinuous::new(-3.0, 3.0).expect("valid");
        let mut source = RngSource::seeded(42);
        for _ in 0..1000 {
            let x = var.sample(&mut source);
            assert!((-3.0..3.0).contains(&x), "out of range: {x}");
        }
    }

    #[test]
    fn test_rejects_inverted_bounds() {
        assert!(UniformContinuous::new(1.0, 0.0).is_err());
        assert!(UniformContinuous::new(f64::NAN, 1.0).is_err());
        assert!(UniformContinuous::new(0.0, f64::INFINITY).is_err());
    }
}

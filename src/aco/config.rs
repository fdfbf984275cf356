//! Ant System configuration.

use crate::error::{AcoError, AcoResult};

/// Which pheromone entry a reinforced edge `current -> next` updates.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepositDirection {
    /// Deposit on `[current][next]`, the entry read when an ant at
    /// `current` weighs moving to `next`.
    Traversal,

    /// Deposit on `[next][current]`, the classic rule of this solver.
    ///
    /// For asymmetric instances this reinforces the opposite move from the
    /// one the best ant made.
    #[default]
    Reverse,
}

/// Configuration for the Ant System.
///
/// # Examples
///
/// ```
/// use u_antsys::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_alpha(1.0)
///     .with_beta(2.0)
///     .with_evaporation_rate(0.5)
///     .with_n_ants(5)
///     .with_round_trip(true);
/// assert!(config.validate().is_ok());
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct AcoConfig {
    /// Pheromone exponent `alpha >= 0`.
    pub alpha: f64,

    /// Heuristic (inverse distance) exponent `beta >= 0`.
    pub beta: f64,

    /// Evaporation rate `rho` in `[0, 1]`. Each cycle multiplies every
    /// pheromone entry by `1 - rho`.
    ///
    /// With `rho = 1` only the latest best tour keeps any pheromone, so a
    /// positive `alpha` can leave an ant with all-zero weights, which aborts
    /// the run with an invalid distribution.
    pub evaporation_rate: f64,

    /// Number of ants per cycle.
    pub n_ants: usize,

    /// Whether tour cost includes the closing edge back to the start.
    pub round_trip: bool,

    /// Pheromone entry updated for each reinforced edge.
    pub deposit: DepositDirection,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            beta: 2.0,
            evaporation_rate: 0.5,
            n_ants: 10,
            round_trip: true,
            deposit: DepositDirection::default(),
        }
    }
}

impl AcoConfig {
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_evaporation_rate(mut self, rho: f64) -> Self {
        self.evaporation_rate = rho;
        self
    }

    pub fn with_n_ants(mut self, n: usize) -> Self {
        self.n_ants = n;
        self
    }

    pub fn with_round_trip(mut self, round_trip: bool) -> Self {
        self.round_trip = round_trip;
        self
    }

    pub fn with_deposit(mut self, deposit: DepositDirection) -> Self {
        self.deposit = deposit;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AcoResult<()> {
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(AcoError::invalid_parameter(
                "alpha",
                self.alpha,
                "must be finite and >= 0",
            ));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(AcoError::invalid_parameter(
                "beta",
                self.beta,
                "must be finite and >= 0",
            ));
        }
        if !(0.0..=1.0).contains(&self.evaporation_rate) {
            return Err(AcoError::invalid_parameter(
                "evaporation_rate",
                self.evaporation_rate,
                "must be in [0, 1]",
            ));
        }
        if self.n_ants == 0 {
            return Err(AcoError::invalid_parameter(
                "n_ants",
                self.n_ants,
                "must be >= 1",
            ));
        }
        Ok(())
    }
}

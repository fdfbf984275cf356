//! Ant System tour optimization over pluggable uniform sources.
//!
//! - **Ant System (AS)**: pheromone matrix, per-ant tabu construction,
//!   evaporation and best-only reinforcement over a fixed number of cycles.
//! - **Discrete sampling**: weighted selection by cumulative-probability
//!   inversion; every probabilistic choice of the solver goes through it.
//! - **Uniform sources**: the [`random::UniformSource`] trait plus adapters
//!   for `rand` generators, replayed sequences and the classic congruential
//!   and middle-square generators.
//!
//! # Architecture
//!
//! `aco` depends on `sampling`, which depends only on the
//! `UniformSource` trait. No module reaches for a global RNG, so a run is
//! fully determined by its distance matrix, configuration and source.
//!
//! ```
//! use u_antsys::aco::{AcoConfig, AntSystem, DistanceMatrix};
//! use u_antsys::random::LinearCongruential;
//!
//! let distances = DistanceMatrix::from_rows(vec![
//!     vec![0.0, 3.0, 4.0],
//!     vec![3.0, 0.0, 5.0],
//!     vec![4.0, 5.0, 0.0],
//! ]).unwrap();
//! let source = LinearCongruential::mixed(17, 1103515245, 12345, 2147483648).unwrap();
//!
//! let mut system = AntSystem::new(distances, AcoConfig::default(), source).unwrap();
//! let best = system.run(10, false).unwrap();
//! assert_eq!(best.cost, 12.0);
//! ```

pub mod aco;
pub mod error;
pub mod random;
pub mod sampling;

pub use error::{AcoError, AcoResult};

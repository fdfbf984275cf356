//! Ant System (AS) for minimum-cost tours.
//!
//! A population of ants builds tours city by city, biased by pheromone
//! learned from earlier cycles and by inverse distance. After each cycle
//! the pheromone evaporates and the cycle's best tour reinforces its
//! edges; only that one tour deposits.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents", *IEEE Trans. SMC-B* 26(1), 29-41
//! - Dorigo & Stützle (2004), "Ant Colony Optimization", MIT Press, ch. 3

mod config;
mod matrix;
mod runner;
mod types;

pub use config::{AcoConfig, DepositDirection};
pub use matrix::{DistanceMatrix, PheromoneMatrix};
pub use runner::AntSystem;
pub use types::{AntSystemState, CycleReport, Solution, TabuTable};

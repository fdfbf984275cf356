//! Ant System execution loop.
//!
//! [`AntSystem`] repeats one cycle per iteration:
//! initialize → construct → evaluate → update.
//!
//! 1. **Initialize**: clear the tabu table and place every ant on a start
//!    city drawn uniformly.
//! 2. **Construct**: each ant extends its tour one city at a time, choosing
//!    among unvisited cities `j` with weight `tau(i, j)^alpha * (1 / d(i, j))^beta`.
//! 3. **Evaluate**: the cheapest tour of the cycle becomes the cycle best; it
//!    replaces the global best only when strictly cheaper.
//! 4. **Update**: evaporate every pheromone entry by `1 - rho`, then the
//!    cycle-best tour alone deposits `1 / cost` on each consecutive edge.
//!
//! # Reference
//!
//! Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a Colony
//! of Cooperating Agents", *IEEE Trans. SMC-B* 26(1), 29-41.

use super::config::{AcoConfig, DepositDirection};
use super::matrix::{DistanceMatrix, PheromoneMatrix};
use super::types::{AntSystemState, CycleReport, Solution, TabuTable};
use crate::error::{AcoError, AcoResult};
use crate::random::UniformSource;
use crate::sampling::DiscreteSampler;

/// Ant System solver over a fixed distance matrix.
///
/// The solver owns its uniform source; every placement and city choice
/// consumes exactly one draw from it.
///
/// # Examples
///
/// ```
/// use u_antsys::aco::{AcoConfig, AntSystem, DistanceMatrix};
/// use u_antsys::random::RngSource;
///
/// let distances = DistanceMatrix::from_rows(vec![
///     vec![0.0, 2.0, 9.0, 10.0],
///     vec![1.0, 0.0, 6.0, 4.0],
///     vec![15.0, 7.0, 0.0, 8.0],
///     vec![6.0, 3.0, 12.0, 0.0],
/// ]).unwrap();
/// let config = AcoConfig::default().with_n_ants(5);
///
/// let mut system = AntSystem::new(distances, config, RngSource::seeded(42)).unwrap();
/// let best = system.run(50, false).unwrap();
/// assert_eq!(best.tour.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct AntSystem<S: UniformSource> {
    distances: DistanceMatrix,
    config: AcoConfig,
    pheromone: PheromoneMatrix,
    tabu: TabuTable,
    source: S,
    state: AntSystemState,
    cycle_best: Option<Solution>,
    best: Option<Solution>,
    cost_history: Vec<f64>,
}

impl<S: UniformSource> AntSystem<S> {
    /// Creates a solver.
    ///
    /// # Errors
    ///
    /// - [`AcoError::InvalidParameter`] if the configuration is invalid or
    ///   the matrix has fewer than 2 cities.
    /// - [`AcoError::DegenerateGeometry`] if any off-diagonal distance is
    ///   zero, since its heuristic `1 / d` is undefined.
    pub fn new(distances: DistanceMatrix, config: AcoConfig, source: S) -> AcoResult<Self> {
        config.validate()?;
        let n = distances.size();
        if n < 2 {
            return Err(AcoError::invalid_parameter(
                "distances",
                format!("{n}x{n}"),
                "need at least 2 cities",
            ));
        }
        if let Some((from, to, distance)) = distances.degenerate_edge() {
            return Err(AcoError::DegenerateGeometry { from, to, distance });
        }

        Ok(Self {
            pheromone: PheromoneMatrix::new(n),
            tabu: TabuTable::new(config.n_ants, n),
            distances,
            config,
            source,
            state: AntSystemState::Uninitialized,
            cycle_best: None,
            best: None,
            cost_history: Vec::new(),
        })
    }

    /// Runs `max_cycles` cycles and returns the best tour found.
    ///
    /// With `verbose`, prints one line per cycle with the best cost so far.
    /// Pheromone and the global best carry over into later calls.
    pub fn run(&mut self, max_cycles: usize, verbose: bool) -> AcoResult<Solution> {
        self.run_with_observer(max_cycles, |report| {
            if verbose {
                println!("cycle {}: best cost {}", report.cycle, report.best_cost);
            }
        })
    }

    /// Runs `max_cycles` cycles, passing each cycle's report to `observer`.
    ///
    /// A failing cycle aborts the run: the state becomes
    /// [`AntSystemState::Aborted`], the tabu table keeps the partial cycle
    /// and the global best from earlier cycles is left untouched.
    pub fn run_with_observer<F>(&mut self, max_cycles: usize, mut observer: F) -> AcoResult<Solution>
    where
        F: FnMut(&CycleReport),
    {
        if max_cycles == 0 {
            return Err(AcoError::invalid_parameter(
                "max_cycles",
                max_cycles,
                "must be >= 1",
            ));
        }

        self.state = AntSystemState::Cycling;
        for cycle in 1..=max_cycles {
            match self.step_cycle(cycle) {
                Ok(report) => observer(&report),
                Err(err) => {
                    self.state = AntSystemState::Aborted;
                    return Err(err);
                }
            }
        }
        self.state = AntSystemState::Converged;

        self.best.clone().ok_or_else(|| {
            AcoError::invalid_parameter("max_cycles", max_cycles, "no cycle completed")
        })
    }

    /// Runs a single cycle.
    fn step_cycle(&mut self, cycle: usize) -> AcoResult<CycleReport> {
        self.initialize()?;
        self.construct()?;
        let (cycle_best_cost, best_cost) = self.evaluate()?;
        self.update_pheromone();
        self.cost_history.push(best_cost);

        Ok(CycleReport {
            cycle,
            cycle_best_cost,
            best_cost,
        })
    }

    /// Places every ant on a uniformly drawn start city.
    fn initialize(&mut self) -> AcoResult<()> {
        self.tabu.reset();
        let cities: Vec<usize> = (0..self.distances.size()).collect();
        for ant in 0..self.config.n_ants {
            let start = DiscreteSampler::select_uniform(&cities, &mut self.source)?;
            self.tabu.visit(ant, start);
        }
        Ok(())
    }

    /// Completes every ant's tour.
    fn construct(&mut self) -> AcoResult<()> {
        let n = self.distances.size();
        let mut weights = Vec::with_capacity(n);
        for ant in 0..self.config.n_ants {
            for _ in 1..n {
                let Some(current) = self.tabu.current(ant) else {
                    break;
                };
                let candidates = self.tabu.unvisited(ant);
                weights.clear();
                weights.extend(
                    candidates
                        .iter()
                        .map(|&next| self.desirability(current, next)),
                );
                let next = DiscreteSampler::select(&candidates, &weights, &mut self.source)?;
                self.tabu.visit(ant, next);
            }
        }
        Ok(())
    }

    /// `tau(i, j)^alpha * eta(i, j)^beta` with `eta = 1 / d`.
    fn desirability(&self, from: usize, to: usize) -> f64 {
        let tau = self.pheromone.get(from, to);
        let eta = 1.0 / self.distances.get(from, to);
        tau.powf(self.config.alpha) * eta.powf(self.config.beta)
    }

    /// Records the cycle best and returns `(cycle_best_cost, best_cost)`.
    ///
    /// Fails when a tour cost overflows, since `1 / cost` would deposit
    /// nothing.
    fn evaluate(&mut self) -> AcoResult<(f64, f64)> {
        let mut cycle_best: Option<Solution> = None;
        for row in self.tabu.rows() {
            let cost = self.distances.tour_cost(row, self.config.round_trip);
            if !cost.is_finite() {
                return Err(AcoError::invalid_parameter(
                    "distances",
                    format!("{row:?} costs {cost}"),
                    "tour cost is not finite",
                ));
            }
            if cycle_best.as_ref().is_none_or(|b| cost < b.cost) {
                cycle_best = Some(Solution {
                    tour: row.to_vec(),
                    cost,
                });
            }
        }

        let cycle_best_cost = cycle_best.as_ref().map_or(f64::INFINITY, |s| s.cost);
        if cycle_best_cost < self.best_cost() {
            self.best = cycle_best.clone();
        }
        self.cycle_best = cycle_best;
        Ok((cycle_best_cost, self.best_cost()))
    }

    /// Evaporation, then best-only reinforcement.
    fn update_pheromone(&mut self) {
        self.pheromone.evaporate(self.config.evaporation_rate);

        let Some(best) = &self.cycle_best else {
            return;
        };
        let amount = 1.0 / best.cost;
        for edge in best.tour.windows(2) {
            let (current, next) = (edge[0], edge[1]);
            match self.config.deposit {
                DepositDirection::Traversal => self.pheromone.deposit(current, next, amount),
                DepositDirection::Reverse => self.pheromone.deposit(next, current, amount),
            }
        }
    }

    /// Cost of `tour` under this solver's round-trip setting.
    pub fn cost(&self, tour: &[usize]) -> f64 {
        self.distances.tour_cost(tour, self.config.round_trip)
    }

    /// Best tour found so far.
    pub fn best(&self) -> Option<&Solution> {
        self.best.as_ref()
    }

    /// Cost of the best tour so far, infinite before the first cycle.
    pub fn best_cost(&self) -> f64 {
        self.best.as_ref().map_or(f64::INFINITY, |s| s.cost)
    }

    /// Best tour of the most recent cycle.
    pub fn cycle_best(&self) -> Option<&Solution> {
        self.cycle_best.as_ref()
    }

    /// Best cost after each completed cycle, across all runs.
    pub fn cost_history(&self) -> &[f64] {
        &self.cost_history
    }

    /// Current pheromone levels.
    pub fn pheromone(&self) -> &PheromoneMatrix {
        &self.pheromone
    }

    /// Tabu table of the most recent cycle.
    pub fn tabu(&self) -> &TabuTable {
        &self.tabu
    }

    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    pub fn config(&self) -> &AcoConfig {
        &self.config
    }

    pub fn state(&self) -> AntSystemState {
        self.state
    }

    /// Consumes the solver, returning its uniform source.
    pub fn into_source(self) -> S {
        self.source
    }
}

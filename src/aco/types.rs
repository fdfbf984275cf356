//! Tours, the per-cycle tabu table and progress reports.

/// A tour and its cost.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Cities in visiting order.
    pub tour: Vec<usize>,

    /// Sum of consecutive edge distances, plus the closing edge for round trips.
    pub cost: f64,
}

/// Lifecycle of an [`AntSystem`](super::AntSystem).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AntSystemState {
    /// Constructed, no cycle run yet.
    Uninitialized,
    /// Inside a run.
    Cycling,
    /// A run finished; the global best is available.
    Converged,
    /// A cycle failed and the run stopped early.
    Aborted,
}

/// Summary emitted after each completed cycle.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CycleReport {
    /// 1-based index of the cycle within the current run.
    pub cycle: usize,

    /// Cost of the best tour built during this cycle.
    pub cycle_best_cost: f64,

    /// Cost of the best tour found so far.
    pub best_cost: f64,
}

/// Visiting order of every ant in the current cycle.
///
/// Row `a` holds the cities visited by ant `a`, filled left to right. A
/// visited marker per (ant, city) gives O(1) membership tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabuTable {
    n_ants: usize,
    n_cities: usize,
    order: Vec<usize>,
    filled: Vec<usize>,
    visited: Vec<bool>,
}

impl TabuTable {
    /// Creates an empty table.
    pub fn new(n_ants: usize, n_cities: usize) -> Self {
        Self {
            n_ants,
            n_cities,
            order: vec![0; n_ants * n_cities],
            filled: vec![0; n_ants],
            visited: vec![false; n_ants * n_cities],
        }
    }

    /// Clears every row.
    pub fn reset(&mut self) {
        self.filled.fill(0);
        self.visited.fill(false);
    }

    /// Number of ants (rows).
    pub fn n_ants(&self) -> usize {
        self.n_ants
    }

    /// Number of cities (columns).
    pub fn n_cities(&self) -> usize {
        self.n_cities
    }

    /// Appends `city` to the ant's row.
    ///
    /// # Panics
    ///
    /// Panics if the row is full or the city was already visited.
    pub fn visit(&mut self, ant: usize, city: usize) {
        let col = self.filled[ant];
        assert!(col < self.n_cities, "ant {ant} already visited every city");
        let marker = &mut self.visited[ant * self.n_cities + city];
        assert!(!*marker, "ant {ant} already visited city {city}");
        *marker = true;
        self.order[ant * self.n_cities + col] = city;
        self.filled[ant] = col + 1;
    }

    /// The filled prefix of the ant's row.
    pub fn row(&self, ant: usize) -> &[usize] {
        let start = ant * self.n_cities;
        &self.order[start..start + self.filled[ant]]
    }

    /// Iterates over the filled prefix of every row.
    pub fn rows(&self) -> impl Iterator<Item = &[usize]> + '_ {
        (0..self.n_ants).map(move |ant| self.row(ant))
    }

    /// Last city the ant visited.
    pub fn current(&self, ant: usize) -> Option<usize> {
        self.row(ant).last().copied()
    }

    /// Whether the ant has visited `city`.
    pub fn is_visited(&self, ant: usize, city: usize) -> bool {
        self.visited[ant * self.n_cities + city]
    }

    /// Cities the ant has not visited, ascending.
    pub fn unvisited(&self, ant: usize) -> Vec<usize> {
        (0..self.n_cities)
            .filter(|&city| !self.is_visited(ant, city))
            .collect()
    }

    /// Whether the ant's row is complete.
    pub fn is_complete(&self, ant: usize) -> bool {
        self.filled[ant] == self.n_cities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visit_fills_left_to_right() {
        let mut tabu = TabuTable::new(2, 4);
        tabu.visit(0, 2);
        tabu.visit(0, 0);
        tabu.visit(1, 3);
        assert_eq!(tabu.row(0), &[2, 0]);
        assert_eq!(tabu.row(1), &[3]);
        assert_eq!(tabu.current(0), Some(0));
        assert_eq!(tabu.unvisited(0), vec![1, 3]);
        assert!(tabu.is_visited(1, 3));
        assert!(!tabu.is_visited(1, 2));
        assert!(!tabu.is_complete(0));
    }

    #[test]
    fn test_reset_clears_rows() {
        let mut tabu = TabuTable::new(1, 3);
        for city in [1, 0, 2] {
            tabu.visit(0, city);
        }
        assert!(tabu.is_complete(0));
        tabu.reset();
        assert_eq!(tabu.row(0), &[] as &[usize]);
        assert_eq!(tabu.current(0), None);
        assert_eq!(tabu.unvisited(0), vec![0, 1, 2]);
    }

    #[test]
    #[should_panic(expected = "already visited city")]
    fn test_revisit_panics() {
        let mut tabu = TabuTable::new(1, 3);
        tabu.visit(0, 1);
        tabu.visit(0, 1);
    }

    #[test]
    fn test_rows_iterates_every_ant() {
        let mut tabu = TabuTable::new(3, 2);
        tabu.visit(2, 1);
        let lens: Vec<usize> = tabu.rows().map(|r| r.len()).collect();
        assert_eq!(lens, vec![0, 0, 1]);
    }
}

//! Dense distance and pheromone matrices.

use crate::error::{AcoError, AcoResult};

/// An immutable n×n distance matrix stored in row-major order.
///
/// Entries are finite and nonnegative; the diagonal is never used as an edge.
///
/// # Examples
///
/// ```
/// use u_antsys::aco::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 2.0, 9.0],
///     vec![1.0, 0.0, 6.0],
///     vec![15.0, 7.0, 0.0],
/// ]).unwrap();
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(0, 2), 9.0);
/// assert_eq!(dm.tour_cost(&[0, 1, 2], false), 8.0);
/// assert_eq!(dm.tour_cost(&[0, 1, 2], true), 23.0);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a matrix from rows. Every row must have as many entries as
    /// there are rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> AcoResult<Self> {
        let size = rows.len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(AcoError::invalid_parameter(
                "distances",
                format!("row {i} has {} entries, {size} rows", row.len()),
                "matrix must be square",
            ));
        }
        Self::from_data(size, rows.into_iter().flatten().collect())
    }

    /// Creates a matrix from `size * size` row-major entries.
    pub fn from_data(size: usize, data: Vec<f64>) -> AcoResult<Self> {
        if size == 0 {
            return Err(AcoError::invalid_parameter(
                "distances",
                "0x0",
                "matrix must not be empty",
            ));
        }
        if data.len() != size * size {
            return Err(AcoError::invalid_parameter(
                "distances",
                format!("{} entries for size {size}", data.len()),
                "matrix must be square",
            ));
        }
        if let Some((k, &d)) = data
            .iter()
            .enumerate()
            .find(|(_, d)| !d.is_finite() || **d < 0.0)
        {
            return Err(AcoError::invalid_parameter(
                "distances",
                format!("[{}][{}] = {d}", k / size, k % size),
                "distances must be finite and >= 0",
            ));
        }
        Ok(Self { data, size })
    }

    /// Distance of the edge `from -> to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        (0..self.size).all(|i| {
            ((i + 1)..self.size).all(|j| (self.get(i, j) - self.get(j, i)).abs() <= tol)
        })
    }

    /// First off-diagonal edge with a non-positive distance, if any.
    pub fn degenerate_edge(&self) -> Option<(usize, usize, f64)> {
        (0..self.size)
            .flat_map(|i| (0..self.size).map(move |j| (i, j)))
            .filter(|&(i, j)| i != j)
            .map(|(i, j)| (i, j, self.get(i, j)))
            .find(|&(_, _, d)| d <= 0.0)
    }

    /// Sum of consecutive edge distances along `tour`, plus the closing
    /// edge `last -> first` when `round_trip` is set.
    pub fn tour_cost(&self, tour: &[usize], round_trip: bool) -> f64 {
        let open: f64 = tour.windows(2).map(|w| self.get(w[0], w[1])).sum();
        match (round_trip, tour.first(), tour.last()) {
            (true, Some(&first), Some(&last)) if tour.len() > 1 => open + self.get(last, first),
            _ => open,
        }
    }
}

/// Mutable n×n pheromone levels, initialized to 1.0.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneMatrix {
    data: Vec<f64>,
    size: usize,
}

impl PheromoneMatrix {
    /// Every entry starts at 1.0.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![1.0; size * size],
            size,
        }
    }

    /// Pheromone on the edge `from -> to`.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Multiplies every entry by `1 - rate`. `rate` must lie in `[0, 1]`.
    pub fn evaporate(&mut self, rate: f64) {
        debug_assert!((0.0..=1.0).contains(&rate));
        let keep = 1.0 - rate;
        for tau in &mut self.data {
            *tau *= keep;
        }
    }

    /// Adds `amount` to the edge `from -> to`.
    pub fn deposit(&mut self, from: usize, to: usize, amount: f64) {
        self.data[from * self.size + to] += amount;
    }

    /// Smallest entry.
    pub fn min_value(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Row-major entries.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> DistanceMatrix {
        DistanceMatrix::from_rows(vec![
            vec![0.0, 2.0, 9.0, 10.0],
            vec![1.0, 0.0, 6.0, 4.0],
            vec![15.0, 7.0, 0.0, 8.0],
            vec![6.0, 3.0, 12.0, 0.0],
        ])
        .expect("valid")
    }

    #[test]
    fn test_from_rows() {
        let dm = scenario();
        assert_eq!(dm.size(), 4);
        assert_eq!(dm.get(2, 0), 15.0);
        assert_eq!(dm.get(0, 2), 9.0);
        assert!(!dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_non_square_rejected() {
        let err = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0]]).unwrap_err();
        assert!(matches!(err, AcoError::InvalidParameter { name: "distances", .. }));
        assert!(DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).is_err());
        assert!(DistanceMatrix::from_rows(vec![]).is_err());
    }

    #[test]
    fn test_negative_and_nan_rejected() {
        assert!(DistanceMatrix::from_rows(vec![vec![0.0, -1.0], vec![1.0, 0.0]]).is_err());
        assert!(DistanceMatrix::from_rows(vec![vec![0.0, f64::NAN], vec![1.0, 0.0]]).is_err());
    }

    #[test]
    fn test_degenerate_edge() {
        assert_eq!(scenario().degenerate_edge(), None);
        let dm = DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 0.0],
            vec![2.0, 3.0, 0.0],
        ])
        .expect("valid");
        assert_eq!(dm.degenerate_edge(), Some((1, 2, 0.0)));
    }

    #[test]
    fn test_round_trip_adds_closing_edge() {
        let dm = scenario();
        let tour = [0, 2, 3, 1];
        let open = dm.tour_cost(&tour, false);
        let closed = dm.tour_cost(&tour, true);
        assert_eq!(open, 9.0 + 8.0 + 3.0);
        assert_eq!(closed, open + dm.get(1, 0));
        assert_eq!(closed, 21.0);
    }

    #[test]
    fn test_single_city_tour_costs_nothing() {
        let dm = scenario();
        assert_eq!(dm.tour_cost(&[2], true), 0.0);
        assert_eq!(dm.tour_cost(&[], true), 0.0);
    }

    #[test]
    fn test_pheromone_evaporate_and_deposit() {
        let mut tau = PheromoneMatrix::new(3);
        assert!(tau.as_slice().iter().all(|&t| t == 1.0));
        tau.evaporate(0.25);
        assert!((tau.get(0, 1) - 0.75).abs() < 1e-12);
        tau.deposit(0, 1, 0.5);
        assert!((tau.get(0, 1) - 1.25).abs() < 1e-12);
        assert!((tau.get(1, 0) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_full_evaporation_reaches_zero_not_below() {
        let mut tau = PheromoneMatrix::new(4);
        tau.evaporate(1.0);
        assert_eq!(tau.min_value(), 0.0);
        tau.evaporate(1.0);
        assert_eq!(tau.min_value(), 0.0);
    }
}

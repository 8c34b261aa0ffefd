//! Nearest-neighbor pairing restricted to the 3x3 cell block around each point.
//!
//! Query cost is bounded by local density instead of the total point count.
//! The price is approximation: a true nearest neighbor more than one cell away
//! is never seen, so the result can be farther than the brute-force answer,
//! and a point with an empty neighborhood gets no neighbor at all.

use crate::pair::closest;
use crate::spatial_grid::{DEFAULT_DIVISIONS, SpatialGrid};
use crate::{NearestPair, Point};

/// Grid-backed search over one point set.
#[derive(Clone, Debug)]
pub struct GridSearch<'a> {
    grid: SpatialGrid<'a>,
}

impl<'a> GridSearch<'a> {
    /// Builds the grid over `points` with the default divisions.
    pub fn new(points: &'a [Point]) -> Self {
        Self::with_divisions(points, DEFAULT_DIVISIONS)
    }

    /// Builds the grid over `points` with `divisions` per axis.
    pub fn with_divisions(points: &'a [Point], divisions: usize) -> Self {
        Self {
            grid: SpatialGrid::with_divisions(points, divisions),
        }
    }

    /// Underlying grid
    pub fn grid(&self) -> &SpatialGrid<'a> {
        &self.grid
    }

    /// Nearest candidate of the point at `index`, `None` if the index is out
    /// of range.
    pub fn nearest(&self, index: usize) -> Option<NearestPair> {
        let point = self.grid.point(index)?;
        let cell = self.grid.cell_of(index)?;
        let best = closest(&point, self.grid.candidates_near(index, cell));
        Some(NearestPair::new(index, point, best))
    }

    /// Pairs every point, in input order.
    pub fn run(&self) -> Vec<NearestPair> {
        (0..self.grid.len()).filter_map(|index| self.nearest(index)).collect()
    }

    /// Pairs every point on the rayon thread pool. Output matches [`run`](Self::run).
    #[cfg(feature = "rayon")]
    pub fn par_run(&self) -> Vec<NearestPair> {
        use rayon::prelude::*;

        (0..self.grid.len())
            .into_par_iter()
            .filter_map(|index| self.nearest(index))
            .collect()
    }
}

/// Grid nearest-neighbor pairing with the default 8 divisions per axis.
///
/// # Example
/// ```
/// use gridnn::{Point, grid_nearest};
/// let points = [Point::new(0.0, 0.0), Point::new(0.0, 5.0), Point::new(0.0, 10.0)];
/// let pairs = grid_nearest(&points);
/// assert_eq!(pairs[0].distance(), Some(25.0));
/// ```
pub fn grid_nearest(points: &[Point]) -> Vec<NearestPair> {
    GridSearch::new(points).run()
}

/// Grid nearest-neighbor pairing with `divisions` per axis.
pub fn grid_nearest_with_divisions(points: &[Point], divisions: usize) -> Vec<NearestPair> {
    GridSearch::with_divisions(points, divisions).run()
}

/// Parallel variant of [`grid_nearest`].
#[cfg(feature = "rayon")]
pub fn par_grid_nearest(points: &[Point]) -> Vec<NearestPair> {
    GridSearch::new(points).par_run()
}

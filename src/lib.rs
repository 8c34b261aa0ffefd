//! # gridnn - Nearest Neighbor Pairing for 2D Point Sets
//!
//! Finds, for every point in a 2D point set, its nearest other point. Two
//! strategies are provided:
//!
//! - **Brute force**: O(n²), exact, used as the reference
//! - **Spatial grid**: buckets points into a uniform grid and only inspects the
//!   3x3 block of cells around each point
//!
//! A comparator checks the grid result against the reference. Entries are
//! equivalent when the neighbors sit at the same squared distance, so ties are
//! accepted.
//!
//! ## Quick Start
//!
//! ```rust
//! use gridnn::prelude::*;
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(0.5, 1.0),
//!     Point::new(10.0, 10.0),
//! ];
//!
//! let brute = brute_force_nearest(&points);
//! let fast = grid_nearest(&points);
//!
//! let result = compare(&brute, &fast).unwrap();
//! for mismatch in result.mismatches() {
//!     println!("{}", mismatch);
//! }
//! // (10,10) has no grid candidates around it
//! assert!(!result.is_same());
//! assert_eq!(result.mismatches()[0].index, 3);
//! ```
//!
//! ## How It Works
//!
//! The grid splits the extents of the point set into 8 divisions per axis
//! (see [`DEFAULT_DIVISIONS`]). Each point's cell is
//! `floor((coord - min) / div)`. A query yields the other points in the
//! point's own cell, then those in the 8 surrounding cells. The closest of
//! these is the grid's answer.
//!
//! This is a heuristic. The grid never finds a closer neighbor than brute
//! force, and it may miss the true neighbor when that lies more than one cell
//! away. It is exact whenever a cell is at least as wide as the largest
//! nearest-neighbor distance.
//!
//! All distances are squared Euclidean distances.

pub mod brute_force;
pub mod compare;
pub mod grid_search;
pub mod io;
pub mod pair;
pub mod point;
pub mod prelude;
pub mod spatial_grid;

mod integration_test;

pub use brute_force::brute_force_nearest;
pub use compare::{CompareError, Comparison, Mismatch, compare, same_result};
#[cfg(feature = "rayon")]
pub use grid_search::par_grid_nearest;
pub use grid_search::{GridSearch, grid_nearest, grid_nearest_with_divisions};
pub use io::{ParseError, PointIoError};
pub use pair::{NearestPair, Neighbor};
pub use point::{Point, PointKey};
pub use spatial_grid::{Candidates, CellKey, DEFAULT_DIVISIONS, Extents, SpatialGrid};

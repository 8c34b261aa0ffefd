//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use gridnn::prelude::*;
//! ```

pub use crate::{
    CompareError, Comparison, GridSearch, NearestPair, Point, SpatialGrid, brute_force_nearest,
    compare, grid_nearest,
};

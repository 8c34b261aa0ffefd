//! Equivalence check between two nearest-neighbor pairings.
//!
//! Two pairings computed over the same input are equivalent entry by entry when
//! the chosen neighbors are equal, or when they sit at the same squared
//! distance from the query point. Ties are valid alternatives.

use std::fmt;

use thiserror::Error;

use crate::NearestPair;

/// Errors that can occur when comparing pairings.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum CompareError {
    /// The pairings were not computed over the same point set.
    #[error("pairings differ in length: {left} vs {right}")]
    LengthMismatch {
        /// Length of the expected pairing
        left: usize,
        /// Length of the actual pairing
        right: usize,
    },
}

/// One non-equivalent entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mismatch {
    /// Position of the entry in both pairings
    pub index: usize,
    /// Entry from the reference pairing
    pub expected: NearestPair,
    /// Entry from the pairing under test
    pub actual: NearestPair,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "different at #{}, expected {} distance {} got {} distance {}",
            self.index,
            self.expected,
            DistanceDisplay(self.expected.distance()),
            self.actual,
            DistanceDisplay(self.actual.distance()),
        )
    }
}

struct DistanceDisplay(Option<f64>);

impl fmt::Display for DistanceDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(distance) => write!(f, "{distance}"),
            None => f.write_str("none"),
        }
    }
}

/// Outcome of [`compare`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Comparison {
    compared: usize,
    mismatches: Vec<Mismatch>,
}

impl Comparison {
    /// True when every entry was equivalent
    pub fn is_same(&self) -> bool {
        self.mismatches.is_empty()
    }

    /// Non-equivalent entries, in index order
    pub fn mismatches(&self) -> &[Mismatch] {
        &self.mismatches
    }

    /// Number of entries compared
    pub fn compared(&self) -> usize {
        self.compared
    }
}

/// Compares `expected` (usually brute force) against `actual` entry by entry.
///
/// # Errors
///
/// Returns [`CompareError::LengthMismatch`] if the slices differ in length.
///
/// # Example
/// ```
/// use gridnn::{Point, brute_force_nearest, compare, grid_nearest};
/// let points = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)];
/// let result = compare(&brute_force_nearest(&points), &grid_nearest(&points)).unwrap();
/// assert!(result.is_same());
/// ```
pub fn compare(
    expected: &[NearestPair],
    actual: &[NearestPair],
) -> Result<Comparison, CompareError> {
    if expected.len() != actual.len() {
        return Err(CompareError::LengthMismatch {
            left: expected.len(),
            right: actual.len(),
        });
    }

    let mismatches: Vec<Mismatch> = expected
        .iter()
        .zip(actual)
        .enumerate()
        .filter(|(_, (a, b))| !equivalent(a, b))
        .map(|(index, (a, b))| Mismatch {
            index,
            expected: *a,
            actual: *b,
        })
        .collect();

    for mismatch in &mismatches {
        log::warn!("{mismatch}");
    }

    Ok(Comparison {
        compared: expected.len(),
        mismatches,
    })
}

/// Shorthand for `compare(..)?.is_same()`.
///
/// # Errors
///
/// Returns [`CompareError::LengthMismatch`] if the slices differ in length.
pub fn same_result(
    expected: &[NearestPair],
    actual: &[NearestPair],
) -> Result<bool, CompareError> {
    Ok(compare(expected, actual)?.is_same())
}

fn equivalent(a: &NearestPair, b: &NearestPair) -> bool {
    match (a.neighbor, b.neighbor) {
        (None, None) => true,
        (Some(x), Some(y)) => {
            x.point == y.point
                || a.point.squared_distance(&x.point) == b.point.squared_distance(&y.point)
        }
        _ => false,
    }
}

//! Per-point search result.

use std::fmt;

use crate::Point;

/// Chosen neighbor of a query point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbor {
    /// Index of the neighbor in the input slice
    pub index: usize,
    /// Neighbor coordinates
    pub point: Point,
    /// Squared distance to the query point
    pub distance: f64,
}

/// A point and its nearest neighbor, if one was found.
///
/// `neighbor` is `None` when the input holds fewer than two points, or when the
/// grid search found no candidate around the point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NearestPair {
    /// Index of the query point in the input slice
    pub index: usize,
    /// Query point
    pub point: Point,
    /// Chosen neighbor, `None` when absent
    pub neighbor: Option<Neighbor>,
}

impl NearestPair {
    pub(crate) fn new(index: usize, point: Point, best: Option<(usize, Point, f64)>) -> Self {
        Self {
            index,
            point,
            neighbor: best.map(|(i, p, d)| Neighbor {
                index: i,
                point: p,
                distance: d,
            }),
        }
    }

    /// Squared distance to the neighbor, `None` when absent.
    pub fn distance(&self) -> Option<f64> {
        self.neighbor.map(|n| n.distance)
    }

    /// Coordinates of the neighbor, `None` when absent.
    pub fn neighbor_point(&self) -> Option<Point> {
        self.neighbor.map(|n| n.point)
    }
}

impl fmt::Display for NearestPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.neighbor {
            Some(n) => write!(f, "({}, {})", self.point, n.point),
            None => write!(f, "({}, none)", self.point),
        }
    }
}

/// Picks the minimum-distance candidate; the first one seen wins ties.
///
/// NaN distances never win.
pub(crate) fn closest<I>(query: &Point, candidates: I) -> Option<(usize, Point, f64)>
where
    I: IntoIterator<Item = (usize, Point)>,
{
    let mut best: Option<(usize, Point, f64)> = None;
    let mut best_distance = f64::INFINITY;
    for (index, other) in candidates {
        let distance = query.squared_distance(&other);
        if distance < best_distance || (best.is_none() && distance == f64::INFINITY) {
            best_distance = distance;
            best = Some((index, other, distance));
        }
    }
    best
}

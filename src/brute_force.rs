//! O(n²) reference search. Used as the correctness oracle for the grid search.

use crate::pair::closest;
use crate::{NearestPair, Point};

/// Finds the nearest other point for every point by checking all pairs.
///
/// Output is in input order, one pair per point. Points are excluded by index,
/// so a duplicate coordinate at another index is a valid neighbor at distance 0.
/// Ties go to the candidate that comes first in the input.
///
/// # Example
/// ```
/// use gridnn::{Point, brute_force_nearest};
/// let points = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(10.0, 10.0)];
/// let pairs = brute_force_nearest(&points);
/// assert_eq!(pairs[2].neighbor.unwrap().index, 1);
/// assert_eq!(pairs[2].distance(), Some(181.0));
/// ```
pub fn brute_force_nearest(points: &[Point]) -> Vec<NearestPair> {
    points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let others = points
                .iter()
                .copied()
                .enumerate()
                .filter(|&(j, _)| j != i);
            NearestPair::new(i, *point, closest(point, others))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_point_scenario() {
        let points = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(10.0, 10.0)];
        let pairs = brute_force_nearest(&points);

        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[0].neighbor_point(), Some(Point::new(1.0, 0.0)));
        assert_eq!(pairs[0].distance(), Some(1.0));
        assert_eq!(pairs[1].neighbor_point(), Some(Point::new(0.0, 0.0)));
        assert_eq!(pairs[1].distance(), Some(1.0));
        assert_eq!(pairs[2].neighbor_point(), Some(Point::new(1.0, 0.0)));
        assert_eq!(pairs[2].distance(), Some(181.0));
    }

    #[test]
    fn test_degenerate_inputs() {
        assert!(brute_force_nearest(&[]).is_empty());

        let pairs = brute_force_nearest(&[Point::new(5.0, 5.0)]);
        assert_eq!(pairs.len(), 1);
        assert!(pairs[0].neighbor.is_none());
    }

    #[test]
    fn test_duplicates_pair_with_each_other() {
        let points = [Point::new(2.0, 2.0), Point::new(9.0, 9.0), Point::new(2.0, 2.0)];
        let pairs = brute_force_nearest(&points);
        assert_eq!(pairs[0].neighbor.unwrap().index, 2);
        assert_eq!(pairs[2].neighbor.unwrap().index, 0);
        assert_eq!(pairs[0].distance(), Some(0.0));
    }

    #[test]
    fn test_tie_goes_to_first_in_input() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(0.0, 3.0),
            Point::new(3.0, 0.0),
            Point::new(-3.0, 0.0),
        ];
        let pairs = brute_force_nearest(&points);
        assert_eq!(pairs[0].neighbor.unwrap().index, 1);
    }

    #[test]
    fn test_no_distance_cap() {
        let points = [Point::new(-1.0e6, 0.0), Point::new(1.0e6, 0.0)];
        let pairs = brute_force_nearest(&points);
        assert_eq!(pairs[0].distance(), Some(4.0e12));
    }
}

#[cfg(test)]
mod integration_tests {
    use crate::io::read_points;
    use crate::prelude::*;

    #[test]
    fn test_three_point_scenario_end_to_end() {
        let points = read_points("0,0\n1,0\n10,10\n".as_bytes()).unwrap();

        let brute = brute_force_nearest(&points);
        let distances: Vec<Option<f64>> = brute.iter().map(|p| p.distance()).collect();
        assert_eq!(distances, vec![Some(1.0), Some(1.0), Some(181.0)]);
        assert_eq!(brute[2].neighbor_point(), Some(Point::new(1.0, 0.0)));

        // The grid cannot see (1,0) from (10,10)
        let fast = grid_nearest(&points);
        let result = compare(&brute, &fast).unwrap();
        assert_eq!(result.mismatches().len(), 1);
        assert_eq!(result.mismatches()[0].index, 2);
    }

    #[test]
    fn test_empty_and_single_point() {
        let empty: Vec<Point> = Vec::new();
        assert!(compare(&brute_force_nearest(&empty), &grid_nearest(&empty)).unwrap().is_same());

        let single = [Point::new(5.0, 5.0)];
        let brute = brute_force_nearest(&single);
        let fast = grid_nearest(&single);
        assert!(brute[0].neighbor.is_none());
        assert!(fast[0].neighbor.is_none());
        assert!(compare(&brute, &fast).unwrap().is_same());
    }

    #[test]
    fn test_collinear_same_x() {
        let points = [Point::new(0.0, 0.0), Point::new(0.0, 5.0), Point::new(0.0, 10.0)];

        let grid = SpatialGrid::new(&points);
        let rows: Vec<i64> = (0..3).map(|i| grid.cell_of(i).unwrap().cy).collect();
        assert_eq!(rows, vec![0, 4, 8]);
        assert!((0..3).all(|i| grid.cell_of(i).unwrap().cx == 0));

        let brute = brute_force_nearest(&points);
        assert_eq!(brute[1].distance(), Some(25.0));
        assert_eq!(brute[1].neighbor.unwrap().index, 0);

        let fast = grid_nearest(&points);
        assert_eq!(fast.len(), 3);
    }

    #[test]
    fn test_mismatched_lengths_fail_loudly() {
        let a = brute_force_nearest(&[Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
        let b = grid_nearest(&[Point::new(0.0, 0.0)]);
        let err = compare(&a, &b).unwrap_err();
        assert_eq!(err, CompareError::LengthMismatch { left: 2, right: 1 });
        assert_eq!(err.to_string(), "pairings differ in length: 2 vs 1");
    }
}

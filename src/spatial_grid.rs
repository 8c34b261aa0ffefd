//! Uniform bucket grid over a static point set.
//!
//! The grid is sized from the extents of the points: each axis is split into a
//! fixed number of divisions, and every point lands in the bucket
//! `floor((coord - min) / div)`. The maximum coordinate lands one past the last
//! division, so an axis with `d` divisions spans `d + 1` cells.
//!
//! Buckets store point indices, not copies. Identity of a point is its index in
//! the slice the grid was built from.
//!
//! An axis whose division width is zero or not finite (all points share the
//! coordinate, or the span overflows) collapses to a single column or row:
//! every point gets cell 0 along that axis.

use std::collections::HashMap;
use std::iter::FusedIterator;
use std::slice;

use crate::Point;

/// Number of divisions along each axis unless overridden
pub const DEFAULT_DIVISIONS: usize = 8;

/// Offsets of the 8 surrounding cells, in enumeration order
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Integer (column, row) of a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey {
    /// Column
    pub cx: i64,
    /// Row
    pub cy: i64,
}

impl CellKey {
    /// Creates a cell key from column and row.
    pub const fn new(cx: i64, cy: i64) -> Self {
        Self { cx, cy }
    }

    #[inline]
    fn offset(self, dx: i64, dy: i64) -> Option<Self> {
        Some(Self::new(self.cx.checked_add(dx)?, self.cy.checked_add(dy)?))
    }
}

/// Coordinate extents of the indexed points
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extents {
    /// Smallest x
    pub min_x: f64,
    /// Smallest y
    pub min_y: f64,
    /// Largest x
    pub max_x: f64,
    /// Largest y
    pub max_y: f64,
}

impl Extents {
    fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    fn include(&mut self, point: &Point) {
        self.min_x = self.min_x.min(point.x());
        self.min_y = self.min_y.min(point.y());
        self.max_x = self.max_x.max(point.x());
        self.max_y = self.max_y.max(point.y());
    }
}

/// Static spatial grid over a borrowed point slice.
///
/// Built once, never modified. Rebuild it if the point set changes.
#[derive(Clone, Debug)]
pub struct SpatialGrid<'a> {
    points: &'a [Point],
    extents: Option<Extents>,
    divisions: usize,
    /// Cell width along x
    div_x: f64,
    /// Cell height along y
    div_y: f64,
    buckets: HashMap<CellKey, Vec<usize>>,
    /// Cell assigned to each point, by index
    cells: Vec<CellKey>,
}

impl<'a> SpatialGrid<'a> {
    /// Builds a grid with [`DEFAULT_DIVISIONS`] divisions per axis.
    ///
    /// # Example
    /// ```
    /// use gridnn::{Point, SpatialGrid};
    /// let points = [Point::new(0.0, 0.0), Point::new(8.0, 8.0), Point::new(1.5, 0.5)];
    /// let grid = SpatialGrid::new(&points);
    /// assert_eq!(grid.cell_of(2).map(|c| (c.cx, c.cy)), Some((1, 0)));
    /// ```
    pub fn new(points: &'a [Point]) -> Self {
        Self::with_divisions(points, DEFAULT_DIVISIONS)
    }

    /// Builds a grid with `divisions` per axis. Zero is treated as one.
    pub fn with_divisions(points: &'a [Point], divisions: usize) -> Self {
        let divisions = divisions.max(1);

        if points.is_empty() {
            return Self {
                points,
                extents: None,
                divisions,
                div_x: 0.0,
                div_y: 0.0,
                buckets: HashMap::new(),
                cells: Vec::new(),
            };
        }

        let mut extents = Extents::empty();
        for point in points {
            extents.include(point);
        }

        let div_x = (extents.max_x - extents.min_x) / divisions as f64;
        let div_y = (extents.max_y - extents.min_y) / divisions as f64;

        let mut buckets: HashMap<CellKey, Vec<usize>> = HashMap::new();
        let mut cells = Vec::with_capacity(points.len());
        for (index, point) in points.iter().enumerate() {
            let key = CellKey::new(
                cell_coordinate(point.x(), extents.min_x, div_x),
                cell_coordinate(point.y(), extents.min_y, div_y),
            );
            buckets.entry(key).or_default().push(index);
            cells.push(key);
        }

        log::debug!(
            "spatial grid: {} points in {} buckets, {} divisions, cell {}x{}",
            points.len(),
            buckets.len(),
            divisions,
            div_x,
            div_y
        );

        Self {
            points,
            extents: Some(extents),
            divisions,
            div_x,
            div_y,
            buckets,
            cells,
        }
    }

    /// Number of indexed points
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the grid indexes no points
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of non-empty buckets
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Divisions per axis used to size the cells
    pub fn divisions(&self) -> usize {
        self.divisions
    }

    /// Extents of the indexed points, `None` for an empty grid
    pub fn extents(&self) -> Option<Extents> {
        self.extents
    }

    /// Cell width and height. A collapsed axis reports its raw (zero or
    /// non-finite) width.
    pub fn cell_size(&self) -> (f64, f64) {
        (self.div_x, self.div_y)
    }

    /// Point at `index` in the indexed slice
    #[inline]
    pub fn point(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// Cell the point at `index` was assigned to
    #[inline]
    pub fn cell_of(&self, index: usize) -> Option<CellKey> {
        self.cells.get(index).copied()
    }

    /// Cell an arbitrary point maps to under this grid's extents.
    ///
    /// Points outside the extents map to cells outside the populated range.
    pub fn cell_for(&self, point: &Point) -> Option<CellKey> {
        let extents = self.extents?;
        Some(CellKey::new(
            cell_coordinate(point.x(), extents.min_x, self.div_x),
            cell_coordinate(point.y(), extents.min_y, self.div_y),
        ))
    }

    /// Indices stored in a bucket, empty if the bucket does not exist
    pub fn bucket(&self, cell: CellKey) -> &[usize] {
        self.buckets.get(&cell).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Lazily enumerates the candidates around `cell`.
    ///
    /// Yields the points of `cell` except `index`, then the points of the 8
    /// surrounding cells. Missing buckets are skipped.
    pub fn candidates_near(&self, index: usize, cell: CellKey) -> Candidates<'_> {
        Candidates {
            points: self.points,
            buckets: &self.buckets,
            center: cell,
            exclude: index,
            current: self.bucket(cell).iter(),
            in_center: true,
            next_offset: 0,
        }
    }

    /// Collects the candidates of the point at `index` into `results`.
    ///
    /// Same sequence as [`candidates_near`](Self::candidates_near) on the
    /// point's own cell. Does nothing for an out-of-range index.
    pub fn query_candidates(&self, index: usize, results: &mut Vec<usize>) {
        if let Some(cell) = self.cell_of(index) {
            results.extend(self.candidates_near(index, cell).map(|(i, _)| i));
        }
    }
}

#[inline]
#[expect(clippy::cast_possible_truncation, reason = "float-to-int casts saturate")]
fn cell_coordinate(value: f64, min: f64, div: f64) -> i64 {
    if div.is_finite() && div > 0.0 {
        ((value - min) / div).floor() as i64
    } else {
        0
    }
}

/// Iterator over the candidates of one query, see
/// [`SpatialGrid::candidates_near`].
#[derive(Clone, Debug)]
pub struct Candidates<'a> {
    points: &'a [Point],
    buckets: &'a HashMap<CellKey, Vec<usize>>,
    center: CellKey,
    exclude: usize,
    current: slice::Iter<'a, usize>,
    in_center: bool,
    next_offset: usize,
}

impl Iterator for Candidates<'_> {
    type Item = (usize, Point);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(&index) = self.current.next() {
                if self.in_center && index == self.exclude {
                    continue;
                }
                return Some((index, self.points[index]));
            }

            let &(dx, dy) = NEIGHBOR_OFFSETS.get(self.next_offset)?;
            self.next_offset += 1;
            self.in_center = false;

            let buckets = self.buckets;
            self.current = self
                .center
                .offset(dx, dy)
                .and_then(|key| buckets.get(&key))
                .map(|bucket| bucket.iter())
                .unwrap_or_default();
        }
    }
}

impl FusedIterator for Candidates<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid() {
        let grid = SpatialGrid::new(&[]);
        assert!(grid.is_empty());
        assert_eq!(grid.bucket_count(), 0);
        assert!(grid.extents().is_none());
        assert!(grid.cell_of(0).is_none());
        assert!(grid.cell_for(&Point::new(1.0, 1.0)).is_none());
    }

    #[test]
    fn test_max_coordinate_lands_past_last_division() {
        let points = [Point::new(0.0, 0.0), Point::new(8.0, 16.0)];
        let grid = SpatialGrid::new(&points);
        assert_eq!(grid.cell_size(), (1.0, 2.0));
        assert_eq!(grid.cell_of(0), Some(CellKey::new(0, 0)));
        assert_eq!(grid.cell_of(1), Some(CellKey::new(8, 8)));
    }

    #[test]
    fn test_zero_span_axis_collapses() {
        let points = [Point::new(0.0, 0.0), Point::new(0.0, 5.0), Point::new(0.0, 10.0)];
        let grid = SpatialGrid::new(&points);
        assert_eq!(grid.cell_of(0), Some(CellKey::new(0, 0)));
        assert_eq!(grid.cell_of(1), Some(CellKey::new(0, 4)));
        assert_eq!(grid.cell_of(2), Some(CellKey::new(0, 8)));
    }

    #[test]
    fn test_single_point_grid() {
        let points = [Point::new(5.0, 5.0)];
        let grid = SpatialGrid::new(&points);
        assert_eq!(grid.cell_of(0), Some(CellKey::new(0, 0)));
        assert_eq!(grid.candidates_near(0, CellKey::new(0, 0)).count(), 0);
    }

    #[test]
    fn test_candidates_order_and_exclusion() {
        // Cell width is 1.0 on both axes
        let points = [
            Point::new(0.0, 0.0), // 0 -> (0,0)
            Point::new(8.0, 8.0), // 1 -> (8,8)
            Point::new(1.5, 1.5), // 2 -> (1,1)
            Point::new(1.2, 1.8), // 3 -> (1,1)
            Point::new(0.5, 2.5), // 4 -> (0,2)
            Point::new(2.5, 0.5), // 5 -> (2,0)
            Point::new(5.0, 5.0), // 6 -> (5,5)
        ];
        let grid = SpatialGrid::new(&points);

        let found: Vec<usize> =
            grid.candidates_near(2, CellKey::new(1, 1)).map(|(i, _)| i).collect();
        // Own bucket first, then (0,0), (2,0), (0,2) in offset order
        assert_eq!(found, vec![3, 0, 5, 4]);

        let mut results = Vec::new();
        grid.query_candidates(2, &mut results);
        assert_eq!(results, found);
    }

    #[test]
    fn test_candidates_only_exclude_in_own_bucket() {
        let points = [Point::new(0.0, 0.0), Point::new(8.0, 8.0), Point::new(0.1, 0.1)];
        let grid = SpatialGrid::new(&points);
        // Querying a cell the point does not live in keeps it as a candidate
        let found: Vec<usize> =
            grid.candidates_near(0, CellKey::new(1, 1)).map(|(i, _)| i).collect();
        assert_eq!(found, vec![0, 2]);
    }

    #[test]
    fn test_every_point_in_exactly_one_bucket() {
        let points: Vec<Point> = (0..50)
            .map(|i| Point::new((i * 7 % 13) as f64, (i * 3 % 11) as f64))
            .collect();
        let grid = SpatialGrid::new(&points);

        let total: usize = grid.buckets.values().map(Vec::len).sum();
        assert_eq!(total, points.len());
        for index in 0..points.len() {
            let cell = grid.cell_of(index).unwrap();
            assert!(grid.bucket(cell).contains(&index));
            assert_eq!(grid.cell_for(&points[index]), Some(cell));
        }
    }

    #[test]
    fn test_zero_divisions_clamped() {
        let points = [Point::new(0.0, 0.0), Point::new(4.0, 4.0)];
        let grid = SpatialGrid::with_divisions(&points, 0);
        assert_eq!(grid.divisions(), 1);
        assert_eq!(grid.cell_of(1), Some(CellKey::new(1, 1)));
    }

    #[test]
    fn test_non_finite_span_collapses() {
        let points = [Point::new(f64::NEG_INFINITY, 0.0), Point::new(1.0, 8.0)];
        let grid = SpatialGrid::new(&points);
        assert_eq!(grid.cell_of(0).map(|c| c.cx), Some(0));
        assert_eq!(grid.cell_of(1).map(|c| c.cx), Some(0));
        assert_eq!(grid.cell_of(1).map(|c| c.cy), Some(8));
    }
}

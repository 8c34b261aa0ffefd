//! 2D point value and the squared-distance metric used throughout the crate.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Immutable 2D point.
///
/// Equality is exact coordinate equality. Identity is not a property of the
/// value: searches identify points by their index in the input slice, so two
/// coordinate-equal points at different indices are distinct candidates.
#[derive(Clone, Copy, Debug, Default)]
pub struct Point {
    x: f64,
    y: f64,
}

/// Hash key consistent with [`Point`] equality.
///
/// `-0.0` and `0.0` compare equal and map to the same key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointKey(u64, u64);

impl Point {
    /// Creates a point. Coordinates are not validated.
    ///
    /// # Example
    /// ```
    /// use gridnn::Point;
    /// let p = Point::new(3.0, -4.0);
    /// assert_eq!(p.x(), 3.0);
    /// assert_eq!(p.squared_distance(&Point::new(0.0, 0.0)), 25.0);
    /// ```
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Horizontal coordinate
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Vertical coordinate
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Squared Euclidean distance, no square root.
    #[inline]
    pub fn squared_distance(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Key usable in hashed or ordered containers.
    pub fn key(&self) -> PointKey {
        PointKey(canonical_bits(self.x), canonical_bits(self.y))
    }
}

#[inline]
fn canonical_bits(value: f64) -> u64 {
    // Fold -0.0 onto 0.0
    if value == 0.0 { 0.0_f64.to_bits() } else { value.to_bits() }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

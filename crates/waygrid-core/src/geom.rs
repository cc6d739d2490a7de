//! Grid geometry: [`Point`] cells inside an [`Extent`].

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// An integer grid cell position. X grows right, Y grows down.
///
/// Points order lexicographically, `x` first and then `y`, so that ordered
/// sets and maps of points iterate column by column.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Manhattan (L1) distance to `other`.
    #[inline]
    pub fn manhattan(self, other: Point) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// Chebyshev (L∞) distance to `other`.
    #[inline]
    pub fn chebyshev(self, other: Point) -> i32 {
        (self.x - other.x).abs().max((self.y - other.y).abs())
    }

    /// Whether `other` is one of the eight cells surrounding `self`.
    ///
    /// A point is never adjacent to itself.
    #[inline]
    pub fn is_adjacent(self, other: Point) -> bool {
        self.chebyshev(other) == 1
    }

    /// Whether the step from `self` to `other` is a single diagonal move.
    #[inline]
    pub fn is_diagonal_step(self, other: Point) -> bool {
        (self.x - other.x).abs() == 1 && (self.y - other.y).abs() == 1
    }

    /// All eight neighbours (cardinal + diagonal), in ascending [`Ord`] order.
    #[inline]
    pub fn neighbors_8(self) -> [Point; 8] {
        [
            Self::new(self.x - 1, self.y - 1),
            Self::new(self.x - 1, self.y),
            Self::new(self.x - 1, self.y + 1),
            Self::new(self.x, self.y - 1),
            Self::new(self.x, self.y + 1),
            Self::new(self.x + 1, self.y - 1),
            Self::new(self.x + 1, self.y),
            Self::new(self.x + 1, self.y + 1),
        ]
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.x.cmp(&other.x).then(self.y.cmp(&other.y))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

// ---------------------------------------------------------------------------
// Extent
// ---------------------------------------------------------------------------

/// Size of a grid whose top-left cell is (0, 0).
///
/// Cells with `0 <= x < width` and `0 <= y < height` are inside.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent {
    width: i32,
    height: i32,
}

impl Extent {
    /// Negative sizes are clamped to zero.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width: if width > 0 { width } else { 0 },
            height: if height > 0 { height } else { 0 },
        }
    }

    #[inline]
    pub const fn width(self) -> i32 {
        self.width
    }

    #[inline]
    pub const fn height(self) -> i32 {
        self.height
    }

    /// (width, height) as a point.
    #[inline]
    pub const fn size(self) -> Point {
        Point::new(self.width, self.height)
    }

    /// Number of cells.
    #[inline]
    pub const fn len(self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub const fn contains(self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Row-major index of `p`, or `None` outside the extent.
    #[inline]
    pub const fn index(self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some(p.y as usize * self.width as usize + p.x as usize)
        } else {
            None
        }
    }

    /// Every cell, row by row, matching [`index`](Self::index) order.
    pub fn cells(self) -> impl Iterator<Item = Point> {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Point::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
        assert_eq!(a.shift(-1, 3), Point::new(0, 5));
    }

    #[test]
    fn point_orders_by_x_then_y() {
        assert!(Point::new(0, 9) < Point::new(1, 0));
        assert!(Point::new(2, 1) < Point::new(2, 3));
        let set: BTreeSet<Point> = [Point::new(1, 0), Point::new(0, 5), Point::new(0, 2)]
            .into_iter()
            .collect();
        let ordered: Vec<_> = set.into_iter().collect();
        assert_eq!(
            ordered,
            vec![Point::new(0, 2), Point::new(0, 5), Point::new(1, 0)]
        );
    }

    #[test]
    fn distances() {
        let a = Point::new(0, 0);
        let b = Point::new(3, -4);
        assert_eq!(a.manhattan(b), 7);
        assert_eq!(b.manhattan(a), 7);
        assert_eq!(a.chebyshev(b), 4);
    }

    #[test]
    fn adjacency_excludes_self() {
        let p = Point::new(5, 5);
        assert!(!p.is_adjacent(p));
        assert!(p.is_adjacent(Point::new(6, 6)));
        assert!(p.is_adjacent(Point::new(5, 4)));
        assert!(!p.is_adjacent(Point::new(7, 5)));
    }

    #[test]
    fn diagonal_step() {
        let p = Point::new(2, 2);
        assert!(p.is_diagonal_step(Point::new(3, 1)));
        assert!(!p.is_diagonal_step(Point::new(3, 2)));
        assert!(!p.is_diagonal_step(Point::new(4, 4)));
    }

    #[test]
    fn neighbors_8_sorted_and_complete() {
        let p = Point::new(3, 3);
        let ns = p.neighbors_8();
        assert!(ns.windows(2).all(|w| w[0] < w[1]));
        assert!(ns.iter().all(|&n| p.is_adjacent(n)));
        assert!(!ns.contains(&p));
    }

    #[test]
    fn extent_contains_and_len() {
        let e = Extent::new(3, 2);
        assert_eq!(e.size(), Point::new(3, 2));
        assert_eq!(e.len(), 6);
        assert!(e.contains(Point::new(2, 1)));
        assert!(!e.contains(Point::new(3, 0)));
        assert!(!e.contains(Point::new(0, -1)));
    }

    #[test]
    fn extent_clamps_negative_sizes() {
        let e = Extent::new(-4, 5);
        assert!(e.is_empty());
        assert_eq!(e.len(), 0);
        assert_eq!(e.cells().count(), 0);
        assert!(!e.contains(Point::ZERO));
    }

    #[test]
    fn cells_follow_index_order() {
        let e = Extent::new(3, 2);
        let cells: Vec<_> = e.cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[1], Point::new(1, 0));
        assert_eq!(cells[3], Point::new(0, 1));
        for (i, &p) in cells.iter().enumerate() {
            assert_eq!(e.index(p), Some(i));
        }
        assert_eq!(e.index(Point::new(3, 1)), None);
    }
}

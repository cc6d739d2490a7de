//! A rectangular grid of [`Occupancy`] cells.

use waygrid_core::{Extent, Point};
use waygrid_paths::GridQuery;

/// Whether a cell can be entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Occupancy {
    #[default]
    Open,
    Blocked,
}

impl Occupancy {
    /// `'o'` for open, `'x'` for blocked.
    pub const fn to_char(self) -> char {
        match self {
            Self::Open => 'o',
            Self::Blocked => 'x',
        }
    }

    /// Inverse of [`to_char`](Self::to_char). `'.'` and `'#'` are accepted
    /// as well.
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'o' | '.' => Some(Self::Open),
            'x' | '#' => Some(Self::Blocked),
            _ => None,
        }
    }

    /// The other state.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Open => Self::Blocked,
            Self::Blocked => Self::Open,
        }
    }
}

/// A `width × height` grid anchored at (0, 0), every cell open or blocked.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OccupancyGrid {
    cells: Vec<Occupancy>,
    bounds: Extent,
}

impl OccupancyGrid {
    /// Create a new grid with every cell open. Negative sizes are clamped
    /// to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Extent::new(width, height);
        Self {
            cells: vec![Occupancy::Open; bounds.len()],
            bounds,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Extent {
        self.bounds
    }

    /// Returns the size as a Point (width = x, height = y).
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Get the cell at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Occupancy> {
        self.bounds.index(p).map(|i| self.cells[i])
    }

    /// Set the cell at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, occ: Occupancy) {
        if let Some(i) = self.bounds.index(p) {
            self.cells[i] = occ;
        }
    }

    /// Flip the cell at a point between open and blocked.
    pub fn toggle(&mut self, p: Point) {
        if let Some(i) = self.bounds.index(p) {
            self.cells[i] = self.cells[i].toggled();
        }
    }

    pub fn fill(&mut self, occ: Occupancy) {
        self.cells.fill(occ);
    }

    /// Open every cell.
    pub fn clear(&mut self) {
        self.fill(Occupancy::Open);
    }

    /// Count how many cells equal `occ`.
    pub fn count(&self, occ: Occupancy) -> usize {
        self.cells.iter().filter(|&&c| c == occ).count()
    }

    /// Iterate over `(Point, Occupancy)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Occupancy)> + '_ {
        self.bounds.cells().zip(self.cells.iter().copied())
    }

    /// Open cells in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.iter()
            .filter(|&(_, c)| c == Occupancy::Open)
            .map(|(p, _)| p)
    }
}

impl GridQuery for OccupancyGrid {
    fn bounds(&self) -> Extent {
        self.bounds
    }

    fn is_blocked(&self, p: Point) -> bool {
        self.at(p) != Some(Occupancy::Open)
    }
}

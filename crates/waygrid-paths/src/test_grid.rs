//! Minimal [`GridQuery`] for unit tests: `#` is blocked, anything else open.

use std::collections::HashSet;

use waygrid_core::{Extent, Point};

use crate::GridQuery;

pub(crate) struct TestGrid {
    bounds: Extent,
    blocked: HashSet<Point>,
}

impl TestGrid {
    pub(crate) fn open(width: i32, height: i32) -> Self {
        Self {
            bounds: Extent::new(width, height),
            blocked: HashSet::new(),
        }
    }

    pub(crate) fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |r| r.len()) as i32;
        let mut grid = Self::open(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch == '#' {
                    grid.block(Point::new(x as i32, y as i32));
                }
            }
        }
        grid
    }

    pub(crate) fn block(&mut self, p: Point) {
        self.blocked.insert(p);
    }
}

impl GridQuery for TestGrid {
    fn bounds(&self) -> Extent {
        self.bounds
    }

    fn is_blocked(&self, p: Point) -> bool {
        !self.bounds.contains(p) || self.blocked.contains(&p)
    }
}

#[test]
fn neighbors_are_clipped_and_sorted() {
    let grid = TestGrid::from_rows(&["..", ".#"]);
    let mut buf = Vec::new();
    grid.neighbors(Point::new(0, 0), &mut buf);
    assert_eq!(buf, vec![Point::new(0, 1), Point::new(1, 0), Point::new(1, 1)]);

    buf.clear();
    grid.open_neighbors(Point::new(0, 0), &mut buf);
    assert_eq!(buf, vec![Point::new(0, 1), Point::new(1, 0)]);
}

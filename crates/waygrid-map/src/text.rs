//! Plain-text grids: one character per cell, one line per row.
//!
//! `o`/`.` are open and `x`/`#` are blocked. Rendering always uses `o` and
//! `x`, with `.` marking the cells of a route.

use std::collections::HashSet;
use std::fmt;

use waygrid_core::Point;

use crate::grid::{Occupancy, OccupancyGrid};

const ROUTE_CHAR: char = '.';

impl OccupancyGrid {
    /// Parse a grid from text.
    ///
    /// Leading/trailing whitespace is trimmed from the whole string but not
    /// from individual lines. Every line must have the same width.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let s = s.trim();
        let rows: Vec<&str> = s.lines().collect();
        let width = rows.first().map_or(0, |r| r.chars().count());
        if rows.iter().any(|r| r.chars().count() != width) {
            return Err(ParseError::InconsistentWidth(s.to_string()));
        }

        let mut grid = OccupancyGrid::new(width as i32, rows.len() as i32);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                let pos = Point::new(x as i32, y as i32);
                let occ = Occupancy::from_char(ch).ok_or(ParseError::InvalidChar { ch, pos })?;
                grid.set(pos, occ);
            }
        }
        Ok(grid)
    }

    /// Render the grid with every cell of `route` drawn as `.`.
    pub fn render_with_route(&self, route: &[Point]) -> String {
        let on_route: HashSet<Point> = route.iter().copied().collect();
        self.render(|p, occ| {
            if on_route.contains(&p) {
                ROUTE_CHAR
            } else {
                occ.to_char()
            }
        })
    }

    fn render(&self, mut cell: impl FnMut(Point, Occupancy) -> char) -> String {
        let mut out = String::with_capacity(self.bounds().len() + self.height() as usize);
        for (p, occ) in self.iter() {
            out.push(cell(p, occ));
            if p.x == self.width() - 1 {
                out.push('\n');
            }
        }
        out
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(|_, occ| occ.to_char()))
    }
}

/// Errors that can occur when parsing a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Lines have different widths.
    InconsistentWidth(String),
    /// A character that is neither open nor blocked.
    InvalidChar { ch: char, pos: Point },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentWidth(s) => write!(f, "grid: inconsistent line width:\n{s}"),
            Self::InvalidChar { ch, pos } => {
                write!(f, "grid: invalid cell '{ch}' at {pos}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

//! Random obstacle placement.
//!
//! The random source is always supplied by the caller, so a seeded RNG
//! gives a reproducible grid.

use rand::{Rng, RngExt};
use waygrid_core::Point;

use crate::grid::{Occupancy, OccupancyGrid};

/// Random grid population driven by an injected RNG.
pub struct Populator<R: Rng> {
    pub rng: R,
}

impl<R: Rng> Populator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Block `n_blocked` uniformly chosen cells.
    ///
    /// Cells are drawn with replacement, so fewer than `n_blocked` distinct
    /// cells may end up blocked. Asking for more cells than the grid holds
    /// blocks every cell. Existing obstacles are left in place.
    pub fn populate(&mut self, grid: &mut OccupancyGrid, n_blocked: usize) {
        let bounds = grid.bounds();
        if bounds.is_empty() {
            return;
        }
        if n_blocked > bounds.len() {
            log::debug!(
                "populate: {n_blocked} exceeds {} cells, blocking all",
                bounds.len()
            );
            grid.fill(Occupancy::Blocked);
            return;
        }
        for _ in 0..n_blocked {
            let p = Point::new(
                self.rng.random_range(0..bounds.width()),
                self.rng.random_range(0..bounds.height()),
            );
            grid.set(p, Occupancy::Blocked);
        }
    }

    /// Pick a uniformly random open cell, or `None` if every cell is blocked.
    pub fn random_open_point(&mut self, grid: &OccupancyGrid) -> Option<Point> {
        let open = grid.count(Occupancy::Open);
        if open == 0 {
            return None;
        }
        let k = self.rng.random_range(0..open);
        grid.open_cells().nth(k)
    }
}

use waygrid_core::{Extent, Point};

use crate::router;

/// An ordered sequence of cells from origin to destination.
///
/// An empty route is the only failure signal.
pub type Route = Vec<Point>;

/// Read-only view of an occupancy grid.
pub trait GridQuery {
    /// Extent of the grid. Neighbor enumeration is clipped to it.
    fn bounds(&self) -> Extent;

    /// Whether `p` cannot be entered. Points outside [`bounds`](Self::bounds)
    /// must report `true`.
    fn is_blocked(&self, p: Point) -> bool;

    /// Append the in-bounds 8-way neighbors of `p` into `buf`, in ascending
    /// point order. `p` itself is never included. The caller clears `buf`.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        let bounds = self.bounds();
        buf.extend(p.neighbors_8().into_iter().filter(|&n| bounds.contains(n)));
    }

    /// Same as [`neighbors`](Self::neighbors), keeping only open cells.
    fn open_neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        let bounds = self.bounds();
        buf.extend(
            p.neighbors_8()
                .into_iter()
                .filter(|&n| bounds.contains(n) && !self.is_blocked(n)),
        );
    }
}

/// A single-pair search strategy, with multi-waypoint routing built on top.
///
/// Only [`search`](Self::search) is required. Both routing methods run one
/// search per leg, strictly in sequence, and discard the whole route as
/// soon as any leg fails.
pub trait PathFinder {
    /// Find a route from `from` to `to`, or an empty route if there is none.
    fn search<G: GridQuery + ?Sized>(&mut self, grid: &G, from: Point, to: Point) -> Route;

    /// Visit `waypoints` in the given order.
    ///
    /// Legs are concatenated as returned, so each interior waypoint appears
    /// twice: once at the end of a leg and once at the start of the next.
    /// Fewer than two waypoints yields an empty route.
    fn route_in_order<G: GridQuery + ?Sized>(&mut self, grid: &G, waypoints: &[Point]) -> Route {
        if waypoints.len() < 2 {
            log::debug!("route_in_order: need at least 2 waypoints, got {}", waypoints.len());
            return Route::new();
        }
        router::chain(self, grid, waypoints)
    }

    /// Start at the first waypoint, end at the last, and visit the interior
    /// waypoints furthest-from-destination first (Manhattan distance).
    ///
    /// See [`order_by_distance`](crate::order_by_distance) for the exact
    /// visiting order.
    fn route_by_distance<G: GridQuery + ?Sized>(
        &mut self,
        grid: &G,
        waypoints: &[Point],
    ) -> Route {
        match waypoints {
            [] | [_] => {
                log::debug!(
                    "route_by_distance: need at least 2 waypoints, got {}",
                    waypoints.len()
                );
                Route::new()
            }
            [from, to] => self.search(grid, *from, *to),
            _ => router::chain(self, grid, &router::order_by_distance(waypoints)),
        }
    }
}

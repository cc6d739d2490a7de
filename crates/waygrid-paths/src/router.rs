//! Multi-waypoint routing on top of a single-pair [`PathFinder`].

use std::cmp::Reverse;

use waygrid_core::Point;

use crate::traits::{GridQuery, PathFinder, Route};

/// Search each consecutive pair of `stops` in turn and concatenate the legs.
///
/// Any failed leg empties the whole route.
pub(crate) fn chain<F, G>(finder: &mut F, grid: &G, stops: &[Point]) -> Route
where
    F: PathFinder + ?Sized,
    G: GridQuery + ?Sized,
{
    let mut route = Route::new();
    for (i, leg) in stops.windows(2).enumerate() {
        let path = finder.search(grid, leg[0], leg[1]);
        if path.is_empty() {
            log::debug!("route: leg {i} {} -> {} failed, dropping route", leg[0], leg[1]);
            return Route::new();
        }
        route.extend(path);
    }
    route
}

/// The order in which [`PathFinder::route_by_distance`] visits `waypoints`.
///
/// The first and last waypoints stay in place. Interior waypoints are sorted
/// by Manhattan distance to the last one, furthest first; equal distances
/// keep their input order. Lists of two or fewer are returned unchanged.
pub fn order_by_distance(waypoints: &[Point]) -> Vec<Point> {
    let [origin, midpoints @ .., destination] = waypoints else {
        return waypoints.to_vec();
    };
    if midpoints.is_empty() {
        return waypoints.to_vec();
    }
    let mut sorted = midpoints.to_vec();
    // sort_by_key is stable
    sorted.sort_by_key(|p| Reverse(p.manhattan(*destination)));

    let mut order = Vec::with_capacity(waypoints.len());
    order.push(*origin);
    order.extend(sorted);
    order.push(*destination);
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_grid::TestGrid;
    use crate::AStar;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    /// Returns `[from, to]` for every leg unless `to` is listed as failing,
    /// and records the legs it was asked for.
    #[derive(Default)]
    struct Recorder {
        legs: Vec<(Point, Point)>,
        fail_into: Vec<Point>,
    }

    impl PathFinder for Recorder {
        fn search<G: GridQuery + ?Sized>(&mut self, _grid: &G, from: Point, to: Point) -> Route {
            self.legs.push((from, to));
            if self.fail_into.contains(&to) {
                return Route::new();
            }
            vec![from, to]
        }
    }

    #[test]
    fn order_furthest_first() {
        let end = p(10, 0);
        let near = p(9, 0);
        let far = p(0, 5);
        let mid = p(5, 0);
        let order = order_by_distance(&[p(0, 0), near, far, mid, end]);
        assert_eq!(order, vec![p(0, 0), far, mid, near, end]);
    }

    #[test]
    fn order_ties_keep_input_order() {
        let end = p(0, 0);
        let a = p(3, 0);
        let b = p(0, 3);
        let c = p(1, 2);
        assert_eq!(order_by_distance(&[p(9, 9), a, b, c, end]), vec![p(9, 9), a, b, c, end]);
        assert_eq!(order_by_distance(&[p(9, 9), c, a, b, end]), vec![p(9, 9), c, a, b, end]);
    }

    #[test]
    fn order_short_lists_unchanged() {
        assert_eq!(order_by_distance(&[]), Vec::<Point>::new());
        assert_eq!(order_by_distance(&[p(1, 1)]), vec![p(1, 1)]);
        assert_eq!(order_by_distance(&[p(1, 1), p(2, 2)]), vec![p(1, 1), p(2, 2)]);
    }

    #[test]
    fn too_few_waypoints_never_search() {
        let grid = TestGrid::open(4, 4);
        let mut rec = Recorder::default();
        assert!(rec.route_in_order(&grid, &[]).is_empty());
        assert!(rec.route_in_order(&grid, &[p(1, 1)]).is_empty());
        assert!(rec.route_by_distance(&grid, &[p(1, 1)]).is_empty());
        assert!(rec.legs.is_empty());
    }

    #[test]
    fn in_order_visits_consecutive_pairs() {
        let grid = TestGrid::open(4, 4);
        let mut rec = Recorder::default();
        let route = rec.route_in_order(&grid, &[p(0, 0), p(3, 3), p(1, 2)]);
        assert_eq!(rec.legs, vec![(p(0, 0), p(3, 3)), (p(3, 3), p(1, 2))]);
        assert_eq!(route, vec![p(0, 0), p(3, 3), p(3, 3), p(1, 2)]);
    }

    #[test]
    fn failed_leg_discards_everything() {
        let grid = TestGrid::open(4, 4);
        let mut rec = Recorder {
            fail_into: vec![p(2, 2)],
            ..Default::default()
        };
        let route = rec.route_in_order(&grid, &[p(0, 0), p(1, 1), p(2, 2), p(3, 3)]);
        assert!(route.is_empty());
        // Stops at the first failure.
        assert_eq!(rec.legs.len(), 2);

        rec.legs.clear();
        assert!(rec
            .route_by_distance(&grid, &[p(0, 0), p(2, 2), p(1, 1), p(3, 3)])
            .is_empty());
    }

    #[test]
    fn by_distance_with_two_is_a_direct_search() {
        let grid = TestGrid::from_rows(&["....", ".##.", "...."]);
        let mut astar = AStar::new();
        let direct = astar.search(&grid, p(0, 0), p(3, 2));
        assert_eq!(astar.route_by_distance(&grid, &[p(0, 0), p(3, 2)]), direct);

        let mut rec = Recorder::default();
        rec.route_by_distance(&grid, &[p(0, 0), p(3, 2)]);
        assert_eq!(rec.legs, vec![(p(0, 0), p(3, 2))]);
    }

    #[test]
    fn by_distance_visits_far_midpoint_first() {
        let grid = TestGrid::open(8, 8);
        let start = p(0, 7);
        let end = p(7, 7);
        let p1 = p(0, 0); // 14 from end
        let p2 = p(6, 6); // 2 from end
        let mut rec = Recorder::default();
        rec.route_by_distance(&grid, &[start, p2, p1, end]);
        assert_eq!(rec.legs, vec![(start, p1), (p1, p2), (p2, end)]);
    }

    #[test]
    fn in_order_matches_concatenated_searches() {
        let grid = TestGrid::from_rows(&[
            "........",
            "..###...",
            "....#...",
            "....#...",
            "........",
        ]);
        let (a, b, c) = (p(0, 0), p(6, 2), p(1, 4));
        let mut astar = AStar::new();
        let mut expected = astar.search(&grid, a, b);
        expected.extend(astar.search(&grid, b, c));
        assert!(!expected.is_empty());
        assert_eq!(astar.route_in_order(&grid, &[a, b, c]), expected);
    }

    #[test]
    fn in_order_with_unreachable_leg_is_empty() {
        let mut grid = TestGrid::open(5, 5);
        for x in 0..5 {
            grid.block(p(x, 2));
        }
        let mut astar = AStar::new();
        assert!(!astar.search(&grid, p(0, 0), p(4, 1)).is_empty());
        assert!(astar
            .route_in_order(&grid, &[p(0, 0), p(4, 1), p(4, 4)])
            .is_empty());
    }
}

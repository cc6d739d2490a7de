//! A* search and waypoint routing on 2D occupancy grids.
//!
//! - **A\*** single-pair search ([`AStar`], via [`PathFinder::search`])
//! - **Ordered waypoints** ([`PathFinder::route_in_order`])
//! - **Furthest-first waypoints** ([`PathFinder::route_by_distance`])
//!
//! The grid itself is not owned here. Anything implementing [`GridQuery`]
//! (occupancy lookup plus bounds) can be searched, and every failure is
//! reported as an empty [`Route`].
//!
//! # Trait hierarchy
//!
//! | Trait | Role |
//! |---|---|
//! | [`GridQuery`] | read-only occupancy and 8-way neighbors |
//! | [`PathFinder`] | single-pair search; waypoint routing for free |

mod astar;
mod costs;
mod node;
mod router;
mod traits;

#[cfg(test)]
mod test_grid;

pub use astar::{AStar, Relaxation, SearchOutcome};
pub use costs::{CostError, MoveCosts, DEFAULT_CARDINAL_COST, DEFAULT_DIAGONAL_COST};
pub use node::{NodeArena, NodeId, NodeState, SearchNode};
pub use router::order_by_distance;
pub use traits::{GridQuery, PathFinder, Route};

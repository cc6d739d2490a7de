use waygrid_core::Point;

use crate::costs::{CostError, MoveCosts};
use crate::node::{NodeArena, NodeId, NodeState, SearchNode};
use crate::traits::{GridQuery, PathFinder, Route};

/// What to do when a cheaper way into an already-open node is found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Relaxation {
    /// Re-parent the node and lower its `g`, keeping `f = heuristic + g`
    /// accurate for later selections.
    #[default]
    Full,
    /// Re-parent the node but keep the `g` it was discovered with. Selection
    /// order then follows the first-seen cost.
    ParentOnly,
}

/// A successful search with diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Cells from origin to destination inclusive.
    pub route: Route,
    /// Movement cost along `route`.
    pub cost: i32,
    /// Nodes moved to the closed set, not counting the origin.
    pub expanded: usize,
}

/// State left behind by one run of the main loop.
pub(crate) struct Exploration {
    pub(crate) arena: NodeArena,
    /// Last node taken from the open set (the origin if none was).
    pub(crate) tip: NodeId,
    pub(crate) expanded: usize,
    pub(crate) relaxed: usize,
}

/// A* search over an 8-connected occupancy grid.
///
/// The heuristic is the Manhattan distance to the destination. The search
/// stops as soon as it expands a cell adjacent to the destination, then
/// steps onto it. Node storage lives only for the duration of one call.
#[derive(Debug, Clone, Default)]
pub struct AStar {
    costs: MoveCosts,
    relaxation: Relaxation,
    // scratch buffer for neighbor queries
    nbuf: Vec<Point>,
}

impl AStar {
    /// A* with the default 10/14 costs and full relaxation.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_costs(costs: MoveCosts) -> Self {
        Self {
            costs,
            ..Self::default()
        }
    }

    #[inline]
    pub fn costs(&self) -> MoveCosts {
        self.costs
    }

    pub fn set_costs(&mut self, costs: MoveCosts) {
        self.costs = costs;
    }

    /// Override the cardinal step cost for subsequent searches.
    pub fn set_cardinal_cost(&mut self, cost: i32) -> Result<(), CostError> {
        self.costs = MoveCosts::new(cost, self.costs.diagonal())?;
        Ok(())
    }

    /// Override the diagonal step cost for subsequent searches.
    pub fn set_diagonal_cost(&mut self, cost: i32) -> Result<(), CostError> {
        self.costs = MoveCosts::new(self.costs.cardinal(), cost)?;
        Ok(())
    }

    #[inline]
    pub fn relaxation(&self) -> Relaxation {
        self.relaxation
    }

    pub fn set_relaxation(&mut self, relaxation: Relaxation) {
        self.relaxation = relaxation;
    }

    /// Search from `from` to `to`, returning the route with its cost.
    ///
    /// Returns `None` when either endpoint is blocked or off the grid, when
    /// `from` has no open neighbor, or when the open set runs dry before a
    /// cell next to `to` is expanded. Searching from a cell to itself gives
    /// the one-cell route.
    pub fn search_detailed<G: GridQuery + ?Sized>(
        &mut self,
        grid: &G,
        from: Point,
        to: Point,
    ) -> Option<SearchOutcome> {
        if grid.is_blocked(from) || grid.is_blocked(to) {
            log::debug!("astar: blocked endpoint, {from} -> {to}");
            return None;
        }
        if from == to {
            return Some(SearchOutcome {
                route: vec![from],
                cost: 0,
                expanded: 0,
            });
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let explored = self.explore(grid, from, to, &mut nbuf);
        self.nbuf = nbuf;
        let explored = explored?;

        let tip = explored.arena.get(explored.tip);
        // Every closed node was the tip at some point, and the loop stops at
        // the first one next to `to`.
        if !tip.pos.is_adjacent(to) {
            log::debug!(
                "astar: no route {from} -> {to} after {} expansions",
                explored.expanded
            );
            return None;
        }

        let mut route = explored.arena.trace(explored.tip);
        route.push(to);
        let cost = self.costs.route_cost(&route);
        log::debug!(
            "astar: {from} -> {to}, {} cells, cost {cost}, {} expanded, {} relaxed",
            route.len(),
            explored.expanded,
            explored.relaxed
        );
        Some(SearchOutcome {
            route,
            cost,
            expanded: explored.expanded,
        })
    }

    /// Run the main loop. `None` means the origin is walled in.
    pub(crate) fn explore<G: GridQuery + ?Sized>(
        &self,
        grid: &G,
        from: Point,
        to: Point,
        nbuf: &mut Vec<Point>,
    ) -> Option<Exploration> {
        nbuf.clear();
        grid.open_neighbors(from, nbuf);
        if nbuf.is_empty() {
            log::debug!("astar: origin {from} has no open neighbor");
            return None;
        }
        nbuf.sort_unstable();

        let mut arena = NodeArena::new();
        let origin = arena.insert(SearchNode {
            pos: from,
            heuristic: from.manhattan(to),
            g: 0,
            parent: None,
            state: NodeState::Closed,
        });
        for &np in nbuf.iter() {
            arena.insert(SearchNode {
                pos: np,
                heuristic: np.manhattan(to),
                g: self.costs.step(from, np),
                parent: Some(origin),
                state: NodeState::Open,
            });
        }

        let mut tip = origin;
        let mut expanded = 0;
        let mut relaxed = 0;

        while !arena.get(tip).pos.is_adjacent(to) {
            let Some(current) = arena.close_min() else {
                break;
            };
            tip = current;
            expanded += 1;

            let (cp, cg) = {
                let n = arena.get(current);
                (n.pos, n.g)
            };
            log::trace!("astar: expand {cp} g={cg} open={}", arena.open_len());

            nbuf.clear();
            grid.open_neighbors(cp, nbuf);
            nbuf.sort_unstable();

            for &np in nbuf.iter() {
                let tentative_g = cg.saturating_add(self.costs.step(cp, np));
                let Some(ni) = arena.lookup(np) else {
                    arena.insert(SearchNode {
                        pos: np,
                        heuristic: np.manhattan(to),
                        g: tentative_g,
                        parent: Some(current),
                        state: NodeState::Open,
                    });
                    continue;
                };

                let n = arena.get_mut(ni);
                if n.state == NodeState::Closed || tentative_g >= n.g {
                    continue;
                }
                n.parent = Some(current);
                relaxed += 1;
                if self.relaxation == Relaxation::Full {
                    n.g = tentative_g;
                    arena.requeue(ni);
                }
            }
        }

        Some(Exploration {
            arena,
            tip,
            expanded,
            relaxed,
        })
    }
}

impl PathFinder for AStar {
    fn search<G: GridQuery + ?Sized>(&mut self, grid: &G, from: Point, to: Point) -> Route {
        self.search_detailed(grid, from, to)
            .map(|outcome| outcome.route)
            .unwrap_or_default()
    }
}

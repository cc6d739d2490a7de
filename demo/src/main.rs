//! Console demo: route a fixed list of waypoints across a randomly
//! populated grid, in given order and furthest-first.
//!
//! Usage: `waygrid [SEED] [BLOCKED]`. Set `RUST_LOG=debug` to see each
//! search.

use std::error::Error;

use rand::SeedableRng;
use rand::rngs::StdRng;
use waygrid_core::Point;
use waygrid_map::{Occupancy, OccupancyGrid, Populator};
use waygrid_paths::{AStar, PathFinder, order_by_distance};

const WIDTH: i32 = 10;
const HEIGHT: i32 = 12;
const WAYPOINTS: [Point; 6] = [
    Point::new(5, 5),
    Point::new(3, 11),
    Point::new(8, 3),
    Point::new(3, 3),
    Point::new(0, 0),
    Point::new(7, 1),
];

#[derive(Debug, Clone, PartialEq, Eq)]
struct DemoConfig {
    seed: u64,
    blocked: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            blocked: 0,
        }
    }
}

impl DemoConfig {
    /// Positional arguments: seed, then number of cells to block.
    fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self, Box<dyn Error>> {
        let mut config = Self::default();
        if let Some(seed) = args.next() {
            config.seed = seed.parse()?;
        }
        if let Some(blocked) = args.next() {
            config.blocked = blocked.parse()?;
        }
        Ok(config)
    }
}

fn build_grid(config: &DemoConfig) -> OccupancyGrid {
    let mut grid = OccupancyGrid::new(WIDTH, HEIGHT);
    let mut populator = Populator::new(StdRng::seed_from_u64(config.seed));
    populator.populate(&mut grid, config.blocked);
    // Waypoints must stay enterable.
    for p in WAYPOINTS {
        grid.set(p, Occupancy::Open);
    }
    grid
}

fn report(astar: &AStar, grid: &OccupancyGrid, title: &str, route: &[Point]) {
    println!("{title}:");
    if route.is_empty() {
        println!("no route\n");
        return;
    }
    print!("{}", grid.render_with_route(route));
    println!(
        "{} cells, cost {}\n",
        route.len(),
        astar.costs().route_cost(route)
    );
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let config = DemoConfig::from_args(std::env::args().skip(1))?;
    log::info!("seed {}, blocking {} cells", config.seed, config.blocked);

    let grid = build_grid(&config);
    let mut astar = AStar::new();

    let in_order = astar.route_in_order(&grid, &WAYPOINTS);
    let by_distance = astar.route_by_distance(&grid, &WAYPOINTS);

    println!("{}", grid.size());
    println!("{grid}");
    report(&astar, &grid, "in order", &in_order);
    let order: Vec<String> = order_by_distance(&WAYPOINTS)
        .iter()
        .map(|p| p.to_string())
        .collect();
    report(
        &astar,
        &grid,
        &format!("furthest first {}", order.join(" ")),
        &by_distance,
    );
    Ok(())
}

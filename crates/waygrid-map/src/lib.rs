//! Occupancy grids for waygrid: cell storage, random population and a
//! plain-text format.
//!
//! [`OccupancyGrid`] implements [`waygrid_paths::GridQuery`], so it can be
//! handed straight to [`waygrid_paths::AStar`].

pub mod grid;
pub mod populate;
pub mod text;

pub use grid::{Occupancy, OccupancyGrid};
pub use populate::Populator;
pub use text::ParseError;

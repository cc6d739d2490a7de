//! **waygrid-core**: geometry shared by the *waygrid* crates.
//!
//! A [`Point`] names one grid cell and an [`Extent`] gives the size of a
//! grid anchored at (0, 0). Both are plain `Copy` values.

pub mod geom;

pub use geom::{Extent, Point};

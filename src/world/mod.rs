//! World-space partitioning

mod grid;

pub use grid::WorldGrid;

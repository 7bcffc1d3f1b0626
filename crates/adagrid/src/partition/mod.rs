//! Adaptive rectangular partitioning of weighted point sets.
//!
//! Purpose
//! - Build the "nested adaptive grid": recursively median-split the bounding box
//!   of a point set until no cell can be split without dropping a child below
//!   `min_count` points.
//! - Provide the regular square grid as a fixed-size baseline with the same
//!   output type, so consumers (density maps, CSV export) treat both alike.
//!
//! Why this design
//! - An explicit frontier of cells that own index lists replaces group-wise
//!   table mutation; each round maps over the frontier independently, which is
//!   what makes the optional `parallel` feature a drop-in.
//! - The split tree is kept alongside the cells so `Partition::locate` assigns
//!   locations exactly like the points were assigned.
//!
//! Layout: `types.rs` (data types), `build.rs` (adaptive grid), `grid.rs`
//! (regular grid).

mod build;
mod grid;
mod types;

pub use build::{partition, partition_with_min_count};
pub use grid::regular_grid;
pub use types::{Cell, Partition, PartitionCfg, PartitionError, PartitionSummary};

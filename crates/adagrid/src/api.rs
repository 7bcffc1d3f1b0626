//! Curated internal API (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for the CLI, the
//!   Python bindings and the benches. Breaking changes are allowed and expected.

// 2D geometry
pub use crate::geom2::{median_in_place, Axis, Rect, WeightedPoint};
// Seeded samplers
pub use crate::geom2::rand::{
    sample_clustered, sample_uniform, ClusteredCfg, ReplayToken as SampleReplay, SampleError,
    UniformCfg,
};
// Partitioners
pub use crate::partition::{
    partition, partition_with_min_count, regular_grid, Cell, Partition, PartitionCfg,
    PartitionError, PartitionSummary,
};
pub use crate::points_from_triples;

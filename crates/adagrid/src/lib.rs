//! Adaptive rectangular partitioning of weighted 2D point sets.
//!
//! The core is the nested adaptive grid (`partition`): median splits along the
//! longer side until every cell holds between `min_count` and roughly
//! `2 * min_count` points. A regular square grid (`regular_grid`) is provided as
//! the fixed-size baseline, and seeded samplers (`geom2::rand`) produce
//! reproducible inputs.
//!
//! API Policy
//! - The crate is used by the CLI and the Python bindings in this workspace.
//!   There is no stable public API; `api` is the curated surface.

pub mod api;
pub mod geom2;
mod maybe_rayon;
pub mod partition;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom2::{Axis, Rect, WeightedPoint};
pub use partition::{partition, regular_grid, Cell, Partition, PartitionCfg, PartitionError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geom2::rand::{
        sample_clustered, sample_uniform, ClusteredCfg, ReplayToken, SampleError, UniformCfg,
    };
    pub use crate::geom2::{Axis, Rect, WeightedPoint};
    pub use crate::partition::{
        partition, partition_with_min_count, regular_grid, Cell, Partition, PartitionCfg,
        PartitionError, PartitionSummary,
    };
    pub use nalgebra::Vector2 as Vec2;
}

/// Collect `(x, y, weight)` triples into points.
#[inline]
pub fn points_from_triples<I>(triples: I) -> Vec<WeightedPoint>
where
    I: IntoIterator<Item = (f64, f64, f64)>,
{
    triples.into_iter().map(WeightedPoint::from).collect()
}

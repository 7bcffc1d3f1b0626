//! Planar geometry for weighted point sets.
//!
//! Purpose
//! - Provide the small set of types the partitioners need: weighted points,
//!   closed axis-aligned rectangles and a split axis.
//! - Keep selection-based medians and index splitting next to the types so the
//!   partitioners stay readable.
//!
//! Everything heavier (polygons, CRS, rendering) belongs to downstream geometry
//! libraries; `Rect::corners` is the hand-off point.

pub mod rand;
mod types;
mod util;

pub use types::{Axis, Rect, WeightedPoint};
pub use util::{median_along, median_in_place, split_indices, weight_sum};

#[cfg(test)]
mod tests;

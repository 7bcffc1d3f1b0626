//! Data types for partitions and their configuration.
//!
//! Kept small and explicit to make `build` and `grid` easy to read.

use std::collections::HashMap;
use std::fmt;

use nalgebra::Vector2;

use crate::geom2::{Axis, Rect};

/// Partitioner configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PartitionCfg {
    /// Minimum number of points in any leaf cell. Must be > 0.
    pub min_count: usize,
    /// Split axis when a cell is exactly as wide as it is high.
    pub tie_axis: Axis,
}

impl PartitionCfg {
    pub fn with_min_count(min_count: usize) -> Self {
        Self {
            min_count,
            ..Self::default()
        }
    }
}

impl Default for PartitionCfg {
    fn default() -> Self {
        Self {
            min_count: 10,
            tie_axis: Axis::X,
        }
    }
}

/// Errors surfaced by the partitioners. All of them are input-validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartitionError {
    InvalidArgument { reason: String },
}

impl PartitionError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for PartitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
        }
    }
}

impl std::error::Error for PartitionError {}

/// A rectangle together with the input points it owns.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub rect: Rect,
    /// Indices into the input slice, ascending.
    pub points: Vec<usize>,
    pub count: usize,
    pub weight_sum: f64,
    /// Number of splits between the root and this cell.
    pub depth: u32,
}

impl Cell {
    /// Weight per unit area; `None` for zero-area cells.
    pub fn density(&self) -> Option<f64> {
        let area = self.rect.area();
        if area > 0.0 {
            Some(self.weight_sum / area)
        } else {
            None
        }
    }
}

/// Node of the split tree used for point location.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum SplitNode {
    /// Index into `Partition::cells`.
    Leaf(usize),
    /// `coord <= at` descends into `low`, otherwise into `high` (node indices).
    Split {
        axis: Axis,
        at: f64,
        low: usize,
        high: usize,
    },
}

/// Lookup structure behind `Partition::locate`.
#[derive(Clone, Debug)]
pub(crate) enum Locator {
    /// Root at index 0.
    Tree(Vec<SplitNode>),
    Grid {
        origin: Vector2<f64>,
        size: f64,
        /// `(column, row)` → cell index; empty grid cells are absent.
        lookup: HashMap<(i64, i64), usize>,
    },
}

/// Final set of cells covering `bounds`.
#[derive(Clone, Debug)]
pub struct Partition {
    /// Sorted by `(y_min, x_min, y_max, x_max)`.
    pub cells: Vec<Cell>,
    /// Bounding box of the input points.
    pub bounds: Rect,
    pub min_count: usize,
    /// Refinement rounds in which at least one cell was split.
    pub rounds: usize,
    pub(crate) locator: Locator,
}

/// Aggregate numbers for logs and reports.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PartitionSummary {
    pub cells: usize,
    pub rounds: usize,
    pub total_count: usize,
    pub total_weight: f64,
    pub min_cell_count: usize,
    pub max_cell_count: usize,
    pub max_depth: u32,
}

impl Partition {
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn total_count(&self) -> usize {
        self.cells.iter().map(|c| c.count).sum()
    }

    pub fn total_weight(&self) -> f64 {
        self.cells.iter().map(|c| c.weight_sum).sum()
    }

    /// Index of the cell owning location `(x, y)`.
    ///
    /// Locations on a shared edge resolve the same way input points are assigned
    /// (to the low side of the split). Returns `None` outside the covered area.
    pub fn locate(&self, x: f64, y: f64) -> Option<usize> {
        let p = Vector2::new(x, y);
        match &self.locator {
            Locator::Tree(nodes) => {
                if !self.bounds.contains(p) {
                    return None;
                }
                let mut k = 0;
                loop {
                    match *nodes.get(k)? {
                        SplitNode::Leaf(cell) => return Some(cell),
                        SplitNode::Split {
                            axis,
                            at,
                            low,
                            high,
                        } => {
                            k = if axis.coord(p) <= at { low } else { high };
                        }
                    }
                }
            }
            Locator::Grid {
                origin,
                size,
                lookup,
            } => {
                let key = super::grid::grid_key(p, *origin, *size)?;
                lookup.get(&key).copied()
            }
        }
    }

    pub fn summary(&self) -> PartitionSummary {
        PartitionSummary {
            cells: self.cells.len(),
            rounds: self.rounds,
            total_count: self.total_count(),
            total_weight: self.total_weight(),
            min_cell_count: self.cells.iter().map(|c| c.count).min().unwrap_or(0),
            max_cell_count: self.cells.iter().map(|c| c.count).max().unwrap_or(0),
            max_depth: self.cells.iter().map(|c| c.depth).max().unwrap_or(0),
        }
    }
}

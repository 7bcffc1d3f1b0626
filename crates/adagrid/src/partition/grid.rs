//! Regular square grid aggregation, the fixed-size baseline for the adaptive grid.
//!
//! The grid is anchored at the lower-left corner of the bounding box. Cell
//! `(i, j)` covers `[x0 + i*s, x0 + (i+1)*s) × [y0 + j*s, y0 + (j+1)*s)`; only
//! non-empty cells are emitted.

use std::collections::{BTreeMap, HashMap};

use nalgebra::Vector2;

use crate::geom2::{weight_sum, Rect, WeightedPoint};

use super::build::validated_bounds;
use super::types::{Cell, Locator, Partition, PartitionError};

/// Largest cell index per axis; keeps indices exact as `f64` and inside `i64`.
const MAX_INDEX: f64 = 9_007_199_254_740_992.0;

/// Bin `points` into `cell_size` squares.
///
/// Errors: empty input, non-finite points, `cell_size` not finite and > 0, or a
/// `cell_size` too small to index the extent of the points.
pub fn regular_grid(
    points: &[WeightedPoint],
    cell_size: f64,
) -> Result<Partition, PartitionError> {
    if !(cell_size.is_finite() && cell_size > 0.0) {
        return Err(PartitionError::invalid("cell_size must be finite and > 0"));
    }
    let bounds = validated_bounds(points)?;
    check_resolution(&bounds, cell_size)?;
    let origin = Vector2::new(bounds.x_min, bounds.y_min);

    // (row, column) ordering gives the same reading order as the adaptive grid.
    let mut bins: BTreeMap<(i64, i64), Vec<usize>> = BTreeMap::new();
    for (i, p) in points.iter().enumerate() {
        let (col, row) = grid_key(p.pos, origin, cell_size)
            .ok_or_else(|| PartitionError::invalid(format!("point {i} is outside the grid")))?;
        bins.entry((row, col)).or_default().push(i);
    }

    let mut cells = Vec::with_capacity(bins.len());
    let mut lookup = HashMap::with_capacity(bins.len());
    for ((row, col), idx) in bins {
        let (x_min, x_max) = cell_span(origin.x, col, cell_size);
        let (y_min, y_max) = cell_span(origin.y, row, cell_size);
        lookup.insert((col, row), cells.len());
        cells.push(Cell {
            rect: Rect {
                x_min,
                x_max,
                y_min,
                y_max,
            },
            count: idx.len(),
            weight_sum: weight_sum(points, &idx),
            points: idx,
            depth: 0,
        });
    }

    Ok(Partition {
        cells,
        bounds,
        min_count: 1,
        rounds: 0,
        locator: Locator::Grid {
            origin,
            size: cell_size,
            lookup,
        },
    })
}

/// Reject sizes whose cell indices would not fit, or whose cell edges
/// would collapse at the magnitude of the coordinates.
fn check_resolution(bounds: &Rect, cell_size: f64) -> Result<(), PartitionError> {
    let cols = bounds.width() / cell_size;
    let rows = bounds.height() / cell_size;
    if !(cols < MAX_INDEX && rows < MAX_INDEX) {
        return Err(PartitionError::invalid(
            "cell_size is too small for the extent of the points",
        ));
    }
    let scale = [bounds.x_min, bounds.x_max, bounds.y_min, bounds.y_max]
        .iter()
        .fold(0.0f64, |acc, v| acc.max(v.abs()));
    if cell_size <= 4.0 * f64::EPSILON * scale {
        return Err(PartitionError::invalid(
            "cell_size is below the precision of the point coordinates",
        ));
    }
    Ok(())
}

/// `[lo, hi)` covered by cell `i` along one axis.
#[inline]
fn cell_span(origin: f64, i: i64, size: f64) -> (f64, f64) {
    let lo = origin + i as f64 * size;
    (lo, lo + size)
}

fn axis_index(v: f64, origin: f64, size: f64) -> Option<i64> {
    let q = ((v - origin) / size).floor();
    if !(q.abs() <= MAX_INDEX) {
        return None;
    }
    let mut i = q as i64;
    // The division rounds independently of `cell_span`; settle on the span that holds `v`.
    let (lo, hi) = cell_span(origin, i, size);
    if v < lo {
        i -= 1;
    } else if v >= hi {
        i += 1;
    }
    Some(i)
}

/// `(column, row)` of the grid cell containing `p`; `None` beyond the index range.
#[inline]
pub(crate) fn grid_key(p: Vector2<f64>, origin: Vector2<f64>, size: f64) -> Option<(i64, i64)> {
    Some((
        axis_index(p.x, origin.x, size)?,
        axis_index(p.y, origin.y, size)?,
    ))
}

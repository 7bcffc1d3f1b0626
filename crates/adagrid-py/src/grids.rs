//! Adaptive and regular grid bindings.

use crate::common::{cells_to_py, map_partition_err, points_from_py, CellTuple};
use adagrid::api::{Axis, PartitionCfg};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Nested adaptive grid over `(x, y, weight)` points.
///
/// `min_count` is taken as a signed integer so that negative values surface as
/// `ValueError` instead of an overflow error.
#[pyfunction]
#[pyo3(signature = (points, min_count, tie_axis = "x"))]
pub fn partition(
    points: Vec<(f64, f64, f64)>,
    min_count: i64,
    tie_axis: &str,
) -> PyResult<Vec<CellTuple>> {
    if min_count <= 0 {
        return Err(PyValueError::new_err(format!(
            "invalid argument: min_count must be > 0 (got {min_count})"
        )));
    }
    let tie_axis = match tie_axis {
        "x" | "X" => Axis::X,
        "y" | "Y" => Axis::Y,
        other => {
            return Err(PyValueError::new_err(format!(
                "tie_axis must be \"x\" or \"y\" (got {other:?})"
            )))
        }
    };
    let cfg = PartitionCfg {
        min_count: usize::try_from(min_count)
            .map_err(|_| PyValueError::new_err("min_count does not fit in usize"))?,
        tie_axis,
    };
    let pts = points_from_py(points);
    let part = adagrid::api::partition(&pts, cfg).map_err(map_partition_err)?;
    Ok(cells_to_py(&part))
}

/// Regular square grid over `(x, y, weight)` points; only non-empty cells are returned.
#[pyfunction]
pub fn regular_grid(points: Vec<(f64, f64, f64)>, cell_size: f64) -> PyResult<Vec<CellTuple>> {
    let pts = points_from_py(points);
    let part = adagrid::api::regular_grid(&pts, cell_size).map_err(map_partition_err)?;
    Ok(cells_to_py(&part))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(partition, m)?)?;
    m.add_function(wrap_pyfunction!(regular_grid, m)?)?;
    Ok(())
}

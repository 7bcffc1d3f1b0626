use adagrid::api::{Partition, PartitionError, SampleError, WeightedPoint};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// One output row per cell.
pub type CellTuple = (f64, f64, f64, f64, usize, f64);

pub fn points_from_py(points: Vec<(f64, f64, f64)>) -> Vec<WeightedPoint> {
    adagrid::api::points_from_triples(points)
}

pub fn cells_to_py(part: &Partition) -> Vec<CellTuple> {
    part.cells
        .iter()
        .map(|c| {
            (
                c.rect.x_min,
                c.rect.x_max,
                c.rect.y_min,
                c.rect.y_max,
                c.count,
                c.weight_sum,
            )
        })
        .collect()
}

pub fn map_partition_err(err: PartitionError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

pub fn map_sample_err(err: SampleError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

//! Seeded sampler bindings (synthetic inputs for notebooks).

use crate::common::map_sample_err;
use adagrid::api::{
    sample_clustered as sample_clustered_rs, sample_uniform as sample_uniform_rs, ClusteredCfg,
    Rect, SampleReplay, UniformCfg,
};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(sample_uniform, m)?)?;
    m.add_function(wrap_pyfunction!(sample_clustered, m)?)?;
    Ok(())
}

fn bounds_from_py(b: (f64, f64, f64, f64)) -> PyResult<Rect> {
    Rect::new(b.0, b.1, b.2, b.3)
        .ok_or_else(|| PyValueError::new_err("bounds must be (x_min, x_max, y_min, y_max)"))
}

/// Uniform points in `bounds = (x_min, x_max, y_min, y_max)`.
#[pyfunction]
#[pyo3(signature = (n, bounds, seed, index = 0))]
fn sample_uniform(
    n: usize,
    bounds: (f64, f64, f64, f64),
    seed: u64,
    index: u64,
) -> PyResult<Vec<(f64, f64, f64)>> {
    let cfg = UniformCfg {
        bounds: bounds_from_py(bounds)?,
        ..UniformCfg::default()
    };
    let pts = sample_uniform_rs(n, cfg, SampleReplay { seed, index }).map_err(map_sample_err)?;
    Ok(pts.iter().map(|p| (p.x(), p.y(), p.weight)).collect())
}

/// Clustered "fishing grounds" in `bounds`.
#[pyfunction]
#[pyo3(signature = (n, bounds, seed, index = 0, clusters = 5, spread = 0.05))]
fn sample_clustered(
    n: usize,
    bounds: (f64, f64, f64, f64),
    seed: u64,
    index: u64,
    clusters: usize,
    spread: f64,
) -> PyResult<Vec<(f64, f64, f64)>> {
    let cfg = ClusteredCfg {
        bounds: bounds_from_py(bounds)?,
        clusters,
        spread,
        ..ClusteredCfg::default()
    };
    let pts = sample_clustered_rs(n, cfg, SampleReplay { seed, index }).map_err(map_sample_err)?;
    Ok(pts.iter().map(|p| (p.x(), p.y(), p.weight)).collect())
}

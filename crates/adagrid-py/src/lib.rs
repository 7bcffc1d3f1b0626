//! PyO3 bindings for selected `adagrid` functions.
//!
//! Notes
//! - Keep bindings thin and predictable: points go in as `(x, y, weight)` tuples,
//!   cells come out as `(x_min, x_max, y_min, y_max, count, weight_sum)` tuples.
//! - Polygon construction and plotting stay on the Python side.

use pyo3::prelude::*;

mod common;
mod grids;
mod sample;

#[pymodule]
fn adagrid_native(_py: Python, m: &PyModule) -> PyResult<()> {
    grids::register(m)?;
    sample::register(m)?;
    m.add("__version__", adagrid::VERSION)?;
    Ok(())
}

//! CSV in/out via polars: weighted points in, cells out.

use adagrid::api::{Cell, Partition, WeightedPoint};
use anyhow::{bail, Context, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

use crate::provenance::ensure_parent;

/// Column names of a point CSV.
#[derive(Clone, Debug)]
pub struct PointColumns {
    pub x: String,
    pub y: String,
    /// Weight column; every point weighs 1.0 if it is absent from the file.
    pub weight: String,
}

impl Default for PointColumns {
    fn default() -> Self {
        Self {
            x: "x".into(),
            y: "y".into(),
            weight: "weight".into(),
        }
    }
}

/// Read weighted points from a headed CSV file.
pub fn read_points(path: &Path, cols: &PointColumns) -> Result<Vec<WeightedPoint>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_csv_shape");

    let xs = f64_column(&df, &cols.x)?;
    let ys = f64_column(&df, &cols.y)?;
    let ws = if df.column(&cols.weight).is_ok() {
        f64_column(&df, &cols.weight)?
    } else {
        tracing::warn!(column = %cols.weight, "weight column missing, using unit weights");
        vec![1.0; xs.len()]
    };
    Ok(xs
        .into_iter()
        .zip(ys)
        .zip(ws)
        .map(|((x, y), w)| WeightedPoint::new(x, y, w))
        .collect())
}

fn f64_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?
        .cast(&DataType::Float64)
        .with_context(|| format!("column `{name}` is not numeric"))?;
    let mut out = Vec::with_capacity(series.len());
    for (row, v) in series.f64()?.into_iter().enumerate() {
        match v {
            Some(v) => out.push(v),
            None => bail!("column `{name}` has a missing value at row {row}"),
        }
    }
    Ok(out)
}

/// Write one row per cell: bounds, count, weight sum, depth and density (empty for zero area).
pub fn write_cells(path: &Path, part: &Partition) -> Result<()> {
    let cells = &part.cells;
    let mut df = df!(
        "x_min" => cells.iter().map(|c| c.rect.x_min).collect::<Vec<_>>(),
        "x_max" => cells.iter().map(|c| c.rect.x_max).collect::<Vec<_>>(),
        "y_min" => cells.iter().map(|c| c.rect.y_min).collect::<Vec<_>>(),
        "y_max" => cells.iter().map(|c| c.rect.y_max).collect::<Vec<_>>(),
        "count" => cells.iter().map(|c| c.count as u64).collect::<Vec<_>>(),
        "weight_sum" => cells.iter().map(|c| c.weight_sum).collect::<Vec<_>>(),
        "depth" => cells.iter().map(|c| c.depth).collect::<Vec<_>>(),
        "density" => cells.iter().map(Cell::density).collect::<Vec<_>>()
    )?;
    write_csv(path, &mut df)
}

/// Write points as `x,y,weight`.
pub fn write_points(path: &Path, points: &[WeightedPoint]) -> Result<()> {
    let mut df = df!(
        "x" => points.iter().map(|p| p.x()).collect::<Vec<_>>(),
        "y" => points.iter().map(|p| p.y()).collect::<Vec<_>>(),
        "weight" => points.iter().map(|p| p.weight).collect::<Vec<_>>()
    )?;
    write_csv(path, &mut df)
}

fn write_csv(path: &Path, df: &mut DataFrame) -> Result<()> {
    ensure_parent(path)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

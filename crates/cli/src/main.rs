use adagrid::api::{
    partition, regular_grid, sample_clustered, sample_uniform, Axis, ClusteredCfg, Partition,
    PartitionCfg, Rect, SampleReplay, UniformCfg,
};
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use io::PointColumns;
use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "adagrid-cli")]
#[command(about = "Adaptive and regular grids over weighted point CSVs")]
struct Cmd {
    /// Optional run label; propagated to provenance sidecars and logs
    #[arg(long)]
    run: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Nested adaptive grid: median splits until cells hold >= min-count points
    Partition {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long)]
        min_count: usize,
        /// Split axis for square cells
        #[arg(long, value_enum, default_value_t = TieAxis::X)]
        tie_axis: TieAxis,
        #[command(flatten)]
        cols: ColumnArgs,
    },
    /// Regular square grid with the given cell size
    Grid {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long)]
        cell_size: f64,
        #[command(flatten)]
        cols: ColumnArgs,
    },
    /// Write a synthetic weighted point CSV
    Sample {
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value_t = 1000)]
        n: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Draw clustered "fishing grounds" instead of uniform points
        #[arg(long)]
        clustered: bool,
        #[arg(long, default_value_t = 1.0)]
        width: f64,
        #[arg(long, default_value_t = 1.0)]
        height: f64,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args)]
struct ColumnArgs {
    #[arg(long, default_value = "x")]
    x_col: String,
    #[arg(long, default_value = "y")]
    y_col: String,
    /// Missing weight columns default to unit weights
    #[arg(long, default_value = "weight")]
    weight_col: String,
}

impl From<ColumnArgs> for PointColumns {
    fn from(a: ColumnArgs) -> Self {
        PointColumns {
            x: a.x_col,
            y: a.y_col,
            weight: a.weight_col,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TieAxis {
    X,
    Y,
}

impl From<TieAxis> for Axis {
    fn from(t: TieAxis) -> Self {
        match t {
            TieAxis::X => Axis::X,
            TieAxis::Y => Axis::Y,
        }
    }
}

/// Serializable mirror of `PartitionSummary` for sidecars.
#[derive(Serialize)]
struct SummaryRow {
    cells: usize,
    rounds: usize,
    total_count: usize,
    total_weight: f64,
    min_cell_count: usize,
    max_cell_count: usize,
    max_depth: u32,
}

impl From<&Partition> for SummaryRow {
    fn from(part: &Partition) -> Self {
        let s = part.summary();
        Self {
            cells: s.cells,
            rounds: s.rounds,
            total_count: s.total_count,
            total_weight: s.total_weight,
            min_cell_count: s.min_cell_count,
            max_cell_count: s.max_cell_count,
            max_depth: s.max_depth,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Partition {
            input,
            out,
            min_count,
            tie_axis,
            cols,
        } => {
            let cfg = PartitionCfg {
                min_count,
                tie_axis: tie_axis.into(),
            };
            run_partition(input, out, cfg, cols.into(), cmd.run)
        }
        Action::Grid {
            input,
            out,
            cell_size,
            cols,
        } => run_grid(input, out, cell_size, cols.into(), cmd.run),
        Action::Sample {
            out,
            n,
            seed,
            clustered,
            width,
            height,
        } => sample(out, n, seed, clustered, (width, height), cmd.run),
        Action::Report => report(cmd.run),
    }
}

fn run_partition(
    input: PathBuf,
    out: PathBuf,
    cfg: PartitionCfg,
    cols: PointColumns,
    run: Option<String>,
) -> Result<()> {
    tracing::info!(
        input = %input.display(),
        out = %out.display(),
        min_count = cfg.min_count,
        tie_axis = ?cfg.tie_axis,
        run = ?run,
        "partition"
    );
    let pts = io::read_points(&input, &cols)?;
    let part = partition(&pts, cfg).context("building adaptive grid")?;
    let params = serde_json::json!({
        "method": "adaptive",
        "input": input,
        "min_count": cfg.min_count,
        "tie_axis": format!("{:?}", cfg.tie_axis),
        "columns": [cols.x, cols.y, cols.weight],
    });
    write_outputs(&part, &out, params, run)
}

fn run_grid(
    input: PathBuf,
    out: PathBuf,
    cell_size: f64,
    cols: PointColumns,
    run: Option<String>,
) -> Result<()> {
    tracing::info!(
        input = %input.display(),
        out = %out.display(),
        cell_size,
        run = ?run,
        "grid"
    );
    let pts = io::read_points(&input, &cols)?;
    let part = regular_grid(&pts, cell_size).context("building regular grid")?;
    let params = serde_json::json!({
        "method": "regular",
        "input": input,
        "cell_size": cell_size,
        "columns": [cols.x, cols.y, cols.weight],
    });
    write_outputs(&part, &out, params, run)
}

fn write_outputs(
    part: &Partition,
    out: &Path,
    params: serde_json::Value,
    run: Option<String>,
) -> Result<()> {
    let summary = SummaryRow::from(part);
    tracing::info!(
        cells = summary.cells,
        rounds = summary.rounds,
        points = summary.total_count,
        weight = summary.total_weight,
        min_cell_count = summary.min_cell_count,
        max_cell_count = summary.max_cell_count,
        max_depth = summary.max_depth,
        "partition_summary"
    );
    io::write_cells(out, part)?;
    let payload = Payload::new(params)
        .with_summary(serde_json::to_value(&summary)?)
        .with_run(run);
    let prov = write_sidecar(out, payload)?;
    tracing::info!(cells = %out.display(), provenance = %prov.display(), "wrote");
    Ok(())
}

fn sample(
    out: PathBuf,
    n: usize,
    seed: u64,
    clustered: bool,
    (width, height): (f64, f64),
    run: Option<String>,
) -> Result<()> {
    tracing::info!(out = %out.display(), n, seed, clustered, width, height, "sample");
    let bounds = Rect::new(0.0, width, 0.0, height)
        .context("width and height must be non-negative")?;
    let tok = SampleReplay { seed, index: 0 };
    let pts = if clustered {
        let cfg = ClusteredCfg {
            bounds,
            spread: 0.05 * width.max(height),
            ..ClusteredCfg::default()
        };
        sample_clustered(n, cfg, tok)?
    } else {
        let cfg = UniformCfg {
            bounds,
            ..UniformCfg::default()
        };
        sample_uniform(n, cfg, tok)?
    };
    io::write_points(&out, &pts)?;
    let params = serde_json::json!({
        "n": n,
        "seed": seed,
        "clustered": clustered,
        "bounds": [width, height],
    });
    write_sidecar(&out, Payload::new(params).with_run(run))?;
    Ok(())
}

fn report(run: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "crate_version": adagrid::VERSION,
        "run": run,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

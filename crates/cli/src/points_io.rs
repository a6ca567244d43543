//! Point files: JSON `[[x, y], ...]`, or CSV/Parquet tables with `x` and `y`
//! columns (read through Polars).

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use serde_json::Value;
use std::path::Path;

/// Entries read from a point file, before validation.
pub enum PointRows {
    Json(Value),
    /// One entry per table row; a null or non-numeric cell drops that
    /// coordinate, so the entry is reported as malformed on import.
    Table(Vec<Vec<f64>>),
}

pub fn read_points(path: &Path) -> Result<PointRows> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "json" => {
            let bytes =
                std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            let doc = serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing {}", path.display()))?;
            Ok(PointRows::Json(doc))
        }
        "csv" => {
            let lf = LazyCsvReader::new(path)
                .with_infer_schema_length(Some(100))
                .finish()?;
            table_rows(lf)
        }
        "parquet" => {
            let lf = LazyFrame::scan_parquet(path, ScanArgsParquet::default())?;
            table_rows(lf)
        }
        other => bail!("unsupported point file extension {other:?} (json, csv, parquet)"),
    }
}

fn table_rows(lf: LazyFrame) -> Result<PointRows> {
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()?;
    tracing::debug!(rows = df.height(), "point table");
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let rows: Vec<Vec<f64>> = xs
        .into_iter()
        .zip(ys.into_iter())
        .map(|(x, y)| [x, y].into_iter().flatten().collect())
        .collect();
    Ok(PointRows::Table(rows))
}

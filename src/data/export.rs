use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use super::model::AngleSummary;

// ---------------------------------------------------------------------------
// Summary CSV export
// ---------------------------------------------------------------------------

/// The canonical export header, written even when the table has no rows.
const HEADER: [&str; 3] = ["Angle", "STD Left", "STD Right"];

/// One exported row, serialized in [`HEADER`] column order.
#[derive(Serialize)]
struct SummaryRow<'a> {
    angle: &'a str,
    std_left: f64,
    std_right: f64,
}

/// Serialize the summary table to UTF-8 CSV bytes, rows in table order.
pub fn summary_csv(summary: &[AngleSummary]) -> Result<Vec<u8>> {
    // The header is written explicitly so an empty table still exports it;
    // serde-driven headers only appear with the first row.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(HEADER).context("writing summary header")?;
    for row in summary {
        writer
            .serialize(SummaryRow {
                angle: row.angle.as_str(),
                std_left: row.std_left,
                std_right: row.std_right,
            })
            .context("serializing summary row")?;
    }
    writer.flush().context("flushing summary CSV")?;
    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("finalizing summary CSV: {e}"))
}

/// Write the summary table to `path` (the UI suggests `summary.csv`).
pub fn write_summary(path: &Path, summary: &[AngleSummary]) -> Result<()> {
    let bytes = summary_csv(summary)?;
    std::fs::write(path, bytes)
        .with_context(|| format!("writing summary to {}", path.display()))
}

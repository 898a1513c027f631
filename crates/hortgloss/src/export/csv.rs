use std::path::Path;

use anyhow::{Context, Result};
use hortgloss_core::{rows_to_bytes, unfold, write_atomic, ColumnNames};
use tracing::info;

use super::{load_entries, report_empty};

pub fn export_csv(input: &Path, output: &Path, columns: &ColumnNames, bom: bool) -> Result<usize> {
    info!("reading {}", input.display());
    let entries = load_entries(input)?;
    if entries.is_empty() {
        report_empty(&input.display().to_string());
        return Ok(0);
    }
    let rows = unfold(&entries);
    let bytes = rows_to_bytes(&rows, columns, bom)?;
    write_atomic(output, &bytes)
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!(
        "exported {} entries as {} rows to {}",
        entries.len(),
        rows.len(),
        output.display()
    );
    Ok(rows.len())
}

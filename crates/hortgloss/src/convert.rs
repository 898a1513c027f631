use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use hortgloss_core::{fold, read_rows, to_canonical_string, write_atomic, ColumnNames, StrokeLookup};
use tracing::info;

use crate::export::{report_empty, require_input};

pub fn fold_file(
    input: &Path,
    output: &Path,
    columns: &ColumnNames,
    lookup: &dyn StrokeLookup,
) -> Result<usize> {
    require_input(input)?;
    info!("reading {}", input.display());
    let file =
        File::open(input).with_context(|| format!("failed to open {}", input.display()))?;
    let rows = read_rows(&input.display().to_string(), file, columns)?;
    let folded = fold(&rows, lookup);
    if folded.skipped_rows > 0 {
        info!("skipped {} rows without a uid", folded.skipped_rows);
    }
    if folded.is_empty() {
        report_empty(&input.display().to_string());
        return Ok(0);
    }
    let yaml = to_canonical_string(&folded.entries)?;
    write_atomic(output, yaml.as_bytes())
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!(
        "folded {} rows into {} entries in {}",
        rows.len(),
        folded.entries.len(),
        output.display()
    );
    Ok(folded.entries.len())
}

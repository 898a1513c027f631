use std::path::Path;

use anyhow::{Context, Result};
use hortgloss_core::{render_review, write_atomic, ReviewLabels};
use tracing::info;

use super::{load_entries, report_empty};

pub fn export_review(input: &Path, output: &Path, labels: &ReviewLabels) -> Result<usize> {
    info!("reading {}", input.display());
    let entries = load_entries(input)?;
    if entries.is_empty() {
        report_empty(&input.display().to_string());
        return Ok(0);
    }
    let markdown = render_review(&entries, labels);
    write_atomic(output, markdown.as_bytes())
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!("wrote review document for {} entries to {}", entries.len(), output.display());
    Ok(entries.len())
}

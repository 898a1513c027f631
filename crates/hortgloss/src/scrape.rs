use std::path::Path;

use anyhow::{Context, Result};
use hortgloss_core::{render_legacy_markdown, write_atomic, LegacyScraper};
use tracing::{info, warn};

use crate::export::{report_empty, require_input};

pub fn scrape_dir(
    dir: &Path,
    output: &Path,
    prefix: &str,
    scraper: &LegacyScraper,
) -> Result<usize> {
    require_input(dir)?;
    info!(
        "scraping {}*.html under {} (fallback encoding {})",
        prefix,
        dir.display(),
        scraper.fallback_name()
    );
    let batch = scraper
        .scrape_dir(dir, prefix)
        .with_context(|| format!("failed to list legacy files in {}", dir.display()))?;
    if !batch.skipped.is_empty() {
        warn!(
            "{} legacy files skipped: {}",
            batch.skipped.len(),
            batch
                .skipped
                .iter()
                .map(|skipped| skipped.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        );
    }
    if batch.duplicates > 0 {
        info!("dropped {} duplicate terms", batch.duplicates);
    }
    if batch.records.is_empty() {
        report_empty(&dir.display().to_string());
        return Ok(0);
    }
    let markdown = render_legacy_markdown(&batch.records);
    write_atomic(output, markdown.as_bytes())
        .with_context(|| format!("failed to write {}", output.display()))?;
    info!("wrote {} terms to {}", batch.records.len(), output.display());
    Ok(batch.records.len())
}

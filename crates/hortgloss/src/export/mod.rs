use std::path::Path;

use anyhow::{Context, Result};
use hortgloss_core::{load_canonical, Entry, GlossaryError};

mod csv;
mod document;
mod markdown;

pub use csv::export_csv;
pub use document::export_document;
pub use markdown::export_review;

pub(crate) fn require_input(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(GlossaryError::SourceMissing(path.to_path_buf()).into());
    }
    Ok(())
}

pub(crate) fn load_entries(path: &Path) -> Result<Vec<Entry>> {
    require_input(path)?;
    load_canonical(path).with_context(|| format!("failed to load {}", path.display()))
}

pub(crate) fn report_empty(what: &str) {
    tracing::warn!("{}; no output written", GlossaryError::EmptyResult(what.to_string()));
}

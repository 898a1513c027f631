use std::fs;
use std::path::Path;

use crate::error::{GlossaryError, Result};
use crate::model::Entry;

pub fn load_canonical(path: &Path) -> Result<Vec<Entry>> {
    if !path.exists() {
        return Err(GlossaryError::SourceMissing(path.to_path_buf()));
    }
    let raw = fs::read_to_string(path)
        .map_err(|err| GlossaryError::source_read(path.display().to_string(), err))?;
    from_canonical_str(&path.display().to_string(), &raw)
}

pub fn from_canonical_str(source_name: &str, raw: &str) -> Result<Vec<Entry>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    let entries: Option<Vec<Entry>> = serde_yaml::from_str(raw)
        .map_err(|err| GlossaryError::source_read(source_name, err))?;
    Ok(entries.unwrap_or_default())
}

pub fn to_canonical_string(entries: &[Entry]) -> Result<String> {
    Ok(serde_yaml::to_string(entries)?)
}

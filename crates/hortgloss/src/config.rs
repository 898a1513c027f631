use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use hortgloss_core::{
    ColumnNames, LegacyScraper, PandocRenderer, ReviewLabels, StrokeTable, TargetFormat,
    DEFAULT_FALLBACK_ENCODING, DEFAULT_PREFIX,
};
use serde::Deserialize;
use tracing::{info, warn};

pub const DEFAULT_CONFIG: &str = "hortgloss.toml";
pub const STROKE_TABLE_ENV: &str = "HORTGLOSS_STROKE_TABLE";
pub const PANDOC_ENV: &str = "HORTGLOSS_PANDOC";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct GlossaryConfig {
    pub files: FilesConfig,
    pub columns: ColumnNames,
    pub strokes: StrokesConfig,
    pub legacy: LegacyConfig,
    pub render: RenderConfig,
    pub review: ReviewLabels,
    pub csv: CsvConfig,
    pub pipeline: PipelineConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FilesConfig {
    pub input_csv: PathBuf,
    pub canonical: PathBuf,
    pub export_csv: PathBuf,
    pub review_md: PathBuf,
    pub document: PathBuf,
    pub legacy_dir: PathBuf,
    pub legacy_md: PathBuf,
}

impl Default for FilesConfig {
    fn default() -> Self {
        Self {
            input_csv: PathBuf::from("input.csv"),
            canonical: PathBuf::from("glossary.yaml"),
            export_csv: PathBuf::from("glossary_export.csv"),
            review_md: PathBuf::from("glossary_export.md"),
            document: PathBuf::from("glossary_for_review.docx"),
            legacy_dir: PathBuf::from("."),
            legacy_md: PathBuf::from("glossary.md"),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StrokesConfig {
    pub table: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LegacyConfig {
    pub prefix: String,
    pub fallback_encoding: String,
}

impl Default for LegacyConfig {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            fallback_encoding: DEFAULT_FALLBACK_ENCODING.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub pandoc: PathBuf,
    pub format: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            pandoc: PathBuf::from("pandoc"),
            format: "docx".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CsvConfig {
    pub bom: bool,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self { bom: true }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub unfold: bool,
    pub document: bool,
}

impl GlossaryConfig {
    // An explicit path must exist; the default file is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG).exists() => Self::from_file(Path::new(DEFAULT_CONFIG))?,
            None => Self::default(),
        };
        config.apply_overrides(|key| env::var(key).ok());
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&raw).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(table) = lookup(STROKE_TABLE_ENV).filter(|v| !v.trim().is_empty()) {
            self.strokes.table = Some(PathBuf::from(table.trim()));
        }
        if let Some(pandoc) = lookup(PANDOC_ENV).filter(|v| !v.trim().is_empty()) {
            self.render.pandoc = PathBuf::from(pandoc.trim());
        }
    }

    pub fn stroke_table(&self) -> Result<StrokeTable> {
        let Some(path) = &self.strokes.table else {
            warn!(
                "no stroke table configured (set [strokes] table or {}); every stroke key will be 0",
                STROKE_TABLE_ENV
            );
            return Ok(StrokeTable::new());
        };
        let table = StrokeTable::load(path)
            .with_context(|| format!("failed to load stroke table {}", path.display()))?;
        info!("loaded {} stroke counts from {}", table.len(), path.display());
        Ok(table)
    }

    pub fn scraper(&self) -> Result<LegacyScraper> {
        Ok(LegacyScraper::new(&self.legacy.fallback_encoding)?)
    }

    pub fn renderer(&self) -> PandocRenderer {
        PandocRenderer::new(&self.render.pandoc)
    }

    pub fn target_format(&self, requested: Option<&str>) -> Result<TargetFormat> {
        let name = requested.unwrap_or(&self.render.format);
        TargetFormat::from_name(name).ok_or_else(|| anyhow!("unsupported document format {name}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_legacy_defaults() {
        let config = GlossaryConfig::from_toml("").unwrap();
        assert_eq!(config.files.input_csv, PathBuf::from("input.csv"));
        assert_eq!(config.files.canonical, PathBuf::from("glossary.yaml"));
        assert_eq!(config.columns.term, "術語");
        assert_eq!(config.legacy.prefix, "C");
        assert!(config.csv.bom);
        assert!(!config.pipeline.document);
        assert_eq!(config.review.uid, "UID：");
    }

    #[test]
    fn sections_override_individual_fields() {
        let raw = r#"
            [files]
            canonical = "data/terms.yaml"

            [columns]
            term = "Term"

            [render]
            format = "odt"

            [pipeline]
            unfold = true
        "#;
        let config = GlossaryConfig::from_toml(raw).unwrap();
        assert_eq!(config.files.canonical, PathBuf::from("data/terms.yaml"));
        assert_eq!(config.files.review_md, PathBuf::from("glossary_export.md"));
        assert_eq!(config.columns.term, "Term");
        assert_eq!(config.columns.uid, "uid");
        assert_eq!(config.target_format(None).unwrap(), TargetFormat::Odt);
        assert!(config.pipeline.unfold);
    }

    #[test]
    fn environment_overrides_apply() {
        let mut config = GlossaryConfig::default();
        config.apply_overrides(|key| match key {
            STROKE_TABLE_ENV => Some("/data/Unihan_IRGSources.txt".to_string()),
            PANDOC_ENV => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(
            config.strokes.table,
            Some(PathBuf::from("/data/Unihan_IRGSources.txt"))
        );
        assert_eq!(config.render.pandoc, PathBuf::from("pandoc"));
    }

    #[test]
    fn unknown_format_is_rejected() {
        let config = GlossaryConfig::default();
        assert!(config.target_format(Some("pdf")).is_err());
        assert_eq!(config.target_format(Some("DOCX")).unwrap(), TargetFormat::Docx);
    }

    #[test]
    fn missing_stroke_table_is_an_error() {
        let mut config = GlossaryConfig::default();
        config.strokes.table = Some(PathBuf::from("/nonexistent/strokes.txt"));
        assert!(config.stroke_table().is_err());
        config.strokes.table = None;
        assert!(config.stroke_table().unwrap().is_empty());
    }
}

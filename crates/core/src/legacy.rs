use std::collections::HashSet;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::bytes::Regex;
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::LegacyDecodeError;
use crate::normalize::normalize;

pub const DEFAULT_PREFIX: &str = "C";
pub const DEFAULT_FALLBACK_ENCODING: &str = "big5";

static GLOSSARY_TABLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"table[border="0"][cellspacing="2"]"#).unwrap());
static TERM_LABEL: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r##"font[size="+1"][color="#006600"]"##).unwrap());
static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").unwrap());
static CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("td").unwrap());
static STYLED_TEXT: Lazy<Selector> = Lazy::new(|| Selector::parse("font").unwrap());
static META_CHARSET: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?i)<meta[^>]*charset\s*=\s*["']?([a-z0-9_\-:]+)"#).unwrap());

const SNIFF_LIMIT: usize = 2048;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegacyRecord {
    pub term: String,
    pub fields: IndexMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub name: String,
    pub error: LegacyDecodeError,
}

#[derive(Debug, Default)]
pub struct LegacyBatch {
    pub records: Vec<LegacyRecord>,
    pub skipped: Vec<SkippedFile>,
    pub duplicates: usize,
}

#[derive(Debug)]
pub struct Decoded {
    pub text: String,
    pub encoding: &'static str,
    pub used_fallback: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct LegacyScraper {
    fallback: &'static Encoding,
}

impl Default for LegacyScraper {
    fn default() -> Self {
        Self {
            fallback: encoding_rs::BIG5,
        }
    }
}

impl LegacyScraper {
    pub fn new(fallback_label: &str) -> Result<Self, LegacyDecodeError> {
        let fallback = Encoding::for_label(fallback_label.trim().as_bytes())
            .ok_or_else(|| LegacyDecodeError::UnknownEncoding(fallback_label.to_string()))?;
        Ok(Self { fallback })
    }

    pub fn fallback_name(&self) -> &'static str {
        self.fallback.name()
    }

    // Primary attempt: BOM, then declared charset, then detection. Both
    // attempts are strict so a wrong guess fails instead of producing mojibake.
    pub fn decode(&self, bytes: &[u8]) -> Result<Decoded, LegacyDecodeError> {
        let (primary, body) = primary_encoding(bytes);
        if let Some(text) = primary.decode_without_bom_handling_and_without_replacement(body) {
            return Ok(Decoded {
                text: text.into_owned(),
                encoding: primary.name(),
                used_fallback: false,
            });
        }
        debug!(
            "{} decode failed, retrying as {}",
            primary.name(),
            self.fallback.name()
        );
        self.fallback
            .decode_without_bom_handling_and_without_replacement(bytes)
            .map(|text| Decoded {
                text: text.into_owned(),
                encoding: self.fallback.name(),
                used_fallback: true,
            })
            .ok_or(LegacyDecodeError::Malformed {
                encoding: self.fallback.name(),
            })
    }

    pub fn scrape_bytes(&self, bytes: &[u8]) -> Result<Vec<LegacyRecord>, LegacyDecodeError> {
        let decoded = self.decode(bytes)?;
        Ok(scrape_document(&decoded.text))
    }

    pub fn scrape_batch<I, N>(&self, files: I) -> LegacyBatch
    where
        I: IntoIterator<Item = (N, Result<Vec<u8>, LegacyDecodeError>)>,
        N: Into<String>,
    {
        let mut batch = LegacyBatch::default();
        let mut seen = KeepFirst::default();
        for (name, contents) in files {
            let name = name.into();
            match contents.and_then(|bytes| self.scrape_bytes(&bytes)) {
                Ok(records) => {
                    debug!("{}: {} glossary tables", name, records.len());
                    for record in records {
                        if seen.admit(&record.term) {
                            batch.records.push(record);
                        } else {
                            batch.duplicates += 1;
                        }
                    }
                }
                Err(error) => {
                    warn!("skipping legacy file {}: {}", name, error);
                    batch.skipped.push(SkippedFile { name, error });
                }
            }
        }
        batch
    }

    pub fn scrape_dir(&self, dir: &Path, prefix: &str) -> std::io::Result<LegacyBatch> {
        let files = discover_legacy_files(dir, prefix)?;
        let contents = files.into_iter().map(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            let bytes = fs::read(&path).map_err(|err| LegacyDecodeError::Unreadable(err.to_string()));
            (name, bytes)
        });
        Ok(self.scrape_batch(contents))
    }
}

fn primary_encoding(bytes: &[u8]) -> (&'static Encoding, &[u8]) {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        return (encoding, &bytes[bom_len..]);
    }
    if let Some(encoding) = declared_encoding(bytes) {
        return (encoding, bytes);
    }
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    (detector.guess(None, true), bytes)
}

fn declared_encoding(bytes: &[u8]) -> Option<&'static Encoding> {
    let head = &bytes[..bytes.len().min(SNIFF_LIMIT)];
    let label = META_CHARSET.captures(head)?.get(1)?;
    Encoding::for_label(label.as_bytes())
}

/// Tracks which terms were already emitted; the first occurrence wins.
#[derive(Debug, Default)]
struct KeepFirst {
    seen: HashSet<String>,
}

impl KeepFirst {
    fn admit(&mut self, key: &str) -> bool {
        if self.seen.contains(key) {
            return false;
        }
        self.seen.insert(key.to_string());
        true
    }
}

pub fn scrape_document(html: &str) -> Vec<LegacyRecord> {
    let document = Html::parse_document(html);
    document
        .select(&GLOSSARY_TABLE)
        .filter_map(scrape_table)
        .collect()
}

fn scrape_table(table: ElementRef<'_>) -> Option<LegacyRecord> {
    let term = text_of(table.select(&TERM_LABEL).next()?);
    if term.is_empty() {
        return None;
    }
    let mut fields = IndexMap::new();
    for row in table.select(&ROW) {
        let cells: Vec<ElementRef<'_>> = row.select(&CELL).collect();
        if cells.len() < 2 {
            continue;
        }
        let Some(label) = cells[0].select(&STYLED_TEXT).next().map(text_of) else {
            continue;
        };
        let Some(value) = cells[1].select(&STYLED_TEXT).next().map(text_of) else {
            continue;
        };
        if label.is_empty() {
            continue;
        }
        fields.insert(label, value);
    }
    Some(LegacyRecord { term, fields })
}

fn text_of(element: ElementRef<'_>) -> String {
    normalize(&element.text().collect::<String>())
}

pub fn is_legacy_file(name: &str, prefix: &str) -> bool {
    if !name.starts_with(prefix) {
        return false;
    }
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("html"))
        .unwrap_or(false)
}

pub fn discover_legacy_files(dir: &Path, prefix: &str) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        if is_legacy_file(&name.to_string_lossy(), prefix) {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}

pub fn render_legacy_markdown(records: &[LegacyRecord]) -> String {
    let mut ordered: Vec<&LegacyRecord> = records.iter().collect();
    ordered.sort_by(|a, b| a.term.cmp(&b.term));
    let mut out = String::new();
    for record in ordered {
        let _ = write!(out, "## {}\n\n", record.term);
        for (label, value) in &record.fields {
            let _ = write!(out, "**{}:** {}\n\n", label, value);
        }
        out.push_str("---\n\n");
    }
    out
}

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::error::{GlossaryError, Result, StrokeLookupError};
use crate::normalize::normalize;

pub trait StrokeLookup {
    fn strokes(&self, ch: char) -> std::result::Result<Option<u32>, StrokeLookupError>;
}

/// Adapts a plain function or closure into a [`StrokeLookup`].
pub struct FnLookup<F>(pub F);

impl<F> StrokeLookup for FnLookup<F>
where
    F: Fn(char) -> Option<u32>,
{
    fn strokes(&self, ch: char) -> std::result::Result<Option<u32>, StrokeLookupError> {
        Ok((self.0)(ch))
    }
}

#[derive(Debug, Default, Clone)]
pub struct StrokeTable {
    counts: HashMap<char, u32>,
}

impl StrokeTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, ch: char, strokes: u32) {
        self.counts.insert(ch, strokes);
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(GlossaryError::SourceMissing(path.to_path_buf()));
        }
        let file = File::open(path)?;
        Self::from_reader(file)
            .map_err(|err| GlossaryError::source_read(path.display().to_string(), err))
    }

    // Accepts Unihan rows (`U+82B1<TAB>kTotalStrokes<TAB>7 8`) and plain
    // `字<TAB>7` rows; anything else is ignored.
    pub fn from_reader<R: Read>(reader: R) -> std::io::Result<Self> {
        let mut table = Self::new();
        for line in BufReader::new(reader).lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((ch, strokes)) = parse_line(line) {
                table.insert(ch, strokes);
            }
        }
        Ok(table)
    }
}

fn parse_line(line: &str) -> Option<(char, u32)> {
    let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
    match fields.as_slice() {
        [code, "kTotalStrokes", values, ..] => {
            let ch = parse_code_point(code)?;
            let first = values.split_whitespace().next()?;
            Some((ch, first.parse().ok()?))
        }
        [glyph, count] => {
            let mut chars = glyph.chars();
            let ch = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            Some((ch, count.parse().ok()?))
        }
        _ => None,
    }
}

fn parse_code_point(raw: &str) -> Option<char> {
    let hex = raw.strip_prefix("U+")?;
    char::from_u32(u32::from_str_radix(hex, 16).ok()?)
}

impl StrokeLookup for StrokeTable {
    fn strokes(&self, ch: char) -> std::result::Result<Option<u32>, StrokeLookupError> {
        Ok(self.counts.get(&ch).copied())
    }
}

pub fn stroke_key(term: &str, lookup: &dyn StrokeLookup) -> u32 {
    let cleaned = normalize(term);
    let Some(first) = cleaned.chars().next() else {
        return 0;
    };
    match lookup.strokes(first) {
        Ok(Some(strokes)) => strokes,
        Ok(None) => 0,
        Err(err) => {
            debug!("stroke key defaults to 0 for '{}': {}", cleaned, err);
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Failing;

    impl StrokeLookup for Failing {
        fn strokes(&self, ch: char) -> std::result::Result<Option<u32>, StrokeLookupError> {
            Err(StrokeLookupError {
                ch,
                reason: "table unavailable".to_string(),
            })
        }
    }

    fn sample_table() -> StrokeTable {
        let mut table = StrokeTable::new();
        table.insert('花', 8);
        table.insert('果', 8);
        table.insert('土', 3);
        table
    }

    #[test]
    fn uses_first_character_after_normalizing() {
        let table = sample_table();
        assert_eq!(stroke_key("\u{3000}花卉", &table), 8);
        assert_eq!(stroke_key("土壤", &table), 3);
    }

    #[test]
    fn empty_or_unknown_terms_key_to_zero() {
        let table = sample_table();
        assert_eq!(stroke_key("", &table), 0);
        assert_eq!(stroke_key("  ", &table), 0);
        assert_eq!(stroke_key("pH value", &table), 0);
    }

    #[test]
    fn lookup_failure_is_swallowed() {
        assert_eq!(stroke_key("花", &Failing), 0);
    }

    #[test]
    fn closures_work_as_lookups() {
        let lookup = FnLookup(|ch: char| if ch == '甲' { Some(5u32) } else { None });
        assert_eq!(stroke_key("甲蟲", &lookup), 5);
        assert_eq!(stroke_key("乙", &lookup), 0);
    }

    #[test]
    fn parses_unihan_and_plain_rows() {
        let data = "# comment\nU+82B1\tkTotalStrokes\t7 8\nU+82B1\tkRSUnicode\t140.4\n土\t3\nbroken line\n";
        let table = StrokeTable::from_reader(data.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(stroke_key("花", &table), 7);
        assert_eq!(stroke_key("土", &table), 3);
    }
}

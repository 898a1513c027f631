use serde::{Deserialize, Serialize};

use crate::normalize::{clean_spaces, normalize};
use crate::strokes::{stroke_key, StrokeLookup};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub uid: String,
    #[serde(default)]
    pub term: String,
    #[serde(default)]
    pub original_name: String,
    #[serde(default)]
    strokes: u32,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub related_terms: Vec<String>,
    #[serde(default, rename = "category")]
    pub categories: Vec<String>,
    #[serde(default)]
    pub definitions: Vec<Definition>,
}

impl Entry {
    pub fn new(
        uid: impl Into<String>,
        term: impl Into<String>,
        original_name: impl Into<String>,
        lookup: &dyn StrokeLookup,
    ) -> Self {
        let term = term.into();
        let strokes = stroke_key(&term, lookup);
        Self {
            uid: uid.into(),
            term,
            original_name: original_name.into(),
            strokes,
            aliases: Vec::new(),
            related_terms: Vec::new(),
            categories: Vec::new(),
            definitions: Vec::new(),
        }
    }

    pub fn strokes(&self) -> u32 {
        self.strokes
    }

    pub fn set_term(&mut self, term: impl Into<String>, lookup: &dyn StrokeLookup) {
        self.term = term.into();
        self.strokes = stroke_key(&self.term, lookup);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub source: String,
}

impl Definition {
    // Text keeps its line breaks and edges; only space artifacts are replaced.
    pub fn from_raw(text: &str, author: &str, source: &str) -> Option<Self> {
        let definition = Self {
            text: clean_spaces(text),
            author: normalize(author),
            source: normalize(source),
        };
        if definition.is_blank() {
            None
        } else {
            Some(definition)
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.is_empty() && self.author.is_empty() && self.source.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabularRow {
    pub uid: String,
    pub term: String,
    pub original_name: String,
    pub native_aliases: String,
    pub foreign_aliases: String,
    pub related_terms: String,
    pub categories: String,
    pub definition: String,
    pub author: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNames {
    pub uid: String,
    pub term: String,
    pub original_name: String,
    pub native_aliases: String,
    pub foreign_aliases: String,
    pub related_terms: String,
    pub categories: String,
    pub definition: String,
    pub author: String,
    pub source: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            uid: "uid".to_string(),
            term: "術語".to_string(),
            original_name: "術語原文".to_string(),
            native_aliases: "中名同義詞".to_string(),
            foreign_aliases: "英名同義詞".to_string(),
            related_terms: "廣義詞".to_string(),
            categories: "分類".to_string(),
            definition: "定義".to_string(),
            author: "作者".to_string(),
            source: "出處".to_string(),
        }
    }
}

impl ColumnNames {
    pub fn headers(&self) -> [&str; 10] {
        [
            self.uid.as_str(),
            self.term.as_str(),
            self.original_name.as_str(),
            self.native_aliases.as_str(),
            self.foreign_aliases.as_str(),
            self.related_terms.as_str(),
            self.categories.as_str(),
            self.definition.as_str(),
            self.author.as_str(),
            self.source.as_str(),
        ]
    }
}

impl TabularRow {
    pub fn fields(&self) -> [&str; 10] {
        [
            self.uid.as_str(),
            self.term.as_str(),
            self.original_name.as_str(),
            self.native_aliases.as_str(),
            self.foreign_aliases.as_str(),
            self.related_terms.as_str(),
            self.categories.as_str(),
            self.definition.as_str(),
            self.author.as_str(),
            self.source.as_str(),
        ]
    }

    pub fn fields_mut(&mut self) -> [&mut String; 10] {
        [
            &mut self.uid,
            &mut self.term,
            &mut self.original_name,
            &mut self.native_aliases,
            &mut self.foreign_aliases,
            &mut self.related_terms,
            &mut self.categories,
            &mut self.definition,
            &mut self.author,
            &mut self.source,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strokes::StrokeTable;

    #[test]
    fn blank_definitions_are_rejected() {
        assert!(Definition::from_raw("", "\u{3000}", " ").is_none());
        assert!(Definition::from_raw("\u{00A0}", "", "").is_some());
        let kept = Definition::from_raw("", "", "農業辭典").unwrap();
        assert_eq!(kept.source, "農業辭典");
    }

    #[test]
    fn whitespace_only_text_still_counts() {
        let def = Definition::from_raw("\n", "", "").unwrap();
        assert_eq!(def.text, "\n");
        assert!(!def.is_blank());
    }

    #[test]
    fn definition_text_keeps_paragraph_breaks() {
        let def = Definition::from_raw("第一段\u{00A0}\n第二段\n", "", "").unwrap();
        assert_eq!(def.text, "第一段 \n第二段\n");
    }

    #[test]
    fn renaming_a_term_rederives_its_stroke_key() {
        let mut table = StrokeTable::new();
        table.insert('木', 4);
        table.insert('花', 8);
        let mut entry = Entry::new("T1", "木瓜", "", &table);
        assert_eq!(entry.strokes(), 4);
        entry.set_term("花瓣", &table);
        assert_eq!(entry.strokes(), 8);
    }

    #[test]
    fn canonical_keys_keep_declaration_order() {
        let entry = Entry::new("T1", "木瓜", "papaya", &StrokeTable::new());
        let yaml = serde_yaml::to_string(&entry).unwrap();
        let keys: Vec<&str> = yaml
            .lines()
            .filter(|line| !line.starts_with(' ') && !line.starts_with('-'))
            .filter_map(|line| line.split(':').next())
            .collect();
        assert_eq!(
            keys,
            vec![
                "uid",
                "term",
                "original_name",
                "strokes",
                "aliases",
                "related_terms",
                "category",
                "definitions"
            ]
        );
    }
}

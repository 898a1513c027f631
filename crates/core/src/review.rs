use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::model::{Definition, Entry};
use crate::multivalue::display;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewLabels {
    pub title: String,
    pub group_heading: String,
    pub ungrouped_heading: String,
    pub missing_term: String,
    pub uid: String,
    pub aliases: String,
    pub categories: String,
    pub related_terms: String,
    pub definitions: String,
    pub source: String,
    pub author: String,
}

impl Default for ReviewLabels {
    fn default() -> Self {
        Self {
            title: "園藝科技術語詞典 (審閱用)".to_string(),
            group_heading: "{strokes} 劃".to_string(),
            ungrouped_heading: "其他 (0 劃)".to_string(),
            missing_term: "N/A".to_string(),
            uid: "UID：".to_string(),
            aliases: "同義詞：".to_string(),
            categories: "分類：".to_string(),
            related_terms: "廣義詞：".to_string(),
            definitions: "定義".to_string(),
            source: "來源：".to_string(),
            author: "作者：".to_string(),
        }
    }
}

impl ReviewLabels {
    fn heading_for(&self, strokes: u32) -> String {
        if strokes == 0 {
            self.ungrouped_heading.clone()
        } else {
            self.group_heading.replace("{strokes}", &strokes.to_string())
        }
    }
}

// Stable: equal keys keep their input order. Key 0 (no stroke data) sorts last.
pub fn review_order(entries: &[Entry]) -> Vec<&Entry> {
    let mut ordered: Vec<&Entry> = entries.iter().collect();
    ordered.sort_by_key(|entry| (entry.strokes() == 0, entry.strokes()));
    ordered
}

pub fn render_review(entries: &[Entry], labels: &ReviewLabels) -> String {
    let mut out = String::new();
    let _ = write!(out, "# {}\n\n", labels.title);
    let mut current_group: Option<u32> = None;
    for entry in review_order(entries) {
        let strokes = entry.strokes();
        if current_group != Some(strokes) {
            let _ = write!(out, "\n## {}\n\n", labels.heading_for(strokes));
            current_group = Some(strokes);
        }
        render_entry(entry, labels, &mut out);
    }
    out
}

fn render_entry(entry: &Entry, labels: &ReviewLabels, out: &mut String) {
    let term = if entry.term.is_empty() {
        labels.missing_term.as_str()
    } else {
        entry.term.as_str()
    };
    if entry.original_name.is_empty() {
        let _ = write!(out, "### {}\n\n", term);
    } else {
        let _ = write!(out, "### {} ({})\n\n", term, entry.original_name);
    }
    let _ = write!(out, "**{}** `{}`\n\n", labels.uid, entry.uid);
    for (label, values) in [
        (&labels.aliases, &entry.aliases),
        (&labels.categories, &entry.categories),
        (&labels.related_terms, &entry.related_terms),
    ] {
        if !values.is_empty() {
            let _ = write!(out, "**{}** {}\n\n", label, display(values));
        }
    }
    if !entry.definitions.is_empty() {
        let _ = write!(out, "#### {}\n\n", labels.definitions);
        let last = entry.definitions.len() - 1;
        for (idx, definition) in entry.definitions.iter().enumerate() {
            render_definition(definition, labels, out);
            if idx < last {
                out.push_str("\n---\n\n");
            }
        }
    }
    out.push_str("\n---\n\n");
}

fn render_definition(definition: &Definition, labels: &ReviewLabels, out: &mut String) {
    let _ = write!(out, "{}\n\n", definition.text.trim());
    let _ = writeln!(out, "> **{}** {}", labels.source, definition.source);
    if !definition.author.is_empty() {
        let _ = writeln!(out, "> **{}** {}", labels.author, definition.author);
    }
}

use crate::model::{Entry, TabularRow};
use crate::multivalue::encode;

pub fn unfold(entries: &[Entry]) -> Vec<TabularRow> {
    let mut rows = Vec::with_capacity(entries.len());
    for entry in entries {
        let shared = shared_row(entry);
        if entry.definitions.is_empty() {
            rows.push(shared);
            continue;
        }
        for definition in &entry.definitions {
            rows.push(TabularRow {
                definition: definition.text.clone(),
                author: definition.author.clone(),
                source: definition.source.clone(),
                ..shared.clone()
            });
        }
    }
    rows
}

// Every alias goes back into the native column; the foreign column stays blank.
fn shared_row(entry: &Entry) -> TabularRow {
    TabularRow {
        uid: entry.uid.clone(),
        term: entry.term.clone(),
        original_name: entry.original_name.clone(),
        native_aliases: encode(&entry.aliases),
        foreign_aliases: String::new(),
        related_terms: encode(&entry.related_terms),
        categories: encode(&entry.categories),
        ..TabularRow::default()
    }
}

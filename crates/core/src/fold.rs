use indexmap::map::Entry as Slot;
use indexmap::IndexMap;

use crate::model::{Definition, Entry, TabularRow};
use crate::multivalue::decode;
use crate::normalize::normalize;
use crate::strokes::StrokeLookup;

#[derive(Debug, Default)]
pub struct Folded {
    pub entries: Vec<Entry>,
    pub skipped_rows: usize,
}

impl Folded {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn fold(rows: &[TabularRow], lookup: &dyn StrokeLookup) -> Folded {
    let mut by_uid: IndexMap<String, Entry> = IndexMap::new();
    let mut skipped_rows = 0;
    for row in rows {
        let uid = normalize(&row.uid);
        if uid.is_empty() {
            skipped_rows += 1;
            continue;
        }
        // keep-first: later rows for a known uid only contribute definitions
        let entry = match by_uid.entry(uid) {
            Slot::Occupied(slot) => slot.into_mut(),
            Slot::Vacant(slot) => {
                let entry = shared_fields(slot.key(), row, lookup);
                slot.insert(entry)
            }
        };
        if let Some(definition) = Definition::from_raw(&row.definition, &row.author, &row.source) {
            entry.definitions.push(definition);
        }
    }
    Folded {
        entries: by_uid.into_values().collect(),
        skipped_rows,
    }
}

fn shared_fields(uid: &str, row: &TabularRow, lookup: &dyn StrokeLookup) -> Entry {
    let mut entry = Entry::new(
        uid,
        normalize(&row.term),
        normalize(&row.original_name),
        lookup,
    );
    entry.aliases = decode(&row.native_aliases);
    entry.aliases.extend(decode(&row.foreign_aliases));
    entry.related_terms = decode(&row.related_terms);
    entry.categories = decode(&row.categories);
    entry
}

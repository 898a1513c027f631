use hortgloss_core::{
    decode_multi, encode_multi, fold, read_rows, rows_to_bytes, stroke_key, unfold, ColumnNames,
    StrokeTable, TabularRow,
};
use proptest::prelude::*;

fn table() -> StrokeTable {
    let mut table = StrokeTable::new();
    for (ch, strokes) in [('甲', 5), ('乙', 1), ('木', 4), ('花', 8)] {
        table.insert(ch, strokes);
    }
    table
}

proptest! {
    #[test]
    fn fold_unfold_fold_is_stable(rows in row_vec()) {
        let lookup = table();
        let first = fold(&rows, &lookup);
        let second = fold(&unfold(&first.entries), &lookup);
        prop_assert_eq!(&first.entries, &second.entries);
    }

    #[test]
    fn csv_round_trip_is_stable(rows in row_vec()) {
        let lookup = table();
        let columns = ColumnNames::default();
        let first = fold(&rows, &lookup);
        let bytes = rows_to_bytes(&unfold(&first.entries), &columns, true).unwrap();
        let reread = read_rows("prop.csv", bytes.as_slice(), &columns).unwrap();
        let second = fold(&reread, &lookup);
        prop_assert_eq!(first.entries, second.entries);
    }

    #[test]
    fn unfold_emits_max_of_one_and_definition_count(rows in row_vec()) {
        let folded = fold(&rows, &table());
        let unfolded = unfold(&folded.entries);
        for entry in &folded.entries {
            let emitted = unfolded.iter().filter(|row| row.uid == entry.uid).count();
            prop_assert_eq!(emitted, entry.definitions.len().max(1));
        }
    }

    #[test]
    fn stroke_key_is_a_function_of_term(rows in row_vec()) {
        let lookup = table();
        for entry in fold(&rows, &lookup).entries {
            prop_assert_eq!(entry.strokes(), stroke_key(&entry.term, &lookup));
        }
    }

    #[test]
    fn blank_uids_contribute_nothing(rows in row_vec()) {
        let lookup = table();
        let with_blank: Vec<TabularRow> = rows
            .iter()
            .cloned()
            .chain(std::iter::once(TabularRow {
                uid: " \u{3000}".to_string(),
                term: "甲".to_string(),
                definition: "stray".to_string(),
                ..TabularRow::default()
            }))
            .collect();
        prop_assert_eq!(fold(&rows, &lookup).entries, fold(&with_blank, &lookup).entries);
    }

    #[test]
    fn clean_tokens_survive_the_codec(tokens in prop::collection::vec("[a-z甲乙]{1,5}", 0..6)) {
        prop_assert_eq!(decode_multi(&encode_multi(&tokens)), tokens);
    }
}

fn row_vec() -> impl Strategy<Value = Vec<TabularRow>> {
    prop::collection::vec(row(), 0..12)
}

fn row() -> impl Strategy<Value = TabularRow> {
    (
        prop_oneof![Just(""), Just(" "), Just("A1"), Just("B2"), Just(" C3 ")],
        "[甲乙木花a ]{0,4}",
        "[a-z ]{0,6}",
        "[a-c; \u{3000}]{0,8}",
        "[x-z;]{0,6}",
        "[a-c;]{0,6}",
        "[a-z\n \u{00A0}]{0,12}",
        "[a-z ]{0,4}",
        "[a-z ]{0,4}",
    )
        .prop_map(
            |(uid, term, original, native, foreign, related, definition, author, source)| {
                TabularRow {
                    uid: uid.to_string(),
                    term,
                    original_name: original,
                    native_aliases: native,
                    foreign_aliases: foreign,
                    related_terms: related.clone(),
                    categories: related,
                    definition,
                    author,
                    source,
                }
            },
        )
}

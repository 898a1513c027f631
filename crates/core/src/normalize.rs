const NO_BREAK_SPACE: char = '\u{00A0}';
const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// Replaces no-break and ideographic spaces with an ordinary space without
/// trimming, so interior line breaks survive.
pub fn clean_spaces(value: &str) -> String {
    value.replace(
        |c: char| c == NO_BREAK_SPACE || c == IDEOGRAPHIC_SPACE,
        " ",
    )
}

pub fn normalize(value: &str) -> String {
    clean_spaces(value).trim().to_string()
}

use crate::normalize::normalize;

pub const STORAGE_SEPARATOR: &str = ";";
pub const DISPLAY_SEPARATOR: &str = "; ";

pub fn decode(value: &str) -> Vec<String> {
    let cleaned = normalize(value);
    if cleaned.is_empty() {
        return Vec::new();
    }
    cleaned
        .split(';')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn encode(items: &[String]) -> String {
    items.join(STORAGE_SEPARATOR)
}

pub fn display(items: &[String]) -> String {
    items.join(DISPLAY_SEPARATOR)
}

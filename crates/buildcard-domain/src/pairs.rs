/// Separator between label and value on a single line of a pair blob
pub const PAIR_SEPARATOR: char = '|';

/// One `label|value` line of a pair blob. Both parts are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    pub label: String,
    pub value: String,
}

impl Pair {
    fn from_line(line: &str) -> Option<Self> {
        let (label, value) = line.split_once(PAIR_SEPARATOR)?;
        if label.is_empty() || value.is_empty() {
            return None;
        }
        Some(Self {
            label: label.to_string(),
            value: value.to_string(),
        })
    }
}

/// Split every line of `blob` on its first pipe character.
///
/// Lines without a separator, or with an empty label or value, are skipped.
/// Nothing is trimmed and the line order is kept.
pub fn parse_pairs(blob: &str) -> Vec<Pair> {
    blob.split('\n').filter_map(Pair::from_line).collect()
}

//! Filename order-key extraction and merge-order sorting
//!
//! Filenames like `handout (8).pdf` or `handout 8.pdf` carry an ordering
//! number; this module extracts it and sorts a batch of files by it.

use regex::Regex;

/// Where files without an ordering key are placed relative to keyed files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnkeyedPlacement {
    /// Unkeyed files first, in upload order (reference behavior)
    #[default]
    First,
    /// Unkeyed files after all keyed files, in upload order
    Last,
}

/// Per-file sorting record: display name, extracted key, upload position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedEntry {
    /// Display name of the file (as uploaded)
    pub name: String,
    /// Ordering key extracted from the name, if any
    pub key: Option<u64>,
    /// Zero-based position in the original input sequence
    pub original_index: usize,
}

/// Extract an ordering key from a filename.
///
/// Rules, in priority order:
/// 1. The last parenthesized number anywhere in the name: `name (8).pdf` → 8
/// 2. A number immediately before the extension: `name 8.pdf` → 8
/// 3. No key.
///
/// Total: always returns a value, never errors. Leading zeros parse
/// numerically (`"08"` → 8); a match that overflows `u64` falls through to
/// the next rule.
pub fn extract_order_key(filename: &str) -> Option<u64> {
    // Last number inside parentheses
    let paren = Regex::new(r"\((\d+)\)").unwrap();
    if let Some(caps) = paren.captures_iter(filename).last() {
        if let Ok(n) = caps[1].parse::<u64>() {
            return Some(n);
        }
    }

    // Number just before the final extension
    let trailing = Regex::new(r"(\d+)\.[^.]+$").unwrap();
    if let Some(caps) = trailing.captures(filename) {
        if let Ok(n) = caps[1].parse::<u64>() {
            return Some(n);
        }
    }

    None
}

/// Sort entries into merge order.
///
/// Unkeyed entries form one group ordered by upload position; keyed entries
/// form the other, ordered by key then upload position. `placement` decides
/// which group comes first. Deterministic: every tie breaks on
/// `original_index`.
pub fn sort_entries(entries: &mut [OrderedEntry], placement: UnkeyedPlacement) {
    let unkeyed_rank = match placement {
        UnkeyedPlacement::First => 0u8,
        UnkeyedPlacement::Last => 1,
    };

    entries.sort_by_key(|entry| match entry.key {
        None => (unkeyed_rank, 0, entry.original_index),
        Some(key) => (1 - unkeyed_rank, key, entry.original_index),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, original_index: usize) -> OrderedEntry {
        OrderedEntry {
            name: name.to_string(),
            key: extract_order_key(name),
            original_index,
        }
    }

    #[test]
    fn test_extract_parenthesized_number() {
        assert_eq!(extract_order_key("name (8).pdf"), Some(8));
    }

    #[test]
    fn test_extract_last_parenthesized_wins() {
        assert_eq!(extract_order_key("name (2) (8).pdf"), Some(8));
    }

    #[test]
    fn test_extract_number_before_extension() {
        assert_eq!(extract_order_key("name 8.pdf"), Some(8));
    }

    #[test]
    fn test_extract_no_number() {
        assert_eq!(extract_order_key("name.pdf"), None);
    }

    #[test]
    fn test_extract_leading_zero() {
        assert_eq!(extract_order_key("name (08).pdf"), Some(8));
    }

    #[test]
    fn test_extract_parentheses_beat_trailing_number() {
        assert_eq!(extract_order_key("name (3) 7.pdf"), Some(3));
    }

    #[test]
    fn test_extract_no_extension() {
        // Rule 2 needs an extension separator
        assert_eq!(extract_order_key("name 8"), None);
        assert_eq!(extract_order_key(""), None);
    }

    #[test]
    fn test_extract_overflow_falls_through() {
        // Parenthesized number too large for u64, trailing number still valid
        assert_eq!(
            extract_order_key("name (99999999999999999999999999) 4.pdf"),
            Some(4)
        );
        assert_eq!(
            extract_order_key("name (99999999999999999999999999).pdf"),
            None
        );
    }

    #[test]
    fn test_sort_unkeyed_first() {
        let mut entries = vec![
            entry("b 1.pdf", 0),
            entry("a (3).pdf", 1),
            entry("c.pdf", 2),
        ];
        sort_entries(&mut entries, UnkeyedPlacement::First);

        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["c.pdf", "b 1.pdf", "a (3).pdf"]);
    }

    #[test]
    fn test_sort_unkeyed_last() {
        let mut entries = vec![
            entry("b 1.pdf", 0),
            entry("a (3).pdf", 1),
            entry("c.pdf", 2),
        ];
        sort_entries(&mut entries, UnkeyedPlacement::Last);

        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["b 1.pdf", "a (3).pdf", "c.pdf"]);
    }

    #[test]
    fn test_sort_is_stable_for_equal_keys() {
        let mut entries = vec![
            entry("x (2).pdf", 0),
            entry("y (2).pdf", 1),
            entry("notes.pdf", 2),
            entry("appendix.pdf", 3),
        ];
        sort_entries(&mut entries, UnkeyedPlacement::First);

        let order: Vec<(&str, usize)> = entries
            .iter()
            .map(|e| (e.name.as_str(), e.original_index))
            .collect();
        assert_eq!(
            order,
            vec![
                ("notes.pdf", 2),
                ("appendix.pdf", 3),
                ("x (2).pdf", 0),
                ("y (2).pdf", 1),
            ]
        );
    }

    #[test]
    fn test_sort_is_a_permutation() {
        let mut entries = vec![
            entry("d (4).pdf", 0),
            entry("c (1).pdf", 1),
            entry("readme.pdf", 2),
            entry("b 9.pdf", 3),
            entry("a (1).pdf", 4),
        ];
        sort_entries(&mut entries, UnkeyedPlacement::Last);

        let mut indices: Vec<usize> = entries.iter().map(|e| e.original_index).collect();
        indices.sort_unstable();
        assert_eq!(indices, vec![0, 1, 2, 3, 4]);
    }
}

//! Game-tree nodes and their property sets.
//!
//! Nodes store SGF properties as an insertion-ordered map from short keys
//! (`"B"`, `"AB"`, `"SZ"`, ...) to value lists. Values are kept exactly as
//! they will be written, so free text must be escaped on the way in with
//! [`escape_text`] (done by [`Node::commit_text`]).

use crate::board::Board;

/// Index of a node inside its [`crate::tree::GameTree`].
pub type NodeId = usize;

/// Escape `\` and `]` so a value can sit between SGF brackets.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        if ch == '\\' || ch == ']' {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Insertion-ordered property map.
///
/// Every key present holds at least one value, and values under a key are
/// unique.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Properties {
    entries: Vec<(String, Vec<String>)>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.position(key).map(|i| self.entries[i].1.as_slice())
    }

    /// First value stored under `key`.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.first()).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Replace the values of `key`. An empty list removes the key; an
    /// existing key keeps its position.
    pub fn set(&mut self, key: &str, values: Vec<String>) {
        let mut unique: Vec<String> = Vec::with_capacity(values.len());
        for v in values {
            if !unique.contains(&v) {
                unique.push(v);
            }
        }
        match (self.position(key), unique.is_empty()) {
            (Some(i), true) => {
                self.entries.remove(i);
            }
            (Some(i), false) => self.entries[i].1 = unique,
            (None, true) => {}
            (None, false) => self.entries.push((key.to_string(), unique)),
        }
    }

    /// Append `value` under `key` unless it is already there.
    pub fn add(&mut self, key: &str, value: &str) {
        match self.position(key) {
            Some(i) => {
                let values = &mut self.entries[i].1;
                if !values.iter().any(|v| v == value) {
                    values.push(value.to_string());
                }
            }
            None => self
                .entries
                .push((key.to_string(), vec![value.to_string()])),
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.position(key).map(|i| self.entries.remove(i).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A node of the game tree.
///
/// `board`, `moves_made` and `is_main_line` are filled in by
/// [`crate::tree::GameTree::simulate`]; format readers only touch
/// `properties` and the links.
#[derive(Clone, Debug, Default)]
pub struct Node {
    pub properties: Properties,
    /// Children in branch order; the first continues this node's line.
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
    /// Position after this node's properties were applied.
    pub board: Option<Board>,
    /// Moves played on the path from the root, passes included.
    pub moves_made: usize,
    pub is_main_line: bool,
}

impl Node {
    pub fn new(parent: Option<NodeId>) -> Self {
        Self {
            parent,
            ..Self::default()
        }
    }

    /// Store free text under `key` as its only value, escaped. Empty text
    /// removes the key.
    pub fn commit_text(&mut self, key: &str, text: &str) {
        let safe = escape_text(text);
        if safe.is_empty() {
            self.properties.remove(key);
        } else {
            self.properties.set(key, vec![safe]);
        }
    }

    /// Append a value that needs no escaping (coordinates, numbers).
    pub fn add_value(&mut self, key: &str, value: impl ToString) {
        self.properties.add(key, &value.to_string());
    }

    /// Make `value` the only value of `key`.
    pub fn set_value(&mut self, key: &str, value: impl ToString) {
        self.properties.set(key, vec![value.to_string()]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("plain"), "plain");
        assert_eq!(escape_text("a]b"), "a\\]b");
        assert_eq!(escape_text("C:\\go"), "C:\\\\go");
        assert_eq!(escape_text("[x]"), "[x\\]");
        assert_eq!(escape_text(""), "");
    }

    #[test]
    fn test_insertion_order_kept() {
        let mut props = Properties::new();
        props.add("SZ", "19");
        props.add("PB", "Honinbo");
        props.add("FF", "4");
        props.set("SZ", vec!["9".into()]);
        let keys: Vec<&str> = props.keys().collect();
        assert_eq!(keys, ["SZ", "PB", "FF"]);
        assert_eq!(props.first("SZ"), Some("9"));
    }

    #[test]
    fn test_add_deduplicates() {
        let mut props = Properties::new();
        props.add("AB", "pd");
        props.add("AB", "dp");
        props.add("AB", "pd");
        assert_eq!(props.get("AB").unwrap(), ["pd", "dp"]);
    }

    #[test]
    fn test_set_empty_removes_key() {
        let mut props = Properties::new();
        props.add("C", "comment");
        props.set("C", Vec::new());
        assert!(!props.contains_key("C"));
        assert!(props.is_empty());

        props.set("GN", Vec::new());
        assert_eq!(props.len(), 0);
    }

    #[test]
    fn test_set_deduplicates() {
        let mut props = Properties::new();
        props.set("AW", vec!["aa".into(), "bb".into(), "aa".into()]);
        assert_eq!(props.get("AW").unwrap(), ["aa", "bb"]);
    }

    #[test]
    fn test_commit_text() {
        let mut node = Node::new(None);
        node.commit_text("PB", "Lee]Sedol");
        assert_eq!(node.properties.first("PB"), Some("Lee\\]Sedol"));
        node.commit_text("PB", "");
        assert!(!node.properties.contains_key("PB"));
    }

    #[test]
    fn test_set_value_replaces() {
        let mut node = Node::new(Some(0));
        node.add_value("KM", 6.5);
        node.add_value("KM", 7.5);
        node.set_value("KM", 0.5);
        assert_eq!(node.properties.get("KM").unwrap(), ["0.5"]);
        assert_eq!(node.parent, Some(0));
    }

    #[test]
    fn test_empty_string_value_is_kept() {
        // A pass is written as an empty value, which is still a value.
        let mut node = Node::new(None);
        node.set_value("B", "");
        assert_eq!(node.properties.get("B").unwrap(), [""]);
    }
}

//! Core types used throughout the project.

use indexmap::IndexMap;
use serde::{
    Deserialize,
    Serialize,
};

/// Separator between the relative file path and the property name of a table key.
pub const KEY_SEPARATOR: &str = " | ";

/// A single localizable message found in source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEntry {
    pub message: String,
    /// Documentation for translators.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MessageEntry {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), description: None }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Insertion-ordered mapping from `"<relative path> | <identifier>"` to a message.
///
/// Iteration order is the order entries were collected in, and is kept when
/// serializing so that generated locale files diff cleanly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringTable {
    entries: IndexMap<String, MessageEntry>,
}

impl StringTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the composite key for a property declared in `relative_path`.
    #[must_use]
    pub fn key_for(relative_path: &str, property: &str) -> String {
        format!("{relative_path}{KEY_SEPARATOR}{property}")
    }

    /// Inserts an entry, returning the previous one when the key was already present.
    pub fn insert(&mut self, key: impl Into<String>, entry: MessageEntry) -> Option<MessageEntry> {
        self.entries.insert(key.into(), entry)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&MessageEntry> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &MessageEntry)> {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.entries.keys()
    }
}

impl FromIterator<(String, MessageEntry)> for StringTable {
    fn from_iter<T: IntoIterator<Item = (String, MessageEntry)>>(iter: T) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a StringTable {
    type Item = (&'a String, &'a MessageEntry);
    type IntoIter = indexmap::map::Iter<'a, String, MessageEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_key_for() {
        assert_that!(
            StringTable::key_for("lighthouse-core/audits/metrics.js", "title"),
            eq("lighthouse-core/audits/metrics.js | title")
        );
    }

    #[rstest]
    fn test_insertion_order_is_kept() {
        let mut table = StringTable::new();
        table.insert("b | second", MessageEntry::new("2"));
        table.insert("a | first", MessageEntry::new("1"));
        table.insert("c | third", MessageEntry::new("3"));

        let keys: Vec<&str> = table.keys().map(String::as_str).collect();
        assert_that!(keys, elements_are![eq(&"b | second"), eq(&"a | first"), eq(&"c | third")]);
    }

    #[rstest]
    #[case::with_description(
        MessageEntry::new("Title").with_description("Shown as a heading"),
        r#"{"message":"Title","description":"Shown as a heading"}"#
    )]
    #[case::without_description(MessageEntry::new("Title"), r#"{"message":"Title"}"#)]
    fn test_entry_serialization(#[case] entry: MessageEntry, #[case] expected: &str) {
        assert_that!(serde_json::to_string(&entry).unwrap(), eq(expected));
    }

    #[rstest]
    fn test_table_serializes_as_flat_object() {
        let table: StringTable = [
            ("z.js | b".to_string(), MessageEntry::new("B")),
            ("a.js | a".to_string(), MessageEntry::new("A")),
        ]
        .into_iter()
        .collect();

        let json = serde_json::to_string(&table).unwrap();
        assert_that!(json, eq(r#"{"z.js | b":{"message":"B"},"a.js | a":{"message":"A"}}"#));
    }
}

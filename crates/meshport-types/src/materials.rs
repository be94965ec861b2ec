//! Per-object material slot bindings.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A mapping from object name to its ordered material slot names.
///
/// Built once per scene traversal before export and discarded afterwards.
/// Slot order follows the host's slot indices; the first entry is treated
/// as "the" material of an object by the naive tagging pass.
///
/// # Example
///
/// ```
/// use meshport_types::MaterialTable;
///
/// let mut table = MaterialTable::new();
/// table.insert("Cube", vec!["Red".to_string(), "Trim".to_string()]);
/// table.push_slot("Sphere", "Blue");
///
/// assert_eq!(table.first("Cube"), Some("Red"));
/// assert_eq!(table.slots("Sphere").map(|slots| slots.len()), Some(1));
/// assert_eq!(table.first("Missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MaterialTable {
    bindings: HashMap<String, Vec<String>>,
}

impl MaterialTable {
    /// Create an empty table.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind an object to its full, ordered slot list.
    ///
    /// Replaces any previous binding for the object. An empty list is a
    /// valid binding: it models an object with no material slots, which the
    /// tagging pass rejects with a typed error rather than a placeholder.
    pub fn insert(&mut self, object: impl Into<String>, materials: Vec<String>) {
        self.bindings.insert(object.into(), materials);
    }

    /// Append one material to an object's slot list, creating it if needed.
    pub fn push_slot(&mut self, object: impl Into<String>, material: impl Into<String>) {
        self.bindings
            .entry(object.into())
            .or_default()
            .push(material.into());
    }

    /// The ordered slot names bound to an object, if it has an entry.
    #[must_use]
    pub fn slots(&self, object: &str) -> Option<&[String]> {
        self.bindings.get(object).map(Vec::as_slice)
    }

    /// The first slot's material name, if the object has one.
    #[must_use]
    pub fn first(&self, object: &str) -> Option<&str> {
        self.bindings
            .get(object)
            .and_then(|slots| slots.first())
            .map(String::as_str)
    }

    /// Whether the object has an entry (possibly with zero slots).
    #[inline]
    #[must_use]
    pub fn contains(&self, object: &str) -> bool {
        self.bindings.contains_key(object)
    }

    /// Number of bound objects.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no objects are bound.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Vec<String>)> for MaterialTable {
    fn from_iter<T: IntoIterator<Item = (K, Vec<String>)>>(iter: T) -> Self {
        Self {
            bindings: iter
                .into_iter()
                .map(|(object, materials)| (object.into(), materials))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_replaces_previous_binding() {
        let mut table = MaterialTable::new();
        table.insert("Cube", vec!["Old".to_string()]);
        table.insert("Cube", vec!["New".to_string()]);
        assert_eq!(table.first("Cube"), Some("New"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn push_slot_preserves_order() {
        let mut table = MaterialTable::new();
        table.push_slot("Cube", "Base");
        table.push_slot("Cube", "Trim");
        assert_eq!(
            table.slots("Cube"),
            Some(&["Base".to_string(), "Trim".to_string()][..])
        );
        assert_eq!(table.first("Cube"), Some("Base"));
    }

    #[test]
    fn empty_binding_has_entry_but_no_first() {
        let mut table = MaterialTable::new();
        table.insert("Hull", Vec::new());
        assert!(table.contains("Hull"));
        assert_eq!(table.first("Hull"), None);
    }

    #[test]
    fn from_iterator() {
        let table: MaterialTable = [
            ("A", vec!["Red".to_string()]),
            ("B", vec!["Blue".to_string()]),
        ]
        .into_iter()
        .collect();
        assert_eq!(table.first("A"), Some("Red"));
        assert_eq!(table.first("B"), Some("Blue"));
    }
}

//! Lookup table from element id to element name.

use std::collections::HashMap;

use super::{ElementKind, SourceModel};

/// A named top-level element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeEntry {
    pub id: String,
    pub name: String,
    pub kind: ElementKind,
}

/// Table of the top-level named types of a model, in model order.
///
/// Built fresh for every generation request; only the top level of
/// `packagedElement` is scanned.
#[derive(Debug, Clone, Default)]
pub struct TypeNames {
    entries: Vec<TypeEntry>,
    index: HashMap<String, usize>,
}

impl TypeNames {
    pub fn from_model(model: &SourceModel) -> Self {
        let mut table = Self::default();

        for element in model.elements() {
            let kind = element.kind();
            if !kind.is_named_type() {
                log::debug!(
                    "Skipping packaged element {:?} with unsupported type",
                    element.id()
                );
                continue;
            }

            match (element.id(), element.name()) {
                (Some(id), Some(name)) => table.insert(TypeEntry {
                    id: id.to_string(),
                    name: name.to_string(),
                    kind,
                }),
                (id, _) => log::warn!("Skipping {} element without id or name: {:?}", kind, id),
            }
        }

        table
    }

    /// Insert an entry. A repeated id replaces the name and kind but keeps its position.
    pub fn insert(&mut self, entry: TypeEntry) {
        match self.index.get(&entry.id) {
            Some(&position) => self.entries[position] = entry,
            None => {
                self.index.insert(entry.id.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&TypeEntry> {
        self.index.get(id).map(|&position| &self.entries[position])
    }

    /// Resolve an id to its display name
    pub fn name_of(&self, id: &str) -> Option<&str> {
        self.get(id).map(|entry| entry.name.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<TypeEntry> for TypeNames {
    fn from_iter<I: IntoIterator<Item = TypeEntry>>(iter: I) -> Self {
        let mut table = Self::default();
        for entry in iter {
            table.insert(entry);
        }
        table
    }
}

//! Type registry - the ordered roster of known type names

use crate::types::BASE_TYPES;

/// Ordered collection of unique type names
///
/// Order is insertion order and drives both the grid layout and the
/// ordering of calculator groups. Removing a type here does not touch
/// the matrix; use [`crate::TypeChart::remove_type`] for the cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRegistry {
    types: Vec<String>,
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::with_base_types()
    }
}

impl TypeRegistry {
    /// Create a registry holding no types
    pub fn empty() -> Self {
        TypeRegistry { types: Vec::new() }
    }

    /// Create a registry holding the base roster
    pub fn with_base_types() -> Self {
        TypeRegistry {
            types: BASE_TYPES.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Append a type. Surrounding whitespace is trimmed.
    ///
    /// Returns false (and changes nothing) if the name is blank or already present.
    pub fn add(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return false;
        }
        self.types.push(name.to_string());
        true
    }

    /// Remove a type. Returns false if it was not present.
    pub fn remove(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(idx) => {
                self.types.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.iter().any(|t| t == name)
    }

    /// Index of a type in registry order
    pub fn position(&self, name: &str) -> Option<usize> {
        self.types.iter().position(|t| t == name)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.types.get(index).map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.types
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Revert to the base roster, dropping every user-added type
    pub fn reset_to_base(&mut self) {
        *self = Self::with_base_types();
    }
}

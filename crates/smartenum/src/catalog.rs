//! The per-type instance catalog shared by both registries.
//!
//! A catalog is append-only: instances are registered once, in declaration
//! order, and indexed by exact name, lowercased name and value. The exact-name
//! index rejects duplicates; the other two indexes keep the first registrant.

use std::{collections::hash_map::Entry, fmt};

use rustc_hash::FxHashMap;

use crate::{
    Instance,
    error::{Error, Result},
};

/// Registration-ordered instances of one enum type plus derived indexes.
pub struct Catalog<E: Instance> {
    /// Enum type name used in error messages.
    type_name: &'static str,
    /// Every registered instance, in registration order.
    entries: Vec<&'static E>,
    /// Exact name index.
    by_name: FxHashMap<&'static str, &'static E>,
    /// Lowercased name index, first registrant wins.
    by_folded_name: FxHashMap<String, &'static E>,
    /// Value index, first registrant wins.
    by_value: FxHashMap<E::Value, &'static E>,
}

impl<E: Instance> Catalog<E> {
    /// Create an empty catalog for the named type.
    pub fn new(type_name: &'static str) -> Self {
        Self {
            type_name,
            entries: Vec::new(),
            by_name: FxHashMap::default(),
            by_folded_name: FxHashMap::default(),
            by_value: FxHashMap::default(),
        }
    }

    /// Name of the enum type this catalog belongs to.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Add an instance to every index.
    ///
    /// Fails without modifying the catalog if the name is empty or already
    /// taken by another instance.
    pub fn register(&mut self, instance: &'static E) -> Result<()> {
        let name = instance.name();
        if name.is_empty() {
            return Err(Error::EmptyName {
                type_name: self.type_name,
            });
        }
        match self.by_name.entry(name) {
            Entry::Occupied(_) => {
                return Err(Error::DuplicateName {
                    type_name: self.type_name,
                    name: name.to_string(),
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(instance);
            }
        }
        self.by_folded_name
            .entry(fold_case(name))
            .or_insert(instance);
        self.by_value
            .entry(instance.value().clone())
            .or_insert(instance);
        self.entries.push(instance);

        tracing::trace!(
            type_name = self.type_name,
            name,
            value = ?instance.value(),
            "registered instance"
        );
        Ok(())
    }

    /// Instances in registration order.
    pub fn entries(&self) -> &[&'static E] {
        &self.entries
    }

    /// Number of registered instances.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an instance by name. Empty names never match.
    pub fn find_name(&self, name: &str, ignore_case: bool) -> Option<&'static E> {
        if name.is_empty() {
            return None;
        }
        if ignore_case {
            self.by_folded_name.get(&fold_case(name)).copied()
        } else {
            self.by_name.get(name).copied()
        }
    }

    /// Look up the first-registered instance with `value`.
    pub fn find_value(&self, value: &E::Value) -> Option<&'static E> {
        self.by_value.get(value).copied()
    }

    /// Error reported when a name lookup misses.
    pub fn name_not_found(&self, name: &str) -> Error {
        Error::NameNotFound {
            type_name: self.type_name,
            name: name.to_string(),
        }
    }

    /// Error reported when a value lookup misses.
    pub fn value_not_found(&self, value: &E::Value) -> Error {
        Error::ValueNotFound {
            type_name: self.type_name,
            value: value.to_string(),
        }
    }
}

impl<E: Instance> fmt::Debug for Catalog<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("type_name", &self.type_name)
            .field(
                "entries",
                &self
                    .entries
                    .iter()
                    .map(|e| (e.name(), e.value()))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Case-fold a name for the case-insensitive index.
fn fold_case(name: &str) -> String {
    name.to_lowercase()
}

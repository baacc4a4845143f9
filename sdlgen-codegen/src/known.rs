//! Table of schema types with a known owning module.

use std::collections::BTreeMap;

/// Mapping from schema type name to the module that declares it.
///
/// The table is a value: widening returns a new table and leaves the
/// original untouched, so each generation stage sees a fixed snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownTypes {
    modules: BTreeMap<String, String>,
}

impl KnownTypes {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the owning module of `name`.
    #[must_use]
    pub fn module_of(&self, name: &str) -> Option<&str> {
        self.modules.get(name).map(String::as_str)
    }

    /// Returns true if `name` is known.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    /// Returns the number of known types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Returns true if no type is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Returns a new table with `entries` added; later entries win.
    #[must_use]
    pub fn widened<I, N, M>(&self, entries: I) -> Self
    where
        I: IntoIterator<Item = (N, M)>,
        N: Into<String>,
        M: Into<String>,
    {
        let mut modules = self.modules.clone();
        modules.extend(
            entries
                .into_iter()
                .map(|(name, module)| (name.into(), module.into())),
        );
        Self { modules }
    }

    /// Iterates over `(name, module)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.modules
            .iter()
            .map(|(name, module)| (name.as_str(), module.as_str()))
    }
}

impl<N: Into<String>, M: Into<String>> FromIterator<(N, M)> for KnownTypes {
    fn from_iter<I: IntoIterator<Item = (N, M)>>(iter: I) -> Self {
        Self::new().widened(iter)
    }
}

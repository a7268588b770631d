//! The registry abstraction consumed by the resolver.
//!
//! A registry maps dependency names to a [`RegistryEntry`]: the module path to
//! report and the version literals known for it. The resolver only ever reads
//! through the [`Registry`] trait; how entries get populated (a literal map in
//! tests, a JSON file, a downloaded document) is the loader's business.

use std::collections::BTreeMap;
use std::sync::Arc;

use modpin_util::errors::{ModpinError, ModpinResult};
use serde::{Deserialize, Serialize};

/// One registry entry: a module path and the versions published for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub module: String,
    #[serde(default)]
    pub versions: Vec<String>,
}

impl RegistryEntry {
    pub fn new(
        module: impl Into<String>,
        versions: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            module: module.into(),
            versions: versions.into_iter().map(Into::into).collect(),
        }
    }
}

/// Read access to a module registry.
///
/// Implementations must be safe to share between threads; lookups never
/// mutate the registry.
pub trait Registry: Send + Sync {
    /// Return the entry for `name`, or [`ModpinError::UnknownDependency`].
    fn get_versions(&self, name: &str) -> ModpinResult<&RegistryEntry>;
}

impl<R: Registry + ?Sized> Registry for &R {
    fn get_versions(&self, name: &str) -> ModpinResult<&RegistryEntry> {
        (**self).get_versions(name)
    }
}

impl<R: Registry + ?Sized> Registry for Box<R> {
    fn get_versions(&self, name: &str) -> ModpinResult<&RegistryEntry> {
        (**self).get_versions(name)
    }
}

impl<R: Registry + ?Sized> Registry for Arc<R> {
    fn get_versions(&self, name: &str) -> ModpinResult<&RegistryEntry> {
        (**self).get_versions(name)
    }
}

/// A registry held entirely in memory, keyed by dependency name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryRegistry {
    entries: BTreeMap<String, RegistryEntry>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, handy for literal registries.
    pub fn with_entry(mut self, name: impl Into<String>, entry: RegistryEntry) -> Self {
        self.insert(name, entry);
        self
    }

    /// Insert or replace the entry for `name`.
    pub fn insert(&mut self, name: impl Into<String>, entry: RegistryEntry) {
        self.entries.insert(name.into(), entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &BTreeMap<String, RegistryEntry> {
        &self.entries
    }

    pub fn into_entries(self) -> BTreeMap<String, RegistryEntry> {
        self.entries
    }
}

impl Registry for MemoryRegistry {
    fn get_versions(&self, name: &str) -> ModpinResult<&RegistryEntry> {
        self.entries
            .get(name)
            .ok_or_else(|| ModpinError::UnknownDependency {
                name: name.to_string(),
            })
    }
}

impl From<BTreeMap<String, RegistryEntry>> for MemoryRegistry {
    fn from(entries: BTreeMap<String, RegistryEntry>) -> Self {
        Self { entries }
    }
}

impl FromIterator<(String, RegistryEntry)> for MemoryRegistry {
    fn from_iter<I: IntoIterator<Item = (String, RegistryEntry)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

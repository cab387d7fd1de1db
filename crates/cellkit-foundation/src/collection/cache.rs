use crate::collections::map::IndexMap;
use crate::{ComponentRef, IndexPath};
use std::fmt;

/// Components materialized during the current render pass, keyed by index path.
///
/// Iteration follows materialization order. Entries never outlive the pass:
/// the owning engine clears the cache at the start of every render, so a
/// caller holding on to an entry across renders keeps a component the
/// container no longer shows.
#[derive(Default)]
pub struct MaterializationCache {
    entries: IndexMap<IndexPath, ComponentRef>,
}

impl MaterializationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index_path: &IndexPath) -> Option<&ComponentRef> {
        self.entries.get(index_path)
    }

    /// Stores `component` for `index_path`, returning the entry it replaced.
    pub fn insert(
        &mut self,
        index_path: IndexPath,
        component: ComponentRef,
    ) -> Option<ComponentRef> {
        self.entries.insert(index_path, component)
    }

    pub fn contains(&self, index_path: &IndexPath) -> bool {
        self.entries.contains_key(index_path)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index_paths(&self) -> impl Iterator<Item = IndexPath> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (IndexPath, &ComponentRef)> + '_ {
        self.entries.iter().map(|(index_path, component)| (*index_path, component))
    }
}

impl fmt::Debug for MaterializationCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaterializationCache")
            .field("index_paths", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
#[path = "../tests/cache_tests.rs"]
mod tests;

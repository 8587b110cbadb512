//! Ordered fallback chains over property maps.
//!
//! A chain is a list of optional sources evaluated first-match-wins for each
//! property. Empty values count as unset and fall through to the next source.

use std::collections::BTreeSet;

use crate::types::PropertyMap;

/// An ordered list of property sources, highest precedence first.
#[derive(Debug, Clone, Default)]
pub struct FallbackChain<'a> {
    sources: Vec<Option<&'a PropertyMap>>,
}

impl<'a> FallbackChain<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source with lower precedence than every source added so far.
    pub fn then(mut self, source: Option<&'a PropertyMap>) -> Self {
        self.sources.push(source);
        self
    }

    /// The first non-empty value for `property`.
    pub fn resolve(&self, property: &str) -> Option<&'a str> {
        self.sources
            .iter()
            .flatten()
            .copied()
            .filter_map(|source| source.get(property))
            .map(String::as_str)
            .find(|value| !value.is_empty())
    }

    /// Every property name defined by any source.
    pub fn property_names(&self) -> BTreeSet<&'a str> {
        self.sources
            .iter()
            .flatten()
            .copied()
            .flat_map(|source| source.keys().map(String::as_str))
            .collect()
    }

    /// Resolve every property named by any source.
    pub fn flatten(&self) -> PropertyMap {
        self.flatten_names(self.property_names())
    }

    /// Resolve the given property names, dropping those with no value.
    pub fn flatten_names<'n>(&self, names: impl IntoIterator<Item = &'n str>) -> PropertyMap {
        names
            .into_iter()
            .filter_map(|name| {
                self.resolve(name)
                    .map(|value| (name.to_string(), value.to_string()))
            })
            .collect()
    }
}

//! Flattening a partial theme into complete per-element properties.
//!
//! For an element `E` in state `S`, each property takes the first non-empty
//! value from:
//!
//! 1. the theme's `E` / `S`
//! 2. the theme's `default` / `S` (and `default` / stateless when `S` is a
//!    pseudo-class)
//! 3. the schema's `E` / `S`
//! 4. the schema's `default` / stateless
//!
//! The stateless block takes property names from all four sources. A
//! pseudo-class block only carries properties some state-specific source
//! names; the rest cascade from the stateless block in the browser.
//!
//! The `default` element only ever produces a stateless block, built from the
//! theme's and then the schema's `default` / stateless values.

use std::collections::BTreeSet;

use serde::Serialize;
use simhost_common::{
    properties_for, FallbackChain, PropertyMap, StateMap, ThemeProperties, DEFAULT_ELEMENT,
    STATELESS,
};

use crate::schema::ThemeSchema;

/// One themed element with its final properties per state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedElement {
    pub name: String,
    pub selector: String,
    pub states: StateMap,
}

/// A fully resolved theme, in schema element order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedTheme {
    elements: Vec<ResolvedElement>,
}

impl ResolvedTheme {
    pub fn elements(&self) -> &[ResolvedElement] {
        &self.elements
    }

    pub fn get(&self, element: &str) -> Option<&ResolvedElement> {
        self.elements.iter().find(|e| e.name == element)
    }

    pub fn properties(&self, element: &str, state: &str) -> Option<&PropertyMap> {
        self.get(element).and_then(|e| e.states.get(state))
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// Resolve `theme` (if any) against the schema's selectors and defaults.
pub fn resolve_theme(schema: &dyn ThemeSchema, theme: Option<&ThemeProperties>) -> ResolvedTheme {
    let empty = ThemeProperties::new();
    let theme = theme.unwrap_or(&empty);
    let builtin = schema.default_properties();

    let elements = schema
        .element_selectors()
        .iter()
        .filter_map(|(name, selector)| {
            let states = if name == DEFAULT_ELEMENT {
                resolve_default_element(theme, builtin)
            } else {
                resolve_element(name, theme, builtin)
            };

            if states.is_empty() {
                tracing::debug!(element = %name, "no properties apply, skipping");
                return None;
            }

            Some(ResolvedElement {
                name: name.clone(),
                selector: selector.clone(),
                states,
            })
        })
        .collect();

    ResolvedTheme { elements }
}

fn resolve_default_element(theme: &ThemeProperties, builtin: &ThemeProperties) -> StateMap {
    let props = FallbackChain::new()
        .then(properties_for(theme, DEFAULT_ELEMENT, STATELESS))
        .then(properties_for(builtin, DEFAULT_ELEMENT, STATELESS))
        .flatten();

    let mut states = StateMap::new();
    if !props.is_empty() {
        states.insert(STATELESS.to_string(), props);
    }
    states
}

fn resolve_element(element: &str, theme: &ThemeProperties, builtin: &ThemeProperties) -> StateMap {
    let theme_default_stateless = properties_for(theme, DEFAULT_ELEMENT, STATELESS);
    let builtin_default_stateless = properties_for(builtin, DEFAULT_ELEMENT, STATELESS);

    let mut states = StateMap::new();
    for state in state_names(element, theme, builtin) {
        let own = properties_for(theme, element, state);
        let theme_default = properties_for(theme, DEFAULT_ELEMENT, state);
        let schema_own = properties_for(builtin, element, state);

        let props = if state == STATELESS {
            FallbackChain::new()
                .then(own)
                .then(theme_default)
                .then(schema_own)
                .then(builtin_default_stateless)
                .flatten()
        } else {
            let names = FallbackChain::new()
                .then(own)
                .then(theme_default)
                .then(schema_own)
                .property_names();

            FallbackChain::new()
                .then(own)
                .then(theme_default)
                .then(theme_default_stateless)
                .then(schema_own)
                .then(builtin_default_stateless)
                .flatten_names(names)
        };

        if !props.is_empty() {
            states.insert(state.to_string(), props);
        }
    }
    states
}

/// Stateless first, then every state any relevant source mentions.
fn state_names<'a>(
    element: &str,
    theme: &'a ThemeProperties,
    builtin: &'a ThemeProperties,
) -> BTreeSet<&'a str> {
    let mut names = BTreeSet::from([STATELESS]);
    for states in [
        theme.get(element),
        theme.get(DEFAULT_ELEMENT),
        builtin.get(element),
    ]
    .into_iter()
    .flatten()
    {
        names.extend(states.keys().map(String::as_str));
    }
    names
}

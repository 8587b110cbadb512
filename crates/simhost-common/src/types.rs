//! Theme property tables shared by the theme resolver and the delivery filter.
//!
//! Both built-in defaults and user overrides use the same nested shape:
//! element name → state name → CSS property name → value.

use std::collections::BTreeMap;

/// CSS property name → value.
pub type PropertyMap = BTreeMap<String, String>;

/// State name (`""`, `active`, `focus`, `hover`) → properties.
pub type StateMap = BTreeMap<String, PropertyMap>;

/// Element name → states.
pub type ThemeProperties = BTreeMap<String, StateMap>;

/// The pseudo-element whose values act as fallbacks for every other element.
pub const DEFAULT_ELEMENT: &str = "default";

/// The stateless (no pseudo-class) state.
pub const STATELESS: &str = "";

/// Interaction states, stateless first.
pub const ELEMENT_STATES: [&str; 4] = [STATELESS, "active", "focus", "hover"];

/// Look up the property map for `element` in `state`, if any.
pub fn properties_for<'a>(
    table: &'a ThemeProperties,
    element: &str,
    state: &str,
) -> Option<&'a PropertyMap> {
    table.get(element).and_then(|states| states.get(state))
}

/// Build a property table from nested literal slices.
pub fn theme_table(entries: &[(&str, &[(&str, &[(&str, &str)])])]) -> ThemeProperties {
    entries
        .iter()
        .map(|(element, states)| {
            let states = states
                .iter()
                .map(|(state, props)| {
                    let props = props
                        .iter()
                        .map(|(name, value)| (name.to_string(), value.to_string()))
                        .collect();
                    (state.to_string(), props)
                })
                .collect();
            (element.to_string(), states)
        })
        .collect()
}

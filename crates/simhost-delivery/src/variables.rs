//! CSS custom property resolution.
//!
//! The host stylesheet refers to theme values as `var(--element[-state]-property)`.
//! Those references are resolved ahead of time against a built-in table
//! merged with an optional custom table, then substituted literally.

use std::collections::BTreeSet;

use simhost_common::{
    properties_for, theme_table, FallbackChain, PropertyMap, StateMap, ThemeProperties,
    DEFAULT_ELEMENT, ELEMENT_STATES, STATELESS,
};

use crate::stage::LiteralReplace;

/// Built-in variable values.
pub fn builtin_variables() -> ThemeProperties {
    theme_table(&[
        (
            DEFAULT_ELEMENT,
            &[
                (
                    STATELESS,
                    &[
                        ("font-family", "segoe ui"),
                        ("font-size", "16px"),
                        ("font-weight", "normal"),
                        ("color", "black"),
                        ("background", ""),
                        ("border", ""),
                    ],
                ),
                ("active", &[]),
                ("focus", &[]),
                ("hover", &[]),
            ],
        ),
        ("input", &[]),
        ("button", &[]),
        ("label", &[]),
        ("paragraph", &[]),
        ("value", &[]),
        (
            "caption",
            &[(
                STATELESS,
                &[
                    ("font-weight", "bold"),
                    ("color", "rgb(204,204,204)"),
                    ("background", "black"),
                ],
            )],
        ),
        (
            "panel",
            &[(
                STATELESS,
                &[
                    ("border", "solid 1px rgba(0,0,0,0.785)"),
                    ("background", "rgba(255,255,255,0.97)"),
                ],
            )],
        ),
    ])
}

/// Fully resolved variable values for every element, state and property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssVariableTable {
    values: ThemeProperties,
}

impl CssVariableTable {
    /// Resolve every variable from `builtin` and an optional `custom` table.
    ///
    /// Elements are those named by either table; properties are those either
    /// table lists for the stateless `default` element. Values nobody
    /// provides resolve to the empty string.
    pub fn resolve(builtin: &ThemeProperties, custom: Option<&ThemeProperties>) -> Self {
        let empty = ThemeProperties::new();
        let custom = custom.unwrap_or(&empty);

        let elements: BTreeSet<&str> = builtin
            .keys()
            .chain(custom.keys())
            .map(String::as_str)
            .collect();

        let properties: BTreeSet<&str> = FallbackChain::new()
            .then(properties_for(custom, DEFAULT_ELEMENT, STATELESS))
            .then(properties_for(builtin, DEFAULT_ELEMENT, STATELESS))
            .property_names();

        let values = elements
            .into_iter()
            .map(|element| {
                let states: StateMap = ELEMENT_STATES
                    .iter()
                    .map(|&state| {
                        let chain = variable_chain(builtin, custom, element, state);
                        let props: PropertyMap = properties
                            .iter()
                            .map(|&name| {
                                let value = chain.resolve(name).unwrap_or_default();
                                (name.to_string(), value.to_string())
                            })
                            .collect();
                        (state.to_string(), props)
                    })
                    .collect();
                (element.to_string(), states)
            })
            .collect();

        Self { values }
    }

    /// The built-in table with no customisation.
    pub fn builtin() -> Self {
        Self::resolve(&builtin_variables(), None)
    }

    pub fn value(&self, element: &str, state: &str, property: &str) -> Option<&str> {
        properties_for(&self.values, element, state)
            .and_then(|props| props.get(property))
            .map(String::as_str)
    }

    pub fn values(&self) -> &ThemeProperties {
        &self.values
    }

    /// `--element[-state]-property`.
    pub fn variable_name(element: &str, state: &str, property: &str) -> String {
        if state.is_empty() {
            format!("--{element}-{property}")
        } else {
            format!("--{element}-{state}-{property}")
        }
    }

    /// Every `var(...)` reference paired with its replacement.
    pub fn substitutions(&self) -> Vec<(String, String)> {
        self.values
            .iter()
            .flat_map(|(element, states)| {
                states.iter().flat_map(move |(state, props)| {
                    props.iter().map(move |(property, value)| {
                        let name = Self::variable_name(element, state, property);
                        (format!("var({name})"), value.clone())
                    })
                })
            })
            .collect()
    }

    /// A stage replacing every reference with its value.
    pub fn substitution_stage(&self) -> LiteralReplace {
        self.substitutions()
            .into_iter()
            .fold(LiteralReplace::new(), |stage, (reference, value)| {
                stage.rule(reference, value)
            })
    }
}

/// Sources for `element` in `state`, highest precedence first.
fn variable_chain<'a>(
    builtin: &'a ThemeProperties,
    custom: &'a ThemeProperties,
    element: &str,
    state: &str,
) -> FallbackChain<'a> {
    let custom_default = properties_for(custom, DEFAULT_ELEMENT, state);
    let custom_default_stateless = properties_for(custom, DEFAULT_ELEMENT, STATELESS);
    let builtin_default = properties_for(builtin, DEFAULT_ELEMENT, state);
    let builtin_default_stateless = properties_for(builtin, DEFAULT_ELEMENT, STATELESS);

    if element == DEFAULT_ELEMENT {
        return if state == STATELESS {
            FallbackChain::new()
                .then(custom_default_stateless)
                .then(builtin_default_stateless)
        } else {
            FallbackChain::new()
                .then(custom_default)
                .then(custom_default_stateless)
                .then(builtin_default)
                .then(builtin_default_stateless)
        };
    }

    let custom_own = properties_for(custom, element, state);
    let builtin_own = properties_for(builtin, element, state);

    if state == STATELESS {
        return FallbackChain::new()
            .then(custom_own)
            .then(custom_default_stateless)
            .then(builtin_own)
            .then(builtin_default_stateless);
    }

    FallbackChain::new()
        .then(custom_own)
        .then(properties_for(custom, element, STATELESS))
        .then(custom_default)
        .then(custom_default_stateless)
        .then(builtin_own)
        .then(properties_for(builtin, element, STATELESS))
        .then(builtin_default)
        .then(builtin_default_stateless)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::TextStage;

    fn hover_table(levels: &[(&str, &str, &str)]) -> ThemeProperties {
        let mut table = ThemeProperties::new();
        for (element, state, value) in levels {
            table
                .entry(element.to_string())
                .or_default()
                .entry(state.to_string())
                .or_default()
                .insert("color".to_string(), value.to_string());
        }
        table
    }

    #[test]
    fn builtin_defaults_resolve() {
        let table = CssVariableTable::builtin();
        assert_eq!(table.value("default", "", "font-family"), Some("segoe ui"));
        assert_eq!(table.value("caption", "", "color"), Some("rgb(204,204,204)"));
        assert_eq!(table.value("caption", "hover", "background"), Some("black"));
        assert_eq!(table.value("button", "hover", "color"), Some("black"));
        assert_eq!(table.value("panel", "", "font-size"), Some("16px"));
    }

    #[test]
    fn unresolved_values_are_empty_strings() {
        let table = CssVariableTable::builtin();
        assert_eq!(table.value("button", "", "background"), Some(""));
        assert_eq!(table.value("default", "focus", "border"), Some(""));
    }

    #[test]
    fn every_element_gets_every_state() {
        let table = CssVariableTable::builtin();
        let elements = [
            "default", "input", "button", "label", "paragraph", "value", "caption", "panel",
        ];
        for element in elements {
            for state in ELEMENT_STATES {
                assert!(
                    table.value(element, state, "font-weight").is_some(),
                    "{element}/{state}"
                );
            }
        }
        // 8 elements x 4 states x 6 properties
        assert_eq!(table.substitutions().len(), 192);
    }

    #[test]
    fn button_hover_follows_the_full_chain() {
        let custom_levels = [
            ("button", "hover", "c-button-hover"),
            ("button", "", "c-button"),
            ("default", "hover", "c-default-hover"),
            ("default", "", "c-default"),
        ];
        let builtin_levels = [
            ("button", "hover", "b-button-hover"),
            ("button", "", "b-button"),
            ("default", "hover", "b-default-hover"),
            ("default", "", "b-default"),
        ];
        let expected: Vec<&str> = custom_levels
            .iter()
            .chain(builtin_levels.iter())
            .map(|(_, _, value)| *value)
            .collect();

        // Drop levels from the top one at a time; the next one must show through.
        for skip in 0..8 {
            let custom: Vec<_> = custom_levels.iter().skip(skip).copied().collect();
            let builtin: Vec<_> = builtin_levels
                .iter()
                .skip(skip.saturating_sub(4))
                .copied()
                .collect();
            // The element itself stays known once its own levels are gone.
            let mut builtin = hover_table(&builtin);
            builtin.entry("button".into()).or_default();
            let table = CssVariableTable::resolve(&builtin, Some(&hover_table(&custom)));
            assert_eq!(
                table.value("button", "hover", "color"),
                Some(expected[skip]),
                "after removing {skip} levels"
            );
        }
    }

    #[test]
    fn empty_custom_value_falls_through() {
        let builtin = builtin_variables();
        let custom = hover_table(&[("button", "hover", "")]);
        let table = CssVariableTable::resolve(&builtin, Some(&custom));
        assert_eq!(table.value("button", "hover", "color"), Some("black"));
    }

    #[test]
    fn default_element_ignores_other_elements() {
        let builtin = builtin_variables();
        let custom = hover_table(&[("button", "", "red"), ("default", "hover", "blue")]);
        let table = CssVariableTable::resolve(&builtin, Some(&custom));
        assert_eq!(table.value("default", "", "color"), Some("black"));
        assert_eq!(table.value("default", "hover", "color"), Some("blue"));
        assert_eq!(table.value("button", "hover", "color"), Some("red"));
    }

    #[test]
    fn custom_elements_and_properties_join_the_table() {
        let builtin = builtin_variables();
        let mut custom = hover_table(&[("toolbar", "", "navy")]);
        custom
            .entry("default".into())
            .or_default()
            .entry("".into())
            .or_default()
            .insert("outline".into(), "none".into());

        let table = CssVariableTable::resolve(&builtin, Some(&custom));
        assert_eq!(table.value("toolbar", "", "color"), Some("navy"));
        assert_eq!(table.value("toolbar", "", "font-family"), Some("segoe ui"));
        assert_eq!(table.value("panel", "focus", "outline"), Some("none"));
    }

    #[test]
    fn variable_names_omit_stateless_segment() {
        assert_eq!(CssVariableTable::variable_name("button", "", "color"), "--button-color");
        assert_eq!(
            CssVariableTable::variable_name("button", "hover", "color"),
            "--button-hover-color"
        );
    }

    #[test]
    fn substitution_stage_replaces_references() {
        let mut stage = CssVariableTable::builtin().substitution_stage();
        let mut css = stage.feed(".c { color: var(--caption-color); background: var(--default-background); }");
        css.push_str(&stage.finish());
        assert_eq!(css, ".c { color: rgb(204,204,204); background: ; }");
    }

    #[test]
    fn unknown_references_are_left_alone() {
        let mut stage = CssVariableTable::builtin().substitution_stage();
        let mut css = stage.feed("a { color: var(--nope-color); }");
        css.push_str(&stage.finish());
        assert_eq!(css, "a { color: var(--nope-color); }");
    }
}
